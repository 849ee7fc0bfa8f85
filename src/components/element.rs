//! Element Tree
//!
//! Declarative element descriptions produced by components and painted by
//! the GPUI views. Kept free of GPUI types so components can be rendered
//! and inspected without a window.

/// Element kinds understood by the painter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Table,
    Thead,
    Tbody,
    Tr,
    Th,
    Td,
}

/// Element properties
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Props {
    /// Identity among siblings for diffing
    pub key: Option<usize>,
}

impl Props {
    /// Props carrying only a key
    pub fn keyed(key: usize) -> Self {
        Self { key: Some(key) }
    }
}

/// A tagged node with children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub tag: Tag,
    pub props: Props,
    pub children: Vec<Element>,
}

/// One element in a rendered tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    Node(Node),
    Text(String),
}

/// Build a node element
pub fn create_element(
    tag: Tag,
    props: Option<Props>,
    children: impl IntoIterator<Item = Element>,
) -> Element {
    Element::Node(Node {
        tag,
        props: props.unwrap_or_default(),
        children: children.into_iter().collect(),
    })
}

impl Element {
    /// Build a text element
    pub fn text(content: impl Into<String>) -> Self {
        Element::Text(content.into())
    }

    pub fn tag(&self) -> Option<Tag> {
        match self {
            Element::Node(node) => Some(node.tag),
            Element::Text(_) => None,
        }
    }

    pub fn key(&self) -> Option<usize> {
        match self {
            Element::Node(node) => node.props.key,
            Element::Text(_) => None,
        }
    }

    /// Direct children (empty for text)
    pub fn children(&self) -> &[Element] {
        match self {
            Element::Node(node) => &node.children,
            Element::Text(_) => &[],
        }
    }

    /// Concatenated text of this element and its descendants
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Element::Text(text) => out.push_str(text),
            Element::Node(node) => {
                for child in &node.children {
                    child.collect_text(out);
                }
            }
        }
    }

    /// First element with `tag`, searching self then descendants depth-first
    pub fn find(&self, tag: Tag) -> Option<&Element> {
        if self.tag() == Some(tag) {
            return Some(self);
        }
        self.children().iter().find_map(|child| child.find(tag))
    }

    /// All elements with `tag` in depth-first order
    pub fn find_all(&self, tag: Tag) -> Vec<&Element> {
        let mut found = Vec::new();
        self.collect_tagged(tag, &mut found);
        found
    }

    fn collect_tagged<'a>(&'a self, tag: Tag, found: &mut Vec<&'a Element>) {
        if self.tag() == Some(tag) {
            found.push(self);
        }
        for child in self.children() {
            child.collect_tagged(tag, found);
        }
    }
}

impl From<&str> for Element {
    fn from(text: &str) -> Self {
        Element::text(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Element {
        create_element(
            Tag::Tr,
            Some(Props::keyed(3)),
            [
                create_element(Tag::Td, None, [Element::from("a")]),
                create_element(Tag::Td, None, [Element::text("b")]),
            ],
        )
    }

    #[test]
    fn test_create_element_defaults_props() {
        let td = create_element(Tag::Td, None, Vec::new());
        assert_eq!(td.tag(), Some(Tag::Td));
        assert_eq!(td.key(), None);
        assert!(td.children().is_empty());
    }

    #[test]
    fn test_text_content_concatenates() {
        assert_eq!(sample().text_content(), "ab");
        assert_eq!(sample().key(), Some(3));
    }

    #[test]
    fn test_find_all_is_depth_first() {
        let tree = sample();
        let cells: Vec<String> = tree
            .find_all(Tag::Td)
            .iter()
            .map(|td| td.text_content())
            .collect();
        assert_eq!(cells, vec!["a", "b"]);
        assert!(tree.find(Tag::Th).is_none());
        assert_eq!(tree.find(Tag::Tr), Some(&tree));
    }
}

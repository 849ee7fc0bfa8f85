//! Element Painter
//!
//! Turns a component's element tree into GPUI elements styled with the
//! crate theme.

use gpui::{div, prelude::*, px, AnyElement, Div, FontWeight, SharedString};

use crate::components::element::{Element, Tag};
use crate::theme::{Colors, HEADER_HEIGHT, ROW_HEIGHT};

/// Paint an element tree
pub fn paint(element: &Element) -> AnyElement {
    let node = match element {
        Element::Text(text) => return SharedString::from(text.clone()).into_any_element(),
        Element::Node(node) => node,
    };

    let children = node.children.iter().map(paint);
    match node.tag {
        Tag::Table => div()
            .size_full()
            .flex()
            .flex_col()
            .bg(Colors::content_bg())
            .border_1()
            .border_color(Colors::border())
            .rounded_md()
            .overflow_hidden()
            .children(children)
            .into_any_element(),
        Tag::Thead => div()
            .w_full()
            .bg(Colors::table_header_bg())
            .children(children)
            .into_any_element(),
        Tag::Tbody if node.children.is_empty() => render_empty(),
        Tag::Tbody => div()
            .id("contact-rows")
            .flex_1()
            .overflow_y_scroll()
            .children(children)
            .into_any_element(),
        Tag::Tr => render_row(node.props.key).children(children).into_any_element(),
        Tag::Th => div()
            .flex_1()
            .px_3()
            .text_sm()
            .font_weight(FontWeight::MEDIUM)
            .text_color(Colors::text_primary())
            .children(children)
            .into_any_element(),
        Tag::Td => div()
            .flex_1()
            .px_3()
            .text_sm()
            .text_color(Colors::text_primary())
            .overflow_hidden()
            .children(children)
            .into_any_element(),
    }
}

/// Header rows carry no key; body rows alternate background by key
fn render_row(key: Option<usize>) -> Div {
    let row = div()
        .w_full()
        .flex()
        .items_center()
        .border_b_1()
        .border_color(Colors::border());

    match key {
        None => row.h(px(HEADER_HEIGHT)),
        Some(index) => {
            let bg = if index % 2 == 0 {
                Colors::content_bg()
            } else {
                Colors::table_row_alt()
            };
            row.h(px(ROW_HEIGHT))
                .bg(bg)
                .hover(|s| s.bg(Colors::table_row_hover()))
        }
    }
}

fn render_empty() -> AnyElement {
    div()
        .flex_1()
        .flex()
        .items_center()
        .justify_center()
        .py_4()
        .text_color(Colors::text_muted())
        .child("No contacts yet")
        .into_any_element()
}

//! ContactTable Component
//!
//! Table of contacts that grows as `addContacts` events arrive on the bus.

use std::rc::Rc;

use super::element::{create_element, Element, Props, Tag};
use super::lifecycle::{Component, StateCell};
use crate::domain::contact::Contact;
use crate::eventing::topics::ADD_CONTACTS;
use crate::eventing::{handler, EventBus, Handler, SubscriptionGuard};

/// Header labels, in column order
pub const HEADER_LABELS: [&str; 3] = ["Name", "Phone number", "Email"];

/// ContactTable state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactTableState {
    /// Contacts in arrival order
    pub contacts: Rc<[Contact]>,
}

impl Default for ContactTableState {
    fn default() -> Self {
        Self {
            contacts: Rc::from(Vec::new()),
        }
    }
}

/// One table cell holding `text`
pub fn cell(text: &str) -> Element {
    create_element(Tag::Td, None, [Element::text(text)])
}

/// Body row for the contact at `index`, keyed by that index
pub fn row(index: usize, contact: &Contact) -> Element {
    create_element(Tag::Tr, Some(Props::keyed(index)), contact.fields().map(cell))
}

/// Fixed header row
pub fn header() -> Element {
    let labels = HEADER_LABELS.map(|label| create_element(Tag::Th, None, [Element::text(label)]));
    create_element(Tag::Thead, None, [create_element(Tag::Tr, None, labels)])
}

/// Table body with one row per contact
pub fn body(contacts: &[Contact]) -> Element {
    create_element(
        Tag::Tbody,
        None,
        contacts.iter().enumerate().map(|(i, c)| row(i, c)),
    )
}

/// Contact table bound to an event bus
pub struct ContactTable {
    bus: Rc<EventBus<Contact>>,
    state: Rc<StateCell<ContactTableState>>,
    /// Created once per instance; the same reference is subscribed and unsubscribed
    on_add_contact: Handler<Contact>,
    subscription: Option<SubscriptionGuard<Contact>>,
}

impl ContactTable {
    pub fn new(bus: Rc<EventBus<Contact>>) -> Self {
        let state = Rc::new(StateCell::new(Self::initial_state()));

        let target = Rc::clone(&state);
        let on_add_contact = handler(move |contact: &Contact| {
            target.set_state(|s| {
                s.contacts = s.contacts.iter().cloned().chain([contact.clone()]).collect();
            });
            tracing::debug!(name = %contact.name, "contact added");
        });

        Self {
            bus,
            state,
            on_add_contact,
            subscription: None,
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.subscription.is_some()
    }

    /// Render version; changes whenever the state does
    pub fn version(&self) -> u64 {
        self.state.version()
    }

    /// Whether the state changed after render version `version`
    pub fn changed_since(&self, version: u64) -> bool {
        self.version() != version
    }

    pub fn len(&self) -> usize {
        self.state.get().contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Component for ContactTable {
    type State = ContactTableState;

    fn initial_state() -> Self::State {
        ContactTableState::default()
    }

    fn on_mount(&mut self) {
        if self.is_mounted() {
            tracing::warn!("contact table already mounted");
            return;
        }
        self.subscription = Some(
            self.bus
                .subscribe_scoped(ADD_CONTACTS, Rc::clone(&self.on_add_contact)),
        );
        tracing::info!(topic = ADD_CONTACTS, "contact table mounted");
    }

    fn on_unmount(&mut self) {
        if self.subscription.take().is_some() {
            tracing::info!(topic = ADD_CONTACTS, "contact table unmounted");
        }
    }

    fn render(&self) -> Element {
        let state = self.state.get();
        create_element(Tag::Table, None, [header(), body(&state.contacts)])
    }

    fn state(&self) -> Self::State {
        self.state.get().clone()
    }
}

impl std::fmt::Debug for ContactTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContactTable")
            .field("mounted", &self.is_mounted())
            .field("contacts", &self.len())
            .finish()
    }
}

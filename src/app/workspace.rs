//! Workspace - Main Shell with Event Pump
//!
//! The workspace is the window's root view. It hosts the contact table and
//! runs the event pump that publishes feed events on the bus.

use std::rc::Rc;

use gpui::{div, prelude::*, App, Context, Entity, IntoElement, Render, Window};

use crate::app::ContactBus;
use crate::domain::contact::Contact;
use crate::eventing::app_event::AppEvent;
use crate::eventing::topics::ADD_CONTACTS;
use crate::eventing::EventBus;
use crate::theme::Colors;
use crate::views::contact_table::ContactTableView;

/// Main workspace containing the application layout
pub struct Workspace {
    contacts: Entity<ContactTableView>,
}

impl Workspace {
    pub fn new(event_rx: flume::Receiver<AppEvent>, cx: &mut Context<Self>) -> Self {
        let bus = cx.global::<ContactBus>().0.clone();
        let contacts = cx.new(|cx| ContactTableView::new(bus.clone(), cx));

        Self::start_event_pump(event_rx, bus, contacts.clone(), cx);

        Self { contacts }
    }

    /// Start the event pump that dispatches feed events to the UI
    fn start_event_pump(
        event_rx: flume::Receiver<AppEvent>,
        bus: Rc<EventBus<Contact>>,
        contacts: Entity<ContactTableView>,
        cx: &mut Context<Self>,
    ) {
        cx.spawn(async move |_this, cx| {
            while let Ok(event) = event_rx.recv_async().await {
                let _ = cx.update(|cx: &mut App| {
                    dispatch_event(event, &bus);
                    // Single repaint point for everything published on the UI thread
                    contacts.update(cx, |view, cx| view.refresh(cx));
                });
            }
        })
        .detach();
    }
}

impl Render for Workspace {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .size_full()
            .flex()
            .flex_col()
            .bg(Colors::background())
            .child(self.contacts.clone())
    }
}

/// Dispatch an AppEvent on the UI thread
fn dispatch_event(event: AppEvent, bus: &EventBus<Contact>) {
    match event {
        AppEvent::ContactReceived(contact) => {
            bus.publish(ADD_CONTACTS, &contact);
        }
        AppEvent::FeedSkipped { line, reason } => {
            tracing::debug!(line, %reason, "Feed line skipped");
        }
        AppEvent::FeedFinished { accepted, skipped } => {
            tracing::info!(accepted, skipped, "Feed finished");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    use crate::eventing::{handler, Handler};

    type Recorded = Rc<RefCell<Vec<Contact>>>;

    fn recording_bus() -> (EventBus<Contact>, Recorded, Handler<Contact>) {
        let bus = EventBus::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_clone = seen.clone();
        let h = handler(move |c: &Contact| seen_clone.borrow_mut().push(c.clone()));
        bus.observe(ADD_CONTACTS).subscribe(&h);
        (bus, seen, h)
    }

    #[test]
    fn test_contact_event_published_on_bus() {
        let (bus, seen, _h) = recording_bus();
        dispatch_event(
            AppEvent::ContactReceived(Contact::new("Ann", "555", "a@x.com")),
            &bus,
        );
        assert_eq!(*seen.borrow(), vec![Contact::new("Ann", "555", "a@x.com")]);
    }

    #[test]
    fn test_feed_status_events_not_published() {
        let (bus, seen, _h) = recording_bus();
        dispatch_event(AppEvent::skipped(3, "not a contact"), &bus);
        dispatch_event(AppEvent::FeedFinished { accepted: 0, skipped: 1 }, &bus);
        assert!(seen.borrow().is_empty());
    }
}

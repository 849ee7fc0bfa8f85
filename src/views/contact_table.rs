//! ContactTableView - GPUI host for the ContactTable component
//!
//! Mounts the component when the view is created and unmounts it when the
//! entity is released. Dropping the view without a release still drops the
//! component's subscription guard.

use std::rc::Rc;

use gpui::{div, prelude::*, Context, FontWeight, IntoElement, Render, Window};

use crate::components::{Component, ContactTable};
use crate::domain::contact::Contact;
use crate::eventing::EventBus;
use crate::theme::Colors;
use crate::views::element_painter::paint;

pub struct ContactTableView {
    table: ContactTable,
    painted_version: u64,
}

impl ContactTableView {
    pub fn new(bus: Rc<EventBus<Contact>>, cx: &mut Context<Self>) -> Self {
        let mut table = ContactTable::new(bus);
        table.on_mount();

        cx.on_release(|this, _cx| this.table.on_unmount()).detach();

        Self {
            painted_version: table.version(),
            table,
        }
    }

    /// Re-render if the component state changed since the last paint
    ///
    /// Bus handlers only update component state; they cannot reach GPUI.
    /// Whoever publishes on the bus from the UI thread must call this
    /// afterwards. The workspace event pump does so after every event.
    pub fn refresh(&mut self, cx: &mut Context<Self>) {
        if self.table.changed_since(self.painted_version) {
            cx.notify();
        }
    }
}

impl Render for ContactTableView {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        self.painted_version = self.table.version();
        let count = self.table.len();
        let title = if count == 1 {
            "1 contact".to_string()
        } else {
            format!("{count} contacts")
        };

        div()
            .size_full()
            .flex()
            .flex_col()
            .p_4()
            .gap_4()
            .bg(Colors::background())
            .child(
                div()
                    .text_xl()
                    .font_weight(FontWeight::SEMIBOLD)
                    .text_color(Colors::text_secondary())
                    .child(title),
            )
            .child(
                div()
                    .flex_1()
                    .overflow_hidden()
                    .child(paint(&self.table.render())),
            )
    }
}

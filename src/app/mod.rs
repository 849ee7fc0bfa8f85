//! Application Layer
//!
//! Contains app initialization, window management and the workspace.

use std::rc::Rc;

use gpui::Global;

use crate::domain::contact::Contact;
use crate::eventing::EventBus;

pub mod application;
pub mod workspace;

/// The application-wide contact bus, installed as a GPUI global
pub struct ContactBus(pub Rc<EventBus<Contact>>);

impl Global for ContactBus {}

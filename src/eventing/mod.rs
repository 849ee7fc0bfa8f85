//! Eventing - Bus, Topics and Cross-Thread Events

pub mod app_event;
pub mod bus;
pub mod topics;

pub use bus::{handler, EventBus, Handler, SubscriptionGuard, Topic};

//! EventBus - Named-Topic Publish/Subscribe
//!
//! A single-threaded bus living on the UI thread. Handlers are invoked
//! synchronously, in subscription order, on the thread that publishes.
//! Handler identity is pointer identity of the shared closure, so the
//! exact `Handler` passed to `subscribe` must be passed to `unsubscribe`.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// A subscribed callback
pub type Handler<P> = Rc<dyn Fn(&P)>;

/// Wrap a closure as a `Handler`
pub fn handler<P>(f: impl Fn(&P) + 'static) -> Handler<P> {
    Rc::new(f)
}

/// Publish/subscribe bus keyed by topic name
pub struct EventBus<P> {
    topics: RefCell<HashMap<String, Vec<Handler<P>>>>,
}

impl<P> EventBus<P> {
    /// Create an empty bus
    pub fn new() -> Self {
        Self {
            topics: RefCell::new(HashMap::new()),
        }
    }

    /// Get a handle for subscribing to `topic`
    pub fn observe(&self, topic: impl Into<String>) -> Topic<'_, P> {
        Topic {
            bus: self,
            name: topic.into(),
        }
    }

    /// Deliver `payload` to every current subscriber of `topic`
    ///
    /// Returns the number of handlers invoked. Subscribers added or removed
    /// by a handler take effect from the next publish.
    pub fn publish(&self, topic: &str, payload: &P) -> usize {
        let snapshot: Vec<Handler<P>> = match self.topics.borrow().get(topic) {
            Some(handlers) => handlers.clone(),
            None => Vec::new(),
        };

        tracing::debug!(topic, subscribers = snapshot.len(), "publish");
        for handler in &snapshot {
            handler(payload);
        }
        snapshot.len()
    }

    /// Number of handlers currently subscribed to `topic`
    pub fn subscriber_count(&self, topic: &str) -> usize {
        self.topics.borrow().get(topic).map_or(0, Vec::len)
    }

    fn add(&self, topic: &str, handler: &Handler<P>) -> bool {
        let mut topics = self.topics.borrow_mut();
        let handlers = topics.entry(topic.to_string()).or_default();
        if handlers.iter().any(|h| Rc::ptr_eq(h, handler)) {
            return false;
        }
        handlers.push(Rc::clone(handler));
        true
    }

    fn remove(&self, topic: &str, handler: &Handler<P>) -> bool {
        let mut topics = self.topics.borrow_mut();
        let Some(handlers) = topics.get_mut(topic) else {
            return false;
        };
        let before = handlers.len();
        handlers.retain(|h| !Rc::ptr_eq(h, handler));
        let removed = handlers.len() != before;
        if handlers.is_empty() {
            topics.remove(topic);
        }
        removed
    }
}

impl<P: 'static> EventBus<P> {
    /// Subscribe `handler` to `topic` for as long as the returned guard lives
    pub fn subscribe_scoped(
        self: &Rc<Self>,
        topic: impl Into<String>,
        handler: Handler<P>,
    ) -> SubscriptionGuard<P> {
        let topic = topic.into();
        self.add(&topic, &handler);
        SubscriptionGuard {
            bus: Rc::clone(self),
            topic,
            handler,
        }
    }
}

impl<P> Default for EventBus<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> fmt::Debug for EventBus<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let topics = self.topics.borrow();
        let mut map = f.debug_map();
        for (name, handlers) in topics.iter() {
            map.entry(name, &handlers.len());
        }
        map.finish()
    }
}

/// Subscription handle for one topic, returned by `EventBus::observe`
pub struct Topic<'a, P> {
    bus: &'a EventBus<P>,
    name: String,
}

impl<P> Topic<'_, P> {
    /// Add `handler`; returns false if that same handler is already subscribed
    pub fn subscribe(&self, handler: &Handler<P>) -> bool {
        let added = self.bus.add(&self.name, handler);
        tracing::debug!(topic = %self.name, added, "subscribe");
        added
    }

    /// Remove `handler`; returns false if it was not subscribed
    pub fn unsubscribe(&self, handler: &Handler<P>) -> bool {
        let removed = self.bus.remove(&self.name, handler);
        tracing::debug!(topic = %self.name, removed, "unsubscribe");
        removed
    }
}

/// Unsubscribes its handler when dropped
pub struct SubscriptionGuard<P: 'static> {
    bus: Rc<EventBus<P>>,
    topic: String,
    handler: Handler<P>,
}

impl<P: 'static> SubscriptionGuard<P> {
    /// Topic this guard is subscribed to
    pub fn topic(&self) -> &str {
        &self.topic
    }
}

impl<P: 'static> Drop for SubscriptionGuard<P> {
    fn drop(&mut self) {
        self.bus.observe(self.topic.as_str()).unsubscribe(&self.handler);
    }
}

impl<P: 'static> fmt::Debug for SubscriptionGuard<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubscriptionGuard")
            .field("topic", &self.topic)
            .finish()
    }
}

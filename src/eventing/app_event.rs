//! AppEvent - Application Event Enum
//!
//! Events sent from background feeds to the UI thread. The event pump
//! turns `ContactReceived` into a publish on the `addContacts` topic.

use crate::domain::contact::Contact;

/// Application events for feed -> UI communication
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// A contact was decoded from the feed
    ContactReceived(Contact),

    /// A feed line could not be decoded and was skipped
    FeedSkipped {
        /// 1-based line number in the feed input
        line: usize,
        reason: String,
    },

    /// The feed reached the end of its input
    FeedFinished {
        accepted: usize,
        skipped: usize,
    },
}

impl AppEvent {
    /// Create a skipped-line event
    pub fn skipped(line: usize, reason: impl Into<String>) -> Self {
        Self::FeedSkipped {
            line,
            reason: reason.into(),
        }
    }
}

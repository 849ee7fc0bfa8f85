//! Topic names shared between publishers and subscribers

/// Carries one `Contact` per event
pub const ADD_CONTACTS: &str = "addContacts";

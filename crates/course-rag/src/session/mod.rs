//! Conversation sessions

pub mod manager;

pub use manager::{Message, Role, SessionManager};

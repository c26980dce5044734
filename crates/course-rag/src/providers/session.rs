//! Session provider trait for issuing conversation sessions

use async_trait::async_trait;
use crate::error::Result;

/// Trait for issuing session identifiers
///
/// Implementations:
/// - `SessionManager`: in-memory sessions with bounded history
#[async_trait]
pub trait SessionProvider: Send + Sync {
    /// Issue a new, non-empty session identifier
    async fn create_session(&self) -> Result<String>;
}

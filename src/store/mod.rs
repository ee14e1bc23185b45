//! User persistence port.
//!
//! The auth core consumes persistence through the [`UserStore`] trait so that
//! the backing store can be swapped (and doubled in tests) without touching
//! the handlers. The in-process [`memory::MemoryStore`] is the default
//! implementation.

pub mod memory;

pub use memory::MemoryStore;

use async_trait::async_trait;

use crate::models::{NewUser, User};

/// Failures surfaced by a user store.
///
/// `Duplicate` carries the name of the violated unique constraint so the
/// error layer can map it to a precise validation message.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("unique constraint violated: {constraint}")]
    Duplicate { constraint: &'static str },

    #[error("store backend error: {0}")]
    Backend(String),
}

/// Port for user lookup and creation.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Create a user, assigning an id and creation timestamp.
    ///
    /// Fails with [`StoreError::Duplicate`] when the email is already taken.
    async fn create_user(&self, user: NewUser) -> Result<User, StoreError>;

    /// Look up a user by email. Returns `None` when no user matches.
    async fn user_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Look up a user by id. Returns `None` when no user matches.
    async fn user_by_id(&self, id: u64) -> Result<Option<User>, StoreError>;

    /// List all users, ordered by id.
    async fn list_users(&self) -> Result<Vec<User>, StoreError>;
}

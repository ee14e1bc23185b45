//! In-process user store.
//!
//! Backs the [`UserStore`] port with a `tokio::sync::RwLock`-guarded map.
//! State is per-process; a fresh deployment starts empty and is seeded with
//! the admin account at startup.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::models::{unix_now, NewUser, User};
use crate::store::{StoreError, UserStore};

/// Unique constraint name reported on duplicate emails, mirrored by the
/// error translation layer.
pub const IDX_USER_EMAIL_UNIQUE: &str = "idx_user_email_unique";

#[derive(Default)]
struct Inner {
    users: HashMap<u64, User>,
    next_id: u64,
}

/// Thread-safe in-memory user store.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore {
            inner: RwLock::new(Inner {
                users: HashMap::new(),
                next_id: 1,
            }),
        }
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn create_user(&self, user: NewUser) -> Result<User, StoreError> {
        let mut inner = self.inner.write().await;

        if inner.users.values().any(|u| u.email == user.email) {
            return Err(StoreError::Duplicate {
                constraint: IDX_USER_EMAIL_UNIQUE,
            });
        }

        let id = inner.next_id;
        inner.next_id += 1;

        let user = User {
            id,
            name: user.name,
            email: user.email,
            password_hash: user.password_hash,
            roles: user.roles,
            created_at: unix_now(),
        };

        inner.users.insert(id, user.clone());
        Ok(user)
    }

    async fn user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.users.values().find(|u| u.email == email).cloned())
    }

    async fn user_by_id(&self, id: u64) -> Result<Option<User>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.users.get(&id).cloned())
    }

    async fn list_users(&self) -> Result<Vec<User>, StoreError> {
        let inner = self.inner.read().await;
        let mut users: Vec<User> = inner.users.values().cloned().collect();
        users.sort_by_key(|u| u.id);
        Ok(users)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    fn new_user(name: &str, email: &str) -> NewUser {
        NewUser {
            name: name.to_string(),
            email: email.to_string(),
            password_hash: "$argon2id$test".to_string(),
            roles: vec![Role::User],
        }
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let store = MemoryStore::new();

        let first = store.create_user(new_user("A", "a@test.be")).await.unwrap();
        let second = store.create_user(new_user("B", "b@test.be")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let store = MemoryStore::new();

        store.create_user(new_user("A", "a@test.be")).await.unwrap();
        let result = store.create_user(new_user("B", "a@test.be")).await;

        assert!(matches!(
            result,
            Err(StoreError::Duplicate {
                constraint: IDX_USER_EMAIL_UNIQUE
            })
        ));
    }

    #[tokio::test]
    async fn test_lookup_by_email_and_id() {
        let store = MemoryStore::new();

        let created = store.create_user(new_user("A", "a@test.be")).await.unwrap();

        let by_email = store.user_by_email("a@test.be").await.unwrap().unwrap();
        assert_eq!(by_email.id, created.id);

        let by_id = store.user_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(by_id.email, "a@test.be");

        assert!(store.user_by_email("missing@test.be").await.unwrap().is_none());
        assert!(store.user_by_id(999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_users_ordered() {
        let store = MemoryStore::new();

        store.create_user(new_user("B", "b@test.be")).await.unwrap();
        store.create_user(new_user("A", "a@test.be")).await.unwrap();

        let users = store.list_users().await.unwrap();
        assert_eq!(users.len(), 2);
        assert!(users[0].id < users[1].id);
    }
}

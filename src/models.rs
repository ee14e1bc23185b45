//! Request and response models for the API.
//!
//! All models use serde for serialization/deserialization.
//! Stored models represent what the user store persists.

use serde::{Deserialize, Serialize};

// ============================================================================
// User Roles
// ============================================================================

/// User role types.
///
/// Role membership is a set: a user may hold several roles at once (the
/// bootstrap admin holds both `admin` and `user`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "user" => Ok(Role::User),
            _ => Err(format!("Invalid role: {}", s)),
        }
    }
}

// ============================================================================
// Stored Models
// ============================================================================

/// User data as persisted by the user store.
///
/// The plaintext password is never stored; `password_hash` is a PHC string
/// embedding the salt and cost parameters needed to re-verify.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub roles: Vec<Role>,
    pub created_at: u64,
}

/// Input for creating a user; the store assigns the id and timestamp.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub roles: Vec<Role>,
}

// ============================================================================
// Auth Models
// ============================================================================

/// Request to log in with email and password.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Request to register a new account.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Response carrying a freshly issued session token.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

// ============================================================================
// User Models
// ============================================================================

/// User representation exposed over the API (no credential material).
#[derive(Debug, Serialize, Deserialize)]
pub struct PublicUser {
    pub id: u64,
    pub name: String,
    pub email: String,
}

impl From<User> for PublicUser {
    fn from(user: User) -> Self {
        PublicUser {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

/// Response listing all users (admin only).
#[derive(Debug, Serialize, Deserialize)]
pub struct UserListResponse {
    pub items: Vec<PublicUser>,
}

/// Current unix timestamp in seconds.
pub fn unix_now() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_role_round_trip() {
        assert_eq!(Role::from_str("admin").unwrap(), Role::Admin);
        assert_eq!(Role::from_str("user").unwrap(), Role::User);
        assert_eq!(Role::Admin.to_string(), "admin");
        assert_eq!(Role::User.to_string(), "user");
    }

    #[test]
    fn test_role_rejects_unknown() {
        assert!(Role::from_str("superuser").is_err());
        assert!(Role::from_str("").is_err());
    }

    #[test]
    fn test_role_serde_lowercase() {
        let json = serde_json::to_string(&vec![Role::Admin, Role::User]).unwrap();
        assert_eq!(json, r#"["admin","user"]"#);

        let roles: Vec<Role> = serde_json::from_str(r#"["user"]"#).unwrap();
        assert_eq!(roles, vec![Role::User]);
    }

    #[test]
    fn test_public_user_drops_credentials() {
        let user = User {
            id: 1,
            name: "Bruce Wayne".to_string(),
            email: "bruce.wayne@hogent.be".to_string(),
            password_hash: "$argon2id$...".to_string(),
            roles: vec![Role::Admin, Role::User],
            created_at: 0,
        };

        let public = PublicUser::from(user);
        let json = serde_json::to_value(&public).unwrap();
        assert!(json.get("password_hash").is_none());
        assert!(json.get("roles").is_none());
        assert_eq!(json["email"], "bruce.wayne@hogent.be");
    }
}

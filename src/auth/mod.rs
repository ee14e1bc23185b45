//! Authentication layer: password hashing, session tokens, and guards.
//!
//! Flow for a protected request: the bearer header is resolved into a
//! [`session::Session`] (signature, issuer, audience and expiry checked),
//! then the authorization guards gate the operation on roles or ownership.
//! Login and registration additionally pass through the anti-enumeration
//! delay before any account lookup happens.

pub mod authorize;
pub mod delay;
pub mod middleware;
pub mod password;
pub mod session;
pub mod token;

pub use authorize::{check_role, check_user_id, UserIdParam};
pub use delay::auth_delay;
pub use middleware::{AdminSession, AppState, AuthSession};
pub use password::{hash_password, verify_password};
pub use session::{resolve_session, Session};
pub use token::{issue_token, verify_token, TokenError};

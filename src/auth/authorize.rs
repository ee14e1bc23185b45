//! Pure authorization guards.
//!
//! These predicates read already-resolved session state and perform no I/O.
//! They short-circuit with `Forbidden` on the first failed check.

use std::str::FromStr;

use crate::error::AppError;
use crate::models::Role;

use super::session::Session;

/// A user id as it arrives in a route path: either the literal `me` or a
/// positive numeric id. Anything else is rejected at parse time, so the
/// ownership check below only ever compares numbers with numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserIdParam {
    Me,
    Id(u64),
}

impl UserIdParam {
    /// The concrete user id this parameter refers to for the given session.
    pub fn resolve(&self, session: &Session) -> u64 {
        match self {
            UserIdParam::Me => session.user_id,
            UserIdParam::Id(id) => *id,
        }
    }
}

impl FromStr for UserIdParam {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "me" {
            return Ok(UserIdParam::Me);
        }
        match s.parse::<u64>() {
            Ok(id) if id > 0 => Ok(UserIdParam::Id(id)),
            _ => Err(format!("Invalid user id: {}", s)),
        }
    }
}

/// Require that the session holds the given role.
pub fn check_role(role: Role, roles: &[Role]) -> Result<(), AppError> {
    if roles.contains(&role) {
        return Ok(());
    }
    Err(AppError::Forbidden(
        "You are not allowed to view this part of the application".to_string(),
    ))
}

/// Require that the requested user is the session's own user, or that the
/// session holds the admin role. `me` always refers to the session's user.
pub fn check_user_id(param: UserIdParam, session: &Session) -> Result<(), AppError> {
    let allowed = match param {
        UserIdParam::Me => true,
        UserIdParam::Id(id) => id == session.user_id || session.roles.contains(&Role::Admin),
    };

    if allowed {
        return Ok(());
    }
    Err(AppError::Forbidden(
        "You are not allowed to view this user's information".to_string(),
    ))
}

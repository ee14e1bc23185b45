//! Session token issuing and verification (HS256 JWT).

use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};

use crate::config::JwtConfig;
use crate::error::AppError;
use crate::models::{unix_now, Role};

/// Claims carried by a session token.
///
/// The subject is the stringified numeric user id; roles travel as a custom
/// claim. Tokens are immutable once issued: refreshing a session means
/// issuing a new token.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub roles: Vec<Role>,
    pub iss: String,
    pub aud: String,
    pub iat: u64,
    pub exp: u64,
}

/// Verification failure kinds.
///
/// Callers distinguish an expired token from every other structural or
/// signature problem; both surface to the client as `Unauthorized`, but are
/// logged distinctly.
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("jwt expired")]
    Expired,

    #[error("{0}")]
    Invalid(String),
}

/// Issue a signed session token for a user.
///
/// Issuer, audience and validity interval come from the deployment
/// configuration; issued-at is now.
pub fn issue_token(user_id: u64, roles: &[Role], config: &JwtConfig) -> Result<String, AppError> {
    let now = unix_now();
    let claims = Claims {
        sub: user_id.to_string(),
        roles: roles.to_vec(),
        iss: config.issuer.clone(),
        aud: config.audience.clone(),
        iat: now,
        exp: now + config.expiration_secs,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(format!("Failed to sign token: {}", e)))
}

/// Verify a session token and decode its subject and roles.
///
/// Checks signature, issuer, audience and expiry (no leeway: `now >= exp`
/// means expired). A non-numeric subject is a malformed token.
pub fn verify_token(token: &str, config: &JwtConfig) -> Result<(u64, Vec<Role>), TokenError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_issuer(&[&config.issuer]);
    validation.set_audience(&[&config.audience]);
    validation.leeway = 0;

    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &validation,
    )
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => TokenError::Expired,
        _ => TokenError::Invalid(e.to_string()),
    })?;

    let user_id = data
        .claims
        .sub
        .parse::<u64>()
        .map_err(|_| TokenError::Invalid("subject is not a numeric user id".to_string()))?;

    Ok((user_id, data.claims.roles))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hs256".to_string(),
            issuer: "playerlineup.test".to_string(),
            audience: "playerlineup.test".to_string(),
            expiration_secs: 3600,
        }
    }

    fn encode_claims(claims: &Claims, secret: &str) -> String {
        encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn test_issue_then_verify() {
        let config = test_config();
        let token = issue_token(42, &[Role::User], &config).unwrap();

        let (user_id, roles) = verify_token(&token, &config).unwrap();
        assert_eq!(user_id, 42);
        assert_eq!(roles, vec![Role::User]);
    }

    #[test]
    fn test_multiple_roles_round_trip() {
        let config = test_config();
        let token = issue_token(1, &[Role::Admin, Role::User], &config).unwrap();

        let (_, roles) = verify_token(&token, &config).unwrap();
        assert_eq!(roles, vec![Role::Admin, Role::User]);
    }

    #[test]
    fn test_expired_token() {
        let config = test_config();
        let now = unix_now();
        let claims = Claims {
            sub: "42".to_string(),
            roles: vec![Role::User],
            iss: config.issuer.clone(),
            aud: config.audience.clone(),
            iat: now - 7200,
            exp: now - 3600,
        };
        let token = encode_claims(&claims, &config.secret);

        let result = verify_token(&token, &config);
        assert!(matches!(result, Err(TokenError::Expired)));
    }

    #[test]
    fn test_wrong_secret() {
        let config = test_config();
        let token = issue_token(42, &[Role::User], &config).unwrap();

        let mut other = test_config();
        other.secret = "a-completely-different-secret-of-decent-length".to_string();

        let result = verify_token(&token, &other);
        assert!(matches!(result, Err(TokenError::Invalid(_))));
    }

    #[test]
    fn test_wrong_audience() {
        let config = test_config();
        let now = unix_now();
        let claims = Claims {
            sub: "42".to_string(),
            roles: vec![Role::User],
            iss: config.issuer.clone(),
            aud: "someone-else.example".to_string(),
            iat: now,
            exp: now + 3600,
        };
        let token = encode_claims(&claims, &config.secret);

        let result = verify_token(&token, &config);
        assert!(matches!(result, Err(TokenError::Invalid(_))));
    }

    #[test]
    fn test_wrong_issuer() {
        let config = test_config();
        let now = unix_now();
        let claims = Claims {
            sub: "42".to_string(),
            roles: vec![Role::User],
            iss: "someone-else.example".to_string(),
            aud: config.audience.clone(),
            iat: now,
            exp: now + 3600,
        };
        let token = encode_claims(&claims, &config.secret);

        let result = verify_token(&token, &config);
        assert!(matches!(result, Err(TokenError::Invalid(_))));
    }

    #[test]
    fn test_non_numeric_subject() {
        let config = test_config();
        let now = unix_now();
        let claims = Claims {
            sub: "not-a-number".to_string(),
            roles: vec![Role::User],
            iss: config.issuer.clone(),
            aud: config.audience.clone(),
            iat: now,
            exp: now + 3600,
        };
        let token = encode_claims(&claims, &config.secret);

        let result = verify_token(&token, &config);
        match result {
            Err(TokenError::Invalid(msg)) => assert!(msg.contains("numeric user id")),
            other => panic!("Expected Invalid, got {:?}", other),
        }
    }

    #[test]
    fn test_garbage_token() {
        let config = test_config();
        let result = verify_token("definitely.not.ajwt", &config);
        assert!(matches!(result, Err(TokenError::Invalid(_))));
    }
}

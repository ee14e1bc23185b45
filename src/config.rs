use std::env;
use std::net::SocketAddr;

/// JWT signing configuration.
///
/// The secret is held only by the server process and never leaves it.
#[derive(Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
    /// Token validity interval in seconds.
    pub expiration_secs: u64,
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"[REDACTED]")
            .field("issuer", &self.issuer)
            .field("audience", &self.audience)
            .field("expiration_secs", &self.expiration_secs)
            .finish()
    }
}

/// Argon2id cost parameters for password hashing.
#[derive(Debug, Clone)]
pub struct ArgonConfig {
    pub time_cost: u32,
    /// Memory cost in KiB.
    pub memory_cost_kib: u32,
    /// Length of the derived hash in bytes.
    pub hash_length: usize,
}

#[derive(Clone)]
pub struct Config {
    // Token signing
    pub jwt: JwtConfig,

    // Password hashing
    pub argon: ArgonConfig,

    // Anti-enumeration delay on login/registration (upper bound, ms)
    pub auth_max_delay_ms: u64,

    // Admin bootstrap account
    pub admin_name: String,
    pub admin_email: String,
    pub admin_password: String,

    // Server
    pub bind_addr: SocketAddr,

    // CORS
    pub cors_origins: Vec<String>,
    pub cors_max_age_secs: u64,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("jwt", &self.jwt)
            .field("argon", &self.argon)
            .field("auth_max_delay_ms", &self.auth_max_delay_ms)
            .field("admin_name", &self.admin_name)
            .field("admin_email", &self.admin_email)
            .field("admin_password", &"[REDACTED]")
            .field("bind_addr", &self.bind_addr)
            .field("cors_origins", &self.cors_origins)
            .field("cors_max_age_secs", &self.cors_max_age_secs)
            .finish()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),

    #[error("Failed to parse {0}: {1}")]
    ParseError(String, String),
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        // Attempt to load .env file, but don't fail if it doesn't exist
        // (env vars may be set directly in production)
        let _ = dotenvy::dotenv();

        // Signing secret - JWT_SECRET is required
        let jwt_secret =
            env::var("JWT_SECRET").map_err(|_| ConfigError::MissingVar("JWT_SECRET".to_string()))?;

        if jwt_secret.len() < 32 {
            return Err(ConfigError::InvalidValue(
                "JWT_SECRET".to_string(),
                "must be at least 32 characters".to_string(),
            ));
        }

        let jwt_issuer =
            env::var("JWT_ISSUER").unwrap_or_else(|_| "playerlineup.hogent.be".to_string());
        let jwt_audience =
            env::var("JWT_AUDIENCE").unwrap_or_else(|_| "playerlineup.hogent.be".to_string());
        let jwt_expiration_secs = parse_env_or_default("JWT_EXPIRATION_SECS", 3_600)?;

        // Argon2id cost parameters
        let argon_time_cost = parse_env_or_default("ARGON_TIME_COST", 6)?;
        let argon_memory_cost_kib = parse_env_or_default("ARGON_MEMORY_COST_KIB", 131_072)?;
        let argon_hash_length = parse_env_or_default("ARGON_HASH_LENGTH", 32)?;

        // Anti-enumeration delay
        let auth_max_delay_ms = parse_env_or_default("AUTH_MAX_DELAY_MS", 5_000)?;

        // Admin bootstrap - email and password are required
        let admin_email = env::var("ADMIN_EMAIL")
            .map_err(|_| ConfigError::MissingVar("ADMIN_EMAIL".to_string()))?;

        if !admin_email.contains('@') {
            return Err(ConfigError::InvalidValue(
                "ADMIN_EMAIL".to_string(),
                "must be a valid email address".to_string(),
            ));
        }

        let admin_password = env::var("ADMIN_PASSWORD")
            .map_err(|_| ConfigError::MissingVar("ADMIN_PASSWORD".to_string()))?;

        if admin_password.len() < 12 {
            return Err(ConfigError::InvalidValue(
                "ADMIN_PASSWORD".to_string(),
                "must be at least 12 characters".to_string(),
            ));
        }

        let admin_name = env::var("ADMIN_NAME").unwrap_or_else(|_| "Administrator".to_string());

        // Server
        let bind_addr_str = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:9000".to_string());
        let bind_addr = bind_addr_str
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::ParseError("BIND_ADDR".to_string(), e.to_string()))?;

        // CORS
        let cors_origins_str =
            env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:5173".to_string());
        let cors_origins: Vec<String> = cors_origins_str
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let cors_max_age_secs = parse_env_or_default("CORS_MAX_AGE_SECS", 10_800)?;

        Ok(Config {
            jwt: JwtConfig {
                secret: jwt_secret,
                issuer: jwt_issuer,
                audience: jwt_audience,
                expiration_secs: jwt_expiration_secs,
            },
            argon: ArgonConfig {
                time_cost: argon_time_cost,
                memory_cost_kib: argon_memory_cost_kib,
                hash_length: argon_hash_length,
            },
            auth_max_delay_ms,
            admin_name,
            admin_email,
            admin_password,
            bind_addr,
            cors_origins,
            cors_max_age_secs,
        })
    }
}

/// Helper function to parse environment variable with a default value
fn parse_env_or_default<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(val) => val
            .parse::<T>()
            .map_err(|e| ConfigError::ParseError(key.to_string(), format!("{}: {}", e, val))),
        Err(_) => Ok(default),
    }
}

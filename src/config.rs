use std::{env, path::PathBuf};

use argon2::{Argon2, PasswordHasher, password_hash::SaltString};
use password_hash::rand_core::OsRng;

const DEV_JWT_SECRET: &str = "nursery-storefront-dev-secret-change-me";
const SANDBOX_PUBLIC_KEY: &str = "sandbox_i00000000000";
const SANDBOX_PRIVATE_KEY: &str = "sandbox_xxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxx";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub db_max_connections: u32,
    pub host: String,
    pub port: u16,
    pub jwt_secret: String,
    pub token_ttl_minutes: i64,
    pub admin: AdminCredentials,
    pub upload_dir: PathBuf,
    pub max_upload_bytes: usize,
    pub cors_origins: Vec<String>,
    pub liqpay: LiqPayKeys,
}

/// The single admin account. Only the argon2 hash of the password is kept.
#[derive(Debug, Clone)]
pub struct AdminCredentials {
    pub username: String,
    pub password_hash: String,
}

impl AdminCredentials {
    pub fn new(username: impl Into<String>, password: &str) -> anyhow::Result<Self> {
        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| anyhow::anyhow!(e.to_string()))?
            .to_string();
        Ok(Self {
            username: username.into(),
            password_hash,
        })
    }
}

#[derive(Debug, Clone)]
pub struct LiqPayKeys {
    pub public_key: String,
    pub private_key: String,
}

impl Default for LiqPayKeys {
    fn default() -> Self {
        Self {
            public_key: SANDBOX_PUBLIC_KEY.to_string(),
            private_key: SANDBOX_PRIVATE_KEY.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL")?;
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env_parse("APP_PORT", 3000);

        let jwt_secret = match env::var("JWT_SECRET") {
            Ok(secret) if !secret.is_empty() => secret,
            _ => {
                tracing::warn!("JWT_SECRET is not set, using the development secret");
                DEV_JWT_SECRET.to_string()
            }
        };

        let admin_username = env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".to_string());
        let admin_password = env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "admin123".to_string());

        let cors_origins = env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        let liqpay = LiqPayKeys {
            public_key: env::var("LIQPAY_PUBLIC_KEY")
                .unwrap_or_else(|_| SANDBOX_PUBLIC_KEY.to_string()),
            private_key: env::var("LIQPAY_PRIVATE_KEY")
                .unwrap_or_else(|_| SANDBOX_PRIVATE_KEY.to_string()),
        };

        Ok(Self {
            database_url,
            db_max_connections: env_parse("DB_MAX_CONNECTIONS", 10),
            host,
            port,
            jwt_secret,
            token_ttl_minutes: env_parse("TOKEN_TTL_MINUTES", 60 * 24),
            admin: AdminCredentials::new(admin_username, &admin_password)?,
            upload_dir: PathBuf::from(
                env::var("UPLOAD_DIR").unwrap_or_else(|_| "uploads".to_string()),
            ),
            max_upload_bytes: env_parse("MAX_UPLOAD_BYTES", 10 * 1024 * 1024),
            cors_origins,
            liqpay,
        })
    }

    /// Configuration used by tests and tooling: explicit database url and
    /// upload directory, defaults for everything else.
    pub fn for_database(
        database_url: impl Into<String>,
        upload_dir: impl Into<PathBuf>,
    ) -> anyhow::Result<Self> {
        Ok(Self {
            database_url: database_url.into(),
            db_max_connections: 1,
            host: "127.0.0.1".to_string(),
            port: 3000,
            jwt_secret: DEV_JWT_SECRET.to_string(),
            token_ttl_minutes: 60,
            admin: AdminCredentials::new("admin", "admin123")?,
            upload_dir: upload_dir.into(),
            max_upload_bytes: 10 * 1024 * 1024,
            cors_origins: vec!["*".to_string()],
            liqpay: LiqPayKeys::default(),
        })
    }
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|value| value.parse::<T>().ok())
        .unwrap_or(default)
}

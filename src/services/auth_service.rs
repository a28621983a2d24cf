use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordVerifier},
};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};

use crate::{
    config::AppConfig,
    dto::auth::{Claims, LoginRequest, LoginResponse, VerifyResponse},
    error::{AppError, AppResult},
    middleware::auth::AdminUser,
    response::{ApiResponse, Meta},
};

pub const ADMIN_ROLE: &str = "admin";

pub fn login_admin(
    config: &AppConfig,
    payload: LoginRequest,
) -> AppResult<ApiResponse<LoginResponse>> {
    let username = payload.username.trim();
    let password = payload.password.trim();

    if username != config.admin.username || !verify_password(config, password)? {
        tracing::info!(username = %username, "admin login rejected");
        return Err(AppError::Unauthorized("Invalid username or password".into()));
    }

    let token = issue_token(config, username)?;
    tracing::info!(username = %username, "admin logged in");

    let resp = LoginResponse {
        access_token: token,
        token_type: "bearer".to_string(),
        username: username.to_string(),
        expires_in: config.token_ttl_minutes * 60,
    };
    Ok(ApiResponse::success("Logged in", resp, Some(Meta::empty())))
}

pub fn verify_admin(admin: &AdminUser) -> ApiResponse<VerifyResponse> {
    ApiResponse::success(
        "Token valid",
        VerifyResponse {
            username: admin.username.clone(),
            role: admin.role.clone(),
        },
        None,
    )
}

pub fn issue_token(config: &AppConfig, username: &str) -> AppResult<String> {
    let expiration = Utc::now()
        .checked_add_signed(Duration::minutes(config.token_ttl_minutes))
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("Failed to set expiration")))?;

    let claims = Claims {
        sub: username.to_string(),
        role: ADMIN_ROLE.to_string(),
        exp: expiration.timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))
}

/// Checks signature, expiry and that the subject is the configured admin.
pub fn verify_token(config: &AppConfig, token: &str) -> AppResult<Claims> {
    let decoded = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.jwt_secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|_| AppError::Unauthorized("Could not validate credentials".into()))?;

    if decoded.claims.sub != config.admin.username {
        return Err(AppError::Unauthorized(
            "Invalid authentication credentials".into(),
        ));
    }
    Ok(decoded.claims)
}

fn verify_password(config: &AppConfig, password: &str) -> AppResult<bool> {
    let parsed_hash = PasswordHash::new(&config.admin.password_hash)
        .map_err(|_| AppError::Internal(anyhow::anyhow!("Invalid password hash")))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    fn config() -> AppConfig {
        AppConfig::for_database("sqlite::memory:", "uploads").expect("config")
    }

    #[test]
    fn issued_token_round_trips() {
        let config = config();
        let token = issue_token(&config, "admin").expect("token");
        let claims = verify_token(&config, &token).expect("claims");
        assert_eq!(claims.sub, "admin");
        assert_eq!(claims.role, ADMIN_ROLE);
    }

    #[test]
    fn token_for_other_subject_is_rejected() {
        let config = config();
        let token = issue_token(&config, "mallory").expect("token");
        assert!(matches!(
            verify_token(&config, &token),
            Err(AppError::Unauthorized(_))
        ));
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let config = config();
        let mut other = config.clone();
        other.jwt_secret = "another-secret".into();
        let token = issue_token(&other, "admin").expect("token");
        assert!(verify_token(&config, &token).is_err());
    }

    #[test]
    fn expired_token_is_rejected() {
        let mut config = config();
        config.token_ttl_minutes = -10;
        let token = issue_token(&config, "admin").expect("token");
        assert!(verify_token(&config, &token).is_err());
    }

    #[test]
    fn login_trims_credentials() {
        let config = config();
        let resp = login_admin(
            &config,
            LoginRequest {
                username: " admin ".into(),
                password: "admin123\n".into(),
            },
        )
        .expect("login");
        let data = resp.data.expect("token data");
        assert_eq!(data.token_type, "bearer");
        assert!(verify_token(&config, &data.access_token).is_ok());
    }

    #[test]
    fn login_rejects_wrong_password() {
        let config = config();
        let result = login_admin(
            &config,
            LoginRequest {
                username: "admin".into(),
                password: "nope".into(),
            },
        );
        assert!(matches!(result, Err(AppError::Unauthorized(_))));
    }
}

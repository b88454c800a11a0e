//! Admin authentication (JWT Bearer tokens)
//!
//! Single administrative login; `POST /auth/login` exchanges the admin
//! credentials for a signed token and the middleware below validates it on
//! every protected route.

use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::Response,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Token lifetime. Mirrored in the login response as `expires_in`.
const TOKEN_TTL_HOURS: i64 = 1;

/// Claims stored in the token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (admin user id)
    pub sub: String,
    pub username: String,
    /// Expiration timestamp (seconds)
    pub exp: i64,
    /// Issued-at timestamp (seconds)
    pub iat: i64,
}

/// Runtime auth configuration, built from secrets at startup.
#[derive(Clone)]
pub struct AuthConfig {
    secret: String,
    admin_username: String,
    admin_password: String,
}

impl AuthConfig {
    pub fn new(
        secret: Option<String>,
        admin_username: Option<String>,
        admin_password: Option<String>,
    ) -> Self {
        let secret = match secret {
            Some(s) if !s.is_empty() => s,
            _ => {
                tracing::warn!("JWT_SECRET not set, using an insecure development key");
                "dev-secret-change-me".to_string()
            }
        };
        if admin_username.is_none() || admin_password.is_none() {
            tracing::warn!("admin credentials not fully configured, falling back to defaults");
        }
        Self {
            secret,
            admin_username: admin_username.unwrap_or_else(|| "admin".to_string()),
            admin_password: admin_password.unwrap_or_else(|| "admin123".to_string()),
        }
    }

    pub fn verify_credentials(&self, username: &str, password: &str) -> bool {
        username == self.admin_username && password == self.admin_password
    }

    /// Sign a token for the admin user.
    pub fn issue_token(&self, username: &str) -> Result<String, jsonwebtoken::errors::Error> {
        let now = Utc::now();
        let claims = Claims {
            sub: "admin".to_string(),
            username: username.to_string(),
            exp: (now + Duration::hours(TOKEN_TTL_HOURS)).timestamp(),
            iat: now.timestamp(),
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
    }

    pub fn validate_token(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims)
    }
}

/// Authentication middleware
///
/// Validates the Bearer token and stores the claims in the request extensions.
pub async fn auth_middleware(
    State(config): State<AuthConfig>,
    mut request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    match auth_header {
        Some(header_value) if header_value.starts_with("Bearer ") => {
            let token = &header_value[7..];
            match config.validate_token(token) {
                Ok(claims) => {
                    request.extensions_mut().insert(claims);
                    Ok(next.run(request).await)
                }
                Err(e) => {
                    tracing::warn!(error = %e, "rejected invalid token");
                    Err(StatusCode::UNAUTHORIZED)
                }
            }
        }
        Some(_) => {
            tracing::warn!("invalid Authorization header format");
            Err(StatusCode::UNAUTHORIZED)
        }
        None => {
            tracing::warn!("missing Authorization header");
            Err(StatusCode::UNAUTHORIZED)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> AuthConfig {
        AuthConfig::new(
            Some("test-secret".to_string()),
            Some("admin".to_string()),
            Some("admin123".to_string()),
        )
    }

    #[test]
    fn issued_tokens_validate() {
        let config = config();
        let token = config.issue_token("admin").unwrap();

        let claims = config.validate_token(&token).unwrap();
        assert_eq!(claims.sub, "admin");
        assert_eq!(claims.username, "admin");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn garbage_tokens_are_rejected() {
        assert!(config().validate_token("not-a-token").is_err());
    }

    #[test]
    fn tokens_from_another_secret_are_rejected() {
        let other = AuthConfig::new(Some("other-secret".to_string()), None, None);
        let token = other.issue_token("admin").unwrap();
        assert!(config().validate_token(&token).is_err());
    }

    #[test]
    fn credentials_check() {
        let config = config();
        assert!(config.verify_credentials("admin", "admin123"));
        assert!(!config.verify_credentials("admin", "wrong"));
        assert!(!config.verify_credentials("root", "admin123"));
    }
}

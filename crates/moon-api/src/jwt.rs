//! Bearer token verification.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};

use moon_core::config::AuthConfig;
use moon_core::AppResult;
use moon_core::error::AppError;
use moon_core::types::{CurrentUser, Permission, UserRole};

/// Claims carried by access tokens issued by the auth service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    /// Account id.
    pub sub: String,
    /// Account email.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Account role.
    pub role: UserRole,
    /// Parent account, for sub-users.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_user: Option<String>,
    /// Delegated permissions, for sub-users.
    #[serde(default)]
    pub permissions: Vec<Permission>,
    /// Expiration (Unix timestamp).
    pub exp: i64,
    /// Issued at (Unix timestamp).
    #[serde(default)]
    pub iat: i64,
}

impl From<Claims> for CurrentUser {
    fn from(claims: Claims) -> Self {
        Self {
            id: claims.sub,
            email: claims.email,
            role: claims.role,
            parent_user: claims.parent_user,
            permissions: claims.permissions,
        }
    }
}

/// Validates HS256 access tokens.
#[derive(Clone)]
pub struct JwtDecoder {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a decoder from auth configuration.
    ///
    /// An empty or whitespace-only secret is a configuration error: an
    /// HMAC key of zero bytes would accept tokens signed by anyone.
    pub fn new(config: &AuthConfig) -> AppResult<Self> {
        if config.jwt_secret.trim().is_empty() {
            return Err(AppError::configuration(
                "auth.jwt_secret must be set to a non-empty secret",
            ));
        }

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = config.leeway_seconds;

        Ok(Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        })
    }

    /// Decodes and validates a token string.
    pub fn decode(&self, token: &str) -> AppResult<Claims> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        AppError::not_authorized("Token has expired")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        AppError::not_authorized("Invalid token signature")
                    }
                    _ => AppError::not_authorized(format!("Token validation failed: {e}")),
                }
            })?;

        Ok(token_data.claims)
    }

    /// Decodes a token into the user it authenticates.
    pub fn current_user(&self, token: &str) -> AppResult<CurrentUser> {
        self.decode(token).map(CurrentUser::from)
    }
}

//! Token verification configuration.

use serde::{Deserialize, Serialize};

/// Settings for verifying bearer tokens issued by the auth service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// HMAC secret shared with the token issuer. Empty by default; a
    /// decoder refuses to start until it is set.
    #[serde(default)]
    pub jwt_secret: String,
    /// Allowed clock skew when checking `exp`, in seconds.
    #[serde(default = "default_leeway")]
    pub leeway_seconds: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::new(),
            leeway_seconds: default_leeway(),
        }
    }
}

fn default_leeway() -> u64 {
    5
}

//! User role enumeration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Account roles recognised by every Moon service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserRole {
    /// Platform administrator.
    Admin,
    /// Regular merchant account.
    User,
    /// Account acting on behalf of a parent merchant account.
    SubUser,
}

impl UserRole {
    /// Check if this role is an admin.
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Check if this role is a sub-user.
    pub fn is_sub_user(&self) -> bool {
        matches!(self, Self::SubUser)
    }

    /// Return the wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::User => "User",
            Self::SubUser => "SubUser",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "user" => Ok(Self::User),
            "subuser" | "sub_user" | "sub-user" => Ok(Self::SubUser),
            _ => Err(AppError::validation(format!(
                "Invalid user role: '{s}'. Expected one of: Admin, User, SubUser"
            ))),
        }
    }
}

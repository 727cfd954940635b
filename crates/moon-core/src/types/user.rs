//! The authenticated user attached to an inbound request.

use serde::{Deserialize, Serialize};

use super::permission::Permission;
use super::role::UserRole;

/// User populated by the upstream authentication step.
///
/// Middlewares read it from the request extensions; it is never mutated
/// after insertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    /// Authenticated account id.
    pub id: String,
    /// Account email, when the token carries one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Account role.
    pub role: UserRole,
    /// Parent account id for sub-users.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_user: Option<String>,
    /// Permissions delegated to a sub-user. Ignored for other roles.
    #[serde(default)]
    pub permissions: Vec<Permission>,
}

impl CurrentUser {
    /// Creates a user with no email, parent, or delegated permissions.
    pub fn new(id: impl Into<String>, role: UserRole) -> Self {
        Self {
            id: id.into(),
            email: None,
            role,
            parent_user: None,
            permissions: Vec::new(),
        }
    }

    /// Sets the parent account.
    pub fn with_parent(mut self, parent_user: impl Into<String>) -> Self {
        self.parent_user = Some(parent_user.into());
        self
    }

    /// Sets the delegated permissions.
    pub fn with_permissions(mut self, permissions: Vec<Permission>) -> Self {
        self.permissions = permissions;
        self
    }

    /// Returns whether the user is an admin.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Admins and account owners hold every permission; sub-users only
    /// what their parent delegated.
    pub fn has_permission(&self, permission: Permission) -> bool {
        match self.role {
            UserRole::Admin | UserRole::User => true,
            UserRole::SubUser => self.permissions.contains(&permission),
        }
    }
}

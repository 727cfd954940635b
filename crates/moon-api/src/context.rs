//! Request-scoped identity resolved for sub-users.

use serde::{Deserialize, Serialize};

use moon_core::AppResult;
use moon_core::error::AppError;
use moon_core::types::{CurrentUser, UserRole};

/// Identity snapshot recorded with every audited action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditContext {
    /// The literal authenticated account.
    pub actual_user_id: String,
    /// The account whose data is operated on.
    pub effective_user_id: String,
    /// Role of the authenticated account.
    pub role: UserRole,
    /// Parent account, for sub-users.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_user_id: Option<String>,
}

/// Identity fields attached to a request by
/// [`sub_user_context`](crate::middleware::sub_user_context).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubUserContext {
    /// The account whose data the request operates on.
    pub effective_user_id: String,
    /// The literal authenticated account.
    pub actual_user_id: String,
    /// Whether the caller is a sub-user acting for its parent.
    pub is_sub_user: bool,
    /// Snapshot for audit records.
    pub audit_context: AuditContext,
}

impl SubUserContext {
    /// Resolves the effective identity of `user`.
    ///
    /// A sub-user is scoped to its declared parent and nothing else; a
    /// sub-user without a parent is rejected. For every other role the
    /// effective identity is the user itself, and any parent field is
    /// ignored.
    pub fn resolve(user: &CurrentUser) -> AppResult<Self> {
        let actual_user_id = user.id.clone();

        let (effective_user_id, parent_user_id) = if user.role.is_sub_user() {
            let parent = user
                .parent_user
                .as_deref()
                .filter(|p| !p.is_empty())
                .ok_or_else(|| AppError::not_authorized("Sub-user has no parent account"))?;
            (parent.to_string(), Some(parent.to_string()))
        } else {
            (actual_user_id.clone(), None)
        };

        Ok(Self {
            audit_context: AuditContext {
                actual_user_id: actual_user_id.clone(),
                effective_user_id: effective_user_id.clone(),
                role: user.role,
                parent_user_id,
            },
            effective_user_id,
            actual_user_id,
            is_sub_user: user.role.is_sub_user(),
        })
    }
}

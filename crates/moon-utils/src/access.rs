//! Excel job access control.

/// Ownership fields of an excel job record.
pub trait ExcelJobOwner {
    /// Account that created the job.
    fn owner_id(&self) -> &str;
    /// Parent account of the owner, when the owner is a sub-user.
    fn parent_user_id(&self) -> Option<&str>;
}

/// Borrowed ownership fields, for callers without a job type of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExcelJobRef<'a> {
    pub user_id: &'a str,
    pub parent_user_id: Option<&'a str>,
}

impl ExcelJobOwner for ExcelJobRef<'_> {
    fn owner_id(&self) -> &str {
        self.user_id
    }

    fn parent_user_id(&self) -> Option<&str> {
        self.parent_user_id
    }
}

/// Whether `user_id` may read `job`.
///
/// True for the owner and for the owner's parent account.
pub fn can_access_excel_job<J: ExcelJobOwner + ?Sized>(user_id: &str, job: &J) -> bool {
    job.owner_id() == user_id || job.parent_user_id() == Some(user_id)
}

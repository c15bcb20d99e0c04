use serde::Deserialize;

/// Filter and paging for user listing.
///
/// `limit` and `offset` are taken as the caller sent them; the identity
/// service normalizes `limit`, the store interprets `offset`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ListUsersQuery {
    /// Case-insensitive substring of the email; empty matches everything
    pub email: Option<String>,
    pub limit: i64,
    pub offset: i64,
}

impl ListUsersQuery {
    pub fn email_filter(&self) -> &str {
        self.email.as_deref().unwrap_or("")
    }
}

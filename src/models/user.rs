use serde::Serialize;

/// Minimal identity record: enough to attribute entries and sessions and to
/// label team reports with a username.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub created_at: String,
}

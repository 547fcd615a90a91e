use chrono::{DateTime, Utc};
use serde::Serialize;

/// Lifecycle columns shared by every soft-deletable row.
///
/// `deleted` is a logical flag: moderation never removes rows, it marks
/// them. Listings default to newest-first by `created_at` unless a read
/// path states otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Lifecycle {
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted: bool,
}

impl Lifecycle {
    pub fn is_active(&self) -> bool {
        !self.deleted
    }
}

//! Edit transactions and their authors.

use std::sync::Arc;

use chrono::{DateTime, Utc};

/// An OpenStreetMap account.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct User {
    /// Numeric account identifier (`uid`).
    pub id: i64,
    /// Display name at the time the data was served. Empty when unknown.
    pub display_name: String,
}

impl User {
    /// Construct a user from its id and display name.
    pub fn new(id: i64, display_name: impl Into<String>) -> Self {
        Self {
            id,
            display_name: display_name.into(),
        }
    }
}

/// A server-side edit transaction.
///
/// Elements touched by the same changeset share one instance through an
/// [`Arc`], so identity can be checked with [`Arc::ptr_eq`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Changeset {
    /// Changeset identifier.
    pub id: i64,
    /// Timestamp of the edit that first introduced this changeset.
    pub date: Option<DateTime<Utc>>,
    /// Author of the changeset, when the source names one.
    pub user: Option<Arc<User>>,
}

impl Changeset {
    /// Construct a changeset.
    #[must_use]
    pub const fn new(id: i64, date: Option<DateTime<Utc>>, user: Option<Arc<User>>) -> Self {
        Self { id, date, user }
    }
}

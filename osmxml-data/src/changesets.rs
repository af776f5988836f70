//! Session-scoped sharing of changeset and author metadata.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use log::trace;
use osmxml_core::{Changeset, User};

/// Maps changeset ids to the one [`Changeset`] handle built for them.
///
/// The first call to [`ChangesetCache::resolve`] for an id decides the
/// changeset's timestamp and author; later calls return the same handle and
/// ignore the fields they were given.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use osmxml_data::ChangesetCache;
///
/// let mut cache = ChangesetCache::new();
/// let first = cache.resolve(7, None, Some(1), Some("alice"));
/// let second = cache.resolve(7, None, Some(2), Some("bob"));
/// assert!(Arc::ptr_eq(&first, &second));
/// assert_eq!(second.user.as_ref().map(|user| user.display_name.as_str()), Some("alice"));
/// ```
#[derive(Debug, Default)]
pub struct ChangesetCache {
    changesets: HashMap<i64, Arc<Changeset>>,
}

impl ChangesetCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the shared changeset for `id`, creating it on first sight.
    ///
    /// A [`User`] is attached only when `user_id` is known; a missing
    /// `user_name` becomes an empty display name.
    pub fn resolve(
        &mut self,
        id: i64,
        timestamp: Option<DateTime<Utc>>,
        user_id: Option<i64>,
        user_name: Option<&str>,
    ) -> Arc<Changeset> {
        let changeset = self.changesets.entry(id).or_insert_with(|| {
            trace!("caching changeset {id} (uid {user_id:?})");
            let user = user_id.map(|uid| Arc::new(User::new(uid, user_name.unwrap_or_default())));
            Arc::new(Changeset::new(id, timestamp, user))
        });
        Arc::clone(changeset)
    }

    /// Number of distinct changesets seen.
    #[must_use]
    pub fn len(&self) -> usize {
        self.changesets.len()
    }

    /// Whether no changeset has been resolved yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.changesets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn cache() -> ChangesetCache {
        ChangesetCache::new()
    }

    #[rstest]
    fn first_resolution_wins(mut cache: ChangesetCache) {
        let early = DateTime::from_timestamp(1_000, 0);
        let first = cache.resolve(12, early, Some(3), Some("mapper"));
        let again = cache.resolve(12, DateTime::from_timestamp(2_000, 0), None, None);

        assert!(Arc::ptr_eq(&first, &again));
        assert_eq!(again.date, early);
        let user = again.user.as_ref().expect("user kept from first sighting");
        assert_eq!(**user, User::new(3, "mapper"));
        assert_eq!(cache.len(), 1);
    }

    #[rstest]
    fn distinct_ids_get_distinct_handles(mut cache: ChangesetCache) {
        let a = cache.resolve(1, None, Some(5), Some("x"));
        let b = cache.resolve(2, None, Some(5), Some("x"));

        assert!(!Arc::ptr_eq(&a, &b));
        assert_eq!(cache.len(), 2);
    }

    #[rstest]
    fn author_requires_uid(mut cache: ChangesetCache) {
        let anonymous = cache.resolve(4, None, None, Some("ghost"));
        assert!(anonymous.user.is_none());
    }

    #[rstest]
    fn missing_name_is_empty(mut cache: ChangesetCache) {
        let changeset = cache.resolve(4, None, Some(9), None);
        let user = changeset.user.as_ref().expect("user");
        assert_eq!(user.display_name, "");
    }

    #[rstest]
    fn starts_empty(cache: ChangesetCache) {
        assert!(cache.is_empty());
    }
}

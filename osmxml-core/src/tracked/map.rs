use std::borrow::Borrow;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::hash::Hash;
use std::ops::Deref;

/// A key-unique mapping with a one-way modification flag.
///
/// Reads go through [`Deref`] to the inner [`HashMap`]; writes must use the
/// methods below, each of which raises the flag when called.
///
/// # Examples
///
/// ```
/// use osmxml_core::TrackedMap;
///
/// let mut tags: TrackedMap<String, String> =
///     [("highway".to_owned(), "residential".to_owned())].into_iter().collect();
/// assert!(!tags.is_modified());
///
/// tags.insert("highway".to_owned(), "residential".to_owned());
/// assert_eq!(tags.get("highway").map(String::as_str), Some("residential"));
/// assert!(tags.is_modified());
/// ```
#[derive(Debug, Clone)]
pub struct TrackedMap<K, V> {
    entries: HashMap<K, V>,
    modified: bool,
}

impl<K, V> TrackedMap<K, V> {
    /// Wrap an initial snapshot. The result reports itself as unmodified.
    #[must_use]
    pub const fn new(entries: HashMap<K, V>) -> Self {
        Self {
            entries,
            modified: false,
        }
    }

    /// Report whether any mutating operation has been invoked.
    #[must_use]
    pub const fn is_modified(&self) -> bool {
        self.modified
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.make_mut().clear();
    }

    /// Keep only the entries matching `keep`.
    pub fn retain<F>(&mut self, keep: F)
    where
        F: FnMut(&K, &mut V) -> bool,
    {
        self.make_mut().retain(keep);
    }

    /// Borrow the underlying map mutably. Raises the flag immediately.
    pub fn make_mut(&mut self) -> &mut HashMap<K, V> {
        self.modified = true;
        &mut self.entries
    }

    /// Unwrap into the plain map, discarding the flag.
    #[must_use]
    pub fn into_inner(self) -> HashMap<K, V> {
        self.entries
    }
}

impl<K: Eq + Hash, V> TrackedMap<K, V> {
    /// Insert or overwrite `key`, returning any previous value.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.make_mut().insert(key, value)
    }

    /// Remove `key`, returning its value if it was present.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.make_mut().remove(key)
    }

    /// Borrow the value under `key` mutably.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.make_mut().get_mut(key)
    }

    /// In-place entry manipulation.
    pub fn entry(&mut self, key: K) -> Entry<'_, K, V> {
        self.make_mut().entry(key)
    }
}

impl<K, V> Default for TrackedMap<K, V> {
    fn default() -> Self {
        Self::new(HashMap::new())
    }
}

impl<K, V> Deref for TrackedMap<K, V> {
    type Target = HashMap<K, V>;

    fn deref(&self) -> &Self::Target {
        &self.entries
    }
}

impl<K: Eq + Hash, V: PartialEq> PartialEq for TrackedMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K: Eq + Hash, V: Eq> Eq for TrackedMap<K, V> {}

impl<K, V> From<HashMap<K, V>> for TrackedMap<K, V> {
    fn from(entries: HashMap<K, V>) -> Self {
        Self::new(entries)
    }
}

impl<K: Eq + Hash, V> FromIterator<(K, V)> for TrackedMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<K: Eq + Hash, V> Extend<(K, V)> for TrackedMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.make_mut().extend(iter);
    }
}

impl<'a, K, V> IntoIterator for &'a TrackedMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = std::collections::hash_map::Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(feature = "serde")]
impl<K, V> serde::Serialize for TrackedMap<K, V>
where
    K: serde::Serialize,
    V: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.entries.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, K, V> serde::Deserialize<'de> for TrackedMap<K, V>
where
    K: serde::Deserialize<'de> + Eq + Hash,
    V: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        HashMap::deserialize(deserializer).map(Self::new)
    }
}

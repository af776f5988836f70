use std::ops::{Deref, DerefMut};

/// An ordered sequence with a one-way modification flag.
///
/// Reads go through [`Deref`] to a slice. Every `&mut` access, including the
/// slice methods reached through [`DerefMut`], raises the flag whether or not
/// the content actually changes.
///
/// # Examples
///
/// ```
/// use osmxml_core::TrackedVec;
///
/// let mut node_ids = TrackedVec::new(vec![10_i64, 20]);
/// assert!(!node_ids.is_modified());
///
/// let removed = node_ids.pop();
/// node_ids.extend(removed);
/// assert_eq!(node_ids.as_slice(), &[10, 20]);
/// assert!(node_ids.is_modified());
/// ```
#[derive(Debug, Clone)]
pub struct TrackedVec<T> {
    items: Vec<T>,
    modified: bool,
}

impl<T> TrackedVec<T> {
    /// Wrap an initial snapshot. The result reports itself as unmodified.
    #[must_use]
    pub const fn new(items: Vec<T>) -> Self {
        Self {
            items,
            modified: false,
        }
    }

    /// Report whether any mutating operation has been invoked.
    #[must_use]
    pub const fn is_modified(&self) -> bool {
        self.modified
    }

    /// Borrow the items as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Append `value` to the end.
    pub fn push(&mut self, value: T) {
        self.make_mut().push(value);
    }

    /// Insert `value` at `index`, shifting later items right.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`, like [`Vec::insert`].
    pub fn insert(&mut self, index: usize, value: T) {
        self.make_mut().insert(index, value);
    }

    /// Remove and return the item at `index`, or `None` when out of range.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        let items = self.make_mut();
        (index < items.len()).then(|| items.remove(index))
    }

    /// Remove and return the last item.
    pub fn pop(&mut self) -> Option<T> {
        self.make_mut().pop()
    }

    /// Replace the item at `index`, returning the previous value.
    ///
    /// Returns `None` and drops `value` when `index` is out of range.
    pub fn replace(&mut self, index: usize, value: T) -> Option<T> {
        self.make_mut()
            .get_mut(index)
            .map(|slot| std::mem::replace(slot, value))
    }

    /// Remove every item.
    pub fn clear(&mut self) {
        self.make_mut().clear();
    }

    /// Shorten the sequence to `len` items.
    pub fn truncate(&mut self, len: usize) {
        self.make_mut().truncate(len);
    }

    /// Keep only the items matching `keep`.
    pub fn retain<F>(&mut self, keep: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.make_mut().retain(keep);
    }

    /// Borrow the underlying vector mutably.
    ///
    /// The flag is raised up front since the borrow cannot be observed.
    pub fn make_mut(&mut self) -> &mut Vec<T> {
        self.modified = true;
        &mut self.items
    }

    /// Unwrap into the plain vector, discarding the flag.
    #[must_use]
    pub fn into_inner(self) -> Vec<T> {
        self.items
    }
}

impl<T> Default for TrackedVec<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T> Deref for TrackedVec<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

impl<T> DerefMut for TrackedVec<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.make_mut()
    }
}

impl<T> AsRef<[T]> for TrackedVec<T> {
    fn as_ref(&self) -> &[T] {
        &self.items
    }
}

impl<T: PartialEq> PartialEq for TrackedVec<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Eq> Eq for TrackedVec<T> {}

impl<T> From<Vec<T>> for TrackedVec<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<T> FromIterator<T> for TrackedVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T> Extend<T> for TrackedVec<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.make_mut().extend(iter);
    }
}

impl<'a, T> IntoIterator for &'a TrackedVec<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> IntoIterator for TrackedVec<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for TrackedVec<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.items.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for TrackedVec<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Vec::deserialize(deserializer).map(Self::new)
    }
}

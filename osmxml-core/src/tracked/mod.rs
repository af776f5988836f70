//! Collections that remember whether they were ever mutated.
//!
//! Editors use [`TrackedVec::is_modified`] and [`TrackedMap::is_modified`] to
//! decide which elements belong in an upload. The flag is one-way: it is set
//! by the first mutating call and never cleared, even when a later call
//! restores the original content. Equality (`==`) compares content only.

mod map;
mod vec;

pub use map::TrackedMap;
pub use vec::TrackedVec;

//! Persistence for the favorites set.
//!
//! Storage sits behind a small trait so views can run against the real
//! file-backed store in the product and an in-memory one in tests. The
//! stored form is deliberately simple: a JSON array of listing ids in a
//! single document, the browser-local-storage layout carried over.
//!
//! Backends only load and save whole sets; the toggle/subscribe behavior
//! lives in [`crate::favorites`], on top of whichever backend is passed in.

use std::collections::BTreeSet;

use crate::error::Result;

pub mod fs;
pub mod memory;

/// Abstract persistence for the set of favorited listing ids.
pub trait FavoritesBackend {
    /// Load the stored set. An empty or absent store yields an empty set.
    fn load(&self) -> Result<BTreeSet<String>>;

    /// Persist the full set, replacing whatever was stored before.
    fn save(&mut self, favorites: &BTreeSet<String>) -> Result<()>;
}

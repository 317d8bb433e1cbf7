use std::collections::BTreeSet;

use crate::error::Result;
use crate::store::FavoritesBackend;

/// In-memory favorites store for tests. No persistence.
#[derive(Debug, Default)]
pub struct InMemoryBackend {
    ids: BTreeSet<String>,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }
}

impl FavoritesBackend for InMemoryBackend {
    fn load(&self) -> Result<BTreeSet<String>> {
        Ok(self.ids.clone())
    }

    fn save(&mut self, favorites: &BTreeSet<String>) -> Result<()> {
        self.ids = favorites.clone();
        Ok(())
    }
}

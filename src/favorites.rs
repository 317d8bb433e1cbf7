//! The favorites collaborator.
//!
//! A narrow interface over a persisted set of listing ids: `get`, `toggle`
//! and `subscribe`. It is passed by reference to whichever view needs it,
//! never held as ambient global state, and the filter engine and URL codec
//! know nothing about it. A favorites-only view is built by the caller
//! with [`crate::filters::retain_favorites`].

use std::collections::BTreeSet;

use crate::error::Result;
use crate::store::FavoritesBackend;

type Listener = Box<dyn FnMut(&BTreeSet<String>) + Send>;

pub struct Favorites<B: FavoritesBackend> {
    backend: B,
    ids: BTreeSet<String>,
    listeners: Vec<Listener>,
}

impl<B: FavoritesBackend> Favorites<B> {
    /// Loads the persisted set through `backend`.
    pub fn open(backend: B) -> Result<Self> {
        let ids = backend.load()?;
        Ok(Self {
            backend,
            ids,
            listeners: Vec::new(),
        })
    }

    /// The current set of favorited listing ids.
    pub fn get(&self) -> &BTreeSet<String> {
        &self.ids
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Adds `id` if absent, removes it if present, persists the result and
    /// notifies subscribers. Returns the updated set.
    pub fn toggle(&mut self, id: &str) -> Result<&BTreeSet<String>> {
        if !self.ids.remove(id) {
            self.ids.insert(id.to_string());
        }
        self.backend.save(&self.ids)?;
        for listener in &mut self.listeners {
            listener(&self.ids);
        }
        Ok(&self.ids)
    }

    /// Registers a listener called after every successful toggle.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&BTreeSet<String>) + Send + 'static,
    {
        self.listeners.push(Box::new(listener));
    }
}

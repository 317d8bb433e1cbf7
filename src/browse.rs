//! Page-level refinement and pagination.
//!
//! The catalog pages carry a sidebar filter of their own, on top of the
//! URL-backed [`crate::filters::Filters`]: exact city or location, exact
//! category, an inclusive price slider, a minimum rating, and (on the
//! listings page) an exact bedroom count. Like the core engine, everything
//! here is pure and an empty page is a normal outcome.

use crate::model::{Experience, Listing, Service};

/// Sidebar filter state shared by the listings, experiences and services
/// pages. Fields a page does not expose just stay `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Refine {
    /// Exact city (listings) or location (experiences).
    pub place: Option<String>,
    /// Exact category (experiences and services).
    pub category: Option<String>,
    /// Inclusive price bounds, both ends.
    pub price_range: Option<(f64, f64)>,
    pub min_rating: Option<f64>,
    /// Exact bedroom count; the listings sidebar matches exactly, unlike
    /// the URL filter's minimum-rooms semantics.
    pub exact_rooms: Option<u32>,
}

impl Refine {
    /// Whether any control differs from its resting state, i.e. whether a
    /// "clear filters" affordance should show.
    pub fn is_active(&self) -> bool {
        *self != Refine::default()
    }

    pub fn clear(&mut self) {
        *self = Refine::default();
    }

    fn price_ok(&self, price: f64) -> bool {
        match self.price_range {
            Some((lo, hi)) => price >= lo && price <= hi,
            None => true,
        }
    }

    fn rating_ok(&self, rating: f64) -> bool {
        match self.min_rating {
            Some(min) => rating >= min,
            None => true,
        }
    }
}

pub fn refine_listings(listings: &[Listing], refine: &Refine) -> Vec<Listing> {
    listings
        .iter()
        .filter(|l| {
            refine.place.as_deref().map_or(true, |place| l.city == place)
                && refine.price_ok(l.price)
                && refine.rating_ok(l.rating)
                && refine.exact_rooms.map_or(true, |rooms| l.rooms == rooms)
        })
        .cloned()
        .collect()
}

pub fn refine_experiences(experiences: &[Experience], refine: &Refine) -> Vec<Experience> {
    experiences
        .iter()
        .filter(|e| {
            refine
                .place
                .as_deref()
                .map_or(true, |place| e.location == place)
                && refine
                    .category
                    .as_deref()
                    .map_or(true, |category| e.category == category)
                && refine.price_ok(e.price)
                && refine.rating_ok(e.rating)
        })
        .cloned()
        .collect()
}

pub fn refine_services(services: &[Service], refine: &Refine) -> Vec<Service> {
    services
        .iter()
        .filter(|s| {
            refine
                .category
                .as_deref()
                .map_or(true, |category| s.category == category)
                && refine.price_ok(s.price)
                && refine.rating_ok(s.rating)
        })
        .cloned()
        .collect()
}

/// One page of results plus enough context to render the pager.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based page number as requested (clamped to at least 1).
    pub page: usize,
    pub per_page: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

/// Slices one 1-based page out of `items`.
///
/// A page past the end comes back with no items rather than failing, and
/// page 0 is treated as page 1.
pub fn paginate<T: Clone>(items: &[T], page: usize, per_page: usize) -> Page<T> {
    let total_items = items.len();
    let total_pages = if per_page == 0 {
        0
    } else {
        total_items.div_ceil(per_page)
    };
    let page = page.max(1);
    let start = (page - 1).saturating_mul(per_page);
    let page_items = if per_page == 0 || start >= total_items {
        Vec::new()
    } else {
        items[start..(start + per_page).min(total_items)].to_vec()
    };

    Page {
        items: page_items,
        page,
        per_page,
        total_items,
        total_pages,
    }
}

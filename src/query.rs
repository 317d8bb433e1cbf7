//! The filter state ⇄ query parameter codec.
//!
//! Filter state travels through the address bar so links can be shared,
//! bookmarked and reloaded. The parameter keys are therefore a stable
//! interface:
//!
//! | key        | field       | form                        |
//! |------------|-------------|-----------------------------|
//! | `q`        | query       | verbatim text               |
//! | `type`     | kind        | lowercase enum token        |
//! | `min`      | min_price   | base-10 integer, > 0        |
//! | `max`      | max_price   | base-10 integer, > 0        |
//! | `rooms`    | rooms       | base-10 integer, > 0        |
//! | `sort`     | sort        | enum token (`price_asc`, …) |
//! | `checkIn`  | check_in    | `YYYY-MM-DD`                |
//! | `checkOut` | check_out   | `YYYY-MM-DD`                |
//! | `adults`   | adults      | base-10 integer, > 0        |
//! | `children` | children    | base-10 integer, > 0        |
//! | `infants`  | infants     | base-10 integer, > 0        |
//! | `pets`     | pets        | base-10 integer, > 0        |
//!
//! Encoding is sparse: absent fields emit no pair at all, and an empty
//! query or a zero guest count counts as absent. Decoding never fails;
//! a malformed or out-of-domain value drops that one field and the rest
//! of the specification survives, because address-bar content is
//! user-editable and must never take the page down.
//!
//! The codec only transforms values. Reading and writing the address bar
//! belongs to the navigation collaborator, not to this module.

use chrono::NaiveDate;
use tracing::debug;
use url::form_urlencoded;

use crate::filters::{Filters, SortOption};
use crate::model::ListingType;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Serializes the present fields of `filters` as ordered key/value pairs.
pub fn filters_to_params(filters: &Filters) -> Vec<(String, String)> {
    let mut params: Vec<(String, String)> = Vec::new();
    let mut push = |key: &str, value: String| params.push((key.to_string(), value));

    if let Some(q) = filters.query.as_deref() {
        if !q.is_empty() {
            push("q", q.to_string());
        }
    }
    if let Some(kind) = filters.kind {
        push("type", kind.as_str().to_string());
    }
    if let Some(min) = filters.min_price {
        push("min", min.to_string());
    }
    if let Some(max) = filters.max_price {
        push("max", max.to_string());
    }
    if let Some(rooms) = filters.rooms {
        push("rooms", rooms.to_string());
    }
    if let Some(sort) = filters.sort {
        push("sort", sort.as_str().to_string());
    }
    if let Some(date) = filters.check_in {
        push("checkIn", date.format(DATE_FORMAT).to_string());
    }
    if let Some(date) = filters.check_out {
        push("checkOut", date.format(DATE_FORMAT).to_string());
    }
    // A zero guest count means "not chosen" and stays out of the URL.
    for (key, value) in [
        ("adults", filters.adults),
        ("children", filters.children),
        ("infants", filters.infants),
        ("pets", filters.pets),
    ] {
        if let Some(n) = value {
            if n > 0 {
                push(key, n.to_string());
            }
        }
    }

    params
}

/// Rebuilds a [`Filters`] from raw key/value pairs.
///
/// Each recognized pair is parsed and validated independently; an invalid
/// value is dropped without touching the other fields. When a key repeats,
/// the last valid occurrence wins. Unrecognized keys are ignored so old
/// links keep working as fields are added.
pub fn params_to_filters<'a, I>(params: I) -> Filters
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut filters = Filters::default();

    for (key, value) in params {
        match key {
            "q" => {
                if !value.is_empty() {
                    filters.query = Some(value.to_string());
                }
            }
            "type" => {
                if let Some(kind) = parse_token::<ListingType>(key, value) {
                    filters.kind = Some(kind);
                }
            }
            "min" => {
                if let Some(n) = parse_positive(key, value) {
                    filters.min_price = Some(n);
                }
            }
            "max" => {
                if let Some(n) = parse_positive(key, value) {
                    filters.max_price = Some(n);
                }
            }
            "rooms" => {
                if let Some(n) = parse_positive(key, value) {
                    filters.rooms = Some(n);
                }
            }
            "sort" => {
                if let Some(sort) = parse_token::<SortOption>(key, value) {
                    filters.sort = Some(sort);
                }
            }
            "checkIn" => {
                if let Some(date) = parse_date(key, value) {
                    filters.check_in = Some(date);
                }
            }
            "checkOut" => {
                if let Some(date) = parse_date(key, value) {
                    filters.check_out = Some(date);
                }
            }
            "adults" => {
                if let Some(n) = parse_count(key, value) {
                    filters.adults = Some(n);
                }
            }
            "children" => {
                if let Some(n) = parse_count(key, value) {
                    filters.children = Some(n);
                }
            }
            "infants" => {
                if let Some(n) = parse_count(key, value) {
                    filters.infants = Some(n);
                }
            }
            "pets" => {
                if let Some(n) = parse_count(key, value) {
                    filters.pets = Some(n);
                }
            }
            _ => {}
        }
    }

    filters
}

/// Renders pairs as an `application/x-www-form-urlencoded` query string,
/// without a leading `?`.
pub fn to_query_string(params: &[(String, String)]) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(params.iter().map(|(k, v)| (k.as_str(), v.as_str())))
        .finish()
}

/// Splits a query string (with or without a leading `?`) into decoded
/// key/value pairs.
pub fn parse_query_string(query: &str) -> Vec<(String, String)> {
    let query = query.strip_prefix('?').unwrap_or(query);
    form_urlencoded::parse(query.as_bytes())
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

/// `filters_to_params` composed with `to_query_string`.
pub fn filters_to_query(filters: &Filters) -> String {
    to_query_string(&filters_to_params(filters))
}

/// `parse_query_string` composed with `params_to_filters`.
pub fn filters_from_query(query: &str) -> Filters {
    let pairs = parse_query_string(query);
    params_to_filters(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())))
}

fn parse_token<T: std::str::FromStr>(key: &str, value: &str) -> Option<T> {
    match value.parse::<T>() {
        Ok(token) => Some(token),
        Err(_) => {
            debug!(key, value, "dropping unrecognized token");
            None
        }
    }
}

fn parse_positive(key: &str, value: &str) -> Option<u32> {
    match value.parse::<u32>() {
        Ok(n) if n > 0 => Some(n),
        _ => {
            debug!(key, value, "dropping non-positive or malformed integer");
            None
        }
    }
}

fn parse_count(key: &str, value: &str) -> Option<u32> {
    match value.parse::<u32>() {
        Ok(n) => Some(n),
        Err(_) => {
            debug!(key, value, "dropping malformed count");
            None
        }
    }
}

fn parse_date(key: &str, value: &str) -> Option<NaiveDate> {
    match NaiveDate::parse_from_str(value, DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(_) => {
            debug!(key, value, "dropping malformed date");
            None
        }
    }
}

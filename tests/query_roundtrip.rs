use chrono::NaiveDate;
use proptest::option;
use proptest::prelude::*;

use sejour::filters::{Filters, SortOption};
use sejour::model::ListingType;
use sejour::query;

fn listing_type() -> impl Strategy<Value = ListingType> {
    prop::sample::select(ListingType::ALL.to_vec())
}

fn sort_option() -> impl Strategy<Value = SortOption> {
    prop::sample::select(SortOption::ALL.to_vec())
}

fn calendar_date() -> impl Strategy<Value = NaiveDate> {
    (2024i32..2030, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

/// Specifications holding only valid present values, the domain the
/// round-trip contract covers. Zero guest counts are excluded: encoding
/// normalizes them to absent by design.
fn valid_filters() -> impl Strategy<Value = Filters> {
    let first = (
        option::of("[a-zà-ÿ0-9&' ]{1,24}"),
        option::of(listing_type()),
        option::of(1u32..=900),
        option::of(1u32..=900),
        option::of(1u32..=6),
        option::of(sort_option()),
    );
    let second = (
        option::of(calendar_date()),
        option::of(calendar_date()),
        option::of(1u32..=8),
        option::of(1u32..=8),
        option::of(1u32..=4),
        option::of(1u32..=3),
    );
    (first, second).prop_map(
        |(
            (query, kind, min_price, max_price, rooms, sort),
            (check_in, check_out, adults, children, infants, pets),
        )| Filters {
            query,
            kind,
            min_price,
            max_price,
            rooms,
            sort,
            check_in,
            check_out,
            adults,
            children,
            infants,
            pets,
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 500, ..ProptestConfig::default()
    })]

    #[test]
    fn decode_inverts_encode(filters in valid_filters()) {
        let params = query::filters_to_params(&filters);
        let decoded =
            query::params_to_filters(params.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        prop_assert_eq!(decoded, filters);
    }

    #[test]
    fn round_trip_survives_the_query_string_form(filters in valid_filters()) {
        let qs = query::filters_to_query(&filters);
        prop_assert_eq!(query::filters_from_query(&qs), filters);
    }

    #[test]
    fn encoding_is_sparse(filters in valid_filters()) {
        let expected = [
            filters.query.is_some(),
            filters.kind.is_some(),
            filters.min_price.is_some(),
            filters.max_price.is_some(),
            filters.rooms.is_some(),
            filters.sort.is_some(),
            filters.check_in.is_some(),
            filters.check_out.is_some(),
            filters.adults.is_some(),
            filters.children.is_some(),
            filters.infants.is_some(),
            filters.pets.is_some(),
        ]
        .iter()
        .filter(|present| **present)
        .count();
        prop_assert_eq!(query::filters_to_params(&filters).len(), expected);
    }

    #[test]
    fn decoding_arbitrary_pairs_never_panics(
        pairs in prop::collection::vec((".{0,12}", ".{0,12}"), 0..8)
    ) {
        let decoded = query::params_to_filters(
            pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())),
        );
        // Whatever came out must itself encode cleanly.
        let _ = query::filters_to_query(&decoded);
    }

    #[test]
    fn decoding_arbitrary_query_strings_never_panics(raw in ".{0,64}") {
        let _ = query::filters_from_query(&raw);
    }
}

#[test]
fn zero_guest_counts_normalize_to_absent() {
    let filters = Filters {
        adults: Some(0),
        children: Some(0),
        ..Filters::default()
    };
    assert!(query::filters_to_params(&filters).is_empty());
    assert!(query::filters_from_query(&query::filters_to_query(&filters)).is_empty());
}

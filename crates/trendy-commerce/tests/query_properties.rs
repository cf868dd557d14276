//! Property tests for the catalog query engine.

use proptest::prelude::*;
use trendy_commerce::money::{Currency, Money};
use trendy_commerce::prelude::*;

fn arb_catalog() -> impl Strategy<Value = Vec<Product>> {
    let row = (
        "[a-z]{1,8}( [a-z]{1,8})?",
        prop::sample::select(vec!["Men", "Women", "Accessories", "Footwear", "Outerwear"]),
        0i64..50_000,
        prop::option::of(0.0f64..=5.0),
        any::<bool>(),
    );

    prop::collection::vec(row, 0..24).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (name, category, cents, rating, is_new))| {
                let mut p = Product::new(
                    ProductId::new(format!("p-{}", i)),
                    name,
                    category,
                    Money::new(cents, Currency::USD),
                );
                if let Some(r) = rating {
                    p = p.with_rating(r, 1);
                }
                if is_new {
                    p = p.with_new_flag();
                }
                p
            })
            .collect()
    })
}

fn arb_sort() -> impl Strategy<Value = SortKey> {
    prop::sample::select(SortKey::ALL.to_vec())
}

fn arb_query_text() -> impl Strategy<Value = String> {
    prop_oneof![Just(String::new()), "[a-z]{0,5}".prop_map(String::from)]
}

proptest! {
    #[test]
    fn filtering_is_idempotent(catalog in arb_catalog(), q in arb_query_text(), sort in arb_sort()) {
        let once = search::query(&catalog, &q, sort);
        let twice = search::query(&once, &q, sort);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn results_are_a_subset_that_matches(catalog in arb_catalog(), q in arb_query_text(), sort in arb_sort()) {
        let results = search::query(&catalog, &q, sort);
        let needle = q.to_lowercase();
        for p in &results {
            prop_assert!(catalog.iter().any(|orig| orig == p));
            prop_assert!(needle.is_empty() || p.matches(&needle));
        }
        // Nothing that matches is dropped.
        let expected = catalog
            .iter()
            .filter(|p| needle.is_empty() || p.matches(&needle))
            .count();
        prop_assert_eq!(results.len(), expected);
    }

    #[test]
    fn price_low_is_monotonic(catalog in arb_catalog(), q in arb_query_text()) {
        let results = search::query(&catalog, &q, SortKey::PriceLow);
        for pair in results.windows(2) {
            prop_assert!(pair[0].price.amount_cents <= pair[1].price.amount_cents);
        }
    }

    #[test]
    fn price_high_is_monotonic(catalog in arb_catalog(), q in arb_query_text()) {
        let results = search::query(&catalog, &q, SortKey::PriceHigh);
        for pair in results.windows(2) {
            prop_assert!(pair[0].price.amount_cents >= pair[1].price.amount_cents);
        }
    }

    #[test]
    fn rating_is_non_increasing(catalog in arb_catalog(), q in arb_query_text()) {
        let results = search::query(&catalog, &q, SortKey::Rating);
        for pair in results.windows(2) {
            prop_assert!(pair[0].rating_or_zero() >= pair[1].rating_or_zero());
        }
    }

    #[test]
    fn newest_puts_new_arrivals_first(catalog in arb_catalog()) {
        let results = search::query(&catalog, "", SortKey::Newest);
        let first_old = results.iter().position(|p| !p.is_new);
        if let Some(boundary) = first_old {
            prop_assert!(results[boundary..].iter().all(|p| !p.is_new));
        }
    }

    #[test]
    fn empty_query_relevance_round_trips(catalog in arb_catalog()) {
        let results = search::query(&catalog, "", SortKey::Relevance);
        prop_assert_eq!(results, catalog);
    }
}

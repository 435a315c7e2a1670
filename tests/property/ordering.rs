//! Stable partition of marked events and order-preserving dining filters

use concierge::catalog::enrich::{partition_trailing, TRAILING_EVENT_MARKER};
use concierge::catalog::{DiningOption, ItemBase, LodgingOption};
use proptest::prelude::*;

fn name_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => "[A-Za-z ]{1,12}",
        1 => "[A-Za-z]{0,5}".prop_map(|prefix| format!("{}Piper{}", prefix, prefix.len())),
    ]
}

fn dining(i: usize, cuisine: &str) -> DiningOption {
    DiningOption {
        base: ItemBase {
            id: format!("r{}", i),
            name: format!("Restaurant {}", i),
            description: String::new(),
            image: String::new(),
            price_range: "$$".to_string(),
        },
        cuisine: cuisine.to_string(),
        signature_dish: "Dish".to_string(),
    }
}

fn is_marked(name: &str) -> bool {
    name.to_lowercase().contains(TRAILING_EVENT_MARKER)
}

proptest! {
    #[test]
    fn partition_keeps_relative_order(names in prop::collection::vec(name_strategy(), 0..12)) {
        let indexed: Vec<(usize, String)> = names.iter().cloned().enumerate().collect();
        let result = partition_trailing(indexed, |(_, n)| n.as_str());

        prop_assert_eq!(result.len(), names.len());

        // every unmarked item precedes every marked one
        let first_marked = result.iter().position(|(_, n)| is_marked(n)).unwrap_or(result.len());
        prop_assert!(result[first_marked..].iter().all(|(_, n)| is_marked(n)));

        // both halves keep their original order
        let unmarked: Vec<usize> = result[..first_marked].iter().map(|(i, _)| *i).collect();
        let marked: Vec<usize> = result[first_marked..].iter().map(|(i, _)| *i).collect();
        prop_assert!(unmarked.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(marked.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn dining_filter_is_an_ordered_subsequence(
        cuisines in prop::collection::vec(
            prop::sample::select(vec!["Italian", "French", "Mexican"]),
            0..20,
        ),
        wanted in prop::sample::select(vec!["Italian", "French", "Mexican"]),
    ) {
        let lodging = LodgingOption {
            base: ItemBase {
                id: "h".to_string(),
                name: "Hotel".to_string(),
                description: String::new(),
                image: String::new(),
                price_range: "$$$".to_string(),
            },
            location: "Southbank".to_string(),
            top_features: vec![],
            restaurants: cuisines.iter().enumerate().map(|(i, c)| dining(i, c)).collect(),
        };

        let filtered: Vec<&str> = lodging.dining_for(wanted).map(|d| d.id()).collect();
        let expected: Vec<String> = cuisines
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == wanted)
            .map(|(i, _)| format!("r{}", i))
            .collect();
        prop_assert_eq!(filtered, expected.iter().map(|s| s.as_str()).collect::<Vec<_>>());
    }
}

#[test]
fn test_single_marked_event_moves_last() {
    let names = vec!["A", "B", "PiperEvent", "C"];
    assert_eq!(
        partition_trailing(names, |n| *n),
        vec!["A", "B", "C", "PiperEvent"]
    );
}

//! Random walks through the flow never leave the selection inconsistent

use async_trait::async_trait;
use concierge::catalog::{Catalog, CatalogSource, DiningOption, EventOption, LodgingOption};
use concierge::flow::{SelectionFlowController, Step};
use proptest::prelude::*;

struct FixedSource(Catalog);

#[async_trait]
impl CatalogSource for FixedSource {
    async fn get_catalog(&self) -> Catalog {
        self.0.clone()
    }

    async fn generate_personal_message(
        &self,
        event: &EventOption,
        _lodging: &LodgingOption,
        _dining: &DiningOption,
    ) -> String {
        event.name().to_string()
    }
}

fn catalog() -> Catalog {
    let restaurants = |prefix: &str| {
        serde_json::json!([
            { "id": format!("{}-r1", prefix), "name": "R1", "description": "", "priceRange": "$", "cuisine": "Italian", "signatureDish": "Pasta" },
            { "id": format!("{}-r2", prefix), "name": "R2", "description": "", "priceRange": "$", "cuisine": "French", "signatureDish": "Soufflé" },
            { "id": format!("{}-r3", prefix), "name": "R3", "description": "", "priceRange": "$", "cuisine": "Italian", "signatureDish": "Risotto" }
        ])
    };
    let hotels = |prefix: &str| {
        serde_json::json!([
            { "id": format!("{}-h1", prefix), "name": "H1", "description": "", "priceRange": "$", "location": "CBD",
              "topFeatures": [], "restaurants": restaurants(&format!("{}-h1", prefix)) },
            { "id": format!("{}-h2", prefix), "name": "H2", "description": "", "priceRange": "$", "location": "CBD",
              "topFeatures": [], "restaurants": restaurants(&format!("{}-h2", prefix)) }
        ])
    };
    let value = serde_json::json!([
        { "id": "a", "name": "A", "description": "", "priceRange": "$", "venue": "V", "dates": "D", "criticRating": "5", "hotels": hotels("a") },
        { "id": "b", "name": "B", "description": "", "priceRange": "$", "venue": "V", "dates": "D", "criticRating": "4", "hotels": hotels("b") }
    ]);
    serde_json::from_value(value).expect("valid catalog")
}

#[derive(Debug, Clone)]
enum Op {
    Start,
    Event(&'static str),
    Lodging(&'static str),
    Cuisine(&'static str),
    Dining(&'static str),
    Back,
    Home,
    Restart,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Start),
        prop::sample::select(vec!["a", "b", "zz"]).prop_map(Op::Event),
        prop::sample::select(vec!["a-h1", "a-h2", "b-h1", "b-h2"]).prop_map(Op::Lodging),
        prop::sample::select(vec!["Italian", "French", "Mexican"]).prop_map(Op::Cuisine),
        prop::sample::select(vec!["a-h1-r1", "a-h1-r2", "a-h2-r3", "b-h1-r1", "b-h2-r2"])
            .prop_map(Op::Dining),
        Just(Op::Back),
        Just(Op::Home),
        Just(Op::Restart),
    ]
}

proptest! {
    #[test]
    fn selection_stays_consistent(ops in prop::collection::vec(op_strategy(), 0..40)) {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let source = FixedSource(catalog());
        let mut flow = SelectionFlowController::new();

        for op in ops {
            let before = flow.selection().clone();
            let result = match &op {
                Op::Start => runtime.block_on(flow.start(&source)).map(|_| ()),
                Op::Event(id) => flow.choose_event(id),
                Op::Lodging(id) => flow.choose_lodging(id),
                Op::Cuisine(label) => flow.choose_cuisine(label),
                Op::Dining(id) => flow.choose_dining(id),
                Op::Back => { flow.back(); Ok(()) }
                Op::Home => { flow.go_home(); Ok(()) }
                Op::Restart => flow.restart(),
            };

            let selection = flow.selection();
            if result.is_err() {
                prop_assert_eq!(selection, &before);
            }
            if let (Some(event), Some(lodging)) = (&selection.event, &selection.lodging) {
                prop_assert!(event.hotels.iter().any(|h| h == lodging));
            }
            if let Some(dining) = &selection.dining {
                let lodging = selection.lodging.as_ref();
                prop_assert!(lodging.is_some_and(|l| l.restaurants.contains(dining)));
                prop_assert_eq!(selection.cuisine.as_deref(), Some(dining.cuisine.as_str()));
            }
            if selection.lodging.is_some() {
                prop_assert!(selection.event.is_some());
            }
            if flow.step() == Step::Summary {
                prop_assert!(selection.complete().is_some());
            }
        }
    }
}

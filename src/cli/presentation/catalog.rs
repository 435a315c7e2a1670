//! Catalog command presentation.

use super::shared::{format_section_heading, to_json};
use crate::catalog::Catalog;
use crate::error::ApiError;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;

pub fn format_catalog_json(catalog: &Catalog) -> Result<String, ApiError> {
    to_json(catalog)
}

pub fn format_catalog_text(catalog: &Catalog) -> String {
    if catalog.is_empty() {
        return "No catalog available. Generation failed or returned nothing; try again with --refresh.\n"
            .to_string();
    }

    let mut out = format!(
        "{}\n  {} events, {} hotels, {} restaurants\n\n",
        format_section_heading("Catalog"),
        catalog.len(),
        catalog.lodging_count(),
        catalog.dining_count()
    );

    let mut events = Table::new();
    events.load_preset(UTF8_BORDERS_ONLY);
    events.set_header(vec!["ID", "Event", "Venue", "Dates", "Rating", "Price"]);
    for event in catalog.events() {
        events.add_row(vec![
            event.id(),
            event.name(),
            event.venue.as_str(),
            event.dates.as_str(),
            event.critic_rating.as_str(),
            event.base.price_range.as_str(),
        ]);
    }
    out.push_str(&format!("{}\n\n", format_section_heading("Events")));
    out.push_str(&format!("{}\n\n", events));

    let mut hotels = Table::new();
    hotels.load_preset(UTF8_BORDERS_ONLY);
    hotels.set_header(vec!["Event", "ID", "Hotel", "Location", "Restaurants"]);
    for event in catalog.events() {
        for hotel in &event.hotels {
            hotels.add_row(vec![
                event.id().to_string(),
                hotel.id().to_string(),
                hotel.name().to_string(),
                hotel.location.clone(),
                hotel.restaurants.len().to_string(),
            ]);
        }
    }
    out.push_str(&format!("{}\n\n", format_section_heading("Hotels")));
    out.push_str(&format!("{}\n\n", hotels));

    let mut dining = Table::new();
    dining.load_preset(UTF8_BORDERS_ONLY);
    dining.set_header(vec!["Hotel", "ID", "Cuisine", "Restaurant", "Signature dish"]);
    for event in catalog.events() {
        for hotel in &event.hotels {
            for restaurant in &hotel.restaurants {
                dining.add_row(vec![
                    hotel.id(),
                    restaurant.id(),
                    restaurant.cuisine.as_str(),
                    restaurant.name(),
                    restaurant.signature_dish.as_str(),
                ]);
            }
        }
    }
    out.push_str(&format!("{}\n\n", format_section_heading("Dining")));
    out.push_str(&format!("{}\n", dining));
    out
}

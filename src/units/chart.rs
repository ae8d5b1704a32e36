use serde_json::json;

use super::UnitModule;
use crate::catalog::{CategoryTag, EntryDescriptor, StaticMarkup};
use crate::queue::RegistrationQueue;

pub struct ChartUnits;

impl UnitModule for ChartUnits {
    fn module_name() -> &'static str {
        "chart"
    }

    fn declare(queue: &mut RegistrationQueue) {
        queue.declare(
            StaticMarkup::shared(
                "<figure class=\"chart chart-bar\" data-series='{{data}}'></figure>",
            ),
            EntryDescriptor::new("bar-chart")
                .name("Bar Chart")
                .description("Vertical bars comparing values across categories")
                .category(CategoryTag::Chart)
                .tags(["chart", "bar", "data"])
                .props(json!({ "data": "array of { label, value }" })),
        );

        queue.declare(
            StaticMarkup::shared(
                "<figure class=\"chart chart-line\" data-series='{{data}}'></figure>",
            ),
            EntryDescriptor::new("line-chart")
                .name("Line Chart")
                .description("Trend line over an ordered series")
                .category(CategoryTag::Chart)
                .tags(["chart", "line", "trend", "data"])
                .props(json!({ "data": "array of { x, y }", "smooth": "boolean" })),
        );
    }
}

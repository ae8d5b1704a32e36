use serde_json::json;

use super::UnitModule;
use crate::catalog::{CategoryTag, EntryDescriptor, StaticMarkup};
use crate::queue::RegistrationQueue;

pub struct LayoutUnits;

impl UnitModule for LayoutUnits {
    fn module_name() -> &'static str {
        "layout"
    }

    fn declare(queue: &mut RegistrationQueue) {
        queue.declare(
            StaticMarkup::shared("<div class=\"grid\" style=\"--columns: {{columns}}\"></div>"),
            EntryDescriptor::new("grid")
                .name("Grid")
                .description("Responsive grid that wraps its children into columns")
                .category(CategoryTag::Layout)
                .tags(["grid", "columns", "responsive"])
                .props(json!({ "columns": "number" })),
        );

        queue.declare(
            StaticMarkup::shared("<div class=\"split\"><aside></aside><main></main></div>"),
            EntryDescriptor::new("split-pane")
                .name("Split Pane")
                .description("Two columns with a narrow sidebar and a wide main area")
                .category(CategoryTag::Layout)
                .tags(["columns", "sidebar"]),
        );
    }
}

use serde_json::json;

use super::UnitModule;
use crate::catalog::{CategoryTag, EntryDescriptor, StaticMarkup};
use crate::queue::RegistrationQueue;

pub struct FormUnits;

impl UnitModule for FormUnits {
    fn module_name() -> &'static str {
        "form"
    }

    fn declare(queue: &mut RegistrationQueue) {
        queue.declare(
            StaticMarkup::shared(
                "<label>{{label}}<input type=\"text\" placeholder=\"{{placeholder}}\"/></label>",
            ),
            EntryDescriptor::new("text-input")
                .name("Text Input")
                .description("Single-line labelled text field")
                .category(CategoryTag::Form)
                .tags(["input", "form", "text"])
                .props(json!({ "label": "string", "placeholder": "string" })),
        );

        queue.declare(
            StaticMarkup::shared(
                "<label>{{label}}<select data-options='{{options}}'></select></label>",
            ),
            EntryDescriptor::new("select")
                .name("Select")
                .description("Drop-down picker over a fixed list of options")
                .category(CategoryTag::Form)
                .tags(["select", "dropdown", "form"])
                .props(json!({ "label": "string", "options": "array of string" })),
        );
    }
}

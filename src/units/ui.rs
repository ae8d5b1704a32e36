use serde_json::json;

use super::UnitModule;
use crate::catalog::{CategoryTag, EntryDescriptor, StaticMarkup};
use crate::queue::RegistrationQueue;

/// Buttons, cards and other basic visual building blocks
pub struct UiUnits;

impl UnitModule for UiUnits {
    fn module_name() -> &'static str {
        "ui"
    }

    fn declare(queue: &mut RegistrationQueue) {
        queue.declare(
            StaticMarkup::shared("<button class=\"btn btn-{{variant}}\">{{label}}</button>"),
            EntryDescriptor::new("button")
                .name("Button")
                .description("Clickable button with primary, secondary and ghost variants")
                .category(CategoryTag::Ui)
                .tags(["button", "action", "basic"])
                .props(json!({ "label": "string", "variant": "primary | secondary | ghost" })),
        );

        queue.declare(
            StaticMarkup::shared(
                "<article class=\"card\"><h3>{{title}}</h3><p>{{body}}</p></article>",
            ),
            EntryDescriptor::new("card")
                .name("Card")
                .description("Bordered container with a title and body text")
                .category(CategoryTag::Ui)
                .tags(["card", "container"])
                .props(json!({ "title": "string", "body": "string" })),
        );

        queue.declare(
            StaticMarkup::shared("<div class=\"callout callout-{{tone}}\">{{text}}</div>"),
            EntryDescriptor::new("callout")
                .name("Callout")
                .description("Highlighted note, tip or warning box")
                .category(CategoryTag::Ui)
                .tags(["note", "tip", "warning"])
                .template(":::component{name=\"Callout\" tone=\"tip\"}\nWrite the note here\n:::")
                .props(json!({ "tone": "info | tip | warning", "text": "string" })),
        );
    }
}

//! Generative and 3D units. These render a mount point; the authoring tool
//! loads the actual runtime.

use serde_json::json;

use super::UnitModule;
use crate::catalog::{CategoryTag, EntryDescriptor, StaticMarkup};
use crate::queue::RegistrationQueue;

pub struct CreativeUnits;

impl UnitModule for CreativeUnits {
    fn module_name() -> &'static str {
        "creative"
    }

    fn declare(queue: &mut RegistrationQueue) {
        queue.declare(
            StaticMarkup::shared("<canvas class=\"sketch\" data-sketch=\"{{sketch}}\"></canvas>"),
            EntryDescriptor::new("p5-sketch")
                .name("Sketch Canvas")
                .description("Canvas driven by a creative-coding sketch")
                .category(CategoryTag::CreativeCoding)
                .tags(["p5", "canvas", "generative"])
                .author("Studio")
                .props(json!({ "sketch": "string" })),
        );

        queue.declare(
            StaticMarkup::shared("<div class=\"scene3d\" data-model=\"{{model}}\"></div>"),
            EntryDescriptor::new("model-viewer")
                .name("Model Viewer")
                .description("Orbitable viewer for a 3D model")
                .category(CategoryTag::ThreeD)
                .tags(["3d", "model", "webgl"])
                .version("0.9.0")
                .props(json!({ "model": "url", "autoRotate": "boolean" })),
        );
    }
}

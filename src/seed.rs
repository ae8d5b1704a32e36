//! Hand-authored units registered straight into the catalog at startup.
//!
//! These bypass the registration queue so the catalog is never empty, even
//! when deferred activation is skipped.

use tracing::{error, info};

use crate::catalog::{Catalog, CategoryTag, EntryDescriptor, Implementation, StaticMarkup};

pub struct SeedUnit {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: CategoryTag,
    pub implementation: Implementation,
    pub template: &'static str,
}

impl SeedUnit {
    fn descriptor(&self) -> EntryDescriptor {
        EntryDescriptor::new(self.id)
            .name(self.name)
            .description(self.description)
            .category(self.category)
            .template(self.template)
    }
}

pub fn bootstrap_seeds() -> Vec<SeedUnit> {
    vec![
        SeedUnit {
            id: "counter",
            name: "Counter",
            description: "Button that counts its own clicks",
            category: CategoryTag::Interaction,
            implementation: StaticMarkup::shared(
                "<button class=\"counter\" data-start=\"{{start}}\">{{start}}</button>",
            ),
            template: ":::component{name=\"Counter\" start=\"0\"}\n:::",
        },
        SeedUnit {
            id: "image-gallery",
            name: "Image Gallery",
            description: "Row of thumbnails that open in a zoomable viewer",
            category: CategoryTag::Media,
            implementation: StaticMarkup::shared(
                "<div class=\"gallery\" data-images='{{images}}'></div>",
            ),
            template: ":::component{name=\"Image Gallery\"}\n![alt](url)\n:::",
        },
        SeedUnit {
            id: "embed",
            name: "Embed",
            description: "Sandboxed frame for external content",
            category: CategoryTag::Other,
            implementation: StaticMarkup::shared("<iframe src=\"{{src}}\" sandbox></iframe>"),
            template: ":::component{name=\"Embed\" src=\"https://\"}\n:::",
        },
    ]
}

/// Register every seed directly. Returns how many landed.
pub fn register_seeds(catalog: &mut Catalog) -> usize {
    let mut registered = 0;
    for seed in bootstrap_seeds() {
        let descriptor = seed.descriptor();
        match catalog.register(seed.implementation, descriptor) {
            Ok(()) => registered += 1,
            Err(e) => error!("Failed to register seed unit '{}': {}", seed.id, e),
        }
    }
    info!("Registered {} bootstrap units", registered);
    registered
}

use tracing::{info, warn};

use crate::catalog::Catalog;
use crate::config::CatalogConfig;
use crate::metrics::CatalogMetrics;
use crate::queue::{DrainReport, RegistrationQueue};
use crate::seed;
use crate::units;

/// Startup summary
#[derive(Debug, Default)]
pub struct BootstrapSummary {
    pub seeded: usize,
    pub drain: DrainReport,
}

/// Build the catalog the host program owns: seeds first, then one activation
/// pass over the built-in declarations. Declarations win over seeds that
/// share an id.
pub fn build_catalog(config: &CatalogConfig) -> (Catalog, BootstrapSummary) {
    CatalogMetrics::register_metrics();

    let mut catalog = Catalog::new();
    let mut summary = BootstrapSummary::default();

    if config.seed_bootstrap {
        summary.seeded = seed::register_seeds(&mut catalog);
    }

    let mut queue = RegistrationQueue::new();
    if config.declare_builtins {
        units::declare_builtin_units(&mut queue);
    }
    summary.drain = queue.drain(&mut catalog);

    if catalog.is_empty() {
        warn!(
            "Catalog is empty after bootstrap; seeding and built-in declarations are both disabled"
        );
    }
    info!(
        "Catalog ready with {} units ({} seeded, {} declared, {} failed)",
        catalog.len(),
        summary.seeded,
        summary.drain.registered,
        summary.drain.failed
    );
    (catalog, summary)
}

//! Staging buffer for unit declarations made before the catalog is ready.
//!
//! Declaring never touches the catalog. The host decides when to activate the
//! backlog with [`RegistrationQueue::drain`], so the order in which declaring
//! modules run does not matter.

use tracing::{debug, error, info};

use crate::catalog::{Catalog, EntryDescriptor, Implementation};
use crate::error::{CatalogError, Result};
use crate::metrics::CatalogMetrics;

/// A declaration waiting for activation
#[derive(Debug)]
pub struct PendingEntry {
    pub implementation: Option<Implementation>,
    pub descriptor: EntryDescriptor,
}

/// Outcome of one drain pass
#[derive(Debug, Default)]
pub struct DrainReport {
    pub registered: usize,
    pub failed: usize,
    pub errors: Vec<String>,
}

impl DrainReport {
    pub fn total_processed(&self) -> usize {
        self.registered + self.failed
    }
}

/// FIFO of pending declarations. Append-only until drained; no deduplication.
#[derive(Debug, Default)]
pub struct RegistrationQueue {
    pending: Vec<PendingEntry>,
}

impl RegistrationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a declaration. `None` for the implementation is accepted here and
    /// rejected at activation time.
    pub fn enqueue(&mut self, implementation: Option<Implementation>, descriptor: EntryDescriptor) {
        debug!("Queued declaration '{}' ({} pending)", descriptor.id, self.pending.len() + 1);
        self.pending.push(PendingEntry {
            implementation,
            descriptor,
        });
        CatalogMetrics::record_enqueued();
    }

    /// Queue a declaration with its implementation bound.
    pub fn declare(&mut self, implementation: Implementation, descriptor: EntryDescriptor) {
        self.enqueue(Some(implementation), descriptor);
    }

    /// Number of declarations currently waiting
    pub fn count(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Activate every pending declaration in submission order.
    ///
    /// A malformed declaration is logged and skipped; the rest still land.
    /// The queue is always empty afterwards.
    pub fn drain(&mut self, catalog: &mut Catalog) -> DrainReport {
        let mut report = DrainReport::default();
        if self.pending.is_empty() {
            return report;
        }

        for pending in self.pending.drain(..) {
            let id = pending.descriptor.id.clone();
            match activate(catalog, pending) {
                Ok(()) => report.registered += 1,
                Err(e) => {
                    error!("Skipping unit declaration '{}': {}", id, e);
                    report.failed += 1;
                    report.errors.push(format!("{}: {}", id, e));
                }
            }
        }

        info!(
            "Activated {} queued units ({} failed), catalog now holds {}",
            report.registered,
            report.failed,
            catalog.len()
        );
        CatalogMetrics::record_drain(report.registered, report.failed);
        report
    }
}

fn activate(catalog: &mut Catalog, pending: PendingEntry) -> Result<()> {
    let implementation = pending
        .implementation
        .ok_or_else(|| CatalogError::MissingImplementation {
            id: pending.descriptor.id.clone(),
        })?;
    catalog.register(implementation, pending.descriptor)
}

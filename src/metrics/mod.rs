//! Catalog metrics
//!
//! Counters and gauges are emitted through the `metrics` facade. This crate
//! never installs a recorder; without one every call is a no-op, so hosts
//! that care wire up their own exporter.

/// Build a metric name following `unit_catalog_{name}_{type}`
macro_rules! catalog_metric {
    (counter, $name:literal) => {
        concat!("unit_catalog_", $name, "_total")
    };
    (gauge, $name:literal) => {
        concat!("unit_catalog_", $name)
    };
}

pub(crate) use catalog_metric;

/// Documentation for a single metric
#[derive(Debug, Clone)]
pub struct MetricDoc {
    pub name: &'static str,
    pub metric_type: MetricType,
    pub help: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetricType {
    Counter,
    Gauge,
}

/// Metrics for catalog registration and deferred activation
pub struct CatalogMetrics;

impl CatalogMetrics {
    /// Record a direct or drained registration and the resulting catalog size
    pub fn record_registration(catalog_size: usize) {
        ::metrics::counter!(catalog_metric!(counter, "registrations")).increment(1);
        Self::record_size(catalog_size);
    }

    pub fn record_replacement() {
        ::metrics::counter!(catalog_metric!(counter, "replacements")).increment(1);
    }

    pub fn record_size(catalog_size: usize) {
        ::metrics::gauge!(catalog_metric!(gauge, "entries")).set(catalog_size as f64);
    }

    pub fn record_enqueued() {
        ::metrics::counter!(catalog_metric!(counter, "declarations_queued")).increment(1);
    }

    /// Record the outcome of one drain pass
    pub fn record_drain(registered: usize, failed: usize) {
        ::metrics::counter!(catalog_metric!(counter, "declarations_drained"))
            .increment(registered as u64);
        ::metrics::counter!(catalog_metric!(counter, "declarations_failed"))
            .increment(failed as u64);
    }

    /// Pre-register every metric so it shows up before first use
    pub fn register_metrics() {
        use metrics::{counter, gauge};

        let _ = counter!(catalog_metric!(counter, "registrations"));
        let _ = counter!(catalog_metric!(counter, "replacements"));
        let _ = counter!(catalog_metric!(counter, "declarations_queued"));
        let _ = counter!(catalog_metric!(counter, "declarations_drained"));
        let _ = counter!(catalog_metric!(counter, "declarations_failed"));
        let _ = gauge!(catalog_metric!(gauge, "entries"));
    }

    pub fn documentation() -> Vec<MetricDoc> {
        vec![
            MetricDoc {
                name: catalog_metric!(counter, "registrations"),
                metric_type: MetricType::Counter,
                help: "Units inserted or replaced in the catalog",
            },
            MetricDoc {
                name: catalog_metric!(counter, "replacements"),
                metric_type: MetricType::Counter,
                help: "Registrations that replaced an existing id",
            },
            MetricDoc {
                name: catalog_metric!(counter, "declarations_queued"),
                metric_type: MetricType::Counter,
                help: "Declarations appended to the registration queue",
            },
            MetricDoc {
                name: catalog_metric!(counter, "declarations_drained"),
                metric_type: MetricType::Counter,
                help: "Queued declarations activated into the catalog",
            },
            MetricDoc {
                name: catalog_metric!(counter, "declarations_failed"),
                metric_type: MetricType::Counter,
                help: "Queued declarations skipped because they were malformed",
            },
            MetricDoc {
                name: catalog_metric!(gauge, "entries"),
                metric_type: MetricType::Gauge,
                help: "Units currently in the catalog",
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_metric_names_follow_convention() {
        assert_eq!(catalog_metric!(counter, "registrations"), "unit_catalog_registrations_total");
        assert_eq!(catalog_metric!(gauge, "entries"), "unit_catalog_entries");
    }

    #[test]
    fn test_documentation_has_no_duplicate_names() {
        let docs = CatalogMetrics::documentation();
        let names: HashSet<&str> = docs.iter().map(|d| d.name).collect();
        assert_eq!(names.len(), docs.len());
        assert!(docs.iter().all(|d| d.name.starts_with("unit_catalog_")));
    }

    #[test]
    fn test_recording_without_recorder_is_noop() {
        CatalogMetrics::register_metrics();
        CatalogMetrics::record_registration(3);
        CatalogMetrics::record_drain(2, 1);
    }
}

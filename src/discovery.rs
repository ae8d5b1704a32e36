//! Read-only views over the catalog: statistics, name search and
//! registration health checks.
//!
//! Every function here is a pure function of the catalog's content at call
//! time.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::catalog::{Catalog, CatalogEntry, CategoryTag};
use crate::constants::{
    DEFAULT_RECENT_WINDOW_DAYS, ISSUE_EMPTY_DESCRIPTION, ISSUE_EMPTY_TEMPLATE, ISSUE_NOT_FOUND,
};

/// Aggregate counts over the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    pub total: usize,
    /// One key per category, including those with no entries
    pub by_category: BTreeMap<CategoryTag, usize>,
    pub recently_added: usize,
}

/// Result of checking whether a named unit is correctly catalogued
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub is_registered: bool,
    pub issues: Vec<String>,
}

impl ValidationReport {
    pub fn is_healthy(&self) -> bool {
        self.is_registered && self.issues.is_empty()
    }
}

pub fn stats(catalog: &Catalog) -> CatalogStats {
    stats_at(catalog, Utc::now(), Duration::days(DEFAULT_RECENT_WINDOW_DAYS))
}

/// Statistics relative to `now`, counting entries created within `window` as recent.
///
/// A window reaching past the earliest representable time counts every entry.
pub fn stats_at(catalog: &Catalog, now: DateTime<Utc>, window: Duration) -> CatalogStats {
    let entries = catalog.get_all();
    let cutoff = now.checked_sub_signed(window);

    let by_category = CategoryTag::ALL
        .iter()
        .map(|&tag| (tag, entries.iter().filter(|e| e.category == tag).count()))
        .collect();

    CatalogStats {
        total: entries.len(),
        by_category,
        recently_added: entries
            .iter()
            .filter(|e| cutoff.map_or(true, |c| e.created_at >= c))
            .count(),
    }
}

/// Case-folded substring search over name and description only.
pub fn search_by_name<'a>(catalog: &'a Catalog, query: &str) -> Vec<&'a CatalogEntry> {
    let needle = query.to_lowercase();
    catalog.iter().filter(|e| e.matches_name(&needle)).collect()
}

/// Check the first entry whose display name equals `name`.
///
/// Display names are not unique; when several entries share one, only the
/// earliest registered is inspected.
pub fn validate(catalog: &Catalog, name: &str) -> ValidationReport {
    let Some(entry) = catalog.iter().find(|e| e.name == name) else {
        return ValidationReport {
            is_registered: false,
            issues: vec![ISSUE_NOT_FOUND.to_string()],
        };
    };

    // A bound implementation is guaranteed by the entry type, so only
    // metadata can be unhealthy.
    let mut issues = Vec::new();
    if entry.description.trim().is_empty() {
        issues.push(ISSUE_EMPTY_DESCRIPTION.to_string());
    }
    if entry.template.trim().is_empty() {
        issues.push(ISSUE_EMPTY_TEMPLATE.to_string());
    }

    ValidationReport {
        is_registered: true,
        issues,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{EntryDescriptor, StaticMarkup};

    fn catalog_with(descriptors: Vec<EntryDescriptor>) -> Catalog {
        let mut catalog = Catalog::new();
        for d in descriptors {
            catalog.register(StaticMarkup::shared(""), d).unwrap();
        }
        catalog
    }

    #[test]
    fn test_stats_on_empty_catalog_lists_every_category() {
        let stats = stats(&Catalog::new());
        assert_eq!(stats.total, 0);
        assert_eq!(stats.by_category.len(), CategoryTag::ALL.len());
        assert!(stats.by_category.values().all(|&n| n == 0));
        assert_eq!(stats.recently_added, 0);
    }

    #[test]
    fn test_stats_counts_sum_to_total() {
        let catalog = catalog_with(vec![
            EntryDescriptor::new("a").category(CategoryTag::Chart),
            EntryDescriptor::new("b").category(CategoryTag::Chart),
            EntryDescriptor::new("c").category(CategoryTag::Form),
            EntryDescriptor::new("d"),
        ]);
        let stats = stats(&catalog);

        assert_eq!(stats.total, catalog.get_all().len());
        assert_eq!(stats.by_category.values().sum::<usize>(), stats.total);
        assert_eq!(stats.by_category[&CategoryTag::Chart], 2);
        assert_eq!(stats.by_category[&CategoryTag::Other], 1);
        assert_eq!(stats.by_category[&CategoryTag::Media], 0);
    }

    #[test]
    fn test_recently_added_respects_window() {
        let now = Utc::now();
        let catalog = catalog_with(vec![
            EntryDescriptor::new("fresh"),
            EntryDescriptor::new("stale").created_at(now - Duration::days(30)),
            EntryDescriptor::new("edge").created_at(now - Duration::days(6)),
        ]);

        let stats = stats_at(&catalog, now, Duration::days(7));
        assert_eq!(stats.recently_added, 2);
    }

    #[test]
    fn test_oversized_window_counts_everything_without_panicking() {
        let now = Utc::now();
        let catalog = catalog_with(vec![
            EntryDescriptor::new("fresh"),
            EntryDescriptor::new("ancient").created_at(now - Duration::days(365 * 200)),
        ]);

        let stats = stats_at(&catalog, now, Duration::milliseconds(i64::MAX));
        assert_eq!(stats.recently_added, 2);
    }

    #[test]
    fn test_search_by_name_ignores_tags() {
        let catalog = catalog_with(vec![
            EntryDescriptor::new("a").name("Line Chart"),
            EntryDescriptor::new("b").name("Sparkline").description("tiny CHART"),
            EntryDescriptor::new("c").name("Table").tags(["chart"]),
        ]);

        let ids: Vec<&str> = search_by_name(&catalog, "Chart")
            .iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_validate_unknown_name() {
        let report = validate(&Catalog::new(), "NoSuchUnit");
        assert!(!report.is_registered);
        assert_eq!(report.issues, vec!["not found"]);
    }

    #[test]
    fn test_validate_reports_metadata_issues() {
        let catalog = catalog_with(vec![
            EntryDescriptor::new("ok").name("Healthy").description("fine"),
            EntryDescriptor::new("bare").name("Bare").template("  "),
        ]);

        let healthy = validate(&catalog, "Healthy");
        assert!(healthy.is_healthy());

        let bare = validate(&catalog, "Bare");
        assert!(bare.is_registered);
        assert_eq!(bare.issues, vec![ISSUE_EMPTY_DESCRIPTION, ISSUE_EMPTY_TEMPLATE]);
    }

    #[test]
    fn test_validate_uses_first_entry_on_name_collision() {
        let catalog = catalog_with(vec![
            EntryDescriptor::new("first").name("Card"),
            EntryDescriptor::new("second").name("Card").description("described"),
        ]);

        let report = validate(&catalog, "Card");
        assert_eq!(report.issues, vec![ISSUE_EMPTY_DESCRIPTION]);
    }

    #[test]
    fn test_stats_serialize_with_category_labels() {
        let catalog = catalog_with(vec![EntryDescriptor::new("a").category(CategoryTag::ThreeD)]);
        let json = serde_json::to_value(stats(&catalog)).unwrap();
        assert_eq!(json["total"], 1);
        assert_eq!(json["byCategory"]["3D unit"], 1);
        assert_eq!(json["byCategory"]["media unit"], 0);
    }
}

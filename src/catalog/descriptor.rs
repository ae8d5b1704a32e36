//! Unit metadata as declared, and as stored once defaults are applied.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::category::CategoryTag;
use super::unit::Implementation;
use crate::constants::{default_template, DEFAULT_AUTHOR, DEFAULT_VERSION};

/// Metadata a source unit declares about itself.
///
/// Only `id` is required. Everything else is filled in by [`EntryDescriptor::into_entry`]
/// when the descriptor reaches the catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryDescriptor {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<CategoryTag>,
    #[serde(default)]
    pub template: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub props: Option<Value>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl EntryDescriptor {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn category(mut self, category: impl Into<CategoryTag>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn props(mut self, props: Value) -> Self {
        self.props = Some(props);
        self
    }

    pub fn created_at(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = Some(at);
        self
    }

    pub fn updated_at(mut self, at: DateTime<Utc>) -> Self {
        self.updated_at = Some(at);
        self
    }

    /// Bind an implementation and apply defaults for every unset field.
    ///
    /// `previous_created_at` is the creation stamp of the entry being replaced,
    /// if any; it wins over `now` unless the descriptor supplies its own.
    pub fn into_entry(
        self,
        implementation: Implementation,
        now: DateTime<Utc>,
        previous_created_at: Option<DateTime<Utc>>,
    ) -> CatalogEntry {
        let name = self.name.unwrap_or_else(|| self.id.clone());
        let template = self.template.unwrap_or_else(|| default_template(&name));

        CatalogEntry {
            id: self.id,
            name,
            description: self.description.unwrap_or_default(),
            category: self.category.unwrap_or_default(),
            template,
            tags: self.tags.unwrap_or_default(),
            version: self.version.unwrap_or_else(|| DEFAULT_VERSION.to_string()),
            author: self.author.unwrap_or_else(|| DEFAULT_AUTHOR.to_string()),
            props: self.props,
            created_at: self.created_at.or(previous_created_at).unwrap_or(now),
            updated_at: self.updated_at.unwrap_or(now),
            implementation,
        }
    }
}

/// A fully-defaulted descriptor bound to its implementation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: CategoryTag,
    pub template: String,
    pub tags: Vec<String>,
    pub version: String,
    pub author: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub props: Option<Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip)]
    pub implementation: Implementation,
}

impl CatalogEntry {
    /// Case-folded substring match over name, description and tags.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn matches(&self, needle: &str) -> bool {
        self.matches_name(needle) || self.tags.iter().any(|t| t.to_lowercase().contains(needle))
    }

    /// Same as [`CatalogEntry::matches`] restricted to name and description.
    pub(crate) fn matches_name(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::unit::StaticMarkup;
    use chrono::Duration;
    use serde_json::json;

    #[test]
    fn test_defaults_applied_to_bare_descriptor() {
        let now = Utc::now();
        let entry =
            EntryDescriptor::new("spinner").into_entry(StaticMarkup::shared("<i/>"), now, None);

        assert_eq!(entry.id, "spinner");
        assert_eq!(entry.name, "spinner");
        assert_eq!(entry.description, "");
        assert_eq!(entry.category, CategoryTag::Other);
        assert_eq!(entry.template, ":::component{name=\"spinner\"}\n:::");
        assert!(entry.tags.is_empty());
        assert_eq!(entry.version, "1.0.0");
        assert_eq!(entry.author, "User");
        assert!(entry.props.is_none());
        assert_eq!(entry.created_at, now);
        assert_eq!(entry.updated_at, now);
    }

    #[test]
    fn test_template_synthesized_from_name_not_id() {
        let entry = EntryDescriptor::new("bar-chart")
            .name("Bar Chart")
            .into_entry(StaticMarkup::shared(""), Utc::now(), None);
        assert_eq!(entry.template, ":::component{name=\"Bar Chart\"}\n:::");
    }

    #[test]
    fn test_tags_keep_order_and_duplicates() {
        let entry = EntryDescriptor::new("x")
            .tags(["b", "a", "b"])
            .into_entry(StaticMarkup::shared(""), Utc::now(), None);
        assert_eq!(entry.tags, vec!["b", "a", "b"]);
    }

    #[test]
    fn test_previous_created_at_preserved_unless_explicit() {
        let now = Utc::now();
        let earlier = now - Duration::days(30);
        let explicit = now - Duration::days(2);

        let kept =
            EntryDescriptor::new("x").into_entry(StaticMarkup::shared(""), now, Some(earlier));
        assert_eq!(kept.created_at, earlier);
        assert_eq!(kept.updated_at, now);

        let overridden = EntryDescriptor::new("x")
            .created_at(explicit)
            .into_entry(StaticMarkup::shared(""), now, Some(earlier));
        assert_eq!(overridden.created_at, explicit);
    }

    #[test]
    fn test_descriptor_deserializes_with_drifted_category() {
        let descriptor: EntryDescriptor = serde_json::from_value(json!({
            "id": "globe",
            "name": "Globe",
            "category": "hologram unit",
            "tags": ["geo"]
        }))
        .unwrap();
        assert_eq!(descriptor.category, Some(CategoryTag::Other));
        assert_eq!(descriptor.tags.as_deref(), Some(&["geo".to_string()][..]));
    }

    #[test]
    fn test_matching_is_case_folded() {
        let entry = EntryDescriptor::new("kpi")
            .name("KPI Card")
            .description("Headline number")
            .tags(["Dashboard"])
            .into_entry(StaticMarkup::shared(""), Utc::now(), None);
        assert!(entry.matches("kpi"));
        assert!(entry.matches("dashboard"));
        assert!(!entry.matches_name("dashboard"));
        assert!(entry.matches_name("headline"));
        assert!(entry.matches(""));
    }
}

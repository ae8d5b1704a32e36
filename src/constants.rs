/// Defaults applied to descriptor fields the declaring unit left unset.
pub const DEFAULT_VERSION: &str = "1.0.0";
pub const DEFAULT_AUTHOR: &str = "User";

/// Window used by `stats()` to count recently added entries
pub const DEFAULT_RECENT_WINDOW_DAYS: i64 = 7;
/// Upper bound accepted from config, about a century
pub const MAX_RECENT_WINDOW_DAYS: i64 = 36_500;

/// Issue reported by `validate()` when no entry carries the requested name
pub const ISSUE_NOT_FOUND: &str = "not found";
pub const ISSUE_EMPTY_DESCRIPTION: &str = "description is empty";
pub const ISSUE_EMPTY_TEMPLATE: &str = "template is empty";

// Config and environment
pub const DEFAULT_CONFIG_PATH: &str = "catalog.toml";
pub const CONFIG_PATH_ENV: &str = "UNIT_CATALOG_CONFIG";
pub const LOG_DIR_ENV: &str = "UNIT_CATALOG_LOG_DIR";
pub const RECENT_DAYS_ENV: &str = "UNIT_CATALOG_RECENT_DAYS";
pub const SEED_ENV: &str = "UNIT_CATALOG_SEED";
pub const DEFAULT_LOG_FILE_PREFIX: &str = "unit_catalog.log";

/// Build the insertion snippet used when a descriptor does not supply one.
///
/// The catalog never parses this; the authoring tool copies it verbatim.
pub fn default_template(name: &str) -> String {
    format!(":::component{{name=\"{}\"}}\n:::", name)
}

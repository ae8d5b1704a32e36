//! In-process catalog of pluggable authoring units.
//!
//! Units are declared into a [`queue::RegistrationQueue`], activated into a
//! [`catalog::Catalog`] at a point the host chooses, and then discovered
//! through [`discovery`].

pub mod bootstrap;
pub mod catalog;
pub mod config;
pub mod constants;
pub mod discovery;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod promotion;
pub mod queue;
pub mod seed;
pub mod units;

pub use catalog::{
    Catalog, CatalogEntry, CategoryTag, EntryDescriptor, Implementation, Renderable, StaticMarkup,
};
pub use discovery::{CatalogStats, ValidationReport};
pub use error::{CatalogError, Result};
pub use queue::{DrainReport, RegistrationQueue};

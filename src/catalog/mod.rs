//! Unit catalog core: vocabulary, descriptors, implementations and the store.
//!
//! Everything that discovers units at runtime reads from a [`Catalog`]; the
//! catalog itself knows nothing about how declarations reached it.

pub mod category;
pub mod descriptor;
pub mod store;
pub mod unit;

pub use category::CategoryTag;
pub use descriptor::{CatalogEntry, EntryDescriptor};
pub use store::Catalog;
pub use unit::{Implementation, Renderable, StaticMarkup};

//! Domain model for the civic-education lesson engine: catalog, lessons,
//! quiz scoring, progress aggregation, meetings and feedback, plus the
//! reference library and organizing toolkit.

pub mod catalog;
pub mod library;
pub mod model;
pub mod time;
pub mod toolkit;

pub use catalog::{Catalog, CatalogError};
pub use library::{Library, LibraryError, LibraryItem, LibraryKind};
pub use time::Clock;

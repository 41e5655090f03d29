pub mod cli;
pub mod entry;
pub mod error;
pub mod format;
pub mod index;
pub mod location;
pub mod query;
pub mod server;
pub mod store;
pub mod tools;
pub mod tracing;
pub mod validate;

pub use entry::{Category, DocEntry};
pub use error::{LoadError, ValidationError};
pub use index::{IndexStats, SearchIndex};
pub use location::Anchor;
pub use server::IndexServer;
pub use store::IndexStore;
pub use validate::{ValidationReport, validate};

pub mod inspect_entry;
pub mod list_entries;
pub mod open_index;
pub mod validate_index;

pub use inspect_entry::*;
pub use list_entries::*;
pub use open_index::*;
pub use validate_index::*;

//! Loaded observation rows and year-indexed lookup.

pub mod record;
pub mod source;
pub mod view;

pub use record::Record;
pub use source::{read_records, read_records_from_path};
pub use view::DataView;

pub mod header;
pub mod record;
pub mod types;

pub use header::Header;
pub use record::{Record, TITLE_FIELDS, TITLE_PLACEHOLDER};
pub use types::Value;

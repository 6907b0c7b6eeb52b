//! Load a CSV of song metadata into typed, header-shaped records and page
//! through them in a terminal.

pub mod export;
pub mod pager;
pub mod process;
pub mod schema;

//! Search module.
//!
//! Contains the record filter and search result types.

mod filter;
mod results;

pub use filter::filter_records;
pub use results::{search, EmptyQueryPolicy, SearchResults};

//! In-memory record filtering for dashboard pages
//!
//! Every list page (tenants, units, maintenance issues) narrows a fixed list
//! of flat records with the same shape of query: one free-text search across a
//! few text fields, AND-ed with zero or more equality filters whose `"All"`
//! selection means "no constraint". This crate is that query, once.
//!
//! - [`Record`]: read access to a record's named scalar fields
//! - [`FilterState`]: the search text and category selections a page holds
//! - [`FilterSpec`]: which fields a page searches and filters on
//! - [`distinct_values`]: dropdown options in first-seen order

pub mod error;
pub mod filter;
pub mod record;
pub mod state;

pub use error::FilterError;
pub use filter::{distinct_values, filter, Category, FilterSpec};
pub use record::{FieldValue, Record};
pub use state::{FilterState, ALL};

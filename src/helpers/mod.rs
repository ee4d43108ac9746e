//! Helper functions shared by the content records and the server
//!
//! Slug derivation, asset URL normalization, and date formatting.

mod date;
mod slug;
mod url;

pub use date::*;
pub use slug::*;
pub use url::*;

// Job feed: remote fetch with synthetic fallback, then the filter/sort chain.

pub mod client;
pub mod feed;
pub mod filter;
pub mod format;
pub mod handlers;
pub mod models;
pub mod synthetic;

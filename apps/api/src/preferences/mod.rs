// Preference form handling and the per-profile key-value record.

pub mod form;
pub mod handlers;
pub mod models;
pub mod store;

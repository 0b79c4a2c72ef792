//! Static lookup data behind the preference form.

pub mod handlers;
pub mod interests;
pub mod locations;

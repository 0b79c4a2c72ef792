// Career suggestions: a static keyword lookup over the stored interests.

pub mod careers;
pub mod handlers;
pub mod selector;

//! Page views

pub mod profile;
pub mod quotes;

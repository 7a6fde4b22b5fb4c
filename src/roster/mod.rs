//! Developer roster for DevOrbit views
//!
//! Holds the read-only developer records, the built-in sample set and
//! the sources a view loads its developers from.

mod models;
pub mod seed;
mod source;

pub use models::{validate_roster, Developer, Status};
pub use source::{load_roster, source_from_config, DeveloperSource, JsonFileSource, SeedSource};

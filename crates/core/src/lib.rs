pub mod db;

pub mod analytics;
pub mod import;
pub mod positions;

pub mod constants;
pub mod errors;
pub mod schema;

pub use errors::{Error, Result};

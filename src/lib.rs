//! Map Validator
//!
//! Checks tile-map files for consistency between their declared dimensions
//! and the tile grid they actually contain.
//!
//! ## Pipeline
//!
//! ```text
//! path ──load──> TileMap ──validate──> ValidationResult ──render──> JSON
//! ```
//!
//! Loading can fail ([`LoadError`]); validation cannot, it only collects
//! violations.

pub mod config;
pub mod error;
pub mod map;
pub mod report;
pub mod validation;

pub use config::{OutputFormat, ValidatorConfig};
pub use error::{LoadError, Result};
pub use map::TileMap;
pub use report::render;
pub use validation::{validate, ValidationResult};

/// Load the map at `path` and validate it
pub fn validate_file(path: impl AsRef<std::path::Path>) -> Result<ValidationResult> {
    Ok(TileMap::load(path)?.validate())
}

//! Map consistency checks
//!
//! Every rule is evaluated on every map; a failing rule never hides the ones
//! after it. Messages come out in rule order:
//!
//! 1. declared width is positive
//! 2. declared height is positive
//! 3. the number of rows matches the declared height
//! 4. each row's length matches the declared width (one message per row)

use serde::Serialize;
use tracing::debug;

use crate::map::TileMap;

/// Outcome of checking one map
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    valid: bool,
    errors: Vec<String>,
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
        }
    }
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Process exit status for this outcome: 0 when valid, 1 otherwise
    pub fn exit_code(&self) -> i32 {
        if self.valid {
            0
        } else {
            1
        }
    }

    fn record(&mut self, message: String) {
        debug!(%message, "Map violation");
        self.valid = false;
        self.errors.push(message);
    }
}

/// Check a map's declared dimensions against its tile grid
pub fn validate(map: &TileMap) -> ValidationResult {
    let mut result = ValidationResult::default();

    if map.width <= 0 {
        result.record("Map width must be positive".to_string());
    }

    if map.height <= 0 {
        result.record("Map height must be positive".to_string());
    }

    let rows = map.tiles.len();
    if !len_matches(rows, map.height) {
        result.record(format!(
            "Tiles height {} does not match declared height {}",
            rows, map.height
        ));
    }

    for (index, row) in map.tiles.iter().enumerate() {
        if !len_matches(row.len(), map.width) {
            result.record(format!(
                "Row {} has width {}, expected {}",
                index,
                row.len(),
                map.width
            ));
        }
    }

    result
}

fn len_matches(actual: usize, declared: i64) -> bool {
    i64::try_from(actual).is_ok_and(|actual| actual == declared)
}

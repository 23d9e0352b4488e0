//! Tile map model and loader
//!
//! A map file is a JSON object with a declared `width`, `height` and a grid
//! of string tile ids:
//!
//! ```json
//! { "width": 2, "height": 2, "tiles": [["grass", "rock"], ["water", "sand"]] }
//! ```
//!
//! Decoding is lenient in the same places map files written by other tools
//! rely on: keys match case-insensitively, a repeated key overrides the
//! earlier one, `null` leaves a dimension unchanged and reads as an empty
//! grid, row or tile id, and unknown keys are skipped. A value of the wrong
//! type is still an error.
//!
//! Nothing here checks that the grid agrees with the declared dimensions;
//! that is the job of [`crate::validation`].

use serde::de::{self, Deserialize, Deserializer, IgnoredAny, MapAccess, Visitor};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

use crate::error::{LoadError, Result};
use crate::validation::{validate, ValidationResult};

/// A decoded map file
///
/// Dimensions are signed so that zero and negative declarations survive
/// decoding and can be reported by the validator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TileMap {
    /// Declared number of columns
    pub width: i64,

    /// Declared number of rows
    pub height: i64,

    /// Tile ids, row-major
    pub tiles: Vec<Vec<String>>,
}

impl TileMap {
    /// Resolve `path` against the current directory, read it, and decode it
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let abs_path = std::path::absolute(path.as_ref()).map_err(LoadError::Resolve)?;
        debug!(path = %abs_path.display(), "Loading map file");

        let bytes = fs::read(&abs_path).map_err(|source| LoadError::Read {
            path: abs_path.clone(),
            source,
        })?;
        debug!(bytes = bytes.len(), "Read map file");

        Self::from_json_slice(&bytes)
    }

    /// Decode a map from raw JSON bytes
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self> {
        let map: TileMap = serde_json::from_slice(bytes)?;
        debug!(
            width = map.width,
            height = map.height,
            rows = map.tiles.len(),
            "Decoded map"
        );
        Ok(map)
    }

    pub fn validate(&self) -> ValidationResult {
        validate(self)
    }
}

impl FromStr for TileMap {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_json_slice(s.as_bytes())
    }
}

impl<'de> Deserialize<'de> for TileMap {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(TileMapVisitor)
    }
}

struct TileMapVisitor;

impl<'de> Visitor<'de> for TileMapVisitor {
    type Value = TileMap;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map object with width, height and tiles")
    }

    // top-level `null` decodes to an empty map
    fn visit_unit<E: de::Error>(self) -> std::result::Result<TileMap, E> {
        Ok(TileMap::default())
    }

    fn visit_map<A>(self, mut access: A) -> std::result::Result<TileMap, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut map = TileMap::default();

        while let Some(key) = access.next_key::<String>()? {
            if field_matches(&key, "width") {
                if let Some(width) = access.next_value::<Option<i64>>()? {
                    map.width = width;
                }
            } else if field_matches(&key, "height") {
                if let Some(height) = access.next_value::<Option<i64>>()? {
                    map.height = height;
                }
            } else if field_matches(&key, "tiles") {
                let rows: Option<Vec<Option<Vec<Option<String>>>>> = access.next_value()?;
                map.tiles = rows
                    .unwrap_or_default()
                    .into_iter()
                    .map(|row| {
                        row.unwrap_or_default()
                            .into_iter()
                            .map(Option::unwrap_or_default)
                            .collect()
                    })
                    .collect();
            } else {
                access.next_value::<IgnoredAny>()?;
            }
        }

        Ok(map)
    }
}

fn field_matches(key: &str, field: &str) -> bool {
    key.chars()
        .flat_map(char::to_uppercase)
        .eq(field.chars().flat_map(char::to_uppercase))
}

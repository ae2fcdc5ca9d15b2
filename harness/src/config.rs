//! Editor configuration: grid dimensions, step pacing, cell size, palette.
//!
//! A [`MazeConfig`] is validated once when a session is created. It can be
//! read from a JSON object; every key is optional and unknown keys are
//! rejected:
//!
//! ```json
//! {"rows": 20, "cols": 30, "step_interval_ms": 30, "cell_size": 25,
//!  "palette": {"final": "#FFD700"}}
//! ```

use std::time::Duration;

use maze_kernel::grid::{Grid, GridError};
use maze_kernel::proof::canon::canonical_json_bytes;
use maze_kernel::proof::hash::{canonical_hash, ContentHash};
use maze_kernel::proof::hash_domain::HashDomain;
use serde_json::{json, Map, Value};

use crate::contract::ColorTag;
use crate::geometry::CellGeometry;

const DEFAULT_ROWS: usize = 20;
const DEFAULT_COLS: usize = 30;
const DEFAULT_STEP_INTERVAL_MS: u64 = 30;
const DEFAULT_CELL_SIZE: u32 = 25;

/// Hex colour per [`ColorTag`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: [String; 7],
}

impl Palette {
    /// Colour for `tag`.
    #[must_use]
    pub fn color(&self, tag: ColorTag) -> &str {
        &self.colors[tag.index()]
    }

    /// Override the colour for `tag`.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidColor`] unless `hex` is `#RRGGBB`.
    pub fn set(&mut self, tag: ColorTag, hex: &str) -> Result<(), ConfigError> {
        if !is_hex_color(hex) {
            return Err(ConfigError::InvalidColor {
                tag,
                value: hex.to_string(),
            });
        }
        self.colors[tag.index()] = hex.to_string();
        Ok(())
    }

    fn to_json_value(&self) -> Value {
        let map: Map<String, Value> = ColorTag::ALL
            .into_iter()
            .map(|t| (t.as_str().to_string(), json!(self.color(t))))
            .collect();
        Value::Object(map)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: [
                "#1E3A5F", // wall
                "#FFFFFF", // path
                "#4CAF50", // start
                "#F44336", // end
                "#AED6F1", // frontier
                "#D6EAF8", // visited
                "#FFD700", // final
            ]
            .map(String::from),
        }
    }
}

fn is_hex_color(s: &str) -> bool {
    s.len() == 7 && s.starts_with('#') && s[1..].chars().all(|c| c.is_ascii_hexdigit())
}

/// Editor configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeConfig {
    pub rows: usize,
    pub cols: usize,
    /// Delay between scheduled search steps. Zero means "as fast as the
    /// scheduler can fire".
    pub step_interval_ms: u64,
    /// Cell side in pixels. Only rendering and pointer translation use it.
    pub cell_size: u32,
    pub palette: Palette,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            step_interval_ms: DEFAULT_STEP_INTERVAL_MS,
            cell_size: DEFAULT_CELL_SIZE,
            palette: Palette::default(),
        }
    }
}

/// Configuration rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// `rows` or `cols` is zero.
    ZeroDimension { rows: usize, cols: usize },
    /// `rows × cols` exceeds the grid cell limit.
    TooLarge { rows: usize, cols: usize },
    /// `cell_size` is zero.
    ZeroCellSize,
    /// A palette entry is not `#RRGGBB`.
    InvalidColor { tag: ColorTag, value: String },
    /// The JSON document is malformed or not an object.
    Malformed { detail: String },
    /// A key is not recognised.
    UnknownKey { key: String },
    /// A key holds a value of the wrong type or range.
    InvalidValue { key: String, detail: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroDimension { rows, cols } => {
                write!(f, "rows and cols must be positive, got {rows}x{cols}")
            }
            Self::TooLarge { rows, cols } => write!(
                f,
                "{rows}x{cols} exceeds the limit of {} cells",
                Grid::MAX_CELLS
            ),
            Self::ZeroCellSize => write!(f, "cell_size must be positive"),
            Self::InvalidColor { tag, value } => {
                write!(f, "palette entry {tag} must be #RRGGBB, got {value:?}")
            }
            Self::Malformed { detail } => write!(f, "malformed config: {detail}"),
            Self::UnknownKey { key } => write!(f, "unknown config key {key:?}"),
            Self::InvalidValue { key, detail } => write!(f, "invalid value for {key:?}: {detail}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl ConfigError {
    pub(crate) fn from_grid(e: GridError, rows: usize, cols: usize) -> Self {
        match e {
            GridError::TooLarge { .. } => Self::TooLarge { rows, cols },
            GridError::ZeroDimension { .. } | GridError::OutOfBounds { .. } => {
                Self::ZeroDimension { rows, cols }
            }
        }
    }
}

impl MazeConfig {
    /// Check every field.
    ///
    /// # Errors
    ///
    /// The first violated constraint, as a [`ConfigError`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        Grid::cell_count(self.rows, self.cols)
            .map_err(|e| ConfigError::from_grid(e, self.rows, self.cols))?;
        if self.cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }
        for tag in ColorTag::ALL {
            let value = self.palette.color(tag);
            if !is_hex_color(value) {
                return Err(ConfigError::InvalidColor {
                    tag,
                    value: value.to_string(),
                });
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn step_interval(&self) -> Duration {
        Duration::from_millis(self.step_interval_ms)
    }

    #[must_use]
    pub fn geometry(&self) -> CellGeometry {
        CellGeometry {
            rows: self.rows,
            cols: self.cols,
            cell_size: self.cell_size,
        }
    }

    /// Parse and validate a JSON config object. Missing keys keep defaults.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Malformed`], [`ConfigError::UnknownKey`],
    /// [`ConfigError::InvalidValue`], or any [`MazeConfig::validate`] error.
    pub fn from_json_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        let value: Value = serde_json::from_slice(bytes).map_err(|e| ConfigError::Malformed {
            detail: e.to_string(),
        })?;
        let Value::Object(map) = value else {
            return Err(ConfigError::Malformed {
                detail: "top level must be an object".into(),
            });
        };

        let mut config = Self::default();
        for (key, v) in &map {
            match key.as_str() {
                "rows" => config.rows = read_uint(key, v)?,
                "cols" => config.cols = read_uint(key, v)?,
                "step_interval_ms" => config.step_interval_ms = read_uint(key, v)?,
                "cell_size" => config.cell_size = read_uint(key, v)?,
                "palette" => read_palette(&mut config.palette, v)?,
                _ => return Err(ConfigError::UnknownKey { key: key.clone() }),
            }
        }
        config.validate()?;
        Ok(config)
    }

    /// Convert to a `serde_json::Value` (all keys present).
    #[must_use]
    pub fn to_json_value(&self) -> Value {
        json!({
            "cell_size": self.cell_size,
            "cols": self.cols,
            "palette": self.palette.to_json_value(),
            "rows": self.rows,
            "step_interval_ms": self.step_interval_ms,
        })
    }

    /// Digest of the canonical JSON form.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Malformed`] if canonicalization fails.
    pub fn digest(&self) -> Result<ContentHash, ConfigError> {
        let bytes =
            canonical_json_bytes(&self.to_json_value()).map_err(|e| ConfigError::Malformed {
                detail: e.to_string(),
            })?;
        Ok(canonical_hash(HashDomain::EditorConfig, &bytes))
    }
}

fn read_uint<T: TryFrom<u64>>(key: &str, v: &Value) -> Result<T, ConfigError> {
    let raw = v.as_u64().ok_or_else(|| ConfigError::InvalidValue {
        key: key.to_string(),
        detail: format!("expected a non-negative integer, got {v}"),
    })?;
    T::try_from(raw).map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        detail: format!("{raw} is out of range"),
    })
}

fn read_palette(palette: &mut Palette, v: &Value) -> Result<(), ConfigError> {
    let Value::Object(entries) = v else {
        return Err(ConfigError::InvalidValue {
            key: "palette".into(),
            detail: "expected an object".into(),
        });
    };
    for (name, color) in entries {
        let tag = ColorTag::from_name(name).ok_or_else(|| ConfigError::UnknownKey {
            key: format!("palette.{name}"),
        })?;
        let hex = color.as_str().ok_or_else(|| ConfigError::InvalidValue {
            key: format!("palette.{name}"),
            detail: "expected a string".into(),
        })?;
        palette.set(tag, hex)?;
    }
    Ok(())
}

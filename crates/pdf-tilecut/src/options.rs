use crate::types::*;
use crate::{Result, TileCutError};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tiling configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TileOptions {
    /// Maximum physical size of one output tile, margins included
    pub tile_size: TileSize,
    /// Title drawn on each tile's margin; `None` renders no title
    pub title: Option<String>,
    /// Full-length trim marks instead of corner marks
    pub long_trim_marks: bool,
    /// Suppress the logo
    pub hide_logo: bool,
    /// Keep the uncompressed intermediate document for inspection
    pub debug: bool,
}

impl Default for TileOptions {
    fn default() -> Self {
        Self {
            tile_size: TileSize::A4,
            title: None,
            long_trim_marks: false,
            hide_logo: false,
            debug: false,
        }
    }
}

impl TileOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| TileCutError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| TileCutError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options.
    ///
    /// Both tile dimensions must exceed the minimum floor, which guarantees
    /// the bleed and trim margins can never overlap or invert a tile's
    /// geometry. Checked before any I/O happens.
    pub fn validate(&self) -> Result<()> {
        let (width_mm, height_mm) = self.tile_size.dimensions_mm();
        if width_mm <= MIN_TILE_DIMENSION_MM || height_mm <= MIN_TILE_DIMENSION_MM {
            return Err(TileCutError::Config(format!(
                "minimum tile dimension is {MIN_TILE_DIMENSION_MM:.1}mm x {MIN_TILE_DIMENSION_MM:.1}mm"
            )));
        }
        Ok(())
    }

    /// The net tile content size in points: the physical tile size minus the
    /// bleed and trim margins on both sides of each axis.
    pub fn content_size_pt(&self) -> (f32, f32) {
        let (width_mm, height_mm) = self.tile_size.dimensions_mm();
        let margins = 2.0 * (BLEED_MARGIN_PT + TRIM_MARGIN_PT);
        (mm_to_pt(width_mm) - margins, mm_to_pt(height_mm) - margins)
    }
}

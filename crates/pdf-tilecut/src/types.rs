use crate::{Result, TileCutError};
use std::fmt;
use std::str::FromStr;

/// Points per inch (PDF user-space unit density)
pub const PT_PER_INCH: f32 = 72.0;
/// Millimeters per inch
pub const MM_PER_INCH: f32 = 25.4;
/// Millimeters per centimeter
pub const MM_PER_CM: f32 = 10.0;

/// Width of the opaque bleed margin between the media and bleed boxes (pt)
pub const BLEED_MARGIN_PT: f32 = PT_PER_INCH * 5.0 / 6.0;
/// Width of the trim margin between the bleed and trim boxes (pt)
pub const TRIM_MARGIN_PT: f32 = PT_PER_INCH / 6.0;
/// Stroke width used for trim marks and registration ticks (pt)
pub const TRIM_MARK_LINE_WIDTH: f32 = 0.5;

/// Smallest allowed tile edge in millimeters. Anything smaller would let the
/// margins overlap and invert the tile geometry.
pub const MIN_TILE_DIMENSION_MM: f32 =
    (BLEED_MARGIN_PT + TRIM_MARGIN_PT + TRIM_MARK_LINE_WIDTH) * 2.0 * MM_PER_INCH / PT_PER_INCH;

/// Convert millimeters to points
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * PT_PER_INCH / MM_PER_INCH
}

/// Maximum physical size of one output tile, margins included
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TileSize {
    A0,
    A1,
    A2,
    A3,
    A4,
    A5,
    A6,
    Letter,
    Legal,
    Tabloid,
    Custom { width_mm: f32, height_mm: f32 },
}

impl Default for TileSize {
    fn default() -> Self {
        TileSize::A4
    }
}

impl TileSize {
    /// Get base dimensions (portrait: width < height for standard sizes)
    pub fn dimensions_mm(self) -> (f32, f32) {
        match self {
            TileSize::A0 => (841.0, 1189.0),
            TileSize::A1 => (594.0, 841.0),
            TileSize::A2 => (420.0, 594.0),
            TileSize::A3 => (297.0, 420.0),
            TileSize::A4 => (210.0, 297.0),
            TileSize::A5 => (148.0, 210.0),
            TileSize::A6 => (105.0, 148.0),
            TileSize::Letter => (215.9, 279.4),
            TileSize::Legal => (215.9, 355.6),
            TileSize::Tabloid => (279.4, 431.8),
            TileSize::Custom {
                width_mm,
                height_mm,
            } => (width_mm, height_mm),
        }
    }

    fn from_name(name: &str) -> Option<TileSize> {
        match name.to_ascii_uppercase().as_str() {
            "A0" => Some(TileSize::A0),
            "A1" => Some(TileSize::A1),
            "A2" => Some(TileSize::A2),
            "A3" => Some(TileSize::A3),
            "A4" => Some(TileSize::A4),
            "A5" => Some(TileSize::A5),
            "A6" => Some(TileSize::A6),
            "LETTER" => Some(TileSize::Letter),
            "LEGAL" => Some(TileSize::Legal),
            "TABLOID" => Some(TileSize::Tabloid),
            _ => None,
        }
    }
}

impl FromStr for TileSize {
    type Err = TileCutError;

    /// Accepts a standard paper-size name (case-insensitive) or a
    /// `width x height` dimension pair with units, e.g. `6cm x 12in`.
    fn from_str(s: &str) -> Result<TileSize> {
        let s = s.trim();
        if let Some(size) = TileSize::from_name(s) {
            return Ok(size);
        }
        parse_dimensions(s).ok_or_else(|| {
            TileCutError::Config(format!(
                "invalid tile size {s:?}: expected a paper size name or dimensions like \"6cm x 12in\""
            ))
        })
    }
}

impl fmt::Display for TileSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (w, h) = self.dimensions_mm();
        match self {
            TileSize::Custom { .. } => write!(f, "{w:.0}mm x {h:.0}mm"),
            _ => write!(f, "{self:?} ({w:.0}mm x {h:.0}mm)"),
        }
    }
}

fn parse_dimensions(s: &str) -> Option<TileSize> {
    if !s.is_ascii() {
        return None;
    }
    let (w, h) = s.split_once(['x', 'X'])?;
    let width_mm = parse_length_mm(w)?;
    let height_mm = parse_length_mm(h)?;
    Some(TileSize::Custom {
        width_mm,
        height_mm,
    })
}

/// Parse a single length such as `210mm`, `8.5in` or `600pt` into millimeters.
fn parse_length_mm(s: &str) -> Option<f32> {
    let s = s.trim();
    let (number, unit) = s.split_at(s.len().checked_sub(2)?);
    let per_unit = match unit {
        "mm" => 1.0,
        "cm" => MM_PER_CM,
        "in" => MM_PER_INCH,
        "pt" => MM_PER_INCH / PT_PER_INCH,
        _ => return None,
    };
    let value: f32 = number.trim().parse().ok()?;
    (value.is_finite() && value > 0.0).then_some(value * per_unit)
}

/// Statistics about a tiling run
#[derive(Debug, Clone, PartialEq)]
pub struct TilingStatistics {
    /// Total number of pages in the source document
    pub source_pages: usize,
    /// Pages that failed extraction and were skipped
    pub skipped_pages: usize,
    /// Grid dimensions (columns, rows) for each surviving page
    pub grids: Vec<(u32, u32)>,
    /// Total number of output tiles
    pub output_tiles: usize,
}

//! Overlay content generation
//!
//! Builds the content stream drawn on top of each tile: the opaque margin
//! that masks original content bleeding past the bleed box, the trim marks,
//! the tile/page reference labels, the title and the logo. All line art is
//! generated inline; the overlay adds no resources to the page.

use crate::page::TilePage;
use crate::types::{BLEED_MARGIN_PT, TRIM_MARGIN_PT, TRIM_MARK_LINE_WIDTH};
use crate::vecfont::{CHAR_HEIGHT, index_to_alpha, render_string};
use crate::Result;

/// Design-grid size of the built-in logo
const LOGO_DIM: f32 = 100.0;

/// The logo: a sheet outline crossed by dashed cut lines, drawn on a
/// `LOGO_DIM` x `LOGO_DIM` grid and scaled to the margin width at use site.
const LOGO_OPS: &str = "6 w 0 0 100 100 re S [10 6] 0 d 4 w 50 -8 m 50 108 l S -8 50 m 108 50 l S [] 0 d ";

/// Presentation settings for overlay generation
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayConfig {
    /// Title drawn on each tile's bottom margin; upper-cased when rendered
    pub title: String,
    /// Draw four full-length trim lines instead of eight corner marks
    pub long_trim_marks: bool,
    /// Suppress the logo
    pub hide_logo: bool,
}

/// Generate the complete overlay content stream for one tile.
pub fn build_overlay(tile: &TilePage, config: &OverlayConfig) -> Result<String> {
    let mut ops = String::new();
    ops.push_str(&margin_fill(tile));
    ops.push_str(&trim_marks(tile, config.long_trim_marks));
    ops.push_str(&tile_reference(tile)?);
    ops.push_str(&page_reference(tile)?);
    ops.push_str(&title_label(tile, &config.title)?);
    if !config.hide_logo {
        ops.push_str(&logo(tile));
    }
    Ok(ops)
}

/// Paint the region between the media box and the bleed box solid white.
///
/// The outer path is pushed one unit past the media box so no sliver of
/// original content survives at the page edge. The two subpaths wind in
/// opposite directions, leaving the bleed area clear under nonzero fill.
fn margin_fill(tile: &TilePage) -> String {
    let outer = tile.media_box.expand(1.0);
    let bb = tile.bleed_box;
    format!(
        "q 1 1 1 rg \
         {} {} m {} {} l {} {} l {} {} l h \
         {} {} m {} {} l {} {} l {} {} l h f Q\n",
        outer.llx, outer.lly, outer.llx, outer.ury, outer.urx, outer.ury, outer.urx, outer.lly,
        bb.llx, bb.lly, bb.urx, bb.lly, bb.urx, bb.ury, bb.llx, bb.ury,
    )
}

/// Trim marks at each trim-box edge.
///
/// Corner mode draws a pair of short marks per corner, from just outside the
/// media box in to the bleed box. Long mode draws four lines spanning the
/// full media box width/height. Geometry is identical either way; the mode
/// is presentation only.
fn trim_marks(tile: &TilePage, long: bool) -> String {
    let mb = tile.media_box;
    let bb = tile.bleed_box;
    let tb = tile.trim_box;

    let segments: Vec<(f32, f32, f32, f32)> = if long {
        vec![
            (mb.llx - 1.0, tb.lly, mb.urx + 1.0, tb.lly),
            (mb.llx - 1.0, tb.ury, mb.urx + 1.0, tb.ury),
            (tb.llx, mb.lly - 1.0, tb.llx, mb.ury + 1.0),
            (tb.urx, mb.lly - 1.0, tb.urx, mb.ury + 1.0),
        ]
    } else {
        vec![
            // left edge pair
            (mb.llx - 1.0, tb.lly, bb.llx, tb.lly),
            (mb.llx - 1.0, tb.ury, bb.llx, tb.ury),
            // top edge pair
            (tb.llx, mb.ury + 1.0, tb.llx, bb.ury),
            (tb.urx, mb.ury + 1.0, tb.urx, bb.ury),
            // right edge pair
            (bb.urx, tb.ury, mb.urx + 1.0, tb.ury),
            (bb.urx, tb.lly, mb.urx + 1.0, tb.lly),
            // bottom edge pair
            (tb.llx, bb.lly, tb.llx, mb.lly - 1.0),
            (tb.urx, bb.lly, tb.urx, mb.lly - 1.0),
        ]
    };

    let mut ops = String::new();
    ops.push_str(&format!("q 0 0 0 RG {TRIM_MARK_LINE_WIDTH} w\n"));
    for (x1, y1, x2, y2) in segments {
        ops.push_str(&format!("{x1} {y1} m {x2} {y2} l S\n"));
    }
    ops.push_str("Q\n");
    ops
}

/// Row and column tags outside the top-right corner, with registration
/// ticks at the corner where the two tags meet.
///
/// The row tag (letters) ends at the corner above the top edge; the column
/// tag (1-based digits) hangs below the corner to the right of the right
/// edge.
fn tile_reference(tile: &TilePage) -> Result<String> {
    let bb = tile.bleed_box;
    let vch = CHAR_HEIGHT;
    let row_tag = render_string(&index_to_alpha(tile.tile_y), -1, 1)?;
    let column_tag = render_string(&(tile.tile_x + 1).to_string(), 1, -1)?;

    let mut ops = String::new();
    ops.push_str("q 0 0 0 RG\n");
    ops.push_str(&format!(
        "q 1 0 0 1 {} {} cm {row_tag}Q\n",
        bb.urx,
        bb.ury + vch / 2.0,
    ));
    ops.push_str(&format!(
        "q 1 0 0 1 {} {} cm {column_tag}Q\n",
        bb.urx + vch / 2.0,
        bb.ury,
    ));
    ops.push_str("Q\n");

    // Registration ticks: two stroked axis lines and two filled arrowheads
    // pointing away from the corner.
    ops.push_str(&format!(
        "q 0 0 0 RG 0 0 0 rg {TRIM_MARK_LINE_WIDTH} w 2 J\n\
         {} {} m {} {} l S\n\
         {} {} m {} {} l S\n\
         {} {} m {} {} l {} {} l h f\n\
         {} {} m {} {} l {} {} l h f\nQ\n",
        bb.urx + vch / 2.0,
        bb.ury + vch / 2.0,
        bb.urx + vch / 2.0,
        bb.ury + vch * 1.5,
        bb.urx + vch / 2.0,
        bb.ury + vch / 2.0,
        bb.urx + vch * 1.5,
        bb.ury + vch / 2.0,
        bb.urx + vch / 4.0,
        bb.ury + vch * 1.5,
        bb.urx + vch * 3.0 / 4.0,
        bb.ury + vch * 1.5,
        bb.urx + vch / 2.0,
        bb.ury + vch * 2.0,
        bb.urx + vch * 1.5,
        bb.ury + vch / 4.0,
        bb.urx + vch * 1.5,
        bb.ury + vch * 3.0 / 4.0,
        bb.urx + vch * 2.0,
        bb.ury + vch / 2.0,
    ));
    Ok(ops)
}

/// Original page number above the top edge at the left trim corner, and the
/// word `PAGE` outside the top-left corner.
fn page_reference(tile: &TilePage) -> Result<String> {
    let bb = tile.bleed_box;
    let tb = tile.trim_box;
    let vch = CHAR_HEIGHT;
    let number = render_string(&tile.number.to_string(), -1, 1)?;
    let word = render_string("PAGE", -1, -1)?;
    Ok(format!(
        "q 0 0 0 RG\n\
         q 1 0 0 1 {} {} cm {number}Q\n\
         q 1 0 0 1 {} {} cm {word}Q\nQ\n",
        tb.llx - vch / 2.0,
        bb.ury + vch / 2.0,
        bb.llx - vch / 2.0,
        bb.ury,
    ))
}

/// Upper-cased title outside the bottom-left corner, reading left-to-right.
fn title_label(tile: &TilePage, title: &str) -> Result<String> {
    let bb = tile.bleed_box;
    let tb = tile.trim_box;
    let vch = CHAR_HEIGHT;
    let label = render_string(&title.to_uppercase(), 1, -1)?;
    Ok(format!(
        "q 0 0 0 RG q 1 0 0 1 {} {} cm {label}Q Q\n",
        tb.llx + vch / 2.0,
        bb.lly - vch / 2.0,
    ))
}

/// Logo outside the bottom-left corner, scaled relative to the margin width
/// and offset left of the title.
fn logo(tile: &TilePage) -> String {
    let bb = tile.bleed_box;
    let scale = (TRIM_MARGIN_PT + BLEED_MARGIN_PT) / (4.0 * LOGO_DIM);
    let scaled_size = LOGO_DIM * scale;
    format!(
        "q 0 0 0 RG q 1 0 0 1 {} {} cm q {scale} 0 0 {scale} 0 0 cm {LOGO_OPS}Q Q Q\n",
        bb.llx - scaled_size,
        bb.lly - scaled_size,
    )
}

//! Built-in vector stroke font
//!
//! Labels on the tile margins are drawn as raw line art so the output pages
//! carry no font resources at all. Every glyph is a set of polylines on a
//! 4x6 design grid, scaled so the cap height equals [`CHAR_HEIGHT`].
//! Coverage: digits, `A`-`Z`, space, `.`, `-` and `_`; anything else fails
//! the run with [`TileCutError::UnsupportedGlyph`].

use crate::{Result, TileCutError};

/// Cap height of the vector font, in points
pub const CHAR_HEIGHT: f32 = 8.0;
/// Horizontal advance per character (glyph cell plus spacing), in points
pub const CHAR_ADVANCE: f32 = CHAR_HEIGHT;

const GRID_HEIGHT: f32 = 6.0;
const SCALE: f32 = CHAR_HEIGHT / GRID_HEIGHT;
const STROKE_WIDTH: f32 = 0.9;

type Glyph = &'static [&'static [(f32, f32)]];

/// Render `text` as stroke operators anchored at the origin.
///
/// The direction pair selects the axis-aligned orientation:
/// `h_step = 1` advances left-to-right from the anchor, `h_step = -1`
/// right-aligns the string so its last glyph ends at the anchor;
/// `v_step = 1` places glyphs above the anchor line, `v_step = -1` hangs
/// them below it. The caller positions the anchor with a `cm` translation
/// and sets the stroke color.
pub fn render_string(text: &str, h_step: i32, v_step: i32) -> Result<String> {
    let count = text.chars().count();
    let mut ops = String::new();
    ops.push_str(&format!("{STROKE_WIDTH} w 1 J 1 j\n"));
    for (index, ch) in text.chars().enumerate() {
        let glyph = glyph_strokes(ch).ok_or(TileCutError::UnsupportedGlyph(ch))?;
        let dx = if h_step >= 0 {
            index as f32 * CHAR_ADVANCE
        } else {
            -((count - index) as f32) * CHAR_ADVANCE
        };
        let dy = if v_step >= 0 { 0.0 } else { -CHAR_HEIGHT };
        for stroke in glyph {
            for (point_index, (gx, gy)) in stroke.iter().enumerate() {
                let op = if point_index == 0 { "m" } else { "l" };
                ops.push_str(&format!("{} {} {op} ", dx + gx * SCALE, dy + gy * SCALE));
            }
            ops.push_str("S\n");
        }
    }
    Ok(ops)
}

/// Encode a zero-based index as a bijective base-26 letter sequence:
/// `0 -> A`, `25 -> Z`, `26 -> AA`, `27 -> AB`, ...
pub fn index_to_alpha(index: u32) -> String {
    let mut n = index + 1;
    let mut tag = String::new();
    while n > 0 {
        n -= 1;
        tag.insert(0, (b'A' + (n % 26) as u8) as char);
        n /= 26;
    }
    tag
}

#[rustfmt::skip]
fn glyph_strokes(ch: char) -> Option<Glyph> {
    let glyph: Glyph = match ch {
        ' ' => &[],
        '.' => &[&[(1.5, 0.0), (2.5, 0.0)]],
        '-' => &[&[(1.0, 3.0), (3.0, 3.0)]],
        '_' => &[&[(0.0, 0.0), (4.0, 0.0)]],
        '0' => &[
            &[(0.0, 0.0), (4.0, 0.0), (4.0, 6.0), (0.0, 6.0), (0.0, 0.0)],
            &[(0.0, 0.0), (4.0, 6.0)],
        ],
        '1' => &[&[(1.0, 5.0), (2.0, 6.0), (2.0, 0.0)], &[(1.0, 0.0), (3.0, 0.0)]],
        '2' => &[&[(0.0, 6.0), (4.0, 6.0), (4.0, 3.0), (0.0, 3.0), (0.0, 0.0), (4.0, 0.0)]],
        '3' => &[&[(0.0, 6.0), (4.0, 6.0), (4.0, 0.0), (0.0, 0.0)], &[(1.0, 3.0), (4.0, 3.0)]],
        '4' => &[&[(0.0, 6.0), (0.0, 3.0), (4.0, 3.0)], &[(4.0, 6.0), (4.0, 0.0)]],
        '5' => &[&[(4.0, 6.0), (0.0, 6.0), (0.0, 3.0), (4.0, 3.0), (4.0, 0.0), (0.0, 0.0)]],
        '6' => &[&[(4.0, 6.0), (0.0, 6.0), (0.0, 0.0), (4.0, 0.0), (4.0, 3.0), (0.0, 3.0)]],
        '7' => &[&[(0.0, 6.0), (4.0, 6.0), (1.0, 0.0)]],
        '8' => &[
            &[(0.0, 0.0), (4.0, 0.0), (4.0, 6.0), (0.0, 6.0), (0.0, 0.0)],
            &[(0.0, 3.0), (4.0, 3.0)],
        ],
        '9' => &[&[(0.0, 0.0), (4.0, 0.0), (4.0, 6.0), (0.0, 6.0), (0.0, 3.0), (4.0, 3.0)]],
        'A' => &[&[(0.0, 0.0), (0.0, 4.0), (2.0, 6.0), (4.0, 4.0), (4.0, 0.0)], &[(0.0, 2.0), (4.0, 2.0)]],
        'B' => &[
            &[(0.0, 0.0), (0.0, 6.0), (3.0, 6.0), (4.0, 5.0), (4.0, 4.0), (3.0, 3.0), (0.0, 3.0)],
            &[(3.0, 3.0), (4.0, 2.0), (4.0, 1.0), (3.0, 0.0), (0.0, 0.0)],
        ],
        'C' => &[&[(4.0, 5.0), (3.0, 6.0), (1.0, 6.0), (0.0, 5.0), (0.0, 1.0), (1.0, 0.0), (3.0, 0.0), (4.0, 1.0)]],
        'D' => &[&[(0.0, 0.0), (0.0, 6.0), (2.0, 6.0), (4.0, 4.0), (4.0, 2.0), (2.0, 0.0), (0.0, 0.0)]],
        'E' => &[&[(4.0, 6.0), (0.0, 6.0), (0.0, 0.0), (4.0, 0.0)], &[(0.0, 3.0), (3.0, 3.0)]],
        'F' => &[&[(4.0, 6.0), (0.0, 6.0), (0.0, 0.0)], &[(0.0, 3.0), (3.0, 3.0)]],
        'G' => &[&[(4.0, 5.0), (3.0, 6.0), (1.0, 6.0), (0.0, 5.0), (0.0, 1.0), (1.0, 0.0), (3.0, 0.0), (4.0, 1.0), (4.0, 3.0), (2.0, 3.0)]],
        'H' => &[&[(0.0, 6.0), (0.0, 0.0)], &[(4.0, 6.0), (4.0, 0.0)], &[(0.0, 3.0), (4.0, 3.0)]],
        'I' => &[&[(1.0, 6.0), (3.0, 6.0)], &[(2.0, 6.0), (2.0, 0.0)], &[(1.0, 0.0), (3.0, 0.0)]],
        'J' => &[&[(4.0, 6.0), (4.0, 1.0), (3.0, 0.0), (1.0, 0.0), (0.0, 1.0)]],
        'K' => &[&[(0.0, 6.0), (0.0, 0.0)], &[(4.0, 6.0), (0.0, 3.0), (4.0, 0.0)]],
        'L' => &[&[(0.0, 6.0), (0.0, 0.0), (4.0, 0.0)]],
        'M' => &[&[(0.0, 0.0), (0.0, 6.0), (2.0, 3.0), (4.0, 6.0), (4.0, 0.0)]],
        'N' => &[&[(0.0, 0.0), (0.0, 6.0), (4.0, 0.0), (4.0, 6.0)]],
        'O' => &[&[(1.0, 0.0), (0.0, 1.0), (0.0, 5.0), (1.0, 6.0), (3.0, 6.0), (4.0, 5.0), (4.0, 1.0), (3.0, 0.0), (1.0, 0.0)]],
        'P' => &[&[(0.0, 0.0), (0.0, 6.0), (3.0, 6.0), (4.0, 5.0), (4.0, 4.0), (3.0, 3.0), (0.0, 3.0)]],
        'Q' => &[
            &[(1.0, 0.0), (0.0, 1.0), (0.0, 5.0), (1.0, 6.0), (3.0, 6.0), (4.0, 5.0), (4.0, 1.0), (3.0, 0.0), (1.0, 0.0)],
            &[(2.0, 2.0), (4.0, 0.0)],
        ],
        'R' => &[
            &[(0.0, 0.0), (0.0, 6.0), (3.0, 6.0), (4.0, 5.0), (4.0, 4.0), (3.0, 3.0), (0.0, 3.0)],
            &[(2.0, 3.0), (4.0, 0.0)],
        ],
        'S' => &[&[(4.0, 5.0), (3.0, 6.0), (1.0, 6.0), (0.0, 5.0), (0.0, 4.0), (4.0, 2.0), (4.0, 1.0), (3.0, 0.0), (1.0, 0.0), (0.0, 1.0)]],
        'T' => &[&[(0.0, 6.0), (4.0, 6.0)], &[(2.0, 6.0), (2.0, 0.0)]],
        'U' => &[&[(0.0, 6.0), (0.0, 1.0), (1.0, 0.0), (3.0, 0.0), (4.0, 1.0), (4.0, 6.0)]],
        'V' => &[&[(0.0, 6.0), (2.0, 0.0), (4.0, 6.0)]],
        'W' => &[&[(0.0, 6.0), (1.0, 0.0), (2.0, 4.0), (3.0, 0.0), (4.0, 6.0)]],
        'X' => &[&[(0.0, 6.0), (4.0, 0.0)], &[(4.0, 6.0), (0.0, 0.0)]],
        'Y' => &[&[(0.0, 6.0), (2.0, 3.0), (4.0, 6.0)], &[(2.0, 3.0), (2.0, 0.0)]],
        'Z' => &[&[(0.0, 6.0), (4.0, 6.0), (0.0, 0.0), (4.0, 0.0)]],
        _ => return None,
    };
    Some(glyph)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_advertised_glyph_renders() {
        let coverage = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789 .-_";
        let ops = render_string(coverage, 1, 1).unwrap();
        assert!(ops.contains(" m "));
        assert!(ops.contains("S\n"));
    }

    #[test]
    fn unsupported_glyphs_fail_deterministically() {
        let err = render_string("OK?", 1, 1).unwrap_err();
        assert!(matches!(err, TileCutError::UnsupportedGlyph('?')));
        assert!(matches!(
            render_string("a", 1, 1),
            Err(TileCutError::UnsupportedGlyph('a'))
        ));
    }

    /// Collect the (x, y) operands of every `m`/`l` operator.
    fn coordinates(ops: &str) -> Vec<(f32, f32)> {
        let tokens: Vec<&str> = ops.split_whitespace().collect();
        let mut points = Vec::new();
        for (index, token) in tokens.iter().enumerate() {
            if (*token == "m" || *token == "l") && index >= 2 {
                let x = tokens[index - 2].parse().unwrap();
                let y = tokens[index - 1].parse().unwrap();
                points.push((x, y));
            }
        }
        points
    }

    #[test]
    fn right_aligned_text_ends_at_the_anchor() {
        let ops = render_string("AB", -1, 1).unwrap();
        let points = coordinates(&ops);
        assert!(!points.is_empty());
        for (x, _) in &points {
            assert!(*x <= 0.0);
        }
        // The last glyph cell spans [-CHAR_ADVANCE, 0].
        assert!(points.iter().any(|(x, _)| *x == -CHAR_ADVANCE));
    }

    #[test]
    fn hanging_text_stays_below_the_anchor() {
        let ops = render_string("7", 1, -1).unwrap();
        let points = coordinates(&ops);
        assert!(!points.is_empty());
        for (_, y) in &points {
            assert!(*y <= 0.0);
        }
    }

    #[test]
    fn alpha_encoding_is_bijective_base_26() {
        assert_eq!(index_to_alpha(0), "A");
        assert_eq!(index_to_alpha(1), "B");
        assert_eq!(index_to_alpha(25), "Z");
        assert_eq!(index_to_alpha(26), "AA");
        assert_eq!(index_to_alpha(27), "AB");
        assert_eq!(index_to_alpha(51), "AZ");
        assert_eq!(index_to_alpha(52), "BA");
        assert_eq!(index_to_alpha(701), "ZZ");
        assert_eq!(index_to_alpha(702), "AAA");
    }

    #[test]
    fn empty_string_renders_no_strokes() {
        let ops = render_string("", 1, 1).unwrap();
        assert!(coordinates(&ops).is_empty());
    }
}

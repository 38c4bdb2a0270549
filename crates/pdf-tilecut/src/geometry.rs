//! Page-box geometry
//!
//! PDF page boundaries are nested rectangles in user-space points, from the
//! trim box (the intended cut line) outward to the media box (the physical
//! sheet). All boxes here are corner-based, matching the PDF array form
//! `[llx lly urx ury]`.

/// A rectangle given by its lower-left and upper-right corners, in points
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    /// Lower-left x
    pub llx: f32,
    /// Lower-left y
    pub lly: f32,
    /// Upper-right x
    pub urx: f32,
    /// Upper-right y
    pub ury: f32,
}

impl Rect {
    pub fn new(llx: f32, lly: f32, urx: f32, ury: f32) -> Self {
        Self { llx, lly, urx, ury }
    }

    /// A rectangle is valid when its corners are not swapped on either axis.
    pub fn is_valid(&self) -> bool {
        self.llx <= self.urx && self.lly <= self.ury
    }

    pub fn width(&self) -> f32 {
        self.urx - self.llx
    }

    pub fn height(&self) -> f32 {
        self.ury - self.lly
    }

    /// Grow the rectangle outward by `margin` on all four sides.
    pub fn expand(&self, margin: f32) -> Rect {
        Rect {
            llx: self.llx - margin,
            lly: self.lly - margin,
            urx: self.urx + margin,
            ury: self.ury + margin,
        }
    }

    /// Whether `other` lies entirely within this rectangle.
    pub fn contains(&self, other: &Rect) -> bool {
        self.llx <= other.llx
            && self.lly <= other.lly
            && self.urx >= other.urx
            && self.ury >= other.ury
    }
}

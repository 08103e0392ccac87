//! # Layout Parameters
//!
//! Knobs for sizing the card and the ring of glyphs around it.
//!
//! | Field | Default | Meaning |
//! |-------|---------|---------|
//! | `pad` | 3 | Columns of padding on each side of the longest line |
//! | `line_gap` | 1 | Blank rows between consecutive lines |
//! | `rx` | auto | Horizontal ellipse radius |
//! | `ry` | auto | Vertical ellipse radius |
//! | `density` | 40 | Number of samples taken on the ellipse |
//! | `accents` | on | Extra glyph pairs above and below the text |
//! | `glyph` | 🕯 | Character drawn on the ellipse and as accents |
//! | `fill` | space | Blank canvas character |

use serde::{Deserialize, Serialize};

/// Default decorative glyph (U+1F56F CANDLE).
pub const CANDLE: char = '\u{1F56F}';

/// Parameters for [`render`](super::render).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutParams {
    pub pad: usize,
    pub line_gap: usize,
    /// Horizontal radius. `None` derives it from the text width.
    /// An explicit value is used as-is, without the automatic floor.
    pub rx: Option<usize>,
    /// Vertical radius. `None` derives it from the text height.
    pub ry: Option<usize>,
    /// Upper bound on ellipse glyphs drawn. Zero draws none.
    pub density: usize,
    pub accents: bool,
    pub glyph: char,
    pub fill: char,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            pad: 3,
            line_gap: 1,
            rx: None,
            ry: None,
            density: 40,
            accents: true,
            glyph: CANDLE,
            fill: ' ',
        }
    }
}

impl LayoutParams {
    pub fn pad(mut self, pad: usize) -> Self {
        self.pad = pad;
        self
    }

    pub fn line_gap(mut self, line_gap: usize) -> Self {
        self.line_gap = line_gap;
        self
    }

    pub fn radii(mut self, rx: Option<usize>, ry: Option<usize>) -> Self {
        self.rx = rx;
        self.ry = ry;
        self
    }

    pub fn density(mut self, density: usize) -> Self {
        self.density = density;
        self
    }

    /// Disable the accent glyph pairs.
    pub fn no_accents(mut self) -> Self {
        self.accents = false;
        self
    }

    pub fn glyph(mut self, glyph: char) -> Self {
        self.glyph = glyph;
        self
    }

    pub fn fill(mut self, fill: char) -> Self {
        self.fill = fill;
        self
    }
}

//! # Layout Engine
//!
//! Sizes a canvas around the text, centers each line on its own row, and
//! rings the block with glyphs sampled from an ellipse.
//!
//! ## Sizing
//!
//! ```text
//! longest      = longest line, in chars (0 when there are no lines)
//! inner_width  = longest + 2·pad
//! text_height  = n + max(0, n-1)·line_gap
//! inner_height = text_height + 4
//!
//! width  = max(inner_width + 10, 30)
//! height = max(inner_height + 8, 17)
//! center = (height / 2, width / 2)
//!
//! rx = max(inner_width / 2 + 4, 12)     unless given
//! ry = max(inner_height / 2 + 3, 7)     unless given
//! ```
//!
//! ## Example
//!
//! ```
//! use candlelight::layout::{render, LayoutParams};
//!
//! let card = render(&["hi"], &LayoutParams::default());
//! assert_eq!(card.lines().count(), 17);
//! assert!(card.lines().nth(8).unwrap().contains("hi"));
//! ```

pub mod ellipse;
pub mod params;

pub use ellipse::{Ellipse, EllipseStats, draw_accents, draw_candle_ellipse};
pub use params::{CANDLE, LayoutParams};

use serde::Serialize;
use tracing::debug;

use crate::canvas::Canvas;

/// Minimum canvas width.
const MIN_WIDTH: usize = 30;
/// Minimum canvas height.
const MIN_HEIGHT: usize = 17;
/// Columns added around the padded text block.
const WIDTH_BUFFER: usize = 10;
/// Rows added around the padded text block.
const HEIGHT_BUFFER: usize = 8;
/// Rows of breathing room above and below the text, inside the ellipse.
const INNER_V_PAD: usize = 4;
/// Minimum automatic radii.
const MIN_RX: usize = 12;
const MIN_RY: usize = 7;

/// An integer grid coordinate. Signed so off-canvas points are representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Point {
    pub row: i64,
    pub col: i64,
}

impl Point {
    pub const fn new(row: i64, col: i64) -> Self {
        Self { row, col }
    }
}

/// Cells reserved for one line of text. Bounds are inclusive.
///
/// A box for an empty line has `col_end < col_start` and contains no cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExclusionBox {
    pub row_start: i64,
    pub row_end: i64,
    pub col_start: i64,
    pub col_end: i64,
}

impl ExclusionBox {
    pub const fn new(row_start: i64, row_end: i64, col_start: i64, col_end: i64) -> Self {
        Self {
            row_start,
            row_end,
            col_start,
            col_end,
        }
    }

    /// Box covering `len` cells of `row` starting at `col`.
    pub fn for_text(row: i64, col: i64, len: usize) -> Self {
        Self::new(row, row, col, col.saturating_add(len as i64 - 1))
    }

    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        (self.row_start..=self.row_end).contains(&point.row)
            && (self.col_start..=self.col_end).contains(&point.col)
    }
}

/// Geometry computed for a set of lines, before anything is drawn.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub width: usize,
    pub height: usize,
    pub center: Point,
    pub rx: usize,
    pub ry: usize,
    /// Rows occupied by text, gaps included.
    pub text_height: usize,
    /// One box per input line, in input order. `row_start`/`col_start` is
    /// where the line is written.
    pub boxes: Vec<ExclusionBox>,
}

impl Layout {
    /// Size the canvas, pick radii and place every line.
    pub fn compute<S: AsRef<str>>(lines: &[S], params: &LayoutParams) -> Self {
        let n = lines.len();
        let longest = lines
            .iter()
            .map(|line| line.as_ref().chars().count())
            .max()
            .unwrap_or(0);

        // Saturating so extreme pads and gaps fail at allocation, not here.
        let inner_width = longest.saturating_add(params.pad.saturating_mul(2));
        let text_height = n.saturating_add(n.saturating_sub(1).saturating_mul(params.line_gap));
        let inner_height = text_height.saturating_add(INNER_V_PAD);

        let width = inner_width.saturating_add(WIDTH_BUFFER).max(MIN_WIDTH);
        let height = inner_height.saturating_add(HEIGHT_BUFFER).max(MIN_HEIGHT);
        let center = Point::new((height / 2) as i64, (width / 2) as i64);

        let rx = params.rx.unwrap_or_else(|| (inner_width / 2 + 4).max(MIN_RX));
        let ry = params.ry.unwrap_or_else(|| (inner_height / 2 + 3).max(MIN_RY));

        let step = i64::try_from(params.line_gap)
            .unwrap_or(i64::MAX)
            .saturating_add(1);
        let mut row = center.row - (text_height / 2) as i64;
        let mut boxes = Vec::with_capacity(n);
        for line in lines {
            let len = line.as_ref().chars().count();
            let col = center.col - (len / 2) as i64;
            boxes.push(ExclusionBox::for_text(row, col, len));
            row = row.saturating_add(step);
        }

        debug!(
            lines = n,
            width,
            height,
            rx,
            ry,
            "computed card layout"
        );

        Self {
            width,
            height,
            center,
            rx,
            ry,
            text_height,
            boxes,
        }
    }

    pub fn ellipse(&self) -> Ellipse {
        Ellipse::new(self.center, self.rx, self.ry)
    }
}

/// Everything known about one render besides the art itself.
#[derive(Debug, Clone, Serialize)]
pub struct RenderReport {
    pub params: LayoutParams,
    pub layout: Layout,
    pub ellipse: EllipseStats,
}

/// A rendered card plus its report.
#[derive(Debug, Clone, Serialize)]
pub struct Rendering {
    pub art: String,
    pub report: RenderReport,
}

/// Render `lines` inside an ellipse of glyphs.
///
/// Never fails: empty input gives a minimum-size card with just the ring,
/// and anything that would land off the canvas is dropped.
pub fn render<S: AsRef<str>>(lines: &[S], params: &LayoutParams) -> String {
    render_with_report(lines, params).art
}

/// Like [`render`], also returning the computed layout and ellipse tallies.
pub fn render_with_report<S: AsRef<str>>(lines: &[S], params: &LayoutParams) -> Rendering {
    let layout = Layout::compute(lines, params);
    let mut canvas = Canvas::new(layout.width, layout.height, params.fill);

    for (line, b) in lines.iter().zip(&layout.boxes) {
        canvas.write_str(b.row_start, b.col_start, line.as_ref());
    }

    let pass = draw_candle_ellipse(
        &mut canvas,
        &layout.ellipse(),
        params.density,
        &layout.boxes,
        params.glyph,
    );
    debug!(
        drawn = pass.stats.drawn,
        duplicates = pass.stats.duplicates,
        excluded = pass.stats.excluded,
        out_of_bounds = pass.stats.out_of_bounds,
        "ellipse pass"
    );

    if params.accents {
        draw_accents(&mut canvas, layout.center, layout.ry, params.glyph);
    }

    Rendering {
        art: canvas.serialize(),
        report: RenderReport {
            params: params.clone(),
            layout,
            ellipse: pass.stats,
        },
    }
}

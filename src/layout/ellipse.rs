//! # Ellipse of Glyphs
//!
//! Scatters glyphs along an axis-aligned ellipse around the text.
//!
//! ## Sampling
//!
//! ```text
//! t   = 2π · k / density          k = 0 .. density-1
//! col = round(cx + rx · cos t)
//! row = round(cy + ry · sin t)
//! ```
//!
//! Rounding is `f64::round` (ties away from zero). A sample is dropped when
//! its cell was already drawn in this pass, when it lies inside an exclusion
//! box, or when it falls off the canvas. Dropped samples are not retried.

use std::collections::HashSet;

use serde::Serialize;
use tracing::trace;

use super::{ExclusionBox, Point};
use crate::canvas::Canvas;

/// Column offsets of the accent glyphs, relative to the center column.
const ACCENT_LEFT: i64 = -6;
const ACCENT_RIGHT: i64 = 4;

/// An axis-aligned ellipse on the grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipse {
    pub center: Point,
    pub rx: f64,
    pub ry: f64,
}

impl Ellipse {
    pub fn new(center: Point, rx: usize, ry: usize) -> Self {
        Self {
            center,
            rx: rx as f64,
            ry: ry as f64,
        }
    }

    /// Grid cell of sample `k` out of `density`.
    pub fn sample(&self, k: usize, density: usize) -> Point {
        let t = std::f64::consts::TAU * (k as f64 / density as f64);
        let x = self.center.col as f64 + self.rx * t.cos();
        let y = self.center.row as f64 + self.ry * t.sin();
        Point::new(y.round() as i64, x.round() as i64)
    }
}

/// What happened to the samples of one ellipse pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EllipseStats {
    /// Samples that produced a glyph.
    pub drawn: usize,
    /// Samples landing on a cell already drawn in this pass.
    pub duplicates: usize,
    /// Samples landing inside an exclusion box.
    pub excluded: usize,
    /// Samples landing off the canvas.
    pub out_of_bounds: usize,
}

/// Result of [`draw_candle_ellipse`]: the cells drawn plus tallies.
#[derive(Debug, Clone, Default)]
pub struct EllipsePass {
    pub used: HashSet<Point>,
    pub stats: EllipseStats,
}

/// Draw `density` samples of `ellipse` onto `canvas` with `glyph`.
///
/// Every box in `boxes` is consulted for every sample, so all text must be
/// placed before this is called.
pub fn draw_candle_ellipse(
    canvas: &mut Canvas,
    ellipse: &Ellipse,
    density: usize,
    boxes: &[ExclusionBox],
    glyph: char,
) -> EllipsePass {
    let mut pass = EllipsePass::default();

    for k in 0..density {
        let point = ellipse.sample(k, density);

        if pass.used.contains(&point) {
            pass.stats.duplicates += 1;
            continue;
        }

        if boxes.iter().any(|b| b.contains(point)) {
            trace!(k, row = point.row, col = point.col, "sample inside text box");
            pass.stats.excluded += 1;
            continue;
        }

        if !canvas.contains(point.row, point.col) {
            pass.stats.out_of_bounds += 1;
            continue;
        }

        canvas.write_char(point.row, point.col, glyph);
        pass.used.insert(point);
        pass.stats.drawn += 1;
    }

    pass
}

/// Cells of the four accent glyphs: a pair on the ellipse's top row and a
/// pair on its bottom row, clamped into the canvas.
pub fn accent_points(center: Point, ry: usize, width: usize, height: usize) -> [Point; 4] {
    let last_row = height as i64 - 1;
    let last_col = width as i64 - 1;
    let ry = i64::try_from(ry).unwrap_or(i64::MAX);

    let top = center.row.saturating_sub(ry).max(0);
    let bottom = center.row.saturating_add(ry).min(last_row);
    let left = (center.col + ACCENT_LEFT).max(0);
    let right = (center.col + ACCENT_RIGHT).min(last_col);

    [
        Point::new(top, left),
        Point::new(top, right),
        Point::new(bottom, left),
        Point::new(bottom, right),
    ]
}

/// Write the accent glyphs. These ignore exclusion boxes and the drawn set.
pub fn draw_accents(canvas: &mut Canvas, center: Point, ry: usize, glyph: char) {
    for point in accent_points(center, ry, canvas.width(), canvas.height()) {
        canvas.write_char(point.row, point.col, glyph);
    }
}

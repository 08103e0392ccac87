//! # Character Canvas
//!
//! A fixed-size grid of characters that the layout engine draws onto.
//!
//! Writes take signed coordinates so callers can aim at points that fall off
//! the grid; anything outside `[0, height) × [0, width)` is dropped. Nothing
//! here ever resizes the grid after creation.
//!
//! ## Example
//!
//! ```
//! use candlelight::canvas::Canvas;
//!
//! let mut canvas = Canvas::new(5, 2, '.');
//! canvas.write_str(0, 3, "abc");
//! canvas.write_char(1, -1, 'x');
//! assert_eq!(canvas.serialize(), "...ab\n.....");
//! ```

use std::fmt;

/// A `width × height` grid of characters, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: usize,
    height: usize,
    cells: Vec<char>,
}

impl Canvas {
    /// Create a canvas with every cell set to `fill`.
    ///
    /// # Panics
    ///
    /// Panics if `width` or `height` is zero.
    pub fn new(width: usize, height: usize, fill: char) -> Self {
        assert!(
            width > 0 && height > 0,
            "canvas dimensions must be non-zero (got {}x{})",
            width,
            height
        );
        Self {
            width,
            height,
            cells: vec![fill; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Cell index for `(row, col)`, or `None` when off the grid.
    #[inline]
    fn index(&self, row: i64, col: i64) -> Option<usize> {
        if row < 0 || col < 0 {
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        if row < self.height && col < self.width {
            Some(row * self.width + col)
        } else {
            None
        }
    }

    /// Whether `(row, col)` lies on the grid.
    pub fn contains(&self, row: i64, col: i64) -> bool {
        self.index(row, col).is_some()
    }

    /// Read the character at `(row, col)`.
    pub fn get(&self, row: i64, col: i64) -> Option<char> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Write a single character, dropping it when off the grid.
    pub fn write_char(&mut self, row: i64, col: i64, ch: char) {
        if let Some(idx) = self.index(row, col) {
            self.cells[idx] = ch;
        }
    }

    /// Write `text` starting at `(row, col)`, one column per character.
    ///
    /// A row off the grid makes the whole call a no-op. Characters whose
    /// column falls outside the grid are skipped one by one, so text can be
    /// clipped at either edge.
    pub fn write_str(&mut self, row: i64, col: i64, text: &str) {
        if row < 0 || row as usize >= self.height {
            return;
        }
        for (i, ch) in text.chars().enumerate() {
            self.write_char(row, col + i as i64, ch);
        }
    }

    /// Iterate over rows as slices of cells.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.cells.chunks(self.width)
    }

    /// Rows joined by `\n`, each row its cells in column order.
    pub fn serialize(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            for &ch in row {
                write!(f, "{}", ch)?;
            }
        }
        Ok(())
    }
}

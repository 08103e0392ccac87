//! # Candlelight - Text Cards in a Ring of Candles
//!
//! Candlelight centers lines of text on a character grid and surrounds them
//! with glyphs sampled from an ellipse, keeping every glyph off the text.
//!
//! ## Quick Start
//!
//! ```
//! use candlelight::{LayoutParams, render};
//!
//! let lines = ["enough", "time to read", "all the books"];
//! let card = render(&lines, &LayoutParams::default().density(34));
//!
//! for row in card.lines() {
//!     assert_eq!(row.chars().count(), 30);
//! }
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`canvas`] | Fixed-size character grid with clipped writes |
//! | [`layout`] | Sizing, text placement and the ellipse of glyphs |
//! | [`input`] | Paragraph collection and word wrapping for interactive input |
//! | [`error`] | Error types |

pub mod canvas;
pub mod error;
pub mod input;
pub mod layout;

// Re-exports for convenience
pub use canvas::Canvas;
pub use error::CandleError;
pub use layout::{Layout, LayoutParams, Rendering, render, render_with_report};

//! # Render Tests
//!
//! End-to-end checks of the card renderer through the public API.
//!
//! Most tests use `*` as the glyph and `.` as the fill so the output is easy
//! to read in a diff and no glyph can be confused with text.

use candlelight::input::LineCollector;
use candlelight::layout::{ExclusionBox, Layout, Point};
use candlelight::{LayoutParams, render, render_with_report};
use pretty_assertions::assert_eq;

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

fn plain() -> LayoutParams {
    LayoutParams::default().glyph('*').fill('.')
}

fn rows(card: &str) -> Vec<Vec<char>> {
    card.split('\n').map(|row| row.chars().collect()).collect()
}

fn count(card: &str, ch: char) -> usize {
    card.chars().filter(|&c| c == ch).count()
}

// ============================================================================
// GOLDEN OUTPUT
// ============================================================================

#[test]
fn test_four_candles_around_hi() {
    let card = render(&["hi"], &plain().density(4).no_accents());

    let blank = ".".repeat(30);
    let mut expected = vec![blank.as_str(); 17];
    expected[1] = "...............*..............";
    expected[8] = "...*..........hi...........*..";
    expected[15] = "...............*..............";

    assert_eq!(card, expected.join("\n"));
}

// ============================================================================
// SCENARIOS
// ============================================================================

#[test]
fn test_short_line_centered_on_middle_row() {
    let card = render(&["hi"], &LayoutParams::default());
    let grid = rows(&card);

    assert_eq!(grid.len(), 17);
    assert!(grid.iter().all(|row| row.len() == 30));

    let middle: String = grid[8].iter().collect();
    assert_eq!(middle.find("hi").map(|byte| middle[..byte].chars().count()), Some(14));
}

#[test]
fn test_no_lines_gives_bare_ring() {
    let lines: Vec<String> = Vec::new();
    let card = render(&lines, &plain());
    let grid = rows(&card);

    assert_eq!(grid.len(), 17);
    assert!(grid.iter().all(|row| row.len() == 30));
    assert!(card.chars().all(|c| c == '.' || c == '*' || c == '\n'));

    let stars = count(&card, '*');
    assert!(stars > 0);
    assert!(stars <= 40 + 4);
}

#[test]
fn test_long_line_is_never_covered() {
    let line = "a".repeat(50);
    let rendering = render_with_report(&[line.as_str()], &plain().density(400));
    let grid = rows(&rendering.art);

    assert!(grid[0].len() >= 66);
    assert_eq!(
        rendering.report.layout.boxes,
        vec![ExclusionBox::new(8, 8, 8, 57)]
    );
    let row: String = grid[8][8..=57].iter().collect();
    assert_eq!(row, line);
}

#[test]
fn test_zero_density_leaves_only_accents() {
    let card = render(&["hi"], &plain().density(0).no_accents());
    assert_eq!(count(&card, '*'), 0);

    let card = render(&["hi"], &plain().density(0));
    assert_eq!(count(&card, '*'), 4);
    let grid = rows(&card);
    for (row, col) in [(1, 9), (1, 19), (15, 9), (15, 19)] {
        assert_eq!(grid[row][col], '*', "accent at ({row}, {col})");
    }
}

#[test]
fn test_oversized_radii_stay_rectangular() {
    let params = plain().radii(Some(500), Some(500)).density(90);
    let rendering = render_with_report(&["big", "ring"], &params);
    let grid = rows(&rendering.art);

    assert_eq!(grid.len(), rendering.report.layout.height);
    assert!(grid.iter().all(|row| row.len() == rendering.report.layout.width));
    assert_eq!(rendering.report.ellipse.drawn, 0);
}

#[test]
fn test_huge_vertical_radius_clamps_accents() {
    for ry in [1usize << 63, usize::MAX] {
        let card = render(&["hi"], &plain().radii(None, Some(ry)));
        let grid = rows(&card);

        assert_eq!(grid.len(), 17);
        assert!(grid.iter().all(|row| row.len() == 30));
        for (row, col) in [(0, 9), (0, 19), (16, 9), (16, 19)] {
            assert_eq!(grid[row][col], '*', "accent at ({row}, {col}) for ry {ry}");
        }
    }
}

#[test]
fn test_render_is_repeatable() {
    let lines = ["enough", "time to read", "all the books", "i want to read", "in 2022"];
    let params = LayoutParams::default().density(34);
    assert_eq!(render(&lines, &params), render(&lines, &params));
}

#[test]
fn test_multiline_layout_positions() {
    let lines = ["enough", "time to read", "all the books", "i want to read", "in 2022"];
    let layout = Layout::compute(&lines, &LayoutParams::default());

    // text_height 9, inner_height 13, inner_width 20
    assert_eq!((layout.width, layout.height), (30, 21));
    assert_eq!(layout.center, Point::new(10, 15));
    assert_eq!((layout.rx, layout.ry), (14, 9));

    let starts: Vec<(i64, i64)> = layout
        .boxes
        .iter()
        .map(|b| (b.row_start, b.col_start))
        .collect();
    assert_eq!(starts, vec![(6, 12), (8, 9), (10, 9), (12, 8), (14, 12)]);
}

#[test]
fn test_collected_lines_render() {
    let mut collector = LineCollector::new(Some(14));
    for line in ["enough time to read all the books", "i want to read in 2022", ""] {
        collector.feed(line);
    }
    let lines = collector.finish();
    assert_eq!(
        lines,
        vec!["enough time to", "read all the", "books i want", "to read in", "2022"]
    );

    let card = render(&lines, &plain());
    for line in &lines {
        assert!(card.contains(line.as_str()), "missing {line:?}");
    }
}

#[test]
fn test_report_serializes_to_json() {
    let rendering = render_with_report(&["hi"], &LayoutParams::default());
    let json = serde_json::to_value(&rendering).unwrap();

    assert_eq!(json["report"]["layout"]["width"], 30);
    assert_eq!(json["report"]["layout"]["center"]["row"], 8);
    assert_eq!(json["report"]["params"]["glyph"], "🕯");
    assert_eq!(json["art"].as_str(), Some(rendering.art.as_str()));
}

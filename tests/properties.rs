//! Property tests for the card renderer.
//!
//! The glyph is `*` and text is drawn from `[a-z ]`, so any `*` on the card
//! came from the ellipse pass. Accents are off unless a test says otherwise.

use candlelight::{LayoutParams, render, render_with_report};
use proptest::prelude::*;

fn params_strategy() -> impl Strategy<Value = LayoutParams> {
    (
        0usize..8,
        0usize..4,
        proptest::option::of(0usize..80),
        proptest::option::of(0usize..80),
        0usize..160,
    )
        .prop_map(|(pad, gap, rx, ry, density)| {
            LayoutParams::default()
                .pad(pad)
                .line_gap(gap)
                .radii(rx, ry)
                .density(density)
                .glyph('*')
                .fill('.')
                .no_accents()
        })
}

fn lines_strategy() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec("[a-z ]{0,40}", 0..8)
}

proptest! {
    #[test]
    fn card_is_rectangular(lines in lines_strategy(), params in params_strategy()) {
        let rendering = render_with_report(&lines, &params);
        let layout = &rendering.report.layout;
        let rows: Vec<&str> = rendering.art.split('\n').collect();

        prop_assert_eq!(rows.len(), layout.height);
        for row in rows {
            prop_assert_eq!(row.chars().count(), layout.width);
        }
    }

    #[test]
    fn render_is_deterministic(lines in lines_strategy(), params in params_strategy()) {
        prop_assert_eq!(render(&lines, &params), render(&lines, &params));
    }

    #[test]
    fn text_survives_the_ellipse(lines in lines_strategy(), params in params_strategy()) {
        let rendering = render_with_report(&lines, &params);
        let grid: Vec<Vec<char>> = rendering
            .art
            .split('\n')
            .map(|row| row.chars().collect())
            .collect();

        for (line, b) in lines.iter().zip(&rendering.report.layout.boxes) {
            let row = &grid[b.row_start as usize];
            let start = b.col_start as usize;
            let placed: String = row[start..start + line.chars().count()].iter().collect();
            prop_assert_eq!(&placed, line);
        }
    }

    #[test]
    fn each_cell_drawn_once(lines in lines_strategy(), params in params_strategy()) {
        let rendering = render_with_report(&lines, &params);
        let stats = rendering.report.ellipse;
        let stars = rendering.art.chars().filter(|&c| c == '*').count();

        prop_assert_eq!(stars, stats.drawn);
        prop_assert_eq!(
            stats.drawn + stats.duplicates + stats.excluded + stats.out_of_bounds,
            params.density
        );
        prop_assert!(stats.drawn <= params.density);
    }

    #[test]
    fn accents_add_at_most_four(lines in lines_strategy(), params in params_strategy()) {
        let with_accents = LayoutParams { accents: true, ..params.clone() };
        let base = render_with_report(&lines, &params);
        let accented = render(&lines, &with_accents);

        let stars = accented.chars().filter(|&c| c == '*').count();
        prop_assert!(stars <= base.report.ellipse.drawn + 4);
        prop_assert!(stars >= 1);
    }
}

//! # Candlelight CLI
//!
//! Reads a message line by line and prints it inside a ring of candles.
//!
//! ## Usage
//!
//! ```bash
//! # Type lines, blank line ends a paragraph, two blank lines finish
//! candlelight
//!
//! # Wrap every paragraph to 20 columns, fewer candles
//! candlelight --wrap 20 --density 30
//!
//! # Read from a file, print the layout report as JSON
//! candlelight --input message.txt --json
//! ```

use clap::Parser;
use std::io::{self, BufRead, IsTerminal};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use candlelight::{
    CandleError, LayoutParams,
    input::{Feedback, LineCollector},
    layout::CANDLE,
    render_with_report,
};

/// Candlelight - render your text inside a circle of candles
#[derive(Parser, Debug)]
#[command(name = "candlelight")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Horizontal padding inside the circle
    #[arg(long, default_value_t = 3)]
    pad: usize,

    /// Blank rows between lines
    #[arg(long, default_value_t = 1)]
    gap: usize,

    /// Ellipse horizontal radius (auto if omitted)
    #[arg(long)]
    rx: Option<usize>,

    /// Ellipse vertical radius (auto if omitted)
    #[arg(long)]
    ry: Option<usize>,

    /// Number of candles around the ellipse
    #[arg(long, default_value_t = 40)]
    density: usize,

    /// Wrap each paragraph to this width
    #[arg(long, value_name = "WIDTH")]
    wrap: Option<usize>,

    /// Disable the extra top/bottom candle pairs
    #[arg(long)]
    no_accents: bool,

    /// Glyph drawn around the text
    #[arg(long, default_value_t = CANDLE)]
    glyph: char,

    /// Background character
    #[arg(long, default_value_t = ' ')]
    fill: char,

    /// Read the message from a file instead of stdin
    #[arg(long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Print the card and its layout as JSON
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn params(&self) -> Result<LayoutParams, CandleError> {
        for (flag, ch) in [("--glyph", self.glyph), ("--fill", self.fill)] {
            if ch.is_control() {
                return Err(CandleError::Input(format!(
                    "{} must be a printable character, got {:?}",
                    flag, ch
                )));
            }
        }

        let mut params = LayoutParams::default()
            .pad(self.pad)
            .line_gap(self.gap)
            .radii(self.rx, self.ry)
            .density(self.density)
            .glyph(self.glyph)
            .fill(self.fill);
        if self.no_accents {
            params = params.no_accents();
        }
        Ok(params)
    }
}

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), CandleError> {
    let cli = Cli::parse();
    let params = cli.params()?;

    let lines = match &cli.input {
        Some(path) => {
            let file = std::fs::File::open(path)?;
            collect_lines(io::BufReader::new(file), cli.wrap)?
        }
        None => {
            if io::stdin().is_terminal() {
                print_hints();
            }
            collect_lines(io::stdin().lock(), cli.wrap)?
        }
    };
    debug!(lines = lines.len(), "rendering card");

    let rendering = render_with_report(&lines, &params);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&rendering)?);
    } else {
        println!("{}  Candle Circle {}", params.glyph, params.glyph);
        println!();
        println!("{}", rendering.art);
    }

    Ok(())
}

/// Feed `reader` through a [`LineCollector`] until it finishes or hits EOF.
fn collect_lines(reader: impl BufRead, wrap: Option<usize>) -> Result<Vec<String>, CandleError> {
    let mut collector = LineCollector::new(wrap);

    for line in reader.lines() {
        let line = line?;
        let feedback = collector.feed(line.strip_suffix('\r').unwrap_or(&line));
        if let Some(message) = feedback.message() {
            eprintln!("{}", message);
        }
        if feedback == Feedback::Finished {
            break;
        }
    }

    Ok(collector.finish())
}

fn print_hints() {
    eprintln!("Enter your message lines (press Enter on a blank line to finish).");
    eprintln!("Tip: paste a paragraph, then type /wrap <width> to wrap it (e.g. /wrap 20).");
    eprintln!();
}

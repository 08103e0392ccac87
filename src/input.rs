//! # Line Collection
//!
//! Turns raw input lines into the card's text lines.
//!
//! Consecutive non-empty input lines form a paragraph. An empty line ends
//! the paragraph and it becomes one card line (or several, when a default
//! wrap width is set). A second empty line in a row ends input. The
//! `/wrap <width>` directive wraps the pending paragraph to `width` columns
//! right away.
//!
//! ```
//! use candlelight::input::{Feedback, LineCollector};
//!
//! let mut collector = LineCollector::new(None);
//! collector.feed("enough time to read");
//! collector.feed("all the books");
//! assert_eq!(collector.feed("/wrap 12"), Feedback::Wrapped(12));
//! assert_eq!(collector.feed(""), Feedback::Finished);
//! assert_eq!(
//!     collector.finish(),
//!     vec!["enough time", "to read all", "the books"],
//! );
//! ```

use tracing::{debug, trace};

const WRAP_DIRECTIVE: &str = "/wrap";

/// Collector state between input lines.
#[derive(Debug, Clone, PartialEq, Eq)]
enum State {
    /// No paragraph pending. An empty line here ends input.
    Idle,
    /// Raw lines of the pending paragraph.
    Collecting(Vec<String>),
}

/// What the caller should tell the user after feeding a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    /// Keep reading.
    Continue,
    /// The pending paragraph was wrapped to this width.
    Wrapped(usize),
    /// `/wrap` arrived with no paragraph pending.
    NothingToWrap,
    /// `/wrap` was malformed.
    WrapUsage,
    /// Input is complete; call [`LineCollector::finish`].
    Finished,
}

impl Feedback {
    /// Message for the user, if this feedback warrants one.
    pub fn message(&self) -> Option<String> {
        match self {
            Feedback::Wrapped(width) => Some(format!("(wrapped to width {})", width)),
            Feedback::NothingToWrap => Some("(no paragraph to wrap)".to_string()),
            Feedback::WrapUsage => Some("Usage: /wrap <width>".to_string()),
            Feedback::Continue | Feedback::Finished => None,
        }
    }
}

/// Accumulates card lines from interactive input.
#[derive(Debug, Clone)]
pub struct LineCollector {
    lines: Vec<String>,
    state: State,
    wrap_width: Option<usize>,
}

impl LineCollector {
    /// Create a collector. `wrap_width` wraps every paragraph flushed by an
    /// empty line or at the end of input; `None` or `Some(0)` keeps each
    /// paragraph as a single line.
    pub fn new(wrap_width: Option<usize>) -> Self {
        Self {
            lines: Vec::new(),
            state: State::Idle,
            wrap_width: wrap_width.filter(|&w| w > 0),
        }
    }

    /// Lines finalized so far.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Whether a paragraph is waiting to be flushed.
    pub fn is_collecting(&self) -> bool {
        matches!(self.state, State::Collecting(_))
    }

    /// Feed one raw input line (without its newline).
    pub fn feed(&mut self, input: &str) -> Feedback {
        if input.trim().starts_with(WRAP_DIRECTIVE) {
            return self.wrap_directive(input);
        }

        if input.is_empty() {
            return match std::mem::replace(&mut self.state, State::Idle) {
                State::Collecting(paragraph) => {
                    self.flush(paragraph, self.wrap_width);
                    Feedback::Continue
                }
                State::Idle => {
                    trace!("empty line while idle, input complete");
                    Feedback::Finished
                }
            };
        }

        match &mut self.state {
            State::Collecting(paragraph) => paragraph.push(input.to_string()),
            State::Idle => self.state = State::Collecting(vec![input.to_string()]),
        }
        Feedback::Continue
    }

    /// End of input: flush any pending paragraph and return all lines.
    pub fn finish(mut self) -> Vec<String> {
        if let State::Collecting(paragraph) = std::mem::replace(&mut self.state, State::Idle) {
            self.flush(paragraph, self.wrap_width);
        }
        debug!(lines = self.lines.len(), "collected card lines");
        self.lines
    }

    fn wrap_directive(&mut self, input: &str) -> Feedback {
        let parts: Vec<&str> = input.split_whitespace().collect();
        let width = match parts.as_slice() {
            [WRAP_DIRECTIVE, arg] if arg.bytes().all(|b| b.is_ascii_digit()) => {
                arg.parse::<usize>().ok().filter(|&w| w > 0)
            }
            _ => None,
        };
        let Some(width) = width else {
            return Feedback::WrapUsage;
        };

        match std::mem::replace(&mut self.state, State::Idle) {
            State::Collecting(paragraph) => {
                self.flush(paragraph, Some(width));
                Feedback::Wrapped(width)
            }
            State::Idle => Feedback::NothingToWrap,
        }
    }

    fn flush(&mut self, paragraph: Vec<String>, width: Option<usize>) {
        let joined = paragraph.join(" ");
        let text = joined.trim();
        match width {
            Some(width) => self.lines.extend(wrap_text(text, width)),
            None => self.lines.push(text.to_string()),
        }
        trace!(total = self.lines.len(), ?width, "flushed paragraph");
    }
}

/// Greedily wrap `text` into lines of at most `width` chars.
///
/// Words are split on whitespace and rejoined with single spaces. A line may
/// also end after a hyphen joining two letters (`state-of-the-art`). A chunk
/// longer than `width` is broken, filling the rest of the current line
/// first, at its last hyphen if one fits. Blank text yields no lines; a zero
/// width is treated as one.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    // Reversed so the next chunk is always at the end.
    let mut chunks = split_chunks(text);
    chunks.reverse();
    let mut lines = Vec::new();

    while !chunks.is_empty() {
        let mut line: Vec<char> = Vec::new();

        if !lines.is_empty() && chunks.last().is_some_and(|c| is_space(c)) {
            chunks.pop();
        }

        while let Some(chunk) = chunks.pop() {
            if line.len() + chunk.len() > width {
                chunks.push(chunk);
                break;
            }
            line.extend(chunk);
        }

        if let Some(chunk) = chunks.last_mut() {
            if chunk.len() > width {
                let room = width - line.len();
                let end = match chunk[..room].iter().rposition(|&c| c == '-') {
                    Some(h) if h > 0 && chunk[..h].iter().any(|&c| c != '-') => h + 1,
                    _ => room,
                };
                line.extend(chunk.drain(..end));
            }
        }

        if line.last() == Some(&' ') {
            line.pop();
        }
        if !line.is_empty() {
            lines.push(line.into_iter().collect());
        }
    }

    lines
}

fn is_space(chunk: &[char]) -> bool {
    chunk == [' ']
}

/// Words separated by single-space chunks, each word further split after
/// every hyphen that sits between two letters.
fn split_chunks(text: &str) -> Vec<Vec<char>> {
    let mut chunks = Vec::new();

    for (i, word) in text.split_whitespace().enumerate() {
        if i > 0 {
            chunks.push(vec![' ']);
        }
        let chars: Vec<char> = word.chars().collect();
        let mut piece = Vec::new();
        for (j, &ch) in chars.iter().enumerate() {
            piece.push(ch);
            let joins_letters = ch == '-'
                && j > 0
                && chars[j - 1].is_alphabetic()
                && chars.get(j + 1).is_some_and(|c| c.is_alphabetic());
            if joins_letters {
                chunks.push(std::mem::take(&mut piece));
            }
        }
        chunks.push(piece);
    }

    chunks
}

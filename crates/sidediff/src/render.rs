//! Two-pane text rendering of parsed diffs
//!
//! Every line is fitted to the terminal width by character count; ANSI codes
//! are only emitted when color is enabled and never count towards the width.

use split_diff::{ParsedDiff, Row, RowKind, Side, TokenOpKind};

pub const DEFAULT_WIDTH: usize = 160;

const SEPARATOR: &str = " │ ";
const TAB: &str = "    ";
const ELLIPSIS: char = '…';
const RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Total width of a rendered line, both panes and the separator included
    pub width: usize,
    pub color: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            color: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Paint {
    Plain,
    Title,
    Dim,
    Hunk,
    Removed,
    Added,
    RemovedWord,
    AddedWord,
}

impl Paint {
    fn code(self) -> Option<&'static str> {
        match self {
            Paint::Plain => None,
            Paint::Title => Some("\x1b[1m"),
            Paint::Dim => Some("\x1b[2m"),
            Paint::Hunk => Some("\x1b[1;33m"),
            Paint::Removed => Some("\x1b[31m"),
            Paint::Added => Some("\x1b[32m"),
            Paint::RemovedWord => Some("\x1b[97;48;5;52m"),
            Paint::AddedWord => Some("\x1b[97;48;5;22m"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Span {
    paint: Paint,
    text: String,
}

impl Span {
    fn new(paint: Paint, text: impl Into<String>) -> Self {
        Self {
            paint,
            text: text.into(),
        }
    }
}

/// Render one file: a title line followed by one line per row
pub fn render_file(path: &str, status: char, diff: &ParsedDiff, options: &RenderOptions) -> String {
    let stats = diff.stats();
    let title = format!(
        "{} {}  (+{} -{}, {} hunks)",
        status,
        path,
        stats.additions,
        stats.deletions,
        diff.hunk_count()
    );

    let mut out = fit(&[Span::new(Paint::Title, title)], options.width, false, options.color);
    out.push('\n');

    if diff.is_empty() {
        out.push_str("(no diff)\n");
        return out;
    }

    let old_width = diff.line_number_width(Side::Old);
    let new_width = diff.line_number_width(Side::New);
    let (left, right) = pane_widths(options.width);

    for row in diff.rows() {
        match row.kind {
            RowKind::Meta => {
                let span = Span::new(Paint::Dim, row.old_text.as_str());
                out.push_str(&fit(&[span], options.width, false, options.color));
            }
            RowKind::HunkHeader => {
                let span = Span::new(Paint::Hunk, row.old_text.as_str());
                out.push_str(&fit(&[span], options.width, false, options.color));
            }
            _ => {
                let (old_spans, new_spans) = row_spans(row);
                out.push_str(&pane(row.old_line, old_width, old_spans, left, true, options.color));
                out.push_str(&paint(Paint::Dim, SEPARATOR, options.color));
                out.push_str(&pane(row.new_line, new_width, new_spans, right, false, options.color));
            }
        }
        out.push('\n');
    }

    out
}

/// Widths of the old and new panes once the separator is taken out
fn pane_widths(width: usize) -> (usize, usize) {
    let usable = width.saturating_sub(SEPARATOR.chars().count());
    let left = usable / 2;
    (left, usable - left)
}

fn pane(
    number: Option<usize>,
    number_width: usize,
    spans: Vec<Span>,
    width: usize,
    pad: bool,
    color: bool,
) -> String {
    let number = number.map(|n| n.to_string()).unwrap_or_default();
    let mut cell = vec![Span::new(
        Paint::Dim,
        format!("{:>w$} ", number, w = number_width),
    )];
    cell.extend(spans);
    fit(&cell, width, pad, color)
}

/// Old and new pane contents of a content row
fn row_spans(row: &Row) -> (Vec<Span>, Vec<Span>) {
    match row.kind {
        RowKind::Deletion => (vec![Span::new(Paint::Removed, row.old_text.as_str())], Vec::new()),
        RowKind::Addition => (Vec::new(), vec![Span::new(Paint::Added, row.new_text.as_str())]),
        _ => match row.word_diff() {
            Some(ops) => {
                let mut old = Vec::new();
                let mut new = Vec::new();
                for op in ops {
                    match op.kind {
                        TokenOpKind::Equal => {
                            old.push(Span::new(Paint::Removed, op.token));
                            new.push(Span::new(Paint::Added, op.token));
                        }
                        TokenOpKind::Delete => old.push(Span::new(Paint::RemovedWord, op.token)),
                        TokenOpKind::Insert => new.push(Span::new(Paint::AddedWord, op.token)),
                    }
                }
                (old, new)
            }
            None => (
                vec![Span::new(Paint::Plain, row.old_text.as_str())],
                vec![Span::new(Paint::Plain, row.new_text.as_str())],
            ),
        },
    }
}

fn expand(text: &str) -> String {
    text.replace('\t', TAB).replace('\r', "")
}

/// Fit spans into `width` characters, marking cut text with an ellipsis.
///
/// With `pad` the result is filled with spaces up to `width`.
fn fit(spans: &[Span], width: usize, pad: bool, color: bool) -> String {
    let expanded: Vec<(Paint, String)> = spans
        .iter()
        .map(|span| (span.paint, expand(&span.text)))
        .collect();
    let total: usize = expanded.iter().map(|(_, text)| text.chars().count()).sum();

    let truncated = total > width;
    let mut budget = if truncated {
        width.saturating_sub(1)
    } else {
        width
    };

    let mut out = String::new();
    let mut used = 0;
    for (paint_kind, text) in &expanded {
        if budget == 0 {
            break;
        }
        let piece: String = text.chars().take(budget).collect();
        let taken = piece.chars().count();
        budget -= taken;
        used += taken;
        out.push_str(&paint(*paint_kind, &piece, color));
    }

    if truncated && width > 0 {
        out.push(ELLIPSIS);
        used += 1;
    }
    if pad && used < width {
        out.push_str(&" ".repeat(width - used));
    }
    out
}

fn paint(paint: Paint, text: &str, color: bool) -> String {
    match paint.code() {
        Some(code) if color && !text.is_empty() => format!("{}{}{}", code, text, RESET),
        _ => text.to_string(),
    }
}

//! Unified diff text to side-by-side rows.

use std::sync::LazyLock;

use log::{debug, trace};
use regex::Regex;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::align::{align_block_with, AlignOptions};
use crate::row::{ParsedDiff, Row, RowKind};

/// Text shown in place of a binary file's content
pub const BINARY_PLACEHOLDER: &str = "(binary file changed)";

static HUNK_HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^@@ -(\d+)(?:,(\d+))? \+(\d+)(?:,(\d+))? @@(.*)$")
        .expect("hunk header pattern is valid")
});

const META_PREFIXES: &[&str] = &[
    "diff --git ",
    "index ",
    "--- ",
    "+++ ",
    "new file mode ",
    "deleted file mode ",
    "similarity index ",
    "rename from ",
    "rename to ",
    "old mode ",
    "new mode ",
    "Binary files ",
    "GIT binary patch",
];

const FILE_HEADER_PREFIXES: &[&str] = &["diff --git ", "index ", "--- ", "+++ "];

/// Options for [`parse_unified_with`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseOptions {
    /// How edit blocks are paired
    pub align: AlignOptions,

    /// Drop `diff --git`, `index`, `---` and `+++` lines before the first hunk
    pub hide_file_headers: bool,
}

/// The ranges described by a `@@ -a,b +c,d @@` line
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HunkHeader {
    pub old_start: usize,
    pub old_count: usize,
    pub new_start: usize,
    pub new_count: usize,

    /// Function context after the closing `@@`, trimmed
    pub section: String,
}

/// Parse a hunk header line. An omitted count means one line.
pub fn parse_hunk_header(line: &str) -> Option<HunkHeader> {
    let caps = HUNK_HEADER_RE.captures(line)?;
    let number = |idx: usize| caps.get(idx).map(|m| m.as_str().parse::<usize>());

    Some(HunkHeader {
        old_start: number(1)?.ok()?,
        old_count: number(2).unwrap_or(Ok(1)).ok()?,
        new_start: number(3)?.ok()?,
        new_count: number(4).unwrap_or(Ok(1)).ok()?,
        section: caps
            .get(5)
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_default(),
    })
}

/// Start line numbers for a hunk header, `1` for anything unparsable
fn hunk_starts_or_default(line: &str) -> (usize, usize) {
    let Some(caps) = HUNK_HEADER_RE.captures(line) else {
        return (1, 1);
    };
    let start = |idx: usize| {
        caps.get(idx)
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(1)
    };
    (start(1), start(3))
}

/// Whether a line is a known file-level header line
pub fn is_meta_line(line: &str) -> bool {
    META_PREFIXES.iter().any(|prefix| line.starts_with(prefix))
}

fn is_file_header(line: &str) -> bool {
    FILE_HEADER_PREFIXES
        .iter()
        .any(|prefix| line.starts_with(prefix))
}

fn is_binary_notice(text: &str) -> bool {
    text.contains("Binary files") && text.contains(" differ")
}

/// Parse unified diff text with default options
pub fn parse_unified(raw: &str) -> ParsedDiff {
    parse_unified_with(raw, &ParseOptions::default())
}

/// Parse unified diff text into rows and hunk header positions.
///
/// Never fails: lines that don't fit the unified format come out as
/// [`RowKind::Meta`] rows.
pub fn parse_unified_with(raw: &str, options: &ParseOptions) -> ParsedDiff {
    let text = raw.replace("\r\n", "\n");
    if text.trim().is_empty() {
        return ParsedDiff::default();
    }

    if is_binary_notice(&text) {
        debug!("binary change detected, skipping content");
        return ParsedDiff::new(vec![Row::meta(BINARY_PLACEHOLDER)], Vec::new());
    }

    let mut parser = UnifiedParser::new(options);
    for line in text.trim_end_matches('\n').split('\n') {
        parser.feed(line);
    }
    parser.finish()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Preamble,
    InHunk,
}

/// Line-at-a-time state machine behind [`parse_unified_with`]
struct UnifiedParser<'a, 'o> {
    options: &'o ParseOptions,
    state: State,
    rows: Vec<Row>,
    hunk_starts: Vec<usize>,
    old_line: usize,
    new_line: usize,
    deletions: Vec<&'a str>,
    insertions: Vec<&'a str>,
}

impl<'a, 'o> UnifiedParser<'a, 'o> {
    fn new(options: &'o ParseOptions) -> Self {
        Self {
            options,
            state: State::Preamble,
            rows: Vec::new(),
            hunk_starts: Vec::new(),
            old_line: 1,
            new_line: 1,
            deletions: Vec::new(),
            insertions: Vec::new(),
        }
    }

    fn feed(&mut self, line: &'a str) {
        if line.starts_with("@@ ") {
            self.flush_edits();
            let (old_start, new_start) = hunk_starts_or_default(line);
            self.old_line = old_start;
            self.new_line = new_start;
            self.state = State::InHunk;
            self.hunk_starts.push(self.rows.len());
            self.rows.push(Row::hunk_header(line));
            return;
        }

        match self.state {
            State::Preamble => {
                if self.options.hide_file_headers && is_file_header(line) {
                    return;
                }
                if !is_meta_line(line) {
                    trace!("unrecognised preamble line kept as meta: {:?}", line);
                }
                self.rows.push(Row::meta(line));
            }
            State::InHunk => self.feed_hunk_line(line),
        }
    }

    fn feed_hunk_line(&mut self, line: &'a str) {
        if let Some(removed) = line.strip_prefix('-') {
            self.deletions.push(removed);
            return;
        }
        if let Some(added) = line.strip_prefix('+') {
            self.insertions.push(added);
            return;
        }

        self.flush_edits();
        if line.is_empty() {
            self.rows.push(Row::blank());
        } else if let Some(context) = line.strip_prefix(' ') {
            self.rows
                .push(Row::context(self.old_line, self.new_line, context));
            self.old_line = self.old_line.saturating_add(1);
            self.new_line = self.new_line.saturating_add(1);
        } else {
            // `\ No newline at end of file` and anything unrecognised
            self.rows.push(Row::meta(line));
        }
    }

    fn flush_edits(&mut self) {
        if self.deletions.is_empty() && self.insertions.is_empty() {
            return;
        }

        let aligned = align_block_with(&self.deletions, &self.insertions, &self.options.align);
        for block_row in aligned {
            let mut row = Row::blank();
            if let Some(idx) = block_row.deletion {
                row.old_line = Some(self.old_line);
                row.old_text = self.deletions[idx].to_string();
                self.old_line = self.old_line.saturating_add(1);
            }
            if let Some(idx) = block_row.insertion {
                row.new_line = Some(self.new_line);
                row.new_text = self.insertions[idx].to_string();
                self.new_line = self.new_line.saturating_add(1);
            }
            row.kind = match (row.old_line, row.new_line) {
                (Some(_), None) => RowKind::Deletion,
                (None, Some(_)) => RowKind::Addition,
                _ => RowKind::Context,
            };
            self.rows.push(row);
        }

        self.deletions.clear();
        self.insertions.clear();
    }

    fn finish(mut self) -> ParsedDiff {
        self.flush_edits();
        ParsedDiff::new(self.rows, self.hunk_starts)
    }
}

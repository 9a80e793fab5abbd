use derive_more::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::token_diff::{diff_tokens, TokenOp};
use crate::tokenize::tokenize;

/// Represents what a row of the side-by-side view shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RowKind {
    /// Any line that is not hunk content (file headers, mode changes, notices)
    #[display(fmt = "meta")]
    Meta,

    /// A `@@ -a,b +c,d @@` line
    #[display(fmt = "hunk")]
    HunkHeader,

    /// The line only exists in the old version
    #[display(fmt = "deletion")]
    Deletion,

    /// The line only exists in the new version
    #[display(fmt = "addition")]
    Addition,

    /// Unchanged line, paired edit, or blank separator
    #[display(fmt = "context")]
    Context,
}

/// Which side of the view a line number belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Old,
    New,
}

/// One renderable line of the side-by-side view
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Row {
    /// 1-based line number in the old version, if the row has old content
    pub old_line: Option<usize>,

    /// 1-based line number in the new version, if the row has new content
    pub new_line: Option<usize>,

    /// Old-side content, without the diff marker
    pub old_text: String,

    /// New-side content, without the diff marker
    pub new_text: String,

    pub kind: RowKind,
}

impl Row {
    /// A meta row showing `text` on both sides
    pub fn meta(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            old_line: None,
            new_line: None,
            old_text: text.clone(),
            new_text: text,
            kind: RowKind::Meta,
        }
    }

    /// A hunk header row showing the raw header on both sides
    pub fn hunk_header(text: impl Into<String>) -> Self {
        Self {
            kind: RowKind::HunkHeader,
            ..Self::meta(text)
        }
    }

    /// An unnumbered empty separator row
    pub fn blank() -> Self {
        Self {
            kind: RowKind::Context,
            ..Self::meta("")
        }
    }

    /// An unchanged line present on both sides
    pub fn context(old_line: usize, new_line: usize, text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            old_line: Some(old_line),
            new_line: Some(new_line),
            old_text: text.clone(),
            new_text: text,
            kind: RowKind::Context,
        }
    }

    /// Get the line number on the given side
    pub fn line(&self, side: Side) -> Option<usize> {
        match side {
            Side::Old => self.old_line,
            Side::New => self.new_line,
        }
    }

    /// Get the text on the given side
    pub fn text(&self, side: Side) -> &str {
        match side {
            Side::Old => &self.old_text,
            Side::New => &self.new_text,
        }
    }

    /// Whether the row only has old-side content
    pub fn is_pure_deletion(&self) -> bool {
        self.old_line.is_some() && self.new_line.is_none()
    }

    /// Whether the row only has new-side content
    pub fn is_pure_addition(&self) -> bool {
        self.new_line.is_some() && self.old_line.is_none()
    }

    /// Whether the row is a paired edit whose two sides differ
    pub fn is_edit(&self) -> bool {
        !matches!(self.kind, RowKind::Meta | RowKind::HunkHeader)
            && !self.old_text.is_empty()
            && !self.new_text.is_empty()
            && self.old_text != self.new_text
    }

    /// Word-level differences between the two sides of an edit row
    pub fn word_diff(&self) -> Option<Vec<TokenOp<'_>>> {
        if !self.is_edit() {
            return None;
        }
        Some(diff_tokens(
            &tokenize(&self.old_text),
            &tokenize(&self.new_text),
        ))
    }
}

/// Line counts of a parsed diff
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DiffStats {
    /// Lines only present in the new version, including paired edits
    pub additions: usize,

    /// Lines only present in the old version, including paired edits
    pub deletions: usize,

    /// Rows pairing a deleted line with an inserted line
    pub paired: usize,
}

/// The output of parsing one unified diff
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ParsedDiff {
    /// The rows, in display order
    pub rows: Vec<Row>,

    /// Indices into `rows` of every hunk header, ascending
    pub hunk_starts: Vec<usize>,
}

impl ParsedDiff {
    pub fn new(rows: Vec<Row>, hunk_starts: Vec<usize>) -> Self {
        Self { rows, hunk_starts }
    }

    /// Get the rows
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Get the hunk header positions
    pub fn hunk_starts(&self) -> &[usize] {
        &self.hunk_starts
    }

    pub fn into_parts(self) -> (Vec<Row>, Vec<usize>) {
        (self.rows, self.hunk_starts)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get the number of hunks
    pub fn hunk_count(&self) -> usize {
        self.hunk_starts.len()
    }

    /// The first hunk header strictly after `cursor`
    pub fn next_hunk(&self, cursor: usize) -> Option<usize> {
        self.hunk_starts.iter().copied().find(|&idx| idx > cursor)
    }

    /// The last hunk header strictly before `cursor`
    pub fn prev_hunk(&self, cursor: usize) -> Option<usize> {
        self.hunk_starts.iter().rev().copied().find(|&idx| idx < cursor)
    }

    /// Count added, deleted and paired lines
    pub fn stats(&self) -> DiffStats {
        let mut stats = DiffStats::default();
        for row in &self.rows {
            match row.kind {
                RowKind::Deletion => stats.deletions += 1,
                RowKind::Addition => stats.additions += 1,
                RowKind::Context if row.is_edit() => {
                    stats.paired += 1;
                    stats.additions += 1;
                    stats.deletions += 1;
                }
                _ => {}
            }
        }
        stats
    }

    /// Digits needed to print the largest line number on `side`, at least 3
    pub fn line_number_width(&self, side: Side) -> usize {
        let max = self
            .rows
            .iter()
            .filter_map(|row| row.line(side))
            .max()
            .unwrap_or(0);
        max.to_string().len().max(3)
    }
}

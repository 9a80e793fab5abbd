// Side-by-side diff engine for sidediff
// This crate turns unified diff text into aligned rows with word-level detail

mod align;
mod parser;
mod row;
mod text_diff;
mod token_diff;
mod tokenize;

pub use align::{
    align_block, align_block_with, line_similarity, similarity, AlignOptions, BlockRow,
    DEFAULT_COMPARISON_LIMIT, DEFAULT_SIMILARITY_THRESHOLD,
};
pub use parser::{
    is_meta_line, parse_hunk_header, parse_unified, parse_unified_with, HunkHeader, ParseOptions,
    BINARY_PLACEHOLDER,
};
pub use row::{DiffStats, ParsedDiff, Row, RowKind, Side};
pub use text_diff::TextDiff;
pub use token_diff::{diff_tokens, TokenOp, TokenOpKind};
pub use tokenize::tokenize;

#[cfg(feature = "serde")]
use serde::Serialize;

/// The kind of a single step in a token edit script
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum TokenOpKind {
    /// Token present on both sides
    Equal,
    /// Token only present on the old side
    Delete,
    /// Token only present on the new side
    Insert,
}

/// One step of a token-level edit script
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct TokenOp<'a> {
    pub kind: TokenOpKind,
    pub token: &'a str,
}

impl<'a> TokenOp<'a> {
    pub fn equal(token: &'a str) -> Self {
        Self {
            kind: TokenOpKind::Equal,
            token,
        }
    }

    pub fn delete(token: &'a str) -> Self {
        Self {
            kind: TokenOpKind::Delete,
            token,
        }
    }

    pub fn insert(token: &'a str) -> Self {
        Self {
            kind: TokenOpKind::Insert,
            token,
        }
    }

    /// Whether this token belongs to the old side (Equal or Delete)
    pub fn is_old(&self) -> bool {
        self.kind != TokenOpKind::Insert
    }

    /// Whether this token belongs to the new side (Equal or Insert)
    pub fn is_new(&self) -> bool {
        self.kind != TokenOpKind::Delete
    }
}

/// Compute an LCS edit script between two token sequences.
///
/// The whole `(n+1) x (m+1)` table is kept because the script is recovered by
/// walking it forward from `(0, 0)`. When both directions keep the same LCS
/// length the walk deletes before it inserts, so symmetric inputs always
/// produce the same script.
///
/// Callers only pass the tokens of one line per side; cost is `O(n * m)`.
pub fn diff_tokens<'a>(a: &[&'a str], b: &[&'a str]) -> Vec<TokenOp<'a>> {
    let n = a.len();
    let m = b.len();
    if n == 0 && m == 0 {
        return Vec::new();
    }

    // dp[i * stride + j] = LCS length of a[i..] and b[j..]
    let stride = m + 1;
    let mut dp = vec![0usize; (n + 1) * stride];
    for i in (0..n).rev() {
        for j in (0..m).rev() {
            dp[i * stride + j] = if a[i] == b[j] {
                dp[(i + 1) * stride + j + 1] + 1
            } else {
                dp[(i + 1) * stride + j].max(dp[i * stride + j + 1])
            };
        }
    }

    let mut ops = Vec::with_capacity(n + m);
    let (mut i, mut j) = (0, 0);
    while i < n && j < m {
        if a[i] == b[j] {
            ops.push(TokenOp::equal(a[i]));
            i += 1;
            j += 1;
        } else if dp[(i + 1) * stride + j] >= dp[i * stride + j + 1] {
            ops.push(TokenOp::delete(a[i]));
            i += 1;
        } else {
            ops.push(TokenOp::insert(b[j]));
            j += 1;
        }
    }
    ops.extend(a[i..].iter().map(|&tok| TokenOp::delete(tok)));
    ops.extend(b[j..].iter().map(|&tok| TokenOp::insert(tok)));

    ops
}

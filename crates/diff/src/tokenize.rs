/// Character class used to split a line into tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    /// Spaces, tabs and other unicode whitespace
    Whitespace,
    /// Letters, digits and underscore
    Word,
    /// Everything else (operators, brackets, punctuation)
    Other,
}

impl CharClass {
    fn of(ch: char) -> Self {
        if ch.is_whitespace() {
            CharClass::Whitespace
        } else if ch.is_alphanumeric() || ch == '_' {
            CharClass::Word
        } else {
            CharClass::Other
        }
    }
}

/// Split a line into maximal runs of same-class characters.
///
/// Tokens are sub-slices of `line`, in order, so concatenating them gives the
/// input back unchanged. `foo(bar, 1)` becomes
/// `["foo", "(", "bar", ",", " ", "1", ")"]`.
pub fn tokenize(line: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut chars = line.char_indices();

    let Some((_, first)) = chars.next() else {
        return tokens;
    };

    let mut start = 0;
    let mut current = CharClass::of(first);
    for (idx, ch) in chars {
        let next = CharClass::of(ch);
        if next != current {
            tokens.push(&line[start..idx]);
            start = idx;
            current = next;
        }
    }
    tokens.push(&line[start..]);

    tokens
}

/// Whether a token consists only of whitespace.
pub(crate) fn is_whitespace_token(token: &str) -> bool {
    token.chars().all(char::is_whitespace)
}

use split_diff::{parse_unified, RowKind, TextDiff, TokenOp};

#[test]
fn test_unified_diff_headers() {
    let unified = TextDiff::unified_diff("a\nb\nc\n", "a\nx\nc\n", 1);

    assert!(unified.starts_with("--- a\n+++ b\n"));
    assert!(unified.contains("\n-b\n"));
    assert!(unified.contains("\n+x\n"));
}

#[test]
fn test_named_headers() {
    let unified =
        TextDiff::unified_diff_with_header("one\n", "two\n", "old/file.txt", "new/file.txt", 3);

    assert!(unified.starts_with("--- old/file.txt\n+++ new/file.txt\n"));
}

#[test]
fn test_identical_texts() {
    let text = "Line 1\nLine 2\nLine 3\n";

    assert!(TextDiff::unified_diff(text, text, 3).is_empty());
    assert!(TextDiff::parse(text, text, 3).is_empty());
}

#[test]
fn test_parse_round_trip() {
    let old = "fn main() {\n    println!(\"Hello, world!\");\n}\n";
    let new = "fn main() {\n    let name = \"Rust\";\n    println!(\"Hello, {}!\", name);\n}\n";

    let parsed = TextDiff::parse(old, new, 3);
    let stats = parsed.stats();

    assert_eq!(parsed.hunk_count(), 1);
    assert_eq!(parsed.rows()[2].kind, RowKind::HunkHeader);
    assert_eq!(stats.deletions, 1);
    assert_eq!(stats.additions, 2);

    // The println line is paired with its rewritten form
    let edit = parsed
        .rows()
        .iter()
        .find(|row| row.is_edit())
        .expect("println line should be paired");
    assert_eq!(edit.old_text, "    println!(\"Hello, world!\");");
    assert_eq!(edit.new_text, "    println!(\"Hello, {}!\", name);");
}

#[test]
fn test_newlines_at_end() {
    // Missing trailing newlines produce hint lines, which come out as meta rows
    let parsed = TextDiff::parse("Line 1\nLine 2", "Line 1\nLine X", 1);

    assert!(parsed
        .rows()
        .iter()
        .any(|row| row.kind == RowKind::Meta && row.old_text.starts_with('\\')));
    assert_eq!(parsed.stats().deletions, 1);
    assert_eq!(parsed.stats().additions, 1);
}

#[test]
fn test_unicode_text() {
    let old = "Line 1\nLine 2 🚀\nLine 3 😊\n";
    let new = "Line 1\nLine 2 🚀\nLine 3 🎉\n";

    let unified = TextDiff::unified_diff(old, new, 1);
    assert!(unified.contains("😊"));
    assert!(unified.contains("🎉"));

    let parsed = parse_unified(&unified);
    let edit = parsed
        .rows()
        .iter()
        .find(|row| row.is_edit())
        .expect("emoji line should be paired");
    assert_eq!(
        edit.word_diff(),
        Some(vec![
            TokenOp::equal("Line"),
            TokenOp::equal(" "),
            TokenOp::equal("3"),
            TokenOp::equal(" "),
            TokenOp::delete("😊"),
            TokenOp::insert("🎉"),
        ])
    );
}

#[test]
fn test_very_large_diff() {
    let mut old = String::new();
    let mut new = String::new();

    // 1000 lines, every 10th one rewritten
    for i in 0..1000 {
        old.push_str(&format!("Line {} of old text\n", i));
        if i % 10 == 0 {
            new.push_str(&format!("MODIFIED Line {} of new text\n", i));
        } else {
            new.push_str(&format!("Line {} of old text\n", i));
        }
    }

    let parsed = TextDiff::parse(&old, &new, 3);
    let stats = parsed.stats();

    assert!(parsed.hunk_count() > 1);
    assert_eq!(stats.paired, 100);
    assert_eq!(stats.additions, 100);
    assert_eq!(stats.deletions, 100);
}

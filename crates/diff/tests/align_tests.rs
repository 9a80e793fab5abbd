use pretty_assertions::assert_eq;
use split_diff::{
    align_block, align_block_with, line_similarity, AlignOptions, BlockRow,
    DEFAULT_COMPARISON_LIMIT,
};

#[test]
fn test_only_insertions() {
    let deletions: [&str; 0] = [];
    let rows = align_block(&deletions, &["one", "two"]);

    assert_eq!(rows, vec![BlockRow::inserted(0), BlockRow::inserted(1)]);
}

#[test]
fn test_only_deletions() {
    let insertions: [&str; 0] = [];
    let rows = align_block(&["one", "two"], &insertions);

    assert_eq!(rows, vec![BlockRow::deleted(0), BlockRow::deleted(1)]);
}

#[test]
fn test_simple_replacement_pairs() {
    let rows = align_block(&["foo()"], &["foo2()"]);

    assert_eq!(rows, vec![BlockRow::paired(0, 0)]);
}

#[test]
fn test_unmatched_middle_deletion() {
    let rows = align_block(&["A", "B", "C"], &["A", "C"]);

    assert_eq!(
        rows,
        vec![
            BlockRow::paired(0, 0),
            BlockRow::deleted(1),
            BlockRow::paired(2, 1),
        ]
    );
}

#[test]
fn test_refactor_like_block_pairs_closest_line() {
    let deletions = ["count = normalize(oldCount)", "legacyCleanup(tmp)"];
    let insertions = [
        "count = normalize(newCount)",
        "count = normalize(newCount, true)",
        "metrics.Inc()",
    ];

    let rows = align_block(&deletions, &insertions);

    assert_eq!(
        rows,
        vec![
            BlockRow::paired(0, 0),
            BlockRow::deleted(1),
            BlockRow::inserted(1),
            BlockRow::inserted(2),
        ]
    );
}

#[test]
fn test_no_similar_lines_keeps_sides_apart() {
    let rows = align_block(&["alpha", "beta"], &["gamma"]);

    assert_eq!(
        rows,
        vec![
            BlockRow::deleted(0),
            BlockRow::deleted(1),
            BlockRow::inserted(0),
        ]
    );
}

#[test]
fn test_pairs_never_cross() {
    // Both lines moved; only one of the two moves can be shown as a pair
    let a = "let a = 1;";
    let b = "fn other() {}";
    let rows = align_block(&[a, b], &[b, a]);

    assert_eq!(
        rows,
        vec![
            BlockRow::inserted(0),
            BlockRow::paired(0, 1),
            BlockRow::deleted(1),
        ]
    );
}

#[test]
fn test_unmatched_lines_before_match_come_first() {
    let deletions = ["removed entirely", "value = compute(x)"];
    let insertions = ["brand new", "value = compute(y)"];

    let rows = align_block(&deletions, &insertions);

    assert_eq!(
        rows,
        vec![
            BlockRow::deleted(0),
            BlockRow::inserted(0),
            BlockRow::paired(1, 1),
        ]
    );
}

#[test]
fn test_large_block_pairs_by_position() {
    let deletions: Vec<String> = (0..101).map(|i| format!("old line {i}")).collect();
    let insertions: Vec<String> = (0..100).map(|i| format!("completely different {i}")).collect();
    assert!(deletions.len() * insertions.len() > DEFAULT_COMPARISON_LIMIT);

    let rows = align_block(&deletions, &insertions);

    assert_eq!(rows.len(), 101);
    for (k, row) in rows.iter().take(100).enumerate() {
        assert_eq!(*row, BlockRow::paired(k, k));
    }
    assert_eq!(rows[100], BlockRow::deleted(100));
}

#[test]
fn test_block_at_comparison_limit_is_scored() {
    let deletions: Vec<String> = (0..100)
        .map(|i| format!("alpha{i} beta{i} gamma{i}"))
        .collect();
    let mut insertions = vec!["unrelated".to_string()];
    insertions.extend(deletions.iter().take(99).cloned());
    assert_eq!(deletions.len() * insertions.len(), DEFAULT_COMPARISON_LIMIT);

    let rows = align_block(&deletions, &insertions);

    // Every surviving line finds its shifted twin instead of its position
    assert_eq!(rows.len(), 101);
    assert_eq!(rows[0], BlockRow::inserted(0));
    for k in 0..99 {
        assert_eq!(rows[k + 1], BlockRow::paired(k, k + 1));
    }
    assert_eq!(rows[100], BlockRow::deleted(99));
}

#[test]
fn test_custom_comparison_limit() {
    let options = AlignOptions {
        comparison_limit: 2,
        ..AlignOptions::default()
    };

    let rows = align_block_with(&["x", "y"], &["p", "q", "r"], &options);

    assert_eq!(
        rows,
        vec![
            BlockRow::paired(0, 0),
            BlockRow::paired(1, 1),
            BlockRow::inserted(2),
        ]
    );
}

#[test]
fn test_custom_threshold() {
    let strict = AlignOptions {
        similarity_threshold: 0.9,
        ..AlignOptions::default()
    };

    // "foo()" and "foo2()" share half their tokens
    let rows = align_block_with(&["foo()"], &["foo2()"], &strict);

    assert_eq!(rows, vec![BlockRow::deleted(0), BlockRow::inserted(0)]);
}

#[test]
fn test_similarity_bounds() {
    assert_eq!(line_similarity("let x = 1;", "let x = 1;"), 1.0);
    assert_eq!(line_similarity("alpha beta", "gamma delta"), 0.0);
    assert_eq!(line_similarity("foo()", "foo2()"), 0.5);

    // Surrounding whitespace is ignored
    assert_eq!(line_similarity("    x + 1", "x + 1\t"), 1.0);

    // Blank lines match each other but nothing else
    assert_eq!(line_similarity("", "   "), 1.0);
    assert_eq!(line_similarity("", "x"), 0.0);
}

#[test]
fn test_similarity_is_symmetric() {
    let pairs = [
        ("count = normalize(oldCount)", "count = normalize(newCount, true)"),
        ("legacyCleanup(tmp)", "count = normalize(newCount)"),
        ("a a a b", "a b b"),
    ];

    for (a, b) in pairs {
        assert_eq!(line_similarity(a, b), line_similarity(b, a));
    }
}

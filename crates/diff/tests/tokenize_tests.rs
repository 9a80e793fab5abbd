use split_diff::tokenize;

#[test]
fn test_empty_line() {
    assert!(tokenize("").is_empty());
}

#[test]
fn test_code_line() {
    assert_eq!(
        tokenize("foo(bar, 1)"),
        vec!["foo", "(", "bar", ",", " ", "1", ")"]
    );
}

#[test]
fn test_runs_are_maximal() {
    // Adjacent characters of the same class stay together
    assert_eq!(tokenize("  a+=b"), vec!["  ", "a", "+=", "b"]);
    assert_eq!(tokenize("a_b1 ->c"), vec!["a_b1", " ", "->", "c"]);
    assert_eq!(tokenize("metrics.Inc()"), vec!["metrics", ".", "Inc", "()"]);
}

#[test]
fn test_whitespace_only() {
    assert_eq!(tokenize("\t\t"), vec!["\t\t"]);
    assert_eq!(tokenize(" \t "), vec![" \t "]);
}

#[test]
fn test_unicode_words() {
    // Classification works on code points, not bytes
    assert_eq!(tokenize("héllo wörld"), vec!["héllo", " ", "wörld"]);
    assert_eq!(tokenize("日本語 text"), vec!["日本語", " ", "text"]);
    assert_eq!(tokenize("Line 3 😊"), vec!["Line", " ", "3", " ", "😊"]);
}

#[test]
fn test_preserves_input() {
    let line = "    let  sum = items[i].price * 2;  ";
    let tokens = tokenize(line);

    assert_eq!(tokens.concat(), line);
    assert_eq!(tokens.first(), Some(&"    "));
    assert_eq!(tokens.last(), Some(&"  "));
}

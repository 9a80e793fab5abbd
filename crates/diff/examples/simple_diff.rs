use split_diff::{RowKind, Side, TextDiff};

fn main() {
    let file1 = r#"fn main() {
    println!("Hello, world!");
}
"#;

    let file2 = r#"fn main() {
    // Add a greeting with name
    let name = "Rust";
    println!("Hello, {}!", name);
}
"#;

    // Unified text, as produced for the parser
    println!("Unified diff:");
    println!("{}", TextDiff::unified_diff(file1, file2, 1));

    let parsed = TextDiff::parse(file1, file2, 1);
    let stats = parsed.stats();

    println!("Diff statistics:");
    println!("  Total hunks: {}", parsed.hunk_count());
    println!("  Added lines: {}", stats.additions);
    println!("  Deleted lines: {}", stats.deletions);
    println!("  Paired edits: {}", stats.paired);

    let old_width = parsed.line_number_width(Side::Old);
    let new_width = parsed.line_number_width(Side::New);

    println!("\nSide-by-side rows:");
    for row in parsed.rows() {
        match row.kind {
            RowKind::Meta | RowKind::HunkHeader => println!("{}", row.old_text),
            _ => {
                let old_no = row.old_line.map(|n| n.to_string()).unwrap_or_default();
                let new_no = row.new_line.map(|n| n.to_string()).unwrap_or_default();
                println!(
                    "{:>ow$} {:<40} | {:>nw$} {}",
                    old_no,
                    row.old_text,
                    new_no,
                    row.new_text,
                    ow = old_width,
                    nw = new_width,
                );
            }
        }
    }
}

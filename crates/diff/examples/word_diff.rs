use split_diff::{parse_unified, TokenOpKind};

fn main() {
    let unified = "@@ -3,2 +3,2 @@\n-        sum += items[i].price;\n-    legacyCleanup(tmp);\n+        sum += items[i].price * items[i].quantity;\n+    metrics.inc();\n";

    let parsed = parse_unified(unified);

    for row in parsed.rows() {
        let Some(ops) = row.word_diff() else {
            continue;
        };

        // Mark removed tokens with [-..-] and added tokens with {+..+}
        let mut line = String::new();
        for op in ops {
            match op.kind {
                TokenOpKind::Equal => line.push_str(op.token),
                TokenOpKind::Delete => line.push_str(&format!("[-{}-]", op.token)),
                TokenOpKind::Insert => line.push_str(&format!("{{+{}+}}", op.token)),
            }
        }
        println!("{}", line);
    }

    for row in parsed.rows().iter().filter(|row| row.is_pure_deletion()) {
        println!("removed: {}", row.old_text);
    }
    for row in parsed.rows().iter().filter(|row| row.is_pure_addition()) {
        println!("added:   {}", row.new_text);
    }
}

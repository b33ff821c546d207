//! Hygiene: enforces coding standards at test time
//!
//! Scans the canvas crate's production sources for patterns that panic,
//! swallow errors, or bypass the `log` facade. Every budget is zero. If one
//! has to grow, fix an existing hit first.

use std::fs;
use std::path::Path;

/// `(pattern, budget, reason)` for every scanned antipattern.
const BUDGETS: &[(&str, usize, &str)] = &[
    // Panics: these crash the wasm module.
    (".unwrap()", 0, "propagate with `?` or handle the None/Err case"),
    (".expect(", 0, "propagate with `?` or handle the None/Err case"),
    ("panic!(", 0, "return an error instead"),
    ("unreachable!(", 0, "model the state so it cannot occur"),
    ("todo!(", 0, "finish the stub"),
    ("unimplemented!(", 0, "finish the stub"),
    // Silent loss: discards errors without inspecting.
    ("let _ =", 0, "inspect or propagate the result"),
    (".ok()", 0, "map the error instead of dropping it"),
    // Output that bypasses the `log` facade.
    ("println!(", 0, "use log::info!/debug!"),
    ("eprintln!(", 0, "use log::warn!/error!"),
    ("dbg!(", 0, "remove debugging output"),
    // Style / structure.
    ("#[allow(dead_code)]", 0, "delete unused code"),
];

struct SourceFile {
    path: String,
    content: String,
}

/// Collect production `.rs` files from `canvas/src/`, excluding `*_test.rs`.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if !path_str.ends_with(".rs") || path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

#[test]
fn sources_are_found() {
    let files = source_files();
    assert!(
        files.iter().any(|f| f.path.ends_with("engine.rs")),
        "hygiene scan found no sources; run from the canvas crate root"
    );
}

#[test]
fn antipattern_budgets() {
    let files = source_files();
    let mut failures = Vec::new();
    for (pattern, budget, reason) in BUDGETS {
        let found = hits(&files, pattern);
        let count: usize = found.iter().map(|(_, c)| c).sum();
        if count > *budget {
            let detail = found
                .iter()
                .map(|(path, c)| format!("    {path}: {c}"))
                .collect::<Vec<_>>()
                .join("\n");
            failures.push(format!("`{pattern}` budget {budget}, found {count} ({reason})\n{detail}"));
        }
    }
    assert!(failures.is_empty(), "hygiene budgets exceeded:\n{}", failures.join("\n"));
}

//! Hygiene — enforces coding standards at test time.
//!
//! Scans the crate's production sources for antipatterns with a budget of
//! zero each. The budget never grows: if a pattern becomes unavoidable, an
//! existing use has to go first.

use std::fs;
use std::path::{Path, PathBuf};

/// `(pattern, budget)` pairs checked against every production source line.
const BUDGETS: &[(&str, usize)] = &[
    // Panics tear down the whole WASM instance.
    (".unwrap()", 0),
    (".expect(", 0),
    ("panic!(", 0),
    ("unreachable!(", 0),
    ("todo!(", 0),
    ("unimplemented!(", 0),
    // Silent loss — discards errors without inspecting them.
    ("let _ =", 0),
    (".ok()", 0),
    // Structure.
    ("#[allow(dead_code)]", 0),
];

/// Collect production `.rs` files under `src/`, excluding sibling test files.
fn production_sources(dir: &Path, out: &mut Vec<(PathBuf, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            production_sources(&path, out);
            continue;
        }
        if path.extension().is_some_and(|e| e == "rs")
            && !path.to_string_lossy().ends_with("_test.rs")
        {
            if let Ok(content) = fs::read_to_string(&path) {
                out.push((path, content));
            }
        }
    }
}

#[test]
fn antipattern_budgets_hold() {
    let mut files = Vec::new();
    production_sources(Path::new("src"), &mut files);
    assert!(!files.is_empty(), "no production sources found under src/");

    let mut report = String::new();
    for (pattern, budget) in BUDGETS {
        let mut count = 0;
        let mut hits = String::new();
        for (path, content) in &files {
            let in_file = content.lines().filter(|l| l.contains(pattern)).count();
            if in_file > 0 {
                count += in_file;
                hits.push_str(&format!("\n  {}: {in_file}", path.display()));
            }
        }
        if count > *budget {
            report.push_str(&format!(
                "`{pattern}` budget exceeded: found {count}, max {budget}.{hits}\n"
            ));
        }
    }

    assert!(report.is_empty(), "{report}");
}

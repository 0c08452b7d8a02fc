//! Test runner that compares converter output against .expected.vue and .expected.err files
//!
//! Run with: cargo test --test expected_tests
//! Regenerate with: cargo run --bin accept_expected

use sfc_port::{Options, convert};
use std::fs;
use std::path::{Path, PathBuf};

/// Collect all .php test pages
fn collect_test_files(subdir: &str) -> Vec<PathBuf> {
    let test_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join(subdir);
    let mut files = Vec::new();

    for entry in walkdir::WalkDir::new(&test_dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().map(|s| s == "php").unwrap_or(false))
    {
        files.push(entry.path().to_path_buf());
    }

    files.sort();
    files
}

#[test]
fn test_all_expected_output() {
    let files = collect_test_files("pages");
    assert!(!files.is_empty(), "no test pages found");

    let mut failures = Vec::new();

    for path in files {
        let expected_vue = path.with_extension("expected.vue");
        if !expected_vue.exists() {
            failures.push(format!("Missing expected file: {}", expected_vue.display()));
            continue;
        }

        let source = fs::read_to_string(&path).unwrap();
        let expected = fs::read_to_string(&expected_vue).unwrap();

        match convert(&source, &Options::default()) {
            Ok(result) => {
                if result.code.trim() != expected.trim() {
                    failures.push(format!(
                        "Output mismatch: {}\n--- expected ---\n{}\n--- actual ---\n{}",
                        path.display(),
                        expected.trim(),
                        result.code.trim()
                    ));
                }
            }
            Err(e) => {
                failures.push(format!("Conversion error for {}: {}", path.display(), e));
            }
        }
    }

    if !failures.is_empty() {
        panic!("\n{} test(s) failed:\n\n{}", failures.len(), failures.join("\n\n"));
    }
}

#[test]
fn test_all_expected_errors() {
    let files = collect_test_files("errors");
    assert!(!files.is_empty(), "no error pages found");

    let mut failures = Vec::new();

    for path in files {
        let expected_err = path.with_extension("expected.err");
        let source = fs::read_to_string(&path).unwrap();
        let filename = path.file_name().and_then(|s| s.to_str()).unwrap_or("unknown");

        match convert(&source, &Options::default()) {
            Ok(_) => {
                failures.push(format!("Expected error but got success: {}", path.display()));
            }
            Err(e) => {
                if expected_err.exists() {
                    let expected = fs::read_to_string(&expected_err).unwrap();
                    let actual = e.render(&source, filename);

                    if actual.trim() != expected.trim() {
                        failures.push(format!(
                            "Error mismatch: {}\n--- expected ---\n{}\n--- actual ---\n{}",
                            path.display(),
                            expected.trim(),
                            actual.trim()
                        ));
                    }
                } else {
                    failures.push(format!(
                        "Missing expected.err file: {} (error: {})",
                        expected_err.display(),
                        e
                    ));
                }
            }
        }
    }

    if !failures.is_empty() {
        panic!("\n{} test(s) failed:\n\n{}", failures.len(), failures.join("\n\n"));
    }
}

/// Properties every converted page must satisfy
#[test]
fn test_output_validity() {
    let mut failures = Vec::new();

    for path in collect_test_files("pages") {
        let source = fs::read_to_string(&path).unwrap();
        let Ok(result) = convert(&source, &Options::default()) else {
            continue;
        };
        let code = &result.code;

        if code.contains("<?php") || code.contains("<?=") {
            failures.push(format!("{}: PHP directive left in output", path.display()));
        }
        for tag in ["script setup", "template", "style"] {
            let open = format!("<{tag}>");
            let close = format!("</{}>", tag.split(' ').next().unwrap_or(tag));
            if !code.contains(&open) || !code.contains(&close) {
                failures.push(format!("{}: missing {} section", path.display(), tag));
            }
        }
        for relative in ["../assets/", "../dashboard.php", "../login.php"] {
            if code.contains(relative) {
                failures.push(format!("{}: relative path {} left in output", path.display(), relative));
            }
        }
    }

    if !failures.is_empty() {
        panic!("\n{} validation failure(s):\n\n{}", failures.len(), failures.join("\n"));
    }
}

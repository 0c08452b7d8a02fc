//! Binary to generate/update .expected.vue and .expected.err files
//!
//! Usage:
//!   cargo run --bin accept_expected            # Update all
//!   cargo run --bin accept_expected -- errors  # Update only tests matching "errors"

use sfc_port::{Options, convert};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

fn main() {
    let filter: Option<String> = std::env::args().nth(1);
    let test_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests");

    let mut updated = 0;
    let mut skipped = 0;

    for entry in WalkDir::new(&test_dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().map(|s| s == "php").unwrap_or(false))
    {
        let path = entry.path();

        if let Some(ref f) = filter {
            if !path.to_string_lossy().contains(f) {
                skipped += 1;
                continue;
            }
        }

        process_file(path);
        updated += 1;
    }

    println!("Updated {} files, skipped {}", updated, skipped);
}

fn process_file(path: &Path) {
    let source = match fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to read {:?}: {}", path, e);
            return;
        }
    };

    let is_error_test = path.to_string_lossy().contains("/errors/");

    match convert(&source, &Options::default()) {
        Ok(output) => {
            if is_error_test {
                eprintln!("ERROR: {:?} converted but is in errors/", path);
                return;
            }
            let expected_vue = path.with_extension("expected.vue");
            if let Err(e) = fs::write(&expected_vue, &output.code) {
                eprintln!("Failed to write {:?}: {}", expected_vue, e);
            } else {
                println!("  wrote {}", expected_vue.display());
            }
        }
        Err(e) => {
            if is_error_test {
                let expected_err = path.with_extension("expected.err");
                let filename = path.file_name().and_then(|s| s.to_str()).unwrap_or("unknown");
                if let Err(err) = fs::write(&expected_err, e.render(&source, filename)) {
                    eprintln!("Failed to write {:?}: {}", expected_err, err);
                } else {
                    println!("  wrote {}", expected_err.display());
                }
            } else {
                eprintln!("ERROR: {:?} failed to convert but is not in errors/: {}", path, e);
            }
        }
    }
}

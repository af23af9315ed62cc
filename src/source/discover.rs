//! Input discovery
//!
//! Turns command-line inputs (files, directories, glob patterns) into
//! the list of CSV files to process.

use std::path::{Path, PathBuf};

fn is_glob_pattern(input: &str) -> bool {
    input.contains(['*', '?', '['])
}

fn glob_files(pattern: &str) -> Vec<PathBuf> {
    let entries = match glob::glob(pattern) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!(pattern, error = %e, "invalid glob pattern");
            return Vec::new();
        }
    };
    let mut files = Vec::new();
    for entry in entries {
        match entry {
            Ok(path) if path.is_file() => files.push(path),
            Ok(_) => {}
            Err(e) => tracing::warn!(error = %e, "unreadable glob entry"),
        }
    }
    files
}

fn csv_files_in(dir: &Path) -> Vec<PathBuf> {
    // The directory part is literal even if it contains `[`, `?` or `*`
    let escaped = glob::Pattern::escape(&dir.to_string_lossy());
    let pattern = Path::new(&escaped).join("*.csv");
    glob_files(&pattern.to_string_lossy())
}

/// Resolve inputs in the order given. Directory and glob matches are sorted;
/// a file named more than once is processed once.
pub(crate) fn find_files(inputs: &[String]) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = Vec::new();

    for input in inputs {
        let path = Path::new(input);
        let mut found = if path.is_dir() {
            csv_files_in(path)
        } else if is_glob_pattern(input) && !path.exists() {
            glob_files(input)
        } else {
            // Plain paths are passed through so a missing file surfaces as a read failure
            vec![path.to_path_buf()]
        };
        found.sort();
        tracing::debug!(input = %input, matched = found.len(), "resolved input");

        for file in found {
            if !files.contains(&file) {
                files.push(file);
            }
        }
    }

    files
}

//! Declaration dumps written by a front end.
//!
//! A dump is either a JSON array of declaration records (`*.json`) or one
//! record per line (`*.jsonl`). Directories are searched for both.

use anyhow::{Context, Result};
use check_names_core::SymbolDeclaration;
use std::path::{Path, PathBuf};

const DUMP_EXTENSIONS: &[&str] = &["json", "jsonl"];

/// Expands directories into the dump files they contain, keeping the
/// order of the given paths.
pub fn discover(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for path in paths {
        if !path.is_dir() {
            files.push(path.clone());
            continue;
        }

        let mut found = Vec::new();
        let mut builder = ignore::WalkBuilder::new(path);
        builder.hidden(false).git_ignore(true);

        for entry in builder.build() {
            let entry = entry?;
            let candidate = entry.path();
            if candidate.is_file() && is_dump(candidate) {
                found.push(candidate.to_path_buf());
            }
        }

        found.sort();
        tracing::debug!("Found {} dumps under {}", found.len(), path.display());
        files.extend(found);
    }

    Ok(files)
}

fn is_dump(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| DUMP_EXTENSIONS.contains(&e))
}

/// Reads one dump file.
pub fn load_file(path: &Path) -> Result<Vec<SymbolDeclaration>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let is_lines = path.extension().and_then(|e| e.to_str()) == Some("jsonl");
    if is_lines {
        parse_lines(&content)
            .with_context(|| format!("Invalid declaration dump {}", path.display()))
    } else {
        serde_json::from_str(&content)
            .with_context(|| format!("Invalid declaration dump {}", path.display()))
    }
}

fn parse_lines(content: &str) -> Result<Vec<SymbolDeclaration>> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            serde_json::from_str(line).with_context(|| format!("line {}", i + 1))
        })
        .collect()
}

/// Reads every dump reachable from `paths`, concatenated in order.
pub fn load_all(paths: &[PathBuf]) -> Result<Vec<SymbolDeclaration>> {
    let mut declarations = Vec::new();
    for file in discover(paths)? {
        let loaded = load_file(&file)?;
        tracing::debug!("Loaded {} declarations from {}", loaded.len(), file.display());
        declarations.extend(loaded);
    }
    Ok(declarations)
}

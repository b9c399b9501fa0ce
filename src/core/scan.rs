//! Catalog file discovery and parallel loading.

use std::{
    fs::File,
    io::Read,
    path::{Path, PathBuf},
};

use glob::Pattern;
use rayon::prelude::*;
use walkdir::{DirEntry, WalkDir};

use crate::{
    core::{Catalog, CatalogError, parsers::ts::parse_ts_file},
    issues::ParseErrorIssue,
};

/// Catalogs loaded from disk plus the files that failed to parse.
#[derive(Debug, Default)]
pub struct LoadedCatalogs {
    pub catalogs: Vec<Catalog>,
    pub errors: Vec<ParseErrorIssue>,
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with('.'))
}

fn is_ignored(path: &Path, base_dir: &Path, ignores: &[Pattern]) -> bool {
    let relative = path.strip_prefix(base_dir).unwrap_or(path);
    ignores.iter().any(|pattern| pattern.matches_path(relative))
}

/// Collect `*.ts` files below `roots` (relative to `base_dir`), skipping hidden
/// directories and paths matched by `ignores`. The result is sorted.
pub fn scan_catalog_files(base_dir: &Path, roots: &[String], ignores: &[Pattern]) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = roots
        .iter()
        .flat_map(|root| {
            let root_path = match root.trim_end_matches('/') {
                "" | "." => base_dir.to_path_buf(),
                root => base_dir.join(root),
            };
            WalkDir::new(root_path)
                .follow_links(false)
                .into_iter()
                .filter_entry(|entry| !is_hidden(entry) && !is_ignored(entry.path(), base_dir, ignores))
                .filter_map(|entry| match entry {
                    Ok(entry) => Some(entry),
                    Err(err) => {
                        tracing::warn!(error = %err, "skipping unreadable path");
                        None
                    }
                })
                .filter(|entry| entry.file_type().is_file())
                .map(DirEntry::into_path)
                .filter(|path| path.extension().and_then(|e| e.to_str()) == Some("ts"))
                .collect::<Vec<_>>()
        })
        .collect();

    files.sort();
    files.dedup();
    files
}

/// `.ts` is shared with TypeScript; only files that start like XML are catalogs.
pub fn looks_like_catalog(path: &Path) -> bool {
    let mut head = [0u8; 256];
    let Ok(mut file) = File::open(path) else {
        return false;
    };
    let Ok(len) = file.read(&mut head) else {
        return false;
    };
    let head = String::from_utf8_lossy(&head[..len]);
    head.trim_start_matches('\u{feff}').trim_start().starts_with('<')
}

/// Parse every catalog in parallel. Parse failures are collected, not fatal.
pub fn load_catalogs(files: &[PathBuf]) -> LoadedCatalogs {
    let results: Vec<(PathBuf, Result<Catalog, CatalogError>)> = files
        .par_iter()
        .filter(|path| {
            let keep = looks_like_catalog(path);
            if !keep {
                tracing::debug!(path = %path.display(), "not an XML catalog, skipping");
            }
            keep
        })
        .map(|path| (path.clone(), parse_ts_file(path)))
        .collect();

    let mut loaded = LoadedCatalogs::default();
    for (path, result) in results {
        match result {
            Ok(catalog) => loaded.catalogs.push(catalog),
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "failed to parse catalog");
                loaded.errors.push(ParseErrorIssue::from_error(&path, &err));
            }
        }
    }
    loaded
}

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use glob::Pattern;
use walkdir::{DirEntry, WalkDir};

/// What to pick up while walking the frontend tree.
#[derive(Debug, Clone, Copy)]
pub struct ScanOptions<'a> {
    /// Extension classes, scanned in order. Given without the leading dot.
    pub extensions: &'a [String],
    /// Directory names whose whole subtree is skipped (e.g. `node_modules`).
    pub excluded_dirs: &'a [String],
    /// Glob patterns matched against the path relative to the scan root.
    pub ignores: &'a [String],
    pub include_hidden: bool,
}

/// Result of scanning files.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Matching files, grouped by extension class in configured order.
    pub files: Vec<PathBuf>,
    /// Pruned directories and ignored files, in walk order.
    pub excluded: Vec<PathBuf>,
}

pub fn scan_files(root: &Path, options: &ScanOptions<'_>) -> Result<ScanResult> {
    let ignore_patterns = options
        .ignores
        .iter()
        .map(|p| Pattern::new(p).with_context(|| format!("Invalid ignore pattern: \"{}\"", p)))
        .collect::<Result<Vec<_>>>()?;

    let mut buckets: Vec<Vec<PathBuf>> = vec![Vec::new(); options.extensions.len()];
    let mut pruned: Vec<PathBuf> = Vec::new();
    let mut ignored: Vec<PathBuf> = Vec::new();

    let walker = WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            if entry.depth() == 0 {
                return true;
            }
            if !options.include_hidden && is_hidden(entry) {
                return false;
            }
            if entry.file_type().is_dir() && is_excluded_dir(entry, options.excluded_dirs) {
                pruned.push(entry.path().to_path_buf());
                return false;
            }
            true
        });

    for entry in walker {
        let entry =
            entry.with_context(|| format!("Failed to walk directory: {}", root.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let Some(class) = extension_class(path, options.extensions) else {
            continue;
        };

        let relative = relative_slash_path(root, path);
        if ignore_patterns.iter().any(|p| p.matches(&relative)) {
            ignored.push(path.to_path_buf());
            continue;
        }

        buckets[class].push(path.to_path_buf());
    }

    let mut excluded = pruned;
    excluded.extend(ignored);

    Ok(ScanResult {
        files: buckets.into_iter().flatten().collect(),
        excluded,
    })
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.starts_with('.'))
}

fn is_excluded_dir(entry: &DirEntry, excluded_dirs: &[String]) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| excluded_dirs.iter().any(|dir| dir == name))
}

/// Index of the first extension class matching `path`.
fn extension_class(path: &Path, extensions: &[String]) -> Option<usize> {
    let ext = path.extension().and_then(|e| e.to_str())?;
    extensions
        .iter()
        .position(|candidate| candidate.trim_start_matches('.') == ext)
}

fn relative_slash_path(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

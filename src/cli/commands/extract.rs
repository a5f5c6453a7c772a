use std::{
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::Result;

use super::super::exit_status::ExitStatus;
use super::super::{args::ExtractArgs, report};
use crate::{
    config::{Config, load_config},
    core::{MergeOutcome, ScanOptions, TranslationStore, harvest_file, scan_files},
};

/// What an extract run did.
#[derive(Debug)]
pub struct ExtractSummary {
    pub scanned_files: usize,
    /// New keys in the order they were added.
    pub added: Vec<String>,
    /// Store path as shown to the user.
    pub store_path: PathBuf,
    /// False when nothing changed or on a dry run.
    pub written: bool,
}

/// Run the extract command from `cwd`, streaming progress to `out`.
pub fn extract<W: Write>(args: &ExtractArgs, cwd: &Path, out: &mut W) -> Result<ExitStatus> {
    let loaded = load_config(cwd)?;
    if args.verbose {
        match &loaded.path {
            Some(path) => report::print_note(&format!("using config {}", path.display())),
            None => report::print_note("no config file found, using defaults"),
        }
    }
    let config = loaded.config;

    let frontend_root = args
        .frontend_root
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.frontend_root));
    let frontend_dir = cwd.join(&frontend_root);
    if !frontend_dir.is_dir() {
        report::print_missing_frontend_to(&frontend_root, out);
        return Ok(ExitStatus::Failure);
    }

    let store_relative = args
        .store
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.store_path));
    let store_path = frontend_dir.join(store_relative);

    let summary = harvest(&config, cwd, &frontend_dir, &store_path, args, out)?;
    if args.verbose {
        report::print_note(&format!("scanned {} file(s)", summary.scanned_files));
    }
    report::print_summary_to(&summary, out);

    Ok(ExitStatus::Success)
}

fn harvest<W: Write>(
    config: &Config,
    cwd: &Path,
    frontend_dir: &Path,
    store_path: &Path,
    args: &ExtractArgs,
    out: &mut W,
) -> Result<ExtractSummary> {
    let format = config.store_format();
    let mut store = TranslationStore::load(store_path, &format)?;

    let options = ScanOptions {
        extensions: &config.extensions,
        excluded_dirs: &config.excluded_dirs,
        ignores: &config.ignores,
        include_hidden: config.include_hidden,
    };
    let scan = scan_files(frontend_dir, &options)?;

    if args.verbose {
        for path in &scan.excluded {
            report::print_note(&format!("excluded {}", display_path(cwd, path).display()));
        }
    }

    let mut outcome = MergeOutcome::default();
    for file in &scan.files {
        report::print_scanned_to(display_path(cwd, file), out);
        let file_outcome = harvest_file(&mut store, file)?;
        for key in &file_outcome.added {
            report::print_added_to(key, out);
        }
        outcome.extend(file_outcome);
    }

    let written = outcome.has_changes() && !args.dry_run;
    if written {
        store.save(store_path, &format)?;
    }

    Ok(ExtractSummary {
        scanned_files: scan.files.len(),
        added: outcome.added,
        store_path: display_path(cwd, store_path).to_path_buf(),
        written,
    })
}

/// `path` relative to `cwd` when it lies below it.
fn display_path<'a>(cwd: &Path, path: &'a Path) -> &'a Path {
    path.strip_prefix(cwd).unwrap_or(path)
}

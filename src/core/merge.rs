//! Merging discovered phrases into the translation store.

use std::{fs, path::Path};

use anyhow::{Context, Result};

use super::{key::normalize_key, phrases::extract_phrases, store::TranslationStore};

/// Keys added to the store, in the order they were first seen.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MergeOutcome {
    pub added: Vec<String>,
}

impl MergeOutcome {
    pub fn change_count(&self) -> usize {
        self.added.len()
    }

    pub fn has_changes(&self) -> bool {
        !self.added.is_empty()
    }

    pub fn extend(&mut self, other: MergeOutcome) {
        self.added.extend(other.added);
    }
}

/// Add a placeholder entry for every phrase whose key is missing.
pub fn merge_phrases<'a>(
    store: &mut TranslationStore,
    phrases: impl IntoIterator<Item = &'a str>,
) -> MergeOutcome {
    let mut outcome = MergeOutcome::default();
    for phrase in phrases {
        let key = normalize_key(phrase);
        if store.insert_placeholder(&key) {
            outcome.added.push(key);
        }
    }
    outcome
}

/// Merge every translation call found in `content`.
pub fn merge_source(store: &mut TranslationStore, content: &str) -> MergeOutcome {
    merge_phrases(store, extract_phrases(content))
}

/// Read `path` and merge its translation calls.
pub fn harvest_file(store: &mut TranslationStore, path: &Path) -> Result<MergeOutcome> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read source file: {}", path.display()))?;
    Ok(merge_source(store, &content))
}

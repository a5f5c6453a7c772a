//! Extraction and merge engine.
//!
//! - `scanner`: finds source files under the frontend root
//! - `phrases`: pulls translation call phrases out of file text
//! - `key`: turns phrases into store keys
//! - `store`: loads and writes the translation store
//! - `merge`: adds missing keys to the store

pub mod key;
pub mod merge;
pub mod phrases;
pub mod scanner;
pub mod store;

pub use key::normalize_key;
pub use merge::{MergeOutcome, harvest_file, merge_phrases, merge_source};
pub use phrases::extract_phrases;
pub use scanner::{ScanOptions, ScanResult, scan_files};
pub use store::{StoreFormat, TranslationStore};

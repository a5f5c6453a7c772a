//! locale-harvest - translation key harvester for frontend codebases
//!
//! Scans a frontend tree for translation calls such as `_('Hello World')`,
//! turns each phrase into a key (`hello_world`) and adds the keys that are
//! missing to the translation store module, leaving existing entries alone.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Scanning, key normalization, store loading and merging

pub mod cli;
pub mod config;
pub mod core;

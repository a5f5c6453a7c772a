use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::store::{DEFAULT_BINDING, StoreFormat};

pub const CONFIG_FILE_NAME: &str = ".harvestrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_frontend_root")]
    pub frontend_root: String,
    /// Store path, relative to `frontend_root`.
    #[serde(default = "default_store_path")]
    pub store_path: String,
    #[serde(default = "default_binding")]
    pub binding: String,
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    #[serde(default = "default_excluded_dirs")]
    pub excluded_dirs: Vec<String>,
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default)]
    pub include_hidden: bool,
}

fn default_frontend_root() -> String {
    "frontend".to_string()
}

fn default_store_path() -> String {
    "src/lib/localization.ts".to_string()
}

fn default_binding() -> String {
    DEFAULT_BINDING.to_string()
}

fn default_extensions() -> Vec<String> {
    ["svelte", "ts"].map(String::from).to_vec()
}

fn default_excluded_dirs() -> Vec<String> {
    vec!["node_modules".to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            frontend_root: default_frontend_root(),
            store_path: default_store_path(),
            binding: default_binding(),
            extensions: default_extensions(),
            excluded_dirs: default_excluded_dirs(),
            ignores: Vec::new(),
            include_hidden: false,
        }
    }
}

impl Config {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        if self.extensions.is_empty() {
            bail!("'extensions' must list at least one file extension");
        }

        if !is_identifier(&self.binding) {
            bail!(
                "'binding' must be a JavaScript identifier, got \"{}\"",
                self.binding
            );
        }

        Ok(())
    }

    pub fn store_format(&self) -> StoreFormat {
        StoreFormat::new(self.binding.clone())
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    pub config: Config,
    /// Config file that was read, `None` when using defaults.
    pub path: Option<PathBuf>,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}

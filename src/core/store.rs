//! Translation store loading and writing.
//!
//! The store is a TypeScript module wrapping a JSON object literal:
//!
//! ```text
//! const translations = { ... };
//! export default translations;
//! ```
//!
//! Only the JSON subset of object literal syntax is accepted. The file written
//! by [`TranslationStore::save`] is always accepted by [`TranslationStore::load`].

use std::{fs, path::Path};

use anyhow::{Context, Result, bail};
use serde::Serialize;
use serde_json::{Map, Value, ser::PrettyFormatter};

pub const DEFAULT_BINDING: &str = "translations";

const INDENT: &[u8] = b"    ";

/// Framing of the JSON literal inside the store module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreFormat {
    binding: String,
}

impl StoreFormat {
    pub fn new(binding: impl Into<String>) -> Self {
        Self {
            binding: binding.into(),
        }
    }

    /// `const <binding> = `
    pub fn prelude(&self) -> String {
        format!("const {} = ", self.binding)
    }

    /// `export default <binding>;`
    pub fn epilogue(&self) -> String {
        format!("export default {};", self.binding)
    }
}

impl Default for StoreFormat {
    fn default() -> Self {
        Self::new(DEFAULT_BINDING)
    }
}

/// Insertion-ordered mapping from key to translation entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TranslationStore {
    entries: Map<String, Value>,
}

impl TranslationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read and parse the store file at `path`.
    pub fn load(path: &Path, format: &StoreFormat) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read translation store: {}", path.display()))?;
        Self::parse(&content, format)
            .with_context(|| format!("Failed to parse translation store: {}", path.display()))
    }

    /// Parse store module text.
    pub fn parse(content: &str, format: &StoreFormat) -> Result<Self> {
        let content = content.trim_start_matches('\u{feff}').trim_start();

        let prelude = format.prelude();
        let Some(rest) = content.strip_prefix(&prelude) else {
            bail!("Expected the store to start with `{}`", prelude.trim_end());
        };

        let epilogue = format.epilogue();
        let Some(end) = rest.rfind(&epilogue) else {
            bail!("Missing `{}` at the end of the store", epilogue);
        };
        if !rest[end + epilogue.len()..].trim().is_empty() {
            bail!("Unexpected content after `{}`", epilogue);
        }

        let body = rest[..end].trim_end();
        let body = body.strip_suffix(';').unwrap_or(body);

        let value: Value =
            serde_json::from_str(body).context("Store literal is not valid JSON")?;
        match value {
            Value::Object(entries) => Ok(Self { entries }),
            _ => bail!("Store literal must be an object"),
        }
    }

    /// Render the store module text: 4-space indented JSON inside the
    /// declaration and export statements, with a trailing newline.
    pub fn render(&self, format: &StoreFormat) -> Result<String> {
        let mut buf = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
        self.entries
            .serialize(&mut serializer)
            .context("Failed to serialize translation store")?;
        let literal = String::from_utf8(buf).context("Serialized store is not UTF-8")?;

        Ok(format!(
            "{}{};\n{}\n",
            format.prelude(),
            literal,
            format.epilogue()
        ))
    }

    /// Overwrite the store file at `path`.
    pub fn save(&self, path: &Path, format: &StoreFormat) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let content = self.render(format)?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write translation store: {}", path.display()))?;

        Ok(())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Insert an empty entry for `key` unless it already exists.
    ///
    /// Returns true if the key was added.
    pub fn insert_placeholder(&mut self, key: &str) -> bool {
        if self.entries.contains_key(key) {
            return false;
        }
        self.entries
            .insert(key.to_string(), Value::Object(Map::new()));
        true
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Map<String, Value>> for TranslationStore {
    fn from(entries: Map<String, Value>) -> Self {
        Self { entries }
    }
}

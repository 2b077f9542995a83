use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// @module: String catalog parsing, entry classification and mutation

/// State written by this tool
pub const STATE_TRANSLATED: &str = "translated";
/// State marking a translation that must be redone
pub const STATE_NEEDS_REVIEW: &str = "needs_review";
/// State marking a translation that was never reviewed
pub const STATE_NEW: &str = "new";

const DEFAULT_SOURCE_LANGUAGE: &str = "en";

// @struct: Translation state and text for one language
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringUnit {
    // @field: Workflow state
    pub state: String,

    // @field: Translated text
    pub value: String,
}

impl StringUnit {
    // @creates: Unit carrying a finished translation
    pub fn translated(value: impl Into<String>) -> Self {
        StringUnit {
            state: STATE_TRANSLATED.to_string(),
            value: value.into(),
        }
    }
}

// @struct: Localization wrapper around a string unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizationUnit {
    #[serde(rename = "stringUnit")]
    pub string_unit: StringUnit,
}

/// Outcome of classifying one catalog entry against the target language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryDisposition {
    /// Key is empty or whitespace only, the entry is never touched
    EmptyKey,
    /// Localizations mapping is absent, null or empty
    NoLocalizations,
    /// Target language present and not flagged for rework
    UpToDate,
    /// Target language present with state needs_review or new
    NeedsReview,
    /// Localizations present but the target language is missing
    MissingTarget,
}

// @struct: In-memory catalog document
// Keeps the raw JSON tree so unrelated fields round-trip untouched
#[derive(Debug, Clone)]
pub struct StringCatalog {
    root: Value,
}

impl StringCatalog {
    /// Read and parse a catalog file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;

        content
            .parse()
            .with_context(|| format!("Invalid catalog file: {}", path.display()))
    }

    // @creates: Catalog from an already parsed document
    // @validates: Root and strings field are objects
    pub fn from_value(root: Value) -> Result<Self> {
        if !root.is_object() {
            return Err(anyhow!("Catalog root is not a JSON object"));
        }

        match root.get("strings") {
            None | Some(Value::Object(_)) => {}
            Some(_) => return Err(anyhow!("Catalog strings field is not an object")),
        }

        Ok(StringCatalog { root })
    }

    /// Source language declared by the catalog, defaulting to "en"
    pub fn source_language(&self) -> String {
        self.root
            .get("sourceLanguage")
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_SOURCE_LANGUAGE)
            .to_string()
    }

    /// Number of entries in the strings mapping
    pub fn len(&self) -> usize {
        self.strings().map_or(0, Map::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn strings(&self) -> Option<&Map<String, Value>> {
        self.root.get("strings").and_then(Value::as_object)
    }

    pub fn strings_mut(&mut self) -> Option<&mut Map<String, Value>> {
        self.root.get_mut("strings").and_then(Value::as_object_mut)
    }

    pub fn as_value(&self) -> &Value {
        &self.root
    }

    /// Serialize with 2-space indentation, non-ASCII text kept literal
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.root).context("Failed to serialize catalog")
    }

    /// Write the catalog to a file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = self.to_json_string()?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write catalog file: {}", path.display()))?;

        Ok(())
    }
}

impl std::str::FromStr for StringCatalog {
    type Err = anyhow::Error;

    fn from_str(content: &str) -> Result<Self> {
        let root: Value = serde_json::from_str(content).context("Failed to parse catalog JSON")?;
        Self::from_value(root)
    }
}

/// Classify one entry, short-circuiting at the first matching branch
pub fn classify_entry(key: &str, entry: &Value, target_language: &str) -> Result<EntryDisposition> {
    if key.trim().is_empty() {
        return Ok(EntryDisposition::EmptyKey);
    }

    let entry_map = entry
        .as_object()
        .ok_or_else(|| anyhow!("Catalog entry \"{}\" is not an object", key))?;

    let localizations = match entry_map.get("localizations") {
        None | Some(Value::Null) => return Ok(EntryDisposition::NoLocalizations),
        Some(Value::Object(map)) => map,
        Some(_) => {
            return Err(anyhow!(
                "Catalog entry \"{}\" has a non-object localizations field",
                key
            ));
        }
    };

    if localizations.is_empty() {
        return Ok(EntryDisposition::NoLocalizations);
    }

    match localizations.get(target_language) {
        Some(localization) => {
            let state = localization
                .get("stringUnit")
                .and_then(|unit| unit.get("state"))
                .and_then(Value::as_str)
                .unwrap_or("");

            if state == STATE_NEEDS_REVIEW || state == STATE_NEW {
                Ok(EntryDisposition::NeedsReview)
            } else {
                Ok(EntryDisposition::UpToDate)
            }
        }
        None => Ok(EntryDisposition::MissingTarget),
    }
}

/// Whether a bare key is worth sending to the translator
pub fn is_translatable_key(key: &str) -> bool {
    key.chars().count() > 1 && !key.trim().is_empty()
}

/// Source text for an entry, preferring the source language value over the key
pub fn resolve_source_text<'a>(key: &'a str, entry: &'a Value, source_language: &str) -> &'a str {
    entry
        .get("localizations")
        .and_then(|localizations| localizations.get(source_language))
        .and_then(|localization| localization.get("stringUnit"))
        .and_then(|unit| unit.get("value"))
        .and_then(Value::as_str)
        .unwrap_or(key)
}

/// Insert a freshly translated unit for the target language
///
/// Creates the localizations mapping when it is absent or null.
pub fn insert_translation(entry: &mut Value, target_language: &str, translated: &str) -> Result<()> {
    let entry_map = entry
        .as_object_mut()
        .ok_or_else(|| anyhow!("Cannot add a translation to a non-object entry"))?;

    let slot = entry_map
        .entry("localizations")
        .or_insert_with(|| Value::Object(Map::new()));
    if slot.is_null() {
        *slot = Value::Object(Map::new());
    }

    let localizations = slot
        .as_object_mut()
        .ok_or_else(|| anyhow!("Cannot add a translation to a non-object localizations field"))?;

    let unit = LocalizationUnit {
        string_unit: StringUnit::translated(translated),
    };
    localizations.insert(target_language.to_string(), serde_json::to_value(unit)?);

    Ok(())
}

/// Overwrite state and value on the existing target unit, keeping its other fields
pub fn refresh_translation(
    entry: &mut Value,
    target_language: &str,
    translated: &str,
) -> Result<()> {
    let unit = entry
        .get_mut("localizations")
        .and_then(|localizations| localizations.get_mut(target_language))
        .and_then(|localization| localization.get_mut("stringUnit"))
        .and_then(Value::as_object_mut)
        .ok_or_else(|| anyhow!("No string unit to refresh for language {}", target_language))?;

    unit.insert(
        "state".to_string(),
        Value::String(STATE_TRANSLATED.to_string()),
    );
    unit.insert("value".to_string(), Value::String(translated.to_string()));

    Ok(())
}

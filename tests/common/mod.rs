/*!
 * Common test utilities for the xctranslate test suite
 */

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde_json::Value;
use tempfile::TempDir;

/// Catalog document exercising every branch of the decision policy.
///
/// With target language "es" and a provider that always succeeds:
/// - "Hello"       is missing "es" and gets translated from the "en" value
/// - "Goodbye"     already has a translated "es" unit and is left untouched
/// - "Welcome"     has an "es" unit marked needs_review and is refreshed
/// - "Settings"    has no localizations and gets its key translated
/// - ""            is skipped as an empty key
/// - "%"           has no localizations and a single-character key
/// - "Placeholder" is missing "es" but its source value is empty
pub const SAMPLE_CATALOG: &str = r#"{
  "sourceLanguage": "en",
  "version": "1.0",
  "strings": {
    "Hello": {
      "extractionState": "manual",
      "localizations": {
        "en": {
          "stringUnit": {
            "state": "translated",
            "value": "Hello"
          }
        }
      }
    },
    "Goodbye": {
      "localizations": {
        "en": {
          "stringUnit": {
            "state": "translated",
            "value": "Goodbye"
          }
        },
        "es": {
          "stringUnit": {
            "state": "translated",
            "value": "Adiós"
          }
        }
      }
    },
    "Welcome": {
      "localizations": {
        "en": {
          "stringUnit": {
            "state": "translated",
            "value": "Welcome"
          }
        },
        "es": {
          "stringUnit": {
            "state": "needs_review",
            "value": "Bienvenido"
          }
        }
      }
    },
    "Settings": {},
    "": {},
    "%": {},
    "Placeholder": {
      "localizations": {
        "en": {
          "stringUnit": {
            "state": "translated",
            "value": ""
          }
        }
      }
    }
  }
}"#;

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Creates the sample catalog file for testing
pub fn create_sample_catalog(dir: &Path, filename: &str) -> Result<PathBuf> {
    create_test_file(dir, filename, SAMPLE_CATALOG)
}

/// Navigate to strings[key].localizations[lang].stringUnit in a catalog document
pub fn string_unit<'a>(root: &'a Value, key: &str, lang: &str) -> Option<&'a Value> {
    root.get("strings")?
        .get(key)?
        .get("localizations")?
        .get(lang)?
        .get("stringUnit")
}

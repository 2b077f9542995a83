/*!
 * Catalog traversal applying the translation decision policy.
 *
 * Entries are visited once, in file order. Every branch of the policy
 * short-circuits: an entry is counted and handled by exactly one branch.
 * Provider failures are logged and leave the entry untouched; the run
 * continues with the next entry.
 */

use anyhow::Result;
use log::{error, info};
use serde_json::Value;

use crate::catalog::{self, EntryDisposition, StringCatalog};
use crate::translation_service::TranslationService;

/// Counters accumulated over one catalog run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TranslationStats {
    /// Entries in the catalog
    pub total: usize,

    /// Entries skipped for an empty or whitespace-only key
    pub empty_keys: usize,

    /// Entries without localizations whose key was not translatable
    pub no_localizations: usize,

    /// Entries missing the target language but skipped for an empty source text
    pub skipped: usize,

    /// Entries that already carry the target language
    pub existing_translations: usize,

    /// Entries that needed a translation this run
    pub missing: usize,

    /// Translations actually written
    pub translated: usize,
}

/// Applies the decision policy to every entry of a catalog
pub struct CatalogTranslator {
    service: TranslationService,
}

impl CatalogTranslator {
    pub fn new(service: TranslationService) -> Self {
        CatalogTranslator { service }
    }

    /// Walk all entries once, translating what the policy selects
    pub async fn translate_catalog(&self, catalog: &mut StringCatalog) -> Result<TranslationStats> {
        let source_language = catalog.source_language();
        let target_language = self.service.target_language().to_string();

        let mut stats = TranslationStats {
            total: catalog.len(),
            ..TranslationStats::default()
        };

        let Some(strings) = catalog.strings_mut() else {
            return Ok(stats);
        };

        for (key, entry) in strings.iter_mut() {
            match catalog::classify_entry(key, entry, &target_language)? {
                EntryDisposition::EmptyKey => stats.empty_keys += 1,
                EntryDisposition::NoLocalizations => {
                    self.translate_bare_key(key, entry, &mut stats).await?;
                }
                EntryDisposition::UpToDate => stats.existing_translations += 1,
                EntryDisposition::NeedsReview => {
                    stats.existing_translations += 1;
                    stats.missing += 1;
                    self.refresh_entry(key, entry, &source_language, &mut stats)
                        .await?;
                }
                EntryDisposition::MissingTarget => {
                    stats.missing += 1;
                    self.fill_missing_entry(key, entry, &source_language, &mut stats)
                        .await?;
                }
            }
        }

        Ok(stats)
    }

    /// Entry without localizations: translate the key itself when it qualifies
    async fn translate_bare_key(
        &self,
        key: &str,
        entry: &mut Value,
        stats: &mut TranslationStats,
    ) -> Result<()> {
        if !catalog::is_translatable_key(key) {
            stats.no_localizations += 1;
            return Ok(());
        }

        stats.missing += 1;
        match self.service.translate(key).await {
            Ok(translated) => {
                catalog::insert_translation(entry, self.service.target_language(), &translated)?;
                stats.translated += 1;
                info!("Translated key: {} -> {}", key, translated);
            }
            Err(e) => error!("Error translating key {}: {}", key, e),
        }

        Ok(())
    }

    /// Target unit flagged needs_review or new: retranslate it in place
    async fn refresh_entry(
        &self,
        key: &str,
        entry: &mut Value,
        source_language: &str,
        stats: &mut TranslationStats,
    ) -> Result<()> {
        let source_text = catalog::resolve_source_text(key, entry, source_language).to_string();
        if source_text.trim().is_empty() {
            return Ok(());
        }

        match self.service.translate(&source_text).await {
            Ok(translated) => {
                catalog::refresh_translation(entry, self.service.target_language(), &translated)?;
                stats.translated += 1;
                info!("Updated string needing review: {} -> {}", source_text, translated);
            }
            Err(e) => error!("Error updating review string {}: {}", source_text, e),
        }

        Ok(())
    }

    /// Target language absent: translate the source text and insert a new unit
    async fn fill_missing_entry(
        &self,
        key: &str,
        entry: &mut Value,
        source_language: &str,
        stats: &mut TranslationStats,
    ) -> Result<()> {
        let source_text = catalog::resolve_source_text(key, entry, source_language).to_string();
        if source_text.trim().is_empty() {
            stats.skipped += 1;
            return Ok(());
        }

        match self.service.translate(&source_text).await {
            Ok(translated) => {
                catalog::insert_translation(entry, self.service.target_language(), &translated)?;
                stats.translated += 1;
                info!("Translated: {} -> {}", source_text, translated);
            }
            Err(e) => error!("Error translating {}: {}", source_text, e),
        }

        Ok(())
    }
}

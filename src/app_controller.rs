use anyhow::Result;
use log::info;
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use crate::catalog::StringCatalog;
use crate::catalog_translator::{CatalogTranslator, TranslationStats};
use crate::language_utils;
use crate::providers::Provider;
use crate::translation_service::TranslationService;

// @module: Application controller for catalog translation

/// Main application controller for the translation workflow
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Result<Self> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        Ok(Self { config })
    }

    /// Run the main workflow on one catalog file
    pub async fn run(
        &self,
        input_file: PathBuf,
        target_language: String,
        output_file: Option<PathBuf>,
    ) -> Result<TranslationStats> {
        let catalog = StringCatalog::load(&input_file)?;
        let source_language = catalog.source_language();

        let service = TranslationService::new(&self.config, &source_language, &target_language)?;
        info!(
            "Translating with {} ({} -> {})",
            self.config.provider.display_name(),
            language_utils::display_label(&source_language),
            language_utils::display_label(&target_language)
        );

        self.translate_and_save(catalog, service, &input_file, output_file)
            .await
    }

    /// Run the workflow with a caller-supplied provider - used by tests and external consumers
    ///
    /// The source language still comes from the catalog.
    #[allow(dead_code)]
    pub async fn run_with_provider(
        &self,
        provider: Box<dyn Provider>,
        input_file: PathBuf,
        target_language: String,
        output_file: Option<PathBuf>,
    ) -> Result<TranslationStats> {
        let catalog = StringCatalog::load(&input_file)?;
        let source_language = catalog.source_language();

        let service =
            TranslationService::with_provider(provider, &source_language, &target_language)?;

        self.translate_and_save(catalog, service, &input_file, output_file)
            .await
    }

    async fn translate_and_save(
        &self,
        mut catalog: StringCatalog,
        service: TranslationService,
        input_file: &Path,
        output_file: Option<PathBuf>,
    ) -> Result<TranslationStats> {
        info!("Total strings in file: {}", catalog.len());

        let target_language = service.target_language().to_string();
        let translator = CatalogTranslator::new(service);
        let stats = translator.translate_catalog(&mut catalog).await?;

        let output_path = output_file.unwrap_or_else(|| input_file.to_path_buf());
        catalog.save(&output_path)?;

        info!("Translation completed!");
        info!("Total strings: {}", stats.total);
        info!("Empty keys: {}", stats.empty_keys);
        info!(
            "Strings without localizations field: {}",
            stats.no_localizations
        );
        info!("Strings skipped: {}", stats.skipped);
        info!(
            "Existing translations for {}: {}",
            target_language, stats.existing_translations
        );
        info!("Missing translations found: {}", stats.missing);
        info!("Translations added: {}", stats.translated);
        info!("Output saved to: {}", output_path.display());

        Ok(stats)
    }
}

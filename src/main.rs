// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Result, anyhow, Context};
use log::{debug, LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::path::{Path, PathBuf};
use std::io::Write;
use std::fs::File;
use std::io::BufReader;
use clap::{Parser, ValueEnum, CommandFactory, Subcommand};
use clap_complete::{generate, Shell};

use crate::app_config::{Config, TranslationProvider};
use app_controller::Controller;

mod app_config;
mod catalog;
mod catalog_translator;
mod translation_service;
mod app_controller;
mod language_utils;
mod providers;
mod errors;

/// CLI Wrapper for TranslationProvider to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliTranslationProvider {
    Google,
    LibreTranslate,
}

impl From<CliTranslationProvider> for TranslationProvider {
    fn from(cli_provider: CliTranslationProvider) -> Self {
        match cli_provider {
            CliTranslationProvider::Google => TranslationProvider::Google,
            CliTranslationProvider::LibreTranslate => TranslationProvider::LibreTranslate,
        }
    }
}

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Translate a string catalog into a target language (default command)
    Translate(TranslateArgs),

    /// Generate shell completions for xctranslate
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct TranslateArgs {
    /// Input string catalog file (.xcstrings)
    #[arg(value_name = "INPUT_FILE")]
    input_file: PathBuf,

    /// Target language code (e.g., 'es' for Spanish)
    #[arg(value_name = "TARGET_LANGUAGE")]
    target_language: String,

    /// Output file path, the input file is overwritten when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Translation provider to use
    #[arg(short, long, value_enum)]
    provider: Option<CliTranslationProvider>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json", env = "XCTRANSLATE_CONFIG")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// xctranslate - Xcode String Catalog Translator
///
/// Fills in missing or stale translations in .xcstrings string catalogs
/// using machine translation providers (Google Translate, LibreTranslate).
#[derive(Parser, Debug)]
#[command(name = "xctranslate")]
#[command(author = "xctranslate contributors")]
#[command(version = "0.1.0")]
#[command(about = "Machine translation for Xcode string catalogs")]
#[command(long_about = "xctranslate scans an .xcstrings string catalog and fills in every entry that
is missing a translation for the target language, or whose translation is
marked needs_review or new.

EXAMPLES:
    xctranslate Localizable.xcstrings es                       # Translate into Spanish, in place
    xctranslate Localizable.xcstrings fr -o French.xcstrings   # Write to a separate file
    xctranslate -p libre-translate Localizable.xcstrings de    # Use a LibreTranslate server
    xctranslate -l debug Localizable.xcstrings ja              # Verbose run
    xctranslate completions bash > xctranslate.bash            # Generate bash completions

CONFIGURATION:
    Configuration is read from conf.json by default. You can point at a
    different file with --config-path or the XCTRANSLATE_CONFIG environment
    variable. Without a config file the built-in defaults are used.

SUPPORTED PROVIDERS:
    google          - Google Translate web endpoint (default, no API key)
    libre-translate - LibreTranslate server (default endpoint http://localhost:5000)")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input string catalog file (.xcstrings)
    #[arg(value_name = "INPUT_FILE")]
    input_file: Option<PathBuf>,

    /// Target language code (e.g., 'es' for Spanish)
    #[arg(value_name = "TARGET_LANGUAGE")]
    target_language: Option<String>,

    /// Output file path, the input file is overwritten when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Translation provider to use
    #[arg(short, long, value_enum)]
    provider: Option<CliTranslationProvider>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json", env = "XCTRANSLATE_CONFIG")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
// The active level lives in log::max_level so it can be raised after
// the config file is loaded
struct CustomLogger;

impl CustomLogger {
    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(CustomLogger))?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: Emoji for log level
    fn get_emoji_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "❌ ",
            Level::Warn => "🚧 ",
            Level::Info => " ",
            Level::Debug => "🔍 ",
            Level::Trace => "📋 ",
        }
    }

    // @returns: ANSI color for log level
    fn get_color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let emoji = Self::get_emoji_for_level(record.level());
            let color = Self::get_color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {} {}\x1B[0m",
                color,
                now,
                emoji,
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    // Handle subcommands
    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "xctranslate", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Translate(args)) => run_translate(args).await,
        None => {
            // Default behavior - use top-level args
            let input_file = cli
                .input_file
                .ok_or_else(|| anyhow!("INPUT_FILE is required when no subcommand is specified"))?;
            let target_language = cli.target_language.ok_or_else(|| {
                anyhow!("TARGET_LANGUAGE is required when no subcommand is specified")
            })?;

            let translate_args = TranslateArgs {
                input_file,
                target_language,
                output: cli.output,
                provider: cli.provider,
                config_path: cli.config_path,
                log_level: cli.log_level,
            };
            run_translate(translate_args).await
        }
    }
}

async fn run_translate(options: TranslateArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level_filter(&config_log_level));
    }

    // Load configuration when a config file is present, use defaults otherwise
    let config_path = &options.config_path;
    let mut config: Config = if Path::new(config_path).exists() {
        let file = File::open(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;

        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", config_path))?
    } else {
        debug!("No config file at '{}', using defaults", config_path);
        Config::default()
    };

    // Override config with CLI options if provided
    if let Some(provider) = &options.provider {
        config.provider = provider.clone().into();
    }

    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    // Validate the configuration after loading and overriding
    config.validate().context("Configuration validation failed")?;

    // If log level was not set via command line, update it from config now
    if options.log_level.is_none() {
        log::set_max_level(level_filter(&config.log_level));
    }

    let controller = Controller::with_config(config)?;
    controller
        .run(options.input_file, options.target_language, options.output)
        .await?;

    Ok(())
}

fn level_filter(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}

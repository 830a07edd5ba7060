// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::{info, warn, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::sync::Arc;

use mealmatch::app_config::{Config, LogLevel};
use mealmatch::errors::AppError;
use mealmatch::catalog::{CatalogStore, JsonCatalog, MemoryCatalog};
use mealmatch::menu::MenuPlanner;
use mealmatch::providers::mymemory::MyMemory;
use mealmatch::providers::spoonacular::Spoonacular;
use mealmatch::search::{
    EmptyReason, IngredientMatcher, SearchOutcome, SearchQuery,
};
use mealmatch::storage::StoreConnection;
use mealmatch::translation::{TranslationCache, TranslationService};

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

fn level_filter(level: &LogLevel) -> LevelFilter {
    match level {
        LogLevel::Error => LevelFilter::Error,
        LogLevel::Warn => LevelFilter::Warn,
        LogLevel::Info => LevelFilter::Info,
        LogLevel::Debug => LevelFilter::Debug,
        LogLevel::Trace => LevelFilter::Trace,
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Search recipes by the ingredients on hand
    Search(SearchArgs),

    /// Show today's three-course menu
    Menu(MenuArgs),

    /// Show translation cache statistics
    Stats,
}

/// Which recipe source(s) to search
#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
enum CliSource {
    /// Only the private catalog
    Catalog,
    /// Only the public recipe-finder API
    Api,
}

#[derive(Parser, Debug)]
struct SearchArgs {
    /// Comma-separated ingredient list, e.g. "chicken, rice, garlic"
    #[arg(value_name = "INGREDIENTS")]
    ingredients: String,

    /// Require every listed ingredient to be present in a match
    #[arg(short, long)]
    strict: bool,

    /// Restrict the search to one source (default: both)
    #[arg(long, value_enum)]
    source: Option<CliSource>,
}

#[derive(Parser, Debug)]
struct MenuArgs {}

/// MealMatch - find recipes by the ingredients you have
///
/// Searches a private recipe catalog and a public recipe-finder API in
/// parallel, and shows recipe content in your configured display
/// language.
#[derive(Parser, Debug)]
#[command(name = "mealmatch")]
#[command(version = "0.3.0")]
#[command(about = "Ingredient-based recipe search with translated display")]
#[command(long_about = "MealMatch finds recipes matching the ingredients you have, from your
own catalog and from a public recipe-finder API, shown side by side.

EXAMPLES:
    mealmatch search \"chicken, rice\"          # Any listed ingredient matches
    mealmatch search -s \"chicken, rice\"       # All listed ingredients required
    mealmatch menu                            # Today's three-course menu
    mealmatch stats                           # Translation cache statistics

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a
    different config file with --config. If the config file doesn't
    exist, a default one will be created automatically. The recipe API
    key is required; the translation API key is optional.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json", global = true)]
    config_path: String,

    /// Display language code (overrides config), e.g. 'hr', 'fr'
    #[arg(short, long, global = true)]
    language: Option<String>,

    /// Set logging level
    #[arg(long, value_enum, global = true)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color for log level
    fn color_for_level(level: Level) -> &'static str {
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
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {}\x1B[0m", color, now, record.args());
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

    let cli = CommandLineOptions::parse();

    if let Some(cmd_log_level) = &cli.log_level {
        let level: LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level_filter(&level));
    }

    let mut config = Config::load_or_create(&cli.config_path)
        .with_context(|| format!("Failed to load config from '{}'", cli.config_path))?;

    if let Some(language) = &cli.language {
        config.target_language = language.clone();
    }
    if let Some(log_level) = &cli.log_level {
        config.log_level = log_level.clone().into();
    } else {
        log::set_max_level(level_filter(&config.log_level));
    }

    config
        .validate()
        .map_err(|e| AppError::Config(e.to_string()))
        .context("Configuration validation failed")?;

    let app = App::with_config(config)?;

    match cli.command {
        Commands::Search(args) => app.run_search(args).await,
        Commands::Menu(_) => app.run_menu().await,
        Commands::Stats => app.run_stats(),
    }
}

/// Wired-up application services
struct App {
    config: Config,
    matcher: IngredientMatcher,
    planner: MenuPlanner,
    store: StoreConnection,
    translator: TranslationService,
}

impl App {
    /// Build the service graph from a validated configuration
    fn with_config(config: Config) -> Result<Self, AppError> {
        let store = if config.store_path.is_empty() {
            StoreConnection::new_default()
        } else {
            StoreConnection::new(&config.store_path)
        }
        .map_err(|e| AppError::Storage(e.to_string()))?;

        let translation_client = Arc::new(MyMemory::new(
            config.translation_api.api_key.clone(),
            config.translation_api.endpoint.clone(),
        ));
        let translator = TranslationService::new(
            translation_client,
            TranslationCache::new(store.clone()),
        );

        let recipe_api = Arc::new(Spoonacular::new(
            config.recipe_api.api_key.clone(),
            config.recipe_api.endpoint.clone(),
        ));

        let catalog: Arc<dyn CatalogStore> = if config.catalog_path.is_empty() {
            warn!("No catalog snapshot configured; catalog results will be empty");
            Arc::new(MemoryCatalog::new(Vec::new(), Vec::new()))
        } else {
            Arc::new(JsonCatalog::new(&config.catalog_path))
        };

        let matcher = IngredientMatcher::with_page_size(
            catalog,
            recipe_api.clone(),
            translator.clone(),
            config.recipe_api.page_size,
        );
        let planner = MenuPlanner::new(recipe_api, translator.clone(), store.clone());

        Ok(Self {
            config,
            matcher,
            planner,
            store,
            translator,
        })
    }

    async fn run_search(&self, args: SearchArgs) -> Result<()> {
        let query = SearchQuery::new(&args.ingredients, args.strict);
        let language = &self.config.target_language;

        info!(
            "Searching for {:?} under {:?} policy",
            query.ingredients, query.policy
        );

        let search_catalog = args.source != Some(CliSource::Api);
        let search_api = args.source != Some(CliSource::Catalog);

        if search_catalog {
            let outcome = self
                .matcher
                .match_against_catalog(&query.ingredients, query.policy)
                .await;

            println!("== Your catalog ==");
            match outcome {
                SearchOutcome::Done(recipes) => {
                    for recipe in &recipes {
                        println!("  {}", recipe.title);
                    }
                }
                SearchOutcome::Empty(reason) => println!("  ({})", empty_message(reason)),
                SearchOutcome::Failed(e) => println!("  Search failed: {}", e),
            }
        }

        if search_api {
            let outcome = self
                .matcher
                .match_against_public_api(&query.ingredients, query.policy, language)
                .await;

            println!("== Public recipes ==");
            match outcome {
                SearchOutcome::Done(summaries) => {
                    for summary in &summaries {
                        let title = self.translator.translate(&summary.title, language).await;
                        println!("  [{}] {}", summary.id, title);
                    }
                }
                SearchOutcome::Empty(reason) => println!("  ({})", empty_message(reason)),
                SearchOutcome::Failed(e) => println!("  Search failed: {}", e),
            }
        }

        Ok(())
    }

    async fn run_menu(&self) -> Result<()> {
        let menu = self
            .planner
            .menu_for_today(&self.config.target_language)
            .await?;

        println!("Menu for {}", menu.date);
        println!("  Appetizer:   {}", menu.appetizer.title);
        println!("  Main course: {}", menu.main_course.title);
        println!("  Dessert:     {}", menu.dessert.title);

        Ok(())
    }

    fn run_stats(&self) -> Result<()> {
        let stats = self.store.stats()?;
        println!("{}", stats);
        Ok(())
    }
}

fn empty_message(reason: EmptyReason) -> &'static str {
    match reason {
        EmptyReason::NoIngredientsRecognized => "none of these ingredients were recognized",
        EmptyReason::NoRecipesMatched => "no recipes matched",
    }
}

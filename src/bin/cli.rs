//! College Library CLI
//!
//! Renders each portal page to the terminal.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

use clap::{Parser, Subcommand};
use college_library::{
    error::Result,
    models::Config,
    pages::{
        self, about::AboutPage, contact::ContactPage, home::HomePage, papers::PapersPage,
        staff::StaffPage,
    },
    search::{OpacSession, SearchType},
    services::{
        CatalogService, DirectoryRepository, EResourceService, HttpSheetSource,
        QuestionPaperService, record_visit,
    },
    utils::{console, http},
};

/// MVGSC Library - college library portal
#[derive(Parser, Debug)]
#[command(name = "library", version, about = "College library portal")]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "library.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Suppress decorated page output
    #[arg(short, long)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show quick links, announcements and the visit counter
    Home,

    /// Search the book catalog
    Opac {
        /// Search text (empty lists the whole catalog)
        #[arg(default_value = "")]
        query: String,

        /// Field to match: all, title, author, language, department
        #[arg(short = 't', long = "type", default_value = "all")]
        search_type: String,

        /// Page to start from
        #[arg(long, default_value_t = 1)]
        page: usize,

        /// Number of pages to load
        #[arg(long, default_value_t = 1)]
        pages: usize,
    },

    /// Browse the question paper archive
    Papers {
        #[arg(short, long, default_value = "All")]
        department: String,

        #[arg(short, long, default_value = "All")]
        year: String,
    },

    /// Browse e-resources
    Eresources {
        #[arg(long, default_value = "All")]
        category: String,
    },

    /// List library staff
    Staff,

    /// About the college and the library
    About,

    /// Contact details and opening hours
    Contact,

    /// Validate the configuration file
    Validate,

    /// Show configured sources and content
    Info,
}

/// Initialize logging based on verbosity flag and configured level.
fn init_logging(verbose: bool, level: &str) {
    let level = if verbose { "debug" } else { level };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let loaded = Config::load(&cli.config);
    let level = loaded
        .as_ref()
        .map(|c| c.logging.level.clone())
        .unwrap_or_else(|_| "info".to_string());
    init_logging(cli.verbose, &level);
    console::set_quiet(cli.quiet);

    let config = match loaded {
        Ok(config) => {
            log::info!("Loaded configuration from {}", cli.config.display());
            config
        }
        Err(e) => {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                cli.config,
                e
            );
            Config::default()
        }
    };

    let base = cli.config.parent().unwrap_or_else(|| Path::new("."));
    let content_root = config.content_root(base);
    let repo = DirectoryRepository::new(&content_root);

    match cli.command {
        Command::Home => {
            let client = http::create_async_client(&config.http)?;
            let visits = record_visit(&client, &config.sources.visitor_counter).await;
            HomePage::load(&repo, &config.fallbacks, visits)
                .await
                .render();
        }

        Command::Opac {
            query,
            search_type,
            page,
            pages,
        } => {
            let search_type: SearchType = search_type.parse()?;
            let source = Arc::new(HttpSheetSource::new(&config.http)?);
            let catalog = CatalogService::new(source, &config.sources.books);

            let mut session = OpacSession::new(
                config.search.page_size,
                Duration::from_millis(config.search.debounce_ms),
                &config.fallbacks.catalog_error,
            )
            .with_search_type(search_type);
            let now = Instant::now();
            session.type_query(query, now);
            let deadline = session.debouncer().deadline().unwrap_or(now);

            let Some(mut request) = session.tick(deadline) else {
                log::warn!("Query did not commit");
                return Ok(());
            };
            if page > 1 {
                request.page = page;
            }
            catalog.execute(&mut session, &request).await;

            for _ in 1..pages.max(1) {
                let Some(next) = session.load_more() else {
                    break;
                };
                catalog.execute(&mut session, &next).await;
            }

            pages::catalog::render(&session);
        }

        Command::Papers { department, year } => {
            let source = Arc::new(HttpSheetSource::new(&config.http)?);
            let archive = QuestionPaperService::new(source, &config.sources.question_papers)
                .fetch_or_empty()
                .await;
            PapersPage::new(archive)
                .with_department(department)
                .with_year(year)
                .render();
        }

        Command::Eresources { category } => {
            let source = Arc::new(HttpSheetSource::new(&config.http)?);
            let directory = EResourceService::new(
                source,
                &config.sources.eresources,
                &config.sources.eresources_fallback,
            )
            .load()
            .await;
            pages::eresources::render(&directory, &category);
        }

        Command::Staff => {
            StaffPage::load(&repo).await.render();
        }

        Command::About => {
            AboutPage::load(&repo, &config.fallbacks).await.render();
        }

        Command::Contact => {
            ContactPage::load(&repo, &config.fallbacks).await.render();
        }

        Command::Validate => {
            log::info!("Validating {}...", cli.config.display());

            if let Err(e) = Config::load_validated(&cli.config) {
                log::error!("Config validation failed: {}", e);
                return Err(e);
            }
            log::info!("Config OK");
        }

        Command::Info => {
            let mut items = vec![
                ("config", cli.config.display().to_string()),
                ("content root", content_root.display().to_string()),
                (
                    "content",
                    if content_root.exists() {
                        "exists".to_string()
                    } else {
                        "not found (fallbacks in use)".to_string()
                    },
                ),
                ("page size", config.search.page_size.to_string()),
                ("debounce", format!("{} ms", config.search.debounce_ms)),
            ];
            for (name, url) in config.sources.sheets() {
                items.push((name, url.to_string()));
            }
            console::summary("Library portal", &items);
        }
    }

    log::info!("Done!");

    Ok(())
}

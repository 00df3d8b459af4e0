//! Campus - course catalog browser
//!
//! Loads a course catalog from the built-in sample data, a YAML file
//! or (with the `remote` feature) a JSON endpoint, and runs the query
//! engine against it from the command line.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use campus_core::catalog::CatalogStore;
use campus_core::model::{CourseCategory, CourseDifficulty};
use campus_core::source::{CourseSource, FileCourseSource, MockCourseSource};

#[cfg(feature = "remote")]
use campus_core::source::HttpCourseSource;

mod course_cli;

/// Log levels
#[derive(Debug, Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[derive(Parser, Debug)]
#[clap(
    name = "campus",
    about = "Browse and search e-learning course catalogs",
    version
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,

    /// Load the catalog from a YAML file instead of the built-in sample data
    #[clap(long, global = true)]
    catalog: Option<PathBuf>,

    /// Fetch the catalog from a remote JSON endpoint
    #[cfg(feature = "remote")]
    #[clap(long, global = true, conflicts_with = "catalog")]
    url: Option<String>,

    /// Set log level
    #[clap(long, default_value = "warn", global = true)]
    log_level: LogLevel,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every course in the catalog
    List {
        /// Output as JSON
        #[clap(long)]
        json: bool,
    },

    /// Search the catalog by text, category and difficulty
    Search {
        /// Search query (matches title, description, instructor)
        query: Option<String>,

        /// Filter by category (e.g. "programming", "personal-development")
        #[clap(long)]
        category: Option<CourseCategory>,

        /// Filter by difficulty (beginner, intermediate, advanced)
        #[clap(long)]
        difficulty: Option<CourseDifficulty>,

        /// Output as JSON
        #[clap(long)]
        json: bool,
    },

    /// Show one course with its lesson list
    Show {
        /// Course title or id
        course: String,

        /// Output as JSON
        #[clap(long)]
        json: bool,
    },

    /// Print the category and difficulty vocabulary
    Categories,
}

fn initialize_tracing(log_level: &LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_filter_directive()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn resolve_source(cli: &Cli) -> Box<dyn CourseSource> {
    #[cfg(feature = "remote")]
    if let Some(ref url) = cli.url {
        tracing::debug!("Using remote catalog endpoint {url}");
        return Box::new(HttpCourseSource::new(url.clone()));
    }

    match cli.catalog {
        Some(ref path) => {
            tracing::debug!("Using catalog file {}", path.display());
            Box::new(FileCourseSource::new(path))
        }
        None => Box::new(MockCourseSource::with_sample_catalog()),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    initialize_tracing(&cli.log_level);

    if let Command::Categories = cli.command {
        course_cli::execute_categories();
        return Ok(());
    }

    // Every remaining command reads the catalog; load it fully before
    // any filtering runs.
    let source = resolve_source(&cli);
    let mut store = CatalogStore::new();
    store
        .load(source.as_ref())
        .await
        .context("Failed to load course catalog")?;

    match cli.command {
        Command::List { json } => course_cli::execute_list(&store, json),
        Command::Search {
            query,
            category,
            difficulty,
            json,
        } => course_cli::execute_search(&store, query, category, difficulty, json),
        Command::Show { course, json } => course_cli::execute_show(&store, &course, json),
        Command::Categories => unreachable!("handled above"),
    }
}

//! OpenAlex Lookup - Entry Point
//!
//! Command-line front end for author search and works listing.

use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use openalex_lookup::{
    OpenAlexClient,
    config::Config,
    formatters,
    models::{Author, ResponseFormat, Work, WorkSort},
};

#[derive(Parser, Debug)]
#[command(name = "openalex-lookup")]
#[command(about = "Look up authors and their works on OpenAlex")]
#[command(version)]
struct Cli {
    /// OpenAlex API base URL
    #[arg(long, env = "OPENALEX_BASE_URL")]
    base_url: Option<String>,

    /// Contact e-mail for the OpenAlex polite pool
    #[arg(long, env = "OPENALEX_EMAIL")]
    email: Option<String>,

    /// Request timeout in seconds
    #[arg(long, env = "OPENALEX_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,

    /// Output format
    #[arg(long, value_enum, default_value = "markdown")]
    format: ResponseFormat,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search authors by name
    Authors {
        /// Free-text name query
        query: String,

        /// Number of results (1-200)
        #[arg(long, default_value_t = 5)]
        per_page: u32,
    },

    /// List an author's works
    Works {
        /// OpenAlex author id (full URL or short form)
        author_id: String,

        /// Number of results (1-200)
        #[arg(long, default_value_t = 25)]
        per_page: u32,

        /// Sort order
        #[arg(long, value_enum, default_value = "cited-by-count")]
        sort: WorkSort,
    },

    /// Fetch a single author profile
    Author {
        /// OpenAlex author id (full URL or short form)
        author_id: String,
    },

    /// Search for an author, then list the top match's works
    Demo {
        /// Free-text name query
        #[arg(default_value = "Yann LeCun")]
        query: String,
    },
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr)).init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr))
            .init();
    }
}

fn render_authors(authors: &[Author], format: ResponseFormat) -> anyhow::Result<String> {
    if format.is_json() {
        let values: Vec<_> = authors.iter().map(formatters::compact_author).collect();
        Ok(serde_json::to_string_pretty(&values)?)
    } else {
        Ok(formatters::format_authors_markdown(authors))
    }
}

fn render_works(works: &[Work], format: ResponseFormat) -> anyhow::Result<String> {
    if format.is_json() {
        let values: Vec<_> = works.iter().map(formatters::compact_work).collect();
        Ok(serde_json::to_string_pretty(&values)?)
    } else {
        Ok(formatters::format_works_markdown(works))
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    let mut config = Config::from_env()?;
    if let Some(email) = cli.email.filter(|e| !e.trim().is_empty()) {
        config.email = Some(email);
    }
    if let Some(base_url) = cli.base_url {
        config = config.with_base_url(base_url);
    }
    if let Some(secs) = cli.timeout_secs {
        config = config.with_timeout(Duration::from_secs(secs));
    }

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        base_url = %config.base_url,
        "Starting OpenAlex lookup"
    );

    let client = OpenAlexClient::new(config)?;

    let output = match cli.command {
        Command::Authors { query, per_page } => {
            let authors = client.search_authors(&query, per_page).await?;
            render_authors(&authors, cli.format)?
        }
        Command::Works { author_id, per_page, sort } => {
            let works = client.get_author_works_sorted(&author_id, per_page, sort).await?;
            render_works(&works, cli.format)?
        }
        Command::Author { author_id } => match client.get_author(&author_id).await? {
            Some(author) if cli.format.is_json() => {
                serde_json::to_string_pretty(&formatters::compact_author(&author))?
            }
            Some(author) => formatters::format_author_markdown(&author),
            None => anyhow::bail!("author {author_id} not found"),
        },
        Command::Demo { query } => {
            let authors = client.search_authors(&query, 3).await?;
            let mut output = render_authors(&authors, cli.format)?;
            if let Some(top) = authors.first() {
                tracing::info!(author_id = %top.id, "Listing works for top match");
                let works = client.get_author_works(&top.id, 5).await?;
                output.push('\n');
                output.push_str(&render_works(&works, cli.format)?);
            }
            output
        }
    };

    println!("{output}");
    Ok(())
}

use crate::infra::fetch_catalog;
use crate::report::{pretty_json, prompt_page_lines, quality_report_lines};
use crate::server;
use clap::{Args, Parser, Subcommand};
use prompt_atlas::catalog::{CatalogError, ConfiguredSource, FilePromptSource, PromptQuery};
use prompt_atlas::config::AppConfig;
use prompt_atlas::error::AppError;
use prompt_atlas::quality::router::ScoreResponse;
use prompt_atlas::quality::{advise, PromptScorer};
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Prompt Atlas",
    about = "Browse the prompt catalog and score prompt quality",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score a prompt and print the report with improvement advice
    Score(ScoreArgs),
    /// Search the prompt catalog
    Search(SearchArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Prompt text; read from stdin when neither TEXT nor --file is given
    pub(crate) text: Option<String>,
    /// Read the prompt from a file
    #[arg(long, conflicts_with = "text")]
    pub(crate) file: Option<PathBuf>,
    /// Print the JSON payload served by the HTTP API
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct SearchArgs {
    /// Case-insensitive term matched against role names and prompt text
    #[arg(long)]
    pub(crate) term: Option<String>,
    /// Restrict results to roles containing this name ("all" disables)
    #[arg(long)]
    pub(crate) role: Option<String>,
    /// 1-based page number
    #[arg(long, default_value_t = 1)]
    pub(crate) page: usize,
    /// Read the catalog from a local CSV instead of the configured source
    #[arg(long)]
    pub(crate) csv: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Score(args) => run_score(args),
        Command::Search(args) => run_search(args).await,
    }
}

fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let text = match (args.text, args.file) {
        (Some(text), _) => text,
        (None, Some(path)) => std::fs::read_to_string(path)?,
        (None, None) => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let report = PromptScorer::default().score(&text);
    let advice = advise(&report);

    if args.json {
        println!("{}", pretty_json(&ScoreResponse { report, advice })?);
    } else {
        for line in quality_report_lines(&report, &advice) {
            println!("{line}");
        }
    }

    Ok(())
}

async fn run_search(args: SearchArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let catalog = match args.csv {
        Some(path) => fetch_catalog(&FilePromptSource::new(path)).await?,
        None => {
            let source =
                ConfiguredSource::from_config(&config.catalog).map_err(CatalogError::from)?;
            fetch_catalog(&source).await?
        }
    };

    let query = PromptQuery {
        search: args.term,
        role: args.role,
        page: Some(args.page),
    };
    for line in prompt_page_lines(&catalog.search(&query, config.catalog.page_size)) {
        println!("{line}");
    }

    Ok(())
}

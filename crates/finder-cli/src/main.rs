#![forbid(unsafe_code)]

//! Finder CLI
//!
//! Searches the company directory by city, either once or from an
//! interactive prompt.

use std::io::{IsTerminal, Write};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use finder_cli::cli::{Args, Command};
use finder_cli::repl::{self, ReplOptions};
use finder_cli::{config_handlers, render, FinderConfig};
use finder_client::HttpSearchService;
use finder_core::{SearchController, SearchSession};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    match args.command.unwrap_or(Command::Interactive) {
        Command::Config { action } => {
            let mut stdout = std::io::stdout();
            config_handlers::handle_config_command(
                args.config.as_deref(),
                args.endpoint,
                action,
                &mut stdout,
            )?;
        }
        Command::Search { city, page, json } => {
            let mut session = build_session(args.config.as_deref(), args.endpoint)?;
            search_once(&mut session, &city, page, json).await?;
        }
        Command::Interactive => {
            let mut session = build_session(args.config.as_deref(), args.endpoint)?;
            interactive(&mut session).await?;
        }
    }

    Ok(())
}

fn build_session(config_path: Option<&str>, endpoint: Option<String>) -> Result<SearchSession> {
    let config = FinderConfig::load(config_path)
        .context("Failed to load configuration")?
        .with_endpoint_override(endpoint);
    config.validate()?;

    let service = HttpSearchService::new(&config.service)
        .with_context(|| format!("Invalid search endpoint '{}'", config.service.endpoint))?;
    tracing::debug!(endpoint = %service.endpoint(), "Search service ready");

    let controller = SearchController::with_page_size(config.search.page_size);
    Ok(SearchSession::with_controller(Arc::new(service), controller))
}

async fn interactive(session: &mut SearchSession) -> Result<()> {
    let is_terminal = std::io::stdin().is_terminal();
    if is_terminal {
        println!("Finder: search companies by city. Type 'help' for commands.");
    }
    let options = ReplOptions {
        wait_for_results: !is_terminal,
        show_prompt: is_terminal,
    };
    let input = tokio::io::BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    repl::run(session, input, &mut stdout, options).await?;
    Ok(())
}

async fn search_once(session: &mut SearchSession, city: &str, page: u32, json: bool) -> Result<()> {
    if !session.submit(city) {
        anyhow::bail!("City must not be blank");
    }
    session.settle().await;

    if page > 1 && session.go_to_page(page)? {
        session.settle().await;
    }

    let mut stdout = std::io::stdout();
    if json {
        serde_json::to_writer_pretty(&mut stdout, session.state())?;
        writeln!(stdout)?;
    } else {
        write!(stdout, "{}", render::render_state(session.controller()))?;
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "info,finder=debug"
    } else {
        "warn,finder=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

//! marquee CLI
//!
//! Interactive terminal client for a movie catalog's live search.
//! Runs the TUI by default; `search` queries the endpoint once.

use clap::{Parser, Subcommand};
use console::style;
use indicatif::ProgressBar;
use marquee::{ClientConfig, SuggestClient};
use std::time::Duration;
use url::Url;

/// marquee - terminal search client for a movie catalog
///
/// Queries the catalog's autocomplete endpoint as you type and opens
/// matches in your browser.
#[derive(Parser)]
#[command(name = "marquee")]
#[command(author = "Marquee Contributors")]
#[command(version)]
#[command(about = "Terminal search client with live suggestions", long_about = None)]
struct Cli {
    /// Base URL of the catalog server
    #[arg(long, default_value = marquee::DEFAULT_SERVER)]
    server: Url,

    /// Quiet period in milliseconds before a keystroke becomes a request
    #[arg(long, default_value_t = marquee::DEFAULT_DEBOUNCE_MS)]
    debounce_ms: u64,

    /// Minimum query length that triggers a request
    #[arg(long, default_value_t = marquee::DEFAULT_MIN_QUERY_LEN)]
    min_chars: usize,

    /// Bound in seconds on a single suggestion request
    #[arg(long, default_value_t = marquee::DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Query the autocomplete endpoint once and print the matches
    Search {
        /// Search text (use -- before text if it starts with -)
        #[arg(allow_hyphen_values = true)]
        query: String,

        /// Maximum results to print
        #[arg(short, long, default_value = "10")]
        max: usize,
    },
}

fn main() {
    // Initialize logging
    marquee::logging::init();
    marquee::logging::info("MAIN", "marquee starting up");

    let cli = Cli::parse();

    let mut config = ClientConfig::new(cli.server);
    config.debounce = Duration::from_millis(cli.debounce_ms);
    config.min_query_len = cli.min_chars;
    config.request_timeout = Duration::from_secs(cli.timeout_secs);

    let result = match cli.command {
        Some(Commands::Search { query, max }) => cmd_search(&config, &query, max),
        None => marquee::tui::run(config),
    };

    if let Err(e) = result {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }
}

/// One-shot search command implementation
fn cmd_search(config: &ClientConfig, query: &str, max: usize) -> marquee::Result<()> {
    let client = SuggestClient::new(&config.server, config.request_timeout)?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_message(format!("Searching for '{query}'..."));
    spinner.enable_steady_tick(Duration::from_millis(80));

    let result = client.fetch_suggestions(query);
    spinner.finish_and_clear();
    let suggestions = result?;

    if suggestions.is_empty() {
        println!("No matches for '{}'.", style(query).yellow());
        return Ok(());
    }

    println!(
        "Found {} match{} for '{}':",
        style(suggestions.len()).green(),
        if suggestions.len() == 1 { "" } else { "es" },
        style(query).yellow()
    );
    println!();

    for (i, suggestion) in suggestions.iter().take(max).enumerate() {
        let link = config
            .server
            .join(&suggestion.url)
            .map(|u| u.to_string())
            .unwrap_or_else(|_| suggestion.url.clone());

        println!(
            "  {} \u{1F3AC} {}",
            style(format!("{:3}.", i + 1)).dim(),
            style(&suggestion.title).cyan()
        );
        println!("      {}", style(link).dim());
    }

    if suggestions.len() > max {
        println!();
        println!("  ... and {} more", suggestions.len() - max);
    }

    Ok(())
}

//! Command-line interface
//!
//! Argument parsing lives in [`args`], terminal rendering in [`output`];
//! this module wires the subcommands to the search pipeline.

pub mod args;
pub mod output;

pub use args::{Cli, Commands, SearchArgs, ServeArgs, ShowArgs};

use crate::config::Settings;
use crate::network::HttpClient;
use crate::registry::HuggingFaceHub;
use crate::search::{Search, SearchRequest};
use crate::thermal;
use crate::web::{create_router, AppState};
use anyhow::Result;
use colored::Colorize;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;
use url::Url;

/// Base URL for model pages
const HUB_PAGE_URL: &str = "https://huggingface.co/";

/// Run a parsed command
pub async fn run(command: Commands, settings: &Settings) -> Result<()> {
    match command {
        Commands::Search(args) => search(args, settings).await,
        Commands::Show(args) => show(args, settings).await,
        Commands::About => {
            about();
            Ok(())
        }
        Commands::Serve(args) => serve(args, settings).await,
    }
}

fn build_search(settings: &Settings) -> Result<Search> {
    let client = HttpClient::with_settings(&settings.outgoing)?;
    let hub = HuggingFaceHub::with_settings(client, &settings.hub);
    Ok(Search::new(Arc::new(hub)).with_lookup_limit(settings.search.lookup_limit))
}

/// Build the search request, holding `--limit` to the range the API accepts
fn search_request(args: &SearchArgs, settings: &Settings) -> Result<SearchRequest> {
    let max_limit = settings.search.max_limit;
    if args.limit == 0 || args.limit > max_limit {
        anyhow::bail!("--limit must be between 1 and {}", max_limit);
    }

    let mut request = SearchRequest::new(args.query.clone())
        .limit(args.limit)
        .cost_aware(!args.no_thermal);
    if let Some(task) = &args.model_type {
        request = request.task(task.clone());
    }
    Ok(request)
}

async fn search(args: SearchArgs, settings: &Settings) -> Result<()> {
    let request = search_request(&args, settings)?;

    let results = build_search(settings)?.execute(&request).await;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    println!("\n🔍 Searching for: {}\n", args.query.bold().cyan());

    if results.is_empty() {
        println!("{}", "No models found matching your search.".red());
        return Ok(());
    }

    print!("{}", output::render_table(&results));

    if request.cost_aware {
        println!(
            "\n💡 {}",
            "Results sorted by thermal efficiency (🟢 Low → 🔴 High)".dimmed()
        );
    }

    Ok(())
}

async fn show(args: ShowArgs, settings: &Settings) -> Result<()> {
    let record = build_search(settings)?
        .find_model(&args.model_id)
        .await
        .ok_or_else(|| anyhow::anyhow!("Model {} not found", args.model_id))?;

    let page = Url::parse(HUB_PAGE_URL)?.join(&record.model_id)?;
    print!("{}", output::render_details(&record, page.as_str()));

    if args.explain {
        println!("\n{}", "Score breakdown".bold());
        print!(
            "{}",
            output::render_explanation(&thermal::explain(&record.model_id, record.tags.as_slice()))
        );
    }

    Ok(())
}

fn about() {
    println!(
        r#"
{} 🔥

A thermal-aware model search tool for Hugging Face Hub.

{}
• Search models with thermal cost awareness
• Sort results by computational efficiency
• Filter by model type/task
• JSON API via `thermal-scout serve`

{}
🟢 Low    - Small, efficient models (<1B params)
🟡 Medium - Moderate size models (1-3B params)
🔴 High   - Large models requiring significant compute (3B+ params)

Version {}
"#,
        "Thermal Scout".bold().cyan(),
        "Features:".green(),
        "Thermal Cost Indicators:".yellow(),
        crate::VERSION
    );
}

async fn serve(args: ServeArgs, settings: &Settings) -> Result<()> {
    let mut settings = settings.clone();
    if let Some(port) = args.port {
        settings.server.port = port;
    }
    if let Some(bind) = args.bind {
        settings.server.bind_address = bind;
    }

    let client = HttpClient::with_settings(&settings.outgoing)?;
    info!("HTTP client initialized");

    let addr = SocketAddr::new(settings.server.bind_address.parse()?, settings.server.port);

    let state = AppState::new(settings, client);
    let app = create_router(state);

    info!("Starting server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

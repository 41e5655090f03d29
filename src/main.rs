use anyhow::Context;
use clap::Parser;
use docindex::cli::{Cli, Commands, OutputFormat};
use docindex::format::{DetailLevel, render_entries, render_matches, render_report, render_stats};
use docindex::query::{EntryFilter, find, suggest};
use docindex::{IndexServer, IndexStore, SearchIndex, validate};
use rmcp::{ServiceExt, transport::stdio};
use std::path::Path;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    docindex::tracing::init();

    let cli = Cli::parse();
    let command = cli.command.unwrap_or_else(|| Commands::Serve {
        index: std::env::var("DOCINDEX_PATH").ok(),
    });
    match command {
        Commands::Serve { index } => serve(index).await,
        Commands::Validate { path } => {
            let index = load(&path).await?;
            let report = validate(&index);
            print!("{}", render_report(&report));
            report.into_result()?;
            Ok(())
        }
        Commands::List {
            path,
            category,
            page,
        } => {
            let index = load(&path).await?;
            let mut filter = EntryFilter::new();
            if let Some(category) = category {
                filter = filter.category(category);
            }
            if let Some(page) = page {
                filter = filter.page(page);
            }
            print!("{}", render_entries(filter.apply(&index), DetailLevel::Low));
            Ok(())
        }
        Commands::Find { path, query, limit } => {
            let index = load(&path).await?;
            let matches = find(&index, &query, limit.max(1));
            if matches.is_empty() {
                println!("No entries found for '{}'.", query);
                for (title, _) in suggest(&index, &query, 5) {
                    println!("  did you mean `{}`?", title);
                }
            } else {
                print!("{}", render_matches(&matches, &query, DetailLevel::Medium));
            }
            Ok(())
        }
        Commands::Stats { path } => {
            let index = load(&path).await?;
            print!("{}", render_stats(&index.stats()));
            Ok(())
        }
        Commands::Convert { path, to, output } => {
            let index = load(&path).await?;
            let rendered = match to {
                OutputFormat::Js => index.to_js()?,
                OutputFormat::Json => index.to_json_pretty()?,
            };
            match output {
                Some(output) => tokio::fs::write(&output, rendered)
                    .await
                    .with_context(|| format!("Failed to write {}", output.display()))?,
                None => print!("{}", rendered),
            }
            Ok(())
        }
    }
}

async fn load(path: &Path) -> anyhow::Result<SearchIndex> {
    SearchIndex::load(path)
        .await
        .with_context(|| format!("Failed to load {}", path.display()))
}

async fn serve(index: Option<String>) -> anyhow::Result<()> {
    tracing::info!("Starting docindex MCP server");

    let store = Arc::new(IndexStore::new());
    if let Some(path) = index {
        // A bad startup index is reported but does not prevent serving.
        match store.open(&path).await {
            Ok((path, index)) => {
                tracing::info!("Opened {} ({} entries)", path.display(), index.len());
            }
            Err(e) => tracing::warn!("Failed to open startup index {}: {:#}", path, e),
        }
    }

    let server = IndexServer::new(store);
    let service = server.serve(stdio()).await.inspect_err(|e| {
        tracing::error!("Error serving MCP server: {:?}", e);
    })?;

    service.waiting().await?;

    Ok(())
}

use std::sync::Arc;

use anyhow::Context;
use colored::Colorize;

use pairdiff_codec::encode_payload;
use pairdiff_diff::{compare, DiffResponse, DiffStatus};
use pairdiff_server::{DiffServer, ServerConfig};
use pairdiff_store::{InMemoryPairStore, PairStore};

use crate::cli::*;

pub async fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => cmd_serve(args).await,
        Command::Encode(args) => cmd_encode(args),
        Command::Diff(args) => cmd_diff(args, cli.format),
    }
}

async fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let config = resolve_config(&args)?;
    let store: Arc<dyn PairStore> = Arc::new(InMemoryPairStore::with_shards(config.shards));

    println!(
        "{} pairdiff on {} ({} shards)",
        "✓".green().bold(),
        config.bind_addr.to_string().bold(),
        config.shards
    );
    DiffServer::new(config, store)
        .serve()
        .await
        .context("server stopped with an error")
}

/// Config file first (or defaults), then command-line overrides.
fn resolve_config(args: &ServeArgs) -> anyhow::Result<ServerConfig> {
    let mut config = match &args.config {
        Some(path) => ServerConfig::from_toml_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }
    if let Some(shards) = args.shards {
        config.shards = shards;
    }
    tracing::debug!(?config, "resolved server config");
    Ok(config)
}

fn cmd_encode(args: EncodeArgs) -> anyhow::Result<()> {
    let body = encode_payload(&args.text);
    if args.quoted {
        println!("\"{body}\"");
    } else {
        println!("{body}");
    }
    Ok(())
}

fn cmd_diff(args: DiffArgs, format: OutputFormat) -> anyhow::Result<()> {
    let response = compare(&args.left, &args.right);
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&response)?),
        OutputFormat::Text => print_diff(&response),
    }
    Ok(())
}

fn print_diff(response: &DiffResponse) {
    match response.status {
        DiffStatus::Equal => println!("{} {}", "✓".green().bold(), response.message),
        DiffStatus::SizeMismatch => {
            println!("{} {}", "✗".red().bold(), response.message);
            println!(
                "  left: {} chars, right: {} chars",
                response.left_size.unwrap_or_default().to_string().yellow(),
                response.right_size.unwrap_or_default().to_string().yellow()
            );
        }
        DiffStatus::ContentMismatch => {
            println!("{} {}", "✗".red().bold(), response.message);
            for segment in response.segments() {
                println!(
                    "  offset {} length {}",
                    segment.offset_left.to_string().cyan(),
                    segment.length_left.to_string().cyan()
                );
            }
        }
    }
}

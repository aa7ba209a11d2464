use anyhow::Context;
use clap::Parser;
use gene_trees_search::api::SearchAdapter;
use gene_trees_search::config::ServiceConfig;
use gene_trees_search::store::InMemoryStore;
use serde_json::json;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Run one gene-trees search against a JSON-file-backed collection
#[derive(Parser, Debug)]
#[command(name = "gene-trees-search", version, about)]
struct Args {
    /// Gene identifier to search for
    #[arg(long)]
    gene: Option<String>,

    /// Cluster identifier to search for
    #[arg(long)]
    cluster: Option<u64>,

    /// Provision supporting indexes before searching
    #[arg(long)]
    create_indexes: bool,

    /// JSON file holding an array of gene-tree records
    #[arg(long, env = "GENE_TREES_DATA")]
    data: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gene_trees_search=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let config = ServiceConfig::load().unwrap_or_else(|e| {
        tracing::warn!("failed to load configuration ({e}), using defaults");
        ServiceConfig::default()
    });

    tracing::info!(
        database = %config.database,
        collection = %config.collection,
        "starting gene-trees search v{}",
        env!("CARGO_PKG_VERSION")
    );

    let store = InMemoryStore::from_json_file(&args.data)
        .await
        .with_context(|| format!("failed to load records from {}", args.data.display()))?;
    tracing::info!(records = store.len(), "collection loaded");

    let adapter = SearchAdapter::builder()
        .config(config)
        .store(Arc::new(store))
        .build()?;

    let params = json!({
        "Gene": args.gene,
        "Cluster": args.cluster,
        "Generate indexes": args.create_indexes,
    });

    let response = adapter.run(&params).await?;

    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}

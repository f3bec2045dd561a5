use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::{CommandFactory, Parser};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use trailfetch_cli::batch;
use trailfetch_cli::hook::{self, HookAction};
use trailfetch_cli::pipeline::Pipeline;
use trailfetch_core::Config;
use trailfetch_fetcher::{FetcherConfig, YtDlpFetcher};
use trailfetch_metadata::TmdbClient;
use trailfetch_search::YoutubeClient;

/// Download a promotional trailer into every movie/series folder of a
/// media library, or for a single title when run as a Radarr/Sonarr
/// custom-script hook.
#[derive(Parser)]
#[command(name = "trailfetch", version)]
struct Args {
    /// Library root folder to scan for missing trailers
    library_root: Option<PathBuf>,

    /// Path to the TOML config file
    #[arg(long, default_value = "trailfetch.toml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let env_vars: HashMap<String, String> = std::env::vars().collect();

    // Usage comes before config validation: a bare invocation should never
    // fail over a missing config file.
    if args.library_root.is_none() && !hook::is_hook_invocation(&env_vars) {
        Args::command().print_help()?;
        return Ok(());
    }

    let config = Config::load(&args.config)
        .with_context(|| format!("failed to load config from {}", args.config.display()))?;

    let default_filter = if config.log.verbose { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()),
        )
        .init();

    let youtube_key = config.auth.youtube_api_key.clone().unwrap_or_default();
    if youtube_key.is_empty() {
        warn!("no YouTube API key configured; trailer searches will fail");
    }

    let catalog = TmdbClient::new(config.auth.tmdb_api_key.clone());
    let search = YoutubeClient::new(youtube_key.clone());
    let fetcher = YtDlpFetcher::new(FetcherConfig::default());
    let pipeline = Pipeline::new(&config, &catalog, &search, &fetcher);

    // Hook invocations take precedence over CLI arguments.
    if let Some(action) = hook::hook_action(&env_vars) {
        info!("triggered from a media-manager hook");
        match action {
            HookAction::Validate => {
                if youtube_key.is_empty() {
                    bail!("a YouTube API key must be configured for trailer search");
                }
                info!("test successful");
            }
            HookAction::Resolve(record) => {
                let count = pipeline.resolve(&record).await?;
                info!(title = %record.title, count, "hook resolution finished");
            }
            HookAction::Skip => {}
        }
        return Ok(());
    }

    let root = args
        .library_root
        .expect("presence checked before config load");

    if !root.exists() {
        bail!("library root {} does not exist", root.display());
    }

    let count = batch::run_library(&root, &pipeline).await?;
    println!("Successfully downloaded {count} new trailers.");
    Ok(())
}

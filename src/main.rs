use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use color_eyre::Result;
use color_eyre::eyre::WrapErr;
use tracing_subscriber::EnvFilter;

use healthmon::config::{self, load_config, load_config_from_path};
use healthmon::system::collector::Collector;
use healthmon::system::sampler::{self, Sampler};
use healthmon::system::store::SnapshotStore;

#[derive(Parser)]
#[command(
    name = "healthmon",
    about = "Periodic host health sampler with a read-only status endpoint"
)]
struct Cli {
    /// Path to config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Free-memory alert threshold in MB
    #[arg(long)]
    threshold_mb: Option<u64>,

    /// Seconds between samples
    #[arg(long)]
    interval_secs: Option<u64>,

    /// Listen address for the status endpoint
    #[arg(long)]
    listen: Option<String>,
}

// The probe and report paths are cheap synchronous work, so the sampler
// and the axum handlers can share one thread. Revisit the runtime flavor
// if the probe ever grows a blocking backend.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = load_config_for_cli(&cli);

    let addr: SocketAddr = config
        .server
        .listen
        .parse()
        .wrap_err_with(|| format!("invalid listen address `{}`", config.server.listen))?;
    let interval = config.sampler.interval()?;

    let store = SnapshotStore::new();
    let (_server_task, _addr) = healthmon::server::bind_status_server(addr, store.clone()).await?;

    let sampler = Sampler::new(Collector::new(), store, config.sampler.threshold_mb);
    let handle = sampler::spawn(sampler, interval);

    tracing::info!(
        threshold_mb = config.sampler.threshold_mb,
        interval_secs = config.sampler.interval_secs,
        "health sampler started"
    );

    tokio::signal::ctrl_c().await?;

    tracing::info!("shutting down health sampler");
    handle.stop().await;

    Ok(())
}

fn load_config_for_cli(cli: &Cli) -> config::Config {
    let mut config = match &cli.config {
        Some(path) => load_config_from_path(path),
        None => load_config(),
    };

    if let Some(threshold) = cli.threshold_mb {
        config.sampler.threshold_mb = threshold;
    }
    if let Some(interval) = cli.interval_secs {
        config.sampler.interval_secs = interval;
    }
    if let Some(ref listen) = cli.listen {
        config.server.listen = listen.clone();
    }

    config
}

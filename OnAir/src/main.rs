use onairsync::{Reconciler, SyncConfig};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Configuration errors are fatal: nothing runs until every variable
    // is present.
    let config = match SyncConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    info!(
        "OnAir schedule sync starting (publisher: {}, mount: {})",
        config.schedule_endpoint, config.mount
    );

    let reconciler = Reconciler::new(&config)?;

    tokio::select! {
        result = reconciler.run() => result,
        _ = tokio::signal::ctrl_c() => {
            info!("Schedule receiver shutting down...");
            Ok(())
        }
    }
}

use anyhow::Result;
use client_core::{Viewer, ViewerConfig, ViewerState};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = ViewerConfig::from_env()?;
    let mut viewer = Viewer::from_config(&config);
    tracing::debug!(api_url = config.base_url(), "fetching movies");

    print!("{}", viewer.view());
    let settled = viewer.mount().await;
    let failed = matches!(settled, ViewerState::Failed(_));
    println!();
    print!("{}", viewer.view());

    if failed {
        std::process::exit(1);
    }
    Ok(())
}

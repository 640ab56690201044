//! Host entry point: boots the asset map and runs the Faster Mining plugin.
use anyhow::Result;
use mining_host::{HostConfig, run_session};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = HostConfig::from_env()?;
    let report = run_session(&config)?;

    tracing::info!(
        multiplier = report.multiplier,
        tools_modified = report.tools_modified,
        specs_modified = report.specs_modified,
        "Session finished"
    );

    Ok(())
}

use anyhow::Result;
use tickup::commands::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    // Route messages through tracing when debug output is requested.
    if std::env::var("TICKUP_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
            .init();
    }

    Cli::menu().await
}

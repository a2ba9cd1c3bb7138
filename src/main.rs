use tracing::info;

#[tokio::main]
async fn main() -> miette::Result<()> {
    // Initialize logging
    meety::startup::init_logging()?;

    info!("Starting Meety");

    // Load configuration
    let config = meety::startup::load_config()?;

    // Run the interactive client
    meety::startup::run_app(config).await
}

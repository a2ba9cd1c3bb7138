use crate::app::App;
use crate::config::Config;
use crate::error::Error;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Initialize logging with environment-based configuration
pub fn init_logging() -> miette::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| Error::Other(format!("Failed to set up logging: {}", e)))?;

    Ok(())
}

/// Load and validate the application config
pub fn load_config() -> miette::Result<Config> {
    match Config::load() {
        Ok(config) => Ok(config),
        Err(e) => {
            error!("Failed to load configuration: {:?}", e);
            Err(e.into())
        }
    }
}

/// Construct the clients and run the interactive loop.
///
/// All clients are built here, before the first render; nothing waits for
/// a handle to show up at runtime.
pub async fn run_app(config: Config) -> miette::Result<()> {
    let mut app = App::new(config);
    info!("Clients initialized, starting UI");
    app.run().await.map_err(Into::into)
}

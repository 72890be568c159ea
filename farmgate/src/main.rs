use anyhow::Result;

use farmgate::App;
use farmgate_auth::Settings;

#[tokio::main]
async fn main() -> Result<()> {
    let log_path = farmgate::logging::init_logging()?;

    let settings = Settings::new().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        eprintln!("\nCreate a config.toml with, for example:");
        eprintln!("\nserver_url = \"http://localhost:8000\"");
        e
    })?;

    let authenticator = farmgate_auth::init_session(&settings).map_err(|e| {
        eprintln!("Failed to initialize session storage: {}", e);
        e
    })?;

    tracing::info!(log = %log_path.display(), server = %settings.server_url, "farmgate starting");

    App::new(authenticator).run().await?;

    Ok(())
}

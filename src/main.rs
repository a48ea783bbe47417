use dotenvy::dotenv;
use resident_directory::{
    config::{database, seed},
    core::provision,
    errors::Result,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; variables may also be set externally
    dotenv().ok();

    // 3. Load the seed set (built-in demo set when no seed.toml is present)
    let seed_config = seed::load_default_seed_config()
        .inspect_err(|e| error!("Failed to load seed configuration: {e}"))?;

    // 4. Connect to the database
    let db = database::create_connection()
        .await
        .inspect(|_| info!("Database connection established."))
        .inspect_err(|e| error!("Failed to connect to database: {e}"))?;

    // 5. Provision schema and seed data in one transaction
    let report = provision::run(&db, &seed_config)
        .await
        .inspect_err(|e| error!("Provisioning failed, nothing was committed: {e}"))?;

    info!(
        version = %report.version,
        newly_applied = report.newly_applied,
        "Provisioning finished"
    );
    Ok(())
}

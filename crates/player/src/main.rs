//! Lorevault Player - composition root binary.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lorevault_player::config::{load_dotenv_from_repo_root, PlayerConfig};
use lorevault_player::WikiContext;

fn main() -> anyhow::Result<()> {
    load_dotenv_from_repo_root();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lorevault_player=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Lorevault Player");

    let config = PlayerConfig::from_env();
    tracing::debug!(
        storage = ?config.storage,
        path = ?config.storage_path,
        "Loaded configuration"
    );

    let context = WikiContext::from_config(&config)?;

    let coverage = context.descriptors().coverage();
    tracing::info!(
        themes = context.themes().len(),
        descriptions_authored = coverage.authored,
        descriptions_total = coverage.total,
        lore_unlocked = context.unlock_store().is_unlocked(),
        "Wiki content loaded"
    );

    if context.unlock_store().is_persistence_degraded() {
        tracing::warn!(
            "Persistent storage unavailable; unlock state will last for this session only"
        );
    }

    Ok(())
}

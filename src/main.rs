// src/main.rs

use mostrador::{config, logging, ui};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    config::initialize_config()?;
    let cfg = config::get_config();

    let _logger = logging::init(&cfg.log_level)?;
    log::info!("mostrador {} starting", env!("CARGO_PKG_VERSION"));

    ui::run_ui().await?;

    log::info!("mostrador shutting down");
    Ok(())
}

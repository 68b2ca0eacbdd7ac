// src/main.rs

use color_eyre::eyre::Result;

mod app;
mod config;
mod content;
mod core;
mod logging;
mod web;

use app::AppState;
use config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let config = Config::parse_args();
    logging::initialize_logging(config.debug)?;

    let state = AppState::from_config(&config)?;
    web::server::serve(config.socket_addr(), state).await
}

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use lingovibe_config::Config;
use lingovibe_types::AppEvent;
use tokio::signal;

use crate::cli::{Cli, Command};
use crate::controller::AppController;
use crate::state::AppState;

mod cli;
mod controller;
mod events;
mod io;
mod logging;
mod profile;
mod state;
mod ui;

#[cfg(test)]
mod tests;

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => profile::load_config_file(path)?,
        None => {
            profile::init_user_config()?;
            profile::load_user_profile(cli.profile.as_deref().unwrap_or("main"))?
        }
    };

    // Environment wins over files
    config.apply_env();
    config
        .languages
        .validate()
        .map_err(anyhow::Error::msg)
        .context("Invalid language settings")?;

    tracing::debug!("Loaded config: {:?}", config);
    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    logging::init_tracing(cli.log_json);

    let config = load_config(&cli)?;
    let command = cli.command.unwrap_or(Command::Shell);
    let plan = command.plan(&config.languages)?;

    let state = Arc::new(AppState::new(config)?);
    let controller = AppController::new(state);
    let mut tasks = controller.spawn_tasks(plan.interactive);

    let events = controller.events();
    for event in plan.events {
        events.send(event).await?;
    }
    if !plan.interactive {
        events.send(AppEvent::Shutdown).await?;
    }

    loop {
        tokio::select! {
            result = signal::ctrl_c() => {
                if let Err(e) = result {
                    tracing::error!("Failed to listen for ctrl+c: {}", e);
                }
                tracing::info!("Shutdown requested");
                controller.shutdown();
            }
            joined = tasks.join_next() => match joined {
                None => break,
                Some(Ok(Ok(()))) => {}
                Some(Ok(Err(e))) => {
                    tracing::error!("Task exited with error: {e}");
                    controller.shutdown();
                }
                Some(Err(e)) => {
                    tracing::error!("Task panicked: {e}");
                    controller.shutdown();
                }
            }
        }
    }

    Ok(())
}

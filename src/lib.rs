pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod notify;
pub mod quote;
pub mod services;
pub mod validation;

use anyhow::Result;
use chrono::Local;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;

use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::quote::QuoteRequest;

pub use crate::errors::{RegistryError, ValidationError};
pub use crate::services::{GameRegistry, PlayerRegistry, Roster, SettingsStore};

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_settings() -> Result<()> {
    let config = AppConfig::new();
    let json = serde_json::to_string_pretty(&config.settings)?;
    println!("{json}");
    Ok(())
}

pub fn handle_quote(request: &QuoteRequest) -> Result<()> {
    let today = Local::now().date_naive();
    let game = quote::build_quote(request, today)?;
    println!("{}", quote::render_quote(&game));
    Ok(())
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}

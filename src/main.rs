use anyhow::Result;

use badminton_roster::cli::Command;
use badminton_roster::quote::QuoteRequest;
use badminton_roster::{handle_completions, handle_quote, handle_settings, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Settings => handle_settings(),
        Command::Quote {
            title,
            rate,
            shuttle,
            hours,
            players,
            separate,
        } => handle_quote(&QuoteRequest {
            title: title.clone(),
            court_rate: *rate,
            shuttle_price: *shuttle,
            hours: hours.clone(),
            players: *players,
            divide_equally: !separate,
        }),
        Command::Completions { shell } => handle_completions(*shell),
    }
}

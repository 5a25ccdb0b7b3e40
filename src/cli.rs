use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(name = "badminton-roster", author, version, about = "badminton roster and court cost helper")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Print the default user settings as JSON
    Settings,
    /// Work out the court cost of a session and each player's share
    Quote {
        /// Game title (defaults to the session date)
        #[arg(short, long)]
        title: Option<String>,
        /// Court rate per hour (defaults to the settings value)
        #[arg(short, long)]
        rate: Option<f64>,
        /// Shuttle price (defaults to the settings value)
        #[arg(short, long)]
        shuttle: Option<f64>,
        /// Length of each court booking in hours; repeat for multiple courts
        #[arg(long = "hours", required = true, num_args = 1..)]
        hours: Vec<f64>,
        /// Number of players sharing the court
        #[arg(short, long, default_value_t = 0)]
        players: usize,
        /// Do not split the court cost between players
        #[arg(long)]
        separate: bool,
    },
    /// Print shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

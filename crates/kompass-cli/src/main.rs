//! Terminal front-end for the Kompass typology quiz.

mod commands;
mod questions;

use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "kompass",
    about = "Kompass — a twelve-question personality typology quiz",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Take the quiz interactively
    Take,

    /// Score an answer sequence without the interactive flow
    Score {
        /// Answers in question order, e.g. AABABBAABBAB
        answers: String,

        /// Accept fewer than twelve answers and score what is present
        #[arg(short, long)]
        partial: bool,
    },

    /// List the fixed result-page surface
    Pages,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Take => commands::take::run(),
        Commands::Score { answers, partial } => commands::score::run(&answers, partial),
        Commands::Pages => commands::pages::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

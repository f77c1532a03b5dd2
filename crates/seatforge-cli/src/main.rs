use clap::{Parser, Subcommand};
use std::process;
use tracing::error;

mod cmd;
mod event;
mod reports;

#[derive(Parser, Debug)]
#[command(name = "seatforge", author, version, about = "Event seating optimizer")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Event description: {"venue": {...}, "attendees": [...]}
    #[arg(global = true, short, long, default_value = "event.json")]
    event: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the optimizer and print the seating chart
    Optimize(cmd::optimize::OptimizeArgs),
    /// Re-score an existing assignment without optimizing
    Validate(cmd::validate::ValidateArgs),
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let event = event::EventFile::load(&cli.event).unwrap_or_else(|e| {
        error!("Failed to load event file '{}': {}", cli.event, e);
        process::exit(1);
    });

    let result = match cli.command {
        Commands::Optimize(args) => cmd::optimize::run(args, &event),
        Commands::Validate(args) => cmd::validate::run(args, &event),
    };

    if let Err(e) = result {
        error!("{}", e);
        process::exit(1);
    }
}

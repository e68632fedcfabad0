//! CLI frontend for the Derelict deck-mapping tool.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "derelict",
    about = "Derelict — map a drifting ship while the panic spreads",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Board a ship and map it interactively
    Play {
        /// Ship plan file
        #[arg(short, long, default_value = "ships/hms_midgard.json")]
        plan: PathBuf,

        /// RNG seed for reproducible panic rolls
        #[arg(short, long)]
        seed: Option<u64>,

        /// Starting stress level
        #[arg(long, default_value = "0")]
        stress: i32,
    },

    /// Render the deck map once and exit
    Render {
        /// Ship plan file
        #[arg(short, long, default_value = "ships/hms_midgard.json")]
        plan: PathBuf,

        /// Room to lay the map out from (default: first declared room)
        #[arg(short, long)]
        from: Option<String>,
    },

    /// List every room with its corridors
    List {
        /// Ship plan file
        #[arg(short, long, default_value = "ships/hms_midgard.json")]
        plan: PathBuf,
    },

    /// Validate a ship plan without entering a session
    Check {
        /// Ship plan file
        #[arg(short, long, default_value = "ships/hms_midgard.json")]
        plan: PathBuf,
    },

    /// Count elapsed watch intervals on one line
    Timer {
        /// Label printed with the count
        #[arg(short, long, default_value = "Counter")]
        name: String,

        /// Minutes per interval
        #[arg(short, long, default_value = "1")]
        minutes: i64,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play { plan, seed, stress } => commands::play::run(&plan, seed, stress),
        Commands::Render { plan, from } => commands::render::run(&plan, from.as_deref()),
        Commands::List { plan } => commands::list::run(&plan),
        Commands::Check { plan } => commands::check::run(&plan),
        Commands::Timer { name, minutes } => commands::timer::run(&name, minutes),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

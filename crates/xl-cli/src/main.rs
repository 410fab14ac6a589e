//! CLI frontend for the Xiaoliu (Small Six Ren) divination engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "xl",
    about = "Xiaoliu — Small Six Ren divination from lunar month, day, and hour",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log engine internals to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Divine from a lunar month and day (hour defaults to the current two-hour period)
    Cast {
        /// Lunar month (1-12)
        month: u32,

        /// Lunar day (1-31)
        day: u32,

        /// Two-hour period (1 = Rat ... 12 = Pig)
        #[arg(long, conflicts_with = "at")]
        hour: Option<u32>,

        /// Clock time (HH:MM) to derive the two-hour period from
        #[arg(long)]
        at: Option<String>,

        /// Print the plain-text summary instead of a table
        #[arg(short, long)]
        plain: bool,

        /// Length of the lunar month (29-31); later days are rejected
        #[arg(long, default_value_t = 31, value_parser = clap::value_parser!(u32).range(29..=31))]
        max_day: u32,
    },

    /// Show the reading for one palace and its six pairings
    Palace {
        /// Palace name (e.g. "great peace", "xiaoji", 空亡)
        name: String,
    },

    /// List the six palaces with their elements and stems
    Palaces,

    /// Export a divination to a file or stdout
    Export {
        /// Lunar month (1-12)
        month: u32,

        /// Lunar day (1-31)
        day: u32,

        /// Two-hour period (1-12)
        hour: u32,

        /// Output format: json, markdown, text
        #[arg(short, long, default_value = "text")]
        format: String,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Length of the lunar month (29-31); later days are rejected
        #[arg(long, default_value_t = 31, value_parser = clap::value_parser!(u32).range(29..=31))]
        max_day: u32,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "xl_core=debug" } else { "xl_core=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Cast {
            month,
            day,
            hour,
            at,
            plain,
            max_day,
        } => commands::cast::run(month, day, hour, at.as_deref(), plain, max_day),
        Commands::Palace { name } => commands::palace::run(&name),
        Commands::Palaces => commands::palace::list(),
        Commands::Export {
            month,
            day,
            hour,
            format,
            output,
            max_day,
        } => commands::export::run(month, day, hour, &format, output.as_deref(), max_day),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;

#[derive(Debug, Subcommand, PartialEq)]
pub(crate) enum Command {
    /// List connected game controllers and their axis setup.
    List,
    /// Poll controllers and log the combined axis output.
    Run {
        /// Input tick length in milliseconds
        #[clap(short, long, default_value_t = 10)]
        interval_ms: u64,
        /// Write the current device settings back on exit
        #[clap(long)]
        save: bool,
    },
}

/// Exposes SDL game controllers through a joystick configuration layer.
#[derive(Parser)]
#[command(version, about, long_about = None)]
pub(crate) struct Cli {
    /// Turn debugging information on
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Do not start the game controller backend
    #[arg(long)]
    pub nojoy: bool,

    /// The directory containing the settings file
    #[arg(short, long)]
    pub workspace: Option<PathBuf>,

    /// The command to run
    #[clap(subcommand)]
    pub command: Command,
}

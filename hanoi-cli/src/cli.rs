//! Command-line arguments.
//!
//! Only argument names, help text and env fallbacks live here.

use clap::Parser;

/// Play Tower of Hanoi through a filesystem-shaped shell.
#[derive(Debug, Parser)]
#[command(
    name = "hanoi",
    version = env!("CARGO_PKG_VERSION"),
    about = "Tower of Hanoi as a tree of pegs (/A, /B, ...) and discs (/A/0, ...)",
    after_help = "EXAMPLES:\n\
        \x20 hanoi                          # interactive shell, 3 pegs, 3 discs\n\
        \x20 hanoi --pegs 4 --discs 5\n\
        \x20 hanoi ls /A\n\
        \x20 hanoi 'mv /A/0 /C; ls /C'\n\
        \x20 echo 'move 0 A C' | hanoi"
)]
pub struct Cli {
    /// Number of pegs (3..=25).
    #[arg(long = "pegs", env = "HANOI_PEGS", default_value_t = 3, value_name = "N")]
    pub pegs: usize,

    /// Number of discs (3..=32).
    #[arg(long = "discs", env = "HANOI_DISCS", default_value_t = 3, value_name = "N")]
    pub discs: u32,

    /// Message printed when the last peg holds every disc.
    #[arg(long = "msg", env = "HANOI_MSG", default_value = "well done", value_name = "TEXT")]
    pub msg: String,

    /// Print listings and state as JSON.
    #[arg(long = "json")]
    pub json: bool,

    /// Increase logging verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors.
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,

    /// Commands to run instead of reading stdin, separated by ';'.
    #[arg(value_name = "COMMAND", trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,
}

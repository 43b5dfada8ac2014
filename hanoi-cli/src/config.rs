//! Host configuration.
//!
//! [`AppConfig`] is built once from the parsed arguments and passed down by
//! value. The puzzle dimensions inside it are handed to the engine at
//! construction; nothing reads them from global state.

use hanoi_core::HanoiConfig;

use crate::cli::Cli;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub puzzle: HanoiConfig,
    /// Printed when a move completes the puzzle.
    pub message: String,
    pub json: bool,
}

impl AppConfig {
    pub fn from_cli(cli: &Cli) -> AppConfig {
        AppConfig {
            puzzle: HanoiConfig::new(cli.pegs, cli.discs),
            message: cli.msg.clone(),
            json: cli.json,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            puzzle: HanoiConfig::default(),
            message: "well done".to_string(),
            json: false,
        }
    }
}

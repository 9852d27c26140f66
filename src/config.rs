use std::{path::PathBuf, time::Duration};

use clap::{Parser, ValueEnum};
use tracing::Level;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    /// Bare glyphs, suitable for pipes and files
    Plain,
    /// Colored glyphs
    Color,
    /// Replay the generation cell by cell, then leave the finished maze on screen
    Animate,
}

/// Generate a perfect maze with randomized Prim's algorithm and print it
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Maze width in cells, border included
    #[arg(default_value_t = Config::DEFAULT_WIDTH)]
    pub width: u16,

    /// Maze height in cells, border included
    #[arg(default_value_t = Config::DEFAULT_HEIGHT)]
    pub height: u16,

    /// Random seed, for reproducible mazes
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output mode [default: color on a terminal, plain otherwise]
    #[arg(long, value_enum)]
    pub mode: Option<OutputMode>,

    /// Delay between cell updates when animating, in milliseconds
    #[arg(long, default_value_t = 10)]
    pub delay_ms: u64,

    /// Maximum log level
    #[arg(long, default_value_t = Level::WARN)]
    pub log_level: Level,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub width: u16,
    pub height: u16,
    pub seed: Option<u64>,
    pub mode: OutputMode,
    pub animation_delay: Duration,
    pub log_level: Level,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: Config::DEFAULT_WIDTH,
            height: Config::DEFAULT_HEIGHT,
            seed: None,
            mode: OutputMode::Plain,
            animation_delay: Duration::from_millis(10),
            log_level: Level::WARN,
            log_file: None,
        }
    }
}

impl Config {
    pub const DEFAULT_WIDTH: u16 = 20;
    pub const DEFAULT_HEIGHT: u16 = 10;

    /// Resolves parsed arguments. `stdout_is_terminal` picks the output mode
    /// when none was requested.
    pub fn from_args(args: Args, stdout_is_terminal: bool) -> Self {
        let mode = args.mode.unwrap_or(if stdout_is_terminal {
            OutputMode::Color
        } else {
            OutputMode::Plain
        });
        Self {
            width: args.width,
            height: args.height,
            seed: args.seed,
            mode,
            animation_delay: Duration::from_millis(args.delay_ms),
            log_level: args.log_level,
            log_file: args.log_file,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["primaze"]).unwrap();
        let config = Config::from_args(args, false);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_mode_follows_terminal() {
        let args = Args::try_parse_from(["primaze"]).unwrap();
        assert_eq!(Config::from_args(args, true).mode, OutputMode::Color);
    }

    #[test]
    fn test_full_arguments() {
        let args = Args::try_parse_from([
            "primaze",
            "31",
            "15",
            "--seed",
            "7",
            "--mode",
            "animate",
            "--delay-ms",
            "0",
            "--log-level",
            "debug",
            "--log-file",
            "maze.log",
        ])
        .unwrap();
        let config = Config::from_args(args, false);
        assert_eq!(config.width, 31);
        assert_eq!(config.height, 15);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.mode, OutputMode::Animate);
        assert_eq!(config.animation_delay, Duration::ZERO);
        assert_eq!(config.log_level, Level::DEBUG);
        assert_eq!(config.log_file, Some(PathBuf::from("maze.log")));
    }

    #[test]
    fn test_rejects_non_numeric_dimensions() {
        assert!(Args::try_parse_from(["primaze", "wide", "10"]).is_err());
        assert!(Args::try_parse_from(["primaze", "70000", "10"]).is_err());
    }
}

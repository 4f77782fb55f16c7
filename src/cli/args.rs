//! Command-line argument definitions
//!
//! This module defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// A small, reliable tool to list the video capture devices attached to a Windows machine
#[derive(Parser, Debug)]
#[command(name = "video_device_lister")]
#[command(author = "Vihaan Reddy M")]
#[command(version = "1.0.0")]
#[command(about = "List the video capture devices attached to this machine", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Print the device list as JSON (overrides config)
    #[arg(long)]
    pub json: bool,

    /// Print raw display names only, one per line (overrides config)
    #[arg(long)]
    pub names_only: bool,

    /// Include device paths in text output (overrides config)
    #[arg(long)]
    pub paths: bool,

    /// Log level: error, warn, info, debug, trace (overrides config)
    #[arg(short, long)]
    pub log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List attached video capture devices (the default when no command is given)
    List {
        /// Print the device list as JSON
        #[arg(long)]
        json: bool,

        /// Print raw display names only, one per line
        #[arg(long)]
        names_only: bool,

        /// Include device paths in text output
        #[arg(long)]
        paths: bool,
    },

    /// Print only the number of attached video capture devices
    Count,

    /// Open the configuration file in your default editor
    ///
    /// The config file is stored at:
    /// - Windows: %APPDATA%\video_device_lister\config.toml
    /// - Linux/macOS: ~/.config/video_device_lister/config.toml
    ///
    /// If no config file exists, a default one will be created.
    Config {
        /// Show the config file path without opening it
        #[arg(long)]
        path: bool,

        /// Reset config to defaults (creates a fresh config file)
        #[arg(long)]
        reset: bool,
    },

    /// Generate a configuration file at a specific location
    GenerateConfig {
        /// Output path for the config file (defaults to standard location)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show current configuration
    ShowConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_args_means_default_list() {
        let args = Args::try_parse_from(["video-lister"]).unwrap();
        assert!(args.command.is_none());
        assert!(!args.json);
        assert!(!args.names_only);
    }

    #[test]
    fn test_list_flags() {
        let args = Args::try_parse_from(["video-lister", "list", "--json"]).unwrap();
        match args.command {
            Some(Commands::List {
                json,
                names_only,
                paths,
            }) => {
                assert!(json);
                assert!(!names_only);
                assert!(!paths);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_overrides() {
        let args = Args::try_parse_from([
            "video-lister",
            "--names-only",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert!(args.names_only);
        assert_eq!(args.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_config_subcommand() {
        let args = Args::try_parse_from(["video-lister", "config", "--path"]).unwrap();
        match args.command {
            Some(Commands::Config { path, reset }) => {
                assert!(path);
                assert!(!reset);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}

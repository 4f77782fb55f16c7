//! Command handler implementations
//!
//! This module contains the implementation of all CLI commands.

use crate::cli::{Args, Commands};
use crate::core::config::{
    ensure_config_dir, get_config_path, init_config, open_config_in_editor, Config, OutputFormat,
};
use crate::core::error::ListingError;
use crate::device::{self, join_device_names, VideoDeviceInfo};
use anyhow::Result;
use log::info;
use std::fs;
use std::path::PathBuf;

/// Run the appropriate command based on CLI arguments
pub fn run_command(args: &Args, config: &Config) -> Result<()> {
    match &args.command {
        Some(Commands::Config { path, reset }) => {
            handle_config_command(*path, *reset)?;
        }
        Some(Commands::GenerateConfig { output }) => {
            generate_config_file(output.clone())?;
        }
        Some(Commands::ShowConfig) => {
            show_config(config)?;
        }
        Some(Commands::Count) => {
            count_devices()?;
        }
        Some(Commands::List {
            json,
            names_only,
            paths,
        }) => {
            let (format, show_paths) = effective_output(
                config,
                args.json || *json,
                args.names_only || *names_only,
                args.paths || *paths,
            );
            list_devices(format, show_paths)?;
        }
        None => {
            // No subcommand: run the listing with global flags
            let (format, show_paths) =
                effective_output(config, args.json, args.names_only, args.paths);
            list_devices(format, show_paths)?;
        }
    }

    Ok(())
}

/// Merge CLI flags with the configured output settings
fn effective_output(
    config: &Config,
    json: bool,
    names_only: bool,
    paths: bool,
) -> (OutputFormat, bool) {
    let format = if json {
        OutputFormat::Json
    } else if names_only {
        OutputFormat::Names
    } else {
        config.output.format
    };

    (format, paths || config.output.show_paths)
}

/// List attached video capture devices
pub fn list_devices(format: OutputFormat, show_paths: bool) -> Result<()> {
    info!("Scanning for video capture devices...");

    let devices = match device::list_video_devices() {
        Ok(devices) => devices,
        Err(ListingError::NoDevicesFound) => {
            info!("No video capture devices found.");
            info!("");
            info!("Make sure your camera is:");
            info!("  1. Connected (or enabled, for built-in webcams)");
            info!("  2. Not disabled in Device Manager");
            info!("  3. Using a driver that registers it with DirectShow");
            if format == OutputFormat::Json {
                println!("[]");
            }
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    print!("{}", render_devices(&devices, format, show_paths)?);
    Ok(())
}

/// Print only the number of attached devices
pub fn count_devices() -> Result<()> {
    match device::list_video_device_names() {
        Ok(names) => {
            println!("{}", names.len());
            Ok(())
        }
        Err(ListingError::NoDevicesFound) => {
            println!("0");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

/// Render the device list in the requested format
///
/// The `[n]` index in text output is the zero-based enumeration position,
/// which is the index capture applications use to open the device.
fn render_devices(
    devices: &[VideoDeviceInfo],
    format: OutputFormat,
    show_paths: bool,
) -> Result<String> {
    let rendered = match format {
        OutputFormat::Names => {
            let mut names = join_device_names(devices);
            names.push('\n');
            names
        }
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(devices)?;
            json.push('\n');
            json
        }
        OutputFormat::Text => {
            let mut out = format!("Found {} video capture device(s):\n\n", devices.len());
            for (i, device) in devices.iter().enumerate() {
                out.push_str(&format!("[{}] {}\n", i, device.name));
                if show_paths {
                    if let Some(ref path) = device.device_path {
                        out.push_str(&format!("    Path: {}\n", path));
                    }
                }
            }
            out
        }
    };

    Ok(rendered)
}

/// Handle the `config` subcommand
fn handle_config_command(path_only: bool, reset: bool) -> Result<()> {
    if path_only {
        match get_config_path() {
            Some(path) => println!("{}", path.display()),
            None => println!("Could not determine config file path"),
        }
        return Ok(());
    }

    if reset {
        let config_dir = ensure_config_dir()?;
        let config_path = config_dir.join("config.toml");
        fs::write(&config_path, Config::generate_default_config())?;
        info!("Configuration reset to defaults: {}", config_path.display());
        return Ok(());
    }

    let config_path = open_config_in_editor()?;
    info!("Opened config file: {}", config_path.display());
    Ok(())
}

/// Write a default config file to the given or standard location
fn generate_config_file(output: Option<PathBuf>) -> Result<()> {
    let config_path = match output {
        Some(path) => {
            fs::write(&path, Config::generate_default_config())?;
            path
        }
        None => init_config()?,
    };

    info!("Configuration file written to: {}", config_path.display());
    Ok(())
}

/// Print the effective configuration
fn show_config(config: &Config) -> Result<()> {
    let rendered = toml::to_string_pretty(config)?;
    println!("{}", rendered.trim_end());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_devices() -> Vec<VideoDeviceInfo> {
        vec![
            VideoDeviceInfo::new("Integrated Webcam"),
            VideoDeviceInfo::with_path("USB2.0 Camera", r"\\?\usb#vid_1908&pid_2311"),
        ]
    }

    #[test]
    fn test_render_names_only() {
        let out = render_devices(&sample_devices(), OutputFormat::Names, false).unwrap();
        assert_eq!(out, "Integrated Webcam\nUSB2.0 Camera\n");
    }

    #[test]
    fn test_render_text_uses_zero_based_indices() {
        let out = render_devices(&sample_devices(), OutputFormat::Text, false).unwrap();
        assert!(out.contains("Found 2 video capture device(s):"));
        assert!(out.contains("[0] Integrated Webcam"));
        assert!(out.contains("[1] USB2.0 Camera"));
        assert!(!out.contains("Path:"));
    }

    #[test]
    fn test_render_text_with_paths() {
        let out = render_devices(&sample_devices(), OutputFormat::Text, true).unwrap();
        assert!(out.contains(r"    Path: \\?\usb#vid_1908&pid_2311"));
    }

    #[test]
    fn test_render_json_round_trips() {
        let out = render_devices(&sample_devices(), OutputFormat::Json, false).unwrap();
        let parsed: Vec<VideoDeviceInfo> = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed, sample_devices());
    }

    #[test]
    fn test_effective_output_flag_precedence() {
        let mut config = Config::default();
        config.output.format = OutputFormat::Names;

        // JSON flag beats both the names-only flag and the config
        let (format, _) = effective_output(&config, true, true, false);
        assert_eq!(format, OutputFormat::Json);

        // No flags: config wins
        let (format, _) = effective_output(&config, false, false, false);
        assert_eq!(format, OutputFormat::Names);

        // Paths flag or config can enable path output
        let (_, show_paths) = effective_output(&config, false, false, true);
        assert!(show_paths);
    }
}

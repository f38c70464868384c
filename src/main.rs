//! Debugview main entry point.
//!
//! Headless driver for the debug display settings:
//! - **bevy_ecs** hosts the settings context, the frame systems and the
//!   change observers
//! - **configparser** loads the initial settings from an INI file
//!
//! # Frame Loop
//!
//! 1. Build the settings context and install it into a world
//! 2. Insert the [`DebugConfig`] resource, if a config file was loaded
//! 3. Run the debug frame schedule `--frames` times
//! 4. Print the resolved frame state and every panel's fields
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --config debugview.ini --json
//! ```

use std::path::{Path, PathBuf};

use bevy_ecs::prelude::*;
use clap::Parser;
use log::{info, warn};
use serde::Serialize;

use debugview::resources::debugconfig::{DEFAULT_CONFIG_PATH, DebugConfig};
use debugview::resources::debugframe::DebugFrameState;
use debugview::resources::debugsettings::{DebugDisplaySettings, PanelSnapshot};
use debugview::shader_constants;
use debugview::systems::debugsettings::{debug_frame_schedule, install_debug_settings};

const DEFAULT_SHADER_CONSTANTS_PATH: &str = "assets/shaders/debug_constants.wgsl";

/// Debug display settings resolver
#[derive(Parser)]
#[command(
    version,
    about = "Resolves debug display settings into per-frame pipeline decisions."
)]
struct Cli {
    /// INI file with the initial debug settings (default: ./debugview.ini if present).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Number of frame-setup ticks to run.
    #[arg(long, value_name = "N", default_value_t = 1)]
    frames: u32,

    /// Print the resolved state as JSON.
    #[arg(long)]
    json: bool,

    /// Write the settings after the last frame to an INI file.
    /// Optionally provide a path (default: the loaded config path).
    #[arg(long, value_name = "PATH")]
    save_config: Option<Option<PathBuf>>,

    /// Generate WGSL constants for the debug modes and exit.
    /// Optionally provide a path (default: assets/shaders/debug_constants.wgsl).
    #[arg(long, value_name = "PATH")]
    create_shader_constants: Option<Option<PathBuf>>,
}

#[derive(Serialize)]
struct Report<'a> {
    frame_state: &'a DebugFrameState,
    panels: Vec<PanelSnapshot>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // Early-exit: generate shader constants and quit
    if let Some(maybe_path) = cli.create_shader_constants {
        let path = maybe_path.unwrap_or_else(|| PathBuf::from(DEFAULT_SHADER_CONSTANTS_PATH));
        match shader_constants::generate_constants() {
            Ok(content) => {
                if let Err(e) = shader_constants::write_constants(&path, &content) {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
                println!("Shader constants written to {}", path.display());
            }
            Err(e) => {
                eprintln!("Error generating shader constants: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    // --------------- World setup ---------------
    let mut world = World::new();
    install_debug_settings(&mut world, DebugDisplaySettings::new());
    if let Some(config) = config.clone() {
        world.insert_resource(config);
    }

    let mut schedule = debug_frame_schedule();
    if let Err(e) = schedule.initialize(&mut world) {
        eprintln!("Error: failed to initialize schedule: {e}");
        std::process::exit(1);
    }

    // --------------- Frame loop ---------------
    for _ in 0..cli.frames {
        schedule.run(&mut world);
        world.clear_trackers();
    }

    let settings = world.non_send_resource::<DebugDisplaySettings>();
    let frame_state = world.resource::<DebugFrameState>();

    if let Some(maybe_path) = cli.save_config {
        let path = maybe_path
            .or_else(|| config.as_ref().map(|c| c.config_path.clone()))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
        if let Err(e) = DebugConfig::from_settings(settings, path).save_to_file() {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }

    if cli.json {
        let report = Report {
            frame_state,
            panels: settings.panel_snapshots(),
        };
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error serializing report: {e}");
                std::process::exit(1);
            }
        }
    } else {
        print_summary(frame_state, &settings.panel_snapshots());
    }
}

/// Load the config file named on the command line, or the default one if it
/// exists. A missing default file is not an error.
fn load_config(path: Option<&Path>) -> Result<Option<DebugConfig>, String> {
    let explicit = path.is_some();
    let path = path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), Path::to_path_buf);
    if !explicit && !path.exists() {
        info!("No debug config at {:?}, using defaults", path);
        return Ok(None);
    }

    let mut config = DebugConfig::with_path(path);
    match config.load_from_file() {
        Ok(()) => Ok(Some(config)),
        Err(e) if explicit => Err(e),
        Err(e) => {
            warn!("Ignoring debug config: {}", e);
            Ok(None)
        }
    }
}

fn print_summary(state: &DebugFrameState, panels: &[PanelSnapshot]) {
    println!("Frame {}", state.frame);
    println!("  debug settings active:   {}", state.any_settings_active);
    println!("  post-processing allowed: {}", state.post_processing_allowed);
    println!("  lighting active:         {}", state.lighting_active);
    match state.clear_color {
        Some(c) => println!(
            "  clear color:             ({:.2}, {:.2}, {:.2}, {:.2})",
            c.r, c.g, c.b, c.a
        ),
        None => println!("  clear color:             scene default"),
    }
    for panel in panels {
        println!(
            "[{}]{}",
            panel.name,
            if panel.active { " (active)" } else { "" }
        );
        for field in &panel.fields {
            println!("  {} = {}", field.name, field.view.to_config_string());
        }
    }
}

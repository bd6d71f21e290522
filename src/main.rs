//! `ysortcal` command line entry point.
//!
//! Loads a JSON scene, runs one calibration pass and prints the summary.
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- assets/level1.json --write
//! ```

use bevy_ecs::prelude::*;
use clap::Parser;
use std::path::PathBuf;

use ysortcal::resources::calibrationconfig::CalibrationConfig;
use ysortcal::scene::SceneData;
use ysortcal::systems::calibrate::calibrate;

/// Static draw-order calibration for top-down 2D scenes
#[derive(Parser)]
#[command(version)]
struct Cli {
    /// JSON scene description to calibrate.
    scene: PathBuf,

    /// INI file with calibration constants (defaults are used if it is missing).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write the calibrated sort orders back into the scene file.
    #[arg(long)]
    write: bool,

    /// Print the summary as JSON instead of a human-readable line.
    #[arg(long)]
    json: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => CalibrationConfig::with_path(path),
        None => CalibrationConfig::new(),
    };
    if let Err(e) = config.load_from_file() {
        log::warn!("{}, using defaults", e);
    }

    let mut scene = match SceneData::load_from_file(&cli.scene) {
        Ok(scene) => scene,
        Err(e) => {
            eprintln!("Error loading scene {}: {e}", cli.scene.display());
            std::process::exit(1);
        }
    };

    let mut world = World::new();
    world.insert_resource(config);
    let index = match scene.spawn_into(&mut world) {
        Ok(index) => index,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let summary = calibrate(&mut world);

    if cli.json {
        match serde_json::to_string_pretty(&summary) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
    } else {
        println!("{summary}");
    }

    if cli.write {
        scene.sync_from_world(&world, &index);
        if let Err(e) = scene.save_to_file(&cli.scene) {
            eprintln!("Error writing scene {}: {e}", cli.scene.display());
            std::process::exit(1);
        }
        println!("Scene written to {}", cli.scene.display());
    }
}

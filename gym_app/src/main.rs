//! Home gym scene demo
//!
//! Runs the scene pipeline headless: loads the texture manifest, defines
//! the materials and lights, then dispatches one frame's worth of draw
//! state through an inspectable uniform store. Useful for exercising the
//! full prepare/render/teardown lifecycle without a graphics context.

mod gym_scene;
mod headless;

use headless::{HeadlessDevice, LoggingMeshes};
use scene_engine::config::Config;
use scene_engine::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application settings, loadable from a TOML or RON file
#[derive(Debug, Serialize, Deserialize)]
struct GymAppConfig {
    /// Directory the texture images are read from
    assets_dir: PathBuf,
    /// Scene-wide UV tiling scale
    uv_scale: (f32, f32),
}

impl Default for GymAppConfig {
    fn default() -> Self {
        Self {
            assets_dir: PathBuf::from("assets"),
            uv_scale: (2.0, 2.0),
        }
    }
}

impl Config for GymAppConfig {}

fn load_config() -> GymAppConfig {
    match std::env::args().nth(1) {
        Some(path) => match GymAppConfig::load_from_file(&path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("Failed to load config {path}: {e}; using defaults");
                GymAppConfig::default()
            }
        },
        None => GymAppConfig::default(),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    scene_engine::foundation::logging::init();

    let config = load_config();
    log::info!(
        "Building gym scene (assets from {:?}, UV scale {:?})",
        config.assets_dir,
        config.uv_scale
    );

    let description = gym_scene::build(&config.assets_dir, config.uv_scale);
    let object_count = description.objects.len();
    let mut sequencer = SceneSequencer::new(description);

    let mut device = HeadlessDevice::new();
    let mut uniforms = UniformStore::new();
    let mut meshes = LoggingMeshes::new();

    sequencer.prepare(&mut device, &mut uniforms, &mut meshes);
    log::info!(
        "Scene prepared: {} of 16 texture slots in use, {} materials, {} shapes uploaded",
        sequencer.texture_registry().len(),
        sequencer.material_registry().len(),
        meshes.loaded_shapes().len()
    );

    sequencer.render_frame(&mut uniforms, &mut meshes);
    log::info!(
        "Frame dispatched: {} draw calls, {} distinct uniforms written",
        meshes.draw_count(),
        uniforms.len()
    );

    println!("Rendered {object_count} objects in {} draw calls", meshes.draw_count());
    println!(
        "Textures: {} loaded, materials: {}, shapes uploaded: {}",
        sequencer.texture_registry().len(),
        sequencer.material_registry().len(),
        meshes.loaded_shapes().len()
    );

    sequencer.teardown(&mut device);
    log::info!("Scene torn down; {} GPU textures still live", device.live_textures());

    Ok(())
}

//! cubelab-viewer: hosts the showcase, lattice and sequencer scenes.
//!
//! Native: `cubelab-viewer [config.json]`. Web: renders into the canvas named
//! by the default config, if the page has one.

use anyhow::Result;
use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::window::WindowResolution;

use bevy_cubelab_frame::CubelabFramePlugin;
use bevy_cubelab_scenes::{CubelabScenesPlugin, ScenesSettings};
use bevy_cubelab_sequencer::CubelabSequencerPlugin;

mod config;

use config::ViewerConfig;

#[cfg(not(target_arch = "wasm32"))]
fn load_config() -> Result<ViewerConfig> {
    match std::env::args().nth(1) {
        Some(path) => ViewerConfig::load(path),
        None => Ok(ViewerConfig::default()),
    }
}

#[cfg(target_arch = "wasm32")]
fn load_config() -> Result<ViewerConfig> {
    console_error_panic_hook::set_once();
    Ok(ViewerConfig::default())
}

/// The render surface needs an attachment point. On the web that is the
/// configured canvas; natively a window is always created.
#[cfg(target_arch = "wasm32")]
fn surface_available(cfg: &ViewerConfig) -> bool {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.query_selector(&cfg.canvas).ok().flatten())
        .is_some()
}

#[cfg(not(target_arch = "wasm32"))]
fn surface_available(_cfg: &ViewerConfig) -> bool {
    true
}

/// Logging is not installed yet, so warn straight to the console.
#[cfg(target_arch = "wasm32")]
fn warn_missing_surface(cfg: &ViewerConfig) {
    let msg = format!("cubelab: no element matches {}, nothing to mount", cfg.canvas);
    web_sys::console::warn_1(&msg.as_str().into());
}

#[cfg(not(target_arch = "wasm32"))]
fn warn_missing_surface(cfg: &ViewerConfig) {
    eprintln!("cubelab: no render surface for {}, nothing to mount", cfg.canvas);
}

fn build_app(cfg: &ViewerConfig) -> App {
    let mut app = App::new();
    app.add_plugins(
        DefaultPlugins
            .set(LogPlugin {
                filter: cfg.log_filter.clone(),
                ..default()
            })
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: cfg.title.clone(),
                    canvas: Some(cfg.canvas.clone()),
                    fit_canvas_to_parent: cfg.fit_canvas_to_parent,
                    resolution: WindowResolution::new(1280.0, 800.0),
                    ..default()
                }),
                ..default()
            }),
    )
    .add_plugins((
        CubelabFramePlugin {
            initial_scene: cfg.scene,
        },
        CubelabSequencerPlugin {
            config: cfg.sequencer.clone(),
        },
        CubelabScenesPlugin {
            settings: ScenesSettings {
                show_custom_triangle: cfg.show_custom_triangle,
            },
        },
    ));
    app
}

fn main() -> Result<()> {
    let cfg = load_config()?;
    if !surface_available(&cfg) {
        warn_missing_surface(&cfg);
        return Ok(());
    }
    match build_app(&cfg).run() {
        AppExit::Success => Ok(()),
        AppExit::Error(code) => anyhow::bail!("viewer exited with code {code}"),
    }
}

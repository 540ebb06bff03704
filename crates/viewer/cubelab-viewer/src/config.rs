//! Viewer configuration: JSON with every field optional.

use std::fs;
use std::path::Path;

use anyhow::{ensure, Context, Result};
use bevy_cubelab_frame::ViewerScene;
use cubelab_sequencer_core::SequencerConfig;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Scene mounted at startup.
    pub scene: ViewerScene,
    /// CSS selector of the canvas to render into on the web.
    pub canvas: String,
    pub title: String,
    /// `EnvFilter` directives for the log plugin.
    pub log_filter: String,
    pub fit_canvas_to_parent: bool,
    pub show_custom_triangle: bool,
    pub sequencer: SequencerConfig,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            scene: ViewerScene::Sequencer,
            canvas: "#cubelab".to_string(),
            title: "cubelab".to_string(),
            log_filter: "wgpu=error,naga=warn,cubelab=debug,bevy_cubelab=debug".to_string(),
            fit_canvas_to_parent: true,
            show_custom_triangle: false,
            sequencer: SequencerConfig::default(),
        }
    }
}

impl ViewerConfig {
    pub fn from_json_str(s: &str) -> Result<Self> {
        let cfg: ViewerConfig = serde_json::from_str(s).context("parsing viewer config")?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading viewer config {}", path.display()))?;
        Self::from_json_str(&text).with_context(|| format!("in {}", path.display()))
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(!self.canvas.trim().is_empty(), "canvas selector must not be empty");
        self.sequencer
            .validate()
            .context("invalid sequencer settings")?;
        Ok(())
    }
}

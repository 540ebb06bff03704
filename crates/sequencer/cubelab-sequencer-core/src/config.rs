//! Sequencer configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::SequencerError;
use crate::plan::NodeLayout;

/// Tunables for the sequencer and the nodes it plans.
/// Every field has a default so partial JSON objects are accepted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SequencerConfig {
    /// Autoplay cadence in milliseconds.
    pub autoplay_interval_ms: u64,
    /// Distance between neighbouring grid cells in world units.
    pub spacing: f32,
    /// Height of a coordinate label above its cube.
    pub label_lift: f32,
    /// Edge length of each cube.
    pub cube_size: f32,
    /// Logical pixels reserved for the control panel under the 3D view.
    pub chrome_height: f32,
}

impl Default for SequencerConfig {
    fn default() -> Self {
        Self {
            autoplay_interval_ms: 500,
            spacing: 1.5,
            label_lift: 1.0,
            cube_size: 0.8,
            chrome_height: 100.0,
        }
    }
}

impl SequencerConfig {
    /// Parse a (possibly partial) JSON object and validate it.
    pub fn from_json_str(s: &str) -> Result<Self, SequencerError> {
        let cfg: SequencerConfig =
            serde_json::from_str(s).map_err(|e| SequencerError::ConfigParse(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), SequencerError> {
        if self.autoplay_interval_ms == 0 {
            return Err(SequencerError::InvalidConfig {
                reason: "autoplay interval must be greater than 0".to_string(),
            });
        }
        if !self.spacing.is_finite() || self.spacing <= 0.0 {
            return Err(SequencerError::InvalidConfig {
                reason: "spacing must be positive and finite".to_string(),
            });
        }
        if !self.cube_size.is_finite() || self.cube_size <= 0.0 {
            return Err(SequencerError::InvalidConfig {
                reason: "cube size must be positive and finite".to_string(),
            });
        }
        if !self.label_lift.is_finite() || self.label_lift < 0.0 {
            return Err(SequencerError::InvalidConfig {
                reason: "label lift must be non-negative and finite".to_string(),
            });
        }
        if !self.chrome_height.is_finite() || self.chrome_height < 0.0 {
            return Err(SequencerError::InvalidConfig {
                reason: "chrome height must be non-negative and finite".to_string(),
            });
        }
        Ok(())
    }

    #[inline]
    pub fn autoplay_interval(&self) -> Duration {
        Duration::from_millis(self.autoplay_interval_ms)
    }

    pub fn layout(&self) -> NodeLayout {
        NodeLayout {
            spacing: self.spacing,
            label_lift: self.label_lift,
        }
    }
}

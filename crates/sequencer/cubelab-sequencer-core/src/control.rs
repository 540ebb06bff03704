//! View-model of the control panel.
//!
//! Adapters render these fields as buttons and status text; they never
//! compute enablement themselves.

use serde::{Deserialize, Serialize};

use crate::grid::GridCoordinate;
use crate::sequencer::StepSequencer;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ControlSurface {
    /// "Step {n} of {len}", 1-based.
    pub step_text: String,
    pub previous_enabled: bool,
    pub next_enabled: bool,
    pub is_playing: bool,
    pub play_label: String,
    pub coordinate: GridCoordinate,
    pub coordinate_text: String,
}

impl ControlSurface {
    pub fn from_sequencer(seq: &StepSequencer) -> Self {
        let index = seq.current_index();
        let c = seq.current_coordinate();
        let is_playing = seq.is_playing();
        Self {
            step_text: format!("Step {} of {}", index + 1, seq.len()),
            previous_enabled: index > 0,
            next_enabled: index < seq.last_index(),
            is_playing,
            play_label: if is_playing { "Pause" } else { "Play" }.to_string(),
            coordinate: c,
            coordinate_text: format!("x = {}, y = {}, z = {}", c.x, c.y, c.z),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_panel_disables_previous() {
        let seq = StepSequencer::default();
        let c = ControlSurface::from_sequencer(&seq);
        assert_eq!(c.step_text, "Step 1 of 27");
        assert!(!c.previous_enabled);
        assert!(c.next_enabled);
        assert_eq!(c.play_label, "Play");
        assert_eq!(c.coordinate_text, "x = -1, y = -1, z = -1");
    }

    #[test]
    fn last_step_disables_next() {
        let mut seq = StepSequencer::default();
        for _ in 0..26 {
            seq.advance();
        }
        let c = ControlSurface::from_sequencer(&seq);
        assert_eq!(c.step_text, "Step 27 of 27");
        assert!(c.previous_enabled);
        assert!(!c.next_enabled);
    }

    #[test]
    fn play_label_tracks_state() {
        let mut seq = StepSequencer::default();
        seq.toggle_play();
        assert_eq!(ControlSurface::from_sequencer(&seq).play_label, "Pause");
    }
}

//! Discrete signals emitted by the sequencer.
//!
//! Events accumulate inside the sequencer until an adapter drains them; they
//! are informational and never required to keep the scene consistent.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SequencerEvent {
    Stepped { from: usize, to: usize },
    PlaybackStarted { index: usize },
    PlaybackStopped { index: usize },
    ReachedEnd { index: usize },
    Reset { from: usize },
}

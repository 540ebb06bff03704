//! Input contracts: user intents that adapters route into the sequencer.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SequencerError;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SequencerCommand {
    Previous,
    Next,
    TogglePlay,
    Play,
    Pause,
    Reset,
}

impl FromStr for SequencerCommand {
    type Err = SequencerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "previous" | "prev" | "retreat" => Ok(Self::Previous),
            "next" | "advance" => Ok(Self::Next),
            "toggle" | "toggle_play" | "toggleplay" => Ok(Self::TogglePlay),
            "play" => Ok(Self::Play),
            "pause" => Ok(Self::Pause),
            "reset" => Ok(Self::Reset),
            other => Err(SequencerError::UnknownCommand(other.to_string())),
        }
    }
}

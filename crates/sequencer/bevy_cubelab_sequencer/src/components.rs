use bevy::prelude::*;
use cubelab_sequencer_core::NodeStyle;

/// Cube or label spawned by the scene synchronizer. These are owned by
/// [`crate::SyncResource`] and retired through it, never by scene teardown.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequencerNode {
    pub index: usize,
    pub style: NodeStyle,
}

/// Which sequencer operation a panel button triggers.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlButton {
    Previous,
    PlayPause,
    Next,
    Reset,
}

/// Text nodes of the control panel refreshed from the sequencer state.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelText {
    Step,
    Coordinate,
    PlayLabel,
}

//! cubelab-sequencer-core (engine-agnostic)
//!
//! Walks the 27 positions of a 3×3×3 grid one step at a time. The crate owns
//! the coordinate generator, the step sequencer with its autoplay timer, the
//! pure plan of which nodes should be visible, and a synchronizer that
//! replays that plan into any host scene graph. Adapters (Bevy/WASM) drive
//! `StepSequencer::tick` from their frame loop and implement `SceneGraph`.

pub mod autoplay;
pub mod config;
pub mod control;
pub mod error;
pub mod grid;
pub mod inputs;
pub mod outputs;
pub mod plan;
pub mod sequencer;
pub mod sync;

pub use autoplay::AutoplayTimer;
pub use config::SequencerConfig;
pub use control::ControlSurface;
pub use error::SequencerError;
pub use grid::{generate, GridCoordinate, GRID_LEN};
pub use inputs::SequencerCommand;
pub use outputs::SequencerEvent;
pub use plan::{plan_visible_nodes, NodeLayout, NodeStyle, PlannedNode, VisibleNodeSet};
pub use sequencer::{SequenceState, StepSequencer, MAX_QUEUED_EVENTS};
pub use sync::{SceneGraph, SceneSynchronizer};

/// Result alias used across the core.
pub type Result<T> = core::result::Result<T, SequencerError>;

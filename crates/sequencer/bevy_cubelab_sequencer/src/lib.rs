//! bevy_cubelab_sequencer: the step-through position visualizer as a Bevy plugin.
//!
//! Entering [`ViewerScene::Sequencer`] inserts the owned state
//! ([`SequencerResource`], [`SyncResource`], [`SequencerAssets`]) and spawns the
//! static scene. Leaving it retires every planned node and removes that state,
//! which also stops autoplay: the per-frame systems only run while the
//! resources exist.

use bevy::prelude::*;
use bevy_cubelab_frame::{ViewerScene, ViewportChrome};
use cubelab_sequencer_core::{SequencerCommand, SequencerConfig, SequencerEvent};

pub mod components;
pub mod graph;
pub mod resources;
pub mod systems;
pub mod ui;

pub use components::{ControlButton, PanelText, SequencerNode};
pub use graph::BevySceneGraph;
pub use resources::{SequencerAssets, SequencerResource, SequencerSettings, SyncResource};

/// Request a sequencer operation. Buttons and keys send these; so can any
/// other system.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequencerCommandEvent(pub SequencerCommand);

/// A state change reported by the sequencer.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct SequencerNotice(pub SequencerEvent);

/// Ordering of the per-frame sequencer work.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SequencerSet {
    /// Buttons and keyboard to commands.
    Input,
    /// Commands and autoplay mutate the sequencer.
    Mutate,
    /// Scene rebuild and panel refresh.
    Present,
}

#[derive(Default)]
pub struct CubelabSequencerPlugin {
    pub config: SequencerConfig,
}

impl Plugin for CubelabSequencerPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(SequencerSettings(self.config.clone()))
            .init_resource::<ViewportChrome>()
            .add_event::<SequencerCommandEvent>()
            .add_event::<SequencerNotice>()
            .configure_sets(
                Update,
                (SequencerSet::Input, SequencerSet::Mutate, SequencerSet::Present)
                    .chain()
                    .run_if(resource_exists::<SequencerResource>),
            )
            .add_systems(OnEnter(ViewerScene::Sequencer), systems::mount_sequencer)
            .add_systems(OnExit(ViewerScene::Sequencer), systems::unmount_sequencer)
            .add_systems(
                Update,
                (
                    (systems::button_input_system, systems::keyboard_input_system)
                        .in_set(SequencerSet::Input),
                    (
                        systems::apply_commands_system,
                        systems::autoplay_tick_system,
                        systems::forward_events_system,
                    )
                        .chain()
                        .in_set(SequencerSet::Mutate),
                    (systems::sync_scene_system, systems::refresh_controls_system)
                        .chain()
                        .in_set(SequencerSet::Present),
                ),
            );
    }
}

use bevy::prelude::*;
use hashbrown::HashMap;

use cubelab_sequencer_core::{NodeStyle, SceneSynchronizer, SequencerConfig, StepSequencer};

/// The sequencer owned by the mounted scene. Present only while mounted.
#[derive(Resource, Debug)]
pub struct SequencerResource(pub StepSequencer);

/// Handles of the nodes currently shown for the sequencer.
#[derive(Resource, Debug, Default)]
pub struct SyncResource(pub SceneSynchronizer<Entity>);

/// Configuration applied on the next mount.
#[derive(Resource, Debug, Default, Clone)]
pub struct SequencerSettings(pub SequencerConfig);

/// Mesh and per-style materials shared by every planned cube.
#[derive(Resource, Debug, Clone)]
pub struct SequencerAssets {
    pub cube: Handle<Mesh>,
    pub materials: HashMap<NodeStyle, Handle<StandardMaterial>>,
}

impl SequencerAssets {
    pub fn material(&self, style: NodeStyle) -> Handle<StandardMaterial> {
        self.materials.get(&style).cloned().unwrap_or_default()
    }
}

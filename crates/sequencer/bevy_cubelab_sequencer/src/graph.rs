use bevy::prelude::*;
use bevy_cubelab_frame::{hex_color, world_label};
use cubelab_sequencer_core::{PlannedNode, SceneGraph};

use crate::components::SequencerNode;
use crate::resources::SequencerAssets;

pub const LABEL_FONT_SIZE: f32 = 14.0;

/// Scene graph over deferred ECS commands. Spawns and despawns are applied
/// when the system's commands are flushed, before the frame is extracted.
pub struct BevySceneGraph<'a, 'w, 's> {
    commands: &'a mut Commands<'w, 's>,
    assets: &'a SequencerAssets,
}

impl<'a, 'w, 's> BevySceneGraph<'a, 'w, 's> {
    pub fn new(commands: &'a mut Commands<'w, 's>, assets: &'a SequencerAssets) -> Self {
        Self { commands, assets }
    }
}

impl SceneGraph for BevySceneGraph<'_, '_, '_> {
    type Handle = Entity;

    fn add_cube(&mut self, node: &PlannedNode) -> Entity {
        self.commands
            .spawn((
                PbrBundle {
                    mesh: self.assets.cube.clone(),
                    material: self.assets.material(node.style),
                    transform: Transform::from_translation(Vec3::from_array(node.position)),
                    ..default()
                },
                SequencerNode {
                    index: node.index,
                    style: node.style,
                },
                Name::new(format!("cube {}", node.index)),
            ))
            .id()
    }

    fn add_label(&mut self, node: &PlannedNode) -> Entity {
        self.commands
            .spawn((
                world_label(
                    node.label.clone(),
                    Vec3::from_array(node.label_position),
                    LABEL_FONT_SIZE,
                    hex_color(node.style.label_color()),
                ),
                SequencerNode {
                    index: node.index,
                    style: node.style,
                },
            ))
            .id()
    }

    fn remove(&mut self, handle: Entity) {
        if let Some(entity) = self.commands.get_entity(handle) {
            entity.despawn_recursive();
        }
    }
}

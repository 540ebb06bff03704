//! bevy_cubelab_frame: shared frame plumbing for the cubelab scenes.
//!
//! Every scene is mounted by entering its [`ViewerScene`] state and unmounted
//! by leaving it. Root entities tagged [`SceneMember`] are despawned on exit,
//! which also cancels every per-frame system gated on that scene.

use bevy::prelude::*;
use bevy::render::camera::CameraUpdateSystem;
use bevy::transform::TransformSystem;
use bevy::ui::UiSystem;
use serde::{Deserialize, Serialize};

pub mod camera;
pub mod helpers;
pub mod viewport;

pub use camera::{
    orbit_apply_system, orbit_input_system, spawn_scene_camera, CameraRig, OrbitCamera,
    OrbitSettings, SceneCamera,
};
pub use helpers::{hex_color, world_label, GridHelper, LightHelper, WorldLabel};
pub use viewport::{pointer_over_view, surface_rect, sync_viewport_system, ViewportChrome};

/// The scene currently mounted in the viewport.
#[derive(
    States, Default, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ViewerScene {
    Showcase,
    Lattice,
    #[default]
    Sequencer,
}

impl ViewerScene {
    pub const ALL: [ViewerScene; 3] = [
        ViewerScene::Showcase,
        ViewerScene::Lattice,
        ViewerScene::Sequencer,
    ];
}

/// Marker for root entities owned by the mounted scene.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct SceneMember;

pub struct CubelabFramePlugin {
    pub initial_scene: ViewerScene,
}

impl Default for CubelabFramePlugin {
    fn default() -> Self {
        Self {
            initial_scene: ViewerScene::default(),
        }
    }
}

impl Plugin for CubelabFramePlugin {
    fn build(&self, app: &mut App) {
        app.insert_state(self.initial_scene)
            .init_resource::<ViewportChrome>()
            .add_systems(
                Update,
                (
                    switch_scene_on_keys,
                    (camera::orbit_input_system, camera::orbit_apply_system).chain(),
                    viewport::sync_viewport_system,
                    helpers::draw_grid_helpers_system,
                    helpers::draw_light_helpers_system,
                ),
            )
            .add_systems(
                PostUpdate,
                helpers::place_world_labels_system
                    .after(TransformSystem::TransformPropagate)
                    .after(CameraUpdateSystem)
                    .before(UiSystem::Layout),
            );

        for scene in ViewerScene::ALL {
            app.add_systems(OnExit(scene), teardown_scene_members);
        }
    }
}

/// Despawn every root entity of the scene being left.
pub fn teardown_scene_members(
    mut commands: Commands,
    members: Query<Entity, (With<SceneMember>, Without<Parent>)>,
    mut chrome: ResMut<ViewportChrome>,
) {
    let mut count = 0usize;
    for e in &members {
        commands.entity(e).despawn_recursive();
        count += 1;
    }
    *chrome = ViewportChrome::default();
    debug!("scene teardown despawned {} root entities", count);
}

fn switch_scene_on_keys(
    keys: Res<ButtonInput<KeyCode>>,
    current: Res<State<ViewerScene>>,
    mut next: ResMut<NextState<ViewerScene>>,
) {
    let wanted = if keys.just_pressed(KeyCode::Digit1) {
        ViewerScene::Showcase
    } else if keys.just_pressed(KeyCode::Digit2) {
        ViewerScene::Lattice
    } else if keys.just_pressed(KeyCode::Digit3) {
        ViewerScene::Sequencer
    } else {
        return;
    };
    if *current.get() != wanted {
        info!("switching scene {:?} -> {:?}", current.get(), wanted);
        next.set(wanted);
    }
}

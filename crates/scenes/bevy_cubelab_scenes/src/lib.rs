//! bevy_cubelab_scenes: the primitive showcase and the Rubik's lattice.
//!
//! Both scenes are static. They mount on entering their [`ViewerScene`] and
//! are torn down by the frame plugin through their [`bevy_cubelab_frame::SceneMember`] markers.

use bevy::prelude::*;
use bevy_cubelab_frame::ViewerScene;
use serde::{Deserialize, Serialize};

pub mod lattice;
pub mod showcase;

pub use lattice::{cubie_mesh, face_color, face_for_normal, Cubie, Face};
pub use showcase::{custom_triangle_mesh, CustomTriangle, SphereSegment};

/// Options read when a scene mounts.
#[derive(Resource, Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenesSettings {
    /// Show the hand-built triangle in the showcase.
    pub show_custom_triangle: bool,
}

#[derive(Default)]
pub struct CubelabScenesPlugin {
    pub settings: ScenesSettings,
}

impl Plugin for CubelabScenesPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.settings.clone())
            .add_systems(OnEnter(ViewerScene::Showcase), showcase::mount_showcase)
            .add_systems(OnEnter(ViewerScene::Lattice), lattice::mount_lattice);
    }
}

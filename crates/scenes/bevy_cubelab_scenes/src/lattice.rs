//! Static Rubik's-Cube lattice: 27 cubies with coloured outward faces.

use bevy::prelude::*;
use bevy::render::mesh::VertexAttributeValues;
use bevy_cubelab_frame::{hex_color, spawn_scene_camera, CameraRig, OrbitSettings, SceneMember};
use cubelab_sequencer_core::{generate, GridCoordinate};

pub const CUBIE_SIZE: f32 = 0.95;
pub const INNER_COLOR: u32 = 0x000000;

/// One of the six face directions of a cubie.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Face {
    Right,
    Left,
    Top,
    Bottom,
    Front,
    Back,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::Right,
        Face::Left,
        Face::Top,
        Face::Bottom,
        Face::Front,
        Face::Back,
    ];

    /// Axis index (0 = x, 1 = y, 2 = z) and direction along it.
    pub const fn axis_sign(self) -> (usize, i8) {
        match self {
            Face::Right => (0, 1),
            Face::Left => (0, -1),
            Face::Top => (1, 1),
            Face::Bottom => (1, -1),
            Face::Front => (2, 1),
            Face::Back => (2, -1),
        }
    }

    /// Sticker colour when the face is on the outside of the lattice.
    pub const fn sticker(self) -> u32 {
        match self {
            Face::Right => 0xff0000,
            Face::Left => 0xff8000,
            Face::Top => 0xffffff,
            Face::Bottom => 0xffff00,
            Face::Front => 0x00ff00,
            Face::Back => 0x0000ff,
        }
    }
}

/// Face whose outward normal is closest to `n`.
pub fn face_for_normal(n: [f32; 3]) -> Face {
    let [x, y, z] = n;
    let (ax, ay, az) = (x.abs(), y.abs(), z.abs());
    if ax >= ay && ax >= az {
        if x >= 0.0 {
            Face::Right
        } else {
            Face::Left
        }
    } else if ay >= az {
        if y >= 0.0 {
            Face::Top
        } else {
            Face::Bottom
        }
    } else if z >= 0.0 {
        Face::Front
    } else {
        Face::Back
    }
}

/// Colour of `face` on the cubie at `coord`: its sticker on the outer shell,
/// black inside.
pub fn face_color(coord: GridCoordinate, face: Face) -> u32 {
    let (axis, sign) = face.axis_sign();
    if coord.on_face(axis, sign) {
        face.sticker()
    } else {
        INNER_COLOR
    }
}

fn linear_rgba(rgb: u32) -> [f32; 4] {
    let c = hex_color(rgb).to_linear();
    [c.red, c.green, c.blue, 1.0]
}

/// Cube mesh for one cubie with per-vertex colours chosen from each vertex normal.
pub fn cubie_mesh(coord: GridCoordinate) -> Mesh {
    let mut mesh = Mesh::from(Cuboid::from_length(CUBIE_SIZE));
    let colors: Vec<[f32; 4]> = match mesh.attribute(Mesh::ATTRIBUTE_NORMAL) {
        Some(VertexAttributeValues::Float32x3(normals)) => normals
            .iter()
            .map(|n| linear_rgba(face_color(coord, face_for_normal(*n))))
            .collect(),
        _ => vec![linear_rgba(INNER_COLOR); mesh.count_vertices()],
    };
    mesh.insert_attribute(Mesh::ATTRIBUTE_COLOR, colors);
    mesh
}

/// Marker for lattice cubies.
#[derive(Component, Debug, Clone, Copy)]
pub struct Cubie(pub GridCoordinate);

pub(crate) fn mount_lattice(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.insert_resource(ClearColor(Color::BLACK));
    spawn_scene_camera(
        &mut commands,
        &CameraRig {
            orbit: OrbitSettings::default().with_damping(0.05),
            ..default()
        },
    );

    // Vertex colours carry the stickers; the material stays white.
    let material = materials.add(StandardMaterial::default());
    for coord in generate() {
        commands.spawn((
            PbrBundle {
                mesh: meshes.add(cubie_mesh(coord)),
                material: material.clone(),
                transform: Transform::from_xyz(coord.x as f32, coord.y as f32, coord.z as f32),
                ..default()
            },
            Cubie(coord),
            SceneMember,
        ));
    }

    commands.spawn((
        DirectionalLightBundle {
            directional_light: DirectionalLight {
                illuminance: 8_000.0,
                shadows_enabled: true,
                ..default()
            },
            transform: Transform::from_xyz(5.0, 5.0, 5.0).looking_at(Vec3::ZERO, Vec3::Y),
            ..default()
        },
        SceneMember,
    ));
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 1_000.0,
    });
    info!("lattice mounted");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_cubie_shows_three_stickers() {
        let corner = GridCoordinate::new(1, 1, 1);
        assert_eq!(face_color(corner, Face::Right), 0xff0000);
        assert_eq!(face_color(corner, Face::Top), 0xffffff);
        assert_eq!(face_color(corner, Face::Front), 0x00ff00);
        assert_eq!(face_color(corner, Face::Left), INNER_COLOR);
        assert_eq!(face_color(corner, Face::Bottom), INNER_COLOR);
        assert_eq!(face_color(corner, Face::Back), INNER_COLOR);
    }

    #[test]
    fn centre_cubie_is_all_black() {
        let centre = GridCoordinate::new(0, 0, 0);
        assert!(Face::ALL.iter().all(|f| face_color(centre, *f) == INNER_COLOR));
    }

    #[test]
    fn sticker_count_matches_the_outer_shell() {
        let stickers: usize = generate()
            .into_iter()
            .map(|c| Face::ALL.iter().filter(|f| face_color(c, **f) != INNER_COLOR).count())
            .sum();
        assert_eq!(stickers, 54);
    }

    #[test]
    fn normals_map_to_faces() {
        assert_eq!(face_for_normal([0.0, -1.0, 0.0]), Face::Bottom);
        assert_eq!(face_for_normal([-1.0, 0.0, 0.0]), Face::Left);
        assert_eq!(face_for_normal([0.0, 0.0, -1.0]), Face::Back);
    }

    #[test]
    fn cubie_mesh_has_one_colour_per_vertex() {
        let mesh = cubie_mesh(GridCoordinate::new(-1, 0, 1));
        let colors = match mesh.attribute(Mesh::ATTRIBUTE_COLOR) {
            Some(VertexAttributeValues::Float32x4(c)) => c.clone(),
            other => panic!("unexpected colour attribute {other:?}"),
        };
        assert_eq!(colors.len(), mesh.count_vertices());
        // Left face is orange, right face is black.
        let orange = linear_rgba(0xff8000);
        assert!(colors.iter().any(|c| *c == orange));
        assert!(colors.iter().any(|c| *c == linear_rgba(INNER_COLOR)));
    }
}

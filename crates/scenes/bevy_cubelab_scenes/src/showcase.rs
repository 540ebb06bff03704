//! Primitive showcase: six shapes sharing one metallic material.

use std::f32::consts::PI;

use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};
use bevy::render::render_asset::RenderAssetUsages;
use bevy_cubelab_frame::{
    hex_color, spawn_scene_camera, CameraRig, GridHelper, LightHelper, OrbitSettings,
    SceneMember,
};

use crate::ScenesSettings;

pub const SHOWCASE_COLOR: u32 = 0xa2f199;

/// Partial UV sphere swept `phi_length` radians around Y from `phi_start`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SphereSegment {
    pub radius: f32,
    pub width_segments: u32,
    pub height_segments: u32,
    pub phi_start: f32,
    pub phi_length: f32,
}

impl Default for SphereSegment {
    fn default() -> Self {
        Self {
            radius: 1.0,
            width_segments: 10,
            height_segments: 30,
            phi_start: 2.0,
            phi_length: PI,
        }
    }
}

impl SphereSegment {
    pub fn mesh(&self) -> Mesh {
        let w = self.width_segments.max(3);
        let h = self.height_segments.max(2);
        let mut positions = Vec::with_capacity(((w + 1) * (h + 1)) as usize);
        let mut normals = Vec::with_capacity(positions.capacity());
        let mut uvs = Vec::with_capacity(positions.capacity());

        for iy in 0..=h {
            let v = iy as f32 / h as f32;
            let theta = v * PI;
            for ix in 0..=w {
                let u = ix as f32 / w as f32;
                let phi = self.phi_start + u * self.phi_length;
                let n = Vec3::new(
                    -phi.cos() * theta.sin(),
                    theta.cos(),
                    phi.sin() * theta.sin(),
                );
                positions.push((n * self.radius).to_array());
                normals.push(n.to_array());
                uvs.push([u, 1.0 - v]);
            }
        }

        let row = w + 1;
        let mut indices = Vec::new();
        for iy in 0..h {
            for ix in 0..w {
                let a = iy * row + ix + 1;
                let b = iy * row + ix;
                let c = (iy + 1) * row + ix;
                let d = (iy + 1) * row + ix + 1;
                // Poles collapse to single points; skip their degenerate triangles.
                if iy != 0 {
                    indices.extend([a, b, d]);
                }
                if iy != h - 1 {
                    indices.extend([b, c, d]);
                }
            }
        }

        Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default())
            .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
            .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, normals)
            .with_inserted_attribute(Mesh::ATTRIBUTE_UV_0, uvs)
            .with_inserted_indices(Indices::U32(indices))
    }
}

pub const TRIANGLE: [[f32; 3]; 3] = [[-1.0, -1.0, 1.0], [1.0, -1.0, 1.0], [1.0, 1.0, 1.0]];

/// Unit normal of a counter-clockwise triangle.
pub fn triangle_normal(v: [[f32; 3]; 3]) -> Vec3 {
    let [a, b, c] = v.map(Vec3::from_array);
    (b - a).cross(c - a).normalize_or_zero()
}

/// Single indexed triangle with a shared face normal.
pub fn custom_triangle_mesh() -> Mesh {
    let n = triangle_normal(TRIANGLE).to_array();
    Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default())
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, TRIANGLE.to_vec())
        .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, vec![n; 3])
        .with_inserted_indices(Indices::U32(vec![0, 1, 2]))
}

/// Marker for the hand-built triangle.
#[derive(Component, Debug, Clone, Copy)]
pub struct CustomTriangle;

pub(crate) fn mount_showcase(
    mut commands: Commands,
    settings: Res<ScenesSettings>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.insert_resource(ClearColor(Color::BLACK));
    spawn_scene_camera(
        &mut commands,
        &CameraRig {
            orbit: OrbitSettings {
                zoom_speed: 1.0,
                auto_rotate: false,
                auto_rotate_speed: 4.0,
                ..OrbitSettings::default().with_damping(0.03)
            },
            ..default()
        },
    );

    let material = materials.add(StandardMaterial {
        base_color: hex_color(SHOWCASE_COLOR),
        metallic: 0.7,
        perceptual_roughness: 0.2,
        double_sided: true,
        cull_mode: None,
        ..default()
    });

    let shapes: [(&str, Mesh, Vec3); 6] = [
        ("plane", Rectangle::new(2.0, 2.0).into(), Vec3::new(-2.0, 0.0, 0.0)),
        ("box", Cuboid::new(1.0, 1.0, 1.0).into(), Vec3::ZERO),
        ("sphere", SphereSegment::default().mesh(), Vec3::new(2.0, 0.0, 0.0)),
        (
            "torus",
            Torus {
                minor_radius: 0.2,
                major_radius: 0.4,
            }
            .into(),
            Vec3::new(4.0, 0.0, 0.0),
        ),
        ("cylinder", Cylinder::new(0.3, 1.0).into(), Vec3::new(-4.0, 0.0, 0.0)),
        (
            "cone",
            Cone {
                radius: 0.8,
                height: 1.0,
            }
            .into(),
            Vec3::new(0.0, 2.0, 0.0),
        ),
    ];
    for (name, mesh, at) in shapes {
        commands.spawn((
            PbrBundle {
                mesh: meshes.add(mesh),
                material: material.clone(),
                transform: Transform::from_translation(at),
                ..default()
            },
            Name::new(name),
            SceneMember,
        ));
    }

    commands.spawn((
        PbrBundle {
            mesh: meshes.add(custom_triangle_mesh()),
            material,
            visibility: if settings.show_custom_triangle {
                Visibility::Inherited
            } else {
                Visibility::Hidden
            },
            ..default()
        },
        CustomTriangle,
        Name::new("triangle"),
        SceneMember,
    ));

    commands.spawn((
        DirectionalLightBundle {
            directional_light: DirectionalLight {
                illuminance: 10_000.0,
                ..default()
            },
            transform: Transform::from_xyz(5.0, 5.0, 5.0).looking_at(Vec3::ZERO, Vec3::Y),
            ..default()
        },
        LightHelper::new(1.0, Vec3::ZERO),
        SceneMember,
    ));
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 80.0,
    });

    commands.spawn((
        SpatialBundle::default(),
        GridHelper::new(30.0, 20),
        SceneMember,
    ));
    info!("showcase mounted");
}

//! Visual helpers: floor grid, light outline and world-anchored text labels.

use bevy::prelude::*;

use crate::camera::SceneCamera;

/// sRGB colour from a 0xRRGGBB literal.
pub fn hex_color(rgb: u32) -> Color {
    Color::srgb_u8((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
}

/// Square grid on the XZ plane drawn with gizmos every frame.
#[derive(Component, Clone, Debug)]
pub struct GridHelper {
    pub size: f32,
    pub divisions: u32,
    pub center_color: Color,
    pub color: Color,
}

impl GridHelper {
    pub fn new(size: f32, divisions: u32) -> Self {
        Self {
            size,
            divisions: divisions.max(1),
            center_color: hex_color(0x444444),
            color: hex_color(0x888888),
        }
    }

    pub fn with_colors(mut self, center: Color, line: Color) -> Self {
        self.center_color = center;
        self.color = line;
        self
    }

    /// Line segments in local space, paired with whether they are centre lines.
    pub fn segments(&self) -> Vec<(Vec3, Vec3, bool)> {
        let half = self.size * 0.5;
        let step = self.size / self.divisions as f32;
        let center = self.divisions / 2;
        let even = self.divisions % 2 == 0;
        let mut out = Vec::with_capacity((self.divisions as usize + 1) * 2);
        for i in 0..=self.divisions {
            let k = -half + i as f32 * step;
            let is_center = even && i == center;
            out.push((Vec3::new(-half, 0.0, k), Vec3::new(half, 0.0, k), is_center));
            out.push((Vec3::new(k, 0.0, -half), Vec3::new(k, 0.0, half), is_center));
        }
        out
    }
}

pub(crate) fn draw_grid_helpers_system(
    mut gizmos: Gizmos,
    grids: Query<(&GridHelper, &GlobalTransform)>,
) {
    for (grid, gt) in &grids {
        for (a, b, is_center) in grid.segments() {
            let color = if is_center { grid.center_color } else { grid.color };
            gizmos.line(gt.transform_point(a), gt.transform_point(b), color);
        }
    }
}

/// Outline of a directional light: a square facing its target and a line to it.
#[derive(Component, Clone, Debug)]
pub struct LightHelper {
    pub size: f32,
    pub target: Vec3,
    pub color: Color,
}

impl LightHelper {
    pub fn new(size: f32, target: Vec3) -> Self {
        Self {
            size,
            target,
            color: Color::WHITE,
        }
    }
}

pub(crate) fn draw_light_helpers_system(
    mut gizmos: Gizmos,
    lights: Query<(&LightHelper, &GlobalTransform)>,
) {
    for (helper, gt) in &lights {
        let (_, rotation, position) = gt.to_scale_rotation_translation();
        gizmos.rect(position, rotation, Vec2::splat(helper.size), helper.color);
        gizmos.line(position, helper.target, helper.color);
    }
}

/// UI text that follows a point in world space.
#[derive(Component, Clone, Copy, Debug)]
pub struct WorldLabel {
    pub anchor: Vec3,
}

/// Bundle for a label centred on `anchor` once projected.
pub fn world_label(
    text: impl Into<String>,
    anchor: Vec3,
    font_size: f32,
    color: Color,
) -> (TextBundle, WorldLabel) {
    (
        TextBundle::from_section(
            text,
            TextStyle {
                font_size,
                color,
                ..default()
            },
        )
        .with_style(Style {
            position_type: PositionType::Absolute,
            ..default()
        }),
        WorldLabel { anchor },
    )
}

pub(crate) fn place_world_labels_system(
    cameras: Query<(&Camera, &GlobalTransform), With<SceneCamera>>,
    mut labels: Query<(&WorldLabel, &Node, &mut Style, &mut Visibility)>,
) {
    let Ok((camera, camera_tf)) = cameras.get_single() else {
        return;
    };
    for (label, node, mut style, mut visibility) in &mut labels {
        match camera.world_to_viewport(camera_tf, label.anchor) {
            Some(p) => {
                let half = node.size() * 0.5;
                style.left = Val::Px(p.x - half.x);
                style.top = Val::Px(p.y - half.y);
                *visibility = Visibility::Inherited;
            }
            None => *visibility = Visibility::Hidden,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_has_two_lines_per_division_boundary() {
        let grid = GridHelper::new(6.0, 6);
        let segs = grid.segments();
        assert_eq!(segs.len(), 14);
        assert_eq!(segs.iter().filter(|s| s.2).count(), 2);
        assert_eq!(segs[0].0, Vec3::new(-3.0, 0.0, -3.0));
    }

    #[test]
    fn hex_color_splits_channels() {
        assert_eq!(hex_color(0x4a90e2), Color::srgb_u8(0x4a, 0x90, 0xe2));
    }

    #[test]
    fn odd_division_grid_has_no_center_line() {
        let grid = GridHelper::new(3.0, 3);
        assert!(grid.segments().iter().all(|s| !s.2));
    }
}

//! Scene cameras and orbit-style controls.
//!
//! Left drag rotates around the focus, right drag pans, the wheel zooms.
//! With damping enabled the pending motion decays over the following frames
//! instead of being applied at once.

use std::f32::consts::{PI, TAU};

use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use bevy::render::camera::ClearColorConfig;
use bevy::ui::IsDefaultUiCamera;
use bevy::window::PrimaryWindow;

use crate::viewport::{pointer_over_view, ViewportChrome};
use crate::SceneMember;

/// Marker for the 3D camera of the mounted scene.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct SceneCamera;

const POLAR_EPS: f32 = 1e-4;

#[derive(Clone, Debug, PartialEq)]
pub struct OrbitSettings {
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub pan_speed: f32,
    pub enable_zoom: bool,
    pub enable_pan: bool,
    /// Fraction of pending motion applied per frame; `None` applies it at once.
    pub damping: Option<f32>,
    pub min_polar: f32,
    pub max_polar: f32,
    pub min_radius: f32,
    pub max_radius: f32,
    pub auto_rotate: bool,
    /// Full turns per minute, matching the usual orbit-control convention.
    pub auto_rotate_speed: f32,
}

impl Default for OrbitSettings {
    fn default() -> Self {
        Self {
            rotate_speed: 1.0,
            zoom_speed: 1.0,
            pan_speed: 1.0,
            enable_zoom: true,
            enable_pan: true,
            damping: Some(0.05),
            min_polar: 0.0,
            max_polar: PI,
            min_radius: 0.1,
            max_radius: 1_000.0,
            auto_rotate: false,
            auto_rotate_speed: 2.0,
        }
    }
}

impl OrbitSettings {
    pub fn with_damping(mut self, factor: f32) -> Self {
        self.damping = Some(factor.clamp(0.0, 1.0));
        self
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct PendingMotion {
    azimuth: f32,
    polar: f32,
    pan: Vec3,
    scale: f32,
}

/// Spherical orbit around `focus`. `polar` is measured from +Y.
#[derive(Component, Clone, Debug)]
pub struct OrbitCamera {
    pub focus: Vec3,
    pub radius: f32,
    pub azimuth: f32,
    pub polar: f32,
    pub settings: OrbitSettings,
    pending: PendingMotion,
}

impl OrbitCamera {
    pub fn from_eye(eye: Vec3, focus: Vec3, settings: OrbitSettings) -> Self {
        let offset = eye - focus;
        let radius = offset.length().max(settings.min_radius);
        let polar = (offset.y / radius).clamp(-1.0, 1.0).acos();
        let azimuth = offset.x.atan2(offset.z);
        Self {
            focus,
            radius,
            azimuth,
            polar,
            settings,
            pending: PendingMotion {
                scale: 1.0,
                ..Default::default()
            },
        }
    }

    /// Queue a rotation from a pointer drag of `delta` logical pixels.
    pub fn rotate(&mut self, delta: Vec2, viewport_height: f32) {
        let h = viewport_height.max(1.0);
        let s = self.settings.rotate_speed;
        self.pending.azimuth -= TAU * delta.x / h * s;
        self.pending.polar -= TAU * delta.y / h * s;
    }

    /// Queue a dolly by `notches` wheel steps; positive zooms in.
    pub fn zoom(&mut self, notches: f32) {
        if !self.settings.enable_zoom {
            return;
        }
        self.pending.scale *= 0.95f32.powf(self.settings.zoom_speed * notches);
    }

    /// Queue a pan from a pointer drag, keeping the point under the cursor.
    pub fn pan(&mut self, delta: Vec2, viewport_height: f32, fov: f32, rotation: Quat) {
        if !self.settings.enable_pan {
            return;
        }
        let h = viewport_height.max(1.0);
        let world_per_px = 2.0 * self.radius * (fov * 0.5).tan() / h * self.settings.pan_speed;
        let right = rotation * Vec3::X;
        let up = rotation * Vec3::Y;
        self.pending.pan += (-right * delta.x + up * delta.y) * world_per_px;
    }

    /// Integrate pending motion for one frame.
    pub fn update(&mut self, dt: f32) {
        if self.settings.auto_rotate {
            self.pending.azimuth -= TAU / 60.0 * self.settings.auto_rotate_speed * dt;
        }
        let factor = self.settings.damping.unwrap_or(1.0);

        self.azimuth += self.pending.azimuth * factor;
        self.polar += self.pending.polar * factor;
        let lo = self.settings.min_polar.max(POLAR_EPS);
        let hi = self.settings.max_polar.min(PI - POLAR_EPS);
        self.polar = self.polar.clamp(lo, hi.max(lo));

        self.radius = (self.radius * self.pending.scale)
            .clamp(self.settings.min_radius, self.settings.max_radius);
        self.focus += self.pending.pan * factor;

        if self.settings.damping.is_some() {
            let keep = 1.0 - factor;
            self.pending.azimuth *= keep;
            self.pending.polar *= keep;
            self.pending.pan *= keep;
        } else {
            self.pending.azimuth = 0.0;
            self.pending.polar = 0.0;
            self.pending.pan = Vec3::ZERO;
        }
        self.pending.scale = 1.0;
    }

    pub fn eye(&self) -> Vec3 {
        let (sp, cp) = self.polar.sin_cos();
        let (sa, ca) = self.azimuth.sin_cos();
        self.focus + self.radius * Vec3::new(sp * sa, cp, sp * ca)
    }

    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.eye()).looking_at(self.focus, Vec3::Y)
    }
}

/// Where a scene camera starts and how it may be moved.
#[derive(Clone, Debug)]
pub struct CameraRig {
    pub eye: Vec3,
    pub focus: Vec3,
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub orbit: OrbitSettings,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, 5.0),
            focus: Vec3::ZERO,
            fov_degrees: 75.0,
            near: 0.1,
            far: 50.0,
            orbit: OrbitSettings::default(),
        }
    }
}

/// Spawn the 3D scene camera and the overlay UI camera. Both are scene
/// members, so leaving the scene removes them.
pub fn spawn_scene_camera(commands: &mut Commands, rig: &CameraRig) -> Entity {
    let orbit = OrbitCamera::from_eye(rig.eye, rig.focus, rig.orbit.clone());
    let transform = orbit.transform();
    let camera = commands
        .spawn((
            Camera3dBundle {
                transform,
                projection: PerspectiveProjection {
                    fov: rig.fov_degrees.to_radians(),
                    near: rig.near,
                    far: rig.far,
                    ..default()
                }
                .into(),
                ..default()
            },
            orbit,
            SceneCamera,
            SceneMember,
        ))
        .id();

    // UI overlay spans the whole window even when the 3D view is shrunk.
    commands.spawn((
        Camera2dBundle {
            camera: Camera {
                order: 1,
                clear_color: ClearColorConfig::None,
                ..default()
            },
            ..default()
        },
        IsDefaultUiCamera,
        SceneMember,
    ));
    camera
}

/// Turn pointer drags and wheel steps into orbit motion. Input is ignored
/// while the pointer is over UI or the chrome strip below the 3D view.
pub fn orbit_input_system(
    mut motion: EventReader<MouseMotion>,
    mut wheel: EventReader<MouseWheel>,
    buttons: Res<ButtonInput<MouseButton>>,
    chrome: Res<ViewportChrome>,
    windows: Query<&Window, With<PrimaryWindow>>,
    interactions: Query<&Interaction>,
    mut cameras: Query<(&mut OrbitCamera, &Transform, &Projection)>,
) {
    let drag: Vec2 = motion.read().map(|m| m.delta).sum();
    let notches: f32 = wheel
        .read()
        .map(|w| match w.unit {
            MouseScrollUnit::Line => w.y,
            MouseScrollUnit::Pixel => w.y / 50.0,
        })
        .sum();
    let rotating = buttons.pressed(MouseButton::Left);
    let panning = buttons.pressed(MouseButton::Right);
    if notches == 0.0 && !(drag != Vec2::ZERO && (rotating || panning)) {
        return;
    }
    let Ok(window) = windows.get_single() else {
        return;
    };
    if interactions.iter().any(|i| *i != Interaction::None)
        || !pointer_over_view(window.cursor_position(), window.height(), chrome.bottom)
    {
        return;
    }
    let height = window.height();

    for (mut orbit, transform, projection) in &mut cameras {
        if rotating {
            orbit.rotate(drag, height);
        } else if panning {
            let fov = match projection {
                Projection::Perspective(p) => p.fov,
                _ => std::f32::consts::FRAC_PI_4,
            };
            orbit.pan(drag, height, fov, transform.rotation);
        }
        if notches != 0.0 {
            orbit.zoom(notches);
        }
    }
}

pub fn orbit_apply_system(
    time: Res<Time>,
    mut cameras: Query<(&mut OrbitCamera, &mut Transform)>,
) {
    let dt = time.delta_seconds();
    for (mut orbit, mut transform) in &mut cameras {
        orbit.update(dt);
        *transform = orbit.transform();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec3, b: Vec3) {
        assert!((a - b).length() < 1e-4, "left={a:?} right={b:?}");
    }

    #[test]
    fn eye_round_trips_through_spherical() {
        let eye = Vec3::new(5.0, 5.0, 8.0);
        let orbit = OrbitCamera::from_eye(eye, Vec3::ZERO, OrbitSettings::default());
        approx(orbit.eye(), eye);
    }

    #[test]
    fn undamped_rotation_applies_in_one_update() {
        let settings = OrbitSettings {
            damping: None,
            ..Default::default()
        };
        let mut orbit = OrbitCamera::from_eye(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, settings);
        // A drag across a quarter of the viewport height turns a quarter circle.
        orbit.rotate(Vec2::new(-25.0, 0.0), 100.0);
        orbit.update(0.016);
        approx(orbit.eye(), Vec3::new(5.0, 0.0, 0.0));
        orbit.update(0.016);
        approx(orbit.eye(), Vec3::new(5.0, 0.0, 0.0));
    }

    #[test]
    fn damping_spreads_motion_over_frames() {
        let settings = OrbitSettings::default().with_damping(0.5);
        let mut orbit = OrbitCamera::from_eye(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, settings);
        let start = orbit.azimuth;
        orbit.rotate(Vec2::new(-10.0, 0.0), 100.0);
        orbit.update(0.016);
        let first = orbit.azimuth - start;
        orbit.update(0.016);
        let second = orbit.azimuth - start - first;
        assert!(first > 0.0 && second > 0.0);
        assert!((second - first * 0.5).abs() < 1e-5);
    }

    #[test]
    fn polar_angle_is_clamped() {
        let settings = OrbitSettings {
            damping: None,
            ..Default::default()
        };
        let mut orbit = OrbitCamera::from_eye(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, settings);
        orbit.rotate(Vec2::new(0.0, 10_000.0), 100.0);
        orbit.update(0.016);
        assert!(orbit.polar > 0.0 && orbit.polar < PI);
        assert!(orbit.eye().is_finite());
    }

    #[test]
    fn zoom_in_shrinks_radius_within_limits() {
        let settings = OrbitSettings {
            damping: None,
            min_radius: 2.0,
            ..Default::default()
        };
        let mut orbit = OrbitCamera::from_eye(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, settings);
        orbit.zoom(1.0);
        orbit.update(0.016);
        assert!((orbit.radius - 4.75).abs() < 1e-4);
        orbit.zoom(500.0);
        orbit.update(0.016);
        assert_eq!(orbit.radius, 2.0);
    }

    #[test]
    fn disabled_zoom_is_ignored() {
        let settings = OrbitSettings {
            enable_zoom: false,
            ..Default::default()
        };
        let mut orbit = OrbitCamera::from_eye(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, settings);
        orbit.zoom(3.0);
        orbit.update(0.016);
        assert!((orbit.radius - 5.0).abs() < 1e-5);
    }

    #[test]
    fn auto_rotate_moves_without_input() {
        let settings = OrbitSettings {
            damping: None,
            auto_rotate: true,
            auto_rotate_speed: 4.0,
            ..Default::default()
        };
        let mut orbit = OrbitCamera::from_eye(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, settings);
        let start = orbit.azimuth;
        orbit.update(1.0);
        assert!((orbit.azimuth - start + TAU / 60.0 * 4.0).abs() < 1e-5);
    }
}

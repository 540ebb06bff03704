use bevy::input::mouse::{MouseMotion, MouseWheel};
use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResolution};
use bevy_cubelab_frame::{
    orbit_apply_system, orbit_input_system, spawn_scene_camera, CameraRig, OrbitCamera,
    OrbitSettings, ViewportChrome,
};

fn spawn_undamped_camera(mut commands: Commands) {
    spawn_scene_camera(
        &mut commands,
        &CameraRig {
            orbit: OrbitSettings {
                damping: None,
                ..default()
            },
            ..default()
        },
    );
}

fn app(cursor: Vec2) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_event::<MouseMotion>()
        .add_event::<MouseWheel>()
        .init_resource::<ButtonInput<MouseButton>>()
        .insert_resource(ViewportChrome { bottom: 100.0 })
        .add_systems(Startup, spawn_undamped_camera)
        .add_systems(Update, (orbit_input_system, orbit_apply_system).chain());

    let mut window = Window {
        resolution: WindowResolution::new(800.0, 600.0),
        ..default()
    };
    window.set_cursor_position(Some(cursor));
    app.world_mut().spawn((window, PrimaryWindow));
    app.update();
    app
}

fn azimuth(app: &mut App) -> f32 {
    let mut q = app.world_mut().query::<&OrbitCamera>();
    q.single(app.world()).azimuth
}

fn drag(app: &mut App, delta: Vec2) {
    app.world_mut()
        .resource_mut::<ButtonInput<MouseButton>>()
        .press(MouseButton::Left);
    app.world_mut().send_event(MouseMotion { delta });
    app.update();
}

/// it should rotate the camera when dragging over the 3D view
#[test]
fn drag_over_the_view_rotates() {
    let mut app = app(Vec2::new(400.0, 200.0));
    let before = azimuth(&mut app);
    drag(&mut app, Vec2::new(40.0, 0.0));
    assert!((azimuth(&mut app) - before).abs() > 1e-3);
}

/// it should leave the camera alone when dragging over the control strip
#[test]
fn drag_over_the_chrome_is_ignored() {
    let mut app = app(Vec2::new(400.0, 550.0));
    let before = azimuth(&mut app);
    drag(&mut app, Vec2::new(40.0, 0.0));
    assert_eq!(azimuth(&mut app), before);
}

/// it should leave the camera alone while a UI element is hovered or pressed
#[test]
fn drag_while_ui_is_engaged_is_ignored() {
    let mut app = app(Vec2::new(400.0, 200.0));
    app.world_mut().spawn(Interaction::Pressed);
    let before = azimuth(&mut app);
    drag(&mut app, Vec2::new(40.0, 0.0));
    assert_eq!(azimuth(&mut app), before);
}

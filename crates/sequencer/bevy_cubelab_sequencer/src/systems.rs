use bevy::prelude::*;
use hashbrown::HashMap;

use bevy_cubelab_frame::{
    hex_color, spawn_scene_camera, world_label, CameraRig, GridHelper, OrbitSettings,
    SceneMember, ViewportChrome,
};
use cubelab_sequencer_core::{
    ControlSurface, NodeStyle, SceneSynchronizer, SequencerCommand, SequencerConfig,
    SequencerEvent, StepSequencer,
};

use crate::components::{ControlButton, PanelText};
use crate::graph::BevySceneGraph;
use crate::resources::{SequencerAssets, SequencerResource, SequencerSettings, SyncResource};
use crate::ui::{self, coordinate_sections, AXIS_X_COLOR, AXIS_Y_COLOR, AXIS_Z_COLOR};
use crate::{SequencerCommandEvent, SequencerNotice};

pub const BACKGROUND: u32 = 0x1a1a2e;

fn style_material(style: NodeStyle) -> StandardMaterial {
    let opacity = style.opacity();
    let (emissive, strength) = style.emissive();
    let glow = hex_color(emissive).to_linear();
    StandardMaterial {
        base_color: hex_color(style.base_color()).with_alpha(opacity),
        emissive: LinearRgba::rgb(
            glow.red * strength,
            glow.green * strength,
            glow.blue * strength,
        ),
        alpha_mode: if opacity < 1.0 {
            AlphaMode::Blend
        } else {
            AlphaMode::Opaque
        },
        ..default()
    }
}

/// OnEnter(Sequencer): create the owned state, the shared assets and the
/// static part of the scene.
pub fn mount_sequencer(
    mut commands: Commands,
    settings: Res<SequencerSettings>,
    mut chrome: ResMut<ViewportChrome>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let (cfg, seq) = match StepSequencer::new(&settings.0) {
        Ok(seq) => (settings.0.clone(), seq),
        Err(e) => {
            warn!("sequencer settings rejected ({e}); using defaults");
            (SequencerConfig::default(), StepSequencer::default())
        }
    };

    let mut style_materials = HashMap::new();
    for style in [NodeStyle::Current, NodeStyle::Placed] {
        style_materials.insert(style, materials.add(style_material(style)));
    }
    commands.insert_resource(SequencerAssets {
        cube: meshes.add(Cuboid::from_length(cfg.cube_size)),
        materials: style_materials,
    });
    commands.insert_resource(SyncResource(SceneSynchronizer::new(cfg.layout())));

    commands.insert_resource(ClearColor(hex_color(BACKGROUND)));
    chrome.bottom = cfg.chrome_height;

    spawn_scene_camera(
        &mut commands,
        &CameraRig {
            eye: Vec3::new(5.0, 5.0, 8.0),
            focus: Vec3::ZERO,
            fov_degrees: 50.0,
            near: 0.1,
            far: 100.0,
            orbit: OrbitSettings::default(),
        },
    );

    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 500.0,
    });
    commands.spawn((
        PointLightBundle {
            point_light: PointLight {
                intensity: 2_000_000.0,
                range: 60.0,
                ..default()
            },
            transform: Transform::from_xyz(10.0, 10.0, 10.0),
            ..default()
        },
        SceneMember,
    ));

    commands.spawn((
        SpatialBundle::default(),
        GridHelper::new(6.0, 6).with_colors(hex_color(0x444444), hex_color(0x222222)),
        SceneMember,
    ));
    for (text, anchor, color) in [
        ("X", Vec3::new(3.0, 0.0, 0.0), AXIS_X_COLOR),
        ("Y", Vec3::new(0.0, 3.0, 0.0), AXIS_Y_COLOR),
        ("Z", Vec3::new(0.0, 0.0, 3.0), AXIS_Z_COLOR),
    ] {
        commands.spawn((world_label(text, anchor, 28.0, hex_color(color)), SceneMember));
    }

    ui::spawn_control_panel(
        &mut commands,
        &ControlSurface::from_sequencer(&seq),
        cfg.chrome_height,
    );

    info!(
        "sequencer mounted: {} steps, autoplay every {:?}",
        seq.len(),
        seq.interval()
    );
    commands.insert_resource(SequencerResource(seq));
}

/// OnExit(Sequencer): stop playback, retire the planned nodes and drop the
/// owned state. Nothing of the sequencer survives the unmount.
pub fn unmount_sequencer(
    mut commands: Commands,
    seq: Option<ResMut<SequencerResource>>,
    sync: Option<ResMut<SyncResource>>,
    assets: Option<Res<SequencerAssets>>,
) {
    if let Some(mut seq) = seq {
        seq.0.set_playing(false);
    }
    if let (Some(mut sync), Some(assets)) = (sync, assets) {
        let retired = sync.0.live_count();
        let mut graph = BevySceneGraph::new(&mut commands, &assets);
        sync.0.retire_all(&mut graph);
        debug!("sequencer unmount retired {} nodes", retired);
    }
    commands.remove_resource::<SequencerResource>();
    commands.remove_resource::<SyncResource>();
    commands.remove_resource::<SequencerAssets>();
    info!("sequencer unmounted");
}

/// Pressed panel buttons become commands. Disabled buttons are ignored.
pub fn button_input_system(
    seq: Res<SequencerResource>,
    buttons: Query<(&Interaction, &ControlButton), Changed<Interaction>>,
    mut out: EventWriter<SequencerCommandEvent>,
) {
    let surface = ControlSurface::from_sequencer(&seq.0);
    for (interaction, button) in &buttons {
        if *interaction != Interaction::Pressed || !button.is_enabled(&surface) {
            continue;
        }
        out.send(SequencerCommandEvent(match button {
            ControlButton::Previous => SequencerCommand::Previous,
            ControlButton::PlayPause => SequencerCommand::TogglePlay,
            ControlButton::Next => SequencerCommand::Next,
            ControlButton::Reset => SequencerCommand::Reset,
        }));
    }
}

pub fn keyboard_input_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut out: EventWriter<SequencerCommandEvent>,
) {
    for (key, cmd) in [
        (KeyCode::ArrowLeft, SequencerCommand::Previous),
        (KeyCode::ArrowRight, SequencerCommand::Next),
        (KeyCode::Space, SequencerCommand::TogglePlay),
        (KeyCode::KeyR, SequencerCommand::Reset),
    ] {
        if keys.just_pressed(key) {
            out.send(SequencerCommandEvent(cmd));
        }
    }
}

pub fn apply_commands_system(
    mut commands_in: EventReader<SequencerCommandEvent>,
    mut seq: ResMut<SequencerResource>,
) {
    for SequencerCommandEvent(cmd) in commands_in.read() {
        if !seq.0.apply(*cmd) {
            trace!("sequencer command {:?} was a no-op", cmd);
        }
    }
}

pub fn autoplay_tick_system(time: Res<Time>, mut seq: ResMut<SequencerResource>) {
    if !seq.0.is_playing() {
        return;
    }
    seq.0.tick(time.delta());
}

/// Re-publish the sequencer's own events for other plugins.
pub fn forward_events_system(
    mut seq: ResMut<SequencerResource>,
    mut out: EventWriter<SequencerNotice>,
) {
    for event in seq.0.drain_events() {
        if let SequencerEvent::ReachedEnd { index } = event {
            info!("sequencer reached the last step ({})", index);
        }
        out.send(SequencerNotice(event));
    }
}

pub fn sync_scene_system(
    mut commands: Commands,
    seq: Res<SequencerResource>,
    mut sync: ResMut<SyncResource>,
    assets: Res<SequencerAssets>,
) {
    let mut graph = BevySceneGraph::new(&mut commands, &assets);
    sync.0.sync(&mut graph, &seq.0);
}

pub fn refresh_controls_system(
    seq: Res<SequencerResource>,
    mut shown: Local<Option<u64>>,
    mut texts: Query<(&PanelText, &mut Text)>,
    mut buttons: Query<(&ControlButton, &mut BackgroundColor)>,
) {
    let revision = seq.0.revision();
    if *shown == Some(revision) {
        return;
    }
    *shown = Some(revision);

    let surface = ControlSurface::from_sequencer(&seq.0);
    for (kind, mut text) in &mut texts {
        match kind {
            PanelText::Step => set_first_section(&mut text, &surface.step_text),
            PanelText::PlayLabel => set_first_section(&mut text, &surface.play_label),
            PanelText::Coordinate => text.sections = coordinate_sections(&surface).to_vec(),
        }
    }
    for (button, mut bg) in &mut buttons {
        *bg = button.background(&surface).into();
    }
}

fn set_first_section(text: &mut Text, value: &str) {
    if let Some(section) = text.sections.first_mut() {
        section.value.clear();
        section.value.push_str(value);
    }
}

//! Bottom control panel of the sequencer scene.

use bevy::prelude::*;
use bevy_cubelab_frame::{hex_color, SceneMember};
use cubelab_sequencer_core::ControlSurface;

use crate::components::{ControlButton, PanelText};

pub const PANEL_COLOR: u32 = 0x16213e;
pub const STEP_COLOR: u32 = 0xe94560;
pub const PLAY_COLOR: u32 = 0x4ecdc4;
pub const PAUSE_COLOR: u32 = 0xff6b6b;
pub const RESET_COLOR: u32 = 0x533483;
pub const DISABLED_COLOR: u32 = 0x555555;

pub const AXIS_X_COLOR: u32 = 0xff6b6b;
pub const AXIS_Y_COLOR: u32 = 0x4ecdc4;
pub const AXIS_Z_COLOR: u32 = 0xffe66d;

impl ControlButton {
    pub const ALL: [ControlButton; 4] = [
        ControlButton::Previous,
        ControlButton::PlayPause,
        ControlButton::Next,
        ControlButton::Reset,
    ];

    pub fn is_enabled(self, surface: &ControlSurface) -> bool {
        match self {
            ControlButton::Previous => surface.previous_enabled,
            ControlButton::Next => surface.next_enabled,
            ControlButton::PlayPause | ControlButton::Reset => true,
        }
    }

    pub fn caption(self, surface: &ControlSurface) -> String {
        match self {
            ControlButton::Previous => "< Previous".to_string(),
            ControlButton::PlayPause => surface.play_label.clone(),
            ControlButton::Next => "Next >".to_string(),
            ControlButton::Reset => "Reset".to_string(),
        }
    }

    /// Background for the button in the given panel state.
    pub fn background(self, surface: &ControlSurface) -> Color {
        if !self.is_enabled(surface) {
            return hex_color(DISABLED_COLOR).with_alpha(0.5);
        }
        match self {
            ControlButton::Previous | ControlButton::Next => hex_color(STEP_COLOR),
            ControlButton::PlayPause if surface.is_playing => hex_color(PAUSE_COLOR),
            ControlButton::PlayPause => hex_color(PLAY_COLOR),
            ControlButton::Reset => hex_color(RESET_COLOR),
        }
    }
}

fn text_style(font_size: f32, color: Color) -> TextStyle {
    TextStyle {
        font_size,
        color,
        ..default()
    }
}

/// Sections of the coordinate readout: a caption and one coloured part per axis.
pub fn coordinate_sections(surface: &ControlSurface) -> [TextSection; 4] {
    let c = surface.coordinate;
    [
        TextSection::new("Current Position: ", text_style(18.0, Color::WHITE)),
        TextSection::new(format!("x = {}, ", c.x), text_style(18.0, hex_color(AXIS_X_COLOR))),
        TextSection::new(format!("y = {}, ", c.y), text_style(18.0, hex_color(AXIS_Y_COLOR))),
        TextSection::new(format!("z = {}", c.z), text_style(18.0, hex_color(AXIS_Z_COLOR))),
    ]
}

/// Spawn the panel pinned to the bottom `height` logical pixels.
pub fn spawn_control_panel(commands: &mut Commands, surface: &ControlSurface, height: f32) {
    commands
        .spawn((
            NodeBundle {
                style: Style {
                    position_type: PositionType::Absolute,
                    left: Val::Px(0.0),
                    right: Val::Px(0.0),
                    bottom: Val::Px(0.0),
                    height: Val::Px(height),
                    flex_direction: FlexDirection::Column,
                    justify_content: JustifyContent::Center,
                    padding: UiRect::axes(Val::Px(20.0), Val::Px(8.0)),
                    row_gap: Val::Px(6.0),
                    ..default()
                },
                background_color: hex_color(PANEL_COLOR).into(),
                ..default()
            },
            SceneMember,
            Name::new("sequencer panel"),
        ))
        .with_children(|panel| {
            panel
                .spawn(NodeBundle {
                    style: Style {
                        flex_direction: FlexDirection::Row,
                        justify_content: JustifyContent::SpaceBetween,
                        align_items: AlignItems::Center,
                        ..default()
                    },
                    ..default()
                })
                .with_children(|row| {
                    row.spawn((
                        TextBundle::from_section(
                            surface.step_text.clone(),
                            text_style(24.0, Color::WHITE),
                        ),
                        PanelText::Step,
                    ));
                    row.spawn(NodeBundle {
                        style: Style {
                            column_gap: Val::Px(10.0),
                            ..default()
                        },
                        ..default()
                    })
                    .with_children(|buttons| {
                        for button in ControlButton::ALL {
                            spawn_button(buttons, button, surface);
                        }
                    });
                });

            panel.spawn((
                TextBundle::from_sections(coordinate_sections(surface)),
                PanelText::Coordinate,
            ));
            panel.spawn(TextBundle::from_section(
                "Tip: z changes fastest, then y, then x. The green cube is the one just placed.",
                text_style(14.0, hex_color(0xcccccc)),
            ));
        });
}

fn spawn_button(parent: &mut ChildBuilder, button: ControlButton, surface: &ControlSurface) {
    parent
        .spawn((
            ButtonBundle {
                style: Style {
                    padding: UiRect::axes(Val::Px(20.0), Val::Px(10.0)),
                    ..default()
                },
                background_color: button.background(surface).into(),
                ..default()
            },
            button,
        ))
        .with_children(|b| {
            let text =
                TextBundle::from_section(button.caption(surface), text_style(16.0, Color::WHITE));
            if button == ControlButton::PlayPause {
                b.spawn((text, PanelText::PlayLabel));
            } else {
                b.spawn(text);
            }
        });
}

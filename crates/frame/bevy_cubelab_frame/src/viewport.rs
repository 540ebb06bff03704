//! Render-surface sizing.
//!
//! The 3D view fills the window minus a strip reserved at the bottom for
//! scene chrome (the sequencer's control panel). Bevy derives the projection
//! aspect ratio from the camera viewport, so keeping the viewport current is
//! enough to keep the aspect in sync.

use bevy::prelude::*;
use bevy::render::camera::Viewport;
use bevy::window::{PrimaryWindow, WindowResized};

use crate::camera::SceneCamera;

/// Logical pixels reserved below the 3D view.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct ViewportChrome {
    pub bottom: f32,
}

/// Physical position and size of the 3D view inside a window of `physical`
/// pixels. Never smaller than 1×1.
pub fn surface_rect(physical: UVec2, scale_factor: f32, chrome_bottom: f32) -> (UVec2, UVec2) {
    let reserved = (chrome_bottom.max(0.0) * scale_factor.max(0.0)).round() as u32;
    let width = physical.x.max(1);
    let height = physical.y.saturating_sub(reserved).max(1);
    (UVec2::ZERO, UVec2::new(width, height))
}

/// Whether a logical cursor position lies on the 3D view rather than on the
/// chrome strip below it. No cursor means the pointer is outside the window.
pub fn pointer_over_view(cursor: Option<Vec2>, window_height: f32, chrome_bottom: f32) -> bool {
    cursor.is_some_and(|c| c.y < window_height - chrome_bottom.max(0.0))
}

/// Fit every scene camera's viewport to the primary window minus the chrome.
pub fn sync_viewport_system(
    mut resized: EventReader<WindowResized>,
    chrome: Res<ViewportChrome>,
    windows: Query<&Window, With<PrimaryWindow>>,
    added: Query<(), Added<SceneCamera>>,
    mut cameras: Query<&mut Camera, With<SceneCamera>>,
) {
    let was_resized = resized.read().count() > 0;
    if !was_resized && !chrome.is_changed() && added.is_empty() {
        return;
    }
    let Ok(window) = windows.get_single() else {
        return;
    };
    let physical = UVec2::new(window.physical_width(), window.physical_height());

    for mut camera in &mut cameras {
        if chrome.bottom <= 0.0 {
            camera.viewport = None;
            continue;
        }
        let (physical_position, physical_size) =
            surface_rect(physical, window.scale_factor(), chrome.bottom);
        camera.viewport = Some(Viewport {
            physical_position,
            physical_size,
            ..default()
        });
    }
    trace!(
        "viewport synced to {}x{} with {} px chrome",
        physical.x,
        physical.y,
        chrome.bottom
    );
}

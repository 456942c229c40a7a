//! Portfolio overlay and diagnostics UI.
//!
//! The overlay renders the intro card, the active section's content, and the
//! control hints. A separate diagnostics window (toggled with T) shows FPS,
//! vehicle state, and live tuning sliders.

mod diagnostics;

use bevy::{diagnostic::FrameTimeDiagnosticsPlugin, prelude::*};
use bevy_egui::input::egui_wants_any_keyboard_input;
use bevy_egui::{EguiContexts, EguiPlugin, EguiPrimaryContextPass, egui};
use leafwing_input_manager::prelude::*;

use crate::{
    input::DriveAction,
    world::{ActiveSection, PortfolioContent, SectionLine},
};

/// How long the loading splash stays up, in seconds.
const LOADING_SPLASH_SECS: f32 = 1.5;

/// Resource controlling whether the overlay is visible.
#[derive(Resource)]
pub struct UiVisible(pub bool);

impl Default for UiVisible {
    fn default() -> Self {
        Self(true)
    }
}

/// Resource tracking whether the diagnostics window is open.
#[derive(Resource, Default)]
pub struct DiagnosticsOpen(pub bool);

/// Countdown for the startup splash.
#[derive(Resource)]
struct LoadingSplash(Timer);

/// Plugin for the portfolio UI overlay.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin::default())
            .add_plugins(FrameTimeDiagnosticsPlugin::default())
            .init_resource::<UiVisible>()
            .init_resource::<DiagnosticsOpen>()
            .init_resource::<diagnostics::VehicleHistory>()
            .insert_resource(LoadingSplash(Timer::from_seconds(
                LOADING_SPLASH_SECS,
                TimerMode::Once,
            )))
            .add_systems(
                Update,
                handle_ui_toggles.run_if(not(egui_wants_any_keyboard_input)),
            )
            .add_systems(
                EguiPrimaryContextPass,
                (
                    loading_splash_system,
                    overlay_system.run_if(|visible: Res<UiVisible>| visible.0),
                    diagnostics::diagnostics_window_system
                        .run_if(|open: Res<DiagnosticsOpen>| open.0),
                ),
            );
    }
}

/// Toggle the overlay with Q and the diagnostics window with T.
///
/// Skipped while egui owns the keyboard so typing in a text field cannot
/// flip the windows.
fn handle_ui_toggles(
    action_query: Query<&ActionState<DriveAction>>,
    mut visible: ResMut<UiVisible>,
    mut diagnostics_open: ResMut<DiagnosticsOpen>,
) {
    let Ok(action_state) = action_query.single() else {
        return;
    };

    if action_state.just_pressed(&DriveAction::ToggleUi) {
        visible.0 = !visible.0;
    }
    if action_state.just_pressed(&DriveAction::ToggleDiagnostics) {
        diagnostics_open.0 = !diagnostics_open.0;
    }
}

/// Full-screen splash shown for the first moments after startup.
fn loading_splash_system(
    mut contexts: EguiContexts,
    time: Res<Time>,
    mut splash: ResMut<LoadingSplash>,
) -> Result {
    if splash.0.tick(time.delta()).is_finished() {
        return Ok(());
    }
    let ctx = contexts.ctx_mut()?;

    egui::Area::new(egui::Id::new("loading_splash"))
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(egui::RichText::new("JIBIN JOSE").size(36.0).strong());
                ui.label(egui::RichText::new("Software Engineer").size(18.0));
                ui.add_space(8.0);
                ui.label("Loading world...");
            });
        });

    Ok(())
}

/// Render the intro card, active section panel, and control hints.
fn overlay_system(
    mut contexts: EguiContexts,
    active: Res<ActiveSection>,
    content: Res<PortfolioContent>,
) -> Result {
    let ctx = contexts.ctx_mut()?;

    // Intro card, top-left.
    egui::Window::new("intro")
        .title_bar(false)
        .resizable(false)
        .anchor(egui::Align2::LEFT_TOP, [10.0, 10.0])
        .show(ctx, |ui| {
            ui.heading(egui::RichText::new("JIBIN JOSE").strong());
            ui.label("Software Engineer");
            ui.label(
                egui::RichText::new("Drive to a platform to explore a section")
                    .small()
                    .weak(),
            );
        });

    // Active section content, right side.
    if let Some(section) = active.0.and_then(|index| content.0.get(index)) {
        let [r, g, b, _] = section.color.to_srgba().to_u8_array();
        let accent = egui::Color32::from_rgb(r, g, b);

        egui::Window::new(section.title)
            .anchor(egui::Align2::RIGHT_TOP, [-10.0, 10.0])
            .resizable(false)
            .show(ctx, |ui| {
                ui.heading(egui::RichText::new(section.title).color(accent));
                ui.separator();
                for line in section.body {
                    match line {
                        SectionLine::Heading(text) => {
                            ui.add_space(4.0);
                            ui.label(egui::RichText::new(*text).strong());
                        }
                        SectionLine::Text(text) => {
                            ui.label(*text);
                        }
                        SectionLine::Bullet(text) => {
                            ui.label(format!("  • {text}"));
                        }
                    }
                }
            });
    }

    // Control hints, bottom-left.
    egui::Window::new("controls")
        .title_bar(false)
        .resizable(false)
        .anchor(egui::Align2::LEFT_BOTTOM, [10.0, -10.0])
        .show(ctx, |ui| {
            ui.label(
                egui::RichText::new(
                    "WASD/arrows drive · Space brake · F jump · R reset · T diagnostics · Q hide",
                )
                .small()
                .weak(),
            );
        });

    Ok(())
}

#[cfg(test)]
mod tests {
    use bevy::ecs::system::RunSystemOnce;

    use super::*;

    #[test]
    fn toggle_actions_flip_the_ui_flags() {
        let mut world = World::new();
        world.init_resource::<UiVisible>();
        world.init_resource::<DiagnosticsOpen>();

        let mut action_state = ActionState::<DriveAction>::default();
        action_state.press(&DriveAction::ToggleUi);
        action_state.press(&DriveAction::ToggleDiagnostics);
        world.spawn(action_state);

        world.run_system_once(handle_ui_toggles).unwrap();

        // Overlay starts visible, diagnostics start closed.
        assert!(!world.resource::<UiVisible>().0);
        assert!(world.resource::<DiagnosticsOpen>().0);
    }
}

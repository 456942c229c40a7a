//! Diagnostics window.
//!
//! Displays FPS, vehicle state, per-wheel suspension data, a speed plot, and
//! live tuning sliders.

use std::collections::VecDeque;

use bevy::{
    diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin},
    ecs::system::SystemParam,
    gizmos::config::GizmoConfigStore,
    prelude::*,
};
use bevy_egui::{EguiContexts, egui};
use egui_extras::{Column, TableBuilder};
use egui_plot::{Line, Plot, PlotPoints};

use crate::{
    physics::{is_physics_debug_enabled, toggle_physics_debug},
    vehicle::{Vehicle, VehicleConfig, VehicleInput, VehicleState},
};

/// Number of samples to keep in vehicle history.
const VEHICLE_HISTORY_SIZE: usize = 120;

/// Historical data for vehicle diagnostics plots.
#[derive(Resource, Default)]
pub struct VehicleHistory {
    /// Speed history (m/s).
    speed: VecDeque<f32>,
}

impl VehicleHistory {
    /// Push a new sample, maintaining the history size limit.
    fn push_sample(&mut self, speed: f32) {
        self.speed.push_back(speed);
        if self.speed.len() > VEHICLE_HISTORY_SIZE {
            self.speed.pop_front();
        }
    }
}

/// Resources for the diagnostics window.
#[derive(SystemParam)]
pub(super) struct DiagnosticsParams<'w, 's> {
    pub diagnostics: Res<'w, DiagnosticsStore>,
    pub config_store: ResMut<'w, GizmoConfigStore>,
    pub vehicle_query: Query<
        'w,
        's,
        (
            &'static Vehicle,
            &'static VehicleState,
            &'static VehicleInput,
            &'static mut VehicleConfig,
        ),
    >,
    pub vehicle_history: ResMut<'w, VehicleHistory>,
}

/// Render the diagnostics window.
pub(super) fn diagnostics_window_system(
    mut contexts: EguiContexts,
    mut diag: DiagnosticsParams,
) -> Result {
    let ctx = contexts.ctx_mut()?;

    egui::Window::new("Diagnostics")
        .default_pos([10.0, 120.0])
        .show(ctx, |ui| {
            let fps = diag
                .diagnostics
                .get(&FrameTimeDiagnosticsPlugin::FPS)
                .and_then(bevy::diagnostic::Diagnostic::smoothed)
                .unwrap_or(0.0);
            ui.label(format!("FPS: {fps:.0}"));

            let mut debug_enabled = is_physics_debug_enabled(&diag.config_store);
            if ui
                .checkbox(&mut debug_enabled, "Collider visualization")
                .changed()
            {
                toggle_physics_debug(&mut diag.config_store);
            }

            let Some((vehicle, state, input, mut config)) =
                diag.vehicle_query.iter_mut().next()
            else {
                return;
            };
            diag.vehicle_history.push_sample(state.speed);

            ui.separator();
            render_vehicle_diagnostics(
                ui,
                vehicle,
                state,
                input,
                &mut config,
                &diag.vehicle_history,
            );
        });

    Ok(())
}

/// Render vehicle diagnostics section.
fn render_vehicle_diagnostics(
    ui: &mut egui::Ui,
    vehicle: &Vehicle,
    state: &VehicleState,
    input: &VehicleInput,
    config: &mut VehicleConfig,
    history: &VehicleHistory,
) {
    ui.heading(format!("Vehicle: {}", vehicle.name));

    egui::ScrollArea::vertical()
        .max_height(ui.available_height() - 20.0)
        .show(ui, |ui| {
            // Basic state table.
            TableBuilder::new(ui)
                .column(Column::exact(80.0))
                .column(Column::exact(140.0))
                .body(|mut body| {
                    body.row(18.0, |mut row| {
                        row.col(|ui| {
                            ui.label("Speed:");
                        });
                        row.col(|ui| {
                            ui.label(format!(
                                "{:.1} m/s ({:.0} km/h)",
                                state.speed,
                                state.speed * 3.6
                            ));
                        });
                    });
                    body.row(18.0, |mut row| {
                        row.col(|ui| {
                            ui.label("Grounded:");
                        });
                        row.col(|ui| {
                            ui.label(if state.grounded { "Yes" } else { "No" });
                        });
                    });
                    body.row(18.0, |mut row| {
                        row.col(|ui| {
                            ui.label("Input:");
                        });
                        row.col(|ui| {
                            let flags = &input.0;
                            let mut held = String::new();
                            for (flag, label) in [
                                (flags.forward, "fwd"),
                                (flags.backward, "back"),
                                (flags.steer_left, "left"),
                                (flags.steer_right, "right"),
                                (flags.brake, "brake"),
                                (flags.jump, "jump"),
                            ] {
                                if flag {
                                    if !held.is_empty() {
                                        held.push(' ');
                                    }
                                    held.push_str(label);
                                }
                            }
                            ui.label(if held.is_empty() { "idle".into() } else { held });
                        });
                    });
                    body.row(18.0, |mut row| {
                        row.col(|ui| {
                            ui.label("Force:");
                        });
                        row.col(|ui| {
                            ui.label(format!("|{:.0}| N", state.total_force.length()));
                        });
                    });
                });

            ui.separator();

            // Per-wheel suspension table.
            ui.label("Wheels:");
            TableBuilder::new(ui)
                .column(Column::exact(30.0))
                .column(Column::exact(60.0))
                .column(Column::exact(70.0))
                .column(Column::exact(70.0))
                .header(16.0, |mut header| {
                    for label in ["#", "Contact", "Compress", "Force"] {
                        header.col(|ui| {
                            ui.label(egui::RichText::new(label).small().strong());
                        });
                    }
                })
                .body(|mut body| {
                    for (index, wheel) in state.wheels.iter().enumerate() {
                        body.row(18.0, |mut row| {
                            row.col(|ui| {
                                ui.label(format!("{index}"));
                            });
                            row.col(|ui| {
                                ui.label(if wheel.in_contact { "yes" } else { "no" });
                            });
                            row.col(|ui| {
                                ui.label(format!("{:.3} m", wheel.compression));
                            });
                            row.col(|ui| {
                                ui.label(format!("{:.0} N", wheel.suspension_force));
                            });
                        });
                    }
                });

            ui.separator();

            // Speed plot.
            ui.label("Speed history:");
            let speed_points: PlotPoints = history
                .speed
                .iter()
                .enumerate()
                .map(|(i, &v)| [i as f64, f64::from(v)])
                .collect();
            Plot::new("speed_plot")
                .height(60.0)
                .show_axes(false)
                .allow_drag(false)
                .allow_zoom(false)
                .allow_scroll(false)
                .show(ui, |plot_ui| {
                    plot_ui.line(Line::new("speed", speed_points).color(egui::Color32::LIGHT_BLUE));
                });

            ui.separator();

            // Tuning sliders, applied live to the running config.
            ui.collapsing("Drive tuning", |ui| {
                ui.add(
                    egui::Slider::new(&mut config.0.engine_force, 100.0..=5000.0)
                        .text("Engine force"),
                );
                ui.add(
                    egui::Slider::new(&mut config.0.steer_angle, 0.1..=1.2).text("Steer angle"),
                );
                ui.add(
                    egui::Slider::new(&mut config.0.brake_torque, 50.0..=3000.0)
                        .text("Brake torque"),
                );
                ui.add(
                    egui::Slider::new(&mut config.0.jump_impulse, 0.0..=8000.0)
                        .text("Jump impulse"),
                );
            });
        });
}

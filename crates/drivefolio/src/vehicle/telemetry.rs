//! Vehicle physics telemetry logging.
//!
//! Outputs CSV data for tuning analysis. The file is reset on startup when
//! telemetry is enabled (`--telemetry` on native).

use std::{fs::File, io::Write};

use avian3d::prelude::*;
use bevy::prelude::*;

use super::components::{Vehicle, VehicleConfig, VehicleInput, VehicleState};

/// Telemetry output file path.
const TELEMETRY_PATH: &str = "telemetry.csv";

/// Whether telemetry is written this run.
#[derive(Resource, Default)]
pub struct TelemetryEnabled(pub bool);

/// Snapshot of one tick's physics state for telemetry logging.
pub struct TelemetrySnapshot {
    pub elapsed: f32,
    pub dt: f32,
    pub engine_force: f32,
    pub steer_angle: f32,
    pub brake_torque: f32,
    pub jump: bool,
    pub grounded: bool,
    pub speed: f32,
    pub linear_vel: Vec3,
    pub yaw_rate: f32,
    pub total_force: Vec3,
    /// Per-wheel (compression, suspension force), front pair first.
    pub wheels: Vec<(f32, f32)>,
}

/// Macro to define the CSV schema and generate the telemetry functions.
///
/// Generates both `reset_telemetry()` and `emit_telemetry()` from a single
/// schema definition, keeping column names and formats in sync.
macro_rules! define_telemetry {
    (
        columns: { $( $name:ident : $fmt:literal ),* $(,)? },
        prelude: |$snapshot:ident| { $( $prelude:stmt );* $(;)? },
        row_values: { $( $val:expr ),* $(,)? }
    ) => {
        /// Reset the telemetry file (call once on startup).
        pub fn reset_telemetry() {
            const CSV_HEADER: &str = concat!( $( stringify!($name), "," ),* );
            if let Ok(mut file) = File::create(TELEMETRY_PATH) {
                let header = CSV_HEADER.trim_end_matches(',');
                let _ = writeln!(file, "{header}");
            }
        }

        /// Append one row of telemetry data.
        #[allow(clippy::redundant_closure_call)]
        pub fn emit_telemetry($snapshot: &TelemetrySnapshot) {
            use std::fs::OpenOptions;

            // Execute prelude to compute derived values.
            $( $prelude )*

            let line = format!( concat!( $( $fmt, "," ),* ), $( $val ),* );
            let line = line.trim_end_matches(',');

            if let Ok(mut file) = OpenOptions::new()
                .create(true)
                .append(true)
                .open(TELEMETRY_PATH)
            {
                let _ = writeln!(file, "{line}");
            }
        }
    };
}

define_telemetry! {
    columns: {
        t: "{:.4}",
        dt: "{:.5}",
        engine: "{:.1}",
        steer: "{:.3}",
        brake: "{:.1}",
        jump: "{}",
        grounded: "{}",
        speed: "{:.2}",
        vel_x: "{:.2}",
        vel_y: "{:.2}",
        vel_z: "{:.2}",
        yaw_rate: "{:.3}",
        force_x: "{:.1}",
        force_y: "{:.1}",
        force_z: "{:.1}",
        w0_comp: "{:.3}",
        w0_force: "{:.1}",
        w1_comp: "{:.3}",
        w1_force: "{:.1}",
        w2_comp: "{:.3}",
        w2_force: "{:.1}",
        w3_comp: "{:.3}",
        w3_force: "{:.1}",
    },
    prelude: |t| {
        let wheel = |i: usize| -> (f32, f32) {
            t.wheels.get(i).copied().unwrap_or((0.0, 0.0))
        };
        let (w0c, w0f) = wheel(0);
        let (w1c, w1f) = wheel(1);
        let (w2c, w2f) = wheel(2);
        let (w3c, w3f) = wheel(3);
    },
    row_values: {
        t.elapsed,
        t.dt,
        t.engine_force,
        t.steer_angle,
        t.brake_torque,
        t.jump as u8,
        t.grounded as u8,
        t.speed,
        t.linear_vel.x,
        t.linear_vel.y,
        t.linear_vel.z,
        t.yaw_rate,
        t.total_force.x,
        t.total_force.y,
        t.total_force.z,
        w0c,
        w0f,
        w1c,
        w1f,
        w2c,
        w2f,
        w3c,
        w3f,
    }
}

/// Emit one telemetry row per vehicle per fixed tick.
#[allow(clippy::type_complexity)]
pub fn emit_vehicle_telemetry(
    time: Res<Time<Fixed>>,
    query: Query<
        (
            &VehicleConfig,
            &VehicleInput,
            &VehicleState,
            &LinearVelocity,
            &AngularVelocity,
        ),
        With<Vehicle>,
    >,
) {
    for (config, input, state, linear_velocity, angular_velocity) in &query {
        let commands = super::core::resolve_commands(&input.0, &config.0);
        emit_telemetry(&TelemetrySnapshot {
            elapsed: time.elapsed_secs(),
            dt: time.delta_secs(),
            engine_force: commands.engine_force,
            steer_angle: commands.steer_angle,
            brake_torque: commands.brake_torque,
            jump: commands.jump,
            grounded: state.grounded,
            speed: state.speed,
            linear_vel: linear_velocity.0,
            yaw_rate: angular_velocity.0.y,
            total_force: state.total_force,
            wheels: state
                .wheels
                .iter()
                .map(|w| (w.compression, w.suspension_force))
                .collect(),
        });
    }
}

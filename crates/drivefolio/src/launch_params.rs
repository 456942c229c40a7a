//! Launch parameter parsing.
//!
//! On native, parameters are parsed from command-line arguments using clap.
//! On WASM, defaults are used (CLI argument parsing is not available).

use bevy::prelude::*;

/// Default vehicle preset name.
const DEFAULT_VEHICLE: &str = "roadster";

/// Launch parameters for the portfolio.
#[derive(Resource, Debug)]
pub struct LaunchParams {
    /// Vehicle preset name (a built-in, or a RON file under `assets/vehicles/`).
    pub vehicle: String,
    /// Write per-tick physics telemetry to `telemetry.csv`.
    pub telemetry: bool,
    /// Spawn position override.
    pub spawn: Option<Vec3>,
}

impl Default for LaunchParams {
    fn default() -> Self {
        Self {
            vehicle: DEFAULT_VEHICLE.to_owned(),
            telemetry: false,
            spawn: None,
        }
    }
}

#[cfg(not(target_family = "wasm"))]
mod native {
    use clap::Parser;

    use super::*;

    /// Parse an `x,y,z` triple into a `Vec3`.
    fn parse_vec3(s: &str) -> Result<Vec3, String> {
        let parts: Vec<&str> = s.split(',').collect();
        if parts.len() != 3 {
            return Err(format!("expected x,y,z, got '{s}'"));
        }

        let mut components = [0.0; 3];
        for (component, part) in components.iter_mut().zip(&parts) {
            *component = part
                .trim()
                .parse::<f32>()
                .map_err(|e| format!("invalid component '{part}': {e}"))?;
        }

        Ok(Vec3::from_array(components))
    }

    #[derive(Parser)]
    #[command(about = "Drivable 3D portfolio")]
    struct CliArgs {
        /// Vehicle preset name.
        #[arg(long, default_value = DEFAULT_VEHICLE)]
        vehicle: String,

        /// Write per-tick physics telemetry to telemetry.csv.
        #[arg(long)]
        telemetry: bool,

        /// Spawn position override (format: x,y,z).
        #[arg(long, value_parser = parse_vec3)]
        spawn: Option<Vec3>,
    }

    pub fn parse() -> LaunchParams {
        let args = CliArgs::parse();
        LaunchParams {
            vehicle: args.vehicle,
            telemetry: args.telemetry,
            spawn: args.spawn,
        }
    }
}

/// Parse launch parameters from CLI args (native) or use defaults (WASM).
pub fn parse() -> LaunchParams {
    #[cfg(not(target_family = "wasm"))]
    {
        native::parse()
    }
    #[cfg(target_family = "wasm")]
    {
        LaunchParams::default()
    }
}

//! Vehicle preset loading.
//!
//! Presets are RON files describing a full [`VehicleParams`] tuning plus
//! spawn metadata. The built-in presets are embedded in the binary; on native
//! a file of the same name under `assets/vehicles/` takes precedence, which
//! makes tuning iteration a save-and-restart loop instead of a rebuild.

use std::fmt;

use glam::Vec3;
use serde::Deserialize;

use crate::vehicle::core::VehicleParams;

/// Result type for preset operations.
pub type Result<T> = std::result::Result<T, PresetError>;

/// Errors that can occur while loading a vehicle preset.
#[derive(Debug)]
pub enum PresetError {
    /// No preset with the requested name exists.
    Unknown {
        /// The requested preset name.
        name: String,
    },
    /// RON deserialization failed.
    Parse {
        /// The preset name being parsed.
        name: String,
        /// The error message.
        message: String,
    },
    /// The preset parsed but its values cannot form a working car.
    Invalid {
        /// The preset name.
        name: String,
        /// Description of what was invalid.
        detail: String,
    },
}

impl fmt::Display for PresetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PresetError::Unknown { name } => {
                write!(f, "unknown vehicle preset '{name}'")
            }
            PresetError::Parse { name, message } => {
                write!(f, "failed to parse vehicle preset '{name}': {message}")
            }
            PresetError::Invalid { name, detail } => {
                write!(f, "vehicle preset '{name}' is invalid: {detail}")
            }
        }
    }
}

impl std::error::Error for PresetError {}

/// A named vehicle tuning.
#[derive(Clone, Debug, Deserialize)]
pub struct VehiclePreset {
    /// Display name.
    pub name: String,
    /// Short description of the preset's character.
    pub description: String,
    /// World-space spawn position.
    pub spawn_position: Vec3,
    /// The full physics tuning.
    pub params: VehicleParams,
}

/// Built-in presets embedded in the binary.
const BUILTIN_PRESETS: &[(&str, &str)] = &[
    ("roadster", include_str!("../assets/vehicles/roadster.ron")),
    ("dunebug", include_str!("../assets/vehicles/dunebug.ron")),
];

/// Names of all built-in presets, in definition order.
pub fn builtin_names() -> impl Iterator<Item = &'static str> {
    BUILTIN_PRESETS.iter().map(|(name, _)| *name)
}

/// Load a preset by name.
///
/// On native, a readable `assets/vehicles/<name>.ron` overrides the embedded
/// copy. Unknown names fail rather than silently falling back.
pub fn load_preset(name: &str) -> Result<VehiclePreset> {
    #[cfg(not(target_family = "wasm"))]
    {
        let path = format!("assets/vehicles/{name}.ron");
        if let Ok(source) = std::fs::read_to_string(&path) {
            tracing::info!("Loading vehicle preset from {path}");
            return parse_preset(name, &source);
        }
    }

    let source = BUILTIN_PRESETS
        .iter()
        .find(|(builtin, _)| *builtin == name)
        .map(|(_, source)| *source)
        .ok_or_else(|| PresetError::Unknown {
            name: name.to_string(),
        })?;

    parse_preset(name, source)
}

/// Parse and validate a preset from RON source.
fn parse_preset(name: &str, source: &str) -> Result<VehiclePreset> {
    let preset: VehiclePreset = ron::from_str(source).map_err(|e| PresetError::Parse {
        name: name.to_string(),
        message: e.to_string(),
    })?;
    validate(&preset)?;
    Ok(preset)
}

/// Reject presets that cannot form a working car.
fn validate(preset: &VehiclePreset) -> Result<()> {
    let invalid = |detail: String| PresetError::Invalid {
        name: preset.name.clone(),
        detail,
    };

    let params = &preset.params;
    if params.chassis_mass <= 0.0 {
        return Err(invalid(format!(
            "chassis_mass must be positive, got {}",
            params.chassis_mass
        )));
    }
    if params.wheel_radius <= 0.0 {
        return Err(invalid(format!(
            "wheel_radius must be positive, got {}",
            params.wheel_radius
        )));
    }
    if params.wheels.is_empty() {
        return Err(invalid("preset has no wheels".to_string()));
    }
    if !params.wheels.iter().any(|w| w.driven) {
        return Err(invalid("no wheel is marked driven".to_string()));
    }
    if !params.wheels.iter().any(|w| w.steered) {
        return Err(invalid("no wheel is marked steered".to_string()));
    }
    for (i, wheel) in params.wheels.iter().enumerate() {
        if wheel.rest_length <= 0.0 || wheel.travel <= 0.0 {
            return Err(invalid(format!(
                "wheel {i} suspension lengths must be positive"
            )));
        }
        if wheel.stiffness <= 0.0 {
            return Err(invalid(format!("wheel {i} stiffness must be positive")));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_presets_parse_and_validate() {
        for (name, source) in BUILTIN_PRESETS {
            let preset = parse_preset(name, source).unwrap();
            assert_eq!(preset.params.wheels.len(), 4, "{name} should have 4 wheels");
            // Only the front pair steers; at least one wheel drives.
            let steered: Vec<bool> = preset.params.wheels.iter().map(|w| w.steered).collect();
            assert_eq!(steered, vec![true, true, false, false], "{name}");
            assert!(preset.params.wheels.iter().any(|w| w.driven), "{name}");
        }
    }

    #[test]
    fn unknown_preset_is_an_error() {
        let err = load_preset("submarine").unwrap_err();
        assert!(matches!(err, PresetError::Unknown { .. }));
    }

    #[test]
    fn invalid_preset_is_rejected() {
        let source = r#"(
            name: "Broken",
            description: "no wheels",
            spawn_position: (0.0, 2.0, 0.0),
            params: (
                chassis_half_extents: (0.6, 0.25, 1.0),
                chassis_mass: 500.0,
                wheel_radius: 0.35,
                wheel_width: 0.3,
                engine_force: 1500.0,
                steer_angle: 0.5,
                brake_torque: 700.0,
                jump_impulse: 2000.0,
                wheels: [],
            ),
        )"#;
        let err = parse_preset("broken", source).unwrap_err();
        assert!(matches!(err, PresetError::Invalid { .. }));
    }
}

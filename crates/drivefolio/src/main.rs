//! Drivable 3D portfolio using Bevy.
//!
//! Spawns a raycast car on a dark reflective floor with one platform per
//! portfolio section; driving onto a platform opens its content.

use bevy::prelude::*;

use drivefolio::{AppPlugin, launch_params, vehicle::telemetry};

fn main() {
    // Initialize tracing for native platforms.
    #[cfg(not(target_family = "wasm"))]
    {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
        tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer())
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .init();
    }

    // Initialize tracing for WASM (logs to browser console).
    #[cfg(target_family = "wasm")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }

    let launch = launch_params::parse();
    if launch.telemetry {
        telemetry::reset_telemetry();
    }

    let mut app = App::new();

    #[allow(unused_mut)]
    let mut window = Window {
        title: "drivefolio".to_string(),
        resolution: (1920, 1080).into(),
        position: WindowPosition::Centered(MonitorSelection::Primary),
        ..Default::default()
    };

    // WASM: Fit canvas to parent element and prevent browser event handling.
    #[cfg(target_family = "wasm")]
    {
        window.fit_canvas_to_parent = true;
        window.prevent_default_event_handling = true;
    }

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(window),
        ..Default::default()
    }));

    app.insert_resource(telemetry::TelemetryEnabled(launch.telemetry))
        .insert_resource(launch);

    app.add_plugins(AppPlugin).run();
}

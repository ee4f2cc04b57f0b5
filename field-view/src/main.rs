//! Application entry point for the ambient particle field viewer.
//!
//! This binary sets up logging and eframe/egui and delegates all
//! rendering and interaction to [`Viewer`] from the `viewer` module.

mod viewer;

use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};
use viewer::Viewer;

/// Starts the native eframe application.
///
/// Logging goes through `tracing` with an env-filter (`RUST_LOG`),
/// defaulting to `info`. The main window is titled `"Particle Field"`
/// and all per-frame work happens in [`Viewer`].
///
/// ### Returns
/// - `Ok(())` if the application runs to completion without errors.
/// - `Err` if eframe fails to create the native window or event loop;
///   nothing is left running in that case.
fn main() -> eframe::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_target(true).init();

    info!("starting particle field viewer");

    let options = eframe::NativeOptions::default();

    eframe::run_native(
        "Particle Field",
        options,
        Box::new(|_cc| {
            // Construct the root app state for the viewer.
            Ok(Box::new(Viewer::new()))
        }),
    )
}

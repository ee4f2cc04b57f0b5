//! Core 2-D ambient particle field simulation library.
//!
//! Main components:
//! - [`particle`] — particles and particle sets.
//! - [`phases`] — per-step integration and proximity-link passes.
//! - [`config`] — field parameters (spawn ranges, link falloff).
//! - [`link_buffer`] — reusable storage for the links of one frame.
//! - [`bounds`] — the rectangle the field lives in.
//! - [`clock`] — frame pacing decoupled from any real display.
//! - [`sim`] — the assembled [`sim::FieldSim`] component.
//! - [`types`] — shared type aliases and IDs.

pub mod bounds;
pub mod clock;
pub mod config;
pub mod link_buffer;
pub mod particle;
pub mod phases;
pub mod sim;
pub mod types;

//! The assembled particle field component.
//!
//! [`FieldSim`] bundles the particle set, field bounds, configuration,
//! and the per-frame link scratch buffer behind an explicit
//! init/step/resize API — no ambient globals, no hidden clock. The
//! host (a windowed viewer, a test, a headless driver) owns the pacing
//! and calls [`FieldSim::step`] once per frame.

use crate::{
    bounds::Bounds,
    config::Config,
    link_buffer::{Link, LinkBuffer},
    particle::{Particle, ParticleSet},
    phases,
};
use rand::Rng;

#[derive(Debug)]
pub struct FieldSim {
    particles: ParticleSet,
    links: LinkBuffer,
    cfg: Config,
    bounds: Bounds,
}

impl FieldSim {
    /// Spawns a fresh field of `cfg.count` particles over `bounds`.
    ///
    /// The RNG is injected: pass `rand::rng()` for an ambient field or
    /// a seeded [`rand::rngs::StdRng`] for a reproducible one.
    pub fn new(cfg: Config, bounds: Bounds, rng: &mut impl Rng) -> Self {
        let particles = ParticleSet::spawn_uniform(&cfg, bounds, rng);
        let links = LinkBuffer::with_capacity(cfg.count * 4);
        Self {
            particles,
            links,
            cfg,
            bounds,
        }
    }

    /// Builds a field from explicit particles, bypassing the spawn rules.
    ///
    /// Intended for tests and demos that need exact starting states.
    pub fn from_particles(cfg: Config, bounds: Bounds, points: Vec<Particle>) -> Self {
        let links = LinkBuffer::with_capacity(points.len() * 4);
        Self {
            particles: ParticleSet::from_particles(points),
            links,
            cfg,
            bounds,
        }
    }

    /// Advances the field by one frame.
    ///
    /// Runs [`phases::integrate_phase`] and then rebuilds the links
    /// with [`phases::link_phase`]; afterwards [`FieldSim::links`]
    /// reflects the new positions.
    pub fn step(&mut self) {
        phases::integrate_phase(&mut self.particles, self.bounds);
        phases::link_phase(&self.particles, &self.cfg, &mut self.links);
    }

    /// Updates the field bounds to a new viewport size.
    ///
    /// Particle positions are deliberately left unchanged; anything now
    /// outside the smaller bounds drifts back in through boundary
    /// reflection over the following steps.
    pub fn resize(&mut self, width: f32, height: f32) {
        let bounds = Bounds::new(width, height);
        if bounds != self.bounds {
            tracing::debug!(width, height, "field bounds resized");
            self.bounds = bounds;
        }
    }

    /// Replaces all particles with a fresh spawn from the current
    /// config and bounds. Pending links are dropped until the next
    /// [`FieldSim::step`].
    pub fn respawn(&mut self, rng: &mut impl Rng) {
        self.particles = ParticleSet::spawn_uniform(&self.cfg, self.bounds, rng);
        self.links.clear();
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles.points
    }

    pub fn links(&self) -> &[Link] {
        self.links.links()
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.cfg
    }
}

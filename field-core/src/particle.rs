use crate::bounds::Bounds;
use crate::config::Config;
use glam::Vec2;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub opacity: f32,
}

#[derive(Debug)]
pub struct ParticleSet {
    pub points: Vec<Particle>,
}

impl ParticleSet {
    pub fn from_particles(points: Vec<Particle>) -> Self {
        Self { points }
    }

    /// Spawns `cfg.count` particles uniformly over `bounds`.
    ///
    /// Radius, opacity, and per-axis velocity are drawn uniformly from
    /// the ranges in `cfg`. The RNG is injected so callers can seed it
    /// for reproducible fields.
    pub fn spawn_uniform(cfg: &Config, bounds: Bounds, rng: &mut impl Rng) -> Self {
        let points = (0..cfg.count)
            .map(|_| {
                let x = rng.random_range(0.0..=bounds.width);
                let y = rng.random_range(0.0..=bounds.height);
                let dx = rng.random_range(-cfg.speed_max..=cfg.speed_max);
                let dy = rng.random_range(-cfg.speed_max..=cfg.speed_max);
                Particle {
                    pos: Vec2::new(x, y),
                    vel: Vec2::new(dx, dy),
                    radius: rng.random_range(cfg.radius_min..=cfg.radius_max),
                    opacity: rng.random_range(cfg.opacity_min..=cfg.opacity_max),
                }
            })
            .collect();

        tracing::debug!(
            count = cfg.count,
            width = bounds.width,
            height = bounds.height,
            "spawned particle field"
        );

        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

//! Per-step passes over the particle field.
//!
//! One frame of the simulation runs:
//! 1. [`integrate_phase`] — every particle advances by its velocity and
//!    outward motion is reflected at the field bounds.
//! 2. [`link_phase`] — proximity links are recomputed from scratch for
//!    every unordered pair into a reusable [`LinkBuffer`].

use crate::{bounds::Bounds, config::Config, link_buffer::LinkBuffer, particle::ParticleSet};

/// Advances every particle by one step and reflects at the bounds.
///
/// For each particle:
///
/// 1. Adds its velocity to its position.
/// 2. If the new `x` lies outside `[0, bounds.width]` **and** the
///    particle is moving outward, negates `dx`. The same check runs
///    independently for `y` against `bounds.height`.
///
/// Positions are never clamped: a particle may sit outside the bounds
/// by at most one step's displacement before the reflected velocity
/// carries it back. The outward-motion guard also covers particles
/// stranded outside by a shrink resize — their velocity is flipped
/// once and they drift back in, instead of having the sign negated
/// again on every step spent outside.
///
/// ### Parameters
/// - `particles` - The set to advance; positions and velocities are
///   updated in place.
/// - `bounds` - Current field bounds to reflect against.
pub fn integrate_phase(particles: &mut ParticleSet, bounds: Bounds) {
    for p in particles.points.iter_mut() {
        p.pos += p.vel;

        if (p.pos.x < 0.0 && p.vel.x < 0.0) || (p.pos.x > bounds.width && p.vel.x > 0.0) {
            p.vel.x = -p.vel.x;
        }
        if (p.pos.y < 0.0 && p.vel.y < 0.0) || (p.pos.y > bounds.height && p.vel.y > 0.0) {
            p.vel.y = -p.vel.y;
        }
    }
}

/// Recomputes the proximity links for the current particle positions.
///
/// Clears `links`, then for every unordered pair of particles computes
/// the Euclidean distance and records a link when it is strictly below
/// `cfg.link_radius`, with opacity [`link_alpha`]. This is an O(N²)
/// pass over the pairs, which is fine at the default count
/// (55 particles, 1485 pairs).
///
/// ### Parameters
/// - `particles` - The set to scan; only read access is required.
/// - `cfg` - Provides the link radius and peak alpha.
/// - `links` - Scratch buffer receiving this frame's links.
pub fn link_phase(particles: &ParticleSet, cfg: &Config, links: &mut LinkBuffer) {
    links.clear();

    let pts = &particles.points;
    for a in 0..pts.len() {
        for b in (a + 1)..pts.len() {
            let d = pts[a].pos.distance(pts[b].pos);
            if d < cfg.link_radius {
                links.push(a, b, link_alpha(d, cfg));
            }
        }
    }
}

/// Connecting-line opacity at the given pair distance.
///
/// Falls off linearly from `cfg.link_alpha` at distance zero to exactly
/// `0.0` at `cfg.link_radius`; distances beyond the radius clamp to
/// zero rather than going negative.
///
/// ### Parameters
/// - `distance` - Euclidean distance between the pair.
/// - `cfg` - Provides the link radius and peak alpha.
#[inline]
pub fn link_alpha(distance: f32, cfg: &Config) -> f32 {
    (cfg.link_alpha * (1.0 - distance / cfg.link_radius)).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particle::Particle;
    use glam::Vec2;

    fn particle_at(pos: Vec2, vel: Vec2) -> Particle {
        Particle {
            pos,
            vel,
            radius: 1.0,
            opacity: 0.3,
        }
    }

    #[test]
    fn integrate_phase_moves_particles_by_their_velocity() {
        let mut set = ParticleSet::from_particles(vec![particle_at(
            Vec2::new(10.0, 20.0),
            Vec2::new(0.25, -0.5),
        )]);

        integrate_phase(&mut set, Bounds::new(100.0, 100.0));

        let p = &set.points[0];
        assert_eq!(p.pos, Vec2::new(10.25, 19.5));
        assert_eq!(p.vel, Vec2::new(0.25, -0.5));
    }

    #[test]
    fn integrate_phase_reflects_outward_motion_at_each_edge() {
        let bounds = Bounds::new(100.0, 100.0);

        // One particle heading out of each edge.
        let mut set = ParticleSet::from_particles(vec![
            particle_at(Vec2::new(99.9, 50.0), Vec2::new(0.175, 0.0)), // right
            particle_at(Vec2::new(0.1, 50.0), Vec2::new(-0.175, 0.0)), // left
            particle_at(Vec2::new(50.0, 99.9), Vec2::new(0.0, 0.175)), // bottom
            particle_at(Vec2::new(50.0, 0.1), Vec2::new(0.0, -0.175)), // top
        ]);

        integrate_phase(&mut set, bounds);

        assert!(set.points[0].vel.x < 0.0, "right edge should flip dx");
        assert!(set.points[1].vel.x > 0.0, "left edge should flip dx");
        assert!(set.points[2].vel.y < 0.0, "bottom edge should flip dy");
        assert!(set.points[3].vel.y > 0.0, "top edge should flip dy");
    }

    #[test]
    fn integrate_phase_leaves_inward_motion_alone_outside_bounds() {
        // Stranded outside the right edge (as after a shrink resize)
        // but already heading back in: the velocity must not flip.
        let mut set = ParticleSet::from_particles(vec![particle_at(
            Vec2::new(150.0, 50.0),
            Vec2::new(-0.1, 0.0),
        )]);

        integrate_phase(&mut set, Bounds::new(100.0, 100.0));

        assert_eq!(set.points[0].vel, Vec2::new(-0.1, 0.0));
        assert_eq!(set.points[0].pos, Vec2::new(149.9, 50.0));
    }

    #[test]
    fn integrate_phase_does_not_clamp_positions() {
        let mut set = ParticleSet::from_particles(vec![particle_at(
            Vec2::new(99.9, 50.0),
            Vec2::new(0.175, 0.0),
        )]);

        integrate_phase(&mut set, Bounds::new(100.0, 100.0));

        // Overshoots by one step's displacement; only the velocity flips.
        let p = &set.points[0];
        assert!((p.pos.x - 100.075).abs() < 1e-5);
        assert!(p.vel.x < 0.0);
    }

    #[test]
    fn link_phase_records_pairs_strictly_inside_the_radius() {
        let cfg = Config::default();
        let set = ParticleSet::from_particles(vec![
            particle_at(Vec2::new(0.0, 0.0), Vec2::ZERO),
            particle_at(Vec2::new(100.0, 0.0), Vec2::ZERO), // d = 100, linked
            particle_at(Vec2::new(0.0, 140.0), Vec2::ZERO), // d = 140 to [0], not linked
        ]);
        let mut links = LinkBuffer::default();

        link_phase(&set, &cfg, &mut links);

        assert_eq!(links.len(), 1);
        assert!(links.alpha_for(0, 1).is_some());
        assert_eq!(links.alpha_for(0, 2), None, "threshold itself is excluded");
    }

    #[test]
    fn link_phase_clears_previous_frame() {
        let cfg = Config::default();
        let close = ParticleSet::from_particles(vec![
            particle_at(Vec2::new(0.0, 0.0), Vec2::ZERO),
            particle_at(Vec2::new(10.0, 0.0), Vec2::ZERO),
        ]);
        let far = ParticleSet::from_particles(vec![
            particle_at(Vec2::new(0.0, 0.0), Vec2::ZERO),
            particle_at(Vec2::new(500.0, 0.0), Vec2::ZERO),
        ]);
        let mut links = LinkBuffer::default();

        link_phase(&close, &cfg, &mut links);
        assert_eq!(links.len(), 1);

        link_phase(&far, &cfg, &mut links);
        assert!(links.is_empty());
    }

    #[test]
    fn link_alpha_falls_off_linearly_to_zero() {
        let cfg = Config::default();

        assert!((link_alpha(0.0, &cfg) - cfg.link_alpha).abs() < 1e-7);
        assert!((link_alpha(70.0, &cfg) - cfg.link_alpha * 0.5).abs() < 1e-7);
        assert_eq!(link_alpha(140.0, &cfg), 0.0);
        assert_eq!(link_alpha(200.0, &cfg), 0.0, "beyond the radius clamps to zero");

        // Monotonically decreasing over the falloff range.
        let mut prev = link_alpha(0.0, &cfg);
        for i in 1..=140 {
            let a = link_alpha(i as f32, &cfg);
            assert!(a <= prev, "alpha increased at d = {i}");
            prev = a;
        }
    }
}

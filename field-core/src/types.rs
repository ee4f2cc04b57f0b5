/// Identifier for a particle in a [`crate::particle::ParticleSet`].
///
/// This is an index into `ParticleSet::points`, and is only meaningful
/// within the lifetime of a given `ParticleSet` instance.
pub type ParticleId = usize;

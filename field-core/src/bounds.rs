use glam::Vec2;

/// The axis-aligned `[0, width] × [0, height]` rectangle the field lives in.
///
/// Resizing replaces the whole value; particle positions are never
/// touched by a resize and are corrected lazily by boundary reflection
/// (see [`crate::phases::integrate_phase`]).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= 0.0 && p.x <= self.width && p.y >= 0.0 && p.y <= self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_inclusive_at_the_edges() {
        let b = Bounds::new(100.0, 50.0);

        assert!(b.contains(Vec2::new(0.0, 0.0)));
        assert!(b.contains(Vec2::new(100.0, 50.0)));
        assert!(b.contains(Vec2::new(42.0, 25.0)));

        assert!(!b.contains(Vec2::new(-0.1, 10.0)));
        assert!(!b.contains(Vec2::new(100.1, 10.0)));
        assert!(!b.contains(Vec2::new(10.0, 50.1)));
    }
}

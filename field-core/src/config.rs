#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// Number of particles spawned into the field.
    pub count: usize,

    pub radius_min: f32,
    pub radius_max: f32,

    /// Velocity components are drawn per-axis from `[-speed_max, speed_max]`.
    pub speed_max: f32,

    pub opacity_min: f32,
    pub opacity_max: f32,

    /// Pairs closer than this distance get a connecting line.
    pub link_radius: f32,
    /// Line opacity at distance zero; falls off linearly to 0 at `link_radius`.
    pub link_alpha: f32,
    pub link_width: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            count: 55,
            radius_min: 0.4,
            radius_max: 1.9,
            speed_max: 0.175,
            opacity_min: 0.1,
            opacity_max: 0.5,
            link_radius: 140.0,
            link_alpha: 0.06,
            link_width: 0.8,
        }
    }
}

use glam::Vec2;
use rand::Rng;

use crate::config::SimConfig;
use crate::render::Rgb;

/// SoA particle storage.
///
/// `home` is assigned once at spawn and never mutated; the restoring force
/// pulls particles back toward it. `display` carries the per-effect color
/// override (`None` = derive from the global base color), `highlight` the
/// pulse-wave glow intensity for the current frame.
pub struct ParticleSet {
    pub count: usize,
    pub position: Vec<Vec2>,
    pub velocity: Vec<Vec2>,
    pub home: Vec<Vec2>,
    pub radius: Vec<f32>,
    pub display: Vec<Option<Rgb>>,
    pub highlight: Vec<f32>,
}

impl ParticleSet {
    /// Particle count for a viewport: `clamp(round(w*h / area), 1, max)`.
    pub fn target_count(width: f32, height: f32, config: &SimConfig) -> usize {
        let raw = (width * height / config.area_per_particle).round() as i64;
        raw.clamp(1, config.max_particles as i64) as usize
    }

    /// Spawn a fresh set sized to the viewport. Each particle gets a uniform
    /// random position in `[0,w) x [0,h)` used as both initial position and
    /// home, zero velocity, and a radius in `[1.0, 2.5)`.
    pub fn spawn<R: Rng>(width: f32, height: f32, config: &SimConfig, rng: &mut R) -> Self {
        let count = Self::target_count(width, height, config);
        let mut position = Vec::with_capacity(count);
        let mut radius = Vec::with_capacity(count);
        for _ in 0..count {
            position.push(Vec2::new(
                rng.gen::<f32>() * width,
                rng.gen::<f32>() * height,
            ));
            radius.push(1.0 + rng.gen::<f32>() * 1.5);
        }
        Self {
            count,
            home: position.clone(),
            position,
            velocity: vec![Vec2::ZERO; count],
            radius,
            display: vec![None; count],
            highlight: vec![0.0; count],
        }
    }
}

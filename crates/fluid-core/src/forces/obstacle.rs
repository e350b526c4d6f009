use glam::Vec2;
use rand::Rng;

use crate::config::SimConfig;

/// Axis-aligned repulsion rectangle.
///
/// The host derives these from UI element bounds (already padded) and hands
/// the full list in fresh every frame; the core only ever sees rectangles.
#[derive(Clone, Copy, Debug)]
pub struct ObstacleZone {
    pub min: Vec2,
    pub max: Vec2,
    pub center: Vec2,
    /// Unpadded extent, used to normalize the repulsion falloff.
    pub extent: Vec2,
}

impl ObstacleZone {
    /// Build a zone from an element rectangle, expanding it by `pad` on every
    /// side. The falloff normalization keeps the unpadded extent.
    pub fn from_rect(left: f32, top: f32, right: f32, bottom: f32, pad: f32) -> Self {
        Self {
            min: Vec2::new(left - pad, top - pad),
            max: Vec2::new(right + pad, bottom + pad),
            center: Vec2::new((left + right) * 0.5, (top + bottom) * 0.5),
            extent: Vec2::new(right - left, bottom - top),
        }
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    fn max_dimension(&self) -> f32 {
        self.extent.x.max(self.extent.y).max(1.0)
    }
}

/// Repulsion velocity delta for one particle inside one zone, including the
/// small isotropic turbulence. Returns `None` when the particle is outside.
pub fn repulsion<R: Rng>(
    zone: &ObstacleZone,
    pos: Vec2,
    config: &SimConfig,
    rng: &mut R,
) -> Option<Vec2> {
    if !zone.contains(pos) {
        return None;
    }

    let offset = pos - zone.center;
    let distance = offset.length().max(1.0);
    let strength = (1.5 * (1.0 - distance / zone.max_dimension())).min(2.0);

    let cap = config.max_obstacle_change;
    let push = offset / distance * strength;
    let jitter = Vec2::new(
        (rng.gen::<f32>() - 0.5) * 0.1,
        (rng.gen::<f32>() - 0.5) * 0.1,
    );

    Some(push.clamp(Vec2::splat(-cap), Vec2::splat(cap)) + jitter)
}

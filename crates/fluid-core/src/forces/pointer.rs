use glam::Vec2;
use rand::Rng;

use crate::config::SimConfig;
use crate::state::ForceMode;

/// Pointer state in canvas coordinates. `None` = cursor outside the canvas.
/// Updated asynchronously by input events, read once per frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerState {
    pub current: Option<Vec2>,
    pub last: Option<Vec2>,
}

impl PointerState {
    pub fn set(&mut self, p: Vec2) {
        self.last = self.current;
        self.current = Some(p);
    }

    pub fn clear(&mut self) {
        self.current = None;
        self.last = None;
    }
}

/// Mode-specific velocity delta for a single particle.
///
/// The four modes are mutually exclusive:
///   Normal  - pointer repulsion inside the connection radius
///   Vortex  - quadratic-falloff tangential spin plus inward pull
///   Gravity - pointer attraction plus a constant downward pull
///   Chaos   - continuous jitter with occasional impulsive kicks
///
/// Normal/Vortex/Gravity pointer terms require a present pointer; Gravity's
/// downward pull and all of Chaos apply regardless.
pub fn mode_force<R: Rng>(
    pos: Vec2,
    mode: ForceMode,
    pointer: &PointerState,
    config: &SimConfig,
    rng: &mut R,
) -> Vec2 {
    let mut dv = Vec2::ZERO;

    match mode {
        ForceMode::Normal => {
            if let Some(mouse) = pointer.current {
                let to_pointer = mouse - pos;
                let dist_sq = to_pointer.length_squared();
                if dist_sq < config.connection_distance_sq {
                    let dist = dist_sq.sqrt().max(1.0);
                    let force = (config.connection_distance - dist) / config.connection_distance;
                    let push = to_pointer / dist * force;
                    // Away from the pointer, per-axis cap of 1.
                    dv -= push.clamp(Vec2::splat(-1.0), Vec2::splat(1.0));
                }
            }
        }
        ForceMode::Vortex => {
            if let Some(mouse) = pointer.current {
                let to_pointer = mouse - pos;
                let dist = to_pointer.length().max(1.0);
                if dist < config.vortex_radius {
                    let falloff = 1.0 - dist / config.vortex_radius;
                    let f = 2.0 * falloff * falloff;
                    let dir = to_pointer / dist;
                    let tangent = Vec2::new(-dir.y, dir.x);
                    // Tangential component doubled, radial pull eased by the
                    // same falloff so the spiral tightens near the center.
                    dv += tangent * f * 2.0;
                    dv += dir * f * falloff;
                }
            }
        }
        ForceMode::Gravity => {
            if let Some(mouse) = pointer.current {
                let to_pointer = mouse - pos;
                let dist = to_pointer.length().max(1.0);
                let pull = 300.0 / dist * 0.15;
                dv += to_pointer / dist * pull;
            }
            // Constant downward acceleration, independent of the pointer.
            dv.y += 0.2;
        }
        ForceMode::Chaos => {
            dv += Vec2::new(
                (rng.gen::<f32>() - 0.5) * 2.0,
                (rng.gen::<f32>() - 0.5) * 2.0,
            ) * 2.0;
            // 1% chance per frame of an impulsive kick up to magnitude 10.
            if rng.gen_bool(0.01) {
                let angle = rng.gen::<f32>() * std::f32::consts::TAU;
                dv += Vec2::from_angle(angle) * (rng.gen::<f32>() * 10.0);
            }
        }
    }

    dv
}

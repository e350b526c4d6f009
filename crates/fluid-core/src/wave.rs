use glam::Vec2;

use crate::config::SimConfig;

/// The single transient expanding-ring impulse.
///
/// At most one wave exists; retriggering while active overwrites it. The
/// radius grows from 0 to the canvas diagonal over `wave_duration_ms`, after
/// which the wave deactivates itself.
#[derive(Clone, Copy, Debug, Default)]
pub struct PulseWave {
    pub origin: Vec2,
    pub radius: f32,
    pub elapsed_ms: f32,
    pub active: bool,
}

impl PulseWave {
    pub fn trigger(&mut self, origin: Vec2) {
        *self = PulseWave {
            origin,
            radius: 0.0,
            elapsed_ms: 0.0,
            active: true,
        };
    }

    /// Advance the ring by `dt_ms`. `diagonal` is the current canvas
    /// diagonal, the radius the ring reaches at full progress.
    pub fn advance(&mut self, dt_ms: f32, diagonal: f32, config: &SimConfig) {
        if !self.active {
            return;
        }
        self.elapsed_ms += dt_ms;
        let progress = self.elapsed_ms / config.wave_duration_ms;
        if progress < 1.0 {
            self.radius = progress * diagonal;
        } else {
            self.active = false;
        }
    }

    /// Outward impulse and glow intensity for a particle, if it sits inside
    /// the ring band. Intensity is 1 on the ring itself, fading to 0 at the
    /// band edge.
    pub fn impulse(&self, pos: Vec2, config: &SimConfig) -> Option<(Vec2, f32)> {
        if !self.active {
            return None;
        }
        let offset = pos - self.origin;
        let dist = offset.length();
        let band = (dist - self.radius).abs();
        if band >= config.wave_band {
            return None;
        }
        let intensity = 1.0 - band / config.wave_band;
        let dir = offset / dist.max(1.0);
        Some((dir * intensity * 2.0, intensity))
    }
}

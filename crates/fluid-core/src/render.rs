use glam::Vec2;
use rand::Rng;

use crate::config::SimConfig;
use crate::forces::springs::Connection;
use crate::particle::ParticleSet;
use crate::state::{FieldState, VisualEffect};

/// 8-bit RGB color, the unit the canvas host consumes.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Default particle tint (the portfolio blue).
    pub const DEFAULT_BASE: Rgb = Rgb { r: 74, g: 144, b: 226 };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Scale all channels by `factor` in [0, 1+].
    pub fn scaled(self, factor: f32) -> Rgb {
        Rgb {
            r: (self.r as f32 * factor).min(255.0) as u8,
            g: (self.g as f32 * factor).min(255.0) as u8,
            b: (self.b as f32 * factor).min(255.0) as u8,
        }
    }

    /// Pulse-wave channel boost: +100/+100/+50 at full intensity.
    pub fn boosted(self, intensity: f32) -> Rgb {
        Rgb {
            r: (self.r as f32 + 100.0 * intensity).min(255.0) as u8,
            g: (self.g as f32 + 100.0 * intensity).min(255.0) as u8,
            b: (self.b as f32 + 50.0 * intensity).min(255.0) as u8,
        }
    }
}

/// HSV -> RGB, h in degrees [0, 360), s and v in [0, 1].
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> Rgb {
    let h = h.rem_euclid(360.0);
    let c = v * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = v - c;
    let (r, g, b) = match (h / 60.0) as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    Rgb {
        r: ((r + m) * 255.0) as u8,
        g: ((g + m) * 255.0) as u8,
        b: ((b + m) * 255.0) as u8,
    }
}

/// Global pulse factor for the given phase: `sin(phase) * 0.2 + 0.8`.
pub fn pulse_factor(phase: f32) -> f32 {
    phase.sin() * 0.2 + 0.8
}

/// Next display-color override for one particle.
///
/// `None` means "no override, derive from base color" - returned for
/// `VisualEffect::None` so a disabled effect fully restores the base tint on
/// the next frame. Disco keeps the previous hue between its 5%-per-frame
/// reassignments; every other effect recomputes from scratch.
pub fn next_display_color<R: Rng>(
    effect: VisualEffect,
    base: Rgb,
    phase: f32,
    x: f32,
    prev: Option<Rgb>,
    rng: &mut R,
) -> Option<Rgb> {
    match effect {
        VisualEffect::None => None,
        VisualEffect::Rainbow => {
            // Hue cycles with the global phase, offset by x position so the
            // field reads as a moving gradient rather than a flat tint.
            let hue = phase / std::f32::consts::TAU * 360.0 + x * 0.5;
            Some(hsv_to_rgb(hue, 1.0, 1.0))
        }
        VisualEffect::Neon => {
            let envelope = 0.55 + 0.45 * (phase * 8.0 + x * 0.05).sin();
            Some(base.scaled(envelope))
        }
        VisualEffect::Fire => Some(Rgb {
            r: 200 + rng.gen_range(0..56),
            g: 50 + rng.gen_range(0..100),
            b: rng.gen_range(0..50),
        }),
        VisualEffect::Disco => {
            if prev.is_none() || rng.gen_bool(0.05) {
                Some(hsv_to_rgb(rng.gen::<f32>() * 360.0, 1.0, 1.0))
            } else {
                prev
            }
        }
    }
}

/// One connection line: alpha and width fall off with distance.
pub struct Line {
    pub a: Vec2,
    pub b: Vec2,
    pub color: Rgb,
    pub alpha: f32,
    pub width: f32,
}

/// One filled disc (particle body or wave glow).
pub struct Disc {
    pub center: Vec2,
    pub radius: f32,
    pub color: Rgb,
    pub alpha: f32,
}

/// Concrete draw list for one frame. The wasm adapter replays it onto the
/// canvas; tests inspect it directly.
#[derive(Default)]
pub struct Scene {
    /// Alpha of the full-canvas black fill (trail persistence, never a hard
    /// clear).
    pub clear_alpha: f32,
    pub glows: Vec<Disc>,
    pub lines: Vec<Line>,
    pub discs: Vec<Disc>,
}

impl Scene {
    pub fn reset(&mut self) {
        self.glows.clear();
        self.lines.clear();
        self.discs.clear();
    }
}

/// Build the frame's draw list from simulation state.
///
/// The connection list is the exact pair set the force engine relaxed this
/// frame, so lines and spring forces can never disagree.
pub fn build_scene(
    particles: &ParticleSet,
    connections: &[Connection],
    field: &FieldState,
    phase: f32,
    config: &SimConfig,
    scene: &mut Scene,
) {
    scene.reset();
    scene.clear_alpha = config.trail_alpha;

    let factor = pulse_factor(phase);
    let line_color = field.base_color.scaled(factor);

    for c in connections {
        let falloff = 1.0 - c.dist / config.connection_distance;
        scene.lines.push(Line {
            a: particles.position[c.i as usize],
            b: particles.position[c.j as usize],
            color: line_color,
            alpha: falloff * 0.7,
            width: (falloff * 1.5).max(0.4),
        });
    }

    for i in 0..particles.count {
        let intensity = particles.highlight[i];
        let color = particles.display[i].unwrap_or(line_color);

        if intensity > 0.0 {
            scene.glows.push(Disc {
                center: particles.position[i],
                radius: particles.radius[i] * 2.0,
                color: field.base_color,
                alpha: 0.2 * intensity,
            });
        }

        scene.discs.push(Disc {
            center: particles.position[i],
            radius: particles.radius[i],
            color: color.boosted(intensity),
            alpha: 1.0,
        });
    }
}

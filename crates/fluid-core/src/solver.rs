use glam::Vec2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::config::SimConfig;
use crate::forces::obstacle::{self, ObstacleZone};
use crate::forces::pointer::{mode_force, PointerState};
use crate::forces::springs::{self, Connection};
use crate::particle::ParticleSet;
use crate::render::{self, Rgb, Scene};
use crate::state::{FieldState, ForceMode, VisualEffect};
use crate::wave::PulseWave;

/// The simulation core: particle store, force field engine, and the scene
/// builder the renderer consumes.
///
/// Single-threaded and frame-driven: the host calls [`Solver::step`] once per
/// animation frame. Everything mutable from outside the frame loop (pointer,
/// mode/effect/color, pulse trigger, resize) goes through setters that run
/// between frames; the step reads that state once at the top and never
/// mid-frame.
pub struct Solver {
    pub particles: ParticleSet,
    pub config: SimConfig,
    pub field: FieldState,
    pub pointer: PointerState,
    pub wave: PulseWave,
    width: f32,
    height: f32,
    color_phase: f32,
    connections: Vec<Connection>,
    rng: SmallRng,
}

impl Solver {
    pub fn new(width: f32, height: f32) -> Self {
        Self::build(width, height, SmallRng::from_entropy())
    }

    /// Deterministic constructor for tests.
    pub fn with_seed(width: f32, height: f32, seed: u64) -> Self {
        Self::build(width, height, SmallRng::seed_from_u64(seed))
    }

    fn build(width: f32, height: f32, mut rng: SmallRng) -> Self {
        let config = SimConfig::default();
        let particles = ParticleSet::spawn(width, height, &config, &mut rng);
        Self {
            particles,
            config,
            field: FieldState::default(),
            pointer: PointerState::default(),
            wave: PulseWave::default(),
            width,
            height,
            color_phase: 0.0,
            connections: Vec::new(),
            rng,
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Destroy and regenerate the whole particle set for a new viewport.
    /// The set is swapped wholesale, never mutated in place, so a frame can
    /// never observe a half-resized store.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.particles = ParticleSet::spawn(width, height, &self.config, &mut self.rng);
        self.connections.clear();
    }

    pub fn set_mode(&mut self, mode: ForceMode) {
        self.field.mode = mode;
    }

    pub fn set_effect(&mut self, effect: VisualEffect) {
        self.field.effect = effect;
    }

    pub fn set_base_color(&mut self, color: Rgb) {
        self.field.base_color = color;
    }

    pub fn trigger_wave(&mut self, origin: Vec2) {
        self.wave.trigger(origin);
    }

    /// The pair set found by the latest elastic pass (what the renderer
    /// draws).
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn color_phase(&self) -> f32 {
        self.color_phase
    }

    /// Advance the simulation by one frame.
    ///
    /// `obstacles` is this frame's snapshot of repulsion rectangles from the
    /// host (an empty slice when the source elements are gone). `dt_ms` only
    /// drives the pulse-wave clock; the force constants are tuned per frame.
    pub fn step(&mut self, obstacles: &[ObstacleZone], dt_ms: f32) {
        // Shared state, read once. Setters run between frames only.
        let mode = self.field.mode;
        let effect = self.field.effect;
        let base = self.field.base_color;

        self.color_phase = (self.color_phase + self.config.pulse_rate) % std::f32::consts::TAU;
        let diagonal = self.width.hypot(self.height);
        self.wave.advance(dt_ms, diagonal, &self.config);

        let config = &self.config;
        let p = &mut self.particles;
        let rng = &mut self.rng;
        let count = p.count;

        // ==== 1. PULSE WAVE ====
        // The engine only records glow intensity; the renderer draws it.
        for i in 0..count {
            p.highlight[i] = 0.0;
            if let Some((dv, intensity)) = self.wave.impulse(p.position[i], config) {
                p.velocity[i] += dv;
                p.highlight[i] = intensity;
            }
        }

        // ==== 2. OBSTACLE REPULSION ====
        for i in 0..count {
            for zone in obstacles {
                if let Some(dv) = obstacle::repulsion(zone, p.position[i], config, rng) {
                    p.velocity[i] += dv;
                }
            }
        }

        // ==== 3. ELASTIC CONNECTIONS ====
        springs::relax(p, config, &mut self.connections);

        // ==== 4-6. MODE FORCE, JITTER, RESTORE + INTEGRATION ====
        let speed_cap = mode.speed_cap();
        let friction = mode.friction();
        let restore = mode.restore_strength();
        let jitter = mode.ambient_jitter();

        for i in 0..count {
            let pos = p.position[i];
            let mut vel = p.velocity[i];

            vel += mode_force(pos, mode, &self.pointer, config, rng);

            vel += Vec2::new(
                (rng.gen::<f32>() - 0.5) * 2.0 * jitter,
                (rng.gen::<f32>() - 0.5) * 2.0 * jitter,
            );

            vel += (p.home[i] - pos) * restore;

            // Cap speed by uniform rescale, preserving direction.
            let speed = vel.length();
            if speed > speed_cap {
                vel *= speed_cap / speed;
            }

            let mut next = pos + vel;
            vel *= friction;

            // Boundary contact inverts and halves the offending axis.
            if next.x < 0.0 {
                next.x = 0.0;
                vel.x *= -0.5;
            } else if next.x > self.width {
                next.x = self.width;
                vel.x *= -0.5;
            }
            if next.y < 0.0 {
                next.y = 0.0;
                vel.y *= -0.5;
            } else if next.y > self.height {
                next.y = self.height;
                vel.y *= -0.5;
            }

            p.position[i] = next;
            p.velocity[i] = vel;
        }

        // ==== COLOR PASS ====
        let phase = self.color_phase;
        for i in 0..count {
            p.display[i] = render::next_display_color(
                effect,
                base,
                phase,
                p.position[i].x,
                p.display[i],
                rng,
            );
        }
    }

    /// Build the frame's draw list from the state produced by the latest
    /// step.
    pub fn build_scene(&self, scene: &mut Scene) {
        render::build_scene(
            &self.particles,
            &self.connections,
            &self.field,
            self.color_phase,
            &self.config,
            scene,
        );
    }
}

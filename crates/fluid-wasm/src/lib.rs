use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use fluid_core::forces::obstacle::ObstacleZone;
use fluid_core::render::{Disc, Rgb, Scene};
use fluid_core::solver::Solver;
use fluid_core::state::{ForceMode, VisualEffect};

/// Margin added around DOM element bounds before they become repulsion
/// zones.
const OBSTACLE_PAD: f32 = 30.0;

/// Packed per-particle snapshot: 32 bytes, zero-copy readable from JS for
/// hosts that draw with WebGL instead of the 2D context.
#[repr(C)]
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
struct RenderParticle {
    x: f32,
    y: f32,
    radius: f32,
    highlight: f32,
    r: f32,
    g: f32,
    b: f32,
    _pad: f32,
}

/// Browser-facing handle around the simulation core.
///
/// The JS host owns the requestAnimationFrame loop and the input listeners;
/// it calls `step` once per frame and the setters from its event handlers.
/// Dropping the world (and cancelling the frame callback host-side) is all
/// the teardown there is.
#[wasm_bindgen]
pub struct FluidWorld {
    solver: Solver,
    ctx: CanvasRenderingContext2d,
    obstacles: Vec<ObstacleZone>,
    scene: Scene,
    snapshot: Vec<RenderParticle>,
}

#[wasm_bindgen]
impl FluidWorld {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement) -> Result<FluidWorld, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d canvas context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        let solver = Solver::new(canvas.width() as f32, canvas.height() as f32);
        web_sys::console::log_1(
            &format!("FluidWorld created: {} particles", solver.particles.count).into(),
        );

        let mut world = FluidWorld {
            solver,
            ctx,
            obstacles: Vec::new(),
            scene: Scene::default(),
            snapshot: Vec::new(),
        };
        world.write_snapshot();
        Ok(world)
    }

    /// Regenerate the particle set for new canvas dimensions.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.solver.resize(width, height);
        web_sys::console::log_1(
            &format!(
                "FluidWorld resized to {}x{}: {} particles",
                width, height, self.solver.particles.count
            )
            .into(),
        );
    }

    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.solver.pointer.set(glam::Vec2::new(x, y));
    }

    pub fn clear_pointer(&mut self) {
        self.solver.pointer.clear();
    }

    /// Double-activation gesture hook.
    pub fn trigger_pulse(&mut self, x: f32, y: f32) {
        self.solver.trigger_wave(glam::Vec2::new(x, y));
    }

    /// Terminal entry point: force field mode (0 normal, 1 vortex,
    /// 2 gravity, 3 chaos). Unknown codes reset to normal.
    pub fn set_mode(&mut self, code: u32) {
        self.solver.set_mode(ForceMode::from_code(code));
    }

    /// Terminal entry point: visual effect (0 none, 1 rainbow, 2 neon,
    /// 3 fire, 4 disco). Unknown codes reset to none.
    pub fn set_effect(&mut self, code: u32) {
        self.solver.set_effect(VisualEffect::from_code(code));
    }

    /// Terminal entry point: base particle/line tint.
    pub fn set_color(&mut self, r: u8, g: u8, b: u8) {
        self.solver.set_base_color(Rgb::new(r, g, b));
    }

    /// Per-frame obstacle snapshot as flattened `[left, top, right, bottom]`
    /// quadruples of the designated elements' bounding rects. Padding is
    /// applied here; the core only sees final rectangles. Trailing partial
    /// quadruples are ignored.
    pub fn set_obstacles(&mut self, rects: &[f32]) {
        self.obstacles.clear();
        for quad in rects.chunks_exact(4) {
            self.obstacles.push(ObstacleZone::from_rect(
                quad[0],
                quad[1],
                quad[2],
                quad[3],
                OBSTACLE_PAD,
            ));
        }
    }

    /// Advance one frame and draw it. Returns the elapsed wall time in
    /// milliseconds so the host can watch the frame budget.
    pub fn step(&mut self, dt_ms: f32) -> f32 {
        let start = js_sys::Date::now();
        self.solver.step(&self.obstacles, dt_ms);
        self.solver.build_scene(&mut self.scene);
        self.draw();
        self.write_snapshot();
        (js_sys::Date::now() - start) as f32
    }

    pub fn particle_count(&self) -> usize {
        self.solver.particles.count
    }

    pub fn snapshot_ptr(&self) -> *const f32 {
        self.snapshot.as_ptr() as *const f32
    }

    pub fn snapshot_byte_length(&self) -> usize {
        self.snapshot.len() * std::mem::size_of::<RenderParticle>()
    }
}

impl FluidWorld {
    fn draw(&self) {
        let w = self.solver.width() as f64;
        let h = self.solver.height() as f64;

        // Trail-persistence clear; the low-alpha fill is the only buffer
        // clear mechanism.
        self.ctx
            .set_fill_style_str(&format!("rgba(0, 0, 0, {})", self.scene.clear_alpha));
        self.ctx.fill_rect(0.0, 0.0, w, h);

        for glow in &self.scene.glows {
            self.fill_disc(glow);
        }

        for line in &self.scene.lines {
            self.ctx.set_stroke_style_str(&rgba(line.color, line.alpha));
            self.ctx.set_line_width(line.width as f64);
            self.ctx.begin_path();
            self.ctx.move_to(line.a.x as f64, line.a.y as f64);
            self.ctx.line_to(line.b.x as f64, line.b.y as f64);
            self.ctx.stroke();
        }

        for disc in &self.scene.discs {
            self.fill_disc(disc);
        }
    }

    fn fill_disc(&self, disc: &Disc) {
        self.ctx.set_fill_style_str(&rgba(disc.color, disc.alpha));
        self.ctx.begin_path();
        let _ = self.ctx.arc(
            disc.center.x as f64,
            disc.center.y as f64,
            disc.radius as f64,
            0.0,
            std::f64::consts::TAU,
        );
        self.ctx.fill();
    }

    fn write_snapshot(&mut self) {
        let particles = &self.solver.particles;
        self.snapshot.clear();
        self.snapshot.reserve(particles.count);
        let fallback = self
            .solver
            .field
            .base_color
            .scaled(fluid_core::render::pulse_factor(self.solver.color_phase()));
        for i in 0..particles.count {
            let color = particles.display[i].unwrap_or(fallback);
            self.snapshot.push(RenderParticle {
                x: particles.position[i].x,
                y: particles.position[i].y,
                radius: particles.radius[i],
                highlight: particles.highlight[i],
                r: color.r as f32 / 255.0,
                g: color.g as f32 / 255.0,
                b: color.b as f32 / 255.0,
                _pad: 0.0,
            });
        }
    }
}

fn rgba(color: Rgb, alpha: f32) -> String {
    format!("rgba({}, {}, {}, {})", color.r, color.g, color.b, alpha)
}

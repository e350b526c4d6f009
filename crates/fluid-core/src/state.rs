use crate::render::Rgb;

/// Force field mode. Mutually exclusive; governs the per-frame force
/// computation and the mode-dependent constant schedule (speed cap,
/// friction, home restoring strength).
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ForceMode {
    #[default]
    Normal = 0,
    Vortex = 1,
    Gravity = 2,
    Chaos = 3,
}

impl ForceMode {
    /// Decode an external mode code. Unknown codes fall back to `Normal`.
    pub fn from_code(code: u32) -> Self {
        match code {
            1 => ForceMode::Vortex,
            2 => ForceMode::Gravity,
            3 => ForceMode::Chaos,
            _ => ForceMode::Normal,
        }
    }

    /// Maximum speed before the uniform rescale kicks in.
    pub fn speed_cap(self) -> f32 {
        match self {
            ForceMode::Normal => 3.0,
            ForceMode::Gravity => 10.0,
            ForceMode::Vortex | ForceMode::Chaos => 15.0,
        }
    }

    /// Per-frame velocity friction multiplier, applied after integration.
    pub fn friction(self) -> f32 {
        match self {
            ForceMode::Normal => 0.92,
            ForceMode::Gravity => 0.98,
            ForceMode::Vortex => 0.99,
            ForceMode::Chaos => 0.95,
        }
    }

    /// Home restoring force constant `k` in `(home - pos) * k`.
    pub fn restore_strength(self) -> f32 {
        match self {
            ForceMode::Normal | ForceMode::Vortex => 0.05,
            ForceMode::Gravity => 0.01,
            ForceMode::Chaos => 0.001,
        }
    }

    /// Half-range of the ambient per-axis jitter.
    pub fn ambient_jitter(self) -> f32 {
        match self {
            ForceMode::Chaos => 0.5,
            _ => 0.05,
        }
    }
}

/// Persistent per-particle coloring scheme. Independent of the force mode:
/// any effect can pair with any mode.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum VisualEffect {
    #[default]
    None = 0,
    Rainbow = 1,
    Neon = 2,
    Fire = 3,
    Disco = 4,
}

impl VisualEffect {
    /// Decode an external effect code. Unknown codes fall back to `None`.
    pub fn from_code(code: u32) -> Self {
        match code {
            1 => VisualEffect::Rainbow,
            2 => VisualEffect::Neon,
            3 => VisualEffect::Fire,
            4 => VisualEffect::Disco,
            _ => VisualEffect::None,
        }
    }
}

/// Shared appearance/behavior state. Written only through solver setters
/// between frames, read once at the top of each step; never mutated
/// mid-step. Mode and effect are tracked as two independent enums even
/// though the external command surface sets them through one call.
#[derive(Clone, Copy, Debug)]
pub struct FieldState {
    pub base_color: Rgb,
    pub mode: ForceMode,
    pub effect: VisualEffect,
}

impl Default for FieldState {
    fn default() -> Self {
        Self {
            base_color: Rgb::DEFAULT_BASE,
            mode: ForceMode::Normal,
            effect: VisualEffect::None,
        }
    }
}

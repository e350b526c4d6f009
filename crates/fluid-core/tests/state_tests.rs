use fluid_core::render::Rgb;
use fluid_core::state::{FieldState, ForceMode, VisualEffect};

// ---------------------------------------------------------------------------
// 1. External code decoding
// ---------------------------------------------------------------------------

#[test]
fn test_mode_code_decoding() {
    assert_eq!(ForceMode::from_code(0), ForceMode::Normal);
    assert_eq!(ForceMode::from_code(1), ForceMode::Vortex);
    assert_eq!(ForceMode::from_code(2), ForceMode::Gravity);
    assert_eq!(ForceMode::from_code(3), ForceMode::Chaos);
    // Unknown codes reset to normal rather than halting the frame loop.
    assert_eq!(ForceMode::from_code(99), ForceMode::Normal);
}

#[test]
fn test_effect_code_decoding() {
    assert_eq!(VisualEffect::from_code(0), VisualEffect::None);
    assert_eq!(VisualEffect::from_code(1), VisualEffect::Rainbow);
    assert_eq!(VisualEffect::from_code(2), VisualEffect::Neon);
    assert_eq!(VisualEffect::from_code(3), VisualEffect::Fire);
    assert_eq!(VisualEffect::from_code(4), VisualEffect::Disco);
    assert_eq!(VisualEffect::from_code(99), VisualEffect::None);
}

// ---------------------------------------------------------------------------
// 2. Per-mode constant schedule (the authoritative table)
// ---------------------------------------------------------------------------

#[test]
fn test_speed_cap_schedule() {
    assert_eq!(ForceMode::Normal.speed_cap(), 3.0);
    assert_eq!(ForceMode::Vortex.speed_cap(), 15.0);
    assert_eq!(ForceMode::Gravity.speed_cap(), 10.0);
    assert_eq!(ForceMode::Chaos.speed_cap(), 15.0);
}

#[test]
fn test_friction_schedule() {
    assert_eq!(ForceMode::Normal.friction(), 0.92);
    assert_eq!(ForceMode::Vortex.friction(), 0.99);
    assert_eq!(ForceMode::Gravity.friction(), 0.98);
    assert_eq!(ForceMode::Chaos.friction(), 0.95);
}

#[test]
fn test_restore_strength_schedule() {
    assert_eq!(ForceMode::Normal.restore_strength(), 0.05);
    assert_eq!(ForceMode::Vortex.restore_strength(), 0.05);
    assert_eq!(ForceMode::Gravity.restore_strength(), 0.01);
    assert_eq!(ForceMode::Chaos.restore_strength(), 0.001);
}

#[test]
fn test_ambient_jitter_schedule() {
    assert_eq!(ForceMode::Normal.ambient_jitter(), 0.05);
    assert_eq!(ForceMode::Vortex.ambient_jitter(), 0.05);
    assert_eq!(ForceMode::Gravity.ambient_jitter(), 0.05);
    assert_eq!(ForceMode::Chaos.ambient_jitter(), 0.5);
}

// ---------------------------------------------------------------------------
// 3. Shared field state defaults
// ---------------------------------------------------------------------------

#[test]
fn test_field_state_defaults() {
    let field = FieldState::default();
    assert_eq!(field.base_color, Rgb::DEFAULT_BASE);
    assert_eq!(field.base_color, Rgb::new(74, 144, 226));
    assert_eq!(field.mode, ForceMode::Normal);
    assert_eq!(field.effect, VisualEffect::None);
}

#[test]
fn test_mode_and_effect_are_independent() {
    // Any effect pairs with any mode; setting one never touches the other.
    let mut field = FieldState::default();
    field.mode = ForceMode::Chaos;
    field.effect = VisualEffect::Disco;
    assert_eq!(field.mode, ForceMode::Chaos);
    assert_eq!(field.effect, VisualEffect::Disco);
}

use fluid_core::config::SimConfig;
use fluid_core::forces::springs::{self, Connection};
use fluid_core::particle::ParticleSet;
use glam::Vec2;

/// Hand-build a set at the given positions: zero velocity, homes at the
/// positions, unit radius.
fn set_at(positions: &[Vec2]) -> ParticleSet {
    let count = positions.len();
    ParticleSet {
        count,
        position: positions.to_vec(),
        velocity: vec![Vec2::ZERO; count],
        home: positions.to_vec(),
        radius: vec![1.0; count],
        display: vec![None; count],
        highlight: vec![0.0; count],
    }
}

fn relax(particles: &mut ParticleSet) -> Vec<Connection> {
    let config = SimConfig::default();
    let mut connections = Vec::new();
    springs::relax(particles, &config, &mut connections);
    connections
}

// ---------------------------------------------------------------------------
// 1. Pairwise force is momentum neutral (exact negation)
// ---------------------------------------------------------------------------

#[test]
fn test_pair_deltas_are_exact_negations() {
    let mut particles = set_at(&[Vec2::new(100.0, 100.0), Vec2::new(180.0, 100.0)]);
    relax(&mut particles);

    let a = particles.velocity[0];
    let b = particles.velocity[1];
    assert_ne!(a, Vec2::ZERO, "pair within range must get a spring delta");
    assert_eq!(a, -b, "deltas must be exact negations, got {a:?} vs {b:?}");
}

#[test]
fn test_pair_beyond_rest_length_attracts() {
    // dist = 180 > rest 150 -> pulled together.
    let mut particles = set_at(&[Vec2::new(100.0, 100.0), Vec2::new(280.0, 100.0)]);
    relax(&mut particles);

    assert!(particles.velocity[0].x > 0.0, "left particle pulled right");
    assert!(particles.velocity[1].x < 0.0, "right particle pulled left");
}

#[test]
fn test_pair_below_rest_length_repels() {
    // dist = 100 < rest 150 -> pushed apart.
    let mut particles = set_at(&[Vec2::new(100.0, 100.0), Vec2::new(200.0, 100.0)]);
    relax(&mut particles);

    assert!(particles.velocity[0].x < 0.0, "left particle pushed left");
    assert!(particles.velocity[1].x > 0.0, "right particle pushed right");
}

// ---------------------------------------------------------------------------
// 2. Connection gating
// ---------------------------------------------------------------------------

#[test]
fn test_distant_pair_not_connected() {
    let mut particles = set_at(&[Vec2::new(0.0, 0.0), Vec2::new(250.0, 0.0)]);
    let connections = relax(&mut particles);

    assert!(connections.is_empty(), "pairs beyond 200 must not connect");
    assert_eq!(particles.velocity[0], Vec2::ZERO);
    assert_eq!(particles.velocity[1], Vec2::ZERO);
}

#[test]
fn test_connection_fanout_capped_at_five() {
    // Particle 0 surrounded by 8 in-range neighbors; only the first 5 in
    // index order may connect to it.
    let mut positions = vec![Vec2::new(500.0, 500.0)];
    for k in 0..8 {
        let angle = k as f32 * std::f32::consts::TAU / 8.0;
        positions.push(Vec2::new(500.0, 500.0) + Vec2::from_angle(angle) * 50.0);
    }
    let mut particles = set_at(&positions);
    let connections = relax(&mut particles);

    let from_zero = connections.iter().filter(|c| c.i == 0).count();
    assert_eq!(from_zero, 5, "fan-out from one particle capped at 5");
}

#[test]
fn test_connection_list_matches_applied_pairs() {
    let mut particles = set_at(&[
        Vec2::new(0.0, 0.0),
        Vec2::new(120.0, 0.0),
        Vec2::new(1000.0, 0.0),
    ]);
    let connections = relax(&mut particles);

    assert_eq!(connections.len(), 1);
    assert_eq!((connections[0].i, connections[0].j), (0, 1));
    assert!((connections[0].dist - 120.0).abs() < 1e-3);
    // The out-of-range particle got no delta.
    assert_eq!(particles.velocity[2], Vec2::ZERO);
}

// ---------------------------------------------------------------------------
// 3. Degenerate geometry
// ---------------------------------------------------------------------------

#[test]
fn test_coincident_particles_no_nan() {
    let mut particles = set_at(&[Vec2::new(50.0, 50.0), Vec2::new(50.0, 50.0)]);
    relax(&mut particles);

    for v in &particles.velocity {
        assert!(v.x.is_finite() && v.y.is_finite(), "coincident pair produced {v:?}");
    }
}

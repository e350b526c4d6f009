use glam::Vec2;

use crate::config::SimConfig;
use crate::particle::ParticleSet;

/// One inter-particle connection found during the elastic pass. The renderer
/// draws exactly this list, so lines and spring forces always agree.
#[derive(Clone, Copy, Debug)]
pub struct Connection {
    pub i: u32,
    pub j: u32,
    pub dist: f32,
}

/// Pairwise elastic pass.
///
/// Scans unordered pairs in index order, keeping at most
/// `config.max_connections` per particle (counted on the lower index, first
/// found wins). Each pair gets a weak spring toward the rest length,
/// per-axis-clamped and applied with exact opposite sign to both particles,
/// so the pass is momentum neutral.
pub fn relax(particles: &mut ParticleSet, config: &SimConfig, connections: &mut Vec<Connection>) {
    connections.clear();
    let count = particles.count;
    let cap = config.max_elastic_change;

    for i in 0..count {
        let pos_i = particles.position[i];
        let mut found = 0;

        for j in (i + 1)..count {
            if found >= config.max_connections {
                break;
            }
            let offset = particles.position[j] - pos_i;
            let dist_sq = offset.length_squared();
            if dist_sq >= config.connection_distance_sq {
                continue;
            }
            found += 1;
            let dist = dist_sq.sqrt();
            connections.push(Connection {
                i: i as u32,
                j: j as u32,
                dist,
            });

            // Pulls the pair toward the rest length; capped above so dense
            // clusters cannot snap together.
            let force = ((dist - config.rest_length) * config.elastic_strength)
                .min(config.elastic_strength);
            let dv = (offset / dist.max(1.0) * force)
                .clamp(Vec2::splat(-cap), Vec2::splat(cap));
            particles.velocity[i] += dv;
            particles.velocity[j] -= dv;
        }
    }
}

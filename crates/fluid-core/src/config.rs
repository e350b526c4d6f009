pub struct SimConfig {
    /// Viewport area per particle; count = clamp(round(w*h / this), 1, max).
    pub area_per_particle: f32,
    pub max_particles: usize,
    /// Connection / pointer influence radius (squared threshold below).
    pub connection_distance: f32,
    pub connection_distance_sq: f32,
    /// Connections drawn (and spring-relaxed) per particle, first found wins.
    pub max_connections: usize,
    /// Elastic rest length between connected particles.
    pub rest_length: f32,
    pub elastic_strength: f32,
    pub max_elastic_change: f32,
    /// Per-axis cap on obstacle repulsion deltas.
    pub max_obstacle_change: f32,
    pub vortex_radius: f32,
    pub wave_duration_ms: f32,
    /// Half-width of the expanding ring band that pushes particles.
    pub wave_band: f32,
    /// Alpha of the black trail-clearing fill.
    pub trail_alpha: f32,
    /// Global color pulse phase advance per frame (mod 2*pi).
    pub pulse_rate: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            area_per_particle: 4500.0,
            max_particles: 2000,
            connection_distance: 200.0,
            connection_distance_sq: 200.0 * 200.0,
            max_connections: 5,
            rest_length: 150.0,
            elastic_strength: 0.0003,
            max_elastic_change: 0.5,
            max_obstacle_change: 1.5,
            vortex_radius: 400.0,
            wave_duration_ms: 2000.0,
            wave_band: 50.0,
            trail_alpha: 0.9,
            pulse_rate: 0.005,
        }
    }
}

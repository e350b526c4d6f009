//! CPU particle-field simulation behind an animated canvas background.
//!
//! The core is a per-frame force accumulation over a viewport-sized particle
//! set: pointer interaction (normal/vortex/gravity/chaos modes), obstacle
//! repulsion from UI element bounds, weak elastic connections, a home
//! restoring force, and a transient expanding pulse ring. A separate color
//! layer (rainbow/neon/fire/disco effects over a pulsing base tint) feeds the
//! scene builder that the wasm host replays onto a 2D canvas.

pub mod config;
pub mod forces;
pub mod particle;
pub mod render;
pub mod solver;
pub mod state;
pub mod wave;

//! Hanami Sim - particle simulation and scoring core
//!
//! Owns the whole game state and advances it one fixed step at a time:
//! - Click-to-spawn resolution over configured tree/volcano regions
//! - Petal and lava kinematics (sway, rotation, fall, fade)
//! - Basket movement and catch/strike collision resolution
//! - Survivor-compaction removal after all collisions are recorded
//!
//! The frame loop, window, and rendering live elsewhere; this crate has
//! no display dependency and is fully deterministic under a fixed seed.

pub mod catcher;
pub mod collision;
pub mod events;
pub mod lava;
pub mod petal;
pub mod pool;
pub mod rand;
pub mod scene;
pub mod spawn;
pub mod world;

pub use catcher::Catcher;
pub use events::GameEvent;
pub use lava::LavaParticle;
pub use petal::Petal;
pub use pool::ParticlePool;
pub use scene::SceneConfig;
pub use world::{FrameInput, GameWorld};

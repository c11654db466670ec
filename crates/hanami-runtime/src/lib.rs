//! Hanami Runtime - frame loop infrastructure
//!
//! Provides the building blocks the player binary ticks the game with:
//! - `GameClock` — fixed-timestep accumulator (the scene runs at 30 Hz)
//! - `InputState` — keyboard and mouse tracking with action bindings

mod clock;
mod input;

pub use clock::GameClock;
pub use input::InputState;

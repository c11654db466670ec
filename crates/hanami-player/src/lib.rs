//! Hanami Player — standalone game binary library
//!
//! This crate provides the `PlayerApp` application handler that runs the
//! petal/lava scene in a window.

mod app;
mod hud;

pub use app::PlayerApp;

//! Hanami Core - Foundational types for the Hanami scene
//!
//! This crate provides the types every other Hanami crate depends on:
//! - `Vec2`, `Rect` - 2D spatial types
//! - `Color` - RGB color with compositing helpers
//! - Error types and Result alias

mod error;
mod types;

pub use error::{HanamiError, Result};
pub use types::{Color, Rect, Vec2};

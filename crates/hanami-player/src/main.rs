//! Hanami - catch the petals, dodge the lava
//!
//! Click the trees to shed petals and the volcano to erupt; steer the
//! basket along the bottom to catch petals for points. One lava hit and
//! the basket is gone.
//!
//! Usage:
//!   hanami <background.jpg> [--scene <scene.toml>] [--seed <n>] [--fullscreen]

use anyhow::{Context, Result};
use clap::Parser;
use hanami_player::PlayerApp;
use hanami_render::{load_background, SceneRenderer};
use hanami_sim::{GameWorld, SceneConfig};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};
use winit::event_loop::{ControlFlow, EventLoop};

#[derive(Parser)]
#[command(name = "hanami")]
#[command(about = "Hanami - interactive petal and lava scene")]
struct Args {
    /// Path to the background image
    background: String,

    /// Path to a scene TOML file
    #[arg(long, default_value = "assets/scene.toml")]
    scene: String,

    /// RNG seed (defaults to wall clock, so runs differ)
    #[arg(long)]
    seed: Option<u32>,

    /// Launch in fullscreen mode
    #[arg(long)]
    fullscreen: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let scene = if Path::new(&args.scene).exists() {
        SceneConfig::load(&args.scene).context("Failed to load scene")?
    } else {
        println!(
            "Warning: Scene file not found: {} (using built-in scene)",
            args.scene
        );
        SceneConfig::default()
    };

    let width = scene.playfield.width as u32;
    let height = scene.playfield.height as u32;

    let background =
        load_background(&args.background, width, height).context("Failed to load background")?;
    let renderer =
        SceneRenderer::new(width, height, background).context("Failed to prepare frame buffer")?;

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.subsec_nanos())
            .unwrap_or(0x9E37_79B9)
    });

    let world = GameWorld::new(scene, seed).context("Failed to build game world")?;

    println!(
        "Loaded scene: {} tree region(s), playfield {}x{}",
        world.scene().trees.len(),
        width,
        height
    );
    println!();
    println!("Controls:");
    println!("  Click trees   - Shed petals");
    println!("  Click volcano - Erupt lava");
    println!("  Left/Right    - Move the basket (A/D also work)");
    println!("  Escape        - Exit");

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = PlayerApp::new(world, renderer, args.fullscreen);
    event_loop.run_app(&mut app)?;

    Ok(())
}

//! Scene configuration: playfield, spawn regions, basket geometry
//!
//! Loaded from a TOML file and validated once at startup. Malformed or
//! out-of-range regions are a configuration error, never a runtime one.

use hanami_core::{HanamiError, Result, Vec2};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Playfield dimensions in pixels
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

/// A clickable axis-aligned region, min/max on both axes
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RegionBounds {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
}

impl RegionBounds {
    pub const fn new(min_x: f32, max_x: f32, min_y: f32, max_y: f32) -> Self {
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    /// Inclusive containment test, matching the click test on both edges
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min_x
            && point.x <= self.max_x
            && point.y >= self.min_y
            && point.y <= self.max_y
    }
}

/// A tree canopy that sheds petals when clicked
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeRegion {
    pub name: String,
    #[serde(flatten)]
    pub bounds: RegionBounds,
}

/// The volcano: a clickable region plus the fixed vent lava erupts from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VolcanoConfig {
    #[serde(flatten)]
    pub bounds: RegionBounds,
    pub vent_x: f32,
    pub vent_y: f32,
}

impl VolcanoConfig {
    pub fn vent(&self) -> Vec2 {
        Vec2::new(self.vent_x, self.vent_y)
    }
}

/// Basket geometry and movement speed
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BasketConfig {
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    pub start_x: f32,
    pub bottom_margin: f32,
}

/// Petal spawn options
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PetalConfig {
    /// Index of the tree region that sheds pink petals; all others shed white
    pub pink_tree: usize,
}

impl Default for PetalConfig {
    fn default() -> Self {
        Self { pink_tree: 0 }
    }
}

/// Full scene description
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneConfig {
    pub playfield: Playfield,
    #[serde(rename = "tree")]
    pub trees: Vec<TreeRegion>,
    pub volcano: VolcanoConfig,
    pub basket: BasketConfig,
    #[serde(default)]
    pub petals: PetalConfig,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            playfield: Playfield {
                width: 800.0,
                height: 600.0,
            },
            trees: vec![
                TreeRegion {
                    name: "left cherry".into(),
                    bounds: RegionBounds::new(0.0, 266.0, 0.0, 300.0),
                },
                TreeRegion {
                    name: "slope grove".into(),
                    bounds: RegionBounds::new(500.0, 650.0, 170.0, 350.0),
                },
                TreeRegion {
                    name: "right ridge".into(),
                    bounds: RegionBounds::new(665.0, 800.0, 0.0, 100.0),
                },
            ],
            volcano: VolcanoConfig {
                bounds: RegionBounds::new(390.0, 440.0, 260.0, 300.0),
                vent_x: 415.0,
                vent_y: 280.0,
            },
            basket: BasketConfig {
                width: 100.0,
                height: 30.0,
                speed: 7.0,
                start_x: 350.0,
                bottom_margin: 10.0,
            },
            petals: PetalConfig::default(),
        }
    }
}

impl SceneConfig {
    /// Parse a scene from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let scene: SceneConfig = toml::from_str(content)?;
        Ok(scene)
    }

    /// Load a scene from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Validate region geometry against the playfield. Called once at
    /// startup; a failure here means the config file is wrong.
    pub fn validate(&self) -> Result<()> {
        if self.playfield.width <= 0.0 || self.playfield.height <= 0.0 {
            return Err(HanamiError::ValidationError(format!(
                "playfield must be positive, got {}x{}",
                self.playfield.width, self.playfield.height
            )));
        }

        for tree in &self.trees {
            validate_bounds(&tree.bounds, &tree.name, &self.playfield)?;
        }
        validate_bounds(&self.volcano.bounds, "volcano", &self.playfield)?;

        if !self.volcano.bounds.contains(self.volcano.vent()) {
            return Err(HanamiError::ValidationError(format!(
                "volcano vent ({}, {}) lies outside the volcano region",
                self.volcano.vent_x, self.volcano.vent_y
            )));
        }

        if self.basket.width <= 0.0 || self.basket.width > self.playfield.width {
            return Err(HanamiError::ValueOutOfRange {
                field: "basket.width".into(),
                min: 0.0,
                max: self.playfield.width as f64,
                value: self.basket.width as f64,
            });
        }

        if !self.trees.is_empty() && self.petals.pink_tree >= self.trees.len() {
            return Err(HanamiError::ValidationError(format!(
                "petals.pink_tree index {} out of range ({} trees declared)",
                self.petals.pink_tree,
                self.trees.len()
            )));
        }

        Ok(())
    }
}

fn validate_bounds(bounds: &RegionBounds, name: &str, playfield: &Playfield) -> Result<()> {
    if bounds.min_x >= bounds.max_x || bounds.min_y >= bounds.max_y {
        return Err(HanamiError::ValidationError(format!(
            "region '{name}' is empty or inverted"
        )));
    }
    if bounds.min_x < 0.0
        || bounds.min_y < 0.0
        || bounds.max_x > playfield.width
        || bounds.max_y > playfield.height
    {
        return Err(HanamiError::ValidationError(format!(
            "region '{name}' extends outside the playfield"
        )));
    }
    Ok(())
}

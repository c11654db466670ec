//! Click-to-spawn resolution

use crate::scene::SceneConfig;
use hanami_core::Vec2;

/// What a pointer click resolved to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnAction {
    /// Clicked tree region, by declaration index
    Petals { region: usize },
    /// Clicked the volcano; lava erupts from the fixed vent
    Lava,
}

/// Maps a click to at most one spawn action. Tree regions are tested in
/// declaration order and the first hit wins; the volcano is tested only
/// when no tree matched. Misses resolve to `None` and are ignored.
pub fn resolve_click(scene: &SceneConfig, click: Vec2) -> Option<SpawnAction> {
    for (index, tree) in scene.trees.iter().enumerate() {
        if tree.bounds.contains(click) {
            return Some(SpawnAction::Petals { region: index });
        }
    }
    if scene.volcano.bounds.contains(click) {
        return Some(SpawnAction::Lava);
    }
    None
}

//! Game events emitted by the frame step

use hanami_core::Color;

/// Something observable that happened during a frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    PetalsSpawned { region: usize, count: usize },
    LavaSpawned { count: usize },
    PetalCaught { color: Color },
    BasketDestroyed,
}

/// A simple event queue the frame step pushes to and the caller drains
#[derive(Default)]
pub struct EventQueue {
    events: Vec<GameEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Drain all pending events, returning them in push order
    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

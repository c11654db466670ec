//! HUD overlay — score readout and the game-over message

use egui::{Align2, Area, Color32, Id, Order, RichText};

const SAKURA_PINK: Color32 = Color32::from_rgb(255, 182, 193);

/// Render the HUD via egui. The score sits top-center; once the basket
/// is gone a red message takes over the middle of the screen.
pub fn draw(ctx: &egui::Context, score: u32, basket_alive: bool) {
    Area::new(Id::new("score_overlay"))
        .order(Order::Foreground)
        .anchor(Align2::CENTER_TOP, egui::Vec2::new(0.0, 8.0))
        .interactable(false)
        .show(ctx, |ui| {
            ui.label(
                RichText::new(format!("Score: {score}"))
                    .color(SAKURA_PINK)
                    .size(22.0),
            );
        });

    if !basket_alive {
        Area::new(Id::new("game_over_overlay"))
            .order(Order::Foreground)
            .anchor(Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .interactable(false)
            .show(ctx, |ui| {
                ui.label(
                    RichText::new("Basket destroyed by lava!")
                        .color(Color32::from_rgb(255, 0, 0))
                        .size(24.0),
                );
            });
    }
}

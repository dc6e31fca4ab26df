//! Theme constants for the tic-tac-toe GUI

use egui::Color32;

use crate::Player;

// Board colors
pub const BOARD_BG: Color32 = Color32::from_rgb(40, 42, 46);
pub const SQUARE_BG: Color32 = Color32::from_rgb(222, 222, 228);
pub const GRID_LINE: Color32 = Color32::from_rgb(25, 27, 31);

// Player colors, used for glyphs in marker mode and fills in color mode
pub const PLAYER_X: Color32 = Color32::from_rgb(120, 80, 200); // Purple
pub const PLAYER_O: Color32 = Color32::from_rgb(60, 160, 110); // Green

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(230, 60, 60);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(250, 200, 40);

// Functions for colors that can't be const
pub fn hover_valid() -> Color32 {
    Color32::from_rgba_unmultiplied(80, 80, 80, 60)
}

pub fn hover_invalid() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 50, 50, 90)
}

/// Colour for a player's marks
pub fn player_color(player: Player) -> Color32 {
    match player {
        Player::X => PLAYER_X,
        Player::O => PLAYER_O,
    }
}

// Panel colors
pub const HEADER_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const WARNING_BG: Color32 = Color32::from_rgb(80, 60, 30);

// Text colors
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Status colors
pub const STATUS_WARNING: Color32 = Color32::from_rgb(255, 180, 50);

// Sizes
pub const BOARD_MARGIN: f32 = 12.0;
pub const MAX_BOARD_SIZE: f32 = 480.0;
pub const GRID_LINE_WIDTH: f32 = 4.0;
pub const MARKER_SIZE_RATIO: f32 = 0.6;
pub const COLOR_INSET: f32 = 6.0;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 5.0;

// Window
pub const WINDOW_SIZE: [f32; 2] = [560.0, 680.0];
pub const MIN_WINDOW_SIZE: [f32; 2] = [320.0, 420.0];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_players_have_distinct_colors() {
        assert_ne!(player_color(Player::X), player_color(Player::O));
    }

    #[test]
    fn test_panel_colors_differ_from_text() {
        assert_ne!(HEADER_BG, TEXT_PRIMARY);
        assert_ne!(WARNING_BG, STATUS_WARNING);
        assert_ne!(HEADER_BG, WARNING_BG);
    }
}

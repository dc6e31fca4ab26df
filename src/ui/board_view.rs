//! Board rendering for the tic-tac-toe GUI

use egui::{CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::{Board, Cell, Player, Pos, BOARD_SIZE};

use super::theme::*;
use super::DisplayMode;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached square size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 100.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the raw (row, col) of a click, if any.
    ///
    /// Clicks on the margin give coordinates outside 0..3; the engine
    /// ignores those.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        mode: DisplayMode,
        current_turn: Player,
        last_move: Option<Pos>,
        winning_line: Option<[Pos; 3]>,
        game_over: bool,
    ) -> Option<(i32, i32)> {
        let available_size = ui.available_size();

        // Calculate board size to fit available space
        let board_size = available_size.x.min(available_size.y).min(MAX_BOARD_SIZE) - 20.0;
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / BOARD_SIZE as f32;

        let (response, painter) = ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());

        self.board_rect = response.rect;

        // Draw board background
        painter.rect_filled(self.board_rect, CornerRadius::same(6), BOARD_BG);

        // Draw squares and their contents
        for (pos, cell) in board.iter() {
            self.draw_square(&painter, pos, cell, mode);
        }

        self.draw_grid(&painter);

        if let Some(pos) = last_move {
            self.draw_last_move_marker(&painter, pos);
        }

        if let Some(line) = winning_line {
            self.draw_winning_line(&painter, &line);
        }

        if game_over {
            return None;
        }

        // Hover preview
        if let Some(board_pos) = response.hover_pos().and_then(|p| self.screen_to_board(p)) {
            let is_valid = board.is_empty(board_pos);
            self.draw_hover_preview(&painter, board_pos, current_turn, mode, is_valid);
        }

        if response.clicked() {
            return response.interact_pointer_pos().map(|p| self.screen_to_coords(p));
        }

        None
    }

    /// Draw the square background plus the mark in the current mode
    fn draw_square(&self, painter: &Painter, pos: Pos, cell: Cell, mode: DisplayMode) {
        let rect = self.square_rect(pos);
        painter.rect_filled(rect, CornerRadius::ZERO, SQUARE_BG);

        if let Cell::Taken(player) = cell {
            self.draw_mark(painter, rect, player, mode, 255);
        }
    }

    fn draw_mark(&self, painter: &Painter, rect: Rect, player: Player, mode: DisplayMode, alpha: u8) {
        let color = player_color(player).gamma_multiply(alpha as f32 / 255.0);
        match mode {
            DisplayMode::Marker => {
                painter.text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    player.marker(),
                    egui::FontId::proportional(self.cell_size * MARKER_SIZE_RATIO),
                    color,
                );
            }
            DisplayMode::Color => {
                painter.rect_filled(rect.shrink(COLOR_INSET), CornerRadius::same(4), color);
            }
        }
    }

    /// Draw the inner grid lines
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let inner = self.board_rect.shrink(BOARD_MARGIN);

        for i in 1..BOARD_SIZE {
            let offset = i as f32 * self.cell_size;

            // Vertical line
            painter.line_segment(
                [
                    Pos2::new(inner.min.x + offset, inner.min.y),
                    Pos2::new(inner.min.x + offset, inner.max.y),
                ],
                stroke,
            );

            // Horizontal line
            painter.line_segment(
                [
                    Pos2::new(inner.min.x, inner.min.y + offset),
                    Pos2::new(inner.max.x, inner.min.y + offset),
                ],
                stroke,
            );
        }
    }

    /// Draw last move marker
    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let rect = self.square_rect(pos);
        let corner = rect.right_top() + Vec2::new(-LAST_MOVE_MARKER_RADIUS * 2.0, LAST_MOVE_MARKER_RADIUS * 2.0);
        painter.circle_filled(corner, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    /// Draw winning line highlight
    fn draw_winning_line(&self, painter: &Painter, line: &[Pos; 3]) {
        let stroke = Stroke::new(6.0, WIN_HIGHLIGHT);
        let start = self.square_rect(line[0]).center();
        let end = self.square_rect(line[2]).center();
        painter.line_segment([start, end], stroke);

        for pos in line {
            painter.rect_stroke(
                self.square_rect(*pos).shrink(2.0),
                CornerRadius::same(4),
                Stroke::new(3.0, WIN_HIGHLIGHT),
                egui::StrokeKind::Inside,
            );
        }
    }

    /// Draw hover preview
    fn draw_hover_preview(&self, painter: &Painter, pos: Pos, turn: Player, mode: DisplayMode, is_valid: bool) {
        let rect = self.square_rect(pos);
        if is_valid {
            painter.rect_filled(rect, CornerRadius::ZERO, hover_valid());
            self.draw_mark(painter, rect, turn, mode, 90);
        } else {
            painter.rect_filled(rect, CornerRadius::ZERO, hover_invalid());
        }
    }

    /// Screen rectangle of a square
    fn square_rect(&self, pos: Pos) -> Rect {
        let min = self.board_rect.min
            + Vec2::new(
                BOARD_MARGIN + pos.col as f32 * self.cell_size,
                BOARD_MARGIN + pos.row as f32 * self.cell_size,
            );
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    /// Convert screen coordinates to unchecked (row, col)
    pub fn screen_to_coords(&self, screen_pos: Pos2) -> (i32, i32) {
        let relative = screen_pos - self.board_rect.min;
        let x = (relative.x - BOARD_MARGIN) / self.cell_size;
        let y = (relative.y - BOARD_MARGIN) / self.cell_size;

        (y.floor() as i32, x.floor() as i32)
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let (row, col) = self.screen_to_coords(screen_pos);
        Pos::try_new(row, col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> BoardView {
        BoardView {
            cell_size: 100.0,
            board_rect: Rect::from_min_size(Pos2::ZERO, Vec2::splat(300.0 + 2.0 * BOARD_MARGIN)),
        }
    }

    #[test]
    fn test_screen_to_board_inside_grid() {
        let view = view();
        let center_of = |row: f32, col: f32| {
            Pos2::new(BOARD_MARGIN + col * 100.0 + 50.0, BOARD_MARGIN + row * 100.0 + 50.0)
        };
        assert_eq!(view.screen_to_board(center_of(0.0, 1.0)), Some(Pos::new(0, 1)));
        assert_eq!(view.screen_to_board(center_of(2.0, 2.0)), Some(Pos::new(2, 2)));
    }

    #[test]
    fn test_margin_click_is_off_grid() {
        let view = view();
        assert_eq!(view.screen_to_coords(Pos2::new(2.0, 2.0)), (-1, -1));
        assert_eq!(view.screen_to_board(Pos2::new(2.0, 2.0)), None);
        assert_eq!(view.screen_to_board(Pos2::new(320.0, 150.0)), None);
    }
}

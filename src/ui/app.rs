//! Main application for the tic-tac-toe GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, TopBottomPanel};
use strum::IntoEnumIterator;
use tracing::debug;

use crate::{GameState, Outcome};
use super::board_view::BoardView;
use super::theme::*;
use super::DisplayMode;

/// Main tic-tac-toe application
pub struct TicTacToeApp {
    state: GameState,
    board_view: BoardView,
    mode: DisplayMode,
    /// Rejection warning latched for the frames until the next click
    warning: bool,
}

impl TicTacToeApp {
    /// Create a new app with the given display mode
    pub fn new(_cc: &eframe::CreationContext<'_>, mode: DisplayMode) -> Self {
        Self {
            state: GameState::new(),
            board_view: BoardView::default(),
            mode,
            warning: false,
        }
    }

    /// Render the header: status message and mode selection
    fn render_header(&mut self, ctx: &Context) {
        TopBottomPanel::top("header")
            .frame(Frame::new().fill(HEADER_BG).inner_margin(12.0))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("TIC-TAC-TOE").size(22.0).strong().color(TEXT_PRIMARY));
                    ui.add_space(6.0);
                    self.render_message(ui);
                });
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    ui.label(RichText::new("Display").size(12.0).color(TEXT_MUTED));
                    for mode in DisplayMode::iter() {
                        if ui.radio_value(&mut self.mode, mode, mode.to_string()).changed() {
                            debug!(%mode, "display mode changed");
                        }
                    }
                });
            });
    }

    /// Status line, coloured by player in the current mode
    fn render_message(&self, ui: &mut egui::Ui) {
        if self.warning {
            Frame::new()
                .fill(WARNING_BG)
                .corner_radius(CornerRadius::same(6))
                .inner_margin(8.0)
                .show(ui, |ui| {
                    ui.label(
                        RichText::new("⚠ That square is already taken, pick another")
                            .size(14.0)
                            .color(STATUS_WARNING),
                    );
                });
            return;
        }

        match self.state.outcome() {
            Outcome::InProgress => {
                let player = self.state.current_turn();
                ui.horizontal(|ui| {
                    ui.label(RichText::new("Player").size(18.0).color(TEXT_SECONDARY));
                    self.player_badge(ui, player);
                    ui.label(RichText::new("'s turn").size(18.0).color(TEXT_SECONDARY));
                });
            }
            Outcome::Win(winner) => {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("Player").size(20.0).strong().color(TEXT_PRIMARY));
                    self.player_badge(ui, winner);
                    ui.label(RichText::new("wins!").size(20.0).strong().color(WIN_HIGHLIGHT));
                });
            }
            Outcome::Tie => {
                ui.label(RichText::new("It's a tie!").size(20.0).strong().color(TEXT_PRIMARY));
            }
        }
    }

    /// Player shown as its glyph or a colour swatch, per display mode
    fn player_badge(&self, ui: &mut egui::Ui, player: crate::Player) {
        let color = player_color(player);
        match self.mode {
            DisplayMode::Marker => {
                ui.label(RichText::new(player.marker().to_string()).size(20.0).strong().color(color));
            }
            DisplayMode::Color => {
                let (rect, _) = ui.allocate_exact_size(egui::Vec2::splat(18.0), egui::Sense::hover());
                ui.painter().rect_filled(rect, CornerRadius::same(3), color);
            }
        }
    }

    /// Render the board and the reset button
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(8.0);

                let clicked = self.board_view.show(
                    ui,
                    self.state.board(),
                    self.mode,
                    self.state.current_turn(),
                    self.state.last_move(),
                    self.state.winning_line(),
                    self.state.is_over(),
                );

                // Handle click
                if let Some((row, col)) = clicked {
                    let result = self.state.attempt_move(row, col);
                    debug!(row, col, ?result, "click");
                    self.warning = self.state.take_rejection();
                    ui.ctx().request_repaint();
                }

                ui.add_space(12.0);
                let label = if self.state.is_over() { "Play Again" } else { "Reset" };
                if ui.button(RichText::new(label).size(16.0)).clicked() {
                    self.reset();
                }
                ui.label(
                    RichText::new(format!("Move #{}", self.state.move_count()))
                        .size(11.0)
                        .color(TEXT_MUTED),
                );
            });
        });
    }

    fn reset(&mut self) {
        self.state.reset();
        self.warning = false;
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (reset, toggle) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::R) || i.key_pressed(egui::Key::N),
                i.key_pressed(egui::Key::M),
            )
        });

        // R / N - New game
        if reset {
            self.reset();
        }

        // M - Switch display mode
        if toggle {
            self.mode = self.mode.toggled();
            debug!(mode = %self.mode, "display mode changed");
        }
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.render_header(ctx);
        self.render_board(ctx);
    }
}

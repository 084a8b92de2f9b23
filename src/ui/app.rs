//! Main application for the Gomoku GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use super::board_view::BoardView;
use super::theme::*;
use crate::{GameStatus, Player, Session};

/// Main Gomoku application
pub struct GomokuApp {
    session: Session,
    board_view: BoardView,
}

impl GomokuApp {
    /// Create the app around an already configured session
    pub fn new(_cc: &eframe::CreationContext<'_>, session: Session) -> Self {
        Self {
            session,
            board_view: BoardView::default(),
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("Restart (N)").clicked() {
                        self.session.on_reset_requested();
                        ui.close_menu();
                    }
                    if ui.button("Quit").clicked() {
                        ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label("Two players - Freestyle");
                });
            });
        });
    }

    /// Render the side panel with game info
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if let GameStatus::Won(winner) = self.session.game().status() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, Some(winner));
                } else if self.session.game().status() == GameStatus::Drawn {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, None);
                }

                ui.add_space(10.0);
                self.render_message_card(ui);
            });
    }

    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("●○").size(20.0).color(TEXT_SECONDARY));
            ui.add_space(4.0);
            ui.label(RichText::new("GOMOKU").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("15 × 15, five in a row").size(11.0).color(TEXT_MUTED));
        });
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        let game = self.session.game();

        Self::card_frame().show(ui, |ui| {
            let (stone_char, accent, stone_color) = match game.current_player() {
                Player::Black => ("●", ACCENT_BLACK, TEXT_PRIMARY),
                Player::White => ("○", ACCENT_WHITE, BLACK_STONE),
            };

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 22.0, accent);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    stone_char,
                    egui::FontId::proportional(28.0),
                    stone_color,
                );

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    let name = game.current_player().name().to_uppercase();
                    ui.label(RichText::new(name).size(18.0).strong().color(TEXT_PRIMARY));

                    let (status, color) = if game.is_game_over() {
                        ("Game Over", WIN_HIGHLIGHT)
                    } else {
                        ("To move", STATUS_PLAYING)
                    };
                    ui.label(RichText::new(status).size(12.0).color(color));
                });
            });
        });
    }

    /// Render actions card
    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            let btn_frame = Frame::new()
                .fill(BUTTON_BG)
                .corner_radius(CornerRadius::same(6))
                .inner_margin(8.0);

            btn_frame.show(ui, |ui| {
                let restart = egui::Label::new(RichText::new("↻ Restart").size(12.0).color(TEXT_PRIMARY))
                    .sense(egui::Sense::click());
                if ui.add(restart).clicked() {
                    self.session.on_reset_requested();
                }
            });

            ui.add_space(8.0);
            let moves = self.session.game().move_count();
            ui.label(RichText::new(format!("Move #{}", moves)).size(11.0).color(TEXT_SECONDARY));
        });
    }

    /// Winner banner, or draw banner when `winner` is `None`
    fn render_game_over_card(&mut self, ui: &mut egui::Ui, winner: Option<Player>) {
        Frame::new()
            .fill(GAME_OVER_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);

                    match winner {
                        Some(player) => {
                            let (symbol, accent) = match player {
                                Player::Black => ("●", ACCENT_BLACK),
                                Player::White => ("○", ACCENT_WHITE),
                            };
                            ui.horizontal(|ui| {
                                ui.add_space(ui.available_width() / 2.0 - 60.0);
                                ui.label(RichText::new(symbol).size(32.0).color(accent));
                                ui.add_space(8.0);
                                ui.vertical(|ui| {
                                    ui.label(
                                        RichText::new(player.name().to_uppercase())
                                            .size(18.0)
                                            .strong()
                                            .color(TEXT_PRIMARY),
                                    );
                                    ui.label(RichText::new("WINS!").size(14.0).color(WIN_HIGHLIGHT));
                                });
                            });

                            if let Some(line) = self.session.game().winning_line() {
                                ui.add_space(4.0);
                                ui.label(
                                    RichText::new(format!("by {} in a row", line.len()))
                                        .size(11.0)
                                        .color(TEXT_SECONDARY),
                                );
                            }
                        }
                        None => {
                            ui.label(RichText::new("DRAW").size(18.0).strong().color(TEXT_PRIMARY));
                            ui.label(RichText::new("the board is full").size(11.0).color(TEXT_SECONDARY));
                        }
                    }

                    ui.add_space(12.0);

                    Frame::new()
                        .fill(GAME_OVER_BUTTON)
                        .corner_radius(CornerRadius::same(6))
                        .inner_margin(10.0)
                        .show(ui, |ui| {
                            let new_game = egui::Label::new(
                                RichText::new("New Game").size(14.0).strong().color(TEXT_PRIMARY),
                            )
                            .sense(egui::Sense::click());
                            if ui.add(new_game).clicked() {
                                self.session.on_reset_requested();
                            }
                        });
                });
            });
    }

    /// Render status message card
    fn render_message_card(&self, ui: &mut egui::Ui) {
        Frame::new()
            .fill(MESSAGE_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("ⓘ").size(14.0));
                    ui.add_space(4.0);
                    ui.label(RichText::new(self.session.message()).size(11.0).color(TEXT_PRIMARY));
                });
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(Frame::new().fill(BOARD_AREA_BG).inner_margin(10.0))
            .show(ctx, |ui| {
                if let Some(pos) = self.board_view.show(ui, self.session.game()) {
                    // Rejections are shown through the session message
                    let _ = self
                        .session
                        .on_cell_activated(pos.row as i32, pos.col as i32);
                }
            });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let restart = ctx.input(|i| i.key_pressed(egui::Key::N) || i.key_pressed(egui::Key::R));
        if restart {
            self.session.on_reset_requested();
        }
    }
}

impl eframe::App for GomokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);
    }
}

mod helpers;
pub mod confetti;
pub mod layout;
pub mod views;

use crate::app::SpellCraftApp;
use crate::model::AppState;
use eframe::{App, Frame};
use egui::Context;
use layout::{bottom_panel, top_panel};
use std::time::Duration;

impl App for SpellCraftApp {
    fn update(&mut self, ctx: &Context, frame: &mut Frame) {
        // Progress writes through as soon as an operation changed it, not
        // just on the shutdown/autosave path.
        if self.progress_dirty {
            if let Some(storage) = frame.storage_mut() {
                self.persist(storage);
                storage.flush();
            }
            self.progress_dirty = false;
        }

        // Deadlines are checked against the UI clock every frame; keep
        // frames coming while one is outstanding.
        if self.state == AppState::InProgress {
            let now = ctx.input(|i| i.time);
            self.tick(now);
            if self.pending_advance.is_some() {
                ctx.request_repaint_after(Duration::from_millis(50));
            }
        }

        top_panel(self, ctx);
        bottom_panel(ctx);

        match self.state {
            AppState::LanguageSelect => views::language::ui_language_select(self, ctx),
            AppState::LevelSelect => views::level_menu::ui_level_menu(self, ctx),
            AppState::InProgress => views::game::ui_game(self, ctx),
            AppState::Results => views::results::ui_results(self, ctx),
        }

        if self.show_dashboard {
            views::dashboard::ui_dashboard(self, ctx);
        }

        if self.confirm_exit {
            self.confirm_exit_window(ctx);
        }

        if let Some(confetti) = &mut self.confetti {
            if !confetti.draw(ctx) {
                self.confetti = None;
            }
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        self.persist(storage);
    }
}

impl SpellCraftApp {
    fn confirm_exit_window(&mut self, ctx: &Context) {
        egui::Window::new("Leave the level?")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label("Are you sure you want to exit? Your progress will be saved.");
                ui.horizontal(|ui| {
                    if ui.button("Yes, exit").clicked() {
                        self.confirm_exit = false;
                        self.exit_to_levels();
                    }
                    if ui.button("Keep playing").clicked() {
                        self.confirm_exit = false;
                    }
                });
            });
    }
}

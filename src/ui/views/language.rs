use crate::SpellCraftApp;
use crate::model::Language;
use crate::ui::layout::centered_panel;
use egui::{Button, Context, RichText};

pub fn ui_language_select(app: &mut SpellCraftApp, ctx: &Context) {
    centered_panel(ctx, 320.0, 540.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("✨ SpellCraft");
            ui.add_space(6.0);
            ui.label("Spelling practice for curious kids");
            ui.add_space(18.0);
            ui.label("Choose your language");
            ui.add_space(12.0);

            let button_width = (ui.available_width() - 40.0).clamp(160.0, 280.0);

            let btn_english =
                ui.add_sized([button_width, 44.0], Button::new("🇬🇧 English"));
            ui.add_space(6.0);
            let btn_irish =
                ui.add_sized([button_width, 44.0], Button::new("🇮🇪 Gaeilge (Irish)"));

            if btn_english.clicked() {
                app.select_language(Language::English);
            }
            if btn_irish.clicked() {
                app.select_language(Language::Irish);
            }

            #[cfg(not(target_arch = "wasm32"))]
            {
                ui.add_space(6.0);
                if ui
                    .add_sized([button_width, 44.0], Button::new("❌ Quit"))
                    .clicked()
                {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            }

            if !app.message.is_empty() {
                ui.add_space(12.0);
                ui.label(RichText::new(&app.message).strong());
            }
        });
    });
}

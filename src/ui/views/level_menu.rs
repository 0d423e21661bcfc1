use crate::SpellCraftApp;
use crate::ui::helpers::big_list_button;
use crate::ui::layout::centered_panel;
use egui::{Button, Context, RichText};

pub fn ui_level_menu(app: &mut SpellCraftApp, ctx: &Context) {
    let Some(language) = app.selected_language else {
        // No language yet: the dispatcher shows the selector next frame.
        app.back_to_languages();
        return;
    };

    let infos = app.level_infos(language);
    let est_height = 120.0 + 44.0 * infos.len() as f32;

    centered_panel(ctx, est_height, 420.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading(format!("Choose a Level · {}", language.display_name()));
            ui.add_space(16.0);

            if !app.message.is_empty() {
                ui.label(RichText::new(&app.message).strong());
                ui.add_space(8.0);
            }

            let button_width = ui.available_width().min(320.0);
            for info in &infos {
                if big_list_button(ui, info.label(), button_width, 36.0, info.unlocked) {
                    app.start_level(info.level);
                }
                ui.add_space(8.0);
            }

            ui.add_space(12.0);
            if ui
                .add_sized([button_width, 36.0], Button::new("↩ Change language"))
                .clicked()
            {
                app.back_to_languages();
            }
        });
    });
}

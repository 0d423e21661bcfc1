use crate::SpellCraftApp;
use crate::ui::layout::{centered_panel, two_button_row};
use egui::{Button, Context, RichText};

pub fn ui_results(app: &mut SpellCraftApp, ctx: &Context) {
    let Some(outcome) = app.outcome else {
        app.exit_to_levels();
        return;
    };
    // "Next level" past the last one falls back to the level menu with a
    // congratulations message, so the button can always be offered on a pass.
    let passed = outcome.accuracy >= 60;

    centered_panel(ctx, 360.0, 480.0, |ui| {
        ui.vertical_centered(|ui| {
            let panel_width = ui.available_width().min(400.0);

            ui.heading("🎉 Level Complete!");
            ui.add_space(12.0);
            ui.label(
                RichText::new(format!("{} / {}", outcome.score, outcome.total))
                    .size(28.0)
                    .strong(),
            );
            ui.label(format!("{}% accuracy", outcome.accuracy));
            ui.add_space(10.0);

            ui.label(RichText::new(outcome.tier.emojis().join(" ")).size(24.0));
            ui.add_space(8.0);
            ui.label(outcome.tier.device_time_message());
            ui.add_space(18.0);

            let (retry, next_or_exit) = two_button_row(
                ui,
                panel_width,
                "🔄 Try again",
                if passed { "➡ Next level" } else { "🏠 Back to levels" },
            );
            if retry {
                app.retry_level();
            }
            if next_or_exit {
                if passed {
                    app.next_level();
                } else {
                    app.exit_to_levels();
                }
            }

            if passed {
                ui.add_space(8.0);
                if ui
                    .add_sized([panel_width / 2.0, 32.0], Button::new("🏠 Back to levels"))
                    .clicked()
                {
                    app.exit_to_levels();
                }
            }
        });
    });
}

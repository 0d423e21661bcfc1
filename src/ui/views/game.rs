use crate::SpellCraftApp;
use crate::app::Feedback;
use crate::ui::layout::centered_panel;
use egui::{Button, Color32, Context, Key, ProgressBar, RichText, TextEdit};

pub fn ui_game(app: &mut SpellCraftApp, ctx: &Context) {
    let Some((level, score, total)) = app
        .session
        .as_ref()
        .map(|s| (s.level, s.score, s.words.len()))
    else {
        app.exit_to_levels();
        return;
    };

    let now = ctx.input(|i| i.time);
    let answered = app.pending_advance.is_some();
    let hint = app.current_hint().map(|h| h.to_owned());
    let reveal = app.reveal_word;

    centered_panel(ctx, 420.0, 560.0, |ui| {
        ui.vertical_centered(|ui| {
            let panel_width = ui.available_width().min(480.0);

            ui.heading(format!("Level {level}"));
            ui.add_space(4.0);
            ui.label(format!("Score: {score} / {total}"));
            ui.add_space(6.0);
            ui.add(
                ProgressBar::new(app.level_progress())
                    .desired_width(panel_width)
                    .show_percentage(),
            );
            ui.add_space(14.0);

            if let Some(hint) = hint {
                let line = if reveal {
                    format!("Spell: {hint}")
                } else {
                    format!("💡 {hint}")
                };
                ui.label(RichText::new(line).size(18.0));
            }
            ui.add_space(10.0);

            if ui
                .add_sized([panel_width / 2.0, 36.0], Button::new("🔊 Hear the word"))
                .clicked()
            {
                app.play_current_word();
            }
            ui.add_space(10.0);

            let mut submit = false;
            if let Some(session) = &mut app.session {
                let response = ui.add(
                    TextEdit::singleline(&mut session.input)
                        .hint_text("Type the word here")
                        .desired_width(panel_width)
                        .interactive(!answered),
                );
                if response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
                    submit = true;
                }
                // A new word just loaded: put the caret back so typing can
                // continue without a click.
                if app.refocus_input {
                    response.request_focus();
                    app.refocus_input = false;
                }
            }
            ui.add_space(8.0);

            if ui
                .add_sized([panel_width / 2.0, 36.0], Button::new("✔ Check spelling"))
                .clicked()
            {
                submit = true;
            }
            if submit {
                app.submit_spelling(now);
            }

            ui.add_space(10.0);
            match &app.feedback {
                Some(Feedback::Correct { emoji }) => {
                    ui.label(
                        RichText::new(format!("Excellent! {emoji}"))
                            .color(Color32::from_rgb(60, 170, 60))
                            .size(18.0)
                            .strong(),
                    );
                }
                Some(Feedback::Incorrect { correct_word }) => {
                    ui.label(
                        RichText::new(format!(
                            "Not quite right. The correct spelling is: {correct_word}"
                        ))
                        .color(Color32::from_rgb(200, 80, 80))
                        .size(16.0)
                        .strong(),
                    );
                }
                None => {}
            }

            ui.add_space(16.0);
            ui.separator();
            ui.add_space(8.0);

            let record_label = if app.recorder.is_recording() {
                "⏹ Stop recording"
            } else {
                "🎤 Start recording"
            };
            ui.horizontal(|ui| {
                ui.add_space((ui.available_width() - panel_width).max(0.0) / 2.0);
                if ui
                    .add_sized([panel_width / 2.0 - 4.0, 32.0], Button::new(record_label))
                    .clicked()
                {
                    app.recorder.toggle();
                }
                if ui
                    .add_enabled(
                        app.recorder.has_recording(),
                        Button::new("▶ Play recording").min_size([panel_width / 2.0 - 4.0, 32.0].into()),
                    )
                    .clicked()
                {
                    app.recorder.play();
                }
            });
            if let Some(status) = app.recorder.status().message() {
                ui.add_space(4.0);
                ui.label(status.to_owned());
            }

            ui.add_space(12.0);
            if ui
                .add_sized([panel_width / 2.0, 32.0], Button::new("🚪 Exit level"))
                .clicked()
            {
                app.confirm_exit = true;
            }

            if !app.message.is_empty() {
                ui.add_space(6.0);
                ui.label(&app.message);
            }
        });
    });
}

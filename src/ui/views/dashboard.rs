use crate::SpellCraftApp;
use egui::{Context, Grid, RichText};

/// Parent dashboard: overall progress, earned device time and the most
/// recent activity entries, newest first.
pub fn ui_dashboard(app: &mut SpellCraftApp, ctx: &Context) {
    let stats = app.dashboard_stats();
    let recent: Vec<String> = app
        .recent_activities(5)
        .into_iter()
        .map(|s| s.to_owned())
        .collect();

    let mut open = app.show_dashboard;
    egui::Window::new("👪 Parent Dashboard")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            match stats {
                Some(stats) => {
                    Grid::new("dashboard_grid").spacing([16.0, 6.0]).show(ui, |ui| {
                        ui.label("Total progress");
                        ui.label(RichText::new(format!("{}%", stats.progress_percent)).strong());
                        ui.end_row();

                        ui.label("Levels completed");
                        ui.label(format!("{}/{}", stats.completed, stats.total));
                        ui.end_row();

                        ui.label("Device time earned");
                        ui.label(format!("{} mins", stats.device_minutes));
                        ui.end_row();
                    });
                }
                None => {
                    ui.label("Pick a language to see progress.");
                }
            }

            ui.add_space(8.0);
            ui.label(RichText::new("Recent activity").strong());
            if recent.is_empty() {
                ui.label("No activity yet");
            } else {
                for entry in &recent {
                    ui.label(entry);
                }
            }
        });
    app.show_dashboard = open;
}

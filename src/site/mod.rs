//! The second page in this repository: a small personal site with a
//! responsive navigation bar and a file-upload preview widget. Unrelated to
//! the spelling game; it only shares the upload list and layout helpers.

use crate::uploads::{UploadList, format_file_size, guess_mime};
use egui::{
    Align, Button, Color32, Context, Frame, RichText, ScrollArea, Stroke, load::Bytes, vec2,
};

/// Below this window width the nav collapses into a hamburger menu.
const MOBILE_BREAKPOINT: f32 = 768.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    About,
    Research,
    Documents,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::About,
        Section::Research,
        Section::Documents,
        Section::Contact,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Section::About => "About",
            Section::Research => "Research",
            Section::Documents => "Documents",
            Section::Contact => "Contact",
        }
    }
}

#[derive(Default)]
pub struct SiteApp {
    uploads: UploadList,
    menu_open: bool,
    scroll_to: Option<Section>,
    drag_hover: bool,
    status: String,
}

impl SiteApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);
        Self::default()
    }

    fn collect_dropped_files(&mut self, ctx: &Context) {
        self.drag_hover = ctx.input(|i| !i.raw.hovered_files.is_empty());

        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        for file in dropped {
            if let Some(bytes) = file.bytes {
                let name = if file.name.is_empty() {
                    file.path
                        .as_deref()
                        .and_then(|p| p.file_name())
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_else(|| "unnamed".to_owned())
                } else {
                    file.name
                };
                let mime = if file.mime.is_empty() {
                    guess_mime(&name).to_owned()
                } else {
                    file.mime
                };
                self.uploads.push(name, mime, bytes);
            } else if let Some(path) = file.path {
                #[cfg(not(target_arch = "wasm32"))]
                if let Err(err) = self.uploads.push_path(&path) {
                    log::warn!("could not read dropped file {}: {err}", path.display());
                    self.status = format!("Could not read {}", path.display());
                }
                #[cfg(target_arch = "wasm32")]
                let _ = path;
            }
        }
    }

    fn nav_panel(&mut self, ctx: &Context) {
        egui::TopBottomPanel::top("site_nav").show(ctx, |ui| {
            let narrow = ui.available_width() < MOBILE_BREAKPOINT;
            if !narrow {
                // Growing the window past the breakpoint closes the menu.
                self.menu_open = false;
            }

            ui.horizontal(|ui| {
                ui.heading("✏ Portfolio");
                ui.with_layout(egui::Layout::right_to_left(Align::Center), |ui| {
                    if narrow {
                        if ui.button("☰").clicked() {
                            self.menu_open = !self.menu_open;
                        }
                    } else {
                        for section in Section::ALL.iter().rev() {
                            if ui.button(section.title()).clicked() {
                                self.scroll_to = Some(*section);
                            }
                        }
                    }
                });
            });

            if narrow && self.menu_open {
                ui.separator();
                for section in Section::ALL {
                    if ui
                        .add_sized([ui.available_width(), 30.0], Button::new(section.title()))
                        .clicked()
                    {
                        self.scroll_to = Some(section);
                        self.menu_open = false;
                    }
                }
                ui.add_space(4.0);
            }
        });
    }

    fn section_body(&mut self, ui: &mut egui::Ui, section: Section) {
        match section {
            Section::About => {
                ui.label(
                    "Lecturer and science-outreach enthusiast. This page collects a short \
                     biography, current research themes and documents for collaborators.",
                );
            }
            Section::Research => {
                ui.label("Current themes:");
                ui.label("• Mathematics education and playful learning tools");
                ui.label("• Community STEM outreach programmes");
                ui.label("• Bilingual literacy (English / Gaeilge)");
            }
            Section::Documents => self.upload_widget(ui),
            Section::Contact => {
                ui.label("Reach out through the institutional directory, or leave documents in the section above.");
            }
        }
    }

    fn upload_widget(&mut self, ui: &mut egui::Ui) {
        let accent = if self.drag_hover {
            Color32::from_rgb(100, 150, 255)
        } else {
            ui.visuals().weak_text_color()
        };
        Frame::default()
            .stroke(Stroke::new(1.5, accent))
            .inner_margin(egui::Margin::symmetric(24, 20))
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("📤").size(28.0));
                    ui.label("Drag & drop files here");
                    #[cfg(not(target_arch = "wasm32"))]
                    if ui.button("📁 Browse files").clicked() {
                        if let Some(paths) = rfd::FileDialog::new().pick_files() {
                            for path in paths {
                                if let Err(err) = self.uploads.push_path(&path) {
                                    log::warn!(
                                        "could not read {}: {err}",
                                        path.display()
                                    );
                                    self.status = format!("Could not read {}", path.display());
                                }
                            }
                        }
                    }
                });
            });

        if !self.status.is_empty() {
            ui.add_space(4.0);
            ui.label(RichText::new(&self.status).color(Color32::from_rgb(200, 80, 80)));
        }

        if self.uploads.is_empty() {
            return;
        }

        ui.add_space(10.0);
        ui.horizontal(|ui| {
            ui.label(RichText::new("Selected files").strong());
            if ui.button("Clear all").clicked() {
                for file in self.uploads.clear() {
                    ui.ctx().forget_image(&file.preview_uri());
                }
            }
        });
        ui.add_space(6.0);

        // Previews follow list order: insertion order, regardless of when
        // each image finishes decoding.
        let mut pending_remove = None;
        ui.horizontal_wrapped(|ui| {
            for (index, file) in self.uploads.iter().enumerate() {
                ui.allocate_ui(vec2(150.0, 190.0), |ui| {
                    ui.vertical(|ui| {
                        if file.is_image() {
                            ui.add(
                                egui::Image::from_bytes(
                                    file.preview_uri(),
                                    Bytes::Shared(file.bytes.clone()),
                                )
                                .fit_to_exact_size(vec2(140.0, 120.0)),
                            );
                        } else {
                            ui.label(RichText::new(file.icon()).size(48.0));
                        }
                        // File names render as literal text; markup in a
                        // name cannot become markup here.
                        ui.label(file.display_name(18)).on_hover_text(&file.name);
                        ui.label(
                            RichText::new(format_file_size(file.size()))
                                .weak()
                                .small(),
                        );
                        if ui.small_button("✖ Remove").clicked() {
                            pending_remove = Some(index);
                        }
                    });
                });
            }
        });

        if let Some(index) = pending_remove {
            if let Some(file) = self.uploads.remove(index) {
                ui.ctx().forget_image(&file.preview_uri());
            }
        }
    }

    fn drag_overlay(&self, ctx: &Context) {
        if !self.drag_hover {
            return;
        }
        let screen = ctx.screen_rect();
        let painter = ctx.layer_painter(egui::LayerId::new(
            egui::Order::Foreground,
            egui::Id::new("drop_overlay"),
        ));
        painter.rect_filled(screen, 0, Color32::from_black_alpha(120));
        painter.text(
            screen.center(),
            egui::Align2::CENTER_CENTER,
            "Drop files to add them",
            egui::FontId::proportional(24.0),
            Color32::WHITE,
        );
    }
}

impl eframe::App for SiteApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.collect_dropped_files(ctx);
        self.nav_panel(ctx);

        let scroll_target = self.scroll_to.take();
        egui::CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical().auto_shrink([false; 2]).show(ui, |ui| {
                let content_width = ui.available_width().min(760.0);
                ui.vertical_centered(|ui| {
                    ui.set_width(content_width);
                    for section in Section::ALL {
                        let heading = ui.heading(section.title());
                        if scroll_target == Some(section) {
                            heading.scroll_to_me(Some(Align::Min));
                        }
                        ui.add_space(6.0);
                        self.section_body(ui, section);
                        ui.add_space(24.0);
                        ui.separator();
                        ui.add_space(24.0);
                    }
                });
            });
        });

        self.drag_overlay(ctx);
    }
}

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use spellcraft::SpellCraftApp;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([500.0, 640.0])
            .with_min_inner_size([400.0, 480.0])
            .with_title("SpellCraft"),
        ..Default::default()
    };
    eframe::run_native(
        "SpellCraft",
        options,
        Box::new(|cc| Ok(Box::new(SpellCraftApp::new(cc)))),
    )
}

#[cfg(target_arch = "wasm32")]
fn main() {
    use eframe::wasm_bindgen::JsCast as _;

    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        let document = web_sys::window()
            .expect("no window")
            .document()
            .expect("no document");
        let canvas = document
            .get_element_by_id("spellcraft_canvas")
            .expect("missing canvas with id spellcraft_canvas")
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .expect("element is not a canvas");

        eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|cc| Ok(Box::new(SpellCraftApp::new(cc)))),
            )
            .await
            .expect("failed to start eframe");
    });
}

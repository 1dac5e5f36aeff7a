// main.rs - Windowed Life simulator

use eframe::egui;

mod app;

use app::LifeApp;

fn main() -> Result<(), eframe::Error> {
    simple_logger::init().unwrap();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([app::INITIAL_CLIENT, app::INITIAL_CLIENT]),
        ..Default::default()
    };

    eframe::run_native(
        "winlife",
        options,
        Box::new(|_cc| Box::new(LifeApp::default())),
    )
}

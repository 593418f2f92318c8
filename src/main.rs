use eframe::egui;

use theme_toggler::app::TogglerApp;
use theme_toggler::logging;
use theme_toggler::settings::FileStore;
use theme_toggler::switcher::Config;

fn main() -> anyhow::Result<()> {
    let glow = std::env::args().any(|arg| arg == "--glow");
    let debug = std::env::args().any(|arg| arg == "--debug");
    logging::init(debug);

    let store = FileStore::open(FileStore::default_path()?);
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([900.0, 640.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Theme Toggler",
        native_options,
        Box::new(move |cc| Box::new(TogglerApp::new(cc, Box::new(store), Config { glow }))),
    )?;
    Ok(())
}

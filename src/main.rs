use std::path::Path;

use eframe::egui;
use property_lens::app::PropertyLensApp;
use property_lens::data::loader::{self, DEFAULT_DATA_PATH};
use property_lens::state::AppState;

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Property Lens – Listing Dashboard",
        options,
        Box::new(|_cc| {
            let mut state = AppState::default();

            // A missing default dataset just means File → Open; a broken
            // one aborts startup.
            let default_path = Path::new(DEFAULT_DATA_PATH);
            if default_path.exists() {
                let table = loader::load_file(default_path)?;
                log::info!(
                    "loaded {} listings from {}",
                    table.len(),
                    default_path.display()
                );
                state.set_table(table, default_path.to_path_buf());
            }

            Ok(Box::new(PropertyLensApp::new(state)))
        }),
    )
}

use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::filter::CityFilter;
use crate::state::{AppState, Tab};

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if ui
            .selectable_label(state.tab == Tab::Listings, "Listings")
            .clicked()
        {
            state.tab = Tab::Listings;
        }
        if ui
            .selectable_label(state.tab == Tab::Charts, "Charts")
            .clicked()
        {
            state.tab = Tab::Charts;
        }

        ui.separator();

        if let Some(table) = &state.table {
            ui.label(format!(
                "{} listings loaded, {} shown",
                table.len(),
                state.visible_indices.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    // Clone what we need so we can mutate state below.
    let cities: Vec<String> = match &state.table {
        Some(table) => table.cities.iter().cloned().collect(),
        None => {
            ui.label("No dataset loaded.");
            return;
        }
    };

    ui.strong("Search title");
    let mut changed = ui
        .text_edit_singleline(&mut state.query.search_term)
        .changed();

    ui.add_space(8.0);
    ui.strong("City");
    egui::ComboBox::from_id_salt("city_filter")
        .selected_text(state.query.city.label().to_string())
        .show_ui(ui, |ui: &mut Ui| {
            if ui
                .selectable_label(state.query.city == CityFilter::All, "All")
                .clicked()
            {
                state.query.city = CityFilter::All;
                changed = true;
            }
            for city in &cities {
                let selected = state.query.city == CityFilter::City(city.clone());
                if ui.selectable_label(selected, city).clicked() {
                    state.query.city = CityFilter::City(city.clone());
                    changed = true;
                }
            }
        });

    ui.add_space(8.0);
    ui.checkbox(&mut state.show_links, "Show property links");

    ui.add_space(8.0);
    if ui.button("Clear filters").clicked() {
        state.clear_filters();
    }

    // Recompute visible indices after any input change.
    if changed {
        state.refilter();
    }
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open listings data")
        .add_filter("Supported files", &["csv", "json"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        state.load_from(&path);
    }
}

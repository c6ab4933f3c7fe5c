use eframe::egui::{RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::{ListingTable, COL_LINKS};
use crate::data::stats::{self, PriceStats};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Listings tab: price statistics + table of the filtered view
// ---------------------------------------------------------------------------

pub fn listings_panel(ui: &mut Ui, state: &AppState) {
    let table = match &state.table {
        Some(t) => t,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Open a listings file to get started  (File → Open…)");
            });
            return;
        }
    };

    price_stats_block(ui, table, &state.visible_indices);
    ui.separator();
    listing_table(ui, table, &state.visible_indices, state.show_links);
}

fn price_stats_block(ui: &mut Ui, table: &ListingTable, indices: &[usize]) {
    ui.heading("Price statistics");
    match stats::clean_and_summarize(table, indices) {
        PriceStats::Summary(summary) => {
            ui.label(format!("Average price: {}", stats::format_rupiah(summary.mean)));
            ui.label(format!("Highest price: {}", stats::format_rupiah(summary.max)));
            ui.label(format!("Lowest price: {}", stats::format_rupiah(summary.min)));
            if summary.count < indices.len() {
                ui.label(format!(
                    "{} of {} listings have a usable price",
                    summary.count,
                    indices.len()
                ));
            }
        }
        PriceStats::Empty => {
            ui.label("No listings match the current filters.");
        }
        PriceStats::Unparseable => {
            ui.label(
                RichText::new("Price column could not be analyzed.")
                    .color(ui.visuals().warn_fg_color),
            );
        }
    }
}

fn listing_table(ui: &mut Ui, table: &ListingTable, indices: &[usize], show_links: bool) {
    // property_links stays hidden unless explicitly revealed.
    let columns: Vec<&str> = table
        .column_names
        .iter()
        .map(String::as_str)
        .filter(|name| show_links || *name != COL_LINKS)
        .collect();

    ScrollArea::horizontal().show(ui, |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .columns(Column::auto().at_least(80.0), columns.len())
            .header(20.0, |mut header| {
                for name in &columns {
                    header.col(|ui| {
                        ui.strong(*name);
                    });
                }
            })
            .body(|body| {
                body.rows(18.0, indices.len(), |mut row| {
                    let listing = &table.listings[indices[row.index()]];
                    for name in &columns {
                        row.col(|ui| {
                            if let Some(value) = listing.get(name) {
                                ui.label(value.to_string());
                            }
                        });
                    }
                });
            });
    });
}

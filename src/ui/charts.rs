use std::collections::BTreeMap;

use eframe::egui::{Color32, RichText, Ui};
use egui_plot::{
    Bar, BarChart, BoxElem, BoxPlot, BoxSpread, Legend, MarkerShape, Plot, PlotPoints, Points,
};

use crate::color::CityColors;
use crate::data::charts::{self, HISTOGRAM_BINS};
use crate::data::model::ListingTable;
use crate::data::stats;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Charts tab: 2×2 grid over the filtered view
// ---------------------------------------------------------------------------

pub fn charts_panel(ui: &mut Ui, state: &AppState) {
    let table = match &state.table {
        Some(t) => t,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Open a listings file to get started  (File → Open…)");
            });
            return;
        }
    };

    let indices = &state.visible_indices;
    let prices = stats::cleaned_prices(table, indices);
    let values: Vec<f64> = prices.iter().flatten().copied().collect();

    // Same gate as the statistics block: no usable prices, no charts.
    if values.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label(
                RichText::new("Price column could not be analyzed; charts are unavailable.")
                    .color(ui.visuals().warn_fg_color),
            );
        });
        return;
    }

    let colors = state.city_colors.as_ref();
    let half_height = (ui.available_height() / 2.0 - 28.0).max(160.0);

    ui.columns(2, |cols: &mut [Ui]| {
        price_histogram(&mut cols[0], &values, half_height);
        price_vs_bathrooms(&mut cols[1], table, indices, colors, half_height);
    });
    ui.columns(2, |cols: &mut [Ui]| {
        city_mean_bar(&mut cols[0], table, indices, colors, half_height);
        price_boxplot(&mut cols[1], &values, half_height);
    });
}

// ---------------------------------------------------------------------------
// Individual charts
// ---------------------------------------------------------------------------

fn price_histogram(ui: &mut Ui, values: &[f64], height: f32) {
    ui.strong("Price distribution");

    let bins = charts::histogram(values, HISTOGRAM_BINS);
    let bars: Vec<Bar> = bins
        .iter()
        .map(|bin| {
            Bar::new((bin.lower + bin.upper) / 2.0, bin.count as f64)
                .width(bin.upper - bin.lower)
                .name(format!(
                    "{} – {}",
                    stats::format_rupiah(bin.lower),
                    stats::format_rupiah(bin.upper)
                ))
        })
        .collect();

    Plot::new("price_histogram")
        .height(height)
        .x_axis_label("Price")
        .y_axis_label("Listings")
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).color(Color32::LIGHT_BLUE));
        });
}

fn price_vs_bathrooms(
    ui: &mut Ui,
    table: &ListingTable,
    indices: &[usize],
    colors: Option<&CityColors>,
    height: f32,
) {
    ui.strong("Price vs. bathrooms");

    // One series per city so the legend doubles as the colour key.
    let mut by_city: BTreeMap<String, Vec<[f64; 2]>> = BTreeMap::new();
    for point in charts::scatter_points(table, indices) {
        by_city
            .entry(point.city.unwrap_or_else(|| "(no city)".to_string()))
            .or_default()
            .push([point.bathrooms, point.price]);
    }

    Plot::new("price_vs_bathrooms")
        .height(height)
        .legend(Legend::default())
        .x_axis_label("Bathrooms")
        .y_axis_label("Price")
        .show(ui, |plot_ui| {
            for (city, points) in by_city {
                let color = colors
                    .map(|c| c.color_for(Some(&city)))
                    .unwrap_or(Color32::LIGHT_BLUE);
                plot_ui.points(
                    Points::new(PlotPoints::from(points))
                        .name(&city)
                        .color(color)
                        .shape(MarkerShape::Circle)
                        .radius(3.0),
                );
            }
        });
}

fn city_mean_bar(
    ui: &mut Ui,
    table: &ListingTable,
    indices: &[usize],
    colors: Option<&CityColors>,
    height: f32,
) {
    ui.strong("Average price by city");

    let aggregates = charts::city_mean_prices(table, indices);
    let bars: Vec<Bar> = aggregates
        .iter()
        .enumerate()
        .filter_map(|(i, agg)| {
            let mean = agg.mean_price?;
            let color = colors
                .map(|c| c.color_for(Some(&agg.city)))
                .unwrap_or(Color32::LIGHT_BLUE);
            Some(
                Bar::new(i as f64, mean)
                    .width(0.7)
                    .name(format!("{} ({} listings)", agg.city, agg.listings))
                    .fill(color),
            )
        })
        .collect();

    Plot::new("city_mean_prices")
        .height(height)
        .x_axis_label("City")
        .y_axis_label("Mean price")
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });
}

fn price_boxplot(ui: &mut Ui, values: &[f64], height: f32) {
    ui.strong("Price spread");

    let Some(summary) = charts::boxplot(values) else {
        return;
    };

    let elem = BoxElem::new(
        0.0,
        BoxSpread::new(
            summary.whisker_low,
            summary.q1,
            summary.median,
            summary.q3,
            summary.whisker_high,
        ),
    )
    .name("price")
    .box_width(0.5);

    let outliers: Vec<[f64; 2]> = summary.outliers.iter().map(|&v| [v, 0.0]).collect();

    Plot::new("price_boxplot")
        .height(height)
        .x_axis_label("Price")
        .show(ui, |plot_ui| {
            plot_ui.box_plot(BoxPlot::new(vec![elem]).horizontal());
            if !outliers.is_empty() {
                plot_ui.points(
                    Points::new(PlotPoints::from(outliers))
                        .name("outliers")
                        .shape(MarkerShape::Circle)
                        .radius(2.5),
                );
            }
        });
}

//! End-to-end pipeline tests: load → filter → statistics → chart data.

use std::io::Write;

use tempfile::NamedTempFile;

use property_lens::data::charts::{self, HISTOGRAM_BINS};
use property_lens::data::filter::{filtered_indices, CityFilter, FilterQuery};
use property_lens::data::loader::load_file;
use property_lens::data::stats::{self, PriceStats};

/// Create a small listings CSV in the scraper's output shape.
fn create_test_csv() -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    writeln!(file, "title,city,price,bedroom,bathroom,property_links").unwrap();

    writeln!(file, "Cozy Villa with Pool,Ubud,Rp 1.000.000,2,1,https://example.com/1").unwrap();
    writeln!(file, "Beachfront Apartment,Canggu,Rp 2.000.000,1,2,https://example.com/2").unwrap();
    writeln!(file, "Modern villa near beach,Canggu,Rp 3.000.000,3,2,https://example.com/3").unwrap();
    // unparseable price, still a displayable row
    writeln!(file, "Hillside Bungalow,Kuta,Contact agent,2,1,https://example.com/4").unwrap();
    // missing city and price
    writeln!(file, "Downtown Loft,,,1,1,https://example.com/5").unwrap();

    file
}

fn query(search: &str, city: CityFilter) -> FilterQuery {
    FilterQuery {
        search_term: search.to_string(),
        city,
    }
}

#[test]
fn end_to_end_pipeline() {
    let file = create_test_csv();
    let table = load_file(file.path()).unwrap();

    // Loading preserves row order and keeps the unparseable rows.
    assert_eq!(table.len(), 5);
    assert_eq!(table.listings[0].title(), Some("Cozy Villa with Pool"));
    assert_eq!(table.listings[4].city(), None);

    // City options: distinct non-null cities, sorted.
    let cities: Vec<&str> = table.cities.iter().map(String::as_str).collect();
    assert_eq!(cities, ["Canggu", "Kuta", "Ubud"]);

    // Filter: search + city compose with AND.
    let indices = filtered_indices(&table, &query("villa", CityFilter::City("Canggu".into())));
    assert_eq!(indices, [2]);

    // Statistics over the filtered view.
    match stats::clean_and_summarize(&table, &indices) {
        PriceStats::Summary(s) => {
            assert_eq!(s.count, 1);
            assert_eq!(s.mean, 3_000_000.0);
        }
        other => panic!("expected a summary, got {other:?}"),
    }
}

#[test]
fn unfiltered_statistics_skip_unusable_prices() {
    let file = create_test_csv();
    let table = load_file(file.path()).unwrap();
    let all: Vec<usize> = (0..table.len()).collect();

    match stats::clean_and_summarize(&table, &all) {
        PriceStats::Summary(s) => {
            assert_eq!(s.count, 3);
            assert_eq!(s.mean, 2_000_000.0);
            assert_eq!(s.max, 3_000_000.0);
            assert_eq!(s.min, 1_000_000.0);
        }
        other => panic!("expected a summary, got {other:?}"),
    }
}

#[test]
fn filter_identity_law() {
    let file = create_test_csv();
    let table = load_file(file.path()).unwrap();

    let indices = filtered_indices(&table, &query("", CityFilter::All));
    assert_eq!(indices, (0..table.len()).collect::<Vec<_>>());
}

#[test]
fn chart_data_matches_the_view() {
    let file = create_test_csv();
    let table = load_file(file.path()).unwrap();
    let all: Vec<usize> = (0..table.len()).collect();

    let prices = stats::cleaned_prices(&table, &all);
    let values: Vec<f64> = prices.iter().flatten().copied().collect();

    // Histogram bin counts sum to the number of usable prices.
    let bins = charts::histogram(&values, HISTOGRAM_BINS);
    let total: usize = bins.iter().map(|b| b.count).sum();
    assert_eq!(total, values.len());

    // One aggregate per distinct non-null city.
    let aggregates = charts::city_mean_prices(&table, &all);
    assert_eq!(aggregates.len(), table.cities.len());

    // One scatter point per row with both coordinates.
    let points = charts::scatter_points(&table, &all);
    assert_eq!(points.len(), 3);

    // Boxplot summary spans the observed range.
    let summary = charts::boxplot(&values).unwrap();
    assert_eq!(summary.min, 1_000_000.0);
    assert_eq!(summary.max, 3_000_000.0);
    assert_eq!(summary.median, 2_000_000.0);
}

#[test]
fn all_garbage_prices_yield_a_warning() {
    let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    writeln!(file, "title,city,price,bathroom,property_links").unwrap();
    writeln!(file, "A,Ubud,N/A,1,x").unwrap();
    writeln!(file, "B,Ubud,call us,1,y").unwrap();

    let table = load_file(file.path()).unwrap();
    let all: Vec<usize> = (0..table.len()).collect();

    assert_eq!(stats::clean_and_summarize(&table, &all), PriceStats::Unparseable);

    // The rows themselves are still present for display.
    assert_eq!(table.len(), 2);
}

#[test]
fn charts_respect_the_active_filter() {
    let file = create_test_csv();
    let table = load_file(file.path()).unwrap();

    let indices = filtered_indices(&table, &query("", CityFilter::City("Canggu".into())));
    let aggregates = charts::city_mean_prices(&table, &indices);

    assert_eq!(aggregates.len(), 1);
    assert_eq!(aggregates[0].city, "Canggu");
    assert_eq!(aggregates[0].mean_price, Some(2_500_000.0));
}

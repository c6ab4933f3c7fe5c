use std::collections::BTreeMap;

use super::model::ListingTable;
use super::stats::clean_price;

/// Fixed bin count for the price histogram.
pub const HISTOGRAM_BINS: usize = 10;

// ---------------------------------------------------------------------------
// Histogram
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Bucket values into `bins` fixed-width bins over their observed range.
/// The maximum value lands in the last bin; a degenerate range (all values
/// equal) puts everything in the first. Bin counts always sum to
/// `values.len()`.
pub fn histogram(values: &[f64], bins: usize) -> Vec<HistogramBin> {
    if values.is_empty() || bins == 0 {
        return Vec::new();
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;
    let width = if span > 0.0 { span / bins as f64 } else { 1.0 };

    let mut out: Vec<HistogramBin> = (0..bins)
        .map(|i| HistogramBin {
            lower: min + i as f64 * width,
            upper: min + (i + 1) as f64 * width,
            count: 0,
        })
        .collect();

    for &v in values {
        let idx = (((v - min) / width) as usize).min(bins - 1);
        out[idx].count += 1;
    }
    out
}

// ---------------------------------------------------------------------------
// Scatter: price vs. bathrooms
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    pub bathrooms: f64,
    pub price: f64,
    pub title: String,
    pub city: Option<String>,
}

/// One point per view row with a usable price and a numeric bathroom
/// count.
pub fn scatter_points(table: &ListingTable, indices: &[usize]) -> Vec<ScatterPoint> {
    indices
        .iter()
        .filter_map(|&i| {
            let listing = &table.listings[i];
            let price = listing.price().and_then(clean_price)?;
            let bathrooms = listing.bathroom()?;
            Some(ScatterPoint {
                bathrooms,
                price,
                title: listing.title().unwrap_or("(untitled)").to_string(),
                city: listing.city().map(str::to_string),
            })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Per-city mean price
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct CityAggregate {
    pub city: String,
    /// Rows in this city, priced or not.
    pub listings: usize,
    /// Mean over the city's usable prices; `None` when it has none.
    pub mean_price: Option<f64>,
}

/// Group the view by non-null city and average each group's cleaned
/// prices. One aggregate per distinct city, sorted by city name.
pub fn city_mean_prices(table: &ListingTable, indices: &[usize]) -> Vec<CityAggregate> {
    // city → (row count, priced count, price sum)
    let mut groups: BTreeMap<&str, (usize, usize, f64)> = BTreeMap::new();

    for &i in indices {
        let listing = &table.listings[i];
        let Some(city) = listing.city() else {
            continue;
        };
        let entry = groups.entry(city).or_default();
        entry.0 += 1;
        if let Some(price) = listing.price().and_then(clean_price) {
            entry.1 += 1;
            entry.2 += price;
        }
    }

    groups
        .into_iter()
        .map(|(city, (listings, priced, sum))| CityAggregate {
            city: city.to_string(),
            listings,
            mean_price: (priced > 0).then(|| sum / priced as f64),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Boxplot
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct BoxplotSummary {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
    /// Whisker ends: most extreme values within 1.5·IQR of the quartiles.
    pub whisker_low: f64,
    pub whisker_high: f64,
    /// Values beyond the whiskers.
    pub outliers: Vec<f64>,
}

/// Five-number summary plus outliers, or `None` on empty input.
/// Quartiles use linear interpolation over the sorted values.
pub fn boxplot(values: &[f64]) -> Option<BoxplotSummary> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let q1 = quantile(&sorted, 0.25);
    let median = quantile(&sorted, 0.5);
    let q3 = quantile(&sorted, 0.75);
    let iqr = q3 - q1;
    let low_fence = q1 - 1.5 * iqr;
    let high_fence = q3 + 1.5 * iqr;

    let min = sorted[0];
    let max = sorted[sorted.len() - 1];

    let whisker_low = sorted
        .iter()
        .copied()
        .find(|v| *v >= low_fence)
        .unwrap_or(min);
    let whisker_high = sorted
        .iter()
        .rev()
        .copied()
        .find(|v| *v <= high_fence)
        .unwrap_or(max);

    let outliers = sorted
        .iter()
        .copied()
        .filter(|v| *v < whisker_low || *v > whisker_high)
        .collect();

    Some(BoxplotSummary {
        min,
        q1,
        median,
        q3,
        max,
        whisker_low,
        whisker_high,
        outliers,
    })
}

fn quantile(sorted: &[f64], p: f64) -> f64 {
    if sorted.len() == 1 {
        return sorted[0];
    }
    let h = (sorted.len() - 1) as f64 * p;
    let lo = h.floor() as usize;
    let hi = (lo + 1).min(sorted.len() - 1);
    sorted[lo] + (h - lo as f64) * (sorted[hi] - sorted[lo])
}

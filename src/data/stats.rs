use super::model::{CellValue, ListingTable};

// ---------------------------------------------------------------------------
// Price cleaning
// ---------------------------------------------------------------------------

/// Clean a raw price cell to a non-negative number.
///
/// Scraped prices are free text like `"Rp 1.500.000"`; every non-digit
/// character is stripped and the remainder parsed, so `"Rp 1.500.000"`
/// cleans to `1500000` and `"N/A"`, `"Rp-"` or an empty cell clean to
/// `None`. Cells that already hold a number pass through when
/// non-negative.
pub fn clean_price(raw: &CellValue) -> Option<f64> {
    match raw {
        CellValue::Integer(i) if *i >= 0 => Some(*i as f64),
        CellValue::Float(f) if *f >= 0.0 => Some(*f),
        CellValue::Text(s) => {
            let digits: String = s.chars().filter(|c| c.is_ascii_digit()).collect();
            if digits.is_empty() {
                return None;
            }
            digits.parse::<f64>().ok().filter(|v| v.is_finite())
        }
        _ => None,
    }
}

/// Cleaned price per view row, aligned with `indices`.
pub fn cleaned_prices(table: &ListingTable, indices: &[usize]) -> Vec<Option<f64>> {
    indices
        .iter()
        .map(|&i| table.listings[i].price().and_then(clean_price))
        .collect()
}

// ---------------------------------------------------------------------------
// Summary statistics
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct PriceSummary {
    /// Rows that contributed a usable price.
    pub count: usize,
    pub mean: f64,
    pub max: f64,
    pub min: f64,
}

/// Outcome of price analysis. Callers skip statistics and charts unless a
/// `Summary` comes back, and can tell "no rows" apart from "prices present
/// but unusable".
#[derive(Debug, Clone, PartialEq)]
pub enum PriceStats {
    Summary(PriceSummary),
    /// The view has no rows at all.
    Empty,
    /// Rows exist but no price value could be cleaned to a number.
    Unparseable,
}

/// Summarize cleaned prices: mean, max, min over the non-null values.
pub fn summarize(prices: &[Option<f64>]) -> PriceStats {
    if prices.is_empty() {
        return PriceStats::Empty;
    }

    let values: Vec<f64> = prices.iter().flatten().copied().collect();
    if values.is_empty() {
        return PriceStats::Unparseable;
    }

    let count = values.len();
    let sum: f64 = values.iter().sum();
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);

    PriceStats::Summary(PriceSummary {
        count,
        mean: sum / count as f64,
        max,
        min,
    })
}

/// The whole statistics step in one call: clean the view's price column,
/// then summarize it.
pub fn clean_and_summarize(table: &ListingTable, indices: &[usize]) -> PriceStats {
    summarize(&cleaned_prices(table, indices))
}

// ---------------------------------------------------------------------------
// Currency formatting
// ---------------------------------------------------------------------------

/// Format a price the way the listings are scraped: `Rp 1.500.000`, with
/// dots as thousands separators and no decimals.
pub fn format_rupiah(value: f64) -> String {
    let n = value.round().max(0.0) as u64;
    let digits = n.to_string();

    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    format!("Rp {out}")
}

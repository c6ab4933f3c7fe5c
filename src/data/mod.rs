/// Data layer: core types, loading, filtering, statistics, chart data.
///
/// Architecture:
/// ```text
///  .csv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → ListingTable
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ ListingTable  │  Vec<Listing>, column order, distinct cities
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  title search + city predicate → view indices
///   └──────────┘
///        │
///        ├────────► stats   clean price → summary | warning
///        └────────► charts  histogram, scatter, city means, boxplot
/// ```
pub mod charts;
pub mod filter;
pub mod loader;
pub mod model;
pub mod stats;

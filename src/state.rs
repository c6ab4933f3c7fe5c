use std::path::{Path, PathBuf};

use crate::color::CityColors;
use crate::data::filter::{filtered_indices, FilterQuery};
use crate::data::loader;
use crate::data::model::ListingTable;
use crate::data::stats::{clean_and_summarize, PriceStats};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Central area tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Listings,
    Charts,
}

/// The full UI state, independent of rendering.
#[derive(Default)]
pub struct AppState {
    /// Loaded dataset (None until a file is loaded).
    pub table: Option<ListingTable>,

    /// Where the current dataset came from.
    pub source_path: Option<PathBuf>,

    /// Active filter inputs.
    pub query: FilterQuery,

    /// Indices of listings passing the current query (cached).
    pub visible_indices: Vec<usize>,

    /// Whether the table reveals the `property_links` column.
    pub show_links: bool,

    /// Which central view is active.
    pub tab: Tab,

    /// Per-city chart colours for the current dataset.
    pub city_colors: Option<CityColors>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Ingest a newly loaded table: reset filters, rebuild the view and the
    /// city colour map.
    pub fn set_table(&mut self, table: ListingTable, path: PathBuf) {
        self.query = FilterQuery::default();
        self.visible_indices = (0..table.len()).collect();
        self.city_colors = Some(CityColors::new(&table.cities));

        if clean_and_summarize(&table, &self.visible_indices) == PriceStats::Unparseable {
            log::warn!(
                "price column of {} could not be analyzed; statistics and charts disabled",
                path.display()
            );
        }

        self.table = Some(table);
        self.source_path = Some(path);
        self.status_message = None;
    }

    /// Recompute `visible_indices` after a filter change.
    pub fn refilter(&mut self) {
        if let Some(table) = &self.table {
            self.visible_indices = filtered_indices(table, &self.query);
        }
    }

    /// Reset both filter inputs and show everything again.
    pub fn clear_filters(&mut self) {
        self.query = FilterQuery::default();
        self.refilter();
    }

    /// Explicit pipeline invocation: load `path` and swap the dataset in,
    /// or surface the failure without touching the current one.
    pub fn load_from(&mut self, path: &Path) {
        match loader::load_file(path) {
            Ok(table) => {
                log::info!(
                    "loaded {} listings from {} ({} cities)",
                    table.len(),
                    path.display(),
                    table.cities.len()
                );
                self.set_table(table, path.to_path_buf());
            }
            Err(e) => {
                log::error!("failed to load {}: {e:#}", path.display());
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}

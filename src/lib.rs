//! Property Lens: a desktop dashboard for scraped property listings.
//!
//! The data pipeline (load → filter → summarize → chart derivation) lives in
//! [`data`] and is GUI-free; [`app`], [`state`] and [`ui`] wrap it in an
//! egui shell.

pub mod app;
pub mod color;
pub mod data;
pub mod state;
pub mod ui;

pub use data::loader::load_file;
pub use data::model::{Listing, ListingTable};

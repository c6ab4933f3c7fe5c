use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

// ---------------------------------------------------------------------------
// Column names the pipeline depends on
// ---------------------------------------------------------------------------

pub const COL_TITLE: &str = "title";
pub const COL_CITY: &str = "city";
pub const COL_PRICE: &str = "price";
pub const COL_BATHROOM: &str = "bathroom";
pub const COL_LINKS: &str = "property_links";

/// Columns every listings file must provide. Files may carry any number of
/// additional columns; those are kept and displayed as-is.
pub const REQUIRED_COLUMNS: [&str; 5] = [COL_TITLE, COL_CITY, COL_PRICE, COL_BATHROOM, COL_LINKS];

// ---------------------------------------------------------------------------
// CellValue – a single cell in a listing row
// ---------------------------------------------------------------------------

/// A dynamically-typed cell value. Scraped columns are typed per value, so
/// a mostly-numeric column can still hold the odd free-text entry.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Null => Ok(()),
        }
    }
}

impl CellValue {
    /// Interpret the value as an `f64` if it is numeric.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Float(v) => Some(*v),
            CellValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Borrow the value as text if it is textual.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }
}

// ---------------------------------------------------------------------------
// Listing – one row of the table
// ---------------------------------------------------------------------------

/// A single property listing (one row of the source file).
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    /// Dynamic columns: column_name → value.
    pub fields: BTreeMap<String, CellValue>,
}

impl Listing {
    /// Look up a cell by column name. Missing and `Null` cells both come
    /// back as `None`.
    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.fields.get(column).filter(|v| !v.is_null())
    }

    pub fn title(&self) -> Option<&str> {
        self.get(COL_TITLE)?.as_str()
    }

    pub fn city(&self) -> Option<&str> {
        self.get(COL_CITY)?.as_str()
    }

    /// The raw price cell. Scraped prices are usually free text like
    /// `"Rp 1.500.000"`; cleaning lives in [`crate::data::stats`].
    pub fn price(&self) -> Option<&CellValue> {
        self.get(COL_PRICE)
    }

    pub fn bathroom(&self) -> Option<f64> {
        self.get(COL_BATHROOM)?.as_f64()
    }
}

// ---------------------------------------------------------------------------
// ListingTable – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset, rows in file order.
#[derive(Debug, Clone)]
pub struct ListingTable {
    /// All listings (rows), in source-file order.
    pub listings: Vec<Listing>,
    /// Column names in header order.
    pub column_names: Vec<String>,
    /// Sorted set of distinct non-null city values.
    pub cities: BTreeSet<String>,
}

impl ListingTable {
    /// Build the city index from loaded listings.
    pub fn from_listings(listings: Vec<Listing>, column_names: Vec<String>) -> Self {
        let cities: BTreeSet<String> = listings
            .iter()
            .filter_map(|l| l.city())
            .map(str::to_string)
            .collect();
        ListingTable {
            listings,
            column_names,
            cities,
        }
    }

    /// Number of listings.
    pub fn len(&self) -> usize {
        self.listings.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(title: Option<&str>, city: Option<&str>) -> Listing {
        let mut fields = BTreeMap::new();
        fields.insert(
            COL_TITLE.to_string(),
            title.map_or(CellValue::Null, |t| CellValue::Text(t.to_string())),
        );
        fields.insert(
            COL_CITY.to_string(),
            city.map_or(CellValue::Null, |c| CellValue::Text(c.to_string())),
        );
        Listing { fields }
    }

    #[test]
    fn as_f64_covers_numeric_variants() {
        assert_eq!(CellValue::Integer(3).as_f64(), Some(3.0));
        assert_eq!(CellValue::Float(2.5).as_f64(), Some(2.5));
        assert_eq!(CellValue::Text("3".to_string()).as_f64(), None);
        assert_eq!(CellValue::Null.as_f64(), None);
    }

    #[test]
    fn null_cells_read_as_absent() {
        let listing = row(None, Some("Ubud"));
        assert_eq!(listing.title(), None);
        assert_eq!(listing.city(), Some("Ubud"));
    }

    #[test]
    fn city_index_is_distinct_and_sorted() {
        let listings = vec![
            row(Some("a"), Some("Ubud")),
            row(Some("b"), Some("Canggu")),
            row(Some("c"), Some("Ubud")),
            row(Some("d"), None),
        ];
        let table = ListingTable::from_listings(listings, vec![]);
        let cities: Vec<&str> = table.cities.iter().map(String::as_str).collect();
        assert_eq!(cities, ["Canggu", "Ubud"]);
    }

    #[test]
    fn null_displays_as_empty() {
        assert_eq!(CellValue::Null.to_string(), "");
        assert_eq!(CellValue::Integer(7).to_string(), "7");
    }
}

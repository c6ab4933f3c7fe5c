use super::model::ListingTable;

// ---------------------------------------------------------------------------
// Filter predicates: free-text title search + city selection
// ---------------------------------------------------------------------------

/// City selection. `All` is what the UI shows as the first combo entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CityFilter {
    #[default]
    All,
    City(String),
}

impl CityFilter {
    /// Label shown in the city combo box.
    pub fn label(&self) -> &str {
        match self {
            CityFilter::All => "All",
            CityFilter::City(c) => c,
        }
    }
}

/// The active filter inputs. Both predicates AND-compose.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterQuery {
    /// Case-insensitive substring match on `title`. Empty means no
    /// constraint; rows without a textual title never match a non-empty
    /// term.
    pub search_term: String,
    /// Exact, case-sensitive match on `city`.
    pub city: CityFilter,
}

impl FilterQuery {
    pub fn is_empty(&self) -> bool {
        self.search_term.is_empty() && self.city == CityFilter::All
    }
}

/// Return indices of listings that pass the query. The table itself is
/// never mutated; the returned indices are the view.
pub fn filtered_indices(table: &ListingTable, query: &FilterQuery) -> Vec<usize> {
    let needle = query.search_term.to_lowercase();

    table
        .listings
        .iter()
        .enumerate()
        .filter(|(_, listing)| {
            if !needle.is_empty() {
                match listing.title() {
                    Some(title) if title.to_lowercase().contains(&needle) => {}
                    _ => return false,
                }
            }
            if let CityFilter::City(city) = &query.city {
                if listing.city() != Some(city.as_str()) {
                    return false;
                }
            }
            true
        })
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{CellValue, Listing, COL_CITY, COL_TITLE};
    use std::collections::BTreeMap;

    fn listing(title: Option<&str>, city: Option<&str>) -> Listing {
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

    fn sample_table() -> ListingTable {
        ListingTable::from_listings(
            vec![
                listing(Some("Cozy Villa with Pool"), Some("Ubud")),
                listing(Some("Beachfront Apartment"), Some("Canggu")),
                listing(Some("Modern villa near beach"), Some("Canggu")),
                listing(None, Some("Kuta")),
                listing(Some("Hillside Bungalow"), None),
            ],
            vec![COL_TITLE.to_string(), COL_CITY.to_string()],
        )
    }

    fn query(search: &str, city: CityFilter) -> FilterQuery {
        FilterQuery {
            search_term: search.to_string(),
            city,
        }
    }

    #[test]
    fn empty_query_is_the_identity() {
        let table = sample_table();
        let indices = filtered_indices(&table, &FilterQuery::default());
        assert_eq!(indices, (0..table.len()).collect::<Vec<_>>());
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let table = sample_table();
        let indices = filtered_indices(&table, &query("VILLA", CityFilter::All));
        assert_eq!(indices, [0, 2]);

        // every excluded row really does not contain the term
        for i in 0..table.len() {
            if !indices.contains(&i) {
                let title = table.listings[i].title().unwrap_or("");
                assert!(!title.to_lowercase().contains("villa"));
            }
        }
    }

    #[test]
    fn null_titles_never_match() {
        let table = sample_table();
        let indices = filtered_indices(&table, &query("a", CityFilter::All));
        assert!(!indices.contains(&3));
    }

    #[test]
    fn city_match_is_exact_and_case_sensitive() {
        let table = sample_table();
        let indices = filtered_indices(&table, &query("", CityFilter::City("Canggu".into())));
        assert_eq!(indices, [1, 2]);

        let none = filtered_indices(&table, &query("", CityFilter::City("canggu".into())));
        assert!(none.is_empty());
    }

    #[test]
    fn predicates_compose_with_and() {
        let table = sample_table();
        let indices = filtered_indices(&table, &query("villa", CityFilter::City("Canggu".into())));
        assert_eq!(indices, [2]);
    }

    #[test]
    fn no_match_is_an_empty_view() {
        let table = sample_table();
        let indices = filtered_indices(&table, &query("penthouse", CityFilter::All));
        assert!(indices.is_empty());
    }

    #[test]
    fn filtering_is_idempotent() {
        let table = sample_table();
        let q = query("beach", CityFilter::City("Canggu".into()));

        let once = filtered_indices(&table, &q);
        // re-filter the filtered view
        let view = ListingTable::from_listings(
            once.iter().map(|&i| table.listings[i].clone()).collect(),
            table.column_names.clone(),
        );
        let twice = filtered_indices(&view, &q);
        assert_eq!(twice, (0..once.len()).collect::<Vec<_>>());
    }
}

use std::collections::{BTreeMap, BTreeSet};

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.7, 0.5);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: city → Color32
// ---------------------------------------------------------------------------

/// Maps each city to a distinct colour so chart series stay recognizable
/// across the scatter and the per-city bar chart. Listings without a city
/// get the gray fallback.
#[derive(Debug, Clone)]
pub struct CityColors {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl CityColors {
    /// Build a colour map from the table's distinct cities.
    pub fn new(cities: &BTreeSet<String>) -> Self {
        let palette = generate_palette(cities.len());
        let mapping: BTreeMap<String, Color32> = cities
            .iter()
            .cloned()
            .zip(palette.into_iter())
            .collect();

        CityColors {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a city.
    pub fn color_for(&self, city: Option<&str>) -> Color32 {
        city.and_then(|c| self.mapping.get(c))
            .copied()
            .unwrap_or(self.default_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distinct_cities_get_distinct_colors() {
        let cities: BTreeSet<String> =
            ["Ubud", "Canggu", "Kuta"].iter().map(|s| s.to_string()).collect();
        let colors = CityColors::new(&cities);

        let ubud = colors.color_for(Some("Ubud"));
        let canggu = colors.color_for(Some("Canggu"));
        assert_ne!(ubud, canggu);
    }

    #[test]
    fn unknown_or_missing_city_falls_back_to_gray() {
        let colors = CityColors::new(&BTreeSet::new());
        assert_eq!(colors.color_for(Some("Atlantis")), Color32::GRAY);
        assert_eq!(colors.color_for(None), Color32::GRAY);
    }
}

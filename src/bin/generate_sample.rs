//! Writes a deterministic sample dataset to `data/data_scraping.csv` so the
//! dashboard has something to show out of the box.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use property_lens::data::loader::DEFAULT_DATA_PATH;
use property_lens::data::stats::format_rupiah;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn pick(&mut self, n: usize) -> usize {
        (self.next_u64() % n as u64) as usize
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    // Monthly rent baseline per area, in rupiah.
    let cities: [(&str, f64); 6] = [
        ("Ubud", 2_800_000.0),
        ("Canggu", 4_500_000.0),
        ("Seminyak", 5_200_000.0),
        ("Kuta", 2_200_000.0),
        ("Uluwatu", 3_900_000.0),
        ("Jimbaran", 3_100_000.0),
    ];
    let kinds = ["Villa", "Guesthouse", "Apartment", "Bungalow", "Townhouse"];
    let perks = [
        "with Pool",
        "near the Beach",
        "with Rice Field View",
        "in Quiet Area",
        "with Garden",
    ];

    let path = Path::new(DEFAULT_DATA_PATH);
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).context("creating data directory")?;
    }
    let mut writer = csv::Writer::from_path(path).context("creating sample CSV")?;
    writer.write_record(["title", "city", "price", "bedroom", "bathroom", "property_links"])?;

    let rows = 120;
    for i in 0..rows {
        let (city, base) = cities[rng.pick(cities.len())];
        let kind = kinds[rng.pick(kinds.len())];
        let perk = perks[rng.pick(perks.len())];
        let bedrooms = 1 + rng.pick(4);
        let bathrooms = 1 + rng.pick(bedrooms);
        let price = (base * rng.gauss(1.0, 0.25)).max(350_000.0);

        // A few rows exercise the null and unparseable-price paths.
        let price_text = match i % 17 {
            0 => String::new(),
            9 => "Contact agent".to_string(),
            _ => format_rupiah(price),
        };
        let city_text = if i % 23 == 5 {
            String::new()
        } else {
            city.to_string()
        };

        let record: Vec<String> = vec![
            format!("{bedrooms}BR {kind} {perk} in {city}"),
            city_text,
            price_text,
            bedrooms.to_string(),
            bathrooms.to_string(),
            format!("https://example.com/listing/{i}"),
        ];
        writer.write_record(&record)?;
    }

    writer.flush().context("writing sample CSV")?;
    println!("wrote {rows} listings to {}", path.display());
    Ok(())
}

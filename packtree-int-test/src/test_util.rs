//! Entry generators and comparison helpers shared by the integration tests.
//!
//! Generators are driven by a seeded RNG so every test run sees the same
//! inputs.

use packtree::{BoundingBox, Entry};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Creates a deterministic RNG for a test.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Generates `count` random rectangles in a +/-1000 world with ids as
/// payloads.
pub fn random_entries(rng: &mut StdRng, count: usize) -> Vec<Entry<u32>> {
    (0..count)
        .map(|i| {
            let min_x = rng.gen_range(-1000.0..1000.0_f32);
            let min_y = rng.gen_range(-1000.0..1000.0_f32);
            let width = rng.gen_range(0.0..50.0_f32);
            let height = rng.gen_range(0.0..50.0_f32);
            Entry::new(
                BoundingBox::new(min_x, min_y, min_x + width, min_y + height),
                i as u32,
            )
        })
        .collect()
}

/// Generates `count` random geographic rectangles (x is latitude, y is
/// longitude), including boxes hugging the antimeridian.
pub fn random_geo_entries(rng: &mut StdRng, count: usize) -> Vec<Entry<u32>> {
    (0..count)
        .map(|i| {
            let min_lat = rng.gen_range(-85.0..80.0_f32);
            let min_lon = rng.gen_range(-180.0..175.0_f32);
            let lat_span = rng.gen_range(0.0..5.0_f32);
            let lon_span = rng.gen_range(0.0..5.0_f32);
            Entry::new(
                BoundingBox::new(
                    min_lat,
                    min_lon,
                    (min_lat + lat_span).min(90.0),
                    (min_lon + lon_span).min(180.0),
                ),
                i as u32,
            )
        })
        .collect()
}

/// Generates `count` unit squares laid out row-major on a grid with `cols`
/// columns.
pub fn grid_entries(count: usize, cols: usize) -> Vec<Entry<u32>> {
    (0..count)
        .map(|i| {
            let x = (i % cols) as f32;
            let y = (i / cols) as f32;
            Entry::new(BoundingBox::new(x, y, x + 1.0, y + 1.0), i as u32)
        })
        .collect()
}

/// Extracts payload values sorted for order-insensitive multiset comparison.
pub fn sorted_values(entries: &[Entry<u32>]) -> Vec<u32> {
    let mut values: Vec<u32> = entries.iter().map(|e| e.value).collect();
    values.sort_unstable();
    values
}

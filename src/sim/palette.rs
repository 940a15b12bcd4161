//! Colour palette shared by every entity.
//! Entities constructed without a colour pick one here.

use rand::Rng;

/// Linear RGBA, components in 0..=1
pub type Rgba = [f32; 4];

pub const WHITE: Rgba = [1.0, 1.0, 1.0, 1.0];

/// Fallback colours (kept saturated so they read on a white background)
pub const PALETTE: [Rgba; 8] = [
    [0.90, 0.20, 0.25, 1.0], // red
    [0.20, 0.55, 0.90, 1.0], // blue
    [0.95, 0.75, 0.15, 1.0], // yellow
    [0.20, 0.80, 0.45, 1.0], // green
    [0.65, 0.45, 0.95, 1.0], // purple
    [0.95, 0.50, 0.15, 1.0], // orange
    [0.10, 0.70, 0.75, 1.0], // teal
    [0.85, 0.35, 0.70, 1.0], // pink
];

/// Pick a palette colour uniformly at random
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> Rgba {
    PALETTE[rng.random_range(0..PALETTE.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn random_color_comes_from_palette() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..200 {
            let c = random_color(&mut rng);
            assert!(PALETTE.contains(&c));
        }
    }

    #[test]
    fn palette_has_no_duplicates_or_background() {
        for (i, c1) in PALETTE.iter().enumerate() {
            assert_ne!(*c1, WHITE, "palette colour {i} is invisible on the background");
            for c2 in &PALETTE[i + 1..] {
                assert_ne!(c1, c2);
            }
        }
    }
}

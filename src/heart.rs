//! Heart placements and sketchy outlines.
//!
//! Outlines follow the classic quartic heart
//! `x = 16 sin³t`, `y = 13 cos t - 5 cos 2t - 2 cos 3t - cos 4t`,
//! scaled and translated, with Gaussian noise whose amplitude is a fraction
//! of the heart's scale.

use ndarray::Array1;
use rand::Rng;
use tracing::debug;

use crate::command::Point;
use crate::constants::*;
use crate::utils::{gaussian_noise, sample_angles, to_points};

/// Where and how large to draw one heart
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeartSpec {
    pub center_x: f64,
    pub center_y: f64,
    pub scale: f64,
}

impl HeartSpec {
    pub fn new(center_x: f64, center_y: f64, scale: f64) -> Self {
        Self {
            center_x,
            center_y,
            scale,
        }
    }

    pub fn center(&self) -> Point {
        Point::new(self.center_x, self.center_y)
    }
}

/// Sampled heart curve as parallel coordinate arrays
#[derive(Debug, Clone, PartialEq)]
pub struct Outline {
    pub x: Array1<f64>,
    pub y: Array1<f64>,
}

impl Outline {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn points(&self) -> Vec<Point> {
        to_points(&self.x, &self.y)
    }

    /// Points in `start..end`, clamped to the outline length
    pub fn slice_points(&self, start: usize, end: usize) -> Vec<Point> {
        let end = end.min(self.len());
        (start..end)
            .map(|i| Point::new(self.x[i], self.y[i]))
            .collect()
    }

    pub fn point(&self, i: usize) -> Point {
        Point::new(self.x[i], self.y[i])
    }
}

/// Noiseless heart curve at `OUTLINE_SAMPLES` angles
pub fn heart_curve(x0: f64, y0: f64, size: f64) -> Outline {
    let t = sample_angles(OUTLINE_SAMPLES);
    let x = t.mapv(|t| x0 + size * 16.0 * t.sin().powi(3));
    let y = t.mapv(|t| {
        y0 + size
            * (13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos())
    });
    Outline { x, y }
}

/// Heart curve with per-coordinate noise of `noise_level * size`
pub fn sketch_heart<R: Rng + ?Sized>(
    rng: &mut R,
    x0: f64,
    y0: f64,
    size: f64,
    noise_level: f64,
) -> Outline {
    let Outline { x, y } = heart_curve(x0, y0, size);
    let noise_x = gaussian_noise(rng, x.len(), noise_level);
    let noise_y = gaussian_noise(rng, y.len(), noise_level);

    Outline {
        x: x + &(noise_x * size),
        y: y + &(noise_y * size),
    }
}

/// The fixed hearts followed by randomly placed decorative ones
///
/// Each extra candidate is dropped if it lands within `MIN_HEART_DISTANCE` of
/// any heart already in the list, so at most `EXTRA_HEART_ATTEMPTS` extras
/// are added.
pub fn heart_positions<R: Rng + ?Sized>(rng: &mut R) -> Vec<HeartSpec> {
    let mut hearts: Vec<HeartSpec> = FIXED_HEARTS
        .iter()
        .map(|&(x, y, scale)| HeartSpec::new(x, y, scale))
        .collect();

    for _ in 0..EXTRA_HEART_ATTEMPTS {
        let candidate = Point::new(
            rng.random_range(-EXTRA_HEART_RANGE..EXTRA_HEART_RANGE),
            rng.random_range(-EXTRA_HEART_RANGE..EXTRA_HEART_RANGE),
        );
        if hearts
            .iter()
            .any(|h| h.center().distance(&candidate) < MIN_HEART_DISTANCE)
        {
            debug!(x = candidate.x, y = candidate.y, "extra heart too close, skipped");
            continue;
        }
        let scale = rng.random_range(EXTRA_HEART_MIN_SCALE..EXTRA_HEART_MAX_SCALE);
        hearts.push(HeartSpec::new(candidate.x, candidate.y, scale));
    }

    hearts
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::Zip;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::f64::consts::PI;

    /// Mean Euclidean distance between two outlines
    fn mean_deviation(a: &Outline, b: &Outline) -> f64 {
        let dx = &a.x - &b.x;
        let dy = &a.y - &b.y;
        Zip::from(&dx)
            .and(&dy)
            .fold(0.0, |acc, &dx, &dy| acc + dx.hypot(dy))
            / dx.len() as f64
    }

    #[test]
    fn test_outline_length_is_constant() {
        let mut rng = StdRng::seed_from_u64(3);
        for size in [0.2, 0.7, 1.0, 5.0] {
            let outline = sketch_heart(&mut rng, 1.0, -2.0, size, DEFAULT_NOISE_LEVEL);
            assert_eq!(outline.x.len(), OUTLINE_SAMPLES);
            assert_eq!(outline.y.len(), OUTLINE_SAMPLES);
        }
    }

    #[test]
    fn test_noiseless_outline_matches_curve() {
        let mut rng = StdRng::seed_from_u64(0);
        let outline = sketch_heart(&mut rng, 0.0, 0.0, 1.0, 0.0);

        for i in 0..OUTLINE_SAMPLES {
            let t = 2.0 * PI * i as f64 / (OUTLINE_SAMPLES - 1) as f64;
            let x = 16.0 * t.sin().powi(3);
            let y = 13.0 * t.cos()
                - 5.0 * (2.0 * t).cos()
                - 2.0 * (3.0 * t).cos()
                - (4.0 * t).cos();
            assert_abs_diff_eq!(outline.x[i], x, epsilon = 1e-9);
            assert_abs_diff_eq!(outline.y[i], y, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_curve_endpoints() {
        let outline = heart_curve(2.0, 3.0, 0.5);
        // t = 0: top notch of the heart
        assert_abs_diff_eq!(outline.x[0], 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(outline.y[0], 3.0 + 0.5 * 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(outline.x[OUTLINE_SAMPLES - 1], 2.0, epsilon = 1e-9);
        assert_abs_diff_eq!(outline.y[OUTLINE_SAMPLES - 1], 3.0 + 0.5 * 5.0, epsilon = 1e-9);
    }

    #[test]
    fn test_noise_increases_deviation() {
        let clean = heart_curve(0.0, 0.0, 1.0);
        let deviation = |noise: f64| {
            let mut rng = StdRng::seed_from_u64(11);
            let mut total = 0.0;
            for _ in 0..50 {
                let noisy = sketch_heart(&mut rng, 0.0, 0.0, 1.0, noise);
                total += mean_deviation(&noisy, &clean);
            }
            total / 50.0
        };

        let low = deviation(0.02);
        let high = deviation(0.2);
        assert!(low > 0.0);
        assert!(high > low * 5.0, "low = {low}, high = {high}");
    }

    #[test]
    fn test_noise_scales_with_size() {
        let mut rng_small = StdRng::seed_from_u64(5);
        let mut rng_large = StdRng::seed_from_u64(5);
        let small = sketch_heart(&mut rng_small, 0.0, 0.0, 1.0, 0.1);
        let large = sketch_heart(&mut rng_large, 0.0, 0.0, 4.0, 0.1);
        let clean_small = heart_curve(0.0, 0.0, 1.0);
        let clean_large = heart_curve(0.0, 0.0, 4.0);

        let d_small = mean_deviation(&small, &clean_small);
        let d_large = mean_deviation(&large, &clean_large);
        assert_abs_diff_eq!(d_large, 4.0 * d_small, epsilon = 1e-9);
    }

    #[test]
    fn test_fixed_hearts_come_first_in_order() {
        let mut rng = StdRng::seed_from_u64(2024);
        let hearts = heart_positions(&mut rng);
        assert!(hearts.len() >= FIXED_HEARTS.len());
        assert!(hearts.len() <= FIXED_HEARTS.len() + EXTRA_HEART_ATTEMPTS);

        let centers: Vec<(f64, f64)> = hearts[..5]
            .iter()
            .map(|h| (h.center_x, h.center_y))
            .collect();
        assert_eq!(
            centers,
            vec![(0.0, 0.0), (-5.0, 5.0), (5.0, 5.0), (-5.0, -5.0), (5.0, -5.0)]
        );
    }

    #[test]
    fn test_extra_hearts_keep_their_distance() {
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let hearts = heart_positions(&mut rng);
            for extra in &hearts[FIXED_HEARTS.len()..] {
                for fixed in &hearts[..FIXED_HEARTS.len()] {
                    assert!(
                        extra.center().distance(&fixed.center()) >= MIN_HEART_DISTANCE,
                        "seed {seed}: {extra:?} too close to {fixed:?}"
                    );
                }
                assert!(extra.scale >= EXTRA_HEART_MIN_SCALE);
                assert!(extra.scale < EXTRA_HEART_MAX_SCALE);
                assert!(extra.center_x.abs() <= EXTRA_HEART_RANGE);
                assert!(extra.center_y.abs() <= EXTRA_HEART_RANGE);
            }
        }
    }

    #[test]
    fn test_slice_points_clamps() {
        let outline = heart_curve(0.0, 0.0, 1.0);
        assert_eq!(outline.slice_points(95, 105).len(), 5);
        assert_eq!(outline.slice_points(10, 13).len(), 3);
        assert_eq!(outline.slice_points(10, 13)[0], outline.point(10));
    }
}

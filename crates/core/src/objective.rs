//! The fixed objective minimized by every solver in this workspace.
//!
//! The objective is Himmelblau's function,
//!
//! ```text
//! f(x, y) = (x² + y − 11)² + (x + y² − 7)²
//! ```
//!
//! a quartic bowl that is non-negative everywhere and reaches zero at four
//! separate minimizers, all inside the default `[-6, 6]²` search domain.

use crate::Point;

/// The four minimizers of the objective, where it evaluates to zero.
///
/// Only `(3, 2)` is exact; the others are rounded to six decimals.
pub const KNOWN_MINIMA: [Point; 4] = [
    Point::new(3.0, 2.0),
    Point::new(-2.805_118, 3.131_312),
    Point::new(-3.779_310, -3.283_186),
    Point::new(3.584_428, -1.848_126),
];

/// Evaluates the objective at `point`.
///
/// Pure and infallible for every finite input.
#[must_use]
pub fn objective(point: Point) -> f64 {
    let Point { x, y } = point;
    (x * x + y - 11.0).powi(2) + (x + y * y - 7.0).powi(2)
}

/// Returns the known minimizer closest to `point`.
#[must_use]
pub fn nearest_minimum(point: &Point) -> Point {
    KNOWN_MINIMA
        .into_iter()
        .min_by(|a, b| point.distance(a).total_cmp(&point.distance(b)))
        .unwrap_or(KNOWN_MINIMA[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn vanishes_at_the_exact_minimum() {
        assert_eq!(objective(Point::new(3.0, 2.0)), 0.0);
    }

    #[test]
    fn nearly_vanishes_at_the_rounded_minima() {
        for minimum in KNOWN_MINIMA {
            assert!(objective(minimum) < 1e-8, "f{minimum} is not near zero");
        }
    }

    #[test]
    fn matches_hand_computed_values() {
        // (0 + 0 - 11)² + (0 + 0 - 7)² = 121 + 49
        assert_relative_eq!(objective(Point::new(0.0, 0.0)), 170.0);
        // (1 + 1 - 11)² + (1 + 1 - 7)² = 81 + 25
        assert_relative_eq!(objective(Point::new(1.0, 1.0)), 106.0);
        // (36 - 6 - 11)² + (-6 + 36 - 7)² = 361 + 529
        assert_relative_eq!(objective(Point::new(-6.0, -6.0)), 890.0);
    }

    #[test]
    fn is_non_negative_across_the_domain() {
        for i in -16..=16 {
            for j in -16..=16 {
                let p = Point::new(f64::from(i) * 0.5, f64::from(j) * 0.5);
                assert!(objective(p) >= 0.0);
            }
        }
    }

    #[test]
    fn nearest_minimum_picks_the_closest_basin() {
        assert_eq!(nearest_minimum(&Point::new(2.9, 2.1)), KNOWN_MINIMA[0]);
        assert_eq!(nearest_minimum(&Point::new(-3.0, 3.0)), KNOWN_MINIMA[1]);
        assert_eq!(nearest_minimum(&Point::new(-4.0, -3.0)), KNOWN_MINIMA[2]);
        assert_eq!(nearest_minimum(&Point::new(3.5, -2.0)), KNOWN_MINIMA[3]);
    }
}

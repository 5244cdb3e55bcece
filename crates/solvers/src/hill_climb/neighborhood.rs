use climb_core::{Bounds, Point};
use rand_mt::Mt19937GenRand32;

use super::Config;

/// Uniform `[0, 1)` stream backed by a 32-bit Mersenne Twister.
///
/// Seeding and float construction follow the widely used MT19937 conventions:
/// the key is the little-endian 32-bit words of `|seed|` (`[0]` for zero), and
/// each float takes 27 + 26 high bits of two consecutive outputs. Any other
/// implementation following the same conventions sees the same stream.
pub(super) struct UnitStream {
    mt: Mt19937GenRand32,
}

impl UnitStream {
    pub(super) fn seeded(seed: i64) -> Self {
        let magnitude = seed.unsigned_abs();
        #[allow(clippy::cast_possible_truncation)]
        let (low, high) = (magnitude as u32, (magnitude >> 32) as u32);
        let mt = if high == 0 {
            Mt19937GenRand32::new_with_key([low])
        } else {
            Mt19937GenRand32::new_with_key([low, high])
        };
        Self { mt }
    }

    /// Next value in `[0, 1)` with 53 bits of resolution.
    pub(super) fn next_f64(&mut self) -> f64 {
        let a = f64::from(self.mt.next_u32() >> 5);
        let b = f64::from(self.mt.next_u32() >> 6);
        (a * 67_108_864.0 + b) * (1.0 / 9_007_199_254_740_992.0)
    }
}

/// Draws clamped neighbors around a center point from a private random stream.
pub(super) struct Neighborhood {
    stream: UnitStream,
    radius: f64,
    bounds: Bounds,
}

impl Neighborhood {
    pub(super) fn new(config: &Config) -> Self {
        Self {
            stream: UnitStream::seeded(config.seed),
            radius: config.step_radius,
            bounds: config.bounds,
        }
    }

    /// Uniform offset in `[-radius, radius]` from exactly one draw.
    fn offset(&mut self) -> f64 {
        let u = self.stream.next_f64();
        -self.radius + 2.0 * self.radius * u
    }

    /// Samples one neighbor of `center`: x offset first, then y offset.
    pub(super) fn sample(&mut self, center: Point) -> Point {
        let dx = self.offset();
        let dy = self.offset();
        self.bounds.clamp(center.offset(dx, dy))
    }
}

use crate::RandomSource;
use crate::error::{TopologyError, TopologyResult};
use crate::grid::Grid;
use crate::search::{Direction, Probe, find_closest_feature};
use tracing::trace;

// Fills every interior non-feature cell from the four directional probes
pub struct InterpolationEngine {
    minor_variance: f32, // noise added to each blended cell
}

impl InterpolationEngine {
    pub fn new(minor_variance: f32) -> Self {
        Self { minor_variance }
    }

    // Row-major, y outer. One noise draw per filled cell, in scan order.
    pub fn fill<R: RandomSource + ?Sized>(
        &self,
        grid: &mut Grid,
        rng: &mut R,
    ) -> TopologyResult<()> {
        let w = grid.width();
        let h = grid.height();

        for y in 1..h - 1 {
            for x in 1..w - 1 {
                if grid.is_feature(x, y) {
                    continue;
                }

                let value = blend_cell(grid, x, y)?;
                let jitter = rng.spread(self.minor_variance);
                trace!(x, y, value, jitter, "filled cell");
                grid.set(x, y, value + jitter);
            }
        }
        Ok(())
    }
}

// Probe all four directions from (x, y) and blend what they found
pub fn blend_cell(grid: &Grid, x: usize, y: usize) -> TopologyResult<f32> {
    let probes = Direction::ALL.map(|d| find_closest_feature(grid, d, x, y));
    let value = blend(&probes).ok_or(TopologyError::DegenerateWeights { x, y })?;

    trace!(x, y, ?probes, value, "blended probes");
    Ok(value)
}

// Inverse-distance weighting, normalised to sum to one.
// Keeps the mixed f32/f64 rounding of the weighting so grids reproduce bit for bit.
// `None` when any distance, or their total, is zero.
pub fn blend(probes: &[Probe; 4]) -> Option<f32> {
    let total: f32 = probes.iter().map(|p| p.distance).sum();
    if total <= 0.0 || probes.iter().any(|p| p.distance <= 0.0) {
        return None;
    }

    let weights = (*probes).map(|p| 1.0f64 / (p.distance / total) as f64);
    let adj_weights = weights.iter().sum::<f64>() as f32;

    let value: f64 = probes
        .iter()
        .zip(weights.iter())
        .map(|(p, &w)| p.elevation as f64 * w / adj_weights as f64)
        .sum();

    trace!(total, adj_weights, value, "inverse-distance weights");
    Some(value as f32)
}

#[cfg(test)]
mod tests {
    use super::{InterpolationEngine, blend, blend_cell};
    use crate::grid::{FeaturePoint, Grid};
    use crate::search::Probe;
    use crate::{Direction, RandomSource, TopologyError, find_closest_feature};
    use approx::assert_abs_diff_eq;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn probe(elevation: f32, distance: f32) -> Probe {
        Probe {
            x: 0,
            y: 0,
            elevation,
            distance,
        }
    }

    #[test]
    fn equal_distances_average() {
        let probes = [
            probe(1.0, 2.0),
            probe(2.0, 2.0),
            probe(3.0, 2.0),
            probe(6.0, 2.0),
        ];
        assert_abs_diff_eq!(blend(&probes).unwrap(), 3.0, epsilon = 1e-6);
    }

    #[test]
    fn nearer_probe_dominates() {
        let probes = [
            probe(10.0, 1.0),
            probe(0.0, 9.0),
            probe(0.0, 9.0),
            probe(0.0, 9.0),
        ];
        // weights 1 : 1/9 : 1/9 : 1/9
        assert_abs_diff_eq!(blend(&probes).unwrap(), 7.5, epsilon = 1e-5);
    }

    #[test]
    fn zero_distance_is_rejected() {
        let probes = [
            probe(1.0, 0.0),
            probe(1.0, 1.0),
            probe(1.0, 1.0),
            probe(1.0, 1.0),
        ];
        assert_eq!(blend(&probes), None);
        assert_eq!(blend(&[probe(1.0, 0.0); 4]), None);
    }

    #[test]
    fn blend_is_convex() {
        let mut grid = Grid::new(9, 9);
        let mut rng = ChaCha8Rng::seed_from_u64(17);
        for y in 0..9 {
            for x in 0..9 {
                if grid.is_boundary(x, y) {
                    grid.set(x, y, rng.uniform(-1.0, 1.0));
                }
            }
        }
        grid.add_feature(FeaturePoint {
            x: 5,
            y: 6,
            elevation: 3.0,
        });

        for (x, y) in [(1, 1), (4, 4), (7, 2), (2, 7)] {
            let found = Direction::ALL.map(|d| find_closest_feature(&grid, d, x, y).elevation);
            let lo = found.iter().cloned().fold(f32::INFINITY, f32::min);
            let hi = found.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
            let v = blend_cell(&grid, x, y).unwrap();
            assert!(v >= lo - 1e-5 && v <= hi + 1e-5, "{} outside [{}, {}]", v, lo, hi);
        }
    }

    #[test]
    fn fill_skips_features_and_boundary() {
        let mut grid = Grid::new(8, 6);
        for x in 0..8 {
            grid.set(x, 0, 1.0);
            grid.set(x, 5, 1.0);
        }
        for y in 0..6 {
            grid.set(0, y, 1.0);
            grid.set(7, y, 1.0);
        }
        grid.add_feature(FeaturePoint {
            x: 3,
            y: 2,
            elevation: -4.0,
        });
        let before = grid.clone();

        let mut rng = ChaCha8Rng::seed_from_u64(2);
        InterpolationEngine::new(0.0).fill(&mut grid, &mut rng).unwrap();

        assert_eq!(grid.get(3, 2), -4.0);
        for y in 0..6 {
            for x in 0..8 {
                if grid.is_boundary(x, y) {
                    assert_eq!(grid.get(x, y), before.get(x, y));
                }
            }
        }
        // every interior cell is a blend of values in [-4, 1]
        for row in grid.rows() {
            for &v in row {
                assert!((-4.0 - 1e-5..=1.0 + 1e-5).contains(&v));
            }
        }
    }

    #[test]
    fn flat_boundary_fills_flat() {
        let mut grid = Grid::new(6, 6);
        for row in 0..6 {
            for col in 0..6 {
                if grid.is_boundary(col, row) {
                    grid.set(col, row, 0.5);
                }
            }
        }
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        InterpolationEngine::new(0.0).fill(&mut grid, &mut rng).unwrap();
        for row in grid.rows() {
            for &v in row {
                assert_abs_diff_eq!(v, 0.5, epsilon = 1e-6);
            }
        }
    }

    // Seeded source that remembers every float it hands out
    struct Recording {
        inner: ChaCha8Rng,
        draws: Vec<f32>,
    }

    impl RandomSource for Recording {
        fn uniform(&mut self, low: f32, high: f32) -> f32 {
            let v = self.inner.uniform(low, high);
            self.draws.push(v);
            v
        }

        fn below(&mut self, bound: usize) -> usize {
            self.inner.below(bound)
        }
    }

    #[test]
    fn noise_is_drawn_in_row_major_order() {
        let mut grid = Grid::new(7, 6);
        let mut seed = ChaCha8Rng::seed_from_u64(12);
        for y in 0..6 {
            for x in 0..7 {
                if grid.is_boundary(x, y) {
                    grid.set(x, y, seed.uniform(-1.0, 1.0));
                }
            }
        }
        grid.add_feature(FeaturePoint {
            x: 2,
            y: 3,
            elevation: 2.0,
        });

        let mut rng = Recording {
            inner: ChaCha8Rng::seed_from_u64(13),
            draws: Vec::new(),
        };
        InterpolationEngine::new(0.02).fill(&mut grid, &mut rng).unwrap();

        // 5x4 interior minus the feature
        assert_eq!(rng.draws.len(), 19);
        let mut k = 0;
        for y in 1..5 {
            for x in 1..6 {
                if grid.is_feature(x, y) {
                    continue;
                }
                let noise = grid.get(x, y) - blend_cell(&grid, x, y).unwrap();
                assert_abs_diff_eq!(noise, rng.draws[k], epsilon = 1e-6);
                k += 1;
            }
        }
    }

    // Collects formatted log lines for inspection
    #[derive(Clone, Default)]
    struct Captured(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn blend_traces_weight_sums() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let probes = [
            probe(1.0, 1.0),
            probe(1.0, 1.0),
            probe(1.0, 1.0),
            probe(1.0, 1.0),
        ];
        tracing::subscriber::with_default(subscriber, || {
            blend(&probes).unwrap();
        });

        let text = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        // four unit distances: total 4, each weight 4, normalising sum 16
        assert!(text.contains("total=4"), "{}", text);
        assert!(text.contains("adj_weights=16"), "{}", text);
    }

    #[test]
    fn degenerate_error_names_cell() {
        let err = TopologyError::DegenerateWeights { x: 2, y: 3 };
        assert_eq!(err.to_string(), "degenerate inverse-distance weights at (2, 3)");
    }
}

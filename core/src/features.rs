use crate::RandomSource;
use crate::grid::{FeaturePoint, Grid};
use tracing::debug;

// Scatters one high-amplitude anchor into each of across×down partitions
pub struct FeaturePlacer {
    across: usize,
    down: usize,
    major_variance: f32, // elevations drawn from ±major_variance
}

impl FeaturePlacer {
    pub fn new(across: usize, down: usize, major_variance: f32) -> Self {
        Self {
            across,
            down,
            major_variance,
        }
    }

    // Registers exactly across×down features, all strictly interior.
    // Partitions are visited across-major; each takes x, then y, then elevation.
    pub fn apply<R: RandomSource + ?Sized>(&self, grid: &mut Grid, rng: &mut R) {
        let w = grid.width();
        let h = grid.height();
        let cell_w = w / self.across;
        let cell_h = h / self.down;

        for across in 0..self.across {
            for down in 0..self.down {
                let x = Self::pull_inside(rng.below(cell_w) + across * cell_w, w);
                let y = Self::pull_inside(rng.below(cell_h) + down * cell_h, h);
                let elevation = rng.spread(self.major_variance);

                debug!(x, y, elevation, "placed major feature");
                grid.add_feature(FeaturePoint { x, y, elevation });
            }
        }
    }

    // Nudge a coordinate off the boundary
    #[inline]
    fn pull_inside(coord: usize, extent: usize) -> usize {
        if coord == 0 {
            1
        } else if coord >= extent - 1 {
            extent - 2
        } else {
            coord
        }
    }
}

use crate::RandomSource;
use crate::grid::Grid;

// Fills the outer ring of the grid. Each edge starts at a random corner and
// decays toward the corner at its far end, with a little noise per step.
pub struct BoundaryGenerator {
    corner_variance: f32, // corners drawn from ±corner_variance
    minor_variance: f32,  // per-step jitter drawn from ±minor_variance
}

impl BoundaryGenerator {
    pub fn new(corner_variance: f32, minor_variance: f32) -> Self {
        Self {
            corner_variance,
            minor_variance,
        }
    }

    // In‐place write of every boundary cell
    pub fn apply<R: RandomSource + ?Sized>(&self, grid: &mut Grid, rng: &mut R) {
        let w = grid.width();
        let h = grid.height();

        // Corners: top-left, top-right, bottom-left, bottom-right
        for (x, y) in [(0, 0), (w - 1, 0), (0, h - 1), (w - 1, h - 1)] {
            let corner = rng.spread(self.corner_variance);
            grid.set(x, y, corner);
        }

        // Top and bottom rows
        for i in 1..w - 1 {
            let top = self.step(grid.get(i - 1, 0), grid.get(w - 1, 0), w - i, rng);
            grid.set(i, 0, top);
            let bottom = self.step(grid.get(i - 1, h - 1), grid.get(w - 1, h - 1), w - i, rng);
            grid.set(i, h - 1, bottom);
        }

        // Left and right columns
        for i in 1..h - 1 {
            let left = self.step(grid.get(0, i - 1), grid.get(0, h - 1), h - i, rng);
            grid.set(0, i, left);
            let right = self.step(grid.get(w - 1, i - 1), grid.get(w - 1, h - 1), h - i, rng);
            grid.set(w - 1, i, right);
        }
    }

    // One step of the decay: close 1/remaining of the gap to the far corner.
    // `remaining` is at least 2 for every step taken along an edge.
    #[inline]
    fn step<R: RandomSource + ?Sized>(
        &self,
        previous: f32,
        far_corner: f32,
        remaining: usize,
        rng: &mut R,
    ) -> f32 {
        let jitter = rng.spread(self.minor_variance);
        previous - (previous - far_corner) / remaining as f32 + jitter
    }
}

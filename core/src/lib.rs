// core holds the generation pipeline: boundary, major features, interior fill
pub mod boundary;
pub mod config;
pub mod error;
pub mod features;
pub mod grid;
pub mod interpolate;
pub mod output;
pub mod search;
pub mod topology;

pub use boundary::BoundaryGenerator;
pub use config::TopologyConfig;
pub use error::{TopologyError, TopologyResult};
pub use features::FeaturePlacer;
pub use grid::{FeaturePoint, Grid};
pub use interpolate::InterpolationEngine;
pub use output::write_grid;
pub use search::{Direction, Probe, find_closest_feature};
pub use topology::Topology;

// source of uniform randomness consumed by every pass
// Any `rand::Rng` is one; tests can script their own.
pub trait RandomSource {
    // Uniform float in [low, high). An empty range yields `low`.
    fn uniform(&mut self, low: f32, high: f32) -> f32;

    // Uniform index in [0, bound). `bound` must be non-zero.
    fn below(&mut self, bound: usize) -> usize;

    // Uniform float in [-amplitude, +amplitude)
    fn spread(&mut self, amplitude: f32) -> f32 {
        self.uniform(-amplitude, amplitude)
    }
}

impl<R: rand::Rng + ?Sized> RandomSource for R {
    fn uniform(&mut self, low: f32, high: f32) -> f32 {
        if low < high {
            self.gen_range(low..high)
        } else {
            low
        }
    }

    fn below(&mut self, bound: usize) -> usize {
        self.gen_range(0..bound)
    }
}

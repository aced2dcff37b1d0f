use crate::RandomSource;
use crate::boundary::BoundaryGenerator;
use crate::config::TopologyConfig;
use crate::error::TopologyResult;
use crate::features::FeaturePlacer;
use crate::grid::Grid;
use crate::interpolate::InterpolationEngine;
use tracing::{debug, info_span};

// Runs boundary → major features → interior fill over one owned grid
pub struct Topology {
    config: TopologyConfig,
}

impl Topology {
    pub fn new(config: TopologyConfig) -> TopologyResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &TopologyConfig {
        &self.config
    }

    // Generate a fresh grid. The same stream of draws gives the same grid.
    pub fn generate<R: RandomSource + ?Sized>(&self, rng: &mut R) -> TopologyResult<Grid> {
        let c = &self.config;
        let _span = info_span!("topology", width = c.width, height = c.height).entered();
        let mut grid = Grid::new(c.width, c.height);

        {
            let _pass = info_span!("boundary").entered();
            BoundaryGenerator::new(c.corner_variance, c.minor_variance).apply(&mut grid, rng);
        }
        {
            let _pass = info_span!("features").entered();
            FeaturePlacer::new(c.features_across, c.features_down, c.major_variance)
                .apply(&mut grid, rng);
        }
        {
            let _pass = info_span!("interior").entered();
            InterpolationEngine::new(c.minor_variance).fill(&mut grid, rng)?;
        }

        debug!(
            features = grid.features().len(),
            expected = c.major_features(),
            "topology complete"
        );
        Ok(grid)
    }
}

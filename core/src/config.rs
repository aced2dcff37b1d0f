use crate::error::{TopologyError, TopologyResult};

// Fixed generation parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TopologyConfig {
    pub width: usize,
    pub height: usize,
    pub features_across: usize, // feature partitions per row
    pub features_down: usize,   // feature partitions per column
    pub major_variance: f32,    // feature elevations drawn from ±major_variance
    pub corner_variance: f32,   // corner elevations drawn from ±corner_variance
    pub minor_variance: f32,    // per-cell noise drawn from ±minor_variance
}

impl Default for TopologyConfig {
    fn default() -> Self {
        Self {
            width: 100,
            height: 100,
            features_across: 2,
            features_down: 2,
            major_variance: 3.0,
            corner_variance: 1.0,
            minor_variance: 0.02,
        }
    }
}

impl TopologyConfig {
    pub fn major_features(&self) -> usize {
        self.features_across * self.features_down
    }

    pub fn validate(&self) -> TopologyResult<()> {
        if self.width < 3 || self.height < 3 {
            return Err(TopologyError::GridTooSmall {
                width: self.width,
                height: self.height,
            });
        }

        // each partition needs at least two columns and two rows
        if self.features_across == 0
            || self.features_down == 0
            || self.width < 2 * self.features_across
            || self.height < 2 * self.features_down
        {
            return Err(TopologyError::EmptyPartition {
                width: self.width,
                height: self.height,
                across: self.features_across,
                down: self.features_down,
            });
        }

        for (name, value) in [
            ("major_variance", self.major_variance),
            ("corner_variance", self.corner_variance),
            ("minor_variance", self.minor_variance),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(TopologyError::InvalidVariance { name, value });
            }
        }

        Ok(())
    }
}

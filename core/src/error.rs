use thiserror::Error;

pub type TopologyResult<T> = Result<T, TopologyError>;

// Every variant is a configuration or programming error; nothing is retried.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TopologyError {
    #[error("grid {width}x{height} is too small, both sides must be at least 3")]
    GridTooSmall { width: usize, height: usize },

    #[error(
        "{across}x{down} feature partitions do not fit a {width}x{height} grid without empty cells"
    )]
    EmptyPartition {
        width: usize,
        height: usize,
        across: usize,
        down: usize,
    },

    #[error("{name} must be finite and non-negative, got {value}")]
    InvalidVariance { name: &'static str, value: f32 },

    // zero distance or zero total distance while blending
    #[error("degenerate inverse-distance weights at ({x}, {y})")]
    DegenerateWeights { x: usize, y: usize },
}

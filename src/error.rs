use thiserror::Error;

pub type SparkResult<T> = Result<T, SparkError>;

#[derive(Debug, Error)]
pub enum SparkError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("empty data series: value range is undefined")]
    EmptySeries,

    #[error("container `{0}` did not resolve to an element")]
    UnresolvedContainer(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}

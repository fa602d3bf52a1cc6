pub mod mapper;
pub mod meta;
pub mod scale;
pub mod series;
pub mod types;

pub use mapper::SparklineMapper;
pub use meta::PointMeta;
pub use scale::LinearScale;
pub use series::{ValueFn, parse_numbers, parse_numbers_with, resolve_value_range};
pub use types::Viewport;

pub mod attrs;
pub mod options;
pub mod presets;

pub use attrs::{ATTRIBUTE_PREFIX, AttributeSource, fragment_from_attributes};
pub use options::{
    ConfigFragment, DEFAULT_DOT_RADIUS, DEFAULT_LINE_STROKE_WIDTH, DEFAULT_PADDING, OptionsSource,
    Paint, SparklineConfig, StyleFn, StyleValue,
};

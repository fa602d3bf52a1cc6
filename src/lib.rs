//! sparkline-rs: inline sparkline mapping and rendering engine.
//!
//! The crate maps a data sequence plus a small configuration into a
//! backend-agnostic render plan (path, optional area and range band,
//! per-point markers) and hands it to a pluggable drawing surface.

pub mod api;
pub mod config;
pub mod core;
pub mod error;
pub mod host;
pub mod render;
pub mod telemetry;

pub use api::{render, render_in, render_with};
pub use config::{ConfigFragment, OptionsSource, Paint, SparklineConfig, StyleValue, presets};
pub use core::{
    LinearScale, PointMeta, SparklineMapper, ValueFn, Viewport, parse_numbers, parse_numbers_with,
};
pub use error::{SparkError, SparkResult};
pub use host::{Container, ContainerSource, FixedContainer};
pub use render::{NullSurface, RenderPlan, Surface, SvgSurface};

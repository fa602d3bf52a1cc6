use crate::config::SparklineConfig;
use crate::core::series::resolve_value_range;
use crate::core::{LinearScale, PointMeta, ValueFn, Viewport};
use crate::error::{SparkError, SparkResult};
use crate::render::{CirclePrimitive, PathPrimitive, RectPrimitive, RenderPlan, Vertex};

/// Maps a data series into a render plan under a resolved configuration.
///
/// One mapper holds the configuration and value extractor for a series
/// type; `map` is deterministic and side-effect free over its inputs, so
/// rendering and tests consume the exact same geometry output.
#[derive(Debug, Clone)]
pub struct SparklineMapper<T> {
    config: SparklineConfig,
    value: ValueFn<T>,
}

impl SparklineMapper<f64> {
    /// Mapper over plain numeric series, using the identity extractor.
    #[must_use]
    pub fn new(config: SparklineConfig) -> Self {
        Self::with_extractor(config, ValueFn::identity())
    }
}

impl<T> SparklineMapper<T> {
    #[must_use]
    pub fn with_extractor(config: SparklineConfig, value: ValueFn<T>) -> Self {
        Self { config, value }
    }

    #[must_use]
    pub fn config(&self) -> &SparklineConfig {
        &self.config
    }

    /// Runs one mapping pass.
    ///
    /// Fails fast on an empty series or non-finite extracted values; no
    /// partial plan is produced on error.
    pub fn map(&self, data: &[T], viewport: Viewport) -> SparkResult<RenderPlan> {
        if !viewport.is_valid() {
            return Err(SparkError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        if data.is_empty() {
            return Err(SparkError::EmptySeries);
        }

        // First extractor pass: values drive both the range and the vertices.
        let mut values = Vec::with_capacity(data.len());
        for (index, datum) in data.iter().enumerate() {
            let value = self.value.extract(datum);
            if !value.is_finite() {
                return Err(SparkError::InvalidData(format!(
                    "extracted value at index {index} must be finite"
                )));
            }
            values.push(value);
        }

        let (domain_min, domain_max) =
            resolve_value_range(&values, self.config.min, self.config.max)?;

        let padding = self.config.padding;
        let width = f64::from(viewport.width);
        let height = f64::from(viewport.height);

        let last_index = (data.len() - 1) as f64;
        let x_scale = LinearScale::new((0.0, last_index), (padding, width - padding))?;
        // Inverted: larger values render higher.
        let y_scale = LinearScale::new((domain_min, domain_max), (height - padding, padding))?;

        let mut vertices = Vec::with_capacity(values.len() + 2);
        for (index, value) in values.iter().enumerate() {
            vertices.push(Vertex::new(x_scale.apply(index as f64), y_scale.apply(*value)));
        }

        let closed = self.config.area_enabled();
        if closed {
            let baseline = y_scale.range().0;
            let first_x = vertices[0].x;
            let last_x = vertices[vertices.len() - 1].x;
            vertices.push(Vertex::new(last_x, baseline));
            vertices.push(Vertex::new(first_x, baseline));
        }

        let path = PathPrimitive {
            vertices,
            closed,
            fill: self.config.area_fill.clone(),
            stroke: self.config.line_stroke.clone().visible(),
            stroke_width: self.config.line_stroke_width,
        };

        let band = self.build_band(y_scale, padding, width);
        let markers = self.build_markers(data, &path.vertices, domain_min, domain_max);

        Ok(RenderPlan {
            viewport,
            path,
            band,
            markers,
        })
    }

    fn build_band(&self, y_scale: LinearScale, padding: f64, width: f64) -> Option<RectPrimitive> {
        if !self.config.band_enabled() {
            return None;
        }
        let fill = self.config.range_fill.clone()?;
        let range_min = self.config.range_min?;
        let range_max = self.config.range_max?;

        let y1 = y_scale.apply(range_max);
        let y2 = y_scale.apply(range_min);
        if y1 == y2 {
            // Zero-height band is a no-op, not an error.
            return None;
        }

        Some(RectPrimitive {
            x: padding,
            y: y1.min(y2),
            width: width - 2.0 * padding,
            height: (y1 - y2).abs(),
            fill,
        })
    }

    /// Second extractor pass: classification plus per-point style values, in
    /// the series' natural order.
    fn build_markers(
        &self,
        data: &[T],
        vertices: &[Vertex],
        domain_min: f64,
        domain_max: f64,
    ) -> Vec<CirclePrimitive> {
        let mut markers = Vec::new();
        for (index, datum) in data.iter().enumerate() {
            let value = self.value.extract(datum);
            let meta = PointMeta::classify(index, data.len(), value, domain_min, domain_max);

            let radius = self.config.dot_radius.resolve(&meta, value, index);
            if !radius.is_finite() || radius <= 0.0 {
                continue;
            }

            let vertex = vertices[index];
            markers.push(CirclePrimitive {
                x: vertex.x,
                y: vertex.y,
                radius,
                fill: self.config.dot_fill.resolve(&meta, value, index).visible(),
                stroke: self
                    .config
                    .dot_stroke
                    .resolve(&meta, value, index)
                    .visible(),
                stroke_width: self.config.dot_stroke_width.resolve(&meta, value, index),
            });
        }
        markers
    }
}

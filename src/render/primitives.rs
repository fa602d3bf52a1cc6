use serde::{Deserialize, Serialize};

use crate::config::Paint;
use crate::error::{SparkError, SparkResult};

/// Path vertex in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    pub x: f64,
    pub y: f64,
}

impl Vertex {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Draw command for the main poly-line, optionally closed into an area.
///
/// Vertices connect with straight segments in order; `closed` joins the last
/// vertex back to the first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathPrimitive {
    pub vertices: Vec<Vertex>,
    pub closed: bool,
    pub fill: Option<Paint>,
    pub stroke: Option<Paint>,
    pub stroke_width: f64,
}

impl PathPrimitive {
    pub fn validate(&self) -> SparkResult<()> {
        if self.vertices.is_empty() {
            return Err(SparkError::InvalidData(
                "path must have at least one vertex".to_owned(),
            ));
        }
        for vertex in &self.vertices {
            if !vertex.x.is_finite() || !vertex.y.is_finite() {
                return Err(SparkError::InvalidData(
                    "path vertices must be finite".to_owned(),
                ));
            }
        }
        if !self.stroke_width.is_finite() || self.stroke_width < 0.0 {
            return Err(SparkError::InvalidData(
                "path stroke width must be finite and >= 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Draw command for one filled rectangle in pixel space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Paint,
}

impl RectPrimitive {
    pub fn validate(&self) -> SparkResult<()> {
        for value in [self.x, self.y, self.width, self.height] {
            if !value.is_finite() {
                return Err(SparkError::InvalidData(
                    "rect geometry must be finite".to_owned(),
                ));
            }
        }
        if self.width < 0.0 || self.height < 0.0 {
            return Err(SparkError::InvalidData(
                "rect extents must be >= 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Draw command for one marker circle in pixel space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CirclePrimitive {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub fill: Option<Paint>,
    pub stroke: Option<Paint>,
    pub stroke_width: f64,
}

impl CirclePrimitive {
    pub fn validate(&self) -> SparkResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(SparkError::InvalidData(
                "circle center must be finite".to_owned(),
            ));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(SparkError::InvalidData(
                "circle radius must be finite and > 0".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width < 0.0 {
            return Err(SparkError::InvalidData(
                "circle stroke width must be finite and >= 0".to_owned(),
            ));
        }
        Ok(())
    }
}

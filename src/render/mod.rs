mod null_surface;
mod plan;
mod primitives;
mod svg_surface;

pub use null_surface::NullSurface;
pub use plan::{PLAN_JSON_SCHEMA_V1, RenderPlan, RenderPlanJsonContractV1};
pub use primitives::{CirclePrimitive, PathPrimitive, RectPrimitive, Vertex};
pub use svg_surface::SvgSurface;

use crate::error::SparkResult;

/// Contract implemented by any drawing backend.
///
/// Backends receive fully materialized primitives so drawing code stays
/// isolated from the mapping logic.
pub trait Surface {
    fn draw_path(&mut self, path: &PathPrimitive) -> SparkResult<()>;
    fn draw_rect(&mut self, rect: &RectPrimitive) -> SparkResult<()>;
    fn draw_circle(&mut self, circle: &CirclePrimitive) -> SparkResult<()>;
}

/// Issues one plan's primitives in paint order: band, path, markers.
///
/// The plan is validated up front; nothing is drawn when validation fails.
pub fn draw_plan<S: Surface>(surface: &mut S, plan: &RenderPlan) -> SparkResult<()> {
    plan.validate()?;

    if let Some(band) = &plan.band {
        surface.draw_rect(band)?;
    }
    surface.draw_path(&plan.path)?;
    for marker in &plan.markers {
        surface.draw_circle(marker)?;
    }

    Ok(())
}

use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{SparkError, SparkResult};
use crate::render::{CirclePrimitive, PathPrimitive, RectPrimitive};

pub const PLAN_JSON_SCHEMA_V1: u32 = 1;

/// Backend-agnostic output of one mapping pass.
///
/// Owns no reference back to the data or the container; paint order is
/// band, path, markers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderPlan {
    pub viewport: Viewport,
    pub path: PathPrimitive,
    pub band: Option<RectPrimitive>,
    pub markers: Vec<CirclePrimitive>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderPlanJsonContractV1 {
    pub schema_version: u32,
    pub plan: RenderPlan,
}

impl RenderPlan {
    pub fn validate(&self) -> SparkResult<()> {
        if !self.viewport.is_valid() {
            return Err(SparkError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        self.path.validate()?;
        if let Some(band) = &self.band {
            band.validate()?;
        }
        for marker in &self.markers {
            marker.validate()?;
        }

        Ok(())
    }

    /// Whether the main path is closed into a filled area.
    #[must_use]
    pub fn is_area(&self) -> bool {
        self.path.closed
    }

    #[must_use]
    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    pub fn to_json_contract_v1_pretty(&self) -> SparkResult<String> {
        let payload = RenderPlanJsonContractV1 {
            schema_version: PLAN_JSON_SCHEMA_V1,
            plan: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            SparkError::InvalidData(format!("failed to serialize plan contract v1: {e}"))
        })
    }

    pub fn from_json_compat_str(input: &str) -> SparkResult<Self> {
        if let Ok(plan) = serde_json::from_str::<RenderPlan>(input) {
            return Ok(plan);
        }
        let payload: RenderPlanJsonContractV1 = serde_json::from_str(input)
            .map_err(|e| SparkError::InvalidData(format!("failed to parse plan json: {e}")))?;
        if payload.schema_version != PLAN_JSON_SCHEMA_V1 {
            return Err(SparkError::InvalidData(format!(
                "unsupported plan schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.plan)
    }
}

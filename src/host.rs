//! Contracts for the embedding host: container handles and sizing.

use crate::config::SparklineConfig;
use crate::core::Viewport;
use crate::error::{SparkError, SparkResult};

/// A container element a sparkline is bound to.
pub trait Container {
    /// Intrinsic size in whole pixels (truncation toward zero is fine).
    fn intrinsic_size(&self) -> Viewport;
}

/// Looks a container up by selector; a miss propagates as
/// [`SparkError::UnresolvedContainer`] rather than rendering with undefined
/// dimensions.
pub trait ContainerSource {
    fn find(&self, selector: &str) -> Option<&dyn Container>;
}

/// Container with a fixed intrinsic size, for tests and headless hosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedContainer {
    viewport: Viewport,
}

impl FixedContainer {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            viewport: Viewport::new(width, height),
        }
    }
}

impl Container for FixedContainer {
    fn intrinsic_size(&self) -> Viewport {
        self.viewport
    }
}

/// Resolves the effective drawing dimensions for a render pass.
///
/// A configured dimension of `0` falls back to the container's intrinsic
/// dimension.
pub fn resolve_viewport(
    container: &dyn Container,
    config: &SparklineConfig,
) -> SparkResult<Viewport> {
    let intrinsic = container.intrinsic_size();
    let viewport = Viewport::new(
        if config.width > 0 {
            config.width
        } else {
            intrinsic.width
        },
        if config.height > 0 {
            config.height
        } else {
            intrinsic.height
        },
    );

    if !viewport.is_valid() {
        return Err(SparkError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }
    Ok(viewport)
}

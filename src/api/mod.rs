use tracing::{debug, warn};

use crate::config::{OptionsSource, SparklineConfig, presets};
use crate::core::{SparklineMapper, ValueFn};
use crate::error::SparkResult;
use crate::host::{Container, ContainerSource, resolve_viewport};
use crate::render::{RenderPlan, Surface, draw_plan};

/// Renders a numeric series into `surface`, sized against `container`.
///
/// `options` is a configuration fragment, a preset name, or a combination;
/// see [`OptionsSource`]. Returns the plan that was drawn, so callers can
/// inspect or snapshot the geometry alongside the backend output.
pub fn render<S: Surface>(
    container: &dyn Container,
    surface: &mut S,
    data: &[f64],
    options: impl Into<OptionsSource>,
) -> SparkResult<RenderPlan> {
    render_with(container, surface, data, ValueFn::identity(), options)
}

/// Renders a series of arbitrary elements using `value` to read each datum.
pub fn render_with<T, S: Surface>(
    container: &dyn Container,
    surface: &mut S,
    data: &[T],
    value: ValueFn<T>,
    options: impl Into<OptionsSource>,
) -> SparkResult<RenderPlan> {
    let options = options.into();
    let config = resolved_config(&options);
    let viewport = resolve_viewport(container, &config)?;

    debug!(
        data_len = data.len(),
        width = viewport.width,
        height = viewport.height,
        "render sparkline"
    );

    let plan = SparklineMapper::with_extractor(config, value).map(data, viewport)?;
    draw_plan(surface, &plan)?;
    Ok(plan)
}

/// Looks the container up by selector, then renders as [`render`].
pub fn render_in<S: Surface>(
    source: &dyn ContainerSource,
    selector: &str,
    surface: &mut S,
    data: &[f64],
    options: impl Into<OptionsSource>,
) -> SparkResult<RenderPlan> {
    let container = source
        .find(selector)
        .ok_or_else(|| crate::error::SparkError::UnresolvedContainer(selector.to_owned()))?;
    render(container, surface, data, options)
}

fn resolved_config(options: &OptionsSource) -> SparklineConfig {
    if let OptionsSource::Preset(name) | OptionsSource::PresetThen { preset: name, .. } = options {
        if presets::get(name).is_none() {
            warn!(preset = %name, "unknown preset, rendering with defaults");
        }
    }
    SparklineConfig::resolve(options)
}

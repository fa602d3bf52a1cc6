use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::presets;
use crate::core::PointMeta;

pub const DEFAULT_PADDING: f64 = 2.0;
pub const DEFAULT_LINE_STROKE_WIDTH: f64 = 1.0;
pub const DEFAULT_DOT_RADIUS: f64 = 2.0;
pub const DEFAULT_PAINT: &str = "black";

/// CSS paint value passed through to the drawing backend.
///
/// The keyword `none` (any case) disables whatever the paint is applied to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paint(String);

impl Paint {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_none_keyword(&self) -> bool {
        self.0.eq_ignore_ascii_case("none")
    }

    /// Returns the paint unless it is the disabling `none` keyword.
    #[must_use]
    pub fn visible(self) -> Option<Self> {
        if self.is_none_keyword() { None } else { Some(self) }
    }
}

impl From<&str> for Paint {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Paint {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for Paint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Callback form of a per-point style value.
///
/// Receives the point's classification, its extracted value, and its index.
pub type StyleFn<V> = Arc<dyn Fn(&PointMeta, f64, usize) -> V + Send + Sync>;

/// A per-point style option: either a constant or a computed value.
///
/// The variant is fixed when configuration is resolved, not re-checked per
/// point.
#[derive(Clone)]
pub enum StyleValue<V> {
    Const(V),
    Computed(StyleFn<V>),
}

impl<V: Clone> StyleValue<V> {
    pub fn computed(f: impl Fn(&PointMeta, f64, usize) -> V + Send + Sync + 'static) -> Self {
        Self::Computed(Arc::new(f))
    }

    #[must_use]
    pub fn resolve(&self, meta: &PointMeta, value: f64, index: usize) -> V {
        match self {
            Self::Const(constant) => constant.clone(),
            Self::Computed(f) => f(meta, value, index),
        }
    }
}

impl<V: fmt::Debug> fmt::Debug for StyleValue<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Const(value) => f.debug_tuple("Const").field(value).finish(),
            Self::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

impl<V> From<V> for StyleValue<V> {
    fn from(value: V) -> Self {
        Self::Const(value)
    }
}

impl From<&str> for StyleValue<Paint> {
    fn from(value: &str) -> Self {
        Self::Const(Paint::from(value))
    }
}

/// Partial configuration used for presets, attribute parsing, and caller
/// overrides. Layering is key-by-key full override; there is no deep merge.
#[derive(Debug, Clone, Default)]
pub struct ConfigFragment {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub padding: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub color: Option<Paint>,
    pub area_fill: Option<Paint>,
    pub range_min: Option<f64>,
    pub range_max: Option<f64>,
    pub range_fill: Option<Paint>,
    pub line_stroke: Option<Paint>,
    pub line_stroke_width: Option<f64>,
    pub dot_radius: Option<StyleValue<f64>>,
    pub dot_fill: Option<StyleValue<Paint>>,
    pub dot_stroke: Option<StyleValue<Paint>>,
    pub dot_stroke_width: Option<StyleValue<f64>>,
}

impl ConfigFragment {
    /// Layers `self` over `base`: keys set here win, the rest fall through.
    #[must_use]
    pub fn merge_over(&self, base: &ConfigFragment) -> ConfigFragment {
        ConfigFragment {
            width: self.width.or(base.width),
            height: self.height.or(base.height),
            padding: self.padding.or(base.padding),
            min: self.min.or(base.min),
            max: self.max.or(base.max),
            color: self.color.clone().or_else(|| base.color.clone()),
            area_fill: self.area_fill.clone().or_else(|| base.area_fill.clone()),
            range_min: self.range_min.or(base.range_min),
            range_max: self.range_max.or(base.range_max),
            range_fill: self.range_fill.clone().or_else(|| base.range_fill.clone()),
            line_stroke: self
                .line_stroke
                .clone()
                .or_else(|| base.line_stroke.clone()),
            line_stroke_width: self.line_stroke_width.or(base.line_stroke_width),
            dot_radius: self.dot_radius.clone().or_else(|| base.dot_radius.clone()),
            dot_fill: self.dot_fill.clone().or_else(|| base.dot_fill.clone()),
            dot_stroke: self.dot_stroke.clone().or_else(|| base.dot_stroke.clone()),
            dot_stroke_width: self
                .dot_stroke_width
                .clone()
                .or_else(|| base.dot_stroke_width.clone()),
        }
    }

    #[must_use]
    pub fn with_width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    #[must_use]
    pub fn with_height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }

    #[must_use]
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = Some(padding);
        self
    }

    #[must_use]
    pub fn with_min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    #[must_use]
    pub fn with_max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<Paint>) -> Self {
        self.color = Some(color.into());
        self
    }

    #[must_use]
    pub fn with_area_fill(mut self, fill: impl Into<Paint>) -> Self {
        self.area_fill = Some(fill.into());
        self
    }

    #[must_use]
    pub fn with_range_min(mut self, range_min: f64) -> Self {
        self.range_min = Some(range_min);
        self
    }

    #[must_use]
    pub fn with_range_max(mut self, range_max: f64) -> Self {
        self.range_max = Some(range_max);
        self
    }

    #[must_use]
    pub fn with_range_fill(mut self, fill: impl Into<Paint>) -> Self {
        self.range_fill = Some(fill.into());
        self
    }

    #[must_use]
    pub fn with_line_stroke(mut self, stroke: impl Into<Paint>) -> Self {
        self.line_stroke = Some(stroke.into());
        self
    }

    #[must_use]
    pub fn with_line_stroke_width(mut self, width: f64) -> Self {
        self.line_stroke_width = Some(width);
        self
    }

    #[must_use]
    pub fn with_dot_radius(mut self, radius: impl Into<StyleValue<f64>>) -> Self {
        self.dot_radius = Some(radius.into());
        self
    }

    #[must_use]
    pub fn with_dot_fill(mut self, fill: impl Into<StyleValue<Paint>>) -> Self {
        self.dot_fill = Some(fill.into());
        self
    }

    #[must_use]
    pub fn with_dot_stroke(mut self, stroke: impl Into<StyleValue<Paint>>) -> Self {
        self.dot_stroke = Some(stroke.into());
        self
    }

    #[must_use]
    pub fn with_dot_stroke_width(mut self, width: impl Into<StyleValue<f64>>) -> Self {
        self.dot_stroke_width = Some(width.into());
        self
    }
}

/// How a render call supplies its configuration.
///
/// Resolution always layers defaults first, then the preset (when one is
/// named), then overrides. An unregistered preset name contributes nothing
/// and is never an error.
#[derive(Debug, Clone, Default)]
pub enum OptionsSource {
    #[default]
    Defaults,
    Preset(String),
    Fragment(ConfigFragment),
    PresetThen {
        preset: String,
        overrides: ConfigFragment,
    },
}

impl From<&str> for OptionsSource {
    fn from(name: &str) -> Self {
        Self::Preset(name.to_owned())
    }
}

impl From<String> for OptionsSource {
    fn from(name: String) -> Self {
        Self::Preset(name)
    }
}

impl From<ConfigFragment> for OptionsSource {
    fn from(fragment: ConfigFragment) -> Self {
        Self::Fragment(fragment)
    }
}

/// Fully resolved configuration for one render pass.
#[derive(Debug, Clone)]
pub struct SparklineConfig {
    /// Pixel width; `0` means "use the container's intrinsic width".
    pub width: u32,
    /// Pixel height; `0` means "use the container's intrinsic height".
    pub height: u32,
    pub padding: f64,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub area_fill: Option<Paint>,
    pub range_min: Option<f64>,
    pub range_max: Option<f64>,
    pub range_fill: Option<Paint>,
    pub line_stroke: Paint,
    pub line_stroke_width: f64,
    pub dot_radius: StyleValue<f64>,
    pub dot_fill: StyleValue<Paint>,
    pub dot_stroke: StyleValue<Paint>,
    pub dot_stroke_width: StyleValue<f64>,
}

impl Default for SparklineConfig {
    fn default() -> Self {
        Self::from_fragment(&ConfigFragment::default())
    }
}

impl SparklineConfig {
    /// Resolves an options source against the preset registry.
    #[must_use]
    pub fn resolve(source: &OptionsSource) -> Self {
        let fragment = match source {
            OptionsSource::Defaults => ConfigFragment::default(),
            OptionsSource::Preset(name) => presets::get(name).unwrap_or_default(),
            OptionsSource::Fragment(fragment) => fragment.clone(),
            OptionsSource::PresetThen { preset, overrides } => {
                overrides.merge_over(&presets::get(preset).unwrap_or_default())
            }
        };
        Self::from_fragment(&fragment)
    }

    /// Applies built-in defaults to a fragment.
    ///
    /// Line stroke and dot fill fall back per-field to the shared `color`
    /// before the built-in default, so setting `color` alone recolors both.
    #[must_use]
    pub fn from_fragment(fragment: &ConfigFragment) -> Self {
        let color = fragment.color.clone();
        Self {
            width: fragment.width.unwrap_or(0),
            height: fragment.height.unwrap_or(0),
            padding: fragment.padding.unwrap_or(DEFAULT_PADDING),
            min: fragment.min.filter(|value| value.is_finite()),
            max: fragment.max.filter(|value| value.is_finite()),
            area_fill: fragment.area_fill.clone().and_then(Paint::visible),
            range_min: fragment.range_min.filter(|value| value.is_finite()),
            range_max: fragment.range_max.filter(|value| value.is_finite()),
            range_fill: fragment.range_fill.clone().and_then(Paint::visible),
            line_stroke: fragment
                .line_stroke
                .clone()
                .or_else(|| color.clone())
                .unwrap_or_else(|| Paint::from(DEFAULT_PAINT)),
            line_stroke_width: fragment
                .line_stroke_width
                .unwrap_or(DEFAULT_LINE_STROKE_WIDTH),
            dot_radius: fragment
                .dot_radius
                .clone()
                .unwrap_or(StyleValue::Const(DEFAULT_DOT_RADIUS)),
            dot_fill: fragment.dot_fill.clone().unwrap_or_else(|| {
                StyleValue::Const(color.unwrap_or_else(|| Paint::from(DEFAULT_PAINT)))
            }),
            dot_stroke: fragment
                .dot_stroke
                .clone()
                .unwrap_or_else(|| StyleValue::Const(Paint::from("none"))),
            dot_stroke_width: fragment
                .dot_stroke_width
                .clone()
                .unwrap_or(StyleValue::Const(DEFAULT_LINE_STROKE_WIDTH)),
        }
    }

    /// Whether the main path is closed into a filled area.
    #[must_use]
    pub fn area_enabled(&self) -> bool {
        self.area_fill.is_some()
    }

    /// Whether a highlighted value-range band is drawn behind the path.
    #[must_use]
    pub fn band_enabled(&self) -> bool {
        self.range_fill.is_some() && self.range_min.is_some() && self.range_max.is_some()
    }
}

use crate::config::{ConfigFragment, Paint, StyleValue};

/// Attribute prefix for markup-driven configuration: option `range_min` is
/// read from `data-sparkline-range-min`.
pub const ATTRIBUTE_PREFIX: &str = "data-sparkline-";

/// Host-provided access to string-valued element attributes.
pub trait AttributeSource {
    fn attribute(&self, name: &str) -> Option<String>;
}

/// Reads recognized options from prefixed element attributes.
///
/// Numeric options accept numeric-looking strings and omit the key
/// otherwise; paint options take the attribute text as-is. Absent attributes
/// leave their keys unset.
#[must_use]
pub fn fragment_from_attributes(source: &dyn AttributeSource) -> ConfigFragment {
    ConfigFragment {
        width: read_pixels(source, "width"),
        height: read_pixels(source, "height"),
        padding: read_number(source, "padding"),
        min: read_number(source, "min"),
        max: read_number(source, "max"),
        color: read_paint(source, "color"),
        area_fill: read_paint(source, "area_fill"),
        range_min: read_number(source, "range_min"),
        range_max: read_number(source, "range_max"),
        range_fill: read_paint(source, "range_fill"),
        line_stroke: read_paint(source, "line_stroke"),
        line_stroke_width: read_number(source, "line_stroke_width"),
        dot_radius: read_number(source, "dot_radius").map(StyleValue::Const),
        dot_fill: read_paint(source, "dot_fill").map(StyleValue::Const),
        dot_stroke: read_paint(source, "dot_stroke").map(StyleValue::Const),
        dot_stroke_width: read_number(source, "dot_stroke_width").map(StyleValue::Const),
    }
}

fn attribute_name(key: &str) -> String {
    format!("{ATTRIBUTE_PREFIX}{}", key.replace('_', "-"))
}

fn read_raw(source: &dyn AttributeSource, key: &str) -> Option<String> {
    source.attribute(&attribute_name(key))
}

fn read_number(source: &dyn AttributeSource, key: &str) -> Option<f64> {
    read_raw(source, key).and_then(|text| text.trim().parse().ok())
}

/// Whole-pixel dimensions truncate toward zero, matching the sizing contract.
fn read_pixels(source: &dyn AttributeSource, key: &str) -> Option<u32> {
    read_number(source, key).map(|value| if value > 0.0 { value as u32 } else { 0 })
}

fn read_paint(source: &dyn AttributeSource, key: &str) -> Option<Paint> {
    read_raw(source, key).map(Paint::new)
}

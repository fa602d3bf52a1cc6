//! Process-wide named-preset registry.
//!
//! The table is seeded with the built-in presets on first use and mutated
//! only through [`set`] and [`extend`]. Reads and writes are serialized
//! through an `RwLock`; registration is expected at startup, and the order
//! of concurrent registrations is left unspecified.

use std::sync::{LazyLock, PoisonError, RwLock};

use indexmap::IndexMap;

use crate::config::{ConfigFragment, Paint, StyleValue};

static REGISTRY: LazyLock<RwLock<IndexMap<String, ConfigFragment>>> =
    LazyLock::new(|| RwLock::new(builtin_presets()));

/// Registers a preset, overwriting any existing fragment under `name`.
pub fn set(name: impl Into<String>, fragment: ConfigFragment) {
    REGISTRY
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .insert(name.into(), fragment);
}

/// Looks up a preset. Unknown names yield `None`, never an error.
#[must_use]
pub fn get(name: &str) -> Option<ConfigFragment> {
    REGISTRY
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(name)
        .cloned()
}

/// Registers `name` as `overrides` layered over the current value of
/// `base_name` (empty when the base is unregistered). The base is read once
/// at call time; later changes to it do not propagate.
pub fn extend(name: impl Into<String>, base_name: &str, overrides: ConfigFragment) {
    let base = get(base_name).unwrap_or_default();
    set(name, overrides.merge_over(&base));
}

/// Registered preset names in insertion order.
#[must_use]
pub fn names() -> Vec<String> {
    REGISTRY
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .keys()
        .cloned()
        .collect()
}

fn builtin_presets() -> IndexMap<String, ConfigFragment> {
    let mut table = IndexMap::new();
    table.insert("TUFTE_HIGHLIGHT_LAST".to_owned(), tufte_highlight_last());
    table.insert("TUFTE_HIGHLIGHT_PEAKS".to_owned(), tufte_highlight_peaks());
    table
}

// from: http://www.edwardtufte.com/bboard/q-and-a-fetch-msg?msg_id=0001OR
fn tufte_highlight_last() -> ConfigFragment {
    ConfigFragment::default()
        .with_line_stroke("#bbb")
        .with_line_stroke_width(1.5)
        .with_dot_fill("#f00")
        .with_dot_radius(StyleValue::computed(|meta, _, _| {
            if meta.last { 2.0 } else { 0.0 }
        }))
}

// from: http://www.edwardtufte.com/bboard/q-and-a-fetch-msg?msg_id=0001OR
fn tufte_highlight_peaks() -> ConfigFragment {
    ConfigFragment::default()
        .with_line_stroke("#bbb")
        .with_line_stroke_width(1.5)
        .with_dot_fill(StyleValue::computed(|meta, _, _| {
            if meta.min || meta.max {
                Paint::from("#339ACF")
            } else {
                Paint::from("#f00")
            }
        }))
        .with_dot_radius(StyleValue::computed(|meta, _, _| {
            if meta.first || meta.last || meta.min || meta.max {
                2.0
            } else {
                0.0
            }
        }))
}

// File: crates/chart-layout/src/ticks.rs
// Summary: Tick positions from axis declarations or categorical data, and tick label formatting.

use std::fmt;
use std::sync::Arc;

use log::debug;

use crate::axis::AxisNode;
use crate::calculated::CalculatedProps;
use crate::downsample::downsample_ticks;
use crate::types::Axis;
use crate::value::{contains_dates, contains_only_strings, contains_strings, Datum};

/// Caller-supplied tick label function.
pub type Formatter = Arc<dyn Fn(f64) -> String + Send + Sync>;

/// How a tick value is turned into its label.
#[derive(Clone)]
pub enum TickFormat {
    /// Render the raw number.
    Identity,
    /// Categorical labels indexed by ordinal, with an empty entry at each end.
    Labels(Vec<String>),
    Custom(Formatter),
}

impl TickFormat {
    pub fn format(&self, value: f64) -> String {
        match self {
            TickFormat::Identity => value.to_string(),
            TickFormat::Labels(labels) => {
                if value.fract() != 0.0 || value < 0.0 {
                    return String::new();
                }
                labels.get(value as usize).cloned().unwrap_or_default()
            }
            TickFormat::Custom(f) => f(value),
        }
    }
}

impl fmt::Debug for TickFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TickFormat::Identity => f.write_str("Identity"),
            TickFormat::Labels(labels) => f.debug_tuple("Labels").field(labels).finish(),
            TickFormat::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Data axis whose categories and string map feed `axis`; swapped for horizontal charts.
pub fn current_axis(axis: Axis, horizontal: bool) -> Axis {
    if horizontal { axis.other() } else { axis }
}

/// Ticks declared on the axis itself: explicit values, or the label sequence
/// standing in for them. `None` when the axis declares neither.
pub fn ticks_from_axis(calc: &CalculatedProps, axis: Axis, component: Option<&AxisNode>) -> Option<Vec<f64>> {
    let component = component?;
    let source = component.tick_source()?;
    let string_map = calc.string_map.get(current_axis(axis, calc.horizontal)).as_ref();
    let ticks: Vec<f64> = match string_map {
        Some(map) if contains_only_strings(source) => source
            .iter()
            .filter_map(|t| t.as_text().and_then(|s| map.ordinal(s)))
            .map(|o| o as f64)
            .collect(),
        _ => source.iter().filter_map(Datum::as_number).collect(),
    };
    if ticks.len() < source.len() {
        debug!(
            "{axis} axis: dropped {} of {} declared ticks with no numeric position",
            source.len() - ticks.len(),
            source.len()
        );
    }
    Some(downsample_ticks(ticks, component.tick_count))
}

/// Ticks derived from the categories recorded for the axis, falling back to every
/// ordinal of its string map. `None` leaves tick choice to the renderer.
pub fn ticks_from_data(calc: &CalculatedProps, axis: Axis, component: Option<&AxisNode>) -> Option<Vec<f64>> {
    let current = current_axis(axis, calc.horizontal);
    let string_map = calc.string_map.get(current).as_ref();
    let from_categories: Option<Vec<f64>> = calc.categories.get(current).as_ref().map(|categories| {
        if contains_only_strings(categories) {
            categories
                .iter()
                .filter_map(|c| c.as_text().and_then(|s| string_map?.ordinal(s)))
                .map(|o| o as f64)
                .collect()
        } else {
            categories.iter().filter_map(Datum::as_number).collect()
        }
    });
    let ticks = match from_categories {
        Some(t) if !t.is_empty() => Some(t),
        _ => string_map.map(|m| m.ordinals().map(|o| o as f64).collect()),
    };
    ticks.map(|t| downsample_ticks(t, component.and_then(|c| c.tick_count)))
}

/// Axis-declared ticks take precedence; data-derived ticks are the fallback.
/// Only a missing declaration falls through, so `[0]` or `[]` are kept as given.
pub fn get_ticks(calc: &CalculatedProps, axis: Axis, component: Option<&AxisNode>) -> Option<Vec<f64>> {
    if let Some(ticks) = ticks_from_axis(calc, axis, component) {
        return Some(ticks);
    }
    ticks_from_data(calc, axis, component)
}

/// Label format for an axis. Purely numeric explicit tick values render as-is;
/// categorical axes look labels up by ordinal; otherwise the renderer decides.
pub fn get_tick_format(component: &AxisNode, axis: Axis, calc: &CalculatedProps) -> Option<TickFormat> {
    let string_map = calc.string_map.get(current_axis(axis, calc.horizontal)).as_ref();
    if let Some(values) = &component.tick_values {
        if !contains_strings(values) && !contains_dates(values) {
            return Some(TickFormat::Identity);
        }
    }
    let map = string_map?;
    let mut ordinals: Vec<usize> = map.ordinals().collect();
    ordinals.sort_unstable();
    let mut labels = Vec::with_capacity(ordinals.len() + 2);
    // ordinal 0 and max + 1 are padding slots
    labels.push(String::new());
    labels.extend(ordinals.iter().filter_map(|&o| map.name(o)).map(str::to_string));
    labels.push(String::new());
    Some(TickFormat::Labels(labels))
}

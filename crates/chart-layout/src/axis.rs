// File: crates/chart-layout/src/axis.rs
// Summary: Axis declarations plus helpers that inspect a child tree for them.

use std::fmt;

use crate::node::ChartNode;
use crate::ticks::Formatter;
use crate::types::{Axis, Orientation, OriginSign};
use crate::value::Datum;

/// Which side of the data an axis describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisRole {
    Independent,
    Dependent,
}

/// Explicit tick formatting declared on an axis.
#[derive(Clone)]
pub enum TickFormatSpec {
    /// One label per tick; also stands in for tick positions when no values are given.
    Labels(Vec<Datum>),
    /// Caller-supplied formatter for numeric tick values.
    Custom(Formatter),
}

impl fmt::Debug for TickFormatSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TickFormatSpec::Labels(labels) => f.debug_tuple("Labels").field(labels).finish(),
            TickFormatSpec::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// An axis element of the chart tree.
#[derive(Clone, Debug, Default)]
pub struct AxisNode {
    pub label: String,
    pub dependent: bool,
    pub orientation: Option<Orientation>,
    pub invert: bool,
    pub tick_values: Option<Vec<Datum>>,
    pub tick_format: Option<TickFormatSpec>,
    pub tick_count: Option<usize>,
    pub offset_x: Option<f64>,
    pub offset_y: Option<f64>,
}

impl AxisNode {
    pub fn independent() -> Self {
        Self::default()
    }

    pub fn dependent() -> Self {
        Self { dependent: true, ..Self::default() }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = Some(orientation);
        self
    }

    pub fn inverted(mut self) -> Self {
        self.invert = true;
        self
    }

    pub fn with_tick_values<D: Into<Datum>>(mut self, values: impl IntoIterator<Item = D>) -> Self {
        self.tick_values = Some(values.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_tick_labels<D: Into<Datum>>(mut self, labels: impl IntoIterator<Item = D>) -> Self {
        self.tick_format = Some(TickFormatSpec::Labels(labels.into_iter().map(Into::into).collect()));
        self
    }

    pub fn with_tick_formatter(mut self, formatter: Formatter) -> Self {
        self.tick_format = Some(TickFormatSpec::Custom(formatter));
        self
    }

    pub fn with_tick_count(mut self, count: usize) -> Self {
        self.tick_count = Some(count);
        self
    }

    pub fn with_offset_x(mut self, px: f64) -> Self {
        self.offset_x = Some(px);
        self
    }

    pub fn with_offset_y(mut self, px: f64) -> Self {
        self.offset_y = Some(px);
        self
    }

    pub fn role(&self) -> AxisRole {
        if self.dependent { AxisRole::Dependent } else { AxisRole::Independent }
    }

    /// Axis letter this declaration draws; an explicit orientation decides first.
    pub fn axis(&self) -> Axis {
        match self.orientation {
            Some(o) => o.axis(),
            None if self.dependent => Axis::Y,
            None => Axis::X,
        }
    }

    /// Label sequence declared through `tick_format`, if any.
    pub fn tick_labels(&self) -> Option<&[Datum]> {
        match &self.tick_format {
            Some(TickFormatSpec::Labels(labels)) => Some(labels),
            _ => None,
        }
    }

    /// Array-shaped tick source: explicit values first, then the label sequence.
    pub fn tick_source(&self) -> Option<&[Datum]> {
        self.tick_values.as_deref().or_else(|| self.tick_labels())
    }
}

/// Top-level axis declarations with the given role, in tree order.
pub fn find_axis_components(children: &[ChartNode], role: AxisRole) -> Vec<&AxisNode> {
    children
        .iter()
        .filter_map(ChartNode::as_axis)
        .filter(|a| a.role() == role)
        .collect()
}

/// First axis declaration drawing `axis`, searching nested groups depth-first.
pub fn find_axis_component(children: &[ChartNode], axis: Axis) -> Option<&AxisNode> {
    for child in children {
        match child {
            ChartNode::Axis(a) if a.axis() == axis => return Some(a),
            ChartNode::Group(g) => {
                if let Some(found) = find_axis_component(&g.children, axis) {
                    return Some(found);
                }
            }
            _ => {}
        }
    }
    None
}

/// Side an axis is drawn on. An explicit orientation always wins; otherwise the
/// origin sign of the crossing axis picks the side.
pub fn orientation_for(component: Option<&AxisNode>, axis: Axis, origin_sign: OriginSign) -> Orientation {
    if let Some(o) = component.and_then(|c| c.orientation) {
        return o;
    }
    match (origin_sign, axis) {
        (OriginSign::Positive, Axis::X) => Orientation::Bottom,
        (OriginSign::Positive, Axis::Y) => Orientation::Left,
        (OriginSign::Negative, Axis::X) => Orientation::Top,
        (OriginSign::Negative, Axis::Y) => Orientation::Right,
    }
}

/// Value where the crossing axis meets this one: zero when the domain spans it,
/// otherwise the domain end nearest to zero.
pub fn origin(domain: [f64; 2]) -> f64 {
    let min = domain[0].min(domain[1]);
    let max = domain[0].max(domain[1]);
    if max < 0.0 { max } else { min.max(0.0) }
}

pub fn origin_sign(origin: f64, domain: [f64; 2]) -> OriginSign {
    if origin <= 0.0 && domain[0].max(domain[1]) <= 0.0 {
        OriginSign::Negative
    } else {
        OriginSign::Positive
    }
}

// File: crates/chart-layout/src/children.rs
// Summary: Partitions the chart tree into axis and data children; group-wrapper padding.

use log::warn;

use crate::axis::{find_axis_components, AxisNode, AxisRole};
use crate::node::{ChartNode, GroupKind};
use crate::types::Axis;

/// Axes used when the caller declares none.
#[derive(Clone, Debug)]
pub struct DefaultAxes {
    pub independent: AxisNode,
    pub dependent: AxisNode,
}

impl Default for DefaultAxes {
    fn default() -> Self {
        Self { independent: AxisNode::independent(), dependent: AxisNode::dependent() }
    }
}

/// Extra domain padding requested by a group wrapper.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DomainPadding {
    pub axis: Axis,
    pub amount: f64,
}

/// Children the chart lays out, with default axes filled in.
///
/// Only one independent axis is supported: when several are declared a warning
/// is logged and the first one is kept together with every data child and every
/// dependent axis.
pub fn get_child_components(children: &[ChartNode], defaults: &DefaultAxes) -> Vec<ChartNode> {
    if children.is_empty() {
        return vec![defaults.independent.clone().into(), defaults.dependent.clone().into()];
    }

    let dependent = find_axis_components(children, AxisRole::Dependent);
    let independent = find_axis_components(children, AxisRole::Independent);

    if dependent.is_empty() && independent.is_empty() {
        let mut out = children.to_vec();
        out.push(defaults.independent.clone().into());
        out.push(defaults.dependent.clone().into());
        return out;
    }

    if independent.len() > 1 {
        warn!(
            "Only one independent axis is allowed in a composed chart; found {}. \
             Only the first axis will be used. Compose multi-axis charts manually.",
            independent.len()
        );
        let mut out: Vec<ChartNode> = get_data_components(children).into_iter().cloned().collect();
        out.extend(dependent.into_iter().cloned().map(ChartNode::Axis));
        out.push(ChartNode::Axis(independent[0].clone()));
        return out;
    }

    children.to_vec()
}

/// Data children in depth-first, left-to-right order. Axes are skipped and
/// wrappers are replaced by their own data children.
pub fn get_data_components(children: &[ChartNode]) -> Vec<&ChartNode> {
    fn walk<'a>(nodes: &'a [ChartNode], out: &mut Vec<&'a ChartNode>) {
        for node in nodes {
            match node {
                ChartNode::Axis(_) => {}
                ChartNode::Group(g) => walk(&g.children, out),
                ChartNode::Data(_) => out.push(node),
            }
        }
    }
    let mut out = Vec::new();
    walk(children, &mut out);
    out
}

/// Padding that keeps grouped series inside the plot: half the total spread of
/// the first group wrapper, along y for horizontal charts and x otherwise.
pub fn default_domain_padding(children: &[ChartNode], horizontal: bool) -> Option<DomainPadding> {
    let group = children.iter().find_map(|c| match c {
        ChartNode::Group(g) if g.kind == GroupKind::Group => Some(g),
        _ => None,
    })?;
    let amount = group.offset * group.children.len() as f64 / 2.0;
    let axis = if horizontal { Axis::Y } else { Axis::X };
    Some(DomainPadding { axis, amount })
}

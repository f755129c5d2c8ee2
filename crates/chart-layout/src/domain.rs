// File: crates/chart-layout/src/domain.rs
// Summary: Domain aggregation over data children, string collection and category lookup.

use std::collections::HashMap;

use log::trace;

use crate::axis::find_axis_component;
use crate::chart::ChartProps;
use crate::children::get_data_components;
use crate::node::{ChartNode, DataNode, GroupKind, GroupNode};
use crate::string_map::StringMap;
use crate::ticks::current_axis;
use crate::types::Axis;
use crate::value::Datum;

/// Every distinct string that can appear on data axis `axis`, in first-seen order.
/// See [`string_map_for`] for the collection order.
pub fn collect_strings(props: &ChartProps, axis: Axis, children: &[ChartNode]) -> Vec<String> {
    string_map_for(props, axis, children).into_names()
}

/// Strings of data axis `axis` collected in three passes: chart categories and
/// the categories of every data child, then the tick strings of the axis
/// declaration drawn from this data axis, then every data child's values.
/// Data children are visited depth-first; repeats keep their first ordinal.
pub(crate) fn string_map_for(props: &ChartProps, axis: Axis, children: &[ChartNode]) -> StringMap {
    let mut map = StringMap::default();
    let mut push = |d: &Datum| {
        if let Some(s) = d.as_text() {
            map.insert(s.to_string());
        }
    };
    let data: Vec<&DataNode> = get_data_components(children).into_iter().filter_map(ChartNode::as_data).collect();

    if let Some(categories) = props.categories.get(axis) {
        categories.iter().for_each(&mut push);
    }
    for series in &data {
        if let Some(categories) = series.categories.get(axis) {
            categories.iter().for_each(&mut push);
        }
    }
    let visual = current_axis(axis, props.horizontal);
    if let Some(source) = find_axis_component(children, visual).and_then(|a| a.tick_source()) {
        source.iter().for_each(&mut push);
    }
    for series in &data {
        series.values(axis).for_each(&mut push);
    }
    map
}

/// Categories for `axis`: the chart's own list if it declares one, otherwise the
/// distinct categories of all data children. `None` when there are none.
pub fn categories_for_axis(props: &ChartProps, axis: Axis, children: &[ChartNode]) -> Option<Vec<Datum>> {
    if let Some(categories) = props.categories.get(axis) {
        return Some(categories.clone());
    }
    let mut out: Vec<Datum> = Vec::new();
    for node in get_data_components(children) {
        if let Some(categories) = node.as_data().and_then(|d| d.categories.get(axis).as_ref()) {
            for c in categories {
                if !out.contains(c) {
                    out.push(c.clone());
                }
            }
        }
    }
    if out.is_empty() { None } else { Some(out) }
}

/// Raw `[min, max]` domain of visual axis `axis` over the given children, before
/// inversion. Horizontal charts read the other data axis.
pub fn domain_for_axis(props: &ChartProps, axis: Axis, children: &[ChartNode]) -> [f64; 2] {
    let data_axis = current_axis(axis, props.horizontal);
    let strings = string_map_for(props, data_axis, children).non_empty();
    domain_with_strings(props, axis, children, strings.as_ref())
}

/// [`domain_for_axis`] with the string map of the data axis already built.
pub(crate) fn domain_with_strings(
    props: &ChartProps,
    axis: Axis,
    children: &[ChartNode],
    strings: Option<&StringMap>,
) -> [f64; 2] {
    if let Some(domain) = props.domain.get(axis) {
        return *domain;
    }
    let data_axis = current_axis(axis, props.horizontal);
    let mut extent = Extent::new();
    if let Some(categories) = props.categories.get(data_axis) {
        for c in categories {
            extent.include_datum(c, strings);
        }
    }
    accumulate(children, data_axis, strings, &mut extent);
    let domain = extent.finish();
    trace!("raw {axis} domain {:?} (data axis {data_axis})", domain);
    domain
}

/// Final domain of `axis`: reversed when its axis declaration is inverted.
/// Falls back to the chart's own children when none are given.
pub fn get_domain(props: &ChartProps, axis: Axis, children: Option<&[ChartNode]>) -> [f64; 2] {
    let children = children.unwrap_or(&props.children);
    let data_axis = current_axis(axis, props.horizontal);
    let strings = string_map_for(props, data_axis, children).non_empty();
    resolve_domain(props, axis, children, strings.as_ref())
}

/// [`get_domain`] with the string map of the data axis already built.
pub(crate) fn resolve_domain(
    props: &ChartProps,
    axis: Axis,
    children: &[ChartNode],
    strings: Option<&StringMap>,
) -> [f64; 2] {
    let domain = domain_with_strings(props, axis, children, strings);
    let inverted = find_axis_component(children, axis).is_some_and(|a| a.invert);
    if inverted { [domain[1], domain[0]] } else { domain }
}

fn accumulate(nodes: &[ChartNode], axis: Axis, strings: Option<&StringMap>, extent: &mut Extent) {
    for node in nodes {
        match node {
            ChartNode::Axis(_) => {}
            ChartNode::Data(data) => include_series(data, axis, strings, extent),
            ChartNode::Group(group) if group.kind == GroupKind::Stack && axis == Axis::Y => {
                include_stack(group, strings, extent)
            }
            ChartNode::Group(group) => accumulate(&group.children, axis, strings, extent),
        }
    }
}

fn include_series(data: &DataNode, axis: Axis, strings: Option<&StringMap>, extent: &mut Extent) {
    if let Some([lo, hi]) = data.domain.get(axis) {
        extent.include(*lo);
        extent.include(*hi);
        return;
    }
    if let Some(categories) = data.categories.get(axis) {
        for c in categories {
            extent.include_datum(c, strings);
        }
    }
    for v in data.values(axis) {
        extent.include_datum(v, strings);
    }
}

/// Stacked y extent: positive and negative values are summed separately per x.
fn include_stack(group: &GroupNode, strings: Option<&StringMap>, extent: &mut Extent) {
    let x_strings = StringMap::from_strings(
        get_data_components(&group.children)
            .into_iter()
            .filter_map(ChartNode::as_data)
            .flat_map(|d| d.values(Axis::X))
            .filter_map(|d| d.as_text().map(str::to_string)),
    );
    // keyed by the bit pattern of the x position
    let mut sums: HashMap<u64, (f64, f64)> = HashMap::new();
    for node in get_data_components(&group.children) {
        let Some(data) = node.as_data() else { continue };
        for (x, y) in &data.data {
            let (Some(xp), Some(yp)) = (position(x, x_strings.as_ref()), position(y, strings)) else {
                continue;
            };
            let entry = sums.entry(xp.to_bits()).or_insert((0.0, 0.0));
            if yp >= 0.0 { entry.0 += yp } else { entry.1 += yp }
        }
    }
    extent.include(0.0);
    for (positive, negative) in sums.values() {
        extent.include(*positive);
        extent.include(*negative);
    }
}

fn position(d: &Datum, strings: Option<&StringMap>) -> Option<f64> {
    match d {
        Datum::Text(s) => strings.and_then(|m| m.ordinal(s)).map(|o| o as f64),
        other => other.as_number(),
    }
}

struct Extent {
    min: f64,
    max: f64,
}

impl Extent {
    fn new() -> Self {
        Self { min: f64::INFINITY, max: f64::NEG_INFINITY }
    }

    fn include(&mut self, v: f64) {
        if v.is_finite() {
            self.min = self.min.min(v);
            self.max = self.max.max(v);
        }
    }

    fn include_datum(&mut self, d: &Datum, strings: Option<&StringMap>) {
        if let Some(v) = position(d, strings) {
            self.include(v);
        }
    }

    fn finish(self) -> [f64; 2] {
        if !self.min.is_finite() || !self.max.is_finite() {
            return [0.0, 1.0];
        }
        if (self.max - self.min).abs() < 1e-12 {
            return [self.min, self.min + 1.0];
        }
        [self.min, self.max]
    }
}

// File: crates/chart-layout/src/calculated.rs
// Summary: Per-pass bundle of derived layout values shared by tick and offset resolution.

use crate::axis::{find_axis_component, origin as origin_of, origin_sign as sign_of, AxisNode};
use crate::chart::ChartProps;
use crate::children::{default_domain_padding, DomainPadding};
use crate::domain::{categories_for_axis, resolve_domain, string_map_for};
use crate::node::ChartNode;
use crate::scale::{range_for, Scale};
use crate::string_map::StringMap;
use crate::ticks::current_axis;
use crate::types::{OriginSign, Padding, PerAxis};
use crate::value::Datum;

/// Values derived from one props tree. Built fresh for every layout pass.
#[derive(Clone, Debug)]
pub struct CalculatedProps {
    pub horizontal: bool,
    pub axis_components: PerAxis<Option<AxisNode>>,
    pub domain: PerAxis<[f64; 2]>,
    pub range: PerAxis<[f64; 2]>,
    pub scale: PerAxis<Scale>,
    pub origin: PerAxis<f64>,
    pub origin_sign: PerAxis<OriginSign>,
    pub string_map: PerAxis<Option<StringMap>>,
    pub categories: PerAxis<Option<Vec<Datum>>>,
    pub default_domain_padding: Option<DomainPadding>,
    pub padding: Padding,
}

impl CalculatedProps {
    /// Derive the bundle for `children`, normally the output of `get_child_components`.
    pub fn new(props: &ChartProps, children: &[ChartNode]) -> Self {
        let axis_components = PerAxis::from_fn(|axis| find_axis_component(children, axis).cloned());
        // keyed by data axis
        let string_map = PerAxis::from_fn(|axis| string_map_for(props, axis, children).non_empty());
        let domain = PerAxis::from_fn(|axis| {
            let strings = string_map.get(current_axis(axis, props.horizontal)).as_ref();
            resolve_domain(props, axis, children, strings)
        });
        let range = PerAxis::from_fn(|axis| range_for(axis, props.width, props.height, &props.padding));
        let scale = PerAxis::from_fn(|axis| Scale::new(*props.scale.get(axis), *domain.get(axis), *range.get(axis)));
        let origin = PerAxis::from_fn(|axis| origin_of(*domain.get(axis)));
        let origin_sign = PerAxis::from_fn(|axis| sign_of(*origin.get(axis), *domain.get(axis)));
        Self {
            horizontal: props.horizontal,
            axis_components,
            domain,
            range,
            scale,
            origin,
            origin_sign,
            string_map,
            categories: PerAxis::from_fn(|axis| categories_for_axis(props, axis, children)),
            default_domain_padding: default_domain_padding(children, props.horizontal),
            padding: props.padding,
        }
    }
}

impl Default for CalculatedProps {
    fn default() -> Self {
        Self {
            horizontal: false,
            axis_components: PerAxis::default(),
            domain: PerAxis::new([0.0, 1.0], [0.0, 1.0]),
            range: PerAxis::new([0.0, 1.0], [0.0, 1.0]),
            scale: PerAxis::default(),
            origin: PerAxis::default(),
            origin_sign: PerAxis::default(),
            string_map: PerAxis::default(),
            categories: PerAxis::default(),
            default_domain_padding: None,
            padding: Padding::default(),
        }
    }
}

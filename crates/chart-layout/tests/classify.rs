// File: crates/chart-layout/tests/classify.rs
// Purpose: Validate child classification, data flattening and group-wrapper domain padding.

use chart_layout::{
    default_domain_padding, get_child_components, get_data_components, Axis, AxisNode, AxisRole, ChartNode,
    DataNode, DefaultAxes, DomainPadding, GroupNode, Role,
};

fn series(name: &str) -> ChartNode {
    DataNode::with_data(name, vec![(0.0, 1.0), (1.0, 2.0)]).into()
}

fn name_of(node: &ChartNode) -> &str {
    match node {
        ChartNode::Data(d) => &d.name,
        ChartNode::Axis(a) => &a.label,
        ChartNode::Group(_) => "<group>",
    }
}

#[test]
fn empty_tree_yields_default_axes() {
    let defaults = DefaultAxes::default();
    let out = get_child_components(&[], &defaults);
    assert_eq!(out.len(), 2);
    assert_eq!(out[0].as_axis().map(AxisNode::role), Some(AxisRole::Independent));
    assert_eq!(out[1].as_axis().map(AxisNode::role), Some(AxisRole::Dependent));
}

#[test]
fn defaults_are_appended_when_no_axis_is_declared() {
    let defaults = DefaultAxes {
        independent: AxisNode::independent().with_label("Fruit"),
        dependent: AxisNode::dependent().with_label("Count"),
    };
    let out = get_child_components(&[series("a"), series("b")], &defaults);
    let names: Vec<&str> = out.iter().map(name_of).collect();
    assert_eq!(names, ["a", "b", "Fruit", "Count"]);
}

#[test]
fn declared_axes_leave_children_untouched() {
    let children = vec![
        series("a"),
        AxisNode::dependent().with_label("left").into(),
        series("b"),
    ];
    let out = get_child_components(&children, &DefaultAxes::default());
    let names: Vec<&str> = out.iter().map(name_of).collect();
    assert_eq!(names, ["a", "left", "b"]);
}

#[test]
fn only_first_independent_axis_survives() {
    let children = vec![
        AxisNode::independent().with_label("first").into(),
        series("a"),
        AxisNode::independent().with_label("second").into(),
        AxisNode::dependent().with_label("dep").into(),
        GroupNode::stack(vec![series("b")]).into(),
    ];
    let out = get_child_components(&children, &DefaultAxes::default());
    let names: Vec<&str> = out.iter().map(name_of).collect();
    assert_eq!(names, ["a", "b", "dep", "first"]);

    let independent = out
        .iter()
        .filter_map(ChartNode::as_axis)
        .filter(|a| a.role() == AxisRole::Independent)
        .count();
    assert_eq!(independent, 1);
}

#[test]
fn data_components_flatten_depth_first() {
    let children = vec![
        series("a"),
        GroupNode::group(5.0, vec![series("b"), GroupNode::stack(vec![series("c"), series("d")]).into()]).into(),
        AxisNode::independent().into(),
        series("e"),
    ];
    let data = get_data_components(&children);
    let names: Vec<&str> = data.iter().map(|n| name_of(n)).collect();
    assert_eq!(names, ["a", "b", "c", "d", "e"]);
    assert!(data.iter().all(|n| n.role() == Role::Data));
}

#[test]
fn group_wrapper_requests_half_its_spread() {
    let group: ChartNode = GroupNode::group(10.0, vec![series("a"), series("b"), series("c"), series("d")]).into();
    let children = vec![group, AxisNode::independent().into()];

    assert_eq!(
        default_domain_padding(&children, false),
        Some(DomainPadding { axis: Axis::X, amount: 20.0 })
    );
    assert_eq!(
        default_domain_padding(&children, true),
        Some(DomainPadding { axis: Axis::Y, amount: 20.0 })
    );
}

#[test]
fn stacks_do_not_request_domain_padding() {
    let children = vec![GroupNode::stack(vec![series("a")]).into(), series("b")];
    assert_eq!(default_domain_padding(&children, false), None);
}

// File: crates/chart-layout/tests/offset.rs
// Purpose: Validate axis crossing offsets, explicit overrides and the zero-pixel origin fallback.

use chart_layout::{
    get_axis_offset, get_child_components, AxisNode, AxisOffset, CalculatedProps, ChartProps, DataNode, PerAxis,
    Scale,
};

fn offsets(props: &ChartProps) -> AxisOffset {
    let children = get_child_components(&props.children, &props.default_axes);
    let calc = CalculatedProps::new(props, &children);
    get_axis_offset(props, &calc)
}

#[test]
fn origin_on_domain_edge_hugs_padding() {
    let props = ChartProps::new().with_child(DataNode::with_data("s", vec![(1.0, 1.0), (3.0, 4.0)]));
    assert_eq!(offsets(&props), AxisOffset { x: 50.0, y: 50.0 });
}

#[test]
fn origin_inside_domain_moves_axes_to_zero() {
    // x range [50, 400], y range [250, 50]
    let props = ChartProps::new().with_child(DataNode::with_data("s", vec![(-2.0, -1.0), (2.0, 3.0)]));
    assert_eq!(offsets(&props), AxisOffset { x: 225.0, y: 100.0 });
}

#[test]
fn explicit_offsets_win() {
    let props = ChartProps::new()
        .with_child(DataNode::with_data("s", vec![(-2.0, -1.0), (2.0, 3.0)]))
        .with_child(AxisNode::independent().with_offset_x(12.0))
        .with_child(AxisNode::dependent().with_offset_y(7.0));
    assert_eq!(offsets(&props), AxisOffset { x: 12.0, y: 7.0 });
}

#[test]
fn negative_domains_use_far_padding() {
    let props = ChartProps::new()
        .with_padding(chart_layout::Padding::new(10, 20, 30, 40))
        .with_child(DataNode::with_data("s", vec![(-5.0, -4.0), (-1.0, -2.0)]));
    // y axis on the right, x axis on top
    assert_eq!(offsets(&props), AxisOffset { x: 40.0, y: 10.0 });
}

#[test]
fn origin_scaled_to_zero_pixels_falls_back_to_padding() {
    // The origin lies strictly inside the x domain but lands on pixel 0, which
    // is indistinguishable from "no computed offset": the padding is used.
    let props = ChartProps::new();
    let mut calc = CalculatedProps::default();
    calc.domain = PerAxis::new([-2.0, 2.0], [0.0, 1.0]);
    calc.scale = PerAxis::new(
        Scale::linear([-2.0, 2.0], [-200.0, 200.0]),
        Scale::linear([0.0, 1.0], [250.0, 50.0]),
    );
    calc.origin = PerAxis::new(0.0, 0.0);
    assert_eq!(calc.scale.x.to_px(0.0), 0.0);
    assert_eq!(get_axis_offset(&props, &calc), AxisOffset { x: 50.0, y: 50.0 });
}

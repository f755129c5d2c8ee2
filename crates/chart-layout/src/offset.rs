// File: crates/chart-layout/src/offset.rs
// Summary: Axis offsets that make the two axes cross at the origin.

use crate::axis::orientation_for;
use crate::calculated::CalculatedProps;
use crate::chart::ChartProps;
use crate::types::{Axis, Orientation};

/// Pixel offsets of the axes from their drawing edges.
/// `x` positions the y axis horizontally, `y` positions the x axis vertically.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisOffset {
    pub x: f64,
    pub y: f64,
}

/// Place the axes so they cross at the origin.
///
/// When the origin sits on a domain end the axis hugs the padding on its side.
/// Otherwise the offset is the pixel distance between the drawing edge and the
/// scaled origin. A scaled origin of exactly 0px is treated like a domain end
/// and also falls back to the padding. Explicit `offset_x` / `offset_y` on the
/// axis declarations win over both.
pub fn get_axis_offset(props: &ChartProps, calc: &CalculatedProps) -> AxisOffset {
    let padding = &calc.padding;
    let x_component = calc.axis_components.x.as_ref();
    let y_component = calc.axis_components.y.as_ref();

    let x_orientation = orientation_for(x_component, Axis::X, calc.origin_sign.y);
    let y_orientation = orientation_for(y_component, Axis::Y, calc.origin_sign.x);

    let orientation_offset_x = f64::from(if y_orientation == Orientation::Left { padding.left } else { padding.right });
    let orientation_offset_y = f64::from(if x_orientation == Orientation::Bottom { padding.bottom } else { padding.top });

    let origin_offset_x = if y_orientation == Orientation::Left { 0.0 } else { props.width as f64 };
    let origin_offset_y = if x_orientation == Orientation::Bottom { props.height as f64 } else { 0.0 };

    let origin_position = |axis: Axis| {
        let origin = *calc.origin.get(axis);
        let domain = calc.domain.get(axis);
        if origin == domain[0] || origin == domain[1] { 0.0 } else { calc.scale.get(axis).to_px(origin) }
    };
    let resolve = |position: f64, origin_offset: f64, fallback: f64| {
        if position != 0.0 && !position.is_nan() { (origin_offset - position).abs() } else { fallback }
    };
    let calculated_x = resolve(origin_position(Axis::X), origin_offset_x, orientation_offset_x);
    let calculated_y = resolve(origin_position(Axis::Y), origin_offset_y, orientation_offset_y);

    AxisOffset {
        x: x_component.and_then(|c| c.offset_x).unwrap_or(calculated_x),
        y: y_component.and_then(|c| c.offset_y).unwrap_or(calculated_y),
    }
}

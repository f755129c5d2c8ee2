// File: crates/chart-layout/tests/ticks.rs
// Purpose: Validate tick resolution priority, downsampling and categorical tick formatting.

use chart_layout::downsample::downsample_ticks;
use chart_layout::ticks::{ticks_from_axis, ticks_from_data};
use chart_layout::{get_tick_format, get_ticks, Axis, AxisNode, CalculatedProps, Datum, StringMap, TickFormat};

fn categorical_calc() -> CalculatedProps {
    let mut calc = CalculatedProps::default();
    calc.string_map.x = StringMap::from_strings(["cat", "dog"]);
    calc.categories.x = Some(vec![Datum::from("dog"), Datum::from("cat")]);
    calc
}

#[test]
fn axis_declaration_wins_over_data() {
    let calc = categorical_calc();
    let axis = AxisNode::independent().with_tick_values([10.0, 20.0]);
    assert_eq!(get_ticks(&calc, Axis::X, Some(&axis)), Some(vec![10.0, 20.0]));
}

#[test]
fn zero_tick_is_not_treated_as_missing() {
    let calc = categorical_calc();
    let axis = AxisNode::independent().with_tick_values([0.0]);
    assert_eq!(get_ticks(&calc, Axis::X, Some(&axis)), Some(vec![0.0]));

    let empty = AxisNode::independent().with_tick_values(Vec::<f64>::new());
    assert_eq!(get_ticks(&calc, Axis::X, Some(&empty)), Some(vec![]));
}

#[test]
fn string_ticks_translate_through_string_map() {
    let calc = categorical_calc();
    let axis = AxisNode::independent().with_tick_values(["dog", "cat"]);
    assert_eq!(ticks_from_axis(&calc, Axis::X, Some(&axis)), Some(vec![2.0, 1.0]));

    let labelled = AxisNode::independent().with_tick_labels(["cat"]);
    assert_eq!(ticks_from_axis(&calc, Axis::X, Some(&labelled)), Some(vec![1.0]));
}

#[test]
fn axis_without_array_source_falls_back_to_data() {
    let calc = categorical_calc();
    let axis = AxisNode::independent();
    assert_eq!(ticks_from_axis(&calc, Axis::X, Some(&axis)), None);
    assert_eq!(ticks_from_axis(&calc, Axis::X, None), None);
    assert_eq!(get_ticks(&calc, Axis::X, Some(&axis)), Some(vec![2.0, 1.0]));
}

#[test]
fn data_ticks_fall_back_to_string_map_ordinals() {
    let mut calc = categorical_calc();
    calc.categories.x = None;
    assert_eq!(ticks_from_data(&calc, Axis::X, None), Some(vec![1.0, 2.0]));

    calc.categories.x = Some(Vec::new());
    assert_eq!(ticks_from_data(&calc, Axis::X, None), Some(vec![1.0, 2.0]));
}

#[test]
fn numeric_categories_are_used_directly() {
    let mut calc = CalculatedProps::default();
    calc.categories.x = Some(vec![Datum::from(3.0), Datum::from(7.0)]);
    assert_eq!(ticks_from_data(&calc, Axis::X, None), Some(vec![3.0, 7.0]));
}

#[test]
fn no_categories_and_no_strings_leave_ticks_to_renderer() {
    let calc = CalculatedProps::default();
    assert_eq!(get_ticks(&calc, Axis::Y, Some(&AxisNode::dependent())), None);
}

#[test]
fn horizontal_charts_read_the_swapped_axis() {
    let mut calc = CalculatedProps::default();
    calc.horizontal = true;
    calc.string_map.y = StringMap::from_strings(["north", "south", "east"]);
    assert_eq!(ticks_from_data(&calc, Axis::X, None), Some(vec![1.0, 2.0, 3.0]));
    assert_eq!(ticks_from_data(&calc, Axis::Y, None), None);
}

#[test]
fn text_ticks_without_positions_are_dropped() {
    let calc = CalculatedProps::default();
    let mixed = AxisNode::independent().with_tick_values([Datum::from("start"), Datum::from(2.0), Datum::from(4.0)]);
    assert_eq!(ticks_from_axis(&calc, Axis::X, Some(&mixed)), Some(vec![2.0, 4.0]));

    let text_only = AxisNode::independent().with_tick_values(["a", "b"]);
    assert_eq!(ticks_from_axis(&calc, Axis::X, Some(&text_only)), Some(vec![]));

    // strings the map has never seen have no ordinal either
    let unmapped = AxisNode::independent().with_tick_values(["cat", "cow"]);
    assert_eq!(ticks_from_axis(&categorical_calc(), Axis::X, Some(&unmapped)), Some(vec![1.0]));
}

#[test]
fn tick_count_downsamples_keeping_spread() {
    let ticks: Vec<f64> = (1..=10).map(f64::from).collect();
    assert_eq!(downsample_ticks(ticks.clone(), Some(5)), vec![1.0, 3.0, 5.0, 7.0, 9.0]);
    assert_eq!(downsample_ticks(ticks.clone(), Some(3)), vec![1.0, 4.0, 7.0, 10.0]);
    assert_eq!(downsample_ticks(ticks.clone(), Some(0)), ticks);
    assert_eq!(downsample_ticks(ticks.clone(), Some(20)), ticks);
    assert_eq!(downsample_ticks(ticks.clone(), None), ticks);

    let axis = AxisNode::independent().with_tick_values(ticks).with_tick_count(5);
    let calc = CalculatedProps::default();
    assert_eq!(get_ticks(&calc, Axis::X, Some(&axis)), Some(vec![1.0, 3.0, 5.0, 7.0, 9.0]));
}

#[test]
fn categorical_format_pads_both_ends() {
    let calc = categorical_calc();
    let format = get_tick_format(&AxisNode::independent(), Axis::X, &calc).expect("string map present");
    assert_eq!(format.format(0.0), "");
    assert_eq!(format.format(1.0), "cat");
    assert_eq!(format.format(2.0), "dog");
    assert_eq!(format.format(3.0), "");
    assert_eq!(format.format(1.5), "");
    assert_eq!(format.format(-1.0), "");
}

#[test]
fn numeric_tick_values_render_as_is() {
    let calc = categorical_calc();
    let axis = AxisNode::independent().with_tick_values([10.0, 2.5]);
    let format = get_tick_format(&axis, Axis::X, &calc).expect("identity");
    assert!(matches!(format, TickFormat::Identity));
    assert_eq!(format.format(10.0), "10");
    assert_eq!(format.format(2.5), "2.5");
}

#[test]
fn missing_string_map_defers_formatting() {
    let calc = CalculatedProps::default();
    assert!(get_tick_format(&AxisNode::independent(), Axis::X, &calc).is_none());

    let dated = AxisNode::independent().with_tick_values([Datum::parse("2024-03-01")]);
    assert!(get_tick_format(&dated, Axis::X, &calc).is_none());
}

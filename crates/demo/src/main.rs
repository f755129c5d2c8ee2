// File: crates/demo/src/main.rs
// Summary: Demo loads a CSV (first column x, further columns y series) and prints the calculated layout.

use anyhow::{Context, Result};
use chart_layout::{AxisLayout, AxisNode, ChartLayout, ChartProps, DataNode, Datum};
use log::info;
use std::path::{Path, PathBuf};

struct Options {
    path: PathBuf,
    horizontal: bool,
    invert_x: bool,
    tick_count: Option<usize>,
}

fn main() -> Result<()> {
    env_logger::init();
    let opts = parse_args(std::env::args().skip(1))?;
    println!("Using input file: {}", opts.path.display());

    let (x_label, series) = load_series_csv(&opts.path)
        .with_context(|| format!("failed to load CSV '{}'", opts.path.display()))?;
    if series.is_empty() {
        anyhow::bail!("no series loaded; expected an x column followed by at least one y column");
    }
    println!("Loaded {} series", series.len());

    let mut x_axis = AxisNode::independent().with_label(x_label);
    if opts.invert_x {
        x_axis = x_axis.inverted();
    }
    if let Some(n) = opts.tick_count {
        x_axis = x_axis.with_tick_count(n);
    }

    let mut props = ChartProps::new().horizontal(opts.horizontal).with_child(x_axis).with_child(AxisNode::dependent());
    for s in series {
        props.add_child(s);
    }

    let layout = props.layout().context("layout pass failed")?;
    print_layout(&layout);
    Ok(())
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Options> {
    let mut path = None;
    let mut horizontal = false;
    let mut invert_x = false;
    let mut tick_count = None;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--horizontal" => horizontal = true,
            "--invert-x" => invert_x = true,
            "--tick-count" => {
                let raw = args.next().context("--tick-count needs a value")?;
                tick_count = Some(raw.parse::<usize>().with_context(|| format!("invalid tick count '{raw}'"))?);
            }
            _ => path = Some(PathBuf::from(arg)),
        }
    }
    let path = path.unwrap_or_else(|| PathBuf::from("crates/demo/data/fruit.csv"));
    if !path.exists() {
        anyhow::bail!("file not found: {}", path.display());
    }
    Ok(Options { path, horizontal, invert_x, tick_count })
}

/// Load one data series per y column; x values come from the first column,
/// whose header is returned as the x label.
fn load_series_csv(path: &Path) -> Result<(String, Vec<DataNode>)> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(|h| h.trim().to_string()).collect::<Vec<_>>();
    info!("headers: {:?}", headers);
    if headers.len() < 2 {
        return Ok((String::new(), Vec::new()));
    }

    let mut series: Vec<DataNode> = headers[1..].iter().map(DataNode::new).collect();
    for rec in rdr.records() {
        let rec = rec?;
        let Some(x) = rec.get(0).map(Datum::parse) else { continue };
        for (i, s) in series.iter_mut().enumerate() {
            if let Some(cell) = rec.get(i + 1).filter(|c| !c.trim().is_empty()) {
                s.data.push((x.clone(), Datum::parse(cell)));
            }
        }
    }
    Ok((headers[0].clone(), series))
}

fn print_layout(layout: &ChartLayout) {
    let calc = &layout.calculated;
    println!("Domain x: {:?}  y: {:?}", calc.domain.x, calc.domain.y);
    println!("Origin x: {}  y: {}", calc.origin.x, calc.origin.y);
    println!("Axis offset x: {}  y: {}", layout.offset.x, layout.offset.y);
    if let Some(p) = calc.default_domain_padding {
        println!("Domain padding on {}: {}", p.axis, p.amount);
    }
    for axis in &layout.axes {
        print_axis(axis);
    }
}

fn print_axis(axis: &AxisLayout) {
    println!(
        "Axis {} ({:?}, {:?}) '{}': domain {:?}",
        axis.axis, axis.role, axis.orientation, axis.label, axis.domain
    );
    match (&axis.tick_values, axis.tick_labels()) {
        (Some(ticks), Some(labels)) => {
            for (t, l) in ticks.iter().zip(labels) {
                println!("  tick {t:>8} -> {l}");
            }
        }
        (Some(ticks), None) => println!("  ticks {ticks:?} (renderer formats)"),
        (None, _) => println!("  ticks chosen by renderer"),
    }
}

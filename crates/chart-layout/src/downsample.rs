// File: crates/chart-layout/src/downsample.rs
// Summary: Tick downsampling; thins a candidate tick list towards a target count.

/// Keep every k-th tick, `k = floor(len / count)`, so that the spread of the
/// list is preserved. A missing or zero count, or a list already within the
/// count, is returned untouched.
pub fn downsample_ticks(ticks: Vec<f64>, tick_count: Option<usize>) -> Vec<f64> {
    let count = match tick_count {
        Some(c) if c > 0 && ticks.len() > c => c,
        _ => return ticks,
    };
    let k = ticks.len() / count;
    ticks
        .into_iter()
        .enumerate()
        .filter(|(i, _)| i % k == 0)
        .map(|(_, t)| t)
        .collect()
}

// File: crates/chart-layout/src/error.rs
// Summary: Configuration errors reported before a layout pass runs.

use thiserror::Error;

use crate::types::Axis;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum LayoutError {
    #[error("chart surface must be non-empty, got {width}x{height}")]
    EmptySurface { width: u32, height: u32 },

    #[error("padding of {padding}px leaves no room along {axis} (extent {extent}px)")]
    PaddingExceedsExtent { axis: Axis, padding: u32, extent: u32 },

    #[error("explicit {axis} domain must be finite, got [{min}, {max}]")]
    NonFiniteDomain { axis: Axis, min: f64, max: f64 },
}

pub type Result<T, E = LayoutError> = std::result::Result<T, E>;

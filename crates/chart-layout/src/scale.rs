// File: crates/chart-layout/src/scale.rs
// Summary: Domain-to-pixel scales (linear and log10) and the pixel range of each axis.

use crate::types::{Axis, Padding};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScaleKind {
    #[default]
    Linear,
    Log10,
}

const LOG_FLOOR: f64 = 1e-12;

/// Maps domain values onto a pixel range.
/// The domain may be reversed; the range runs in drawing direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scale {
    pub kind: ScaleKind,
    domain: [f64; 2],
    range: [f64; 2],
}

impl Scale {
    pub fn new(kind: ScaleKind, domain: [f64; 2], range: [f64; 2]) -> Self {
        Self { kind, domain, range }
    }

    pub fn linear(domain: [f64; 2], range: [f64; 2]) -> Self {
        Self::new(ScaleKind::Linear, domain, range)
    }

    pub fn domain(&self) -> [f64; 2] { self.domain }

    pub fn range(&self) -> [f64; 2] { self.range }

    #[inline]
    fn project(&self, v: f64) -> f64 {
        match self.kind {
            ScaleKind::Linear => v,
            ScaleKind::Log10 => v.max(LOG_FLOOR).log10(),
        }
    }

    /// Pixel position of a domain value. A degenerate domain maps to the range start.
    #[inline]
    pub fn to_px(&self, v: f64) -> f64 {
        let d0 = self.project(self.domain[0]);
        let d1 = self.project(self.domain[1]);
        let span = d1 - d0;
        if span.abs() < 1e-12 {
            return self.range[0];
        }
        self.range[0] + (self.project(v) - d0) / span * (self.range[1] - self.range[0])
    }

    /// Domain value at a pixel position.
    #[inline]
    pub fn from_px(&self, px: f64) -> f64 {
        let d0 = self.project(self.domain[0]);
        let d1 = self.project(self.domain[1]);
        let extent = self.range[1] - self.range[0];
        if extent.abs() < 1e-12 {
            return self.domain[0];
        }
        let t = d0 + (px - self.range[0]) / extent * (d1 - d0);
        match self.kind {
            ScaleKind::Linear => t,
            ScaleKind::Log10 => 10f64.powf(t),
        }
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self::linear([0.0, 1.0], [0.0, 1.0])
    }
}

/// Pixel range of `axis`: x runs left to right, y runs bottom to top.
pub fn range_for(axis: Axis, width: u32, height: u32, padding: &Padding) -> [f64; 2] {
    match axis {
        Axis::X => [padding.left as f64, width as f64 - padding.right as f64],
        Axis::Y => [height as f64 - padding.bottom as f64, padding.top as f64],
    }
}

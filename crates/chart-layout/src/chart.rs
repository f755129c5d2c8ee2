// File: crates/chart-layout/src/chart.rs
// Summary: Chart props (configuration + child tree) and the layout pass that turns them into axis layouts.

use log::debug;

use crate::axis::{orientation_for, AxisRole, TickFormatSpec};
use crate::calculated::CalculatedProps;
use crate::children::{get_child_components, get_data_components, DefaultAxes};
use crate::error::{LayoutError, Result};
use crate::node::ChartNode;
use crate::offset::{get_axis_offset, AxisOffset};
use crate::scale::ScaleKind;
use crate::ticks::{get_tick_format, get_ticks, TickFormat};
use crate::types::{Axis, Orientation, Padding, PerAxis, HEIGHT, WIDTH};
use crate::value::Datum;

/// Input of a layout pass: surface, configuration and the child tree.
#[derive(Clone, Debug)]
pub struct ChartProps {
    pub width: u32,
    pub height: u32,
    pub padding: Padding,
    pub horizontal: bool,
    pub domain: PerAxis<Option<[f64; 2]>>,
    pub categories: PerAxis<Option<Vec<Datum>>>,
    pub scale: PerAxis<ScaleKind>,
    pub default_axes: DefaultAxes,
    pub children: Vec<ChartNode>,
}

impl Default for ChartProps {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            padding: Padding::default(),
            horizontal: false,
            domain: PerAxis::default(),
            categories: PerAxis::default(),
            scale: PerAxis::default(),
            default_axes: DefaultAxes::default(),
            children: Vec::new(),
        }
    }
}

impl ChartProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_child(&mut self, child: impl Into<ChartNode>) {
        self.children.push(child.into());
    }

    pub fn with_child(mut self, child: impl Into<ChartNode>) -> Self {
        self.add_child(child);
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_domain(mut self, axis: Axis, domain: [f64; 2]) -> Self {
        *self.domain.get_mut(axis) = Some(domain);
        self
    }

    pub fn with_categories<D: Into<Datum>>(mut self, axis: Axis, categories: impl IntoIterator<Item = D>) -> Self {
        *self.categories.get_mut(axis) = Some(categories.into_iter().map(Into::into).collect());
        self
    }

    pub fn horizontal(mut self, horizontal: bool) -> Self {
        self.horizontal = horizontal;
        self
    }

    /// Check the configuration a layout pass relies on.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(LayoutError::EmptySurface { width: self.width, height: self.height });
        }
        if self.padding.hsum() >= self.width {
            return Err(LayoutError::PaddingExceedsExtent { axis: Axis::X, padding: self.padding.hsum(), extent: self.width });
        }
        if self.padding.vsum() >= self.height {
            return Err(LayoutError::PaddingExceedsExtent { axis: Axis::Y, padding: self.padding.vsum(), extent: self.height });
        }
        for axis in Axis::ALL {
            if let Some([min, max]) = *self.domain.get(axis) {
                if !min.is_finite() || !max.is_finite() {
                    return Err(LayoutError::NonFiniteDomain { axis, min, max });
                }
            }
        }
        Ok(())
    }

    /// Run a full layout pass over the child tree.
    pub fn layout(&self) -> Result<ChartLayout> {
        self.validate()?;
        let children = get_child_components(&self.children, &self.default_axes);
        let calculated = CalculatedProps::new(self, &children);
        let offset = get_axis_offset(self, &calculated);

        let axes: Vec<AxisLayout> = children
            .iter()
            .filter_map(ChartNode::as_axis)
            .map(|component| {
                let axis = component.axis();
                let tick_format = match &component.tick_format {
                    Some(TickFormatSpec::Custom(f)) => Some(TickFormat::Custom(f.clone())),
                    _ => get_tick_format(component, axis, &calculated),
                };
                AxisLayout {
                    axis,
                    role: component.role(),
                    label: component.label.clone(),
                    orientation: orientation_for(Some(component), axis, *calculated.origin_sign.get(axis.other())),
                    domain: *calculated.domain.get(axis),
                    tick_values: get_ticks(&calculated, axis, Some(component)),
                    tick_format,
                    offset_x: (axis == Axis::Y).then_some(offset.x),
                    offset_y: (axis == Axis::X).then_some(offset.y),
                }
            })
            .collect();

        let data: Vec<ChartNode> = get_data_components(&children).into_iter().cloned().collect();
        debug!(
            "layout pass: {} axes, {} data series, x domain {:?}, y domain {:?}, offset {:?}",
            axes.len(),
            data.len(),
            calculated.domain.x,
            calculated.domain.y,
            offset
        );

        Ok(ChartLayout { calculated, offset, axes, data })
    }
}

/// Everything a renderer needs to draw one axis.
#[derive(Clone, Debug)]
pub struct AxisLayout {
    pub axis: Axis,
    pub role: AxisRole,
    pub label: String,
    pub orientation: Orientation,
    pub domain: [f64; 2],
    /// `None` lets the renderer pick its own ticks.
    pub tick_values: Option<Vec<f64>>,
    /// `None` lets the renderer use its own number formatting.
    pub tick_format: Option<TickFormat>,
    pub offset_x: Option<f64>,
    pub offset_y: Option<f64>,
}

impl AxisLayout {
    /// Labels for the resolved tick values, when both are known.
    pub fn tick_labels(&self) -> Option<Vec<String>> {
        let format = self.tick_format.as_ref()?;
        let ticks = self.tick_values.as_ref()?;
        Some(ticks.iter().map(|&t| format.format(t)).collect())
    }
}

/// Result of a layout pass.
#[derive(Clone, Debug)]
pub struct ChartLayout {
    pub calculated: CalculatedProps,
    pub offset: AxisOffset,
    pub axes: Vec<AxisLayout>,
    pub data: Vec<ChartNode>,
}

impl ChartLayout {
    /// First axis layout drawn along `axis`.
    pub fn axis(&self, axis: Axis) -> Option<&AxisLayout> {
        self.axes.iter().find(|a| a.axis == axis)
    }
}

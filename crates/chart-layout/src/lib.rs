// File: crates/chart-layout/src/lib.rs
// Summary: Core library entry point; exports the layout API for composed charts.

pub mod axis;
pub mod calculated;
pub mod chart;
pub mod children;
pub mod domain;
pub mod downsample;
pub mod error;
pub mod node;
pub mod offset;
pub mod scale;
pub mod string_map;
pub mod ticks;
pub mod types;
pub mod value;

pub use axis::{AxisNode, AxisRole, TickFormatSpec};
pub use calculated::CalculatedProps;
pub use chart::{AxisLayout, ChartLayout, ChartProps};
pub use children::{default_domain_padding, get_child_components, get_data_components, DefaultAxes, DomainPadding};
pub use domain::get_domain;
pub use error::{LayoutError, Result};
pub use node::{ChartNode, DataNode, GroupKind, GroupNode, Role};
pub use offset::{get_axis_offset, AxisOffset};
pub use scale::{Scale, ScaleKind};
pub use string_map::{create_string_map, StringMap};
pub use ticks::{get_tick_format, get_ticks, Formatter, TickFormat};
pub use types::{Axis, Orientation, OriginSign, Padding, PerAxis};
pub use value::Datum;

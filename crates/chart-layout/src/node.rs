// File: crates/chart-layout/src/node.rs
// Summary: Typed chart tree: axis declarations, grouping wrappers and data series.

use crate::axis::AxisNode;
use crate::types::{Axis, PerAxis};
use crate::value::Datum;

/// Role a child plays when the chart arranges its children.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Axis,
    GroupWrapper,
    StackWrapper,
    Data,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GroupKind {
    /// Side-by-side series separated by `offset` pixels.
    Group,
    /// Series stacked on top of each other along y.
    Stack,
}

/// A wrapper that holds nested children.
#[derive(Clone, Debug)]
pub struct GroupNode {
    pub kind: GroupKind,
    pub offset: f64,
    pub children: Vec<ChartNode>,
}

impl GroupNode {
    pub fn group(offset: f64, children: Vec<ChartNode>) -> Self {
        Self { kind: GroupKind::Group, offset, children }
    }

    pub fn stack(children: Vec<ChartNode>) -> Self {
        Self { kind: GroupKind::Stack, offset: 0.0, children }
    }
}

/// A data series: `(x, y)` pairs plus optional categories and domain overrides.
#[derive(Clone, Debug, Default)]
pub struct DataNode {
    pub name: String,
    pub data: Vec<(Datum, Datum)>,
    pub categories: PerAxis<Option<Vec<Datum>>>,
    pub domain: PerAxis<Option<[f64; 2]>>,
}

impl DataNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Self::default() }
    }

    pub fn with_data<X: Into<Datum>, Y: Into<Datum>>(
        name: impl Into<String>,
        data: impl IntoIterator<Item = (X, Y)>,
    ) -> Self {
        let data = data.into_iter().map(|(x, y)| (x.into(), y.into())).collect();
        Self { name: name.into(), data, ..Self::default() }
    }

    pub fn with_categories<D: Into<Datum>>(mut self, axis: Axis, categories: impl IntoIterator<Item = D>) -> Self {
        *self.categories.get_mut(axis) = Some(categories.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_domain(mut self, axis: Axis, domain: [f64; 2]) -> Self {
        *self.domain.get_mut(axis) = Some(domain);
        self
    }

    /// Values of this series along `axis`, in data order.
    pub fn values(&self, axis: Axis) -> impl Iterator<Item = &Datum> + '_ {
        self.data.iter().map(move |(x, y)| match axis {
            Axis::X => x,
            Axis::Y => y,
        })
    }
}

/// One child of the chart tree, classified once when the tree is built.
#[derive(Clone, Debug)]
pub enum ChartNode {
    Axis(AxisNode),
    Group(GroupNode),
    Data(DataNode),
}

impl ChartNode {
    pub fn role(&self) -> Role {
        match self {
            ChartNode::Axis(_) => Role::Axis,
            ChartNode::Group(g) => match g.kind {
                GroupKind::Group => Role::GroupWrapper,
                GroupKind::Stack => Role::StackWrapper,
            },
            ChartNode::Data(_) => Role::Data,
        }
    }

    pub fn as_axis(&self) -> Option<&AxisNode> {
        match self {
            ChartNode::Axis(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_data(&self) -> Option<&DataNode> {
        match self {
            ChartNode::Data(d) => Some(d),
            _ => None,
        }
    }

    /// Nested children, for wrappers only.
    pub fn children(&self) -> Option<&[ChartNode]> {
        match self {
            ChartNode::Group(g) => Some(&g.children),
            _ => None,
        }
    }
}

impl From<AxisNode> for ChartNode {
    fn from(a: AxisNode) -> Self { ChartNode::Axis(a) }
}

impl From<GroupNode> for ChartNode {
    fn from(g: GroupNode) -> Self { ChartNode::Group(g) }
}

impl From<DataNode> for ChartNode {
    fn from(d: DataNode) -> Self { ChartNode::Data(d) }
}

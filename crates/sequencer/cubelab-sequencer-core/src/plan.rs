//! Pure plan of the nodes that should be visible for a given step.

use serde::{Deserialize, Serialize};

use crate::grid::GridCoordinate;

/// How a node is drawn: the latest placed cell is highlighted.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeStyle {
    Current,
    Placed,
}

impl NodeStyle {
    /// sRGB base colour as 0xRRGGBB.
    pub const fn base_color(self) -> u32 {
        match self {
            NodeStyle::Current => 0x00ff00,
            NodeStyle::Placed => 0x4a90e2,
        }
    }

    pub const fn opacity(self) -> f32 {
        match self {
            NodeStyle::Current => 1.0,
            NodeStyle::Placed => 0.6,
        }
    }

    /// Emissive colour and its intensity.
    pub const fn emissive(self) -> (u32, f32) {
        match self {
            NodeStyle::Current => (0x00ff00, 0.3),
            NodeStyle::Placed => (0x000000, 0.0),
        }
    }

    pub const fn label_color(self) -> u32 {
        match self {
            NodeStyle::Current => 0x00ff00,
            NodeStyle::Placed => 0xffffff,
        }
    }
}

/// World-space layout of planned nodes.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NodeLayout {
    pub spacing: f32,
    pub label_lift: f32,
}

impl Default for NodeLayout {
    fn default() -> Self {
        Self {
            spacing: 1.5,
            label_lift: 1.0,
        }
    }
}

/// One cube plus its label.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlannedNode {
    pub index: usize,
    pub coordinate: GridCoordinate,
    pub style: NodeStyle,
    pub position: [f32; 3],
    pub label_position: [f32; 3],
    pub label: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VisibleNodeSet {
    pub nodes: Vec<PlannedNode>,
}

impl VisibleNodeSet {
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn current(&self) -> Option<&PlannedNode> {
        self.nodes.iter().find(|n| n.style == NodeStyle::Current)
    }
}

/// Nodes for indices `0..=current`, with `current` highlighted.
/// `current` is clamped to the coordinate range.
pub fn plan_visible_nodes(
    coords: &[GridCoordinate],
    current: usize,
    layout: &NodeLayout,
) -> VisibleNodeSet {
    if coords.is_empty() {
        return VisibleNodeSet::default();
    }
    let current = current.min(coords.len() - 1);
    let nodes = coords[..=current]
        .iter()
        .enumerate()
        .map(|(index, coordinate)| {
            let position = coordinate.scaled(layout.spacing);
            let label_position = [position[0], position[1] + layout.label_lift, position[2]];
            let style = if index == current {
                NodeStyle::Current
            } else {
                NodeStyle::Placed
            };
            PlannedNode {
                index,
                coordinate: *coordinate,
                style,
                position,
                label_position,
                label: coordinate.to_string(),
            }
        })
        .collect();
    VisibleNodeSet { nodes }
}

use force_graph::DefaultNodeIdx;
use thiserror::Error;

use crate::network::{NodeKind, RelationKind};

/// Per-node payload carried inside the simulation.
#[derive(Clone, Debug)]
pub struct NodeInfo {
	pub id: String,
	pub label: String,
	pub kind: NodeKind,
	pub radius: f64,
	/// Held position while dragged; `None` when the simulation owns the node.
	pub pinned: Option<(f32, f32)>,
}

/// Edge resolved to simulation indices.
#[derive(Clone, Debug)]
pub struct EdgeInfo {
	pub source: DefaultNodeIdx,
	pub target: DefaultNodeIdx,
	pub kind: RelationKind,
	pub label: String,
}

/// What a press-and-release without movement landed on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClickTarget {
	Node(String),
	Background,
}

impl ClickTarget {
	/// The click event handed to listeners: a node id, or `None` to clear focus.
	pub fn into_event(self) -> Option<String> {
		match self {
			ClickTarget::Node(id) => Some(id),
			ClickTarget::Background => None,
		}
	}
}

/// Reasons a layout is not attempted; the view shows a static message instead.
#[derive(Debug, Error, PartialEq)]
pub enum LayoutError {
	#[error("No data to display for the current filters")]
	Empty,

	#[error("No data to display: the graph area is {width}x{height}")]
	ZeroArea { width: f64, height: f64 },
}

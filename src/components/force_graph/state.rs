use std::collections::{HashMap, HashSet};
use std::f64::consts::PI;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};
use log::debug;

use super::forces::{self, Body};
use super::scale::{ViewTransform, ZoomExtent, wheel_factor};
use super::types::{ClickTarget, EdgeInfo, LayoutError, NodeInfo};
use crate::config::LayoutConfig;
use crate::network::Graph;

/// Extra world-space distance around a node that still counts as a hit.
const HIT_SLOP: f64 = 4.0;

const NODE_DIMMED: f64 = 0.3;
const EDGE_DIMMED: f64 = 0.1;
const EDGE_RESTING: f64 = 0.6;

#[derive(Clone, Copy, Debug)]
pub struct DragState {
	pub node: DefaultNodeIdx,
	pub start_x: f64,
	pub start_y: f64,
	pub node_start_x: f32,
	pub node_start_y: f32,
}

#[derive(Clone, Copy, Debug)]
pub struct PanState {
	pub start_x: f64,
	pub start_y: f64,
	pub origin: ViewTransform,
}

#[derive(Clone, Debug, Default)]
pub struct HoverState {
	pub node: Option<DefaultNodeIdx>,
	pub neighbors: HashSet<DefaultNodeIdx>,
}

/// A pointer press that has not yet become a drag or a click.
#[derive(Clone, Copy, Debug)]
struct Press {
	x: f64,
	y: f64,
	node: Option<DefaultNodeIdx>,
	moved: bool,
}

/// Simulation, view transform and pointer interaction for one graph.
pub struct LayoutState {
	pub graph: ForceGraph<NodeInfo, ()>,
	pub transform: ViewTransform,
	pub drag: Option<DragState>,
	pub pan: Option<PanState>,
	pub hover: HoverState,
	pub width: f64,
	pub height: f64,
	config: LayoutConfig,
	alpha: f64,
	alpha_target: f64,
	edges: Vec<EdgeInfo>,
	index: HashMap<String, DefaultNodeIdx>,
	focus: Option<DefaultNodeIdx>,
	press: Option<Press>,
}

impl LayoutState {
	pub fn new(
		data: &Graph,
		width: f64,
		height: f64,
		config: LayoutConfig,
	) -> Result<Self, LayoutError> {
		if data.is_empty() {
			return Err(LayoutError::Empty);
		}
		if width <= 0.0 || height <= 0.0 {
			return Err(LayoutError::ZeroArea { width, height });
		}

		let mut graph = ForceGraph::new(SimulationParameters {
			force_charge: config.force_charge,
			force_spring: config.force_spring,
			force_max: config.force_max,
			node_speed: config.node_speed,
			damping_factor: config.damping_factor,
		});
		let mut index = HashMap::with_capacity(data.nodes.len());
		let mut edges = Vec::with_capacity(data.edges.len());

		// Phyllotaxis spiral around the world origin, so no two nodes start coincident.
		let golden = PI * (3.0 - 5f64.sqrt());
		for (i, node) in data.nodes.iter().enumerate() {
			let (r, angle) = (10.0 * (0.5 + i as f64).sqrt(), i as f64 * golden);
			let idx = graph.add_node(NodeData {
				x: (r * angle.cos()) as f32,
				y: (r * angle.sin()) as f32,
				mass: node.weight as f32,
				is_anchor: false,
				user_data: NodeInfo {
					id: node.id.clone(),
					label: node.label.clone(),
					kind: node.kind,
					radius: node.weight,
					pinned: None,
				},
			});
			index.insert(node.id.clone(), idx);
		}

		for edge in &data.edges {
			if let (Some(&source), Some(&target)) = (index.get(&edge.source), index.get(&edge.target)) {
				graph.add_edge(source, target, EdgeData::default());
				edges.push(EdgeInfo {
					source,
					target,
					kind: edge.kind,
					label: edge.label.clone(),
				});
			}
		}
		debug!("layout started: {} nodes, {} edges", index.len(), edges.len());

		Ok(Self {
			graph,
			transform: ViewTransform::centered(width, height),
			drag: None,
			pan: None,
			hover: HoverState::default(),
			width,
			height,
			config,
			alpha: 1.0,
			alpha_target: 0.0,
			edges,
			index,
			focus: None,
			press: None,
		})
	}

	pub fn edges(&self) -> &[EdgeInfo] {
		&self.edges
	}

	#[cfg(test)]
	pub fn alpha(&self) -> f64 {
		self.alpha
	}

	/// Cooled below the threshold with nothing holding it warm.
	pub fn is_settled(&self) -> bool {
		self.alpha < self.config.alpha_min && self.alpha_target <= 0.0
	}

	/// Advance one step. Returns whether the layout is still moving.
	pub fn tick(&mut self, dt: f32) -> bool {
		if self.is_settled() {
			return false;
		}
		self.alpha += (self.alpha_target - self.alpha) * self.config.alpha_decay;
		self.graph.update(dt * self.alpha as f32);
		self.apply_corrections();
		if self.is_settled() {
			debug!("layout settled");
		}
		!self.is_settled()
	}

	fn apply_corrections(&mut self) {
		let mut order = Vec::with_capacity(self.index.len());
		let mut bodies = Vec::with_capacity(self.index.len());
		self.graph.visit_nodes(|node| {
			order.push(node.index());
			bodies.push(Body {
				x: node.x() as f64,
				y: node.y() as f64,
				radius: node.data.user_data.radius * 2.0,
				fixed: node.data.is_anchor,
			});
		});
		let slot: HashMap<DefaultNodeIdx, usize> =
			order.iter().enumerate().map(|(i, &idx)| (idx, i)).collect();
		let links: Vec<(usize, usize)> = self
			.edges
			.iter()
			.filter_map(|e| Some((*slot.get(&e.source)?, *slot.get(&e.target)?)))
			.collect();

		let c = &self.config;
		forces::link(&mut bodies, &links, c.link_distance, c.link_strength, self.alpha);
		forces::collide(&mut bodies, c.collide_strength);
		forces::center(&mut bodies, c.center_strength);

		self.graph.visit_nodes_mut(|node| {
			if node.data.is_anchor {
				return;
			}
			if let Some(&i) = slot.get(&node.index()) {
				node.data.x = bodies[i].x as f32;
				node.data.y = bodies[i].y as f32;
			}
		});
	}

	fn reheat(&mut self) {
		self.alpha_target = self.config.alpha_reheat;
		self.alpha = self.alpha.max(self.config.alpha_reheat);
	}

	pub fn idx_of(&self, id: &str) -> Option<DefaultNodeIdx> {
		self.index.get(id).copied()
	}

	pub fn node_id(&self, idx: DefaultNodeIdx) -> Option<String> {
		let mut found = None;
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				found = Some(node.data.user_data.id.clone());
			}
		});
		found
	}

	pub fn position(&self, idx: DefaultNodeIdx) -> Option<(f64, f64)> {
		let mut found = None;
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				found = Some((node.x() as f64, node.y() as f64));
			}
		});
		found
	}

	pub fn positions(&self) -> HashMap<DefaultNodeIdx, (f64, f64)> {
		let mut out = HashMap::with_capacity(self.index.len());
		self.graph.visit_nodes(|node| {
			out.insert(node.index(), (node.x() as f64, node.y() as f64));
		});
		out
	}

	#[cfg(test)]
	pub fn pinned(&self, idx: DefaultNodeIdx) -> Option<(f32, f32)> {
		let mut found = None;
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				found = node.data.user_data.pinned;
			}
		});
		found
	}

	/// Nearest node whose disc (plus slop) contains the screen point.
	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<DefaultNodeIdx> {
		let (gx, gy) = self.transform.screen_to_graph(sx, sy);
		let mut best: Option<(f64, DefaultNodeIdx)> = None;
		self.graph.visit_nodes(|node| {
			let (dx, dy) = (node.x() as f64 - gx, node.y() as f64 - gy);
			let dist = (dx * dx + dy * dy).sqrt();
			if dist <= node.data.user_data.radius + HIT_SLOP
				&& best.is_none_or(|(d, _)| dist < d)
			{
				best = Some((dist, node.index()));
			}
		});
		best.map(|(_, idx)| idx)
	}

	fn pin(&mut self, idx: DefaultNodeIdx, x: f32, y: f32) {
		self.graph.visit_nodes_mut(|node| {
			if node.index() == idx {
				node.data.x = x;
				node.data.y = y;
				node.data.is_anchor = true;
				node.data.user_data.pinned = Some((x, y));
			}
		});
	}

	fn release(&mut self, idx: DefaultNodeIdx) {
		self.graph.visit_nodes_mut(|node| {
			if node.index() == idx {
				node.data.is_anchor = false;
				node.data.user_data.pinned = None;
			}
		});
	}

	pub fn start_drag(&mut self, idx: DefaultNodeIdx, sx: f64, sy: f64) {
		let Some((x, y)) = self.position(idx) else {
			return;
		};
		self.drag = Some(DragState {
			node: idx,
			start_x: sx,
			start_y: sy,
			node_start_x: x as f32,
			node_start_y: y as f32,
		});
		self.pin(idx, x as f32, y as f32);
		self.reheat();
		debug!("pinned {idx:?}");
	}

	pub fn drag_to(&mut self, sx: f64, sy: f64) {
		let Some(drag) = self.drag else {
			return;
		};
		let k = self.transform.k;
		let (nx, ny) = (
			drag.node_start_x + ((sx - drag.start_x) / k) as f32,
			drag.node_start_y + ((sy - drag.start_y) / k) as f32,
		);
		self.pin(drag.node, nx, ny);
	}

	pub fn end_drag(&mut self) {
		if let Some(drag) = self.drag.take() {
			self.release(drag.node);
			self.alpha_target = 0.0;
			debug!("unpinned {:?}", drag.node);
		}
	}

	pub fn start_pan(&mut self, sx: f64, sy: f64) {
		self.pan = Some(PanState {
			start_x: sx,
			start_y: sy,
			origin: self.transform,
		});
	}

	pub fn pan_to(&mut self, sx: f64, sy: f64) {
		if let Some(pan) = self.pan {
			self.transform = ViewTransform::panned(pan.origin, sx - pan.start_x, sy - pan.start_y);
		}
	}

	pub fn zoom(&mut self, sx: f64, sy: f64, delta_y: f64) {
		let extent = ZoomExtent {
			min: self.config.zoom_min,
			max: self.config.zoom_max,
		};
		self.transform.zoom_at(sx, sy, wheel_factor(delta_y), extent);
	}

	pub fn pointer_down(&mut self, sx: f64, sy: f64) {
		let node = self.node_at_position(sx, sy);
		self.press = Some(Press {
			x: sx,
			y: sy,
			node,
			moved: false,
		});
	}

	pub fn pointer_move(&mut self, sx: f64, sy: f64) {
		let Some(press) = self.press else {
			let hovered = self.node_at_position(sx, sy);
			self.set_hover(hovered);
			return;
		};
		if !press.moved {
			if (sx - press.x).hypot(sy - press.y) < self.config.click_tolerance {
				return;
			}
			self.press = Some(Press {
				moved: true,
				..press
			});
			match press.node {
				Some(idx) => self.start_drag(idx, press.x, press.y),
				None => self.start_pan(press.x, press.y),
			}
		}
		if self.drag.is_some() {
			self.drag_to(sx, sy);
		} else {
			self.pan_to(sx, sy);
		}
	}

	/// Finish a press. A release without movement is a click.
	pub fn pointer_up(&mut self) -> Option<ClickTarget> {
		let press = self.press.take()?;
		if press.moved {
			self.end_drag();
			self.pan = None;
			return None;
		}
		Some(match press.node.and_then(|idx| self.node_id(idx)) {
			Some(id) => ClickTarget::Node(id),
			None => ClickTarget::Background,
		})
	}

	pub fn pointer_leave(&mut self) {
		self.press = None;
		self.end_drag();
		self.pan = None;
		self.set_hover(None);
	}

	pub fn set_hover(&mut self, node: Option<DefaultNodeIdx>) {
		if self.hover.node == node {
			return;
		}
		self.hover.node = node;
		self.hover.neighbors.clear();
		if let Some(idx) = node {
			for edge in &self.edges {
				if edge.source == idx {
					self.hover.neighbors.insert(edge.target);
				} else if edge.target == idx {
					self.hover.neighbors.insert(edge.source);
				}
			}
		}
	}

	pub fn is_hovered(&self, idx: DefaultNodeIdx) -> bool {
		self.hover.node == Some(idx)
	}

	pub fn touches_hover(&self, edge: &EdgeInfo) -> bool {
		self.hover
			.node
			.is_some_and(|h| edge.source == h || edge.target == h)
	}

	/// Ids not present in this graph clear the focus.
	pub fn set_focus(&mut self, id: Option<&str>) {
		self.focus = id.and_then(|id| self.idx_of(id));
	}

	pub fn focus(&self) -> Option<DefaultNodeIdx> {
		self.focus
	}

	pub fn node_opacity(&self, idx: DefaultNodeIdx) -> f64 {
		match self.focus {
			Some(f) if f != idx => NODE_DIMMED,
			_ => 1.0,
		}
	}

	pub fn edge_opacity(&self, edge: &EdgeInfo) -> f64 {
		match self.focus {
			None => EDGE_RESTING,
			Some(f) if edge.source == f || edge.target == f => 1.0,
			Some(_) => EDGE_DIMMED,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::data::sample_snapshot;
	use crate::network::build_graph;

	const W: f64 = 800.0;
	const H: f64 = 600.0;

	fn layout() -> LayoutState {
		LayoutState::new(&build_graph(&sample_snapshot()), W, H, LayoutConfig::default())
			.expect("sample graph lays out")
	}

	fn screen_of(state: &LayoutState, idx: DefaultNodeIdx) -> (f64, f64) {
		let (x, y) = state.position(idx).expect("node exists");
		state.transform.graph_to_screen(x, y)
	}

	#[test]
	fn empty_graph_or_area_is_refused() {
		let config = LayoutConfig::default();
		assert_eq!(
			LayoutState::new(&Graph::default(), W, H, config.clone()).err(),
			Some(LayoutError::Empty)
		);
		let graph = build_graph(&sample_snapshot());
		assert_eq!(
			LayoutState::new(&graph, 0.0, H, config).err(),
			Some(LayoutError::ZeroArea {
				width: 0.0,
				height: H
			})
		);
	}

	#[test]
	fn every_node_and_edge_is_placed() {
		let graph = build_graph(&sample_snapshot());
		let state = layout();
		assert_eq!(state.positions().len(), graph.nodes.len());
		assert_eq!(state.edges().len(), graph.edges.len());
		assert!(graph.nodes.iter().all(|n| state.idx_of(&n.id).is_some()));
		assert_eq!(state.transform, ViewTransform::centered(W, H));
	}

	#[test]
	fn ticking_cools_and_stays_finite() {
		let mut state = layout();
		let mut ticks = 0;
		while state.tick(0.016) {
			ticks += 1;
			assert!(ticks < 1000, "layout never settled");
		}
		assert!(state.is_settled());
		assert!(state.alpha() < LayoutConfig::default().alpha_min);
		for (x, y) in state.positions().into_values() {
			assert!(x.is_finite() && y.is_finite());
		}
		assert!(!state.tick(0.016));
	}

	#[test]
	fn drag_pins_then_release_frees_in_place() {
		let mut state = layout();
		let idx = state.idx_of("a1").expect("a1");
		let (sx, sy) = screen_of(&state, idx);
		state.pointer_down(sx, sy);
		state.pointer_move(100.0 + W / 2.0, 200.0 + H / 2.0);

		let (px, py) = state.pinned(idx).expect("pinned while dragged");
		assert!((px - 100.0).abs() < 1e-3 && (py - 200.0).abs() < 1e-3);

		for _ in 0..20 {
			state.tick(0.016);
		}
		let (x, y) = state.position(idx).expect("a1");
		assert!((x - 100.0).abs() < 1e-3 && (y - 200.0).abs() < 1e-3);

		assert_eq!(state.pointer_up(), None);
		assert_eq!(state.pinned(idx), None);
		let (x, y) = state.position(idx).expect("a1");
		assert!((x - 100.0).abs() < 1e-3 && (y - 200.0).abs() < 1e-3);
	}

	#[test]
	fn drag_reheats_a_settled_layout() {
		let mut state = layout();
		while state.tick(0.016) {}
		let idx = state.idx_of("d1").expect("d1");
		let (sx, sy) = screen_of(&state, idx);
		state.pointer_down(sx, sy);
		state.pointer_move(sx + 30.0, sy);
		assert!(!state.is_settled());
		assert!(state.tick(0.016));
		state.pointer_up();
		while state.tick(0.016) {}
		assert!(state.is_settled());
	}

	#[test]
	fn small_movement_is_still_a_click() {
		let mut state = layout();
		let idx = state.idx_of("c1").expect("c1");
		let (sx, sy) = screen_of(&state, idx);
		let before = state.position(idx);
		state.pointer_down(sx, sy);
		state.pointer_move(sx + 1.0, sy + 1.0);
		assert_eq!(state.pointer_up(), Some(ClickTarget::Node("c1".into())));
		assert_eq!(state.position(idx), before);
		assert_eq!(state.pinned(idx), None);

		state.pointer_down(1.0, 1.0);
		assert_eq!(state.pointer_up(), Some(ClickTarget::Background));
		assert_eq!(ClickTarget::Background.into_event(), None);
	}

	#[test]
	fn background_drag_pans_without_moving_nodes() {
		let mut state = layout();
		let before = state.positions();
		state.pointer_down(1.0, 1.0);
		state.pointer_move(51.0, 21.0);
		assert_eq!(state.pointer_up(), None);
		assert_eq!(state.transform.x, W / 2.0 + 50.0);
		assert_eq!(state.transform.y, H / 2.0 + 20.0);
		assert_eq!(state.positions(), before);
	}

	#[test]
	fn zoom_changes_view_only() {
		let mut state = layout();
		let before = state.positions();
		for _ in 0..50 {
			state.zoom(W / 2.0, H / 2.0, -1.0);
		}
		assert_eq!(state.transform.k, LayoutConfig::default().zoom_max);
		assert_eq!(state.positions(), before);
	}

	#[test]
	fn focus_dims_everything_else() {
		let mut state = layout();
		let (a1, a2) = (state.idx_of("a1").expect("a1"), state.idx_of("a2").expect("a2"));
		assert_eq!(state.node_opacity(a2), 1.0);
		assert!(state.edges().iter().all(|e| state.edge_opacity(e) == EDGE_RESTING));

		state.set_focus(Some("a1"));
		assert_eq!(state.focus(), Some(a1));
		assert_eq!(state.node_opacity(a1), 1.0);
		assert_eq!(state.node_opacity(a2), NODE_DIMMED);
		for edge in state.edges() {
			let expected = if edge.source == a1 || edge.target == a1 {
				1.0
			} else {
				EDGE_DIMMED
			};
			assert_eq!(state.edge_opacity(edge), expected);
		}

		state.set_focus(None);
		assert_eq!(state.focus(), None);
		for idx in state.positions().into_keys() {
			assert_eq!(state.node_opacity(idx), 1.0);
		}
		for edge in state.edges() {
			assert_eq!(state.edge_opacity(edge), EDGE_RESTING);
		}

		state.set_focus(Some("a1"));
		state.set_focus(Some("missing"));
		assert_eq!(state.focus(), None);
		assert_eq!(state.node_opacity(a2), 1.0);
	}

	#[test]
	fn edges_keep_their_relation() {
		let graph = build_graph(&sample_snapshot());
		let state = layout();
		for edge in state.edges() {
			let (source, target) = (
				state.node_id(edge.source).expect("source"),
				state.node_id(edge.target).expect("target"),
			);
			let original = graph
				.edges
				.iter()
				.find(|e| e.source == source && e.target == target)
				.expect("edge from the graph");
			assert_eq!(edge.kind, original.kind);
		}
	}

	#[test]
	fn hover_tracks_neighbors() {
		let mut state = layout();
		let d1 = state.idx_of("d1").expect("d1");
		let (sx, sy) = screen_of(&state, d1);
		state.pointer_move(sx, sy);
		assert!(state.is_hovered(d1));
		let expected: HashSet<_> = ["a1", "a2"]
			.iter()
			.filter_map(|id| state.idx_of(id))
			.collect();
		assert_eq!(state.hover.neighbors, expected);
		state.pointer_leave();
		assert_eq!(state.hover.node, None);
	}
}

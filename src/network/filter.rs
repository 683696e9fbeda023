//! Cascading graph filters.
//!
//! [`FilterState`] holds every active filter dimension and is only changed
//! through its own methods. [`compute_visible_graph`] is a pure function of the
//! full graph and that state; running it twice with the same state is a no-op.

use std::collections::{HashMap, HashSet};

use log::debug;

use super::model::{Graph, GraphEdge, GraphNode, NodeKind};

/// One of the four multi-select id filters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Facet {
	Department,
	Company,
	Skill,
	Event,
}

impl Facet {
	pub const ALL: [Facet; 4] = [Facet::Department, Facet::Company, Facet::Skill, Facet::Event];

	pub fn for_kind(kind: NodeKind) -> Option<Facet> {
		match kind {
			NodeKind::Alumni => None,
			NodeKind::Department => Some(Facet::Department),
			NodeKind::Company => Some(Facet::Company),
			NodeKind::Skill => Some(Facet::Skill),
			NodeKind::Event => Some(Facet::Event),
		}
	}

	pub fn title(self) -> &'static str {
		match self {
			Facet::Department => "Departments",
			Facet::Company => "Companies",
			Facet::Skill => "Skills",
			Facet::Event => "Events",
		}
	}
}

/// Inclusive graduation-year span.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct YearRange {
	pub from: u16,
	pub to: u16,
}

impl YearRange {
	pub fn new(a: u16, b: u16) -> Self {
		Self {
			from: a.min(b),
			to: a.max(b),
		}
	}

	pub fn contains(&self, year: u16) -> bool {
		(self.from..=self.to).contains(&year)
	}
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterState {
	/// Coarse "show only this kind" mode.
	pub category: Option<NodeKind>,
	pub departments: HashSet<String>,
	pub companies: HashSet<String>,
	pub skills: HashSet<String>,
	pub events: HashSet<String>,
	pub search: String,
	/// `None` is the full span.
	pub graduation_years: Option<YearRange>,
	/// Node highlighted by a graph click. Dims, never hides.
	pub focused: Option<String>,
}

impl FilterState {
	pub fn selection(&self, facet: Facet) -> &HashSet<String> {
		match facet {
			Facet::Department => &self.departments,
			Facet::Company => &self.companies,
			Facet::Skill => &self.skills,
			Facet::Event => &self.events,
		}
	}

	fn selection_mut(&mut self, facet: Facet) -> &mut HashSet<String> {
		match facet {
			Facet::Department => &mut self.departments,
			Facet::Company => &mut self.companies,
			Facet::Skill => &mut self.skills,
			Facet::Event => &mut self.events,
		}
	}

	pub fn is_selected(&self, facet: Facet, id: &str) -> bool {
		self.selection(facet).contains(id)
	}

	/// Add the id if absent, remove it if present.
	pub fn toggle(&mut self, facet: Facet, id: &str) {
		let set = self.selection_mut(facet);
		if !set.remove(id) {
			set.insert(id.to_owned());
		}
	}

	pub fn has_selection(&self) -> bool {
		Facet::ALL.iter().any(|&f| !self.selection(f).is_empty())
	}

	/// Reset the id selections, the search term and the graduation span.
	pub fn clear(&mut self) {
		for facet in Facet::ALL {
			self.selection_mut(facet).clear();
		}
		self.search.clear();
		self.graduation_years = None;
	}

	pub fn set_search(&mut self, term: impl Into<String>) {
		self.search = term.into();
	}

	pub fn set_category(&mut self, category: Option<NodeKind>) {
		self.category = category;
	}

	pub fn set_graduation_years(&mut self, range: Option<YearRange>) {
		self.graduation_years = range;
	}

	/// Clicking the focused node clears focus; clicking another node moves it.
	pub fn toggle_focus(&mut self, id: &str) {
		if self.focused.as_deref() == Some(id) {
			self.focused = None;
		} else {
			self.focused = Some(id.to_owned());
		}
	}

	pub fn clear_focus(&mut self) {
		self.focused = None;
	}

	/// Apply a click reported by the graph: a node id, or `None` for the background.
	pub fn focus_click(&mut self, clicked: Option<String>) {
		match clicked {
			Some(id) => self.toggle_focus(&id),
			None => self.clear_focus(),
		}
	}

	/// Whether any filter that changes the visible set is active.
	pub fn is_filtering(&self) -> bool {
		self.category.is_some()
			|| self.has_selection()
			|| !self.search.trim().is_empty()
			|| self.graduation_years.is_some()
	}

	fn directly_selects(&self, node: &GraphNode) -> bool {
		Facet::for_kind(node.kind).is_some_and(|f| self.is_selected(f, &node.id))
	}
}

/// Compute the subgraph to display.
///
/// Stages run in a fixed order: graduation span, category, search, id
/// selection with one-hop expansion, then dangling-edge removal. An empty
/// result is a valid outcome.
pub fn compute_visible_graph(graph: &Graph, state: &FilterState) -> Graph {
	let mut nodes: Vec<&GraphNode> = graph.nodes.iter().collect();
	let mut edges: Vec<&GraphEdge> = graph.edges.iter().collect();

	if let Some(range) = state.graduation_years {
		nodes.retain(|n| {
			n.kind != NodeKind::Alumni || n.graduation_year.is_none_or(|y| range.contains(y))
		});
		debug!("graduation {}-{}: {} nodes", range.from, range.to, nodes.len());
	}

	if let Some(kind) = state.category {
		nodes.retain(|n| n.kind == kind);
		match kind.relation() {
			Some(relation) => edges.retain(|e| e.kind == relation),
			None => edges.clear(),
		}
		debug!("category {kind}: {} nodes, {} edges", nodes.len(), edges.len());
	}

	let term = state.search.trim().to_lowercase();
	if !term.is_empty() {
		let labels: HashMap<&str, String> = nodes
			.iter()
			.copied()
			.map(|n| (n.id.as_str(), n.label.to_lowercase()))
			.collect();
		let matches = |id: &str| labels.get(id).is_some_and(|label| label.contains(&term));

		let mut keep: HashSet<&str> = nodes
			.iter()
			.copied()
			.map(|n| n.id.as_str())
			.filter(|id| matches(*id))
			.collect();
		edges.retain(|e| matches(e.source.as_str()) || matches(e.target.as_str()));
		for &edge in &edges {
			for id in [edge.source.as_str(), edge.target.as_str()] {
				if labels.contains_key(id) {
					keep.insert(id);
				}
			}
		}
		nodes.retain(|n| keep.contains(n.id.as_str()));
		debug!("search '{term}': {} nodes, {} edges", nodes.len(), edges.len());
	}

	if state.has_selection() {
		let direct: HashSet<&str> = nodes
			.iter()
			.copied()
			.filter(|n| state.directly_selects(n))
			.map(|n| n.id.as_str())
			.collect();
		let mut keep = direct.clone();
		for &edge in &edges {
			if direct.contains(edge.source.as_str()) {
				keep.insert(edge.target.as_str());
			}
			if direct.contains(edge.target.as_str()) {
				keep.insert(edge.source.as_str());
			}
		}
		nodes.retain(|n| keep.contains(n.id.as_str()));
		edges.retain(|e| keep.contains(e.source.as_str()) && keep.contains(e.target.as_str()));
		debug!("selection: {} nodes, {} edges", nodes.len(), edges.len());
	}

	let mut visible = Graph {
		nodes: nodes.into_iter().cloned().collect(),
		edges: edges.into_iter().cloned().collect(),
	};
	let dropped = visible.drop_dangling_edges();
	if dropped > 0 {
		debug!("dropped {dropped} dangling edges");
	}
	visible
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::data::sample_snapshot;
	use crate::network::{RelationKind, build_graph};

	fn sample() -> Graph {
		build_graph(&sample_snapshot())
	}

	fn ids(graph: &Graph) -> Vec<&str> {
		let mut ids: Vec<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
		ids.sort_unstable();
		ids
	}

	fn edge_pairs(graph: &Graph) -> Vec<(&str, &str)> {
		let mut pairs: Vec<_> = graph
			.edges
			.iter()
			.map(|e| (e.source.as_str(), e.target.as_str()))
			.collect();
		pairs.sort_unstable();
		pairs
	}

	#[test]
	fn empty_state_is_identity() {
		let graph = sample();
		assert_eq!(compute_visible_graph(&graph, &FilterState::default()), graph);
	}

	#[test]
	fn department_selection_keeps_its_students() {
		let mut state = FilterState::default();
		state.toggle(Facet::Department, "d1");
		let visible = compute_visible_graph(&sample(), &state);

		assert_eq!(ids(&visible), vec!["a1", "a2", "d1"]);
		assert_eq!(edge_pairs(&visible), vec![("a1", "d1"), ("a2", "d1")]);
		assert!(visible.edges.iter().all(|e| e.kind == RelationKind::StudiedIn));
	}

	#[test]
	fn company_selection_expands_exactly_one_hop() {
		let mut state = FilterState::default();
		state.toggle(Facet::Company, "c1");
		let visible = compute_visible_graph(&sample(), &state);

		// a1 and a4 work at c1; their departments and skills are two hops away.
		assert_eq!(ids(&visible), vec!["a1", "a4", "c1"]);
		assert_eq!(edge_pairs(&visible), vec![("a1", "c1"), ("a4", "c1")]);
	}

	#[test]
	fn selections_across_facets_union() {
		let mut state = FilterState::default();
		state.toggle(Facet::Company, "c5");
		state.toggle(Facet::Skill, "s3");
		let visible = compute_visible_graph(&sample(), &state);
		assert_eq!(ids(&visible), vec!["a1", "a4", "a6", "c5", "s3"]);
	}

	#[test]
	fn search_is_case_insensitive_and_keeps_edge_endpoints() {
		let mut state = FilterState::default();
		state.set_search("  GOOGLE ");
		let visible = compute_visible_graph(&sample(), &state);
		assert_eq!(ids(&visible), vec!["a1", "a4", "c1"]);
		assert_eq!(edge_pairs(&visible), vec![("a1", "c1"), ("a4", "c1")]);
	}

	#[test]
	fn search_without_matches_is_empty() {
		let mut state = FilterState::default();
		state.set_search("zzz-no-such-label");
		let visible = compute_visible_graph(&sample(), &state);
		assert!(visible.is_empty());
		assert!(visible.edges.is_empty());
	}

	#[test]
	fn alumni_category_has_no_edges() {
		let mut state = FilterState::default();
		state.set_category(Some(NodeKind::Alumni));
		let visible = compute_visible_graph(&sample(), &state);
		assert_eq!(visible.nodes.len(), 6);
		assert!(visible.edges.is_empty());
	}

	#[test]
	fn entity_category_drops_person_endpoints() {
		let mut state = FilterState::default();
		state.set_category(Some(NodeKind::Company));
		let visible = compute_visible_graph(&sample(), &state);
		assert_eq!(ids(&visible), vec!["c1", "c2", "c3", "c4", "c5"]);
		// WORKS_AT edges survive the category stage but lose their person end.
		assert!(visible.edges.is_empty());
	}

	#[test]
	fn graduation_span_only_affects_alumni() {
		let mut state = FilterState::default();
		state.set_graduation_years(Some(YearRange::new(2020, 2018)));
		let visible = compute_visible_graph(&sample(), &state);
		let alumni: Vec<&str> = visible
			.nodes
			.iter()
			.filter(|n| n.kind == NodeKind::Alumni)
			.map(|n| n.id.as_str())
			.collect();
		assert_eq!(alumni, vec!["a1", "a2", "a3", "a6"]);
		assert_eq!(visible.nodes.len(), 4 + 27);
		assert!(visible.edges.iter().all(|e| e.source != "a4" && e.source != "a5"));
	}

	#[test]
	fn filtering_is_idempotent() {
		let graph = sample();
		let mut states = vec![FilterState::default()];

		let mut s = FilterState::default();
		s.set_search("sarah");
		s.toggle(Facet::Department, "d1");
		states.push(s);

		let mut s = FilterState::default();
		s.set_search("o");
		s.toggle(Facet::Skill, "s2");
		s.toggle(Facet::Event, "e4");
		states.push(s);

		let mut s = FilterState::default();
		s.set_category(Some(NodeKind::Skill));
		s.set_search("a");
		states.push(s);

		for state in &states {
			let once = compute_visible_graph(&graph, state);
			let twice = compute_visible_graph(&once, state);
			assert_eq!(once, twice, "{state:?}");
		}
	}

	#[test]
	fn dangling_edges_are_dropped() {
		let mut graph = sample();
		graph.nodes.retain(|n| n.id != "d4");
		let visible = compute_visible_graph(&graph, &FilterState::default());
		assert!(visible.edges.iter().all(|e| e.target != "d4"));
		assert_eq!(visible.edges.len(), graph.edges.len() - 1);
	}

	#[test]
	fn toggle_twice_restores_selection() {
		let mut state = FilterState::default();
		state.toggle(Facet::Skill, "s1");
		let original = state.clone();
		state.toggle(Facet::Skill, "s9");
		state.toggle(Facet::Skill, "s9");
		assert_eq!(state, original);
		state.toggle(Facet::Skill, "s1");
		assert!(!state.has_selection());
	}

	#[test]
	fn clear_resets_selection_search_and_years() {
		let mut state = FilterState::default();
		state.toggle(Facet::Event, "e1");
		state.set_search("x");
		state.set_graduation_years(Some(YearRange::new(2000, 2010)));
		state.set_category(Some(NodeKind::Event));
		state.toggle_focus("e1");
		state.clear();

		assert!(!state.has_selection());
		assert!(state.search.is_empty());
		assert_eq!(state.graduation_years, None);
		assert_eq!(state.category, Some(NodeKind::Event));
		assert_eq!(state.focused.as_deref(), Some("e1"));
	}

	#[test]
	fn clicking_focused_node_clears_focus() {
		let mut state = FilterState::default();
		state.focus_click(Some("a1".into()));
		assert_eq!(state.focused.as_deref(), Some("a1"));
		state.focus_click(Some("c1".into()));
		assert_eq!(state.focused.as_deref(), Some("c1"));
		state.focus_click(Some("c1".into()));
		assert_eq!(state.focused, None);
		state.focus_click(Some("a1".into()));
		state.focus_click(None);
		assert_eq!(state.focused, None);
	}
}

use std::collections::HashSet;

use log::{debug, warn};

use super::model::{EntitySnapshot, Graph, GraphEdge, GraphNode, NodeKind, RelationKind};

/// Derive the node/edge graph from an entity snapshot.
///
/// People come first, then departments, companies, skills and events, each in
/// input order. Edge targets are not checked here; the filter drops dangling
/// edges before anything is laid out.
pub fn build_graph(snapshot: &EntitySnapshot) -> Graph {
	let mut graph = Graph::default();
	let mut seen = HashSet::new();
	let mut push = |graph: &mut Graph, node: GraphNode| {
		if seen.insert(node.id.clone()) {
			graph.nodes.push(node);
		} else {
			warn!("duplicate entity id '{}' ({}), keeping the first", node.id, node.kind);
		}
	};

	for person in &snapshot.people {
		let mut node = GraphNode::new(&person.id, &person.name, NodeKind::Alumni);
		node.graduation_year = Some(person.graduation_year);
		push(&mut graph, node);

		graph.edges.push(GraphEdge::new(
			&person.id,
			&person.department,
			RelationKind::StudiedIn,
		));
		graph.edges.push(GraphEdge::new(
			&person.id,
			&person.company,
			RelationKind::WorksAt,
		));
		graph.edges.extend(
			person
				.skills
				.iter()
				.map(|skill| GraphEdge::new(&person.id, skill, RelationKind::HasSkill)),
		);
		graph.edges.extend(
			person
				.events
				.iter()
				.map(|event| GraphEdge::new(&person.id, event, RelationKind::Attended)),
		);
	}

	for d in &snapshot.departments {
		push(&mut graph, GraphNode::new(&d.id, &d.name, NodeKind::Department));
	}
	for c in &snapshot.companies {
		push(&mut graph, GraphNode::new(&c.id, &c.name, NodeKind::Company));
	}
	for s in &snapshot.skills {
		push(&mut graph, GraphNode::new(&s.id, &s.name, NodeKind::Skill));
	}
	for e in &snapshot.events {
		push(&mut graph, GraphNode::new(&e.id, &e.name, NodeKind::Event));
	}

	debug!(
		"built graph: {} nodes, {} edges",
		graph.nodes.len(),
		graph.edges.len()
	);
	graph
}

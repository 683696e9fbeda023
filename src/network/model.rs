//! Entity records and the node/edge graph derived from them.

use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};

/// A graduate in the directory.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
	pub id: String,
	pub name: String,
	#[serde(default)]
	pub avatar: String,
	pub department: String,
	pub company: String,
	#[serde(default)]
	pub job_title: String,
	#[serde(default)]
	pub skills: Vec<String>,
	pub graduation_year: u16,
	#[serde(default)]
	pub email: String,
	#[serde(default)]
	pub events: Vec<String>,
	#[serde(default)]
	pub bio: Option<String>,
	#[serde(default)]
	pub role: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Department {
	pub id: String,
	pub name: String,
	#[serde(default)]
	pub faculty: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Company {
	pub id: String,
	pub name: String,
	#[serde(default)]
	pub industry: String,
	#[serde(default)]
	pub location: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Skill {
	pub id: String,
	pub name: String,
	#[serde(default)]
	pub category: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Event {
	pub id: String,
	pub name: String,
	#[serde(default)]
	pub date: String,
	#[serde(default)]
	pub location: String,
	#[serde(default, rename = "type")]
	pub kind: String,
}

/// Read-only view of every entity list, as handed over by a data source.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EntitySnapshot {
	pub people: Vec<Person>,
	pub departments: Vec<Department>,
	pub companies: Vec<Company>,
	pub skills: Vec<Skill>,
	pub events: Vec<Event>,
}

impl EntitySnapshot {
	pub fn person(&self, id: &str) -> Option<&Person> {
		self.people.iter().find(|p| p.id == id)
	}

	pub fn department_name(&self, id: &str) -> Option<&str> {
		self.departments
			.iter()
			.find(|d| d.id == id)
			.map(|d| d.name.as_str())
	}

	pub fn company_name(&self, id: &str) -> Option<&str> {
		self.companies
			.iter()
			.find(|c| c.id == id)
			.map(|c| c.name.as_str())
	}

	pub fn skill_name(&self, id: &str) -> Option<&str> {
		self.skills
			.iter()
			.find(|s| s.id == id)
			.map(|s| s.name.as_str())
	}
}

/// Category of a graph node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
	Alumni,
	Department,
	Company,
	Skill,
	Event,
}

impl NodeKind {
	pub const ALL: [NodeKind; 5] = [
		NodeKind::Alumni,
		NodeKind::Department,
		NodeKind::Company,
		NodeKind::Skill,
		NodeKind::Event,
	];

	/// Display weight; doubles as the node radius and collision size.
	pub fn weight(self) -> f64 {
		match self {
			NodeKind::Alumni => 10.0,
			NodeKind::Department | NodeKind::Company => 8.0,
			NodeKind::Skill => 5.0,
			NodeKind::Event => 7.0,
		}
	}

	/// The relation that links a person to a node of this kind.
	pub fn relation(self) -> Option<RelationKind> {
		match self {
			NodeKind::Alumni => None,
			NodeKind::Department => Some(RelationKind::StudiedIn),
			NodeKind::Company => Some(RelationKind::WorksAt),
			NodeKind::Skill => Some(RelationKind::HasSkill),
			NodeKind::Event => Some(RelationKind::Attended),
		}
	}

	pub fn as_str(self) -> &'static str {
		match self {
			NodeKind::Alumni => "alumni",
			NodeKind::Department => "department",
			NodeKind::Company => "company",
			NodeKind::Skill => "skill",
			NodeKind::Event => "event",
		}
	}
}

impl fmt::Display for NodeKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Relation carried by an edge, always from a person to another entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RelationKind {
	StudiedIn,
	WorksAt,
	HasSkill,
	Attended,
}

impl RelationKind {
	pub fn as_str(self) -> &'static str {
		match self {
			RelationKind::StudiedIn => "STUDIED_IN",
			RelationKind::WorksAt => "WORKS_AT",
			RelationKind::HasSkill => "HAS_SKILL",
			RelationKind::Attended => "ATTENDED",
		}
	}

	/// Path segment used by the backend's `/alumni/<segment>/<id>` routes.
	pub fn route_segment(self) -> &'static str {
		match self {
			RelationKind::StudiedIn => "department",
			RelationKind::WorksAt => "company",
			RelationKind::HasSkill => "skill",
			RelationKind::Attended => "event",
		}
	}
}

impl fmt::Display for RelationKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct GraphNode {
	pub id: String,
	pub label: String,
	pub kind: NodeKind,
	pub weight: f64,
	/// Only known for alumni nodes.
	pub graduation_year: Option<u16>,
}

impl GraphNode {
	pub fn new(id: impl Into<String>, label: impl Into<String>, kind: NodeKind) -> Self {
		Self {
			id: id.into(),
			label: label.into(),
			kind,
			weight: kind.weight(),
			graduation_year: None,
		}
	}
}

/// Directed edge stored as a plain id pair; node lookup happens at the consumer.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphEdge {
	pub source: String,
	pub target: String,
	pub kind: RelationKind,
	pub label: String,
}

impl GraphEdge {
	pub fn new(source: impl Into<String>, target: impl Into<String>, kind: RelationKind) -> Self {
		Self {
			source: source.into(),
			target: target.into(),
			kind,
			label: kind.as_str().to_owned(),
		}
	}
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Graph {
	pub nodes: Vec<GraphNode>,
	pub edges: Vec<GraphEdge>,
}

impl Graph {
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	pub fn node(&self, id: &str) -> Option<&GraphNode> {
		self.nodes.iter().find(|n| n.id == id)
	}

	#[cfg(test)]
	pub fn node_ids(&self) -> HashSet<&str> {
		self.nodes.iter().map(|n| n.id.as_str()).collect()
	}

	/// Copy graduation years onto alumni nodes that lack one, matching people by
	/// id. Returns how many nodes were filled.
	pub fn fill_graduation_years(&mut self, people: &[Person]) -> usize {
		let years: HashMap<&str, u16> = people
			.iter()
			.map(|p| (p.id.as_str(), p.graduation_year))
			.collect();
		let mut filled = 0;
		for node in &mut self.nodes {
			if node.kind != NodeKind::Alumni || node.graduation_year.is_some() {
				continue;
			}
			if let Some(&year) = years.get(node.id.as_str()) {
				node.graduation_year = Some(year);
				filled += 1;
			}
		}
		filled
	}

	/// Drop edges whose endpoints are not both present. Returns how many were dropped.
	pub fn drop_dangling_edges(&mut self) -> usize {
		let ids: HashSet<String> = self.nodes.iter().map(|n| n.id.clone()).collect();
		let before = self.edges.len();
		self.edges
			.retain(|e| ids.contains(&e.source) && ids.contains(&e.target));
		before - self.edges.len()
	}
}

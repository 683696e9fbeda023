//! HTTP client for the directory backend's REST API.

use async_trait::async_trait;
use log::debug;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::source::EntitySource;
use crate::error::{AuthError, DataError};
use crate::network::{
	Company, Department, Event, Graph, GraphEdge, GraphNode, NodeKind, Person, RelationKind, Skill,
};

/// Graph as served by `/graph`: `links` instead of edges, `type` and `size` on each node.
#[derive(Debug, Deserialize)]
struct WireGraph {
	#[serde(default)]
	nodes: Vec<WireNode>,
	#[serde(default)]
	links: Vec<WireLink>,
}

#[derive(Debug, Deserialize)]
struct WireNode {
	id: String,
	#[serde(default)]
	label: String,
	#[serde(rename = "type")]
	kind: NodeKind,
	size: Option<f64>,
	#[serde(rename = "graduationYear")]
	graduation_year: Option<u16>,
}

#[derive(Debug, Deserialize)]
struct WireLink {
	source: String,
	target: String,
	#[serde(rename = "type")]
	kind: RelationKind,
	label: Option<String>,
}

impl From<WireGraph> for Graph {
	fn from(wire: WireGraph) -> Self {
		let nodes = wire
			.nodes
			.into_iter()
			.map(|n| {
				let mut node = GraphNode::new(n.id, n.label, n.kind);
				node.weight = n.size.unwrap_or(node.weight);
				node.graduation_year = n.graduation_year;
				node
			})
			.collect();
		let edges = wire
			.links
			.into_iter()
			.map(|l| {
				let mut edge = GraphEdge::new(l.source, l.target, l.kind);
				if let Some(label) = l.label {
					edge.label = label;
				}
				edge
			})
			.collect();
		Graph { nodes, edges }
	}
}

#[derive(Serialize)]
struct LoginRequest<'a> {
	email: &'a str,
	password: &'a str,
}

#[derive(Deserialize)]
struct LoginResponse {
	user: Person,
}

/// Reply from `/health`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct HealthStatus {
	pub status: String,
	#[serde(default)]
	pub message: String,
}

/// Entity source backed by the REST API.
#[derive(Clone, Debug)]
pub struct RemoteSource {
	base_url: String,
	client: Client,
}

impl RemoteSource {
	pub fn new(base_url: &str) -> Self {
		Self {
			base_url: base_url.trim_end_matches('/').to_string(),
			client: Client::new(),
		}
	}

	fn url(&self, path: &str) -> String {
		format!("{}/{}", self.base_url, path.trim_start_matches('/'))
	}

	async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, DataError> {
		let url = self.url(path);
		debug!("GET {url}");
		let response = self
			.client
			.get(&url)
			.send()
			.await
			.map_err(|source| DataError::Http {
				url: url.clone(),
				source,
			})?;
		decode(url, response).await
	}

	/// Ping the backend. Never fails; an unreachable server reports `status: "error"`.
	pub async fn health(&self) -> HealthStatus {
		self.get_json("health").await.unwrap_or_else(|err| {
			log::warn!("health check failed: {err}");
			HealthStatus {
				status: "error".into(),
				message: "Could not connect to backend".into(),
			}
		})
	}
}

/// Decode a JSON body, turning non-2xx replies into [`DataError::Status`]
/// with the server's `error` message when it sent one.
async fn decode<T: DeserializeOwned>(url: String, response: Response) -> Result<T, DataError> {
	let status = response.status();
	if status.is_success() {
		return response
			.json()
			.await
			.map_err(|source| DataError::Decode { url, source });
	}
	let body: serde_json::Value = response.json().await.unwrap_or_default();
	Err(DataError::Status {
		url,
		status: status.as_u16(),
		message: error_message(&body),
	})
}

fn error_message(body: &serde_json::Value) -> String {
	body.get("error")
		.and_then(|v| v.as_str())
		.unwrap_or("Unknown error")
		.to_string()
}

#[async_trait(?Send)]
impl EntitySource for RemoteSource {
	async fn list_people(&self) -> Result<Vec<Person>, DataError> {
		self.get_json("alumni").await
	}

	async fn list_departments(&self) -> Result<Vec<Department>, DataError> {
		self.get_json("departments").await
	}

	async fn list_companies(&self) -> Result<Vec<Company>, DataError> {
		self.get_json("companies").await
	}

	async fn list_skills(&self) -> Result<Vec<Skill>, DataError> {
		self.get_json("skills").await
	}

	async fn list_events(&self) -> Result<Vec<Event>, DataError> {
		self.get_json("events").await
	}

	async fn fetch_graph(&self) -> Result<Graph, DataError> {
		let wire: WireGraph = self.get_json("graph").await?;
		Ok(wire.into())
	}

	async fn find_people_by_relation(
		&self,
		relation: RelationKind,
		id: &str,
	) -> Result<Vec<Person>, DataError> {
		self.get_json(&format!("alumni/{}/{id}", relation.route_segment()))
			.await
	}

	async fn authenticate(&self, email: &str, password: &str) -> Result<Person, AuthError> {
		if email.trim().is_empty() || password.is_empty() {
			return Err(AuthError::MissingCredentials);
		}
		let url = self.url("login");
		let response = self
			.client
			.post(&url)
			.json(&LoginRequest {
				email: email.trim(),
				password,
			})
			.send()
			.await
			.map_err(|source| DataError::Http {
				url: url.clone(),
				source,
			})?;
		match decode::<LoginResponse>(url, response).await {
			Ok(reply) => Ok(reply.user),
			Err(DataError::Status { status: 401, .. }) => Err(AuthError::InvalidCredentials),
			Err(err) => Err(err.into()),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::data::sample_snapshot;
	use crate::network::{FilterState, YearRange, compute_visible_graph};

	#[test]
	fn wire_graph_maps_links_type_and_size() {
		let json = r#"{
			"nodes": [
				{ "id": "a1", "label": "Sarah Johnson", "type": "alumni", "size": 10 },
				{ "id": "c1", "label": "Google", "type": "company" }
			],
			"links": [
				{ "source": "a1", "target": "c1", "type": "WORKS_AT", "label": "WORKS_AT" },
				{ "source": "a1", "target": "d9", "type": "STUDIED_IN" }
			]
		}"#;
		let graph: Graph = serde_json::from_str::<WireGraph>(json).unwrap().into();

		assert_eq!(graph.nodes.len(), 2);
		assert_eq!(graph.nodes[0].kind, NodeKind::Alumni);
		assert_eq!(graph.nodes[0].weight, 10.0);
		assert_eq!(graph.nodes[1].weight, NodeKind::Company.weight());
		assert_eq!(graph.edges[0].kind, RelationKind::WorksAt);
		assert_eq!(graph.edges[1].label, "STUDIED_IN");
	}

	#[test]
	fn backend_graph_honours_graduation_range_once_joined() {
		let json = r#"{
			"nodes": [
				{ "id": "a1", "label": "Sarah Johnson", "type": "alumni", "size": 10 },
				{ "id": "d1", "label": "Computer Science", "type": "department", "size": 8 }
			],
			"links": [{ "source": "a1", "target": "d1", "type": "STUDIED_IN" }]
		}"#;
		let mut graph: Graph = serde_json::from_str::<WireGraph>(json).unwrap().into();
		assert_eq!(graph.nodes[0].graduation_year, None);

		let people = sample_snapshot().people;
		assert_eq!(graph.fill_graduation_years(&people), 1);
		assert_eq!(graph.nodes[0].graduation_year, Some(2018));
		assert_eq!(graph.nodes[1].graduation_year, None);

		let mut state = FilterState::default();
		state.set_graduation_years(Some(YearRange::new(1990, 1991)));
		let visible = compute_visible_graph(&graph, &state);
		assert!(visible.node("a1").is_none());
		assert!(visible.node("d1").is_some());
		assert!(visible.edges.is_empty());

		state.set_graduation_years(Some(YearRange::new(2017, 2019)));
		let visible = compute_visible_graph(&graph, &state);
		assert!(visible.node("a1").is_some());
		assert_eq!(visible.edges.len(), 1);
	}

	#[test]
	fn person_uses_camel_case_fields() {
		let json = r#"{
			"id": "a9", "name": "Ada", "department": "d1", "company": "c1",
			"jobTitle": "Engineer", "graduationYear": 2015, "skills": ["s1"]
		}"#;
		let person: Person = serde_json::from_str(json).unwrap();
		assert_eq!(person.job_title, "Engineer");
		assert_eq!(person.graduation_year, 2015);
		assert!(person.events.is_empty());
		assert_eq!(person.bio, None);
	}

	#[test]
	fn error_body_message() {
		let body = serde_json::json!({ "error": "Alumni not found" });
		assert_eq!(error_message(&body), "Alumni not found");
		assert_eq!(error_message(&serde_json::Value::Null), "Unknown error");
	}

	#[test]
	fn urls_join_cleanly() {
		let source = RemoteSource::new("http://localhost:5000/api/");
		assert_eq!(source.url("/alumni"), "http://localhost:5000/api/alumni");
		assert_eq!(
			source.url(&format!("alumni/{}/c1", RelationKind::WorksAt.route_segment())),
			"http://localhost:5000/api/alumni/company/c1"
		);
	}
}

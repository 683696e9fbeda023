//! Entity model, graph construction and filtering. Nothing in here touches the DOM.

mod builder;
mod filter;
mod model;
mod query;
mod roster;

pub use builder::build_graph;
pub use filter::{Facet, FilterState, YearRange, compute_visible_graph};
pub use model::{
	Company, Department, EntitySnapshot, Event, Graph, GraphEdge, GraphNode, NodeKind, Person,
	RelationKind, Skill,
};
pub use query::{common_events, common_skills, people_by_relation, people_for_focus};
pub use roster::filter_people;

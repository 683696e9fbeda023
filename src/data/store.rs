use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{debug, info, warn};

use super::fence::RequestFence;
use super::source::EntitySource;
use crate::network::{EntitySnapshot, Graph, Person, people_for_focus};

/// Reactive holder of the last successfully loaded directory.
///
/// Copyable handle; provided once through the context by the app root.
#[derive(Clone, Copy)]
pub struct DirectoryStore {
	source: StoredValue<Rc<dyn EntitySource>, LocalStorage>,
	fence: StoredValue<Rc<RequestFence>, LocalStorage>,
	selection_fence: StoredValue<Rc<RequestFence>, LocalStorage>,
	pub snapshot: RwSignal<EntitySnapshot>,
	pub graph: RwSignal<Graph>,
	pub loading: RwSignal<bool>,
	/// Last load failure, shown until dismissed or superseded.
	pub notice: RwSignal<Option<String>>,
	/// People behind the focused node.
	pub selected: RwSignal<Vec<Person>>,
}

impl DirectoryStore {
	pub fn new(source: Rc<dyn EntitySource>) -> Self {
		Self {
			source: StoredValue::new_local(source),
			fence: StoredValue::new_local(Rc::new(RequestFence::default())),
			selection_fence: StoredValue::new_local(Rc::new(RequestFence::default())),
			snapshot: RwSignal::new(EntitySnapshot::default()),
			graph: RwSignal::new(Graph::default()),
			loading: RwSignal::new(false),
			notice: RwSignal::new(None),
			selected: RwSignal::new(Vec::new()),
		}
	}

	pub fn source(&self) -> Rc<dyn EntitySource> {
		self.source.get_value()
	}

	/// Fetch the snapshot and graph again. A reload started later wins; the
	/// result of an older one is discarded. On failure the previous data stays.
	pub fn reload(&self) {
		let store = *self;
		let source = self.source.get_value();
		let fence = self.fence.get_value();
		let ticket = fence.issue();
		store.loading.set(true);
		info!("loading directory");

		spawn_local(async move {
			let result = async {
				let snapshot = source.load_snapshot().await?;
				let graph = source.fetch_graph().await?;
				Ok::<_, crate::error::DataError>((snapshot, graph))
			}
			.await;

			if !fence.is_current(ticket) {
				debug!("discarding stale directory load {ticket:?}");
				return;
			}
			match result {
				Ok((snapshot, mut graph)) => {
					let filled = graph.fill_graduation_years(&snapshot.people);
					if filled > 0 {
						debug!("filled graduation years on {filled} alumni nodes");
					}
					info!(
						"loaded {} people, {} nodes, {} edges",
						snapshot.people.len(),
						graph.nodes.len(),
						graph.edges.len()
					);
					store.snapshot.set(snapshot);
					store.graph.set(graph);
					store.notice.set(None);
				}
				Err(err) => {
					warn!("directory load failed: {err}");
					store
						.notice
						.set(Some(format!("Could not load the alumni directory: {err}")));
				}
			}
			store.loading.set(false);
		});
	}

	/// Resolve the people shown for `focus`. A person resolves locally; an
	/// entity is asked of the source, falling back to the local snapshot.
	pub fn load_selection(&self, focus: Option<String>) {
		let store = *self;
		let fence = self.selection_fence.get_value();
		let ticket = fence.issue();
		let Some(focus) = focus else {
			store.selected.set(Vec::new());
			return;
		};
		if let Some(person) = store.snapshot.with_untracked(|s| s.person(&focus).cloned()) {
			store.selected.set(vec![person]);
			return;
		}
		let Some(relation) = store
			.graph
			.with_untracked(|g| g.node(&focus).and_then(|n| n.kind.relation()))
		else {
			store.selected.set(Vec::new());
			return;
		};

		let source = self.source.get_value();
		spawn_local(async move {
			let result = source.find_people_by_relation(relation, &focus).await;
			if !fence.is_current(ticket) {
				debug!("discarding stale selection for {focus}");
				return;
			}
			let people = match result {
				Ok(people) => people,
				Err(err) => {
					warn!("relation lookup for {focus} failed: {err}");
					store.snapshot.with_untracked(|s| {
						people_for_focus(&s.people, &focus).into_iter().cloned().collect()
					})
				}
			};
			debug!("{} people related to {focus}", people.len());
			store.selected.set(people);
		});
	}
}

use leptos::prelude::*;

use crate::components::force_graph::ForceGraphCanvas;
use crate::components::{AlumniCard, CategorySidebar, FilterPanel, SearchBox};
use crate::data::DirectoryStore;
use crate::network::{
	EntitySnapshot, FilterState, common_events, common_skills, compute_visible_graph,
};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct Metrics {
	alumni: usize,
	companies: usize,
	departments: usize,
	events: usize,
}

impl Metrics {
	fn of(snapshot: &EntitySnapshot) -> Self {
		Self {
			alumni: snapshot.people.len(),
			companies: snapshot.companies.len(),
			departments: snapshot.departments.len(),
			events: snapshot.events.len(),
		}
	}
}

fn names_or_none(names: Vec<String>) -> String {
	if names.is_empty() {
		"none".to_owned()
	} else {
		names.join(", ")
	}
}

/// Dashboard: category sidebar, search, filters, graph, metrics and the
/// alumni behind the focused node.
#[component]
pub fn Home() -> impl IntoView {
	let store = expect_context::<DirectoryStore>();
	let filters = expect_context::<RwSignal<FilterState>>();

	let visible = Memo::new(move |_| {
		store
			.graph
			.with(|g| filters.with(|f| compute_visible_graph(g, f)))
	});
	let focused = Memo::new(move |_| filters.with(|f| f.focused.clone()));
	let metrics = Memo::new(move |_| store.snapshot.with(Metrics::of));
	let on_node_click =
		Callback::new(move |clicked: Option<String>| filters.update(|f| f.focus_click(clicked)));

	Effect::new(move |_| store.load_selection(focused.get()));

	let focus_title = move || {
		let id = focused.get()?;
		store
			.graph
			.with(|g| g.node(&id).map(|n| format!("{} ({})", n.label, n.kind)))
	};
	let shared = move || {
		store.selected.with(|people| {
			if people.len() < 2 {
				return None;
			}
			let ids: Vec<&str> = people.iter().map(|p| p.id.as_str()).collect();
			let (skills, events) = store.snapshot.with(|s| {
				(
					common_skills(s, &ids).into_iter().map(|k| k.name.clone()).collect(),
					common_events(s, &ids).into_iter().map(|e| e.name.clone()).collect(),
				)
			});
			Some(view! {
				<p class="shared">"Shared skills: " {names_or_none(skills)}</p>
				<p class="shared">"Shared events: " {names_or_none(events)}</p>
			})
		})
	};

	view! {
		<div class="dashboard">
			<CategorySidebar />
			<main class="dashboard-main">
				<div class="toolbar">
					<SearchBox />
					<Show when=move || store.loading.get()>
						<span class="loading">"Loading..."</span>
					</Show>
				</div>
				<div class="metrics">
					<div class="metric">
						<strong>{move || metrics.get().alumni}</strong>
						" Alumni"
					</div>
					<div class="metric">
						<strong>{move || metrics.get().companies}</strong>
						" Companies"
					</div>
					<div class="metric">
						<strong>{move || metrics.get().departments}</strong>
						" Departments"
					</div>
					<div class="metric">
						<strong>{move || metrics.get().events}</strong>
						" Events"
					</div>
				</div>
				<div class="graph-panel">
					<ForceGraphCanvas graph=visible focused=focused on_node_click=on_node_click />
					<p class="graph-hint">
						"Drag nodes to reposition. Scroll to zoom. Drag the background to pan. Click a node to focus it."
					</p>
				</div>
				<section class="selected-alumni">
					<h3>"Selected Alumni"</h3>
					<Show
						when=move || focused.with(Option::is_some)
						fallback=|| view! { <p class="hint">"Click a node to see related alumni."</p> }
					>
						<div class="focus-header">
							<span>{focus_title}</span>
							<button on:click=move |_| filters.update(FilterState::clear_focus)>
								"Clear focus"
							</button>
						</div>
						{shared}
						<div class="card-grid">
							{move || {
								store
									.selected
									.get()
									.into_iter()
									.map(|person| view! { <AlumniCard person=person /> })
									.collect_view()
							}}
						</div>
					</Show>
				</section>
			</main>
			<FilterPanel />
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::data::sample_snapshot;

	#[test]
	fn metrics_count_the_sample() {
		let metrics = Metrics::of(&sample_snapshot());
		assert_eq!(
			metrics,
			Metrics {
				alumni: 6,
				companies: 5,
				departments: 4,
				events: 5,
			}
		);
		assert_eq!(names_or_none(Vec::new()), "none");
	}
}

use leptos::prelude::*;

use crate::components::force_graph::ForceGraphCanvas;
use crate::components::{AlumniCard, FilterPanel, SearchBox};
use crate::data::DirectoryStore;
use crate::network::{FilterState, Person, compute_visible_graph, filter_people};

/// Searchable roster. Shares the dashboard's filters; the graph is opt-in.
#[component]
pub fn Directory() -> impl IntoView {
	let store = expect_context::<DirectoryStore>();
	let filters = expect_context::<RwSignal<FilterState>>();
	let show_graph = RwSignal::new(false);

	let roster = Memo::new(move |_| {
		store.snapshot.with(|s| {
			filters.with(|f| {
				filter_people(&s.people, f)
					.into_iter()
					.cloned()
					.collect::<Vec<Person>>()
			})
		})
	});
	let visible = Memo::new(move |_| {
		store
			.graph
			.with(|g| filters.with(|f| compute_visible_graph(g, f)))
	});
	let focused = Memo::new(move |_| filters.with(|f| f.focused.clone()));
	let on_node_click =
		Callback::new(move |clicked: Option<String>| filters.update(|f| f.focus_click(clicked)));

	view! {
		<div class="directory">
			<FilterPanel />
			<main class="directory-main">
				<div class="toolbar">
					<SearchBox placeholder="Search alumni by name..." />
					<span class="result-count">
						{move || format!("{} alumni", roster.with(Vec::len))}
					</span>
					<button on:click=move |_| show_graph.update(|v| *v = !*v)>
						{move || if show_graph.get() { "Hide network graph" } else { "Show network graph" }}
					</button>
				</div>
				<Show when=move || show_graph.get()>
					<ForceGraphCanvas
						graph=visible
						focused=focused
						on_node_click=on_node_click
						height=450.0
					/>
				</Show>
				<Show
					when=move || roster.with(|r| !r.is_empty())
					fallback=|| view! { <p class="hint">"No alumni match these filters."</p> }
				>
					<div class="card-grid">
						<For
							each=move || roster.get()
							key=|person| person.id.clone()
							children=|person| view! { <AlumniCard person=person /> }
						/>
					</div>
				</Show>
			</main>
		</div>
	}
}

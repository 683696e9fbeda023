use leptos::prelude::*;

use super::force_graph::kind_color;
use crate::network::{FilterState, NodeKind};

fn category_title(kind: NodeKind) -> &'static str {
	match kind {
		NodeKind::Alumni => "Alumni",
		NodeKind::Department => "Departments",
		NodeKind::Company => "Companies",
		NodeKind::Skill => "Skills",
		NodeKind::Event => "Events",
	}
}

/// "Show only this kind" switch. Doubles as the colour legend.
#[component]
pub fn CategorySidebar() -> impl IntoView {
	let filters = expect_context::<RwSignal<FilterState>>();
	let current = Memo::new(move |_| filters.with(|f| f.category));
	let choose = move |kind: Option<NodeKind>| filters.update(|f| f.set_category(kind));

	view! {
		<aside class="sidebar">
			<h3>"Categories"</h3>
			<ul class="category-list">
				<li class:active=move || current.get().is_none() on:click=move |_| choose(None)>
					"All"
				</li>
				{NodeKind::ALL
					.into_iter()
					.map(|kind| {
						view! {
							<li
								class:active=move || current.get() == Some(kind)
								on:click=move |_| choose(Some(kind))
							>
								<span
									class="swatch"
									style=format!("background: {};", kind_color(kind))
								></span>
								{category_title(kind)}
							</li>
						}
					})
					.collect_view()}
			</ul>
		</aside>
	}
}

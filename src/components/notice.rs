use leptos::prelude::*;

use crate::data::DirectoryStore;

/// Dismissible banner for the last load failure.
#[component]
pub fn Notice() -> impl IntoView {
	let store = expect_context::<DirectoryStore>();

	view! {
		<Show when=move || store.notice.with(Option::is_some)>
			<div class="notice" role="alert">
				<span>{move || store.notice.get().unwrap_or_default()}</span>
				<button class="notice-dismiss" on:click=move |_| store.notice.set(None)>
					"Dismiss"
				</button>
			</div>
		</Show>
	}
}

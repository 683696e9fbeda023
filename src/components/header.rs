use leptos::prelude::*;
use leptos_router::components::A;

use crate::session::SessionContext;

#[component]
pub fn Header() -> impl IntoView {
	let session = expect_context::<SessionContext>();

	view! {
		<header class="app-header">
			<span class="brand">"Alumni Network"</span>
			<nav>
				<A href="/">"Dashboard"</A>
				<A href="/directory">"Directory"</A>
				<Show
					when=move || session.is_signed_in()
					fallback=|| view! { <A href="/login">"Sign in"</A> }
				>
					<A href="/profile">"Profile"</A>
				</Show>
			</nav>
			<Show when=move || session.is_signed_in()>
				<span class="user">
					{move || session.current().map(|s| s.user().name.clone()).unwrap_or_default()}
				</span>
				<button class="sign-out" on:click=move |_| session.end()>
					"Sign out"
				</button>
			</Show>
		</header>
	}
}

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use log::warn;

use crate::data::{DEMO_PASSWORD, DirectoryStore};
use crate::session::{Session, SessionContext};

#[component]
pub fn Login() -> impl IntoView {
	let session = expect_context::<SessionContext>();
	let store = expect_context::<DirectoryStore>();
	let navigate = use_navigate();
	let email = RwSignal::new(String::new());
	let password = RwSignal::new(String::new());
	let error = RwSignal::new(None::<String>);
	let pending = RwSignal::new(false);

	let on_submit = move |ev: SubmitEvent| {
		ev.prevent_default();
		let (email, password) = (email.get_untracked(), password.get_untracked());
		let source = store.source();
		let navigate = navigate.clone();
		pending.set(true);
		spawn_local(async move {
			match Session::login(source.as_ref(), &email, &password).await {
				Ok(signed_in) => {
					session.begin(signed_in);
					error.set(None);
					navigate("/profile", Default::default());
				}
				Err(err) => {
					warn!("sign-in failed for {email}: {err}");
					error.set(Some(err.to_string()));
				}
			}
			pending.set(false);
		});
	};

	view! {
		<div class="login">
			<h2>"Sign in"</h2>
			<form on:submit=on_submit>
				<label>
					"Email"
					<input
						type="email"
						prop:value=move || email.get()
						on:input=move |ev| email.set(event_target_value(&ev))
					/>
				</label>
				<label>
					"Password"
					<input
						type="password"
						prop:value=move || password.get()
						on:input=move |ev| password.set(event_target_value(&ev))
					/>
				</label>
				<Show when=move || error.with(Option::is_some)>
					<p class="form-error">{move || error.get().unwrap_or_default()}</p>
				</Show>
				<button type="submit" disabled=move || pending.get()>
					{move || if pending.get() { "Signing in..." } else { "Sign in" }}
				</button>
			</form>
			<p class="hint">
				{format!("Demo: use any alumni email with the password \"{DEMO_PASSWORD}\".")}
			</p>
		</div>
	}
}

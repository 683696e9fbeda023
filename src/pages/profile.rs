use leptos::prelude::*;
use leptos_router::components::A;
use log::info;

use crate::data::DirectoryStore;
use crate::session::{ProfileDraft, SessionContext};

/// The signed-in user's profile, with an edit mode backed by a draft.
#[component]
pub fn Profile() -> impl IntoView {
	let session = expect_context::<SessionContext>();
	let store = expect_context::<DirectoryStore>();
	let draft = RwSignal::new(None::<ProfileDraft>);

	let start_edit = move |_| draft.set(session.current().map(|s| ProfileDraft::from_user(s.user())));
	let cancel = move |_| draft.set(None);
	let save = move |_| {
		if let Some(saved) = draft.get_untracked() {
			session.save(saved);
			info!("profile saved");
		}
		draft.set(None);
	};

	let details = move || {
		let session = session.current()?;
		let user = session.user().clone();
		let (department, company, skills) = store.snapshot.with(|s| {
			(
				s.department_name(&user.department).unwrap_or("-").to_owned(),
				s.company_name(&user.company).unwrap_or("-").to_owned(),
				user.skills
					.iter()
					.filter_map(|id| s.skill_name(id))
					.collect::<Vec<_>>()
					.join(", "),
			)
		});
		Some(view! {
			<dl class="profile-details">
				<dt>"Name"</dt>
				<dd>{user.name}</dd>
				<dt>"Email"</dt>
				<dd>{user.email}</dd>
				<dt>"Job title"</dt>
				<dd>{user.job_title}</dd>
				<dt>"Company"</dt>
				<dd>{company}</dd>
				<dt>"Department"</dt>
				<dd>{department}</dd>
				<dt>"Graduated"</dt>
				<dd>{user.graduation_year}</dd>
				<dt>"Skills"</dt>
				<dd>{skills}</dd>
				<dt>"Bio"</dt>
				<dd>{user.bio.unwrap_or_default()}</dd>
			</dl>
			<button on:click=start_edit>"Edit profile"</button>
		})
	};

	let skill_options = move || {
		store.snapshot.with(|s| {
			s.skills
				.iter()
				.map(|skill| {
					let (id, toggle_id) = (skill.id.clone(), skill.id.clone());
					view! {
						<label class="skill-option">
							<input
								type="checkbox"
								prop:checked=move || {
									draft.with(|d| d.as_ref().is_some_and(|d| d.has_skill(&id)))
								}
								on:change=move |_| {
									draft.update(|d| {
										if let Some(d) = d {
											d.toggle_skill(&toggle_id);
										}
									})
								}
							/>
							{skill.name.clone()}
						</label>
					}
				})
				.collect_view()
		})
	};

	let editor = move || {
		view! {
			<form class="profile-editor" on:submit=|ev| ev.prevent_default()>
				<label>
					"Name"
					<input
						prop:value=move || draft.with(|d| d.as_ref().map(|d| d.name.clone()).unwrap_or_default())
						on:input=move |ev| {
							draft.update(|d| {
								if let Some(d) = d {
									d.name = event_target_value(&ev);
								}
							})
						}
					/>
				</label>
				<label>
					"Job title"
					<input
						prop:value=move || draft.with(|d| d.as_ref().map(|d| d.job_title.clone()).unwrap_or_default())
						on:input=move |ev| {
							draft.update(|d| {
								if let Some(d) = d {
									d.job_title = event_target_value(&ev);
								}
							})
						}
					/>
				</label>
				<label>
					"Bio"
					<textarea
						prop:value=move || draft.with(|d| d.as_ref().map(|d| d.bio.clone()).unwrap_or_default())
						on:input=move |ev| {
							draft.update(|d| {
								if let Some(d) = d {
									d.bio = event_target_value(&ev);
								}
							})
						}
					></textarea>
				</label>
				<fieldset>
					<legend>"Skills"</legend>
					{skill_options}
				</fieldset>
				<button type="button" on:click=save>"Save"</button>
				<button type="button" on:click=cancel>"Cancel"</button>
			</form>
		}
	};

	view! {
		<div class="profile">
			<h2>"My profile"</h2>
			<Show
				when=move || session.is_signed_in()
				fallback=|| {
					view! {
						<p>"Please " <A href="/login">"sign in"</A> " to view your profile."</p>
					}
				}
			>
				<Show when=move || draft.with(Option::is_some) fallback=details>
					{editor}
				</Show>
			</Show>
		</div>
	}
}

use leptos::prelude::*;

use crate::data::DirectoryStore;
use crate::network::{FilterState, Person};

/// Roster card. "Focus" toggles the person's node in the graph.
#[component]
pub fn AlumniCard(person: Person) -> impl IntoView {
	let store = expect_context::<DirectoryStore>();
	let filters = expect_context::<RwSignal<FilterState>>();
	let Person {
		id,
		name,
		avatar,
		department,
		company,
		job_title,
		skills,
		graduation_year,
		bio,
		..
	} = person;

	let (department, company, skills) = store.snapshot.with_untracked(|s| {
		(
			s.department_name(&department).unwrap_or("Unknown department").to_owned(),
			s.company_name(&company).unwrap_or("Unknown company").to_owned(),
			skills
				.iter()
				.filter_map(|id| s.skill_name(id))
				.map(str::to_owned)
				.collect::<Vec<_>>(),
		)
	});
	let focus_id = id.clone();
	let is_focused = move || filters.with(|f| f.focused.as_deref() == Some(id.as_str()));

	view! {
		<article class="alumni-card" class:focused=is_focused>
			<img class="avatar" src=avatar alt=name.clone() />
			<div class="alumni-details">
				<h4>{name}</h4>
				<p class="job">{format!("{job_title} at {company}")}</p>
				<p class="department">{format!("{department}, class of {graduation_year}")}</p>
				{bio.map(|bio| view! { <p class="bio">{bio}</p> })}
				<ul class="skill-tags">
					{skills.into_iter().map(|skill| view! { <li>{skill}</li> }).collect_view()}
				</ul>
				<button class="focus-toggle" on:click=move |_| filters.update(|f| f.toggle_focus(&focus_id))>
					"Focus in graph"
				</button>
			</div>
		</article>
	}
}

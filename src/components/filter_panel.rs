use leptos::prelude::*;

use crate::data::DirectoryStore;
use crate::network::{EntitySnapshot, Facet, FilterState, Person, YearRange};

fn facet_options(snapshot: &EntitySnapshot, facet: Facet) -> Vec<(String, String)> {
	fn pairs<T>(items: &[T], f: impl Fn(&T) -> (&str, &str)) -> Vec<(String, String)> {
		items
			.iter()
			.map(|item| {
				let (id, name) = f(item);
				(id.to_owned(), name.to_owned())
			})
			.collect()
	}
	match facet {
		Facet::Department => pairs(&snapshot.departments, |d| (d.id.as_str(), d.name.as_str())),
		Facet::Company => pairs(&snapshot.companies, |c| (c.id.as_str(), c.name.as_str())),
		Facet::Skill => pairs(&snapshot.skills, |s| (s.id.as_str(), s.name.as_str())),
		Facet::Event => pairs(&snapshot.events, |e| (e.id.as_str(), e.name.as_str())),
	}
}

fn year_bounds(people: &[Person]) -> Option<(u16, u16)> {
	let years = people.iter().map(|p| p.graduation_year);
	Some((years.clone().min()?, years.max()?))
}

#[derive(Clone, Copy)]
enum End {
	From,
	To,
}

#[component]
pub fn SearchBox(#[prop(default = "Search the network...")] placeholder: &'static str) -> impl IntoView {
	let filters = expect_context::<RwSignal<FilterState>>();

	view! {
		<input
			type="search"
			class="search-box"
			placeholder=placeholder
			prop:value=move || filters.with(|f| f.search.clone())
			on:input=move |ev| filters.update(|f| f.set_search(event_target_value(&ev)))
		/>
	}
}

/// Facet checkboxes, graduation range and the clear button.
#[component]
pub fn FilterPanel() -> impl IntoView {
	let store = expect_context::<DirectoryStore>();
	let filters = expect_context::<RwSignal<FilterState>>();
	let bounds = Memo::new(move |_| store.snapshot.with(|s| year_bounds(&s.people)));
	let range = move || {
		filters
			.with(|f| f.graduation_years)
			.map(|r| (r.from, r.to))
			.or_else(|| bounds.get())
	};

	let set_year = move |end: End, value: String| {
		let Ok(year) = value.trim().parse::<u16>() else {
			return;
		};
		let (lo, hi) = range().unwrap_or((year, year));
		let next = match end {
			End::From => YearRange::new(year, hi),
			End::To => YearRange::new(lo, year),
		};
		filters.update(|f| f.set_graduation_years(Some(next)));
	};

	let facet_section = move |facet: Facet| {
		view! {
			<section class="facet">
				<h4>{facet.title()}</h4>
				{move || {
					store
						.snapshot
						.with(|s| facet_options(s, facet))
						.into_iter()
						.map(|(id, name)| {
							let toggle_id = id.clone();
							view! {
								<label class="facet-option">
									<input
										type="checkbox"
										prop:checked=move || filters.with(|f| f.is_selected(facet, &id))
										on:change=move |_| filters.update(|f| f.toggle(facet, &toggle_id))
									/>
									{name}
								</label>
							}
						})
						.collect_view()
				}}
			</section>
		}
	};

	view! {
		<div class="filter-panel">
			<div class="filter-header">
				<h3>"Filters"</h3>
				<button
					class="clear-filters"
					disabled=move || !filters.with(FilterState::is_filtering)
					on:click=move |_| filters.update(FilterState::clear)
				>
					"Clear filters"
				</button>
			</div>
			<section class="facet">
				<h4>"Graduation year"</h4>
				<input
					type="number"
					class="year-from"
					prop:value=move || range().map(|(lo, _)| lo.to_string()).unwrap_or_default()
					on:change=move |ev| set_year(End::From, event_target_value(&ev))
				/>
				" to "
				<input
					type="number"
					class="year-to"
					prop:value=move || range().map(|(_, hi)| hi.to_string()).unwrap_or_default()
					on:change=move |ev| set_year(End::To, event_target_value(&ev))
				/>
			</section>
			{Facet::ALL.into_iter().map(facet_section).collect_view()}
		</div>
	}
}

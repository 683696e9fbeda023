use std::collections::HashSet;

use super::filter::FilterState;
use super::model::Person;

/// People matching the directory filters, in input order.
///
/// The search term matches names; each id selection is an any-of match.
/// Category and focus only concern the graph and are ignored here.
pub fn filter_people<'a>(people: &'a [Person], state: &FilterState) -> Vec<&'a Person> {
	let term = state.search.trim().to_lowercase();
	let any_of = |selected: &HashSet<String>, ids: &[String]| {
		selected.is_empty() || ids.iter().any(|id| selected.contains(id))
	};

	people
		.iter()
		.filter(|p| term.is_empty() || p.name.to_lowercase().contains(&term))
		.filter(|p| {
			state
				.graduation_years
				.is_none_or(|range| range.contains(p.graduation_year))
		})
		.filter(|p| state.departments.is_empty() || state.departments.contains(&p.department))
		.filter(|p| state.companies.is_empty() || state.companies.contains(&p.company))
		.filter(|p| any_of(&state.skills, &p.skills))
		.filter(|p| any_of(&state.events, &p.events))
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::data::sample_snapshot;
	use crate::network::{Facet, YearRange};

	fn names<'a>(people: &[&'a Person]) -> Vec<&'a str> {
		people.iter().map(|p| p.name.as_str()).collect()
	}

	#[test]
	fn no_filters_returns_everyone() {
		let snapshot = sample_snapshot();
		let people = filter_people(&snapshot.people, &FilterState::default());
		assert_eq!(people.len(), snapshot.people.len());
	}

	#[test]
	fn facets_combine_with_and_within_with_or() {
		let snapshot = sample_snapshot();
		let mut state = FilterState::default();
		state.toggle(Facet::Skill, "s3");
		state.toggle(Facet::Skill, "s13");
		assert_eq!(
			names(&filter_people(&snapshot.people, &state)),
			vec!["Sarah Johnson", "David Kim", "Robert Taylor"]
		);

		state.toggle(Facet::Company, "c1");
		assert_eq!(
			names(&filter_people(&snapshot.people, &state)),
			vec!["Sarah Johnson", "David Kim"]
		);

		state.toggle(Facet::Event, "e4");
		assert_eq!(names(&filter_people(&snapshot.people, &state)), vec!["David Kim"]);
	}

	#[test]
	fn name_and_graduation_year() {
		let snapshot = sample_snapshot();
		let mut state = FilterState::default();
		state.set_search("I");
		assert_eq!(
			names(&filter_people(&snapshot.people, &state)),
			vec!["Michael Chen", "Emily Rodriguez", "David Kim", "Lisa Wang"]
		);

		state.set_graduation_years(Some(YearRange::new(2019, 2022)));
		assert_eq!(
			names(&filter_people(&snapshot.people, &state)),
			vec!["Michael Chen", "Emily Rodriguez", "Lisa Wang"]
		);
	}
}

//! Relation lookups over the person list.

use std::collections::HashSet;

use super::model::{EntitySnapshot, Event, Person, RelationKind, Skill};

/// People related to the entity `id` through `relation`.
pub fn people_by_relation<'a>(
	people: &'a [Person],
	relation: RelationKind,
	id: &str,
) -> Vec<&'a Person> {
	people
		.iter()
		.filter(|p| match relation {
			RelationKind::StudiedIn => p.department == id,
			RelationKind::WorksAt => p.company == id,
			RelationKind::HasSkill => p.skills.iter().any(|s| s == id),
			RelationKind::Attended => p.events.iter().any(|e| e == id),
		})
		.collect()
}

/// The focused person, or every person related to the focused entity.
pub fn people_for_focus<'a>(people: &'a [Person], focused: &str) -> Vec<&'a Person> {
	people
		.iter()
		.filter(|p| {
			p.id == focused
				|| p.department == focused
				|| p.company == focused
				|| p.skills.iter().any(|s| s == focused)
				|| p.events.iter().any(|e| e == focused)
		})
		.collect()
}

fn shared_ids<'a>(
	snapshot: &'a EntitySnapshot,
	person_ids: &[&str],
	ids_of: impl Fn(&'a Person) -> &'a [String],
) -> HashSet<&'a str> {
	let mut sets = person_ids.iter().map(|id| {
		snapshot
			.person(id)
			.map(|p| ids_of(p).iter().map(String::as_str).collect::<HashSet<_>>())
			.unwrap_or_default()
	});
	let Some(first) = sets.next() else {
		return HashSet::new();
	};
	sets.fold(first, |acc, set| acc.intersection(&set).copied().collect())
}

/// Skills every listed person has. Empty for an empty list.
pub fn common_skills<'a>(snapshot: &'a EntitySnapshot, person_ids: &[&str]) -> Vec<&'a Skill> {
	let shared = shared_ids(snapshot, person_ids, |p| p.skills.as_slice());
	snapshot
		.skills
		.iter()
		.filter(|s| shared.contains(s.id.as_str()))
		.collect()
}

/// Events every listed person attended. Empty for an empty list.
pub fn common_events<'a>(snapshot: &'a EntitySnapshot, person_ids: &[&str]) -> Vec<&'a Event> {
	let shared = shared_ids(snapshot, person_ids, |p| p.events.as_slice());
	snapshot
		.events
		.iter()
		.filter(|e| shared.contains(e.id.as_str()))
		.collect()
}

use async_trait::async_trait;

use crate::error::{AuthError, DataError};
use crate::network::{
	Company, Department, EntitySnapshot, Event, Graph, Person, RelationKind, Skill, build_graph,
	people_by_relation,
};

/// Password accepted by the demo sign-in.
pub const DEMO_PASSWORD: &str = "demo123";

/// Read access to the alumni directory.
///
/// Futures are `?Send`: everything runs on the browser's single thread.
#[async_trait(?Send)]
pub trait EntitySource {
	async fn list_people(&self) -> Result<Vec<Person>, DataError>;
	async fn list_departments(&self) -> Result<Vec<Department>, DataError>;
	async fn list_companies(&self) -> Result<Vec<Company>, DataError>;
	async fn list_skills(&self) -> Result<Vec<Skill>, DataError>;
	async fn list_events(&self) -> Result<Vec<Event>, DataError>;

	/// Pre-joined graph of every entity and relation.
	async fn fetch_graph(&self) -> Result<Graph, DataError>;

	async fn find_people_by_relation(
		&self,
		relation: RelationKind,
		id: &str,
	) -> Result<Vec<Person>, DataError>;

	async fn authenticate(&self, email: &str, password: &str) -> Result<Person, AuthError>;

	async fn load_snapshot(&self) -> Result<EntitySnapshot, DataError> {
		Ok(EntitySnapshot {
			people: self.list_people().await?,
			departments: self.list_departments().await?,
			companies: self.list_companies().await?,
			skills: self.list_skills().await?,
			events: self.list_events().await?,
		})
	}
}

/// Any known email with [`DEMO_PASSWORD`] signs in; unknown emails and wrong
/// passwords are indistinguishable to the caller.
pub fn demo_sign_in<'a>(
	people: &'a [Person],
	email: &str,
	password: &str,
) -> Result<&'a Person, AuthError> {
	let email = email.trim();
	if email.is_empty() || password.is_empty() {
		return Err(AuthError::MissingCredentials);
	}
	people
		.iter()
		.find(|p| p.email.eq_ignore_ascii_case(email))
		.filter(|_| password == DEMO_PASSWORD)
		.ok_or(AuthError::InvalidCredentials)
}

/// In-memory source over a fixed snapshot.
#[derive(Clone, Debug)]
pub struct SampleSource {
	snapshot: EntitySnapshot,
}

impl SampleSource {
	pub fn new(snapshot: EntitySnapshot) -> Self {
		Self { snapshot }
	}
}

#[async_trait(?Send)]
impl EntitySource for SampleSource {
	async fn list_people(&self) -> Result<Vec<Person>, DataError> {
		Ok(self.snapshot.people.clone())
	}

	async fn list_departments(&self) -> Result<Vec<Department>, DataError> {
		Ok(self.snapshot.departments.clone())
	}

	async fn list_companies(&self) -> Result<Vec<Company>, DataError> {
		Ok(self.snapshot.companies.clone())
	}

	async fn list_skills(&self) -> Result<Vec<Skill>, DataError> {
		Ok(self.snapshot.skills.clone())
	}

	async fn list_events(&self) -> Result<Vec<Event>, DataError> {
		Ok(self.snapshot.events.clone())
	}

	async fn fetch_graph(&self) -> Result<Graph, DataError> {
		Ok(build_graph(&self.snapshot))
	}

	async fn find_people_by_relation(
		&self,
		relation: RelationKind,
		id: &str,
	) -> Result<Vec<Person>, DataError> {
		Ok(people_by_relation(&self.snapshot.people, relation, id)
			.into_iter()
			.cloned()
			.collect())
	}

	async fn authenticate(&self, email: &str, password: &str) -> Result<Person, AuthError> {
		demo_sign_in(&self.snapshot.people, email, password).cloned()
	}

	async fn load_snapshot(&self) -> Result<EntitySnapshot, DataError> {
		Ok(self.snapshot.clone())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::data::sample_snapshot;

	#[test]
	fn demo_sign_in_checks_email_and_password() {
		let people = sample_snapshot().people;
		let user = demo_sign_in(&people, " Sarah.J@example.com ", DEMO_PASSWORD).unwrap();
		assert_eq!(user.id, "a1");

		assert!(matches!(
			demo_sign_in(&people, "sarah.j@example.com", "123456"),
			Err(AuthError::InvalidCredentials)
		));
		assert!(matches!(
			demo_sign_in(&people, "nobody@example.com", DEMO_PASSWORD),
			Err(AuthError::InvalidCredentials)
		));
		assert!(matches!(
			demo_sign_in(&people, "", DEMO_PASSWORD),
			Err(AuthError::MissingCredentials)
		));
	}
}

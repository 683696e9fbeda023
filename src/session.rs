//! Signed-in user and the editable profile draft.
//!
//! A [`Session`] exists only between a successful login and logout. It lives in
//! a [`SessionContext`] provided by the app root; nothing is kept in browser
//! storage.

use leptos::prelude::*;
use log::info;

use crate::data::EntitySource;
use crate::error::AuthError;
use crate::network::Person;

#[derive(Clone, Debug, PartialEq)]
pub struct Session {
	user: Person,
}

impl Session {
	pub async fn login(
		source: &dyn EntitySource,
		email: &str,
		password: &str,
	) -> Result<Self, AuthError> {
		let user = source.authenticate(email, password).await?;
		info!("signed in as {}", user.id);
		Ok(Self { user })
	}

	pub fn user(&self) -> &Person {
		&self.user
	}

	/// Replace the profile with a saved draft. Identity fields are kept.
	pub fn apply(&mut self, draft: ProfileDraft) {
		let ProfileDraft {
			name,
			job_title,
			bio,
			skills,
		} = draft;
		self.user.name = name;
		self.user.job_title = job_title;
		self.user.bio = Some(bio).filter(|b| !b.trim().is_empty());
		self.user.skills = skills;
	}
}

/// Handle to the current session, if any.
#[derive(Clone, Copy, Default)]
pub struct SessionContext(RwSignal<Option<Session>>);

impl SessionContext {
	pub fn current(&self) -> Option<Session> {
		self.0.get()
	}

	pub fn is_signed_in(&self) -> bool {
		self.0.with(Option::is_some)
	}

	pub fn begin(&self, session: Session) {
		self.0.set(Some(session));
	}

	pub fn end(&self) {
		if let Some(session) = self.0.get_untracked() {
			info!("signed out {}", session.user.id);
		}
		self.0.set(None);
	}

	pub fn save(&self, draft: ProfileDraft) {
		self.0.update(|session| {
			if let Some(session) = session {
				session.apply(draft);
			}
		});
	}
}

/// Editable copy of the profile fields.
#[derive(Clone, Debug, PartialEq)]
pub struct ProfileDraft {
	pub name: String,
	pub job_title: String,
	pub bio: String,
	pub skills: Vec<String>,
}

impl ProfileDraft {
	pub fn from_user(user: &Person) -> Self {
		Self {
			name: user.name.clone(),
			job_title: user.job_title.clone(),
			bio: user.bio.clone().unwrap_or_default(),
			skills: user.skills.clone(),
		}
	}

	pub fn has_skill(&self, id: &str) -> bool {
		self.skills.iter().any(|s| s == id)
	}

	pub fn toggle_skill(&mut self, id: &str) {
		if let Some(pos) = self.skills.iter().position(|s| s == id) {
			self.skills.remove(pos);
		} else {
			self.skills.push(id.to_owned());
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::data::sample_snapshot;

	fn session() -> Session {
		Session {
			user: sample_snapshot().people.remove(0),
		}
	}

	#[test]
	fn toggle_skill_is_symmetric() {
		let session = session();
		let mut draft = ProfileDraft::from_user(session.user());
		let original = draft.clone();
		draft.toggle_skill("s9");
		assert!(draft.has_skill("s9"));
		draft.toggle_skill("s9");
		assert_eq!(draft, original);
		draft.toggle_skill("s1");
		assert!(!draft.has_skill("s1"));
	}

	#[test]
	fn apply_draft_keeps_identity() {
		let mut session = session();
		let mut draft = ProfileDraft::from_user(session.user());
		draft.name = "Sarah J. Johnson".into();
		draft.bio = "   ".into();
		draft.toggle_skill("s2");
		session.apply(draft);

		let user = session.user();
		assert_eq!(user.id, "a1");
		assert_eq!(user.email, "sarah.j@example.com");
		assert_eq!(user.name, "Sarah J. Johnson");
		assert_eq!(user.bio, None);
		assert_eq!(user.skills, vec!["s1", "s3"]);
	}
}

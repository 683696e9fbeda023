//! Error types for data access and sign-in.

use thiserror::Error;

/// Failure talking to the directory backend.
#[derive(Error, Debug)]
pub enum DataError {
	#[error("request to {url} failed: {source}")]
	Http {
		url: String,
		#[source]
		source: reqwest::Error,
	},

	#[error("{url} returned {status}: {message}")]
	Status {
		url: String,
		status: u16,
		message: String,
	},

	#[error("malformed response from {url}: {source}")]
	Decode {
		url: String,
		#[source]
		source: reqwest::Error,
	},
}

/// Failure signing in.
#[derive(Error, Debug)]
pub enum AuthError {
	#[error("Invalid email or password")]
	InvalidCredentials,

	#[error("Email and password are required")]
	MissingCredentials,

	#[error("Sign-in unavailable: {0}")]
	Unavailable(#[from] DataError),
}

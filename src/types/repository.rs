use crate::types::user::User;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Access rights of the authenticated user on a repository.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Permission {
	pub admin: bool,
	pub push: bool,
	pub pull: bool,
}

#[derive(Deserialize, Debug, Clone)]
pub struct RepositoryId(i64);

impl RepositoryId {
	/// The value of the id. Always assigned by the server.
	pub const fn value(&self) -> i64 {
		self.0
	}
}

impl Display for RepositoryId {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

/// A repository hosted on the Gogs instance.
#[derive(Deserialize, Debug, Clone)]
pub struct Repository {
	/// The ID of the repository.
	pub id: RepositoryId,
	/// The owning user. Not included in the terser list payloads.
	pub owner: Option<User>,
	/// The name of the repository with its namespace.
	pub full_name: String,
	/// Whether the repository is private.
	pub private: bool,
	/// Whether the repository is a fork.
	#[serde(default)]
	pub fork: bool,
	/// The URL of the repository's homepage.
	#[serde(default)]
	pub html_url: String,
	/// The http(s) clone URL.
	#[serde(default)]
	pub clone_url: String,
	/// The ssh clone URL.
	#[serde(default)]
	pub ssh_url: String,
	/// The rights of the authenticated user on the repository.
	pub permissions: Permission,
}

/// Payload for creating a repository.
///
/// Every field is always serialized, empty or not, as the server
/// expects. `name` must be non-empty and `description` no longer than
/// 255 characters; both constraints are enforced by the server, not
/// here.
#[derive(Serialize, Debug, Clone, Builder)]
pub struct CreateRepoOption<'a> {
	/// The name of the repository.
	pub name: &'a str,
	/// A short description.
	#[builder(default)]
	pub description: &'a str,
	/// Create the repository private.
	#[builder(default)]
	pub private: bool,
	/// Initialize the repository with a first commit.
	#[builder(default)]
	pub auto_init: bool,
	/// The name of a gitignore template to initialize with.
	#[builder(default)]
	pub gitignore: &'a str,
	/// The name of a license template to initialize with.
	#[builder(default)]
	pub license: &'a str,
}

impl<'a> CreateRepoOption<'a> {
	/// Create a builder for the payload.
	pub fn builder() -> CreateRepoOptionBuilder<'a> {
		CreateRepoOptionBuilder::default()
	}
}

use serde::Deserialize;

#[derive(Deserialize, Debug, Clone)]
pub struct UserId(i64);

impl UserId {
	/// The value of the id.
	pub const fn value(&self) -> i64 {
		self.0
	}
}

/// A user of the Gogs instance, as it appears as repository owner or
/// as the authenticated user.
#[derive(Deserialize, Debug, Clone)]
pub struct User {
	/// The user's ID.
	pub id: UserId,
	/// The username.
	pub username: String,
	/// The display name.
	#[serde(default)]
	pub full_name: String,
	/// The email address.
	#[serde(default)]
	pub email: String,
	/// The URL of the user's avatar.
	#[serde(default)]
	pub avatar_url: String,
}

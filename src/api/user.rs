use crate::api::Endpoint;

use http::Method;
use std::borrow::Cow;

/// Get the authenticated user.
pub struct User;

impl User {
	pub fn build() -> Self {
		User {}
	}
}

impl Endpoint for User {
	fn method(&self) -> Method {
		Method::GET
	}

	fn endpoint(&self) -> Cow<'static, str> {
		"user".into()
	}
}

#[cfg(test)]
mod test {
	use super::User;
	use crate::api::test_client::{Expected, TestClient};
	use crate::api::Query;
	use crate::types;

	#[test]
	fn current_user_is_parsed() {
		let client = TestClient::new(
			Expected::get("/api/v1/user"),
			r#"{"id":1,"username":"unknwon","full_name":"","email":"u@gogs.io","avatar_url":""}"#,
		);
		let user: types::User = User::build().query(&client).unwrap();
		assert_eq!(user.id.value(), 1);
		assert_eq!(user.username, "unknwon");
	}
}

use crate::api::Endpoint;

use http::Method;
use std::borrow::Cow;

/// List the repositories the authenticated user has access to, in the
/// order the server returns them.
pub struct ListMyRepos;

impl ListMyRepos {
	pub fn build() -> Self {
		ListMyRepos {}
	}
}

impl Endpoint for ListMyRepos {
	fn method(&self) -> Method {
		Method::GET
	}

	fn endpoint(&self) -> Cow<'static, str> {
		"user/repos".into()
	}
}

#[cfg(test)]
mod test {
	use super::ListMyRepos;
	use crate::api::test_client::{Expected, RefusedClient, TestClient};
	use crate::api::{ApiError, Query};
	use crate::types::Repository;

	#[test]
	fn no_repositories_is_an_empty_list() {
		let client = TestClient::new(Expected::get("/api/v1/user/repos"), "[]");
		let repos: Vec<Repository> = ListMyRepos::build().query(&client).unwrap();
		assert!(repos.is_empty());
	}

	#[test]
	fn repositories_are_parsed() {
		let client = TestClient::new(
			Expected::get("/api/v1/user/repos"),
			r#"[{"id":1,"full_name":"a/b","private":false,"permissions":{"admin":true,"push":true,"pull":true}}]"#,
		);
		let repos: Vec<Repository> = ListMyRepos::build().query(&client).unwrap();

		assert_eq!(repos.len(), 1);
		assert_eq!(repos[0].id.value(), 1);
		assert_eq!(repos[0].full_name, "a/b");
		assert!(!repos[0].private);
		assert!(repos[0].permissions.pull);
	}

	#[test]
	fn transport_failure_propagates() {
		let res: Result<Vec<Repository>, _> = ListMyRepos::build().query(&RefusedClient);
		assert!(matches!(res, Err(ApiError::Client { .. })));
	}
}

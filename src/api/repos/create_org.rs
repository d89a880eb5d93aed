use crate::api::{BodyError, Endpoint};
use crate::types::CreateRepoOption;

use derive_builder::Builder;
use http::Method;
use std::borrow::Cow;

/// Create a repository owned by an organization the authenticated user
/// belongs to.
#[derive(Debug, Builder)]
pub struct CreateOrgRepo<'a> {
	/// The name of the organization. Substituted verbatim in the path.
	pub org: &'a str,
	/// The payload describing the repository to create.
	pub option: &'a CreateRepoOption<'a>,
}

impl<'a> CreateOrgRepo<'a> {
	/// Create a builder for the endpoint.
	pub fn builder() -> CreateOrgRepoBuilder<'a> {
		CreateOrgRepoBuilder::default()
	}
}

impl<'a> Endpoint for CreateOrgRepo<'a> {
	fn method(&self) -> Method {
		Method::POST
	}

	fn endpoint(&self) -> Cow<'static, str> {
		format!("org/{}/repos", self.org).into()
	}

	fn body(&self) -> Result<Option<(&'static str, Vec<u8>)>, BodyError> {
		Ok(Some(("application/json", serde_json::to_vec(self.option)?)))
	}
}

#[cfg(test)]
mod test {
	use super::CreateOrgRepo;
	use crate::api::test_client::{Expected, RefusedClient, TestClient};
	use crate::api::{ApiError, Query};
	use crate::types::{CreateRepoOption, Repository};

	#[test]
	fn path_contains_the_organization() {
		let opt = CreateRepoOption::builder().name("widgets").build().unwrap();
		let client = TestClient::new(
			Expected::post_json(
				"/api/v1/org/acme/repos",
				serde_json::to_string(&opt).unwrap(),
			),
			r#"{"id":3,"full_name":"acme/widgets","private":false,"permissions":{"admin":true,"push":true,"pull":true}}"#,
		);

		let endpoint = CreateOrgRepo::builder()
			.org("acme")
			.option(&opt)
			.build()
			.unwrap();
		let repo: Repository = endpoint.query(&client).unwrap();
		assert_eq!(repo.full_name, "acme/widgets");
	}

	#[test]
	fn transport_failure_propagates() {
		let opt = CreateRepoOption::builder().name("widgets").build().unwrap();
		let endpoint = CreateOrgRepo::builder()
			.org("acme")
			.option(&opt)
			.build()
			.unwrap();
		let res: Result<Repository, _> = endpoint.query(&RefusedClient);
		assert!(matches!(res, Err(ApiError::Client { .. })));
	}
}

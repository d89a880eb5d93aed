use crate::api::{BodyError, Endpoint};
use crate::types::CreateRepoOption;

use derive_builder::Builder;
use http::Method;
use std::borrow::Cow;

/// Create a repository for the authenticated user.
#[derive(Debug, Builder)]
pub struct CreateRepo<'a> {
	/// The payload describing the repository to create.
	pub option: &'a CreateRepoOption<'a>,
}

impl<'a> CreateRepo<'a> {
	/// Create a builder for the endpoint.
	pub fn builder() -> CreateRepoBuilder<'a> {
		CreateRepoBuilder::default()
	}
}

impl<'a> Endpoint for CreateRepo<'a> {
	fn method(&self) -> Method {
		Method::POST
	}

	fn endpoint(&self) -> Cow<'static, str> {
		"user/repos".into()
	}

	fn body(&self) -> Result<Option<(&'static str, Vec<u8>)>, BodyError> {
		Ok(Some(("application/json", serde_json::to_vec(self.option)?)))
	}
}

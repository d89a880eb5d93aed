use crate::api::{ApiError, Client, RestClient};

use http::{header, HeaderMap, Method, Response, StatusCode};
use thiserror::Error;
use url::Url;

const TEST_ROOT: &str = "https://gogs.example.com/api/v1/";

#[derive(Debug, Error)]
pub(crate) enum TestError {
	#[error("connection refused")]
	Refused,
}

/// What a test expects the endpoint to send.
#[derive(Debug)]
pub(crate) struct Expected {
	pub method: Method,
	/// Full request path, api root included.
	pub path: &'static str,
	pub content_type: Option<&'static str>,
	pub body: Option<String>,
}

impl Expected {
	pub(crate) fn get(path: &'static str) -> Self {
		Self {
			method: Method::GET,
			path,
			content_type: None,
			body: None,
		}
	}

	pub(crate) fn post_json(path: &'static str, body: String) -> Self {
		Self {
			method: Method::POST,
			path,
			content_type: Some("application/json"),
			body: Some(body),
		}
	}
}

/// A client returning a canned response after checking the request
/// against [`Expected`].
pub(crate) struct TestClient {
	pub expected: Expected,
	pub status: StatusCode,
	pub response: String,
}

impl TestClient {
	pub(crate) fn new(expected: Expected, response: &str) -> Self {
		Self {
			expected,
			status: StatusCode::OK,
			response: response.into(),
		}
	}

	pub(crate) fn with_status(expected: Expected, status: StatusCode, response: &str) -> Self {
		Self {
			expected,
			status,
			response: response.into(),
		}
	}
}

impl RestClient for TestClient {
	type Error = TestError;

	fn rest_endpoint(&self, endpoint: &str) -> Result<Url, ApiError<Self::Error>> {
		Ok(Url::parse(TEST_ROOT)?.join(endpoint)?)
	}
}

impl Client for TestClient {
	fn rest(
		&self,
		method: Method,
		url: Url,
		headers: HeaderMap,
		body: Vec<u8>,
	) -> Result<Response<Vec<u8>>, ApiError<Self::Error>> {
		assert_eq!(method, self.expected.method);
		assert_eq!(url.path(), self.expected.path);
		assert_eq!(
			headers
				.get(header::CONTENT_TYPE)
				.map(|v| v.to_str().unwrap()),
			self.expected.content_type
		);
		assert_eq!(
			self.expected.body.as_deref(),
			if body.is_empty() {
				None
			} else {
				Some(std::str::from_utf8(&body).unwrap())
			}
		);

		Ok(Response::builder()
			.status(self.status)
			.body(self.response.clone().into_bytes())
			.unwrap())
	}
}

/// A client failing every call at the transport level.
pub(crate) struct RefusedClient;

impl RestClient for RefusedClient {
	type Error = TestError;

	fn rest_endpoint(&self, endpoint: &str) -> Result<Url, ApiError<Self::Error>> {
		Ok(Url::parse(TEST_ROOT)?.join(endpoint)?)
	}
}

impl Client for RefusedClient {
	fn rest(
		&self,
		_method: Method,
		_url: Url,
		_headers: HeaderMap,
		_body: Vec<u8>,
	) -> Result<Response<Vec<u8>>, ApiError<Self::Error>> {
		Err(ApiError::client(TestError::Refused))
	}
}

use crate::api::error::ApiError;

use http::{HeaderMap, Method, Response};
use std::error::Error;
use url::Url;

/// A client that can resolve endpoint paths against a REST root.
pub trait RestClient {
	/// The error of the underlying transport.
	type Error: Error + Send + Sync + 'static;

	/// Turn an endpoint path relative to the API root (`user/repos`)
	/// into a full url.
	fn rest_endpoint(&self, endpoint: &str) -> Result<Url, ApiError<Self::Error>>;
}

/// A client that can send a request and return the raw response.
///
/// This is the single capability endpoints are executed through. The
/// binding never interprets the response itself; status handling and
/// json parsing happen in the shared [`Query`](crate::api::Query)
/// implementation.
pub trait Client: RestClient {
	/// Send the request and return the response, whatever its status.
	fn rest(
		&self,
		method: Method,
		url: Url,
		headers: HeaderMap,
		body: Vec<u8>,
	) -> Result<Response<Vec<u8>>, ApiError<Self::Error>>;
}

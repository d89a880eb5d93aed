use crate::api::{
	client::Client,
	error::{ApiError, BodyError},
	query::Query,
};

use http::{header, HeaderMap, HeaderValue, Method};
use serde::de::DeserializeOwned;
use std::borrow::Cow;

/// A type describing one API call: method, path relative to the API
/// root and optional body.
pub trait Endpoint {
	/// The HTTP method of the endpoint.
	fn method(&self) -> Method;

	/// The path of the endpoint, relative to the API root.
	fn endpoint(&self) -> Cow<'static, str>;

	/// The body of the endpoint as `(content type, data)`, if any.
	///
	/// A serialization failure here aborts the call before anything is
	/// sent on the wire.
	fn body(&self) -> Result<Option<(&'static str, Vec<u8>)>, BodyError> {
		Ok(None)
	}
}

impl<E, T, C> Query<T, C> for E
where
	E: Endpoint,
	T: DeserializeOwned,
	C: Client,
{
	fn query(&self, client: &C) -> Result<T, ApiError<C::Error>> {
		let url = client.rest_endpoint(&self.endpoint())?;

		let mut headers = HeaderMap::new();
		let body = if let Some((mime, data)) = self.body()? {
			headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(mime));
			data
		} else {
			Vec::new()
		};

		let rsp = client.rest(self.method(), url, headers, body)?;
		let status = rsp.status();
		let value = serde_json::from_slice(rsp.body())
			.map_err(|_| ApiError::server_error(status, rsp.body()))?;
		if !status.is_success() {
			return Err(ApiError::from_gogs(status, value));
		}

		serde_json::from_value::<T>(value).map_err(ApiError::data_type::<T>)
	}
}

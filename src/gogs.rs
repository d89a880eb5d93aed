use crate::api::{ApiError, Client, RestClient};

use http::{header, HeaderMap, HeaderValue, Method, Response};
use thiserror::Error;
use url::Url;

/// Errors of the [`Gogs`] transport.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RestError {
	#[error("communication with gogs: {}", source)]
	Communication {
		#[from]
		source: reqwest::Error,
	},
	#[error("http error: {}", source)]
	Http {
		#[from]
		source: http::Error,
	},
}

/// A blocking client for a Gogs instance.
///
/// Holds the API root and the access token; every call is an
/// independent request built from those, so sharing a `Gogs` between
/// calls carries no state across them.
pub struct Gogs {
	/// The client to use for API calls.
	client: reqwest::blocking::Client,
	/// The base URL to use for API calls.
	rest_url: Url,
	/// The authorization header for every call.
	auth: HeaderValue,
}

impl Gogs {
	/// Create a new client for the Gogs instance at `host`, using
	/// https and the given access token.
	pub fn new(host: &str, token: &str) -> Result<Self, ApiError<RestError>> {
		let rest_url = Url::parse(&format!("https://{}/api/v1/", host))?;
		Self::with_url(rest_url, token)
	}

	/// Create a new client from a full API root url. Useful for http
	/// instances or roots not living at `/api/v1/`.
	pub fn with_url(rest_url: Url, token: &str) -> Result<Self, ApiError<RestError>> {
		let auth = HeaderValue::from_str(&format!("token {}", token))
			.map_err(|err| ApiError::client(http::Error::from(err).into()))?;
		Ok(Self {
			client: reqwest::blocking::Client::new(),
			rest_url,
			auth,
		})
	}
}

impl RestClient for Gogs {
	type Error = RestError;

	fn rest_endpoint(&self, endpoint: &str) -> Result<Url, ApiError<Self::Error>> {
		Ok(self.rest_url.join(endpoint)?)
	}
}

impl Client for Gogs {
	fn rest(
		&self,
		method: Method,
		url: Url,
		headers: HeaderMap,
		body: Vec<u8>,
	) -> Result<Response<Vec<u8>>, ApiError<Self::Error>> {
		let call = || -> Result<Response<Vec<u8>>, RestError> {
			let rsp = self
				.client
				.request(method, url)
				.headers(headers)
				.header(header::AUTHORIZATION, self.auth.clone())
				.body(body)
				.send()?;

			let mut http_rsp = Response::builder()
				.status(rsp.status())
				.version(rsp.version());
			if let Some(rsp_headers) = http_rsp.headers_mut() {
				*rsp_headers = rsp.headers().clone();
			}

			let data = rsp.bytes()?;
			Ok(http_rsp.body(data.to_vec())?)
		};
		call().map_err(ApiError::client)
	}
}

use http::StatusCode;
use thiserror::Error;
use std::{any, error::Error};

/// Errors raised while building the body of a request, before anything
/// is sent on the wire.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BodyError {
	/// The payload could not be serialized to json.
	#[error("failed to serialize request body: {}", source)]
	Json {
		#[from]
		source: serde_json::Error,
	},
}

/// Errors of an API call.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError<E>
where
	E: Error + Send + Sync + 'static,
{
	/// The client (transport) failed to perform the call.
	#[error("client error: {}", source)]
	Client { source: E },
	/// The endpoint path could not be resolved against the API root.
	#[error("failed to parse url: {}", source)]
	UrlParse {
		#[from]
		source: url::ParseError,
	},
	/// The request body could not be built. Raised before any network
	/// activity.
	#[error("failed to create request body: {}", source)]
	Body {
		#[from]
		source: BodyError,
	},
	/// Gogs returned an error message for the call.
	#[error("gogs server error ({}): {}", status, msg)]
	Gogs { status: StatusCode, msg: String },
	/// Gogs returned a non-success status without a parsable message.
	#[error("gogs server error ({})", status)]
	Server { status: StatusCode, data: Vec<u8> },
	/// The response could not be deserialized into the expected type.
	#[error("could not parse {} from response: {}", typename, source)]
	DataType {
		source: serde_json::Error,
		typename: &'static str,
	},
}

impl<E> ApiError<E>
where
	E: Error + Send + Sync + 'static,
{
	/// Wrap a transport error.
	pub fn client(source: E) -> Self {
		Self::Client { source }
	}

	pub(crate) fn server_error(status: StatusCode, body: &[u8]) -> Self {
		Self::Server {
			status,
			data: body.to_vec(),
		}
	}

	/// Build the error for a non-success response, extracting the
	/// `message` field Gogs puts in its error bodies when present.
	pub(crate) fn from_gogs(status: StatusCode, value: serde_json::Value) -> Self {
		if let Some(msg) = value.get("message").and_then(|m| m.as_str()) {
			Self::Gogs {
				status,
				msg: msg.into(),
			}
		} else {
			Self::Gogs {
				status,
				msg: format!("<unknown error: {}>", value),
			}
		}
	}

	pub(crate) fn data_type<T>(source: serde_json::Error) -> Self {
		Self::DataType {
			source,
			typename: any::type_name::<T>(),
		}
	}
}

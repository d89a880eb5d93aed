use crate::api::{client::Client, error::ApiError};

/// A trait which represents a query against a client.
pub trait Query<T, C>
where
	C: Client,
{
	/// Perform the query against the client.
	fn query(&self, client: &C) -> Result<T, ApiError<C::Error>>;
}

pub mod client;
pub mod endpoint;
pub mod error;
pub mod query;
pub mod repos;
pub mod user;

#[cfg(test)]
pub(crate) mod test_client;

pub use self::client::{Client, RestClient};
pub use self::endpoint::Endpoint;
pub use self::error::{ApiError, BodyError};
pub use self::query::Query;

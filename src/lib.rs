//! Client binding for the Gogs REST API.
//!
//! Each API call is described by a type implementing [`api::Endpoint`]
//! (HTTP method, relative path, optional JSON body) and is executed
//! against a [`Gogs`] client through [`api::Query`]. The wire structs
//! live in [`types`].

pub mod api;
pub mod types;

mod gogs;

pub use crate::gogs::{Gogs, RestError};

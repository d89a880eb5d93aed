pub mod repository;
pub mod user;

pub use repository::{CreateRepoOption, Permission, Repository};
pub use user::User;

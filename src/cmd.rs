pub mod repos;
pub mod users;

pub mod create;
pub mod create_org;
pub mod list;

pub use self::create::CreateRepo;
pub use self::create_org::CreateOrgRepo;
pub use self::list::ListMyRepos;

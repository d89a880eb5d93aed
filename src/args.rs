use argh::{FromArgs, TopLevelCommand};
use std::path::Path;

/// copy of argh::from_env to insert command name and version in help text
pub fn from_env<T: TopLevelCommand>() -> T {
	let args: Vec<String> = std::env::args().collect();
	let cmd = Path::new(&args[0])
		.file_name()
		.and_then(|s| s.to_str())
		.unwrap_or(&args[0]);
	let args_str: Vec<&str> = args.iter().map(|s| s.as_str()).collect();
	T::from_args(&[cmd], &args_str[1..]).unwrap_or_else(|early_exit| {
		println!("{} {}\n", env!("CARGO_BIN_NAME"), env!("CARGO_PKG_VERSION"));
		println!("{}", early_exit.output);
		std::process::exit(match early_exit.status {
			Ok(()) => 0,
			Err(()) => 1,
		})
	})
}

/// Interact with the Gogs API
#[derive(FromArgs)]
pub struct Opts {
	/// configuration file containing gogs connection parameters
	#[argh(option, short = 'c')]
	pub config: Option<String>,

	/// more detailed output
	#[argh(switch, short = 'v')]
	pub verbose: bool,

	/// try to open links whenever possible
	#[argh(switch, short = 'o')]
	pub open: bool,

	#[argh(subcommand)]
	pub cmd: SubCommand,
}

#[derive(FromArgs)]
#[argh(subcommand)]
pub enum SubCommand {
	Repos(Repos),
	Users(Users),
}

/// Manage repositories
#[derive(FromArgs)]
#[argh(subcommand, name = "repos")]
pub struct Repos {
	#[argh(subcommand)]
	pub cmd: ReposCmd,
}

#[derive(FromArgs)]
#[argh(subcommand)]
pub enum ReposCmd {
	List(ReposList),
	Create(ReposCreate),
}

/// List the repositories of the authenticated user
#[derive(FromArgs)]
#[argh(subcommand, name = "list")]
pub struct ReposList {}

/// Create a repository
#[derive(FromArgs)]
#[argh(subcommand, name = "create")]
pub struct ReposCreate {
	/// create the repository in this organization instead of the user
	/// namespace
	#[argh(option, short = 'g')]
	pub org: Option<String>,

	/// a short description (255 characters at most, checked by the
	/// server)
	#[argh(option, short = 'd')]
	pub description: Option<String>,

	/// create a private repository
	#[argh(switch, short = 'p')]
	pub private: bool,

	/// initialize the repository with a first commit
	#[argh(switch)]
	pub auto_init: bool,

	/// name of the gitignore template to initialize with
	#[argh(option)]
	pub gitignore: Option<String>,

	/// name of the license template to initialize with
	#[argh(option)]
	pub license: Option<String>,

	/// the name of the repository to create
	#[argh(positional)]
	pub name: String,
}

/// Get information about users
#[derive(FromArgs)]
#[argh(subcommand, name = "users")]
pub struct Users {
	#[argh(subcommand)]
	pub cmd: UserCmd,
}

#[derive(FromArgs)]
#[argh(subcommand)]
pub enum UserCmd {
	Current(UserCurrent),
}

/// Show the authenticated user
#[derive(FromArgs)]
#[argh(subcommand, name = "current")]
pub struct UserCurrent {}

use crate::{
	args::{Opts, SubCommand},
	config::Config,
};

use anyhow::{Context, Result};
use gog::types::{Repository, User};
use gog::Gogs;
use once_cell::sync::Lazy;
use std::process::exit;

/// Structure to pass around functions containing informations
/// about execution context
pub struct CliContext {
	/// verbose mode
	pub verbose: bool,
	/// open links automatically
	pub open: bool,
	/// the requested subcommand
	pub cmd: SubCommand,
	/// the gogs connexion
	pub gogs: Gogs,
	/// the configuration file
	pub config: Config,
}

/// Global execution context, initialized from the command line on
/// first access.
pub static CONTEXT: Lazy<CliContext> = Lazy::new(|| {
	CliContext::from_args(crate::args::from_env()).unwrap_or_else(|err| {
		eprintln!("{:?}", err);
		exit(1);
	})
});

impl CliContext {
	/// Inializer from cli arguments
	pub fn from_args(opts: Opts) -> Result<Self> {
		// read yaml config
		let config = Config::read(&opts.config, opts.verbose)?;

		// connect to gogs
		let gogs = Gogs::new(&config.host, &config.token)
			.with_context(|| format!("Can't connect to {}", &config.host))?;

		Ok(Self {
			verbose: opts.verbose,
			open: opts.open,
			cmd: opts.cmd,
			gogs,
			config,
		})
	}

	/// Print a repository list, one per line, with flags and urls in
	/// verbose mode
	pub fn print_repos(&self, repos: &[Repository]) -> Result<()> {
		for repo in repos {
			self.print_repo(repo)?;
		}
		Ok(())
	}

	pub fn print_repo(&self, repo: &Repository) -> Result<()> {
		let mut flags = Vec::new();
		if repo.private {
			flags.push("private");
		}
		if repo.fork {
			flags.push("fork");
		}
		if flags.is_empty() {
			println!("{}", repo.full_name);
		} else {
			println!("{} [{}]", repo.full_name, flags.join(", "));
		}
		if self.verbose {
			println!("  id: {}", repo.id);
			println!("  web: {}", repo.html_url);
			println!("  clone: {}", repo.clone_url);
			println!("  ssh: {}", repo.ssh_url);
			println!(
				"  permissions: admin={} push={} pull={}",
				repo.permissions.admin, repo.permissions.push, repo.permissions.pull
			);
		}
		Ok(())
	}

	pub fn print_user(&self, user: &User) -> Result<()> {
		if user.full_name.is_empty() {
			println!("{}", user.username);
		} else {
			println!("{} ({})", user.username, user.full_name);
		}
		if self.verbose {
			println!("  id: {}", user.id.value());
			println!("  email: {}", user.email);
		}
		Ok(())
	}
}

use crate::{
	args::{self, ReposCmd},
	context::CONTEXT,
};

use anyhow::{Context, Result};
use gog::api::repos::{CreateOrgRepo, CreateRepo, ListMyRepos};
use gog::api::Query;
use gog::types::{CreateRepoOption, Repository};

pub fn cmd(args: &args::Repos) -> Result<()> {
	match &args.cmd {
		ReposCmd::List(_) => {
			let repos: Vec<Repository> = ListMyRepos::build()
				.query(&CONTEXT.gogs)
				.with_context(|| format!("Failed to list repositories on {}", CONTEXT.config.host))?;

			if repos.is_empty() {
				println!("No repository found");
				return Ok(());
			}
			CONTEXT.print_repos(&repos)
		}

		ReposCmd::Create(args) => {
			let mut builder = CreateRepoOption::builder();
			builder
				.name(&args.name)
				.private(args.private)
				.auto_init(args.auto_init);
			if let Some(description) = &args.description {
				builder.description(description);
			}
			if let Some(gitignore) = &args.gitignore {
				builder.gitignore(gitignore);
			}
			if let Some(license) = &args.license {
				builder.license(license);
			}
			let option = builder.build()?;

			// the same payload goes to the user or the org endpoint
			let repo: Repository = if let Some(org) = &args.org {
				let endpoint = CreateOrgRepo::builder().org(org).option(&option).build()?;
				endpoint.query(&CONTEXT.gogs).with_context(|| {
					format!("Failed to create repository {} in {}", args.name, org)
				})?
			} else {
				let endpoint = CreateRepo::builder().option(&option).build()?;
				endpoint
					.query(&CONTEXT.gogs)
					.with_context(|| format!("Failed to create repository {}", args.name))?
			};

			println!("repository {} has been created", repo.full_name);
			if CONTEXT.verbose {
				CONTEXT.print_repo(&repo)?;
			}
			if CONTEXT.open {
				let _ = open::that(&repo.html_url);
			}
			Ok(())
		}
	}
}

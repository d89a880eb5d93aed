use crate::{args, context::CONTEXT};

use anyhow::{Context, Result};
use gog::api::{user::User, Query};
use gog::types;

pub fn cmd(args: &args::Users) -> Result<()> {
	match &args.cmd {
		args::UserCmd::Current(_) => {
			let user: types::User = User::build()
				.query(&CONTEXT.gogs)
				.with_context(|| format!("Failed to get the user on {}", CONTEXT.config.host))?;
			CONTEXT.print_user(&user)
		}
	}
}

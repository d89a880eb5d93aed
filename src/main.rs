mod args;
mod cmd;
mod config;
mod context;

use crate::{
	args::SubCommand,
	cmd::{repos::cmd as repos, users::cmd as users},
	context::CONTEXT,
};

use anyhow::Result;

fn main() -> Result<()> {
	match &CONTEXT.cmd {
		SubCommand::Repos(args) => repos(args),
		SubCommand::Users(args) => users(args),
	}
}

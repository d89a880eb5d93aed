use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{env, fs::File, path::PathBuf};

#[derive(Deserialize)]
pub struct Config {
	/// The host name of the gogs instance.
	pub host: String,
	/// The access token to authenticate with.
	pub token: String,
	#[serde(skip)]
	pub path: PathBuf,
}

impl Config {
	pub fn read(config: &Option<String>, verbose: bool) -> Result<Self> {
		let config_path = if let Some(config) = config {
			PathBuf::from(config)
		} else {
			// returns the first configuration path that exists from that order
			// - GOG_CONFIG
			// - ~/.config/gog/config.yaml
			// - .gog_config.yaml
			//
			// first test from env var
			env::var("GOG_CONFIG")
				.ok()
				.map(PathBuf::from)
				.filter(|path| path.exists())
				// then test from project dir
				.or(ProjectDirs::from("", "", "gog")
					.map(|path| path.config_dir().join("config.yaml"))
					.filter(|path| path.exists()))
				// then test in current directory
				.or(Some(PathBuf::from(".gog_config.yaml")))
				.filter(|path| path.exists())
				// returns an error
				.ok_or(anyhow!("Unable to find a suitable configuration file"))?
		};

		if verbose {
			println!("Reading configuration from {:?}", &config_path);
		}
		// open configuration file
		let file =
			File::open(&config_path).with_context(|| format!("Can't open {:?}", &config_path))?;
		// deserialize configuration
		let mut config: Self = serde_yaml::from_reader(file)
			.with_context(|| format!("Can't read {:?}", &config_path))?;

		// save the choosen path
		config.path = config_path;
		Ok(config)
	}
}

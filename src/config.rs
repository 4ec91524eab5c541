use std::path::PathBuf;

use clap::Args;
use color_eyre::eyre::{Result, WrapErr as _};
use serde::Deserialize;
use smart_default::SmartDefault;
use stampsort::{ExtractError, ExtractSettings};

pub static EXE_NAME: &str = "stampsort";
pub static ENV_PREFIX: &str = "STAMPSORT";

#[derive(Args, Clone, Debug, Default)]
pub struct SettingsFlags {
	/// Config file to use instead of `$XDG_CONFIG_HOME/stampsort/config.toml`
	#[arg(long, global = true)]
	pub config: Option<PathBuf>,
	/// Log debug details; overrides the `debug` config flag
	#[arg(long, global = true)]
	pub debug: bool,
}

#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct AppConfig {
	pub debug: bool,
	/// Root of the documents `sort` and `extract --into` work on.
	#[default(default_notes_dir())]
	pub notes_dir: PathBuf,
	pub extract: ExtractConfig,
}

#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct ExtractConfig {
	#[default(String::from("shreddit-post"))]
	pub post_tag: String,
	#[default(String::from("https://www.reddit.com"))]
	pub base_url: String,
	/// Fixed, not DST-aware.
	#[default(-4)]
	pub utc_offset_hours: i8,
}

impl AppConfig {
	/// Defaults, then the config file, then `STAMPSORT__*` environment variables, then flags.
	pub fn load(flags: &SettingsFlags) -> Result<Self> {
		let mut builder = config::Config::builder();
		match &flags.config {
			Some(path) => builder = builder.add_source(config::File::from(path.as_path()).required(true)),
			None =>
				if let Some(path) = xdg::BaseDirectories::with_prefix(EXE_NAME).get_config_file("config.toml") {
					builder = builder.add_source(config::File::from(path).required(false));
				},
		}
		builder = builder.add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__").try_parsing(true));

		let mut app_config: AppConfig = builder
			.build()
			.and_then(|c| c.try_deserialize())
			.wrap_err("The config is not correctly formatted TOML\nand/or\n has fields of the wrong type")?;
		app_config.debug |= flags.debug;
		app_config.extract_settings().wrap_err("Invalid `extract` config")?;
		Ok(app_config)
	}

	pub fn extract_settings(&self) -> Result<ExtractSettings, ExtractError> {
		ExtractSettings::new(&self.extract.post_tag, &self.extract.base_url, self.extract.utc_offset_hours)
	}
}

fn default_notes_dir() -> PathBuf {
	xdg::BaseDirectories::with_prefix(EXE_NAME).get_data_home().unwrap_or_else(|| PathBuf::from("notes"))
}

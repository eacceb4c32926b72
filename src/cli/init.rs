// Copyright (c) 2025 Tiku Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

use camino::Utf8PathBuf;
use eyre::WrapErr;

use crate::config::{self, Config};

#[derive(clap::Args)]
pub struct InitCommand {
    /// Directory to place the new configuration file in.
    #[arg(default_value = "./")]
    pub path: Utf8PathBuf,
}

pub fn init(command: &InitCommand) -> eyre::Result<()> {
    let site_path = &command.path;
    if !site_path.exists() {
        return Err(eyre::eyre!("Does not exist: {}", site_path));
    }

    let config_path = site_path.join(config::DEFAULT_CONFIG_PATH);
    if config_path.exists() {
        return Err(eyre::eyre!("Already exists: {}", config_path));
    }

    let toml = toml::to_string(&Config::default()).wrap_err("failed to serialize default config")?;
    std::fs::write(&config_path, toml).wrap_err("failed to create default config file")?;
    println!("Created new config at: {}", config_path);
    Ok(())
}

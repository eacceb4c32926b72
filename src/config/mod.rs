// Copyright (c) 2025 Tiku Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

pub mod bank;
pub mod build;
pub mod loader;
pub mod serve;
pub mod text;

use bank::Bank;
use build::Build;
use camino::Utf8PathBuf;
use loader::Loader;
use serde::{Deserialize, Serialize};
use serve::Serve;
use text::Text;

pub const DEFAULT_CONFIG_PATH: &str = "./Tiku.toml";

#[derive(Deserialize, Debug, Default, Serialize)]
pub struct Config {
    #[serde(default)]
    pub bank: Bank,

    #[serde(default)]
    pub loader: Loader,

    #[serde(default)]
    pub build: Build,

    #[serde(default)]
    pub serve: Serve,

    #[serde(default)]
    pub text: Text,
}

/// Try to find toml file in the current directory or the parent directory.
pub fn find_config(mut toml_file: Utf8PathBuf) -> eyre::Result<Utf8PathBuf> {
    if !toml_file.exists() {
        let parent = match toml_file.parent() {
            Some(p) if !p.as_str().is_empty() => p.canonicalize_utf8()?,
            _ => Utf8PathBuf::from(".").canonicalize_utf8()?,
        };
        let Some(parent) = parent.parent() else {
            eyre::bail!("cannot find configuration file: {}", toml_file);
        };

        toml_file = parent.join(DEFAULT_CONFIG_PATH);
        if !toml_file.exists() {
            return Err(eyre::eyre!("cannot find configuration file: {}", toml_file));
        }
    }
    Ok(toml_file)
}

pub fn parse_config(config: &str) -> eyre::Result<Config> {
    let config: Config =
        toml::from_str(config).map_err(|e| eyre::eyre!("failed to parse config file: {}", e))?;
    if config.bank.page_size == 0 {
        eyre::bail!("`bank.page-size` must be at least 1");
    }
    Ok(config)
}

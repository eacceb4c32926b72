// Copyright (c) 2025 Tiku Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

use camino::Utf8PathBuf;
use eyre::{eyre, WrapErr};

use crate::{
    assets_sync, config,
    environment::{self, BuildMode, CUSTOM_MATH_HTML, CUSTOM_STYLE_HTML},
    loader::{load_questions, DefaultFetcher, Location},
    site::Site,
    view::ViewState,
};

#[derive(clap::Args)]
pub struct BuildCommand {
    /// Path to the configuration file (e.g., "Tiku.toml").
    #[arg(short, long, default_value_t = config::DEFAULT_CONFIG_PATH.into())]
    config: String,
}

pub fn build(command: &BuildCommand) -> eyre::Result<()> {
    build_with(&command.config, BuildMode::Build)?;
    Ok(())
}

/// Load the dataset and write the whole site. When no candidate can be
/// loaded the index page shows the failure message and an error is returned.
///
/// Returns the location the dataset was loaded from.
pub fn build_with(config: &str, mode: BuildMode) -> eyre::Result<Location> {
    environment::init_environment(Utf8PathBuf::from(config), mode)?;
    let config = environment::get_config();
    let output = environment::output_dir();

    let math_html = match config.build.katex {
        true => CUSTOM_MATH_HTML.as_str(),
        false => "",
    };
    let site = Site {
        config,
        output: &output,
        math_html,
        style_html: CUSTOM_STYLE_HTML.as_str(),
    };

    let fetcher = DefaultFetcher::new()?;
    let loaded = match load_questions(&fetcher, &environment::candidates()) {
        Ok(loaded) => loaded,
        Err(err) => {
            site.write_load_failure(&config.text.load_failed)?;
            return Err(err);
        }
    };

    let mut state = ViewState::new(loaded.questions, config.bank.page_size);
    let written = site
        .write_all(&mut state)
        .wrap_err_with(|| eyre!("failed to write site to `{}`", output))?;

    sync_assets_dir()?;
    println!("Wrote {} pages to \"{}\"", written, output);

    Ok(loaded.location)
}

/// Synchronize the assets directory [`environment::assets_dir`] with the
/// output directory [`environment::output_dir`].
fn sync_assets_dir() -> eyre::Result<bool> {
    let asset_dir = environment::assets_dir();
    let Some(name) = asset_dir.file_name() else {
        return Ok(true);
    };
    let target = environment::output_dir().join(name);

    assets_sync::sync_assets(&asset_dir, &target)
        .wrap_err_with(|| eyre!("failed to sync `{}` to `{}`", asset_dir, target))
}

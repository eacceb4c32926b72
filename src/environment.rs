// Copyright (c) 2025 Tiku Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

use std::{
    fs::{self, create_dir_all},
    sync::{LazyLock, OnceLock},
};

use camino::{Utf8Path, Utf8PathBuf};
use eyre::WrapErr;

use crate::{
    config::{self, Config},
    loader::{self, Location},
    path_utils,
    view::RenderOptions,
};

pub struct Environment {
    /// Specifies the project root path.
    ///
    /// Please note that this value should always be automatically derived from
    /// the location of the toml configuration file.
    pub root: Utf8PathBuf,
    pub config: Config,
    pub build_mode: BuildMode,
}

static ENVIRONMENT: OnceLock<Environment> = OnceLock::new();

fn get_environment() -> &'static Environment {
    ENVIRONMENT.get().expect("environment must be initialized")
}

pub fn get_config() -> &'static Config {
    &get_environment().config
}

pub fn init_environment(toml_file: Utf8PathBuf, build_mode: BuildMode) -> eyre::Result<()> {
    let toml_file = config::find_config(toml_file)?;

    let (root, _file_name) = path_utils::split_file_name(&toml_file)
        .ok_or_else(|| eyre::eyre!("invalid configuration path `{}`", toml_file))?;
    let toml = fs::read_to_string(&toml_file)
        .wrap_err_with(|| eyre::eyre!("failed to read `{}`", toml_file))?;

    let root = match root.as_str() {
        "" => Utf8Path::new("."),
        _ => root,
    };

    _ = ENVIRONMENT.set(Environment {
        root: root.to_owned(),
        config: config::parse_config(&toml)?,
        build_mode,
    });
    Ok(())
}

#[derive(Clone, Copy)]
pub enum BuildMode {
    /// Build mode for the `tiku build` command.
    Build,

    /// Serve mode for the `tiku serve` command.
    Serve,
}

/// Replaces the bundled KaTeX import when the site root provides one.
pub static CUSTOM_MATH_HTML: LazyLock<String> = LazyLock::new(|| {
    fs::read_to_string(root_dir().join("import-math.html"))
        .unwrap_or(crate::html_flake::html_import_math().to_string())
});

pub static CUSTOM_STYLE_HTML: LazyLock<String> = LazyLock::new(|| {
    fs::read_to_string(root_dir().join("import-style.html")).unwrap_or_default()
});

pub fn root_dir() -> &'static Utf8Path {
    &get_environment().root
}

pub fn output_dir() -> Utf8PathBuf {
    let output_dir = match get_environment().build_mode {
        BuildMode::Build => &get_config().build.output,
        BuildMode::Serve => &get_config().serve.output,
    };
    root_dir().join(output_dir)
}

pub fn assets_dir() -> Utf8PathBuf {
    root_dir().join(&get_config().build.assets)
}

pub fn candidates() -> Vec<Location> {
    loader::resolve_candidates(root_dir(), &get_config().loader.candidates)
}

pub fn serve_command() -> Vec<String> {
    get_config().serve.command.clone()
}

pub fn render_options() -> RenderOptions {
    RenderOptions {
        katex_compat: get_config().build.katex_compat,
    }
}

pub fn create_parent_dirs<P: AsRef<Utf8Path>>(path: P) -> eyre::Result<()> {
    if let Some(parent_dir) = path.as_ref().parent() {
        if !parent_dir.exists() {
            create_dir_all(parent_dir)
                .wrap_err_with(|| eyre::eyre!("failed to create directory `{}`", parent_dir))?;
        }
    }
    Ok(())
}

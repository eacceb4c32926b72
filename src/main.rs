// Copyright (c) 2025 Tiku Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

mod assets_sync;
mod cli;
mod config;
mod environment;
mod html_flake;
mod html_macro;
mod loader;
mod path_utils;
mod question;
mod render;
mod site;
mod view;

use clap::Parser;

use crate::cli::{build::BuildCommand, init::InitCommand, serve::ServeCommand, show::ShowCommand};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Create a default Tiku.toml in an existing directory.
    #[command(visible_alias = "i")]
    Init(InitCommand),

    /// Load the question bank and write every listing page as HTML.
    #[command(visible_alias = "b")]
    Build(BuildCommand),

    /// Serve the question bank and rebuild it when the dataset changes.
    ///
    /// Server by default depends on the miniserve program in the user's environment.
    #[command(visible_alias = "s")]
    Serve(ServeCommand),

    /// Print one topic/type listing page to stdout.
    #[command()]
    Show(ShowCommand),
}

fn main() -> eyre::Result<()> {
    let cli = Cli::parse();
    match &cli.command {
        Command::Init(command) => crate::cli::init::init(command)?,
        Command::Build(command) => crate::cli::build::build(command)?,
        Command::Serve(command) => crate::cli::serve::serve(command)?,
        Command::Show(command) => crate::cli::show::show(command)?,
    };
    Ok(())
}

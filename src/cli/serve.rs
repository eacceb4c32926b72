// Copyright (c) 2025 Tiku Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use eyre::eyre;
use notify::{Config, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

use crate::{
    cli::build::build_with,
    config,
    environment::{self, BuildMode},
};

#[derive(clap::Args)]
pub struct ServeCommand {
    /// Path to the configuration file (e.g., "Tiku.toml").
    #[arg(short, long, default_value_t = config::DEFAULT_CONFIG_PATH.into())]
    config: String,
}

/// Build into the serve output, start the configured file server on it and
/// rebuild whenever the dataset or the assets change.
pub fn serve(command: &ServeCommand) -> eyre::Result<()> {
    let serve_build = || {
        if let Err(err) = build_with(&command.config, BuildMode::Serve) {
            color_print::ceprintln!("<r>[build] Error: {:?}</>", err);
        }
    };

    serve_build();

    print!("\x1B[2J\x1B[H");
    std::io::stdout().flush()?;

    let mut serve = parse_command(&environment::serve_command(), &environment::output_dir())?
        .stdout(std::process::Stdio::piped())
        .stderr(std::process::Stdio::piped())
        .spawn()?;

    if let Some(serve_stdout) = serve.stdout.take() {
        std::thread::spawn(move || {
            use std::io::{BufRead, BufReader};
            let reader = BufReader::new(serve_stdout);
            for line in reader.lines().map_while(Result::ok) {
                println!("[serve] {}", line);
            }
        });
    }

    if let Some(serve_stderr) = serve.stderr.take() {
        std::thread::spawn(move || {
            use std::io::{BufRead, BufReader};
            let reader = BufReader::new(serve_stderr);
            for line in reader.lines().map_while(Result::ok) {
                color_print::ceprintln!("<r>[serve] Error: {}</>", line);
            }
        });
    }

    let data_files: Vec<Utf8PathBuf> = environment::candidates()
        .iter()
        .filter_map(|c| c.as_file().map(|p| p.to_owned()))
        .collect();
    let assets_dir = environment::assets_dir();

    let is_relevant = |path: &Utf8Path| {
        path.starts_with(&assets_dir) || data_files.iter().any(|f| same_file(f, path))
    };
    let result = watch_paths(&watched_dirs(&data_files, &assets_dir), |path| {
        if is_relevant(path) {
            serve_build();
        }
        Ok(())
    });

    // After watching process is done, kill the server process.
    let _ = serve.kill();

    result
}

fn same_file(a: &Utf8Path, b: &Utf8Path) -> bool {
    match (a.canonicalize_utf8(), b.canonicalize_utf8()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

/// The directories holding the local dataset candidates, plus the assets
/// directory. Directories are watched rather than the files themselves so
/// that editors replacing a file on save are still noticed.
fn watched_dirs(data_files: &[Utf8PathBuf], assets_dir: &Utf8Path) -> Vec<(Utf8PathBuf, RecursiveMode)> {
    let mut dirs: Vec<(Utf8PathBuf, RecursiveMode)> = vec![];
    for file in data_files {
        let Some(parent) = file.parent() else {
            continue;
        };
        let parent = parent.canonicalize_utf8().unwrap_or_else(|_| parent.to_owned());
        if !dirs.iter().any(|(d, _)| *d == parent) {
            dirs.push((parent, RecursiveMode::NonRecursive));
        }
    }
    dirs.push((assets_dir.to_owned(), RecursiveMode::Recursive));
    dirs
}

fn parse_command(command: &[String], output: &Utf8Path) -> eyre::Result<std::process::Command> {
    let (program, args) = command
        .split_first()
        .ok_or_else(|| eyre!("`serve.command` must not be empty"))?;
    let mut serve = std::process::Command::new(program);
    for arg in args {
        if arg == "<output>" {
            serve.arg(output);
            continue;
        }
        serve.arg(arg);
    }
    Ok(serve)
}

/// from: https://github.com/notify-rs/notify/blob/main/examples/monitor_raw.rs#L18
fn watch_paths<F>(watched_paths: &[(Utf8PathBuf, RecursiveMode)], action: F) -> eyre::Result<()>
where
    F: Fn(&Utf8Path) -> eyre::Result<()>,
{
    let (tx, rx) = std::sync::mpsc::channel();

    // Automatically select the best implementation for your platform.
    let mut watcher = RecommendedWatcher::new(tx, Config::default())?;

    print!("[watch] ");
    for (watched_path, mode) in watched_paths {
        if !watched_path.exists() {
            color_print::ceprintln!(
                "<y>[watch] Warning: Path \"{}\" does not exist, skipping.</>",
                watched_path
            );
            continue;
        }

        watcher.watch(watched_path.as_std_path(), *mode)?;
        print!("\"{}\"  ", watched_path);
    }
    println!("\n\nPress Ctrl+C to stop watching.\n");

    for res in rx {
        match res {
            Ok(event) => {
                // notify-rs only reports `Modify(Any)` on Windows, so every
                // modify kind is accepted. Creation covers save-by-rename.
                if let EventKind::Modify(_) | EventKind::Create(_) = event.kind {
                    for path in event.paths {
                        println!("[watch] Change: {path:?}");
                        std::io::stdout().flush()?;
                        if let Ok(p) = path.as_path().try_into() {
                            action(p)?;
                        }
                    }
                }
            }
            Err(error) => {
                color_print::ceprintln!("<r>[watch] Error: {:?}</>", error);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command_substitutes_output() {
        let command: Vec<String> = ["miniserve", "<output>", "--index", "index.html"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let serve = parse_command(&command, Utf8Path::new("/tmp/publish")).unwrap();

        assert_eq!(serve.get_program(), "miniserve");
        let args: Vec<_> = serve.get_args().collect();
        assert_eq!(args, ["/tmp/publish", "--index", "index.html"]);
    }

    #[test]
    fn test_parse_empty_command() {
        assert!(parse_command(&[], Utf8Path::new("out")).is_err());
    }

    #[test]
    fn test_watched_dirs_deduplicates_parents() {
        let files: Vec<Utf8PathBuf> = vec!["/nonexistent/a/data.json".into(), "/nonexistent/a/b.json".into()];
        let dirs = watched_dirs(&files, Utf8Path::new("/nonexistent/images"));
        assert_eq!(dirs.len(), 2);
        assert_eq!(dirs[0].0, "/nonexistent/a");
        assert_eq!(dirs[1].0, "/nonexistent/images");
    }
}

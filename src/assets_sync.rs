// Copyright (c) 2025 Tiku Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

use std::fs;
use std::io;
use std::path::Path;
use walkdir::WalkDir;

/// Copy every file of `source` that is missing from `target` or newer than its
/// copy there, keeping the directory layout.
///
/// Return `true` if nothing had to be copied.
pub fn sync_assets<P: AsRef<Path>, Q: AsRef<Path>>(source: P, target: Q) -> io::Result<bool> {
    let source_path = source.as_ref();
    let target_path = target.as_ref();

    if !source_path.exists() {
        return Ok(true);
    }

    if !target_path.exists() {
        fs::create_dir_all(target_path)?;
    } else if !target_path.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("Target path `{}` is not a directory", target_path.display()),
        ));
    }

    let mut up_to_date = true;

    for entry in WalkDir::new(source_path).into_iter().filter_map(|e| e.ok()) {
        let source_file_path = entry.path();
        if !source_file_path.is_file() {
            continue;
        }

        let relative_path = source_file_path.strip_prefix(source_path).map_err(|_| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                "Failed to compute relative path",
            )
        })?;
        let target_file_path = target_path.join(relative_path);

        let is_stale = match target_file_path.metadata() {
            Ok(target_metadata) => {
                source_file_path.metadata()?.modified()? > target_metadata.modified()?
            }
            Err(_) => true,
        };

        if is_stale {
            up_to_date = false;
            if let Some(parent) = target_file_path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(source_file_path, &target_file_path)?;
        }
    }

    Ok(up_to_date)
}

// Copyright (c) 2025 Tiku Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

use serde::{Deserialize, Serialize};

#[derive(Deserialize, Debug, Serialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Loader {
    /// Locations tried in order until one yields a question array.
    ///
    /// Plain paths are relative to the directory of the configuration file,
    /// `http(s)://` entries are fetched over the network.
    pub candidates: Vec<String>,
}

impl Default for Loader {
    fn default() -> Self {
        Self {
            candidates: [
                "./data.json",
                "../data.json",
                "data.json",
                "./高考数学题库/data.json",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

// Copyright (c) 2025 Tiku Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

use serde::{Deserialize, Serialize};

#[derive(Deserialize, Debug, Serialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Serve {
    pub output: String,
    pub command: Vec<String>,
}

impl Default for Serve {
    fn default() -> Self {
        Self {
            output: "./.cache/publish".to_string(),
            command: ["miniserve", "<output>", "--index", "index.html"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

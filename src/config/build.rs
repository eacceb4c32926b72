// Copyright (c) 2025 Tiku Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

use serde::{Deserialize, Serialize};

pub const DEFAULT_ASSETS_DIR: &str = "images";

#[derive(Deserialize, Debug, Serialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Build {
    pub output: String,
    pub assets: String,
    pub pretty_urls: bool,
    pub inline_css: bool,
    pub katex: bool,
    pub katex_compat: bool,
}

impl Default for Build {
    fn default() -> Self {
        Self {
            output: "./publish".to_string(),
            assets: DEFAULT_ASSETS_DIR.to_string(),
            pretty_urls: false,
            inline_css: false,
            katex: true,
            katex_compat: true,
        }
    }
}

// Copyright (c) 2025 Tiku Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

use std::sync::LazyLock;

use regex_lite::{Captures, Regex};
use serde::{Deserialize, Serialize};

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<([a-z]+)>").unwrap());

/// User-facing strings. `title` and `heading` are templates whose
/// `<placeholder>` markers are replaced at render time.
#[derive(Deserialize, Debug, Serialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Text {
    pub title: String,
    pub heading: String,
    pub placeholder: String,
    pub choice_image_alt: String,
    pub content_image_alt: String,
    pub load_failed: String,
}

impl Default for Text {
    fn default() -> Self {
        Self {
            title: "<topic> · <type>（共 <total> 题）".to_string(),
            heading: "<year>年 <source> 第<no>题".to_string(),
            placeholder: "请选择知识点和题型".to_string(),
            choice_image_alt: "选项图".to_string(),
            content_image_alt: "题目图".to_string(),
            load_failed: "❌ 无法加载 data.json 文件<br>已尝试多个路径，请检查文件位置"
                .to_string(),
        }
    }
}

impl Text {
    pub fn title(&self, topic: &str, kind: &str, total: usize) -> String {
        fill_template(
            &self.title,
            &[("topic", topic), ("type", kind), ("total", &total.to_string())],
        )
    }

    pub fn heading(&self, year: &str, source: &str, no: &str) -> String {
        fill_template(&self.heading, &[("year", year), ("source", source), ("no", no)])
    }
}

/// Replaces every `<name>` marker in one pass, so substituted values are never
/// scanned again. Unknown markers are kept.
fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures| {
            values
                .iter()
                .find(|(name, _)| *name == &caps[1])
                .map_or_else(|| caps[0].to_string(), |(_, value)| value.to_string())
        })
        .into_owned()
}

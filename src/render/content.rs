// Copyright (c) 2025 Tiku Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

use std::sync::LazyLock;

use regex_lite::{Captures, Regex};

/// A choice that consists of nothing but `[alt](path)`.
static CHOICE_IMAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[([^\]]*)\]\(([^)]+)\)$").unwrap());

/// `![alt](path)` anywhere in the content.
static CONTENT_IMAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[([^\]]*)\]\(([^)]+)\)").unwrap());

pub fn html_image(src: &str, alt: &str, class_name: &str) -> String {
    format!(
        r#"<img src="{}" alt="{}" class="{}">"#,
        htmlize::escape_attribute(src),
        htmlize::escape_attribute(alt),
        class_name
    )
}

fn alt_or<'a>(caps: &'a Captures<'_>, default_alt: &'a str) -> &'a str {
    match caps.get(1).map(|m| m.as_str()) {
        Some(alt) if !alt.is_empty() => alt,
        _ => default_alt,
    }
}

/// Render a choice value. Only a value that is entirely one image token is
/// turned into an image, everything else passes through verbatim.
pub fn render_choice_text(text: &str, default_alt: &str) -> String {
    match CHOICE_IMAGE.captures(text) {
        Some(caps) => html_image(&caps[2], alt_or(&caps, default_alt), "choice-image"),
        None => text.to_string(),
    }
}

/// Replace every image token in `text` in place.
pub fn render_content(text: &str, default_alt: &str) -> String {
    CONTENT_IMAGE
        .replace_all(text, |caps: &Captures<'_>| {
            html_image(&caps[2], alt_or(caps, default_alt), "content-image")
        })
        .into_owned()
}

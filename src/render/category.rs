// Copyright (c) 2025 Tiku Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

use itertools::Itertools;

use crate::html;

/// Quote `s` as a single-quoted JavaScript string that can sit inside a
/// double-quoted HTML attribute.
pub fn js_string_literal(s: &str) -> String {
    let escaped = s
        .replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('\n', "\\n");
    format!("'{}'", htmlize::escape_attribute(escaped.as_str()))
}

pub fn html_type_button(topic: &str, kind: &str) -> String {
    let onclick = format!(
        "showQuestions({}, {})",
        js_string_literal(topic),
        js_string_literal(kind)
    );
    html!(button class = "btn", onclick = onclick => {htmlize::escape_text(kind)})
}

/// One block per topic, each carrying a button for every question type.
pub fn render_categories(topics: &[String], types: &[String]) -> String {
    topics
        .iter()
        .map(|topic| {
            let buttons = types
                .iter()
                .map(|kind| html_type_button(topic, kind))
                .join("");
            html!(div class = "category" =>
              (html!(h3 => {htmlize::escape_text(topic.as_str())}))
              (html!(div class = "buttons" => {buttons})))
        })
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_handler() {
        assert_eq!(
            html_type_button("数列", "单选题"),
            r#"<button class="btn" onclick="showQuestions('数列', '单选题')">单选题</button>"#
        );
    }

    #[test]
    fn test_quotes_are_escaped() {
        assert_eq!(js_string_literal("it's"), r"'it\'s'");
        assert_eq!(js_string_literal(r#"a"b"#), "'a&quot;b'");
    }

    #[test]
    fn test_every_pair_rendered() {
        let topics = vec!["数列".to_string(), "复数".to_string()];
        let types = vec!["单选题".to_string(), "填空题".to_string(), "解答题".to_string()];
        let html = render_categories(&topics, &types);

        assert_eq!(html.matches(r#"<div class="category">"#).count(), 2);
        assert_eq!(html.matches("showQuestions(").count(), 6);
        assert!(html.contains("showQuestions('复数', '解答题')"));
    }

    #[test]
    fn test_empty_lists() {
        assert_eq!(render_categories(&[], &["单选题".to_string()]), "");
    }
}

// Copyright (c) 2025 Tiku Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

use crate::html;

/// Everything that differs between two generated pages.
#[derive(Debug, Default)]
pub struct Document<'a> {
    /// Plain (already escaped) text for `<title>` and `#current-title`.
    pub title: &'a str,
    pub categories: &'a str,
    pub questions: &'a str,
    pub pagination: &'a str,
    /// Topic and type indices of the view, `None` on the index page.
    pub selection: Option<(usize, usize)>,
}

pub fn html_doc(head: &str, doc: &Document, bank_index: &str) -> String {
    let body_data = doc
        .selection
        .map(|(topic, kind)| format!(r#" data-topic="{}" data-type="{}""#, topic, kind))
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="zh-CN">
<head>
<meta http-equiv="Content-Type" content="text/html; charset=utf-8">
<meta name="viewport" content="width=device-width">
<title>{title}</title>
{head}
</head>
<body{body_data}>
<div id="layout">
<aside id="categories">{categories}</aside>
<main>
<h2 id="current-title">{title}</h2>
<div id="questions">{questions}</div>
<div id="pagination">{pagination}</div>
</main>
</div>
{bank_index}
{navigate}
{auto_render}
</body>
</html>
"#,
        title = doc.title,
        head = head,
        body_data = body_data,
        categories = doc.categories,
        questions = doc.questions,
        pagination = doc.pagination,
        bank_index = bank_index,
        navigate = html_javascript(),
        auto_render = html_auto_render(),
    )
}

/// Embed `json` so the navigation script can map names back to page files.
pub fn html_bank_index(json: &str) -> String {
    format!(
        r#"<script type="application/json" id="bank-index">{}</script>"#,
        json.replace("</", r"<\/")
    )
}

pub fn html_error(message: &str) -> String {
    html!(div class = "error", style = "color:red;padding:20px;" => {message})
}

pub fn html_css_link(href: &str) -> String {
    format!(r#"<link rel="stylesheet" href="{}">"#, href)
}

pub fn html_css() -> String {
    html!(style => "\n" {html_main_style()})
}

pub fn html_javascript() -> String {
    html!(script => "\n" {include_str!("include/navigate.js")})
}

pub fn html_import_math() -> &'static str {
    include_str!("include/import-math.html")
}

pub fn html_auto_render() -> &'static str {
    include_str!("include/auto-render.html")
}

pub fn html_main_style() -> &'static str {
    include_str!("include/main.css")
}

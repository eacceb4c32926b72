// Copyright (c) 2025 Tiku Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

use camino::{Utf8Path, Utf8PathBuf};
use eyre::{eyre, WrapErr};
use itertools::iproduct;

use crate::{
    config::Config,
    environment::create_parent_dirs,
    html_flake::{self, Document},
    path_utils::page_url,
    render::category::render_categories,
    view::{RenderOptions, ViewState},
};

pub const INDEX_PAGE: &str = "index";
pub const STYLE_FILE: &str = "main.css";

/// Page name of one view: `<topic index>-<type index>-<page>`.
pub fn view_page_name(topic: usize, kind: usize, page: usize) -> String {
    format!("{}-{}-{}", topic, kind, page)
}

/// Writes the published folder: one page per topic, type and page number,
/// plus the index page.
pub struct Site<'a> {
    pub config: &'a Config,
    pub output: &'a Utf8Path,
    /// Head fragment importing the math typesetter, empty to leave it out.
    pub math_html: &'a str,
    /// Extra head fragment provided by the user.
    pub style_html: &'a str,
}

impl Site<'_> {
    fn render_options(&self) -> RenderOptions {
        RenderOptions {
            katex_compat: self.config.build.katex_compat,
        }
    }

    fn head(&self) -> eyre::Result<String> {
        let css = match self.config.build.inline_css {
            true => html_flake::html_css(),
            false => {
                self.export_css_file()?;
                html_flake::html_css_link(STYLE_FILE)
            }
        };
        Ok([css.as_str(), self.math_html, self.style_html]
            .iter()
            .filter(|s| !s.is_empty())
            .map(|s| s.trim_end())
            .collect::<Vec<_>>()
            .join("\n"))
    }

    /// Keep a user-edited stylesheet in place.
    fn export_css_file(&self) -> eyre::Result<()> {
        let path = self.output.join(STYLE_FILE);
        if !path.exists() {
            create_parent_dirs(&path)?;
            std::fs::write(&path, html_flake::html_main_style())
                .wrap_err_with(|| eyre!("failed to write CSS file to \"{}\"", path))?;
        }
        Ok(())
    }

    fn bank_index(&self) -> String {
        let bank = &self.config.bank;
        let suffix = match self.config.build.pretty_urls {
            true => "",
            false => ".html",
        };
        let json = serde_json::json!({
            "topics": bank.topics,
            "types": bank.types,
            "suffix": suffix,
        });
        html_flake::html_bank_index(&json.to_string())
    }

    fn write_page(&self, name: &str, head: &str, doc: &Document) -> eyre::Result<Utf8PathBuf> {
        let path = self.output.join(format!("{}.html", name));
        create_parent_dirs(&path)?;
        let html = html_flake::html_doc(head, doc, &self.bank_index());
        std::fs::write(&path, html).wrap_err_with(|| eyre!("failed to write `{}`", path))?;
        println!("Output: {:?} {}", doc.title, page_url(name, self.config.build.pretty_urls));
        Ok(path)
    }

    /// Index page showing `message` in place of the listing, without any
    /// categories to pick from.
    pub fn write_load_failure(&self, message: &str) -> eyre::Result<Utf8PathBuf> {
        let head = self.head()?;
        let questions = html_flake::html_error(message);
        let doc = Document {
            questions: &questions,
            ..Default::default()
        };
        self.write_page(INDEX_PAGE, &head, &doc)
    }

    /// Render every view reachable from the category navigator and return the
    /// number of pages written.
    pub fn write_all(&self, state: &mut ViewState) -> eyre::Result<usize> {
        let bank = &self.config.bank;
        let head = self.head()?;
        let categories = render_categories(&bank.topics, &bank.types);

        let placeholder = htmlize::escape_text(self.config.text.placeholder.as_str());
        let index = Document {
            title: &placeholder,
            categories: &categories,
            ..Default::default()
        };
        self.write_page(INDEX_PAGE, &head, &index)?;
        let mut written = 1;

        let pairs = iproduct!(bank.topics.iter().enumerate(), bank.types.iter().enumerate());
        for ((topic_index, topic), (type_index, kind)) in pairs {
            state.select(topic.as_str(), kind.as_str());
            let total_pages = self.write_view(state, (topic_index, type_index), &head, &categories)?;
            written += 1;
            for page in 2..=total_pages {
                state.go_to_page(page);
                self.write_view(state, (topic_index, type_index), &head, &categories)?;
                written += 1;
            }
        }

        Ok(written)
    }

    fn write_view(
        &self,
        state: &ViewState,
        selection: (usize, usize),
        head: &str,
        categories: &str,
    ) -> eyre::Result<usize> {
        let view = state.view().ok_or_else(|| eyre!("no topic and type selected"))?;
        let rendered = view.render(&self.config.text, self.render_options());
        let doc = Document {
            title: &rendered.title,
            categories,
            questions: &rendered.questions,
            pagination: &rendered.pagination,
            selection: Some(selection),
        };
        let name = view_page_name(selection.0, selection.1, view.page);
        self.write_page(&name, head, &doc)?;
        Ok(view.total_pages)
    }
}

// Copyright (c) 2025 Tiku Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

use itertools::Itertools;

use crate::{
    config::text::Text,
    html,
    question::Question,
    render::{
        content::{render_choice_text, render_content},
        katex_compat::disambiguate_math,
        pagination::render_pagination,
    },
};

/// Selection state over a loaded question collection.
///
/// The collection is handed over once at construction and never mutated.
/// Every call to [`ViewState::view`] recomputes the filtered page from
/// scratch.
#[derive(Debug)]
pub struct ViewState {
    questions: Vec<Question>,
    page_size: usize,
    selection: Option<(String, String)>,
    page: usize,
}

impl ViewState {
    pub fn new(questions: Vec<Question>, page_size: usize) -> Self {
        Self {
            questions,
            page_size: page_size.max(1),
            selection: None,
            page: 1,
        }
    }

    pub fn selection(&self) -> Option<(&str, &str)> {
        self.selection
            .as_ref()
            .map(|(topic, kind)| (topic.as_str(), kind.as_str()))
    }

    /// Select a topic/type pair and go back to the first page.
    pub fn select<S: Into<String>, T: Into<String>>(&mut self, topic: S, kind: T) {
        self.selection = Some((topic.into(), kind.into()));
        self.page = 1;
    }

    /// Move to `page`. The value is taken as is; only the paginator decides
    /// which pages are offered.
    pub fn go_to_page(&mut self, page: usize) {
        self.page = page;
    }

    /// `None` until something has been selected.
    pub fn view(&self) -> Option<View<'_>> {
        let (topic, kind) = self.selection()?;
        let filtered = filter_questions(&self.questions, topic, kind);
        let total = filtered.len();
        Some(View {
            topic,
            kind,
            page: self.page,
            total,
            total_pages: total_pages(total, self.page_size),
            questions: page_slice(&filtered, self.page, self.page_size).to_vec(),
        })
    }
}

/// Questions tagged with `topic` whose type is `kind`, in collection order.
pub fn filter_questions<'a>(questions: &'a [Question], topic: &str, kind: &str) -> Vec<&'a Question> {
    questions.iter().filter(|q| q.matches(topic, kind)).collect()
}

pub fn total_pages(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1)).max(1)
}

/// Records `[(page - 1) * size, min(page * size, len))`, empty for page 0 or
/// pages past the end.
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let Some(index) = page.checked_sub(1) else {
        return &[];
    };
    let start = index.saturating_mul(page_size).min(items.len());
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// The recomputed state for one selection and page.
#[derive(Debug)]
pub struct View<'a> {
    pub topic: &'a str,
    pub kind: &'a str,
    pub page: usize,
    pub total: usize,
    pub total_pages: usize,
    pub questions: Vec<&'a Question>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    pub katex_compat: bool,
}

/// The three regions of the page a view fills.
#[derive(Debug, Default)]
pub struct RenderedView {
    pub title: String,
    pub questions: String,
    pub pagination: String,
}

impl View<'_> {
    pub fn render(&self, text: &Text, options: RenderOptions) -> RenderedView {
        RenderedView {
            title: htmlize::escape_text(text.title(self.topic, self.kind, self.total)).into_owned(),
            questions: self
                .questions
                .iter()
                .map(|q| html_question(q, text, options))
                .join("\n"),
            pagination: render_pagination(self.page, self.total_pages),
        }
    }
}

pub fn html_question(question: &Question, text: &Text, options: RenderOptions) -> String {
    let math = |s: &str| match options.katex_compat {
        true => disambiguate_math(s),
        false => s.to_string(),
    };

    let heading = text.heading(
        &question.year.to_string(),
        &question.source.to_string(),
        &question.no.to_string(),
    );
    let content = render_content(&math(question.content.as_str()), &text.content_image_alt);

    let choices = question
        .choices
        .as_ref()
        .map(|choices| {
            let items = choices
                .iter()
                .map(|(label, value)| {
                    let value = render_choice_text(&math(&value.to_string()), &text.choice_image_alt);
                    html!(div class = "choice" => (html!(strong => {label} ".")) " " {value})
                })
                .join("");
            html!(div class = "choices" => {items})
        })
        .unwrap_or_default();

    html!(div class = "question" =>
      (html!(h3 => {heading}))
      (html!(div class = "content" => {content}))
      {choices})
}

// Copyright (c) 2025 Tiku Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

use camino::Utf8PathBuf;

use crate::{
    config::{self, text::Text},
    environment::{self, BuildMode},
    loader::{load_questions, DefaultFetcher},
    view::{View, ViewState},
};

#[derive(Debug, Copy, Clone, clap::ValueEnum, Default)]
pub enum ShowFormat {
    /// Title, questions and pagination as HTML fragments.
    Html,

    #[default]
    Text,
}

#[derive(clap::Args)]
pub struct ShowCommand {
    /// Topic to filter on.
    #[arg(short, long)]
    topic: String,

    /// Question type to filter on.
    #[arg(short = 'y', long = "type")]
    kind: String,

    /// Page to display.
    #[arg(short, long, default_value_t = 1)]
    page: usize,

    #[arg(short, long, value_enum, default_value_t = ShowFormat::default())]
    format: ShowFormat,

    /// Path to the configuration file (e.g., "Tiku.toml").
    #[arg(short, long, default_value_t = config::DEFAULT_CONFIG_PATH.into())]
    config: String,
}

pub fn show(command: &ShowCommand) -> eyre::Result<()> {
    environment::init_environment(Utf8PathBuf::from(&command.config), BuildMode::Build)?;
    let config = environment::get_config();

    let loaded = load_questions(&DefaultFetcher::new()?, &environment::candidates())?;
    if config.bank.topic_index(&command.topic).is_none() {
        color_print::ceprintln!("<y>Warning: `{}` is not a configured topic.</>", command.topic);
    }
    if config.bank.type_index(&command.kind).is_none() {
        color_print::ceprintln!("<y>Warning: `{}` is not a configured type.</>", command.kind);
    }

    let mut state = ViewState::new(loaded.questions, config.bank.page_size);
    state.select(command.topic.as_str(), command.kind.as_str());
    if command.page != 1 {
        state.go_to_page(command.page);
    }

    let view = state
        .view()
        .ok_or_else(|| eyre::eyre!("no topic and type selected"))?;
    if view.page == 0 || view.page > view.total_pages {
        color_print::ceprintln!(
            "<y>Warning: page {} is outside 1..={}.</>",
            view.page,
            view.total_pages
        );
    }

    match command.format {
        ShowFormat::Html => {
            let rendered = view.render(&config.text, environment::render_options());
            println!("{}", rendered.title);
            println!("{}", rendered.questions);
            println!("{}", rendered.pagination);
        }
        ShowFormat::Text => print!("{}", text_listing(&view, &config.text)),
    }
    Ok(())
}

/// Terminal rendering of a view. Image tokens and math are left as written.
pub fn text_listing(view: &View, text: &Text) -> String {
    let mut output = format!(
        "{}  [{}/{}]\n",
        text.title(view.topic, view.kind, view.total),
        view.page,
        view.total_pages
    );

    for question in &view.questions {
        let heading = text.heading(
            &question.year.to_string(),
            &question.source.to_string(),
            &question.no.to_string(),
        );
        output.push('\n');
        output.push_str(&heading);
        output.push('\n');
        if !question.content.is_empty() {
            output.push_str(&question.content);
            output.push('\n');
        }
        for (label, value) in question.choices.iter().flatten() {
            output.push_str(&format!("  {}. {}\n", label, value));
        }
    }
    output
}

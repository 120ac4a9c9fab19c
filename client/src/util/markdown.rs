//! Markdown rendering for assistant chat messages.

use pulldown_cmark::{Event, Options, Parser, html};

#[cfg(test)]
#[path = "markdown_test.rs"]
mod markdown_test;

/// Render backend markdown to HTML with GFM tables, strikethrough, and task
/// lists enabled.
///
/// Raw inline/block HTML from the model output is dropped before rendering,
/// since the result is injected via `inner_html`.
#[must_use]
pub fn render_markdown_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options).filter_map(|event| match event {
        Event::Html(_) | Event::InlineHtml(_) => None,
        other => Some(other),
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

//! Markdown rendering for diary entries.

use pulldown_cmark::{Event, Options, Parser, html};

/// Render diary Markdown to HTML.
///
/// Raw HTML in the source is shown as literal text rather than injected.
pub fn render_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
#[path = "markdown_test.rs"]
mod markdown_test;

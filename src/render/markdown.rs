//! Markdown rendering
//!
//! Body-to-markup conversion is delegated to pulldown-cmark. Heading
//! attributes stay off so no ids are injected into headings; the published
//! pages style headings without anchors.

use lazy_static::lazy_static;
use pulldown_cmark::{html, Options, Parser};
use regex::Regex;

lazy_static! {
    static ref IMG_TAG: Regex = Regex::new(r"<img\s").expect("valid image tag pattern");
}

/// Render a raw markdown body to HTML.
pub fn render(markdown: &str) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_GFM;
    let parser = Parser::new_ext(markdown, options);

    let mut output = String::new();
    html::push_html(&mut output, parser);
    output
}

/// Mark embedded images as deferred so they load off the critical path.
pub fn defer_images(content: &str) -> String {
    IMG_TAG
        .replace_all(content, r#"<img loading="lazy" decoding="async" "#)
        .to_string()
}

//! Card and tag-chip rendering

use crate::config::ViewConfig;
use crate::content::{PostSummary, TagCount};
use crate::helpers::date::display_date;
use crate::helpers::html::html_escape;
use crate::helpers::url::{index_href, post_href};

/// Project one post summary into a card fragment.
///
/// Pure: no input mutation, safe to call any number of times per post.
pub fn render_card(config: &ViewConfig, post: &PostSummary) -> String {
    let href = post_href(config, &post.identifier());
    let title = html_escape(&post.title);

    let mut html = String::from(r#"<article class="post-card">"#);

    // Thumbnail slot is always a link so the grid stays aligned.
    match &post.thumbnail {
        Some(src) => html.push_str(&format!(
            r#"<a class="post-card-thumb" href="{}"><img src="{}" alt="{}" loading="lazy"></a>"#,
            href,
            html_escape(src),
            title
        )),
        None => html.push_str(&format!(
            r#"<a class="post-card-thumb post-card-thumb-empty" href="{}"></a>"#,
            href
        )),
    }

    html.push_str(&format!(
        r#"<h2 class="post-card-title"><a href="{}">{}</a></h2>"#,
        href, title
    ));

    html.push_str(&format!(
        r#"<div class="post-card-meta"><time>{}</time>"#,
        html_escape(&display_date(&post.date))
    ));
    if let Some(minutes) = post.reading_minutes {
        html.push_str(&format!(
            r#"<span class="post-card-reading">{} min read</span>"#,
            minutes
        ));
    }
    html.push_str("</div>");

    if let Some(excerpt) = &post.excerpt {
        html.push_str(&format!(
            r#"<p class="post-card-excerpt">{}</p>"#,
            html_escape(excerpt)
        ));
    }

    html.push_str(&render_tag_links(config, &post.tags));
    html.push_str("</article>");
    html
}

/// Tag chips linking to the index filtered by each tag. Shared between cards
/// and the post page metadata row.
pub fn render_tag_links(config: &ViewConfig, tags: &[String]) -> String {
    if tags.is_empty() {
        return String::new();
    }

    let mut html = String::from(r#"<ul class="tag-list">"#);
    for tag in tags {
        html.push_str(&format!(
            r#"<li class="tag-list-item"><a class="tag-list-link" href="{}">{}</a></li>"#,
            index_href(config, Some(tag), 1),
            html_escape(tag)
        ));
    }
    html.push_str("</ul>");
    html
}

/// The navigation tag bar: an "All" chip first, then the frequency-ranked
/// entries. The chip matching `active` is marked; "All" is marked when no
/// filter is selected.
pub fn render_tag_bar(config: &ViewConfig, counts: &[TagCount], active: Option<&str>) -> String {
    let mut html = String::from(r#"<nav class="tag-bar">"#);

    let all_class = if active.is_none() {
        "tag-bar-chip active"
    } else {
        "tag-bar-chip"
    };
    html.push_str(&format!(
        r#"<a class="{}" href="{}">All</a>"#,
        all_class,
        index_href(config, None, 1)
    ));

    for entry in counts {
        let class = if active == Some(entry.tag.as_str()) {
            "tag-bar-chip active"
        } else {
            "tag-bar-chip"
        };
        html.push_str(&format!(
            r#"<a class="{}" href="{}">{}<span class="tag-bar-count">{}</span></a>"#,
            class,
            index_href(config, Some(&entry.tag), 1),
            html_escape(&entry.tag),
            entry.count
        ));
    }

    html.push_str("</nav>");
    html
}

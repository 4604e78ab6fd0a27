//! Pager strip rendering

use crate::config::ViewConfig;
use crate::helpers::url::index_href;
use crate::view::PageWindow;

/// Render the page-navigation strip for one window.
///
/// Links carry the active tag filter so navigation stays inside the filtered
/// view. Previous/next controls appear only when such a page exists; the
/// strip collapses to nothing when there is a single page.
pub fn render_pager(config: &ViewConfig, window: &PageWindow, tag: Option<&str>) -> String {
    if window.total <= 1 {
        return String::new();
    }

    let mut html = String::from(r#"<nav class="pagination">"#);

    if window.has_prev() {
        html.push_str(&format!(
            r#"<a class="pagination-prev" href="{}">&laquo; Prev</a>"#,
            index_href(config, tag, window.current - 1)
        ));
    }

    html.push_str(r#"<span class="pagination-numbers">"#);

    if window.leading_first {
        html.push_str(&number_link(config, 1, window.current, tag));
        if window.leading_gap {
            html.push_str(ellipsis());
        }
    }

    for &page in &window.numbers {
        html.push_str(&number_link(config, page, window.current, tag));
    }

    if window.trailing_last {
        if window.trailing_gap {
            html.push_str(ellipsis());
        }
        html.push_str(&number_link(config, window.total, window.current, tag));
    }

    html.push_str("</span>");

    if window.has_next() {
        html.push_str(&format!(
            r#"<a class="pagination-next" href="{}">Next &raquo;</a>"#,
            index_href(config, tag, window.current + 1)
        ));
    }

    html.push_str("</nav>");
    html
}

fn number_link(config: &ViewConfig, page: usize, current: usize, tag: Option<&str>) -> String {
    if page == current {
        format!(r#"<span class="pagination-number current">{}</span>"#, page)
    } else {
        format!(
            r#"<a class="pagination-number" href="{}">{}</a>"#,
            index_href(config, tag, page),
            page
        )
    }
}

fn ellipsis() -> &'static str {
    r#"<span class="pagination-ellipsis">&hellip;</span>"#
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pager(current: usize, total: usize) -> String {
        render_pager(
            &ViewConfig::default(),
            &PageWindow::build(current, total, 7),
            None,
        )
    }

    #[test]
    fn test_single_page_renders_nothing() {
        assert_eq!(pager(1, 1), "");
    }

    #[test]
    fn test_first_page_has_no_prev() {
        let html = pager(1, 3);
        assert!(!html.contains("pagination-prev"));
        assert!(html.contains("pagination-next"));
        assert!(html.contains(r#"<span class="pagination-number current">1</span>"#));
        // page 2 link is the bare query form, page 1 would be parameter-free
        assert!(html.contains(r#"href="/blog/?page=2""#));
    }

    #[test]
    fn test_last_page_has_no_next() {
        let html = pager(3, 3);
        assert!(html.contains("pagination-prev"));
        assert!(!html.contains("pagination-next"));
        // prev from page 3 points at page 2
        assert!(html.contains(r#"class="pagination-prev" href="/blog/?page=2""#));
    }

    #[test]
    fn test_prev_to_first_page_is_parameter_free() {
        let html = pager(2, 3);
        assert!(html.contains(r#"class="pagination-prev" href="/blog/""#));
    }

    #[test]
    fn test_window_with_gaps() {
        let html = pager(5, 10);
        // leading "1" without ellipsis, trailing ellipsis then "10"
        assert!(html.contains(r#"<a class="pagination-number" href="/blog/">1</a>"#));
        let first_gap = html.find("pagination-ellipsis");
        assert!(first_gap.is_some());
        assert!(html.contains(r#"href="/blog/?page=10""#));
        for page in 2..=8 {
            assert!(html.contains(&format!(">{}<", page)));
        }
    }

    #[test]
    fn test_links_carry_tag_filter() {
        let html = render_pager(
            &ViewConfig::default(),
            &PageWindow::build(1, 2, 7),
            Some("rust"),
        );
        assert!(html.contains(r#"href="/blog/?tag=rust&page=2""#));
    }
}

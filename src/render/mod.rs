//! Fragment rendering and the shell adapter
//!
//! Renderers are pure `data -> HTML string` projections. The only
//! platform-facing seam is [`Shell`]: the surrounding page provides named
//! insertion points, and the engine applies fragments to them without knowing
//! how insertion happens.

pub mod card;
pub mod markdown;
pub mod pager;

use indexmap::IndexMap;

use crate::helpers::html::html_escape;

/// Named insertion points the page shell is assumed to provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Tag chip bar on the index view.
    TagBar,
    /// Card grid on the index view.
    Grid,
    /// Page-navigation strip on the index view.
    Pager,
    /// Result count label on the index view.
    ResultCount,
    /// Post title field.
    Title,
    /// Post date field.
    Date,
    /// Post tag-link field.
    Tags,
    /// Post body content.
    Content,
}

/// Applies rendered fragments to the page shell.
pub trait Shell {
    fn apply(&mut self, slot: Slot, html: &str);

    /// Scroll the view back to the top after a page navigation.
    fn scroll_to_top(&mut self) {}
}

/// Shell that records applied fragments. Used by the CLI harness and tests.
#[derive(Debug, Default)]
pub struct RecordingShell {
    pub slots: IndexMap<Slot, String>,
    pub scrolls: usize,
}

impl RecordingShell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, slot: Slot) -> Option<&str> {
        self.slots.get(&slot).map(String::as_str)
    }
}

impl Shell for RecordingShell {
    fn apply(&mut self, slot: Slot, html: &str) {
        self.slots.insert(slot, html.to_string());
    }

    fn scroll_to_top(&mut self) {
        self.scrolls += 1;
    }
}

/// Inline notice substituted in place of content that failed to materialize.
pub fn notice(message: &str) -> String {
    format!(r#"<p class="notice">{}</p>"#, html_escape(message))
}

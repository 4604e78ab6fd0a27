//! View state and the address-bar capability
//!
//! The engine never reaches for an ambient "current URL". Controllers are
//! handed an [`AddressBar`] pair and recompute [`PageState`] from it on every
//! render, so clamping and window logic stay deterministic under test.

use indexmap::IndexMap;

/// View state for one index render, derived from the URL and the search box.
///
/// `query` is transient (held only in view state, never written to the URL);
/// `tag` is read from the URL and never written back by the engine; `page` is
/// both read and written. `page >= 1` always holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    pub query: String,
    pub tag: Option<String>,
    pub page: usize,
}

impl PageState {
    /// Derive state from the current URL plus the transient search query.
    ///
    /// A missing, unparsable, or out-of-range `page` parameter defaults to 1;
    /// clamping against the result set happens later, when its size is known.
    pub fn read(bar: &dyn AddressBar, query: &str) -> Self {
        let tag = bar.get("tag").filter(|t| !t.is_empty());
        let page = bar
            .get("page")
            .and_then(|p| p.parse::<usize>().ok())
            .filter(|&p| p >= 1)
            .unwrap_or(1);
        Self {
            query: query.to_string(),
            tag,
            page,
        }
    }
}

/// Read/write access to the URL query string, without page reloads.
pub trait AddressBar {
    /// Current value of a query parameter.
    fn get(&self, name: &str) -> Option<String>;

    /// Persist the page number to the URL. `None` removes the parameter,
    /// keeping the canonical first-page URL parameter-free. Other parameters
    /// are left untouched.
    fn set_page(&mut self, page: Option<usize>);
}

/// In-memory address bar, used by the CLI harness and by tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryAddressBar {
    params: IndexMap<String, String>,
}

impl MemoryAddressBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: &str, value: &str) {
        self.params.insert(name.to_string(), value.to_string());
    }

    /// The query string as it would appear in the address bar.
    pub fn query_string(&self) -> String {
        if self.params.is_empty() {
            return String::new();
        }
        let pairs: Vec<String> = self
            .params
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect();
        format!("?{}", pairs.join("&"))
    }
}

impl AddressBar for MemoryAddressBar {
    fn get(&self, name: &str) -> Option<String> {
        self.params.get(name).cloned()
    }

    fn set_page(&mut self, page: Option<usize>) {
        match page {
            Some(p) => {
                self.params.insert("page".to_string(), p.to_string());
            }
            None => {
                self.params.shift_remove("page");
            }
        }
    }
}

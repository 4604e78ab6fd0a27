//! View state, search filtering, and pagination math

pub mod pager;
pub mod search;
pub mod state;

pub use pager::PageWindow;
pub use state::{AddressBar, MemoryAddressBar, PageState};

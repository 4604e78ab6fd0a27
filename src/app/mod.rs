//! Page controllers

pub mod index;
pub mod post;

pub use index::IndexPage;
pub use post::PostPage;

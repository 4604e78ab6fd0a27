//! Helper functions shared by the renderers and controllers

pub mod date;
pub mod html;
pub mod url;

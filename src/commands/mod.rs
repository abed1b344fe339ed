//! Terminal front-end commands
//!
//! Each submodule implements one user-facing action over the shared
//! session; presentation (progress bar, styled output, localized messages)
//! lives here and nowhere below.

pub mod download;
pub mod history;
pub mod languages;
pub mod set_language;
pub mod translate;

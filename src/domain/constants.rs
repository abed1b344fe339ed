//! Domain constants shared across the client
//!
//! Values fixed by the backend contract and the PO file format, kept in one
//! place so the upload rules and artifact naming stay in sync.

/// Localization file characteristics
pub mod po_file {
    /// Required file extension, matched as a case-sensitive suffix
    pub const PO_EXTENSION: &str = ".po";
}

/// Language selection defaults used when the user has not chosen anything
pub mod languages {
    /// Pseudo-code asking the backend to auto-detect the source language
    pub const AUTO_SOURCE: &str = "auto";

    /// Default translation target
    pub const DEFAULT_TARGET: &str = "hr";
}

pub use languages::{AUTO_SOURCE, DEFAULT_TARGET};
pub use po_file::PO_EXTENSION;

//! Errors raised while building a pager or handling its configuration.
//!
//! Navigation and window queries never fail; degenerate states are reported
//! through `changed == false` and the `(-1, -1, -1)` sentinel instead.

/// Errors that can occur when constructing or configuring a pager.
#[derive(Debug, thiserror::Error)]
pub enum PagerError {
    #[error("page height must be at least 1")]
    ZeroHeight,

    #[error("failed to access pager config: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid pager config: {0}")]
    ParseConfig(#[from] toml::de::Error),

    #[error("failed to serialize pager config: {0}")]
    SerializeConfig(#[from] toml::ser::Error),

    #[error("unknown display style '{0}' (expected fixed-page, top-anchored or bottom-anchored)")]
    UnknownStyle(String),

    #[error("unknown motion '{0}' (expected next, prev, page-down or page-up)")]
    UnknownMotion(String),
}

pub type Result<T> = std::result::Result<T, PagerError>;

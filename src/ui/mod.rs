//! User interface module - operator-facing output.
//!
//! The tools run unattended in CI, so there are no prompts; everything is
//! reported through the `formatter` functions.

pub mod formatter;

pub use formatter::{
    display_block, display_error, display_link, display_status, display_success,
    display_warning, whitespace_summary,
};

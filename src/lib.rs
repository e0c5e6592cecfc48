pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod index;
pub mod switcher;
pub mod symlinks;
pub mod ui;
pub mod warning;
pub mod whitespace;

pub use domain::{DocVersion, VersionCatalog};
pub use error::{DocVersionsError, Result};

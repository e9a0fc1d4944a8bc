//! Library components of the `ags` command-line validator.

pub mod logging;
pub mod settings;
pub mod summary;

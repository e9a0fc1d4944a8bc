//! AGS4 validation.
//!
//! Checks run in three rule sets:
//!
//! - **Raw text**: encoding, line endings, descriptors, field counts, quoting
//! - **Parsed data**: naming, duplicate headings, field schemas
//! - **Dictionary**: required groups, code lists, keys, parents, record links
//!
//! ```ignore
//! use ags_validate::{RuleConfig, validate};
//!
//! let report = validate(&text, Default::default(), &RuleConfig::all_enabled())?;
//! for issue in &report.issues {
//!     println!("{issue}");
//! }
//! ```

mod checks;
mod config;
mod engine;
mod error;
mod report;
pub mod schema;
mod util;

pub use config::{RuleConfig, ValidationConfig};
pub use engine::{validate, validate_with_dictionary, validate_with_version};
pub use error::{Result, ValidateError};
pub use report::ValidationReport;
pub use schema::{FieldSchema, GroupSchema};
pub use util::TranSettings;

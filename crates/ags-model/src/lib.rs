pub mod document;
pub mod error;
pub mod issue;
pub mod rule;

pub use document::{Document, Group, Heading, Row};
pub use error::{ModelError, Result};
pub use issue::{Issue, Severity};
pub use rule::{RuleId, RuleSet};

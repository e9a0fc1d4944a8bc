#![deny(unsafe_code)]

//! AGS4 standard dictionaries.
//!
//! The published dictionaries are embedded at compile time, pinned by
//! SHA-256 in `data/manifest.toml` and parsed on first use:
//!
//! ```ignore
//! use ags_standards::{DictionaryVersion, dictionary};
//!
//! let standard = dictionary(DictionaryVersion::default())?;
//! assert_eq!(standard.parent_group("SAMP"), Some("LOCA"));
//! ```

pub mod dictionary;
pub mod embedded;
pub mod error;
pub mod hash;
pub mod manifest;
pub mod registry;
pub mod version;

pub use crate::dictionary::{
    DICT_GROUP, Dictionary, GroupDefinition, HeadingDefinition, HeadingStatus, Origin,
};
pub use crate::error::{Result, StandardsError};
pub use crate::registry::{dictionary, dictionary_by_name, load};
pub use crate::version::DictionaryVersion;

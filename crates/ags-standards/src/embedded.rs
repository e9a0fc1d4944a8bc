//! Embedded standard dictionaries.
//!
//! Each pinned dictionary is embedded at compile time using `include_str!()`
//! and verified against `data/manifest.toml` on first load.
//!
//! # Adding a new version
//!
//! 1. Place the AGS file under `data/<version>/`.
//! 2. Add a `[[files]]` entry with its sha256 to `data/manifest.toml`.
//! 3. Add a `DictionaryVersion` variant and a match arm in [`asset`].

use crate::version::DictionaryVersion;

/// Manifest pinning every embedded dictionary by checksum.
pub const MANIFEST: &str = include_str!("../data/manifest.toml");

/// AGS4 v4.0.3 standard dictionary
pub const DICTIONARY_V4_0_3: &str =
    include_str!("../data/v4_0_3/Standard_dictionary_v4_0_3.ags");

/// AGS4 v4.0.4 standard dictionary
pub const DICTIONARY_V4_0_4: &str =
    include_str!("../data/v4_0_4/Standard_dictionary_v4_0_4.ags");

/// AGS4 v4.1 standard dictionary
pub const DICTIONARY_V4_1: &str = include_str!("../data/v4_1/Standard_dictionary_v4_1.ags");

/// AGS4 v4.1.1 standard dictionary
pub const DICTIONARY_V4_1_1: &str =
    include_str!("../data/v4_1_1/Standard_dictionary_v4_1_1.ags");

/// Embedded text for a dictionary version.
pub fn asset(version: DictionaryVersion) -> &'static str {
    match version {
        DictionaryVersion::V4_0_3 => DICTIONARY_V4_0_3,
        DictionaryVersion::V4_0_4 => DICTIONARY_V4_0_4,
        DictionaryVersion::V4_1 => DICTIONARY_V4_1,
        DictionaryVersion::V4_1_1 => DICTIONARY_V4_1_1,
    }
}

#![deny(unsafe_code)]

use std::sync::OnceLock;

use tracing::debug;

use crate::dictionary::Dictionary;
use crate::embedded;
use crate::error::Result;
use crate::manifest::Manifest;
use crate::version::DictionaryVersion;

/// Load and verify a standard dictionary from the embedded assets.
///
/// The asset's checksum is compared against the embedded manifest before it
/// is parsed. Prefer [`dictionary`], which caches the result.
pub fn load(version: DictionaryVersion) -> Result<Dictionary> {
    let manifest = Manifest::parse(embedded::MANIFEST)?;
    let entry = manifest.entry(version)?;
    let text = embedded::asset(version);
    entry.verify(text)?;

    let document = ags_ingest::parse(text);
    let dictionary = Dictionary::from_document(version, &document)?;
    debug!(
        version = %version,
        path = %entry.path,
        groups = dictionary.group_count(),
        headings = dictionary.heading_count(),
        "loaded standard dictionary"
    );
    Ok(dictionary)
}

/// Shared, read-only standard dictionary for a version.
///
/// Each version is loaded at most once per process.
pub fn dictionary(version: DictionaryVersion) -> Result<&'static Dictionary> {
    let cell = cell(version);
    if let Some(dictionary) = cell.get() {
        return Ok(dictionary);
    }
    let loaded = load(version)?;
    Ok(cell.get_or_init(|| loaded))
}

/// Look up a dictionary by version name ("v4_1_1" or "4.1.1").
pub fn dictionary_by_name(name: &str) -> Result<&'static Dictionary> {
    dictionary(name.parse()?)
}

fn cell(version: DictionaryVersion) -> &'static OnceLock<Dictionary> {
    static V4_0_3: OnceLock<Dictionary> = OnceLock::new();
    static V4_0_4: OnceLock<Dictionary> = OnceLock::new();
    static V4_1: OnceLock<Dictionary> = OnceLock::new();
    static V4_1_1: OnceLock<Dictionary> = OnceLock::new();
    match version {
        DictionaryVersion::V4_0_3 => &V4_0_3,
        DictionaryVersion::V4_0_4 => &V4_0_4,
        DictionaryVersion::V4_1 => &V4_1,
        DictionaryVersion::V4_1_1 => &V4_1_1,
    }
}

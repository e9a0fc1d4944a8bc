#![deny(unsafe_code)]

use serde::{Deserialize, Serialize};
use crate::error::{Result, StandardsError};
use crate::hash::sha256_hex;
use crate::version::DictionaryVersion;

const SCHEMA: &str = "ags-validator.dictionary-manifest";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub manifest: ManifestHeader,
    pub files: Vec<ManifestFile>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestHeader {
    pub schema: String,
    pub schema_version: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestFile {
    pub version: DictionaryVersion,
    pub path: String,
    pub sha256: String,
}

impl Manifest {
    pub fn parse(contents: &str) -> Result<Self> {
        let manifest: Manifest =
            toml::from_str(contents).map_err(|source| StandardsError::Toml { source })?;
        manifest.validate()?;
        Ok(manifest)
    }

    pub fn entry(&self, version: DictionaryVersion) -> Result<&ManifestFile> {
        self.files
            .iter()
            .find(|f| f.version == version)
            .ok_or_else(|| StandardsError::MissingEntry {
                version: version.to_string(),
            })
    }

    fn validate(&self) -> Result<()> {
        if self.manifest.schema != SCHEMA {
            return Err(StandardsError::InvalidManifest {
                message: format!("unsupported schema: {}", self.manifest.schema),
            });
        }
        if self.manifest.schema_version != 1 {
            return Err(StandardsError::InvalidManifest {
                message: format!(
                    "unsupported schema_version: {}",
                    self.manifest.schema_version
                ),
            });
        }
        let mut seen = Vec::new();
        for file in &self.files {
            if seen.contains(&file.version) {
                return Err(StandardsError::InvalidManifest {
                    message: format!("duplicate entry for {}", file.version),
                });
            }
            seen.push(file.version);
            validate_sha(&file.sha256, &file.path)?;
        }
        Ok(())
    }
}

impl ManifestFile {
    /// Check embedded content against the pinned checksum.
    pub fn verify(&self, contents: &str) -> Result<()> {
        let actual = sha256_hex(contents.as_bytes());
        let expected = self.sha256.to_ascii_lowercase();
        if actual != expected {
            return Err(StandardsError::Sha256Mismatch {
                path: self.path.clone(),
                expected,
                actual,
            });
        }
        Ok(())
    }
}

fn validate_sha(sha: &str, path: &str) -> Result<()> {
    if sha.len() != 64 || !sha.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(StandardsError::InvalidSha256 {
            path: path.to_string(),
            message: "sha256 must be 64 hex characters".to_string(),
        });
    }
    Ok(())
}

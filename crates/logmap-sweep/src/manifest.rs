use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use chrono::Utc;
use logmap_core::errors::ErrorInfo;
use logmap_core::{LogmapError, RunProvenance, SchemaVersion, SweepConfig};
use serde::{Deserialize, Serialize};

use crate::hash::stable_hash_string;
use crate::recorder::TablePaths;

/// Structured manifest describing a completed sweep and its artifacts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SweepManifest {
    /// Schema version of the manifest payload.
    pub schema_version: SchemaVersion,
    /// Configuration used for the sweep.
    pub config: SweepConfig,
    /// Provenance stamped when the manifest was built.
    pub provenance: RunProvenance,
    /// Table files per computation path label (relative to the manifest).
    pub tables: BTreeMap<String, TablePaths>,
}

impl SweepManifest {
    /// Builds a manifest for the given configuration with fresh provenance.
    pub fn new(config: SweepConfig) -> Result<Self, LogmapError> {
        let provenance = provenance_for(&config)?;
        Ok(Self {
            schema_version: SchemaVersion::default(),
            config,
            provenance,
            tables: BTreeMap::new(),
        })
    }

    /// Registers the table files written for one computation path.
    pub fn insert_tables(&mut self, label: impl Into<String>, paths: TablePaths) {
        self.tables.insert(label.into(), paths);
    }

    /// Writes the manifest to a JSON file.
    pub fn write(&self, path: &Path) -> Result<(), LogmapError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|err| {
                LogmapError::Serde(
                    ErrorInfo::new("manifest-mkdir", err.to_string())
                        .with_context("path", parent.display().to_string()),
                )
            })?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|err| {
            LogmapError::Serde(
                ErrorInfo::new("manifest-serialize", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })?;
        fs::write(path, json).map_err(|err| {
            LogmapError::Serde(
                ErrorInfo::new("manifest-write", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })
    }

    /// Loads a manifest from disk.
    pub fn load(path: &Path) -> Result<Self, LogmapError> {
        let contents = fs::read_to_string(path).map_err(|err| {
            LogmapError::Serde(
                ErrorInfo::new("manifest-read", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })?;
        serde_json::from_str(&contents).map_err(|err| {
            LogmapError::Serde(
                ErrorInfo::new("manifest-parse", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })
    }
}

/// Stamps provenance for a sweep about to run under `config`.
pub fn provenance_for(config: &SweepConfig) -> Result<RunProvenance, LogmapError> {
    let mut tool_versions = BTreeMap::new();
    tool_versions.insert(
        "logmap-sweep".to_string(),
        env!("CARGO_PKG_VERSION").to_string(),
    );
    Ok(RunProvenance {
        config_hash: stable_hash_string(config)?,
        created_at: Utc::now().to_rfc3339(),
        tool_versions,
    })
}

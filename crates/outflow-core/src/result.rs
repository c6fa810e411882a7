//! Release-result model.
//!
//! Mirrors the JSON shape the release engine produces. Fields the engine
//! may omit are defaulted or optional; `nextRelease.version` is required,
//! so a next release without a version is rejected during
//! deserialization.

use serde::Deserialize;

use crate::PublishResult;

/// The result of a release run.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseResult {
    /// The most recent previously published release.
    #[serde(default)]
    pub last_release: LastRelease,

    /// Commits included in the run. Only the count is used.
    #[serde(default)]
    pub commits: Vec<Commit>,

    /// The release published by this run, if any.
    #[serde(default)]
    pub next_release: Option<NextRelease>,

    /// Per-plugin release records, used for diagnostics only.
    #[serde(default)]
    pub releases: Vec<PluginRelease>,
}

impl ReleaseResult {
    /// Deserializes a release result from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a present
    /// `nextRelease` lacks a `version`.
    pub fn from_json(json: &str) -> PublishResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// The previously published release.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LastRelease {
    /// Version of the release.
    pub version: String,

    /// Commit id the release points at.
    pub git_head: String,

    /// Tag of the release.
    pub git_tag: String,
}

/// The newly published release.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NextRelease {
    /// Version of the release. Required.
    pub version: String,

    /// Bump type, e.g. `"major"`, `"minor"` or `"patch"`.
    #[serde(rename = "type")]
    pub release_type: Option<String>,

    /// Distribution channel.
    #[serde(default)]
    pub channel: Option<String>,

    /// Release notes.
    #[serde(default)]
    pub notes: Option<String>,

    /// Commit id of the release.
    #[serde(default)]
    pub git_head: Option<String>,

    /// Tag of the release.
    #[serde(default)]
    pub git_tag: Option<String>,
}

/// A commit record. Opaque, only counted.
#[derive(Debug, Clone, Deserialize)]
pub struct Commit(pub serde_json::Value);

/// A release record produced by one plugin.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginRelease {
    /// Name of the plugin that published the release.
    #[serde(default)]
    pub plugin_name: Option<String>,
}

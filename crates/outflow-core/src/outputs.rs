//! Fixed output-name mapping.
//!
//! The names consumers see are kept in one place, an embedded JSON
//! resource, rather than inlined at emit sites.

use serde::Deserialize;

use crate::PublishResult;

/// The embedded output-name resource.
const OUTPUTS_JSON: &str = include_str!("../assets/outputs.json");

/// The fixed set of output names the publisher emits.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputNames {
    /// Version of the last release.
    pub last_release_version: String,

    /// Commit id the last release points at.
    pub last_release_git_head: String,

    /// Tag of the last release.
    pub last_release_git_tag: String,

    /// `"true"` when a new release was published.
    pub new_release_published: String,

    /// Version of the new release.
    pub new_release_version: String,

    /// Major segment of the new release version.
    pub new_release_major_version: String,

    /// Minor segment of the new release version.
    pub new_release_minor_version: String,

    /// Patch segment of the new release version.
    pub new_release_patch_version: String,

    /// Distribution channel of the new release.
    pub new_release_channel: String,

    /// Release notes of the new release.
    pub new_release_notes: String,

    /// Commit id of the new release.
    pub new_release_git_head: String,

    /// Tag of the new release.
    pub new_release_git_tag: String,
}

impl OutputNames {
    /// Loads the output names from the embedded resource.
    ///
    /// Intended to be called once at process start.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded resource is malformed.
    pub fn load() -> PublishResult<Self> {
        Ok(serde_json::from_str(OUTPUTS_JSON)?)
    }
}

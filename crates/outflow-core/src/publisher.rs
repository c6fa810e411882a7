//! The output publisher.

use outflow_git::Repository;
use tracing::debug;

use crate::{OutputNames, OutputSink, PublishResult, ReleaseResult, VersionTriple};

/// Publishes the outcome of a release run as named outputs.
pub struct Publisher<'a, S> {
    sink: &'a mut S,
    names: &'a OutputNames,
}

impl<'a, S: OutputSink> Publisher<'a, S> {
    /// Creates a publisher writing to the given sink.
    pub fn new(sink: &'a mut S, names: &'a OutputNames) -> Self {
        Self { sink, names }
    }

    /// Publishes outputs for the given release result.
    ///
    /// With no result, the last-release outputs are derived from the
    /// repository's tags instead; tag queries that fail degrade to empty
    /// values and are never surfaced. With a result, the last-release
    /// outputs come from the result, and the `new_release_*` outputs are
    /// emitted only when a next release is present.
    ///
    /// # Errors
    ///
    /// Returns an error only if the sink fails.
    pub fn publish(
        &mut self,
        result: Option<ReleaseResult>,
        repo: Option<&Repository>,
    ) -> PublishResult<()> {
        let names = self.names;

        let Some(result) = result else {
            debug!("no release result, falling back to git for last release info");

            let tag = latest_tag_or_empty(repo);
            let commit = tag_commit_or_empty(repo, &tag);

            self.sink.set(&names.last_release_version, &tag)?;
            self.sink.set(&names.last_release_git_head, &commit)?;
            self.sink.set(&names.last_release_git_tag, &tag)?;
            return Ok(());
        };

        let ReleaseResult {
            last_release,
            commits,
            next_release,
            releases,
        } = result;

        self.sink
            .set(&names.last_release_version, &last_release.version)?;
        self.sink
            .set(&names.last_release_git_head, &last_release.git_head)?;
        self.sink
            .set(&names.last_release_git_tag, &last_release.git_tag)?;

        if !last_release.version.is_empty() {
            debug!(version = %last_release.version, "found last release");
        }

        let Some(next) = next_release else {
            debug!("no release published");
            return Ok(());
        };

        debug!(
            release_type = next.release_type.as_deref().unwrap_or_default(),
            version = %next.version,
            commits = commits.len(),
            "published release"
        );

        for release in &releases {
            debug!(
                plugin = release.plugin_name.as_deref().unwrap_or_default(),
                "release published by plugin"
            );
        }

        let triple = VersionTriple::parse(&next.version);

        self.sink.set(&names.new_release_published, "true")?;
        self.sink.set(&names.new_release_version, &next.version)?;
        self.sink
            .set(&names.new_release_major_version, &triple.major)?;
        self.sink
            .set(&names.new_release_minor_version, &triple.minor)?;
        self.sink
            .set(&names.new_release_patch_version, &triple.patch)?;
        self.sink.set(
            &names.new_release_channel,
            next.channel.as_deref().unwrap_or_default(),
        )?;
        self.sink.set(
            &names.new_release_notes,
            next.notes.as_deref().unwrap_or_default(),
        )?;
        self.sink.set(
            &names.new_release_git_head,
            next.git_head.as_deref().unwrap_or_default(),
        )?;
        self.sink.set(
            &names.new_release_git_tag,
            next.git_tag.as_deref().unwrap_or_default(),
        )?;

        Ok(())
    }
}

/// Most recent tag reachable from HEAD, or empty on any failure.
fn latest_tag_or_empty(repo: Option<&Repository>) -> String {
    repo.and_then(|r| r.latest_tag().ok()).unwrap_or_default()
}

/// Commit id for a tag, or empty when the tag is empty or the lookup
/// fails.
fn tag_commit_or_empty(repo: Option<&Repository>, tag: &str) -> String {
    if tag.is_empty() {
        return String::new();
    }
    repo.and_then(|r| r.tag_commit(tag).ok()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LastRelease, MemorySink, NextRelease};
    use git2::{Repository as Git2Repository, Signature};
    use tempfile::TempDir;

    fn names() -> OutputNames {
        OutputNames::load().unwrap()
    }

    fn publish(result: Option<ReleaseResult>, repo: Option<&Repository>) -> MemorySink {
        let names = names();
        let mut sink = MemorySink::new();
        Publisher::new(&mut sink, &names)
            .publish(result, repo)
            .unwrap();
        sink
    }

    fn create_test_repo() -> (TempDir, Git2Repository) {
        let temp_dir = TempDir::new().unwrap();
        let repo = Git2Repository::init(temp_dir.path()).unwrap();

        let mut config = repo.config().unwrap();
        config.set_str("user.name", "Test User").unwrap();
        config.set_str("user.email", "test@example.com").unwrap();

        (temp_dir, repo)
    }

    fn create_commit(repo: &Git2Repository, message: &str) -> git2::Oid {
        let sig = Signature::now("Test User", "test@example.com").unwrap();
        let tree_id = {
            let mut index = repo.index().unwrap();
            index.write_tree().unwrap()
        };
        let tree = repo.find_tree(tree_id).unwrap();

        let parent = repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&git2::Commit<'_>> = parent.iter().collect();

        repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .unwrap()
    }

    #[test]
    fn test_no_result_no_repo_emits_empty_last_release() {
        let sink = publish(None, None);

        assert_eq!(sink.get("last_release_version"), Some(""));
        assert_eq!(sink.get("last_release_git_head"), Some(""));
        assert_eq!(sink.get("last_release_git_tag"), Some(""));
        assert_eq!(sink.outputs().len(), 3);
    }

    #[test]
    fn test_no_result_untagged_repo_emits_empty_last_release() {
        let (temp_dir, git2_repo) = create_test_repo();
        create_commit(&git2_repo, "Initial commit");
        let repo = Repository::open(temp_dir.path()).unwrap();

        let sink = publish(None, Some(&repo));

        assert_eq!(sink.get("last_release_version"), Some(""));
        assert_eq!(sink.get("last_release_git_head"), Some(""));
        assert_eq!(sink.get("last_release_git_tag"), Some(""));
        assert_eq!(sink.outputs().len(), 3);
    }

    #[test]
    fn test_no_result_tagged_repo_emits_tag_and_commit() {
        let (temp_dir, git2_repo) = create_test_repo();
        let oid = create_commit(&git2_repo, "Initial commit");
        let head = git2_repo.head().unwrap().peel_to_commit().unwrap();
        git2_repo
            .tag_lightweight("v1.2.3", head.as_object(), false)
            .unwrap();

        let repo = Repository::open(temp_dir.path()).unwrap();
        let sink = publish(None, Some(&repo));

        assert_eq!(sink.get("last_release_version"), Some("v1.2.3"));
        assert_eq!(sink.get("last_release_git_head"), Some(oid.to_string().as_str()));
        assert_eq!(sink.get("last_release_git_tag"), Some("v1.2.3"));

        // Version and tag always agree on the fallback path.
        assert_eq!(
            sink.get("last_release_version"),
            sink.get("last_release_git_tag")
        );
        assert_eq!(sink.outputs().len(), 3);
    }

    #[test]
    fn test_result_without_next_release() {
        let result = ReleaseResult {
            last_release: LastRelease {
                version: "1.0.0".to_string(),
                git_head: "h1".to_string(),
                git_tag: "t1".to_string(),
            },
            ..ReleaseResult::default()
        };

        let sink = publish(Some(result), None);

        assert_eq!(sink.get("last_release_version"), Some("1.0.0"));
        assert_eq!(sink.get("last_release_git_head"), Some("h1"));
        assert_eq!(sink.get("last_release_git_tag"), Some("t1"));
        assert_eq!(sink.get("new_release_published"), None);
        assert_eq!(sink.outputs().len(), 3);
    }

    #[test]
    fn test_result_with_next_release() {
        let json = r#"{
            "lastRelease": {},
            "commits": [{"hash": "c1"}, {"hash": "c2"}],
            "nextRelease": {
                "version": "2.1.0-beta",
                "type": "minor",
                "channel": "beta",
                "notes": "N",
                "gitHead": "h2",
                "gitTag": "t2"
            },
            "releases": [{"pluginName": "p1"}]
        }"#;
        let result = ReleaseResult::from_json(json).unwrap();

        let sink = publish(Some(result), None);

        assert_eq!(sink.get("last_release_version"), Some(""));
        assert_eq!(sink.get("last_release_git_head"), Some(""));
        assert_eq!(sink.get("last_release_git_tag"), Some(""));

        assert_eq!(sink.get("new_release_published"), Some("true"));
        assert_eq!(sink.get("new_release_version"), Some("2.1.0-beta"));
        assert_eq!(sink.get("new_release_major_version"), Some("2"));
        assert_eq!(sink.get("new_release_minor_version"), Some("1"));
        assert_eq!(sink.get("new_release_patch_version"), Some("0"));
        assert_eq!(sink.get("new_release_channel"), Some("beta"));
        assert_eq!(sink.get("new_release_notes"), Some("N"));
        assert_eq!(sink.get("new_release_git_head"), Some("h2"));
        assert_eq!(sink.get("new_release_git_tag"), Some("t2"));
        assert_eq!(sink.outputs().len(), 12);
    }

    #[test]
    fn test_next_release_optional_fields_emit_empty() {
        let result = ReleaseResult {
            next_release: Some(NextRelease {
                version: "1.0.0".to_string(),
                release_type: None,
                channel: None,
                notes: None,
                git_head: None,
                git_tag: None,
            }),
            ..ReleaseResult::default()
        };

        let sink = publish(Some(result), None);

        assert_eq!(sink.get("new_release_published"), Some("true"));
        assert_eq!(sink.get("new_release_channel"), Some(""));
        assert_eq!(sink.get("new_release_notes"), Some(""));
        assert_eq!(sink.get("new_release_git_head"), Some(""));
        assert_eq!(sink.get("new_release_git_tag"), Some(""));
    }
}

//! Git repository wrapper.

use std::path::Path;

use git2::{DescribeFormatOptions, DescribeOptions, ErrorCode, Repository as Git2Repo};
use tracing::debug;

use crate::{GitError, GitResult};

/// A Git repository wrapper.
pub struct Repository {
    inner: Git2Repo,
}

impl Repository {
    /// Opens a repository at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is not a valid Git repository.
    pub fn open(path: impl AsRef<Path>) -> GitResult<Self> {
        let path = path.as_ref();
        let inner = Git2Repo::open(path).map_err(|_| GitError::NotARepo(path.to_path_buf()))?;
        Ok(Self { inner })
    }

    /// Discovers the repository from the current directory.
    ///
    /// # Errors
    ///
    /// Returns an error if no repository is found.
    pub fn discover() -> GitResult<Self> {
        let inner = Git2Repo::discover(".")?;
        Ok(Self { inner })
    }

    /// Returns the repository root path.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.inner.workdir().unwrap_or_else(|| self.inner.path())
    }

    /// Returns the most recent tag reachable from HEAD.
    ///
    /// Uses describe semantics with a zero-length abbreviation, so the
    /// result is the bare tag name.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::NoTags`] if no tag is reachable, or an error if
    /// HEAD cannot be resolved.
    pub fn latest_tag(&self) -> GitResult<String> {
        let mut opts = DescribeOptions::new();
        opts.describe_tags();

        let describe = self.inner.describe(&opts).map_err(|e| {
            if e.code() == ErrorCode::NotFound {
                GitError::NoTags
            } else {
                GitError::Git2(e)
            }
        })?;

        let mut format = DescribeFormatOptions::new();
        format.abbreviated_size(0);

        let tag = describe.format(Some(&format))?;
        debug!(%tag, "resolved latest tag");
        Ok(tag)
    }

    /// Returns the id of the commit a tag ultimately points at.
    ///
    /// Annotated tags are peeled to their target commit.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::TagNotFound`] if the tag does not exist.
    pub fn tag_commit(&self, tag: &str) -> GitResult<String> {
        let reference = self
            .inner
            .resolve_reference_from_short_name(tag)
            .map_err(|_| GitError::TagNotFound(tag.to_string()))?;

        let commit = reference
            .peel_to_commit()
            .map_err(|_| GitError::TagNotFound(tag.to_string()))?;

        Ok(commit.id().to_string())
    }
}

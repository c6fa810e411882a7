//! Core library for Outflow.
//!
//! This crate translates the result of a release run into the named
//! outputs a CI pipeline consumes: the release-result model, the fixed
//! output-name mapping, the output sinks, and the publisher that ties
//! them together.

mod error;
mod outputs;
mod publisher;
mod result;
mod sink;
mod version;

pub use error::{PublishError, PublishResult};
pub use outputs::OutputNames;
pub use publisher::Publisher;
pub use result::{Commit, LastRelease, NextRelease, PluginRelease, ReleaseResult};
pub use sink::{GithubOutputFile, MemorySink, OutputSink};
pub use version::VersionTriple;

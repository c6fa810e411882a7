//! Git abstraction layer for Outflow.
//!
//! This crate provides the two read-only queries the publisher needs:
//! - Most recent tag reachable from HEAD
//! - Commit id a tag points at

mod error;
mod repository;

pub use error::{GitError, GitResult};
pub use repository::Repository;

//! CLI commands.

pub mod publish;

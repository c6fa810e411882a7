//! Publish command.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use tracing::debug;

use outflow_core::{GithubOutputFile, MemorySink, OutputNames, Publisher, ReleaseResult};
use outflow_git::Repository;

/// Arguments for the publish command.
#[derive(Debug, Args)]
pub struct PublishArgs {
    /// Path to the release result JSON (`-` for stdin). Omit when the
    /// release run produced no result.
    #[arg(short, long)]
    pub result: Option<PathBuf>,

    /// File to append outputs to, in the CI system's key=value format
    #[arg(long, env = "GITHUB_OUTPUT")]
    pub github_output: Option<PathBuf>,

    /// Repository used for last-release fallback queries
    #[arg(long, default_value = ".")]
    pub repo: PathBuf,

    /// Print outputs to stdout instead of writing the output file
    #[arg(long)]
    pub dry_run: bool,
}

/// Runs the publish command.
#[allow(clippy::needless_pass_by_value)]
pub fn run(args: PublishArgs) -> Result<()> {
    let names = OutputNames::load().context("failed to load output names")?;

    // The single blocking fetch of the release result.
    let result = args
        .result
        .as_deref()
        .map(read_result)
        .transpose()
        .context("failed to read release result")?;

    // The repository is only consulted on the no-result path, where every
    // query failure degrades to an empty output.
    let repo = Repository::open(&args.repo).ok();
    if repo.is_none() {
        debug!(path = %args.repo.display(), "no repository found");
    }

    if args.dry_run {
        let mut sink = MemorySink::new();
        Publisher::new(&mut sink, &names).publish(result, repo.as_ref())?;

        for (name, value) in sink.outputs() {
            println!("{name}={value}");
        }
        return Ok(());
    }

    let path = args
        .github_output
        .context("--github-output or the GITHUB_OUTPUT environment variable is required")?;
    let mut sink = GithubOutputFile::append(&path)
        .with_context(|| format!("failed to open output file {}", path.display()))?;

    Publisher::new(&mut sink, &names).publish(result, repo.as_ref())?;

    Ok(())
}

/// Reads the release result from a file or stdin.
fn read_result(path: &Path) -> Result<ReleaseResult> {
    let content = if path == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read stdin")?;
        buffer
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?
    };

    Ok(ReleaseResult::from_json(&content)?)
}

use std::path::Path;
use std::process::Command;

use anyhow::{bail, Context, Result};

/// Run a git subcommand in `repo_dir`, capturing both output streams.
///
/// Arguments are passed as a discrete vector, never a shell string. On exit
/// code 0 the trimmed stdout is returned. A non-zero exit or a failure to
/// launch git becomes an error carrying the full command line together with
/// whatever git printed, so callers can surface it verbatim. No retries; the
/// caller decides whether the failure aborts the run.
pub fn run_git(repo_dir: &Path, args: &[&str]) -> Result<String> {
    let output = Command::new("git")
        .args(args)
        .current_dir(repo_dir)
        .output()
        .with_context(|| format!("failed to launch `git {}`", args.join(" ")))?;

    if !output.status.success() {
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!(
            "`git {}` failed{}: {}",
            args.join(" "),
            match output.status.code() {
                Some(code) => format!(" (exit code {code})"),
                None => String::new(),
            },
            [stdout.trim(), stderr.trim()]
                .iter()
                .filter(|s| !s.is_empty())
                .copied()
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

use std::path::Path;

use anyhow::{bail, Result};
use console::style;

use crate::git_cli::run_git;

const SSH_PREFIX: &str = "git@github.com:";
const HTTPS_PREFIX: &str = "https://github.com/";

/// Classification of an `origin` remote URL.
#[derive(Debug, PartialEq)]
pub enum RemoteUrl {
    /// Already the `git@github.com:` form; nothing to do.
    Ssh,
    /// GitHub HTTPS form; carries the equivalent SSH URL.
    Https(String),
    /// Any other host or scheme; never rewritten.
    Unrecognized,
}

/// Classify a remote URL and, for the GitHub HTTPS form, compute its SSH
/// equivalent. At most one trailing `.git` suffix is stripped before the
/// suffix is re-added, so a `.git` embedded in the repository name survives.
pub fn classify(url: &str) -> RemoteUrl {
    if url.starts_with(SSH_PREFIX) {
        return RemoteUrl::Ssh;
    }

    match url.strip_prefix(HTTPS_PREFIX) {
        Some(path) => {
            let path = path.strip_suffix(".git").unwrap_or(path);
            RemoteUrl::Https(format!("{SSH_PREFIX}{path}.git"))
        }
        None => RemoteUrl::Unrecognized,
    }
}

/// Rewrite the `origin` remote to its SSH form when it is a GitHub HTTPS
/// URL. Errors here are reported by the caller as a warning only; the sync
/// still runs against whatever remote is configured.
pub fn ensure_ssh_remote(repo_dir: &Path) -> Result<()> {
    let url = run_git(repo_dir, &["remote", "get-url", "origin"])?;

    match classify(&url) {
        RemoteUrl::Ssh => {
            println!("Remote already uses SSH: {url}");
            Ok(())
        }
        RemoteUrl::Https(ssh_url) => {
            run_git(repo_dir, &["remote", "set-url", "origin", &ssh_url])?;
            println!(
                "{} Remote URL switched to SSH: {}",
                style("✓").green().bold(),
                style(&ssh_url).cyan()
            );
            Ok(())
        }
        RemoteUrl::Unrecognized => bail!("unrecognized remote URL format: {url}"),
    }
}

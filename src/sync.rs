use std::path::Path;

use anyhow::{bail, Context, Result};
use chrono::Local;
use console::style;
use git2::Repository;

use crate::git_cli::run_git;
use crate::remote;

const COMMIT_PREFIX: &str = "自动提交: ";

/// Run the full sync sequence against `repo_dir`, pushing to `branch` on
/// `origin`. Returns Ok both when a commit was pushed and when the tree was
/// already clean; any fatal step failure surfaces as an error and leaves
/// earlier steps applied (a staged-but-uncommitted or committed-but-unpushed
/// state is never rolled back).
pub fn run(repo_dir: &Path, branch: &str) -> Result<()> {
    if !repo_dir.exists() {
        bail!("directory does not exist: {}", repo_dir.display());
    }
    Repository::open(repo_dir)
        .with_context(|| format!("{} is not a git repository", repo_dir.display()))?;

    // Remote misconfiguration degrades the run instead of aborting it; the
    // push still goes to whatever origin points at.
    if let Err(e) = remote::ensure_ssh_remote(repo_dir) {
        eprintln!(
            "{} Could not configure SSH remote ({e:#}), continuing anyway",
            style("⚠").yellow().bold()
        );
    }

    let status = run_git(repo_dir, &["status", "--porcelain"])
        .context("failed to check the working tree status")?;
    if status.is_empty() {
        println!("No changes detected, nothing to commit");
        return Ok(());
    }

    println!(
        "Changes detected, committing {} to branch {}...",
        style(repo_dir.display()).cyan(),
        style(branch).cyan()
    );

    run_git(repo_dir, &["add", "."]).context("failed to stage changes")?;

    let message = format!("{COMMIT_PREFIX}{}", Local::now().format("%Y-%m-%d %H:%M:%S"));
    run_git(repo_dir, &["commit", "-q", "-m", &message]).context("failed to commit changes")?;

    if let Err(e) = run_git(repo_dir, &["push", "-q", "origin", branch]) {
        eprintln!("{} Push failed, check the following:", style("✗").red().bold());
        eprintln!("1. Make sure your SSH key is added to GitHub");
        eprintln!("2. Test the SSH connection: ssh -T git@github.com");
        eprintln!("3. Try pushing manually once: git push origin {branch}");
        eprintln!("4. If the problem persists, see https://github.com/settings/keys");
        return Err(e);
    }

    let commit_hash = run_git(repo_dir, &["rev-parse", "--short", "HEAD"])
        .context("failed to read the pushed commit hash")?;
    println!(
        "{} Sync complete, latest commit: {}",
        style("✓").green().bold(),
        style(&commit_hash).cyan()
    );

    Ok(())
}

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

#[derive(Parser)]
#[command(name = "gitsync")]
#[command(about = "Stage, commit, and push pending changes in one git repository")]
pub struct Cli {
    /// Path to the git repository (default: ~/notes)
    #[arg(short, long)]
    pub dir: Option<PathBuf>,

    /// Branch to push to on origin
    #[arg(short, long, default_value = "main")]
    pub branch: String,
}

impl Cli {
    /// Resolve the target repository path, defaulting to `notes` under the
    /// user's home directory. A leading `~` in a supplied path is expanded,
    /// covering a tilde quoted past the shell.
    pub fn repo_dir(&self) -> Result<PathBuf> {
        match &self.dir {
            Some(dir) => expand_tilde(dir),
            None => Ok(home_dir()?.join("notes")),
        }
    }
}

fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().context("could not determine the home directory")
}

fn expand_tilde(path: &Path) -> Result<PathBuf> {
    match path.strip_prefix("~") {
        Ok(rest) => Ok(home_dir()?.join(rest)),
        Err(_) => Ok(path.to_path_buf()),
    }
}

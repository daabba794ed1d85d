mod cli;
mod git_cli;
mod remote;
mod sync;
mod test_utils;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    let result = cli.repo_dir().and_then(|dir| sync::run(&dir, &cli.branch));

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

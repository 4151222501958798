//! CLI argument parsing and run dispatch

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use hugo_multiversion::config::{Config, DEFAULT_CONTENT_DIR};
use hugo_multiversion::materializer::ContentMaterializer;

/// Build a Hugo content/ directory from documents kept on different
/// branches of a single git repository
#[derive(Parser, Debug)]
#[command(name = "hugo-multiversion")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Git repository URL of the repository containing a content/ directory
    #[arg(long, value_name = "URL", env = "MULTIVERSION_REPO_URL", default_value = "")]
    repo_url: String,

    /// Path to the content directory in the source repository. This must be
    /// the same on all branches
    #[arg(
        long,
        value_name = "PATH",
        env = "MULTIVERSION_REPO_CONTENT_DIR",
        default_value = DEFAULT_CONTENT_DIR
    )]
    repo_content_dir: String,

    /// Output content/ directory
    #[arg(
        long,
        value_name = "PATH",
        env = "MULTIVERSION_OUTPUT_DIR",
        default_value = DEFAULT_CONTENT_DIR
    )]
    output_dir: String,

    /// Branch to publish as the 'latest' version
    #[arg(long, value_name = "BRANCH", env = "MULTIVERSION_LATEST_BRANCH", default_value = "")]
    latest_branch: String,

    /// version=branch pairs that should be included in the generated content/ directory
    #[arg(
        long,
        value_name = "VERSION=BRANCH",
        env = "MULTIVERSION_BRANCHES",
        value_delimiter = ','
    )]
    branches: Vec<String>,

    /// Do not clean up the temporary directory, and show git output
    #[arg(long)]
    debug: bool,
}

impl Cli {
    /// Turn the parsed flags into a validated `Config`.
    pub fn into_config(self) -> hugo_multiversion::error::Result<Config> {
        let mut branches = self.branches;
        // An empty flag value splits into a single empty token; treat it as no branches.
        if branches.len() == 1 && branches[0].is_empty() {
            branches.clear();
        }

        let config = Config {
            repo_url: self.repo_url,
            repo_content_dir: PathBuf::from(self.repo_content_dir),
            output_dir: PathBuf::from(self.output_dir),
            latest_branch: Some(self.latest_branch).filter(|b| !b.is_empty()),
            branches,
            debug: self.debug,
        };
        config.validate()?;
        Ok(config)
    }

    /// Execute the run
    pub fn execute(self) -> Result<()> {
        let config = self.into_config()?;
        ContentMaterializer::new(&config).run()?;
        Ok(())
    }
}

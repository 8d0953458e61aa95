use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Check project manifests for vulnerable dependencies
#[derive(Parser, Debug)]
#[command(name = "dependency-analytics")]
#[command(version)]
#[command(
    about = "Check package.json, pom.xml, go.mod and requirements.txt manifests for vulnerable dependencies",
    long_about = None
)]
pub struct Args {
    /// Path to a config file (defaults to ./dependency-analytics.config.yml when present)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Scanning engine program, overriding engine.program from the config file
    #[arg(long, global = true, value_name = "PROGRAM")]
    pub engine: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Analyze a single manifest and print the result as JSON
    Analyze {
        /// Manifest to analyze (package.json, pom.xml, go.mod or requirements.txt)
        manifest: PathBuf,

        /// Output file path (if not specified, outputs to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Read editor events as JSON lines from stdin and publish analyses on stdout
    Serve,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

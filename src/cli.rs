use clap::Parser;
use std::path::PathBuf;

/// Merge two Netscape bookmark export files into one, preserving folder
/// hierarchy and deduplicating links by URL within each folder.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// First bookmark export file (its titles win on URL conflicts)
    #[arg(name = "FILE1")]
    pub file1: PathBuf,

    /// Second bookmark export file
    #[arg(name = "FILE2")]
    pub file2: PathBuf,

    /// Merged output file
    #[arg(name = "OUTPUT")]
    pub output: PathBuf,

    /// Parse inputs with a real HTML parser instead of the tolerant line scan
    #[arg(long)]
    pub strict: bool,
}

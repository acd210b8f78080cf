mod cli;
mod error;
mod import_export;
mod models;
mod operations;

use clap::Parser;
use error::Result;

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    // Initialize logger
    env_logger::init();

    println!("Parsing {}...", args.file1.display());
    let first = import_export::import_bookmarks(&args.file1, args.strict)?;
    println!("Found {} folders in first file.", first.folder_count());

    println!("Parsing {}...", args.file2.display());
    let second = import_export::import_bookmarks(&args.file2, args.strict)?;
    println!("Found {} folders in second file.", second.folder_count());

    println!("Merging...");
    let merged = operations::merge(&first, &second);
    log::debug!("merged tree holds {} folder entries", merged.folder_count());

    println!("Writing merged bookmarks to {}...", args.output.display());
    import_export::export_bookmarks(&merged, &args.output)?;
    println!("Done.");

    Ok(())
}

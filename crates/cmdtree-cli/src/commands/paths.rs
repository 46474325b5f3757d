//! Paths command
//!
//! Usage: cmdtree paths --resource <FILE>

use clap::Args;
use cmdtree_core::walk;
use std::path::PathBuf;

use super::read_resource;

#[derive(Debug, Args)]
pub struct PathsArgs {
    /// Command resource (YAML, or JSON with a .json extension)
    #[arg(short, long)]
    pub resource: PathBuf,
}

/// Execute paths command
pub fn execute(args: PathsArgs) -> Result<(), Box<dyn std::error::Error>> {
    let resource = read_resource(&args.resource)?;
    let tree = resource.command_tree()?;

    let mut paths = walk(&tree);
    paths.sort();

    for path in paths {
        println!("{}", path);
    }

    Ok(())
}

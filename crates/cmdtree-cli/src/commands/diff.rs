//! Diff command
//!
//! Usage: cmdtree diff <PREVIOUS> <NEXT>
//!
//! Both inputs are `cmdtree compile` outputs; only descriptor ids are read.

use clap::Args;
use cmdtree_core::diff_ids;
use serde::Deserialize;
use std::path::PathBuf;

use super::read_document;

#[derive(Debug, Args)]
pub struct DiffArgs {
    /// Earlier compilation output
    pub previous: PathBuf,

    /// Later compilation output
    pub next: PathBuf,
}

#[derive(Debug, Deserialize)]
struct CompilationIds {
    descriptors: Vec<DescriptorId>,
}

#[derive(Debug, Deserialize)]
struct DescriptorId {
    id: String,
}

impl CompilationIds {
    fn into_ids(self) -> impl Iterator<Item = String> {
        self.descriptors.into_iter().map(|d| d.id)
    }
}

/// Execute diff command
pub fn execute(args: DiffArgs) -> Result<(), Box<dyn std::error::Error>> {
    let previous: CompilationIds = read_document(&args.previous)?;
    let next: CompilationIds = read_document(&args.next)?;

    let diff = diff_ids(previous.into_ids(), next.into_ids());
    println!("{}", serde_json::to_string_pretty(&diff)?);

    Ok(())
}

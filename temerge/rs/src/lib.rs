//! Command line front end: merges per-sample TE insertion and deletion calls into one table.
//!
//! Each binary parses its arguments with [`cli`] into a validated configuration from [`config`]
//! and hands it to the matching `run_*` function. Input files are independent of each other and
//! are loaded in parallel, but merging always sees them in the order they were given.

use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};
use log::info;
use rayon::prelude::*;
use temerge_core_rs::{Deletion, Insertion};
use temerge_io_rs::deletion::Layout;
use temerge_io_rs::{deletion, insertion, ParsePolicy, ReadRecord, WriteRecord};
use temerge_merge_rs::{flip_deletions, merge_deletions, reduce, Reduction};

pub mod cli;
pub mod config;

pub use config::{DeletionsConfig, FlipConfig, InsertionsConfig};

fn read_all<R: ReadRecord>(mut reader: R, path: &Path) -> Result<Vec<R::Record>> {
    let mut records = Vec::new();
    reader
        .read_to_end(&mut records)
        .wrap_err_with(|| format!("Failed to load {}", path.display()))?;
    Ok(records)
}

/// Load per-sample insertion files, one list per file in argument order.
pub fn load_insertions(paths: &[PathBuf], policy: ParsePolicy) -> Result<Vec<Vec<Insertion>>> {
    paths
        .par_iter()
        .map(|path| {
            let reader = insertion::Reader::from_path(path, policy)?;
            let records = read_all(reader, path)?;
            info!("Loaded {} insertions from {}", records.len(), path.display());
            Ok(records)
        })
        .collect()
}

/// Load deletion files of the given layout, one list per file in argument order.
pub fn load_deletions(
    paths: &[PathBuf],
    layout: Layout,
    policy: ParsePolicy,
) -> Result<Vec<Vec<Deletion>>> {
    paths
        .par_iter()
        .map(|path| {
            let reader = deletion::Reader::from_path(path, layout, policy)?;
            let records = read_all(reader, path)?;
            info!("Loaded {} deletions from {}", records.len(), path.display());
            Ok(records)
        })
        .collect()
}

pub fn run_insertions(config: &InsertionsConfig) -> Result<Reduction> {
    info!(
        "Merging insertions from {} files (flanks: {})",
        config.inputs.len(),
        config.flanks
    );
    let lists = load_insertions(&config.inputs, config.policy)?;
    let reduction = reduce(lists, config.flanks);

    let mut writer = insertion::Writer::from_path(&config.output)?;
    writer.write_records(reduction.records())?;
    writer.flush()?;

    info!(
        "Wrote {} insertions ({} merged) to {}",
        reduction.records().len(),
        reduction.merged(),
        config.output.display()
    );
    Ok(reduction)
}

/// Merge raw deletion calls. Returns the number of written records.
pub fn run_deletions(config: &DeletionsConfig) -> Result<usize> {
    let lists = load_deletions(&config.inputs, Layout::Raw, config.policy)?;
    let (records, merged) = merge_deletions(lists);

    let mut writer = deletion::Writer::from_path(&config.output, Layout::Merged)?;
    writer.write_records(&records)?;
    writer.flush()?;

    info!(
        "Wrote {} deletions ({} merged) to {}",
        records.len(),
        merged,
        config.output.display()
    );
    Ok(records.len())
}

/// Flip merged deletions into TE carriers. Returns the number of written records.
pub fn run_flip(config: &FlipConfig) -> Result<usize> {
    let reader = deletion::Reader::from_path(&config.deletions, Layout::Merged, config.policy)?;
    let deletions = read_all(reader, &config.deletions)?;
    let flipped = flip_deletions(deletions, &config.samples, &config.reference);

    let mut writer = deletion::Writer::from_path(&config.output, Layout::Flipped)?;
    writer.write_records(&flipped)?;
    writer.flush()?;

    info!(
        "Wrote {} flipped deletions to {}",
        flipped.len(),
        config.output.display()
    );
    Ok(flipped.len())
}

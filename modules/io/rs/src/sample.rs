use eyre::{ensure, OptionExt, Result};
use std::path::Path;

const COMPRESSION_EXTENSIONS: &[&str] = &["gz", "gzip", "bgz"];

/// Sample identifiers encoded in a file name.
///
/// The compression extension (if any) and then the last remaining extension are removed, and
/// the rest is split on whitespace: `Col-0.bed.gz` gives `["Col-0"]`, while `Col 0.bed` gives
/// `["Col", "0"]`. Leading dots are part of the name (`.bed` stays `.bed`).
pub fn sample_ids_from_path(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let mut name = path
        .file_name()
        .and_then(|x| x.to_str())
        .ok_or_eyre(format!("Can't read a file name from {}", path.display()))?;

    if let Some((stem, ext)) = name.rsplit_once('.') {
        if !stem.is_empty() && COMPRESSION_EXTENSIONS.contains(&ext) {
            name = stem;
        }
    }
    if let Some((stem, _)) = name.rsplit_once('.') {
        if !stem.is_empty() {
            name = stem;
        }
    }

    let ids: Vec<String> = name.split_whitespace().map(str::to_owned).collect();
    ensure!(
        !ids.is_empty(),
        "Can't derive a sample identifier from {}",
        path.display()
    );
    Ok(ids)
}

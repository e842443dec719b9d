use std::path::PathBuf;

use clap::Parser;
use eyre::{ensure, OptionExt, Result};
use temerge_core_rs::loc::Flanks;
use temerge_io_rs::ParsePolicy;

use crate::config::{DeletionsConfig, FlipConfig, InsertionsConfig};

fn policy(lenient: bool) -> ParsePolicy {
    if lenient {
        ParsePolicy::Lenient
    } else {
        ParsePolicy::Strict
    }
}

fn inputs(paths: Vec<PathBuf>) -> Result<Vec<PathBuf>> {
    ensure!(
        paths.len() >= 2,
        "At least two input files are required (--input), got {}",
        paths.len()
    );
    Ok(paths)
}

fn output(path: Option<PathBuf>) -> Result<PathBuf> {
    let path = path.ok_or_eyre("Output file is required (--outFile)")?;
    ensure!(
        !path.as_os_str().is_empty(),
        "Output file path must not be empty (--outFile)"
    );
    Ok(path)
}

#[derive(Debug, Parser)]
#[command(
    name = "merge-insertions",
    version,
    about = "Merge TE insertion calls from several samples into one table"
)]
pub struct InsertionsArgs {
    #[arg(
        long = "input",
        value_name = "PATH",
        help = "Insertion calls of one sample (repeat for every sample, the first file seeds the merge)"
    )]
    pub input: Vec<PathBuf>,

    #[arg(long = "outFile", value_name = "PATH", help = "Output file path")]
    pub out_file: Option<PathBuf>,

    #[arg(
        long = "extendLeftFlank",
        value_name = "BP",
        default_value_t = 0,
        allow_negative_numbers = true,
        help = "Extension of the master insertion end when testing overlap"
    )]
    pub extend_left_flank: i64,

    #[arg(
        long = "extendRightFlank",
        value_name = "BP",
        default_value_t = 100,
        allow_negative_numbers = true,
        help = "Extension of the candidate insertion end when testing overlap"
    )]
    pub extend_right_flank: i64,

    #[arg(
        long = "lenient",
        help = "Read malformed coordinates as 0 (with a warning) instead of failing"
    )]
    pub lenient: bool,
}

impl InsertionsArgs {
    pub fn config(self) -> Result<InsertionsConfig> {
        Ok(InsertionsConfig {
            inputs: inputs(self.input)?,
            output: output(self.out_file)?,
            flanks: Flanks::new(self.extend_left_flank, self.extend_right_flank),
            policy: policy(self.lenient),
        })
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "merge-deletions",
    version,
    about = "Merge identical TE deletion calls from several samples"
)]
pub struct DeletionsArgs {
    #[arg(
        long = "input",
        value_name = "PATH",
        help = "Deletion calls of one sample (repeat for every sample)"
    )]
    pub input: Vec<PathBuf>,

    #[arg(long = "outFile", value_name = "PATH", help = "Output file path")]
    pub out_file: Option<PathBuf>,

    #[arg(
        long = "lenient",
        help = "Read malformed coordinates as 0 (with a warning) instead of failing"
    )]
    pub lenient: bool,
}

impl DeletionsArgs {
    pub fn config(self) -> Result<DeletionsConfig> {
        Ok(DeletionsConfig {
            inputs: inputs(self.input)?,
            output: output(self.out_file)?,
            policy: policy(self.lenient),
        })
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "flip-deletions",
    version,
    about = "Invert merged TE deletions into the samples that carry each TE"
)]
pub struct FlipArgs {
    #[arg(
        long = "samples",
        value_name = "NAME",
        num_args = 1..,
        help = "Names of all samples"
    )]
    pub samples: Vec<String>,

    #[arg(long = "deletions", value_name = "PATH", help = "Merged deletion calls")]
    pub deletions: Option<PathBuf>,

    #[arg(
        long = "reference",
        value_name = "NAME",
        help = "Name of the reference sample, e.g. Col-0"
    )]
    pub reference: Option<String>,

    #[arg(long = "outFile", value_name = "PATH", help = "Output file path")]
    pub out_file: Option<PathBuf>,

    #[arg(
        long = "lenient",
        help = "Read malformed coordinates as 0 (with a warning) instead of failing"
    )]
    pub lenient: bool,
}

impl FlipArgs {
    pub fn config(self) -> Result<FlipConfig> {
        ensure!(
            !self.samples.is_empty(),
            "At least one sample name is required (--samples)"
        );
        let deletions = self
            .deletions
            .ok_or_eyre("Merged deletions are required (--deletions)")?;
        let reference = self
            .reference
            .filter(|x| !x.trim().is_empty())
            .ok_or_eyre("Reference sample name is required (--reference)")?;

        Ok(FlipConfig {
            samples: self.samples,
            deletions,
            reference,
            output: output(self.out_file)?,
            policy: policy(self.lenient),
        })
    }
}

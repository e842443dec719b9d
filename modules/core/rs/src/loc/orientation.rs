use std::fmt::Display;

use eyre::{bail, Report, Result};

/// Strand of a call as written in tab-delimited TE files
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(i8)]
pub enum Orientation {
    /// Forward strand, written as `+`.
    Forward,
    /// Reverse strand, written as `-`.
    Reverse,
    /// Unknown or both strands, written as `.`.
    #[default]
    Dual,
}

impl Orientation {
    /// Symbolic representation used in the tab-delimited formats.
    pub fn symbol(&self) -> char {
        match self {
            Orientation::Forward => '+',
            Orientation::Reverse => '-',
            Orientation::Dual => '.',
        }
    }
}

impl Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl TryFrom<&str> for Orientation {
    type Error = Report;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "+" => Ok(Orientation::Forward),
            "-" => Ok(Orientation::Reverse),
            "." => Ok(Orientation::Dual),
            _ => bail!("Invalid strand: {}", value),
        }
    }
}

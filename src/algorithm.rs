use std::fmt::{Display, Formatter};
use std::str::FromStr;

use anyhow::anyhow;

/// Sorting algorithm applied to each batch.
///
/// One algorithm is selected per run; the choice is fixed configuration, not
/// negotiated per batch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Algorithm {
    /// Parallel merge sort with depth gated fork/join recursion
    Merge,
    /// Parallel quicksort, Lomuto partition with a last element pivot.
    /// Presorted and reverse sorted batches take quadratic time and recurse
    /// about as deep as the batch is long. Prefer [Algorithm::Merge] when
    /// the input may arrive already sorted
    Quicksort,
    /// Sequential least significant digit radix sort
    Radix,
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Algorithm::Merge => {
                write!(f, "merge")
            }
            Algorithm::Quicksort => {
                write!(f, "quicksort")
            }
            Algorithm::Radix => {
                write!(f, "radix")
            }
        }
    }
}

impl FromStr for Algorithm {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Algorithm, Self::Err> {
        match s {
            "merge" => Ok(Algorithm::Merge),
            "quicksort" => Ok(Algorithm::Quicksort),
            "radix" => Ok(Algorithm::Radix),
            other => Err(anyhow!("Unknown algorithm: {}, expected merge, quicksort or radix", other)),
        }
    }
}

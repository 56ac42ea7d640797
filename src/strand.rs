//! Strand orientation for genomic placements and features.

use std::fmt;

/// Strand orientation of a genomic placement or feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strand {
    Forward,
    Reverse,
}

impl Strand {
    /// Decode an Ensembl strand sign. 1 is forward; everything else is reverse.
    #[must_use]
    pub fn from_ensembl(sign: i64) -> Self {
        if sign == 1 {
            Self::Forward
        } else {
            Self::Reverse
        }
    }

    #[must_use]
    pub fn is_reverse(self) -> bool {
        self == Self::Reverse
    }
}

impl fmt::Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Forward => write!(f, "forward"),
            Self::Reverse => write!(f, "reverse"),
        }
    }
}

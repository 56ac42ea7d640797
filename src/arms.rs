//! Homology-arm window arithmetic around a transcript's coding start.

use std::fmt;

use crate::error::Error;
use crate::feature::{GenomicFeature, select_coding_start};
use crate::strand::Strand;
use crate::transcript::TranscriptRecord;

/// Arm length used when a run does not specify one.
pub const DEFAULT_ARM_LENGTH: i64 = 50;

/// One genomic window, rendered as `chromosome:start-end`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArmWindow {
    pub chromosome: String,
    pub start: i64,
    pub end: i64,
}

impl fmt::Display for ArmWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}-{}", self.chromosome, self.start, self.end)
    }
}

/// The two homology arms flanking a coding start, left arm first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomologyArmPair {
    pub left: ArmWindow,
    pub right: ArmWindow,
}

/// Computes both arm windows around the coding start of `feature`.
///
/// Forward-strand windows flank the feature's genomic start. Reverse-strand
/// windows flank its genomic end and carry the fixed -2/-3 shifts used for
/// reverse-strand designs.
pub fn compute_arms(
    feature: &GenomicFeature,
    chromosome: &str,
    strand: Strand,
    arm_length: i64,
) -> Result<HomologyArmPair, Error> {
    if arm_length <= 0 {
        return Err(Error::Validation(format!(
            "arm length must be positive, got {arm_length}"
        )));
    }

    let anchor = if strand.is_reverse() {
        feature.genomic_end
    } else {
        feature.genomic_start
    };
    if anchor < 1 {
        return Err(Error::Validation(format!(
            "arm windows must flank a 1-based position, got {anchor}"
        )));
    }
    // With a 1-based anchor, only `anchor + arm_length` can leave the i64 range.
    if anchor.checked_add(arm_length).is_none() {
        return Err(Error::Validation(format!(
            "arm length {arm_length} overflows the window past position {anchor}"
        )));
    }

    let window = |start: i64, end: i64| ArmWindow {
        chromosome: chromosome.to_string(),
        start,
        end,
    };

    let pair = if strand.is_reverse() {
        HomologyArmPair {
            left: window(anchor - arm_length - 2, anchor - 3),
            right: window(anchor - 2, anchor + arm_length - 3),
        }
    } else {
        HomologyArmPair {
            left: window(anchor - arm_length, anchor - 1),
            right: window(anchor, anchor + arm_length - 1),
        }
    };

    Ok(pair)
}

/// Resolves the homology arms around `record`'s coding start.
///
/// Fails when the record has no usable placement, or when none of `features`
/// is a coding segment of the record's transcript. Never returns a partial
/// result.
pub fn n_terminal_arms(
    record: &TranscriptRecord,
    features: &[GenomicFeature],
    arm_length: i64,
) -> Result<HomologyArmPair, Error> {
    let placement = record
        .placement
        .as_ref()
        .ok_or_else(|| Error::NoPlacement(record.transcript_id.clone()))?;

    let coding_start = select_coding_start(features, &record.transcript_id, placement.strand)?;

    compute_arms(
        coding_start,
        &placement.chromosome,
        placement.strand,
        arm_length,
    )
}

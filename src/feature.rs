//! Genomic feature rows and coding-start selection.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::strand::Strand;

/// Feature kinds the arm computation cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureKind {
    Exon,
    CodingSegment,
}

impl FromStr for FeatureKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "exon" => Ok(Self::Exon),
            "cds" => Ok(Self::CodingSegment),
            _ => Err(Error::Parse(format!("unsupported feature kind: '{s}'"))),
        }
    }
}

impl fmt::Display for FeatureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exon => write!(f, "exon"),
            Self::CodingSegment => write!(f, "cds"),
        }
    }
}

/// One already-decoded annotation row tied to a parent transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenomicFeature {
    pub parent_transcript_id: String,
    pub kind: FeatureKind,
    /// 1-based inclusive.
    pub genomic_start: i64,
    /// 1-based inclusive.
    pub genomic_end: i64,
}

/// Returns the features of `transcript_id` with the requested kind,
/// preserving input order.
#[must_use]
pub fn transcript_features<'a>(
    features: &'a [GenomicFeature],
    transcript_id: &str,
    kind: FeatureKind,
) -> Vec<&'a GenomicFeature> {
    features
        .iter()
        .filter(|f| f.kind == kind && f.parent_transcript_id == transcript_id)
        .collect()
}

/// Selects the transcription-first coding segment of a transcript.
///
/// Coding segments are ordered by genomic start, ascending on the forward
/// strand and descending on the reverse strand, and the first one is the
/// coding start. The sort is stable, so equal starts keep input order.
pub fn select_coding_start<'a>(
    features: &'a [GenomicFeature],
    transcript_id: &str,
    strand: Strand,
) -> Result<&'a GenomicFeature, Error> {
    let mut coding = transcript_features(features, transcript_id, FeatureKind::CodingSegment);
    if coding.is_empty() {
        return Err(Error::NoCodingStart(transcript_id.to_string()));
    }

    if strand.is_reverse() {
        coding.sort_by(|a, b| b.genomic_start.cmp(&a.genomic_start));
    } else {
        coding.sort_by(|a, b| a.genomic_start.cmp(&b.genomic_start));
    }

    Ok(coding[0])
}

//! Transcript sequence records and their staged construction.

use std::fmt;

use log::warn;

use crate::complement::reverse_complement;
use crate::ensembl::SequenceResponse;
use crate::placement::{Coordinates, Placement};

/// An immutable transcript sequence record.
///
/// Construction derives as much as the inputs allow: a malformed placement
/// description or an unknown base downgrades to a warning and leaves the
/// affected optional fields unset. Readers see `Option`s, never sentinels.
#[derive(Debug, Clone)]
pub struct TranscriptRecord {
    /// Transcript sequence, 5'→3' in transcript orientation.
    pub sequence: Vec<u8>,
    pub transcript_id: String,
    pub molecule: String,
    pub version: u32,
    /// Raw placement description, kept verbatim.
    pub description: Option<String>,
    pub placement: Option<Placement>,
    pub coordinates: Option<Coordinates>,
    /// Reverse complement of `sequence`. Populated only for reverse-strand
    /// records; a forward-strand sequence already reads 5'→3' on the
    /// reference.
    pub reference_sequence: Option<Vec<u8>>,
}

impl TranscriptRecord {
    /// Builds a record from explicit field values, deriving placement, span
    /// metrics and reference sequence where the inputs allow.
    #[must_use]
    pub fn new(
        sequence: Vec<u8>,
        transcript_id: String,
        molecule: String,
        version: u32,
        description: Option<String>,
    ) -> Self {
        let placement = match &description {
            Some(desc) => match desc.parse::<Placement>() {
                Ok(placement) => Some(placement),
                Err(e) => {
                    warn!("{transcript_id}: placement left unset: {e}");
                    None
                }
            },
            None => {
                warn!("{transcript_id}: no placement description; placement left unset");
                None
            }
        };

        let coordinates = placement.as_ref().map(Coordinates::from_span);

        let reference_sequence = placement.as_ref().and_then(|placement| {
            if !placement.strand.is_reverse() {
                return None;
            }
            match reverse_complement(&sequence) {
                Ok(product) => Some(product),
                Err(e) => {
                    warn!("{transcript_id}: reference sequence left unset: {e}");
                    None
                }
            }
        });

        Self {
            sequence,
            transcript_id,
            molecule,
            version,
            description,
            placement,
            coordinates,
            reference_sequence,
        }
    }

    /// Builds a record from a decoded Ensembl sequence payload.
    #[must_use]
    pub fn from_response(response: SequenceResponse) -> Self {
        Self::new(
            response.seq.into_bytes(),
            response.id,
            response.molecule,
            response.version,
            response.desc,
        )
    }
}

impl fmt::Display for TranscriptRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.description {
            Some(desc) => write!(f, "{} - {desc}", self.transcript_id),
            None => write!(f, "{} - <no placement description>", self.transcript_id),
        }
    }
}

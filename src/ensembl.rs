//! Decoded shapes of saved Ensembl REST payloads.
//!
//! The crate never talks to the REST service itself; payloads are saved to
//! disk upstream and decoded here.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;

use crate::error::Error;
use crate::feature::{FeatureKind, GenomicFeature};

/// The `sequence/id/<transcript>` payload.
#[derive(Debug, Clone, Deserialize)]
pub struct SequenceResponse {
    pub seq: String,
    pub id: String,
    pub molecule: String,
    pub version: u32,
    pub desc: Option<String>,
}

/// One row of the `overlap/id/<transcript>?feature=exon;feature=cds` payload.
#[derive(Debug, Clone, Deserialize)]
pub struct OverlapFeature {
    #[serde(rename = "Parent")]
    pub parent: Option<String>,
    pub feature_type: String,
    pub start: i64,
    pub end: i64,
}

/// Decodes a saved sequence payload.
pub fn read_sequence<R: Read>(reader: R) -> Result<SequenceResponse, Error> {
    Ok(serde_json::from_reader(reader)?)
}

/// Decodes a saved sequence payload from a file.
pub fn read_sequence_file(path: &Path) -> Result<SequenceResponse, Error> {
    read_sequence(BufReader::new(File::open(path)?))
}

/// Decodes a saved overlap payload, a JSON array of feature rows.
pub fn read_overlap<R: Read>(reader: R) -> Result<Vec<OverlapFeature>, Error> {
    Ok(serde_json::from_reader(reader)?)
}

/// Decodes a saved overlap payload from a file.
pub fn read_overlap_file(path: &Path) -> Result<Vec<OverlapFeature>, Error> {
    read_overlap(BufReader::new(File::open(path)?))
}

/// Converts overlap rows into genomic features.
///
/// Overlap responses interleave rows the arm computation never uses (genes,
/// UTRs, rows with no parent); those are dropped without error.
#[must_use]
pub fn collect_features(rows: &[OverlapFeature]) -> Vec<GenomicFeature> {
    rows.iter()
        .filter_map(|row| {
            let kind: FeatureKind = row.feature_type.parse().ok()?;
            let parent = row.parent.as_ref()?;
            Some(GenomicFeature {
                parent_transcript_id: parent.clone(),
                kind,
                genomic_start: row.start,
                genomic_end: row.end,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEQUENCE_JSON: &str = r#"{
        "seq": "ATGCGC",
        "id": "ENST00000288602",
        "molecule": "dna",
        "version": 11,
        "desc": "chromosome:GRCh38:7:140719327:140924929:-1",
        "query": "ENST00000288602"
    }"#;

    #[test]
    fn decodes_sequence_payload() {
        let response = read_sequence(SEQUENCE_JSON.as_bytes()).unwrap();
        assert_eq!(response.id, "ENST00000288602");
        assert_eq!(response.seq, "ATGCGC");
        assert_eq!(response.molecule, "dna");
        assert_eq!(response.version, 11);
        assert!(response.desc.unwrap().starts_with("chromosome:GRCh38:7"));
    }

    #[test]
    fn sequence_payload_without_desc() {
        let json = r#"{"seq": "AT", "id": "ENST01", "molecule": "dna", "version": 1}"#;
        let response = read_sequence(json.as_bytes()).unwrap();
        assert!(response.desc.is_none());
    }

    #[test]
    fn malformed_payload_is_an_error() {
        assert!(read_sequence(&b"not json"[..]).is_err());
        assert!(read_overlap(&b"{}"[..]).is_err());
    }

    #[test]
    fn decodes_overlap_rows() {
        let json = r#"[
            {"Parent": "ENST01", "feature_type": "exon", "start": 100, "end": 199, "strand": -1},
            {"Parent": "ENST01", "feature_type": "cds", "start": 150, "end": 199},
            {"feature_type": "gene", "start": 1, "end": 5000}
        ]"#;
        let rows = read_overlap(json.as_bytes()).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].parent.as_deref(), Some("ENST01"));
        assert_eq!(rows[0].feature_type, "exon");
        assert!(rows[2].parent.is_none());
    }

    #[test]
    fn collect_keeps_exons_and_coding_segments_only() {
        let json = r#"[
            {"Parent": "ENST01", "feature_type": "exon", "start": 100, "end": 199},
            {"Parent": "ENST01", "feature_type": "cds", "start": 150, "end": 199},
            {"Parent": "ENSG01", "feature_type": "gene", "start": 1, "end": 5000},
            {"Parent": "ENST01", "feature_type": "five_prime_UTR", "start": 100, "end": 149},
            {"feature_type": "exon", "start": 300, "end": 399}
        ]"#;
        let rows = read_overlap(json.as_bytes()).unwrap();
        let features = collect_features(&rows);

        assert_eq!(features.len(), 2);
        assert_eq!(features[0].kind, FeatureKind::Exon);
        assert_eq!(features[0].parent_transcript_id, "ENST01");
        assert_eq!(features[1].kind, FeatureKind::CodingSegment);
        assert_eq!(features[1].genomic_start, 150);
    }
}

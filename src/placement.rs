//! Genomic placement descriptions and normalized span metrics.
//!
//! Ensembl sequence payloads describe where a transcript sits with a
//! colon-delimited string, e.g. `chromosome:GRCh38:7:140719327:140924929:-1`.

use std::str::FromStr;

use crate::error::Error;
use crate::strand::Strand;

/// Where a transcript sequence sits on a reference assembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    /// Free-form assembly name; non-human assemblies are valid input.
    pub reference_assembly: String,
    pub chromosome: String,
    /// 1-based inclusive.
    pub genomic_left: i64,
    /// 1-based inclusive.
    pub genomic_right: i64,
    pub strand: Strand,
}

impl FromStr for Placement {
    type Err = Error;

    /// Parses `<kind>:<assembly>:<chromosome>:<left>:<right>:<strand sign>`.
    /// The leading feature kind is not retained.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split(':').collect();
        if fields.len() != 6 {
            return Err(Error::Parse(format!(
                "expected 6 colon-delimited placement fields, found {}: '{s}'",
                fields.len()
            )));
        }

        let reference_assembly = fields[1].to_string();
        if reference_assembly.is_empty() {
            return Err(Error::Parse(format!("empty assembly in placement: '{s}'")));
        }

        let chromosome = fields[2].to_string();
        if chromosome.is_empty() {
            return Err(Error::Parse(format!(
                "empty chromosome in placement: '{s}'"
            )));
        }

        let genomic_left: i64 = fields[3].parse().map_err(|e| {
            Error::Parse(format!("invalid placement left bound '{}': {e}", fields[3]))
        })?;
        if genomic_left < 1 {
            return Err(Error::Validation(format!(
                "placement left bound must be at least 1, got {genomic_left}"
            )));
        }
        let genomic_right: i64 = fields[4].parse().map_err(|e| {
            Error::Parse(format!(
                "invalid placement right bound '{}': {e}",
                fields[4]
            ))
        })?;
        if genomic_left > genomic_right {
            return Err(Error::Validation(format!(
                "placement left bound {genomic_left} is greater than right bound {genomic_right}"
            )));
        }

        let sign: i64 = fields[5]
            .parse()
            .map_err(|e| Error::Parse(format!("invalid strand sign '{}': {e}", fields[5])))?;

        Ok(Self {
            reference_assembly,
            chromosome,
            genomic_left,
            genomic_right,
            strand: Strand::from_ensembl(sign),
        })
    }
}

/// Span metrics normalized to transcript-local space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coordinates {
    pub sequence_length: i64,
    pub start_index: i64,
    pub end_index: i64,
}

impl Coordinates {
    /// Derives the metrics of a placement's inclusive span. Local indices are
    /// zero-based, so the span start is always index 0.
    #[must_use]
    pub fn from_span(placement: &Placement) -> Self {
        let span = placement.genomic_right - placement.genomic_left;
        Self {
            sequence_length: span + 1,
            start_index: 0,
            end_index: span,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_reverse_strand_description() {
        let placement: Placement = "chromosome:GRCh38:7:100123456:100123461:-1"
            .parse()
            .unwrap();
        assert_eq!(placement.reference_assembly, "GRCh38");
        assert_eq!(placement.chromosome, "7");
        assert_eq!(placement.genomic_left, 100_123_456);
        assert_eq!(placement.genomic_right, 100_123_461);
        assert_eq!(placement.strand, Strand::Reverse);
    }

    #[test]
    fn parse_forward_strand_description() {
        let placement: Placement = "chromosome:GRCh38:12:25205246:25250929:1".parse().unwrap();
        assert_eq!(placement.chromosome, "12");
        assert_eq!(placement.strand, Strand::Forward);
    }

    #[test]
    fn nonhuman_assembly_is_accepted() {
        let placement: Placement = "chromosome:TAIR10:1:3631:5899:1".parse().unwrap();
        assert_eq!(placement.reference_assembly, "TAIR10");
    }

    #[test]
    fn scaffold_placements_parse() {
        let placement: Placement = "scaffold:GRCh38:KI270728.1:10000:12000:1".parse().unwrap();
        assert_eq!(placement.chromosome, "KI270728.1");
    }

    #[test]
    fn wrong_field_count() {
        let err = "chromosome:GRCh38:7:100:200".parse::<Placement>().unwrap_err();
        assert!(err.to_string().contains("expected 6"));

        let err = "chromosome:GRCh38:7:100:200:1:extra"
            .parse::<Placement>()
            .unwrap_err();
        assert!(err.to_string().contains("found 7"));
    }

    #[test]
    fn empty_assembly_or_chromosome() {
        assert!("chromosome::7:100:200:1".parse::<Placement>().is_err());
        assert!("chromosome:GRCh38::100:200:1".parse::<Placement>().is_err());
    }

    #[test]
    fn non_numeric_bound() {
        let err = "chromosome:GRCh38:7:abc:200:1"
            .parse::<Placement>()
            .unwrap_err();
        assert!(err.to_string().contains("left bound"));

        let err = "chromosome:GRCh38:7:100:xyz:1"
            .parse::<Placement>()
            .unwrap_err();
        assert!(err.to_string().contains("right bound"));
    }

    #[test]
    fn non_numeric_strand_sign() {
        let err = "chromosome:GRCh38:7:100:200:forward"
            .parse::<Placement>()
            .unwrap_err();
        assert!(err.to_string().contains("strand sign"));
    }

    #[test]
    fn left_bound_beyond_right() {
        let err = "chromosome:GRCh38:7:201:200:1"
            .parse::<Placement>()
            .unwrap_err();
        assert!(err.to_string().contains("greater than right bound"));
    }

    #[test]
    fn non_positive_left_bound() {
        let err = "chromosome:GRCh38:7:0:200:1".parse::<Placement>().unwrap_err();
        assert!(err.to_string().contains("at least 1"));

        let err = "chromosome:GRCh38:7:-9223372036854775808:9223372036854775807:-1"
            .parse::<Placement>()
            .unwrap_err();
        assert!(err.to_string().contains("at least 1"));
    }

    #[test]
    fn span_metrics() {
        let placement: Placement = "chromosome:GRCh38:7:100123456:100123461:-1"
            .parse()
            .unwrap();
        let coords = Coordinates::from_span(&placement);
        assert_eq!(coords.sequence_length, 6);
        assert_eq!(coords.start_index, 0);
        assert_eq!(coords.end_index, 5);
    }

    #[test]
    fn single_base_span() {
        let placement: Placement = "chromosome:GRCh38:7:500:500:1".parse().unwrap();
        let coords = Coordinates::from_span(&placement);
        assert_eq!(coords.sequence_length, 1);
        assert_eq!(coords.start_index, 0);
        assert_eq!(coords.end_index, 0);
    }
}

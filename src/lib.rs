//! Flanker: resolves the genomic homology arms flanking a transcript's coding start.

pub mod error;

pub mod arms;
pub mod cli;
pub mod complement;
pub mod config;
pub mod ensembl;
pub mod feature;
pub mod placement;
pub mod strand;
pub mod transcript;

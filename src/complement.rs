//! Case-preserving nucleotide complements and reverse-complement construction.

use crate::error::Error;

/// Complement a single base, preserving case.
/// Returns None for bases outside A/T/G/C.
#[must_use]
pub fn complement(base: u8) -> Option<u8> {
    match base {
        b'A' => Some(b'T'),
        b'T' => Some(b'A'),
        b'G' => Some(b'C'),
        b'C' => Some(b'G'),
        b'a' => Some(b't'),
        b't' => Some(b'a'),
        b'g' => Some(b'c'),
        b'c' => Some(b'g'),
        _ => None,
    }
}

/// Builds the reverse complement of `seq` in a single pass from the last
/// base to the first.
///
/// An unknown base fails with its index and character. The product must end
/// up exactly as long as the source; a mismatch is a validation error, so a
/// caller never sees a truncated product.
pub fn reverse_complement(seq: &[u8]) -> Result<Vec<u8>, Error> {
    let mut product = Vec::with_capacity(seq.len());
    for (index, &base) in seq.iter().enumerate().rev() {
        match complement(base) {
            Some(partner) => product.push(partner),
            None => {
                return Err(Error::UnknownBase {
                    index,
                    base: base as char,
                });
            }
        }
    }

    if product.len() != seq.len() {
        return Err(Error::Validation(format!(
            "reverse complement length {} does not match source length {}",
            product.len(),
            seq.len()
        )));
    }

    Ok(product)
}

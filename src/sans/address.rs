//! Parsing of dotted-quad address text.

use core::num::ParseIntError;

use thiserror::Error;

/// An error parsing dotted-quad text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    /// Did not find exactly four dot-separated octets.
    #[error("Expected four dot-separated octets.")]
    OctetCount,
    /// An octet was not a decimal integer from 0 to 255.
    #[error("Malformed octet: {0}.")]
    Octet(#[from] ParseIntError),
}

/// Parse dotted-quad text (`"240.3.9.77"`) into octets, most significant
/// first.
pub fn parse(text: &str) -> Result<[u8; 4], AddressError> {
    let mut parts = text.split('.');
    let mut octets = [0; 4];

    for octet in &mut octets {
        *octet = parts.next().ok_or(AddressError::OctetCount)?.parse()?;
    }

    if parts.next().is_some() {
        Err(AddressError::OctetCount)?;
    }

    Ok(octets)
}

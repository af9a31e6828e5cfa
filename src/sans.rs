//! Pure codec for announcement addresses.
//!
//! Nothing in this module performs I/O. See [`crate::avec`] for lookups of the
//! published record.
//!
//! # Wire Format
//!
//! ```text
//!    3                   2                   1                   0
//!  1 0 9 8 7 6 5 4 3 2 1 0 9 8 7 6 5 4 3 2 1 0 9 8 7 6 5 4 3 2 1 0
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |1 1 1 1|        month        | d |   dTAI      |    CRC-8      |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! - `month`: months since November 1971.
//! - `d`: change to dTAI at the end of that month; `0` none, `1` subtract one,
//! `2` add one. `3` is illegal.
//! - `dTAI`: seconds UTC is behind TAI until the end of that month.
//! - `CRC-8`: chosen so that [`check::crc8`] over the whole word yields
//! [`check::CHECK_VALUE`].
//!
//! The leading ones place the address in the reserved class-E range, which no
//! sane resolver returns for an ordinary host.
//!
//! Decoding is split in two stages: [`address`] turns dotted-quad text into
//! octets, and [`announcement`] validates and unpacks them.

pub mod address;
pub mod announcement;
pub mod check;

pub use announcement::decode;

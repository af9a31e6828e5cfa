#![no_std]

//! A decoder for leap-second announcements published in the DNS.
//!
//! The current announcement (as in IERS Bulletin C) is published as a single
//! IPv4 address record under [`DEFAULT_HOST`]. The address packs the month up
//! to which the announcement is valid, the current offset between TAI and UTC,
//! and the change applied to that offset at the end of the month. A reserved
//! address class and an 8-bit CRC guard against resolvers that invent
//! answers.
//!
//! Most users should begin with [`decode_address`] for a single address, or
//! with the functions in the [`avec`] module to look up and decode the
//! published record. The pure codec is exposed in the [`sans`] module.
//!
//! ## Cargo Features
//!
//! The following crate feature flags are available:
//!
//! - `std`: enable lookups through the system resolver (default).

extern crate alloc;

pub mod avec;
pub mod sans;

pub use avec::resolver::{DEFAULT_HOST, Lookup, lookup, lookup_host};
#[cfg(feature = "std")]
pub use avec::system::fetch;
pub use sans::announcement::{Announcement, DecodeError, decode as decode_address};

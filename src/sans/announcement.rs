//! Validation and unpacking of announcement addresses.

use core::{fmt, net::Ipv4Addr, str::FromStr};

use tartan_bitfield::bitfield;
use thiserror::Error;
use zerocopy::byteorder::{BigEndian, U32};

use super::{
    address::{self, AddressError},
    check::{CHECK_VALUE, crc8},
};

/// An error decoding an announcement address.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Not dotted-quad text, or outside the reserved address class.
    ///
    /// Holds the parse error if the text could not be parsed.
    #[error("Invalid address.")]
    InvalidAddress(#[source] Option<AddressError>),
    /// The address does not carry a correct check byte.
    #[error("Invalid checksum (calculated {calculated:#04x}).")]
    InvalidChecksum { calculated: u8 },
    /// The action field holds its illegal value.
    #[error("Invalid action.")]
    InvalidAction,
}

impl From<AddressError> for DecodeError {
    fn from(err: AddressError) -> Self {
        Self::InvalidAddress(Some(err))
    }
}

bitfield! {
    /// An announcement address as a 32-bit word.
    pub struct Message(u32) {
        /// Check byte.
        [0..8] pub check: u8,
        /// Seconds UTC is behind TAI.
        [8..15] pub dtai: u8,
        /// Change to dTAI at the end of the month.
        [15..17] pub action: u8,
        /// Months since November 1971.
        [17..28] pub month: u16,
        /// Address class marker.
        [28..32] pub class: u8,
    }
}

impl Message {
    /// Value of [`Message::class`] for announcements.
    pub const CLASS: u8 = 0xF;

    /// Assemble a message from octets, most significant first.
    pub fn from_octets(octets: [u8; 4]) -> Self {
        let word: U32<BigEndian> = zerocopy::transmute!(octets);
        Self(word.get())
    }

    /// The underlying word.
    pub fn word(&self) -> u32 {
        self.0
    }
}

/// A decoded leap-second announcement.
///
/// UTC is `dtai` seconds behind TAI until the end of `month` in `year`. At
/// that point, `delta` is added to `dtai`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Announcement {
    /// Year of the announced horizon.
    pub year: u16,
    /// Month of the announced horizon, from 1 to 12.
    pub month: u8,
    /// Seconds subtracted from TAI to get UTC until the horizon.
    pub dtai: u8,
    /// Change to `dtai` at the end of the horizon; -1, 0, or +1.
    pub delta: i8,
}

impl Announcement {
    /// Seconds subtracted from TAI to get UTC after the horizon.
    pub fn dtai_after(&self) -> i16 {
        i16::from(self.dtai) + i16::from(self.delta)
    }
}

impl fmt::Display for Announcement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "UTC = TAI - {}s until the end of {:04}-{:02}, then UTC = TAI - {}s",
            self.dtai,
            self.year,
            self.month,
            self.dtai_after()
        )
    }
}

impl FromStr for Announcement {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode(s)
    }
}

impl TryFrom<Ipv4Addr> for Announcement {
    type Error = DecodeError;

    fn try_from(addr: Ipv4Addr) -> Result<Self, Self::Error> {
        decode_ipv4(addr)
    }
}

/// Decode an announcement from dotted-quad text (`"240.3.9.77"`).
///
/// This function is also re-exported as `dnsleap::decode_address`.
pub fn decode(text: &str) -> Result<Announcement, DecodeError> {
    decode_octets(address::parse(text)?)
}

/// Decode an announcement from a numeric address.
pub fn decode_ipv4(addr: Ipv4Addr) -> Result<Announcement, DecodeError> {
    decode_octets(addr.octets())
}

/// Decode an announcement from octets, most significant first.
pub fn decode_octets(octets: [u8; 4]) -> Result<Announcement, DecodeError> {
    let message = Message::from_octets(octets);

    if message.class() != Message::CLASS {
        Err(DecodeError::InvalidAddress(None))?;
    }

    let calculated = crc8(message.word());
    if calculated != CHECK_VALUE {
        Err(DecodeError::InvalidChecksum { calculated })?;
    }

    let delta = match message.action() {
        0 => 0,
        1 => -1,
        2 => 1,
        _ => Err(DecodeError::InvalidAction)?,
    };

    // Months since January 1971, from zero.
    let month = message.month() + 10;

    Ok(Announcement {
        year: 1971 + month / 12,
        month: (1 + month % 12) as u8,
        dtai: message.dtai(),
        delta,
    })
}

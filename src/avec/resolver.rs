//! Selection of an announcement among looked-up candidate addresses.

use alloc::{string::String, vec::Vec};

use log::{debug, trace};
use thiserror::Error;

use crate::sans::announcement::{self, Announcement, DecodeError};

/// Host publishing the current announcement.
pub const DEFAULT_HOST: &str = "leapsecond.utcd.org";

/// Resolve a host name to candidate address text.
///
/// Any closure `Fn(&str) -> Result<Vec<String>, E>` implements this trait.
pub trait Lookup {
    /// Cause of a failed lookup.
    type Error;

    /// Resolve `host` to addresses in dotted-quad text, in the order they
    /// should be tried.
    fn lookup_host(&self, host: &str) -> Result<Vec<String>, Self::Error>;
}

impl<F, E> Lookup for F
where
    F: Fn(&str) -> Result<Vec<String>, E>,
{
    type Error = E;

    fn lookup_host(&self, host: &str) -> Result<Vec<String>, E> {
        self(host)
    }
}

/// Errors occurring while looking up an announcement.
#[derive(Debug, Error)]
pub enum Error<E> {
    /// The lookup itself failed.
    #[error("Lookup failed: {0}.")]
    LookupFailed(#[source] E),
    /// The lookup returned no addresses.
    #[error("Lookup returned no addresses.")]
    EmptyResponse,
    /// No address decoded. Holds the last address tried and its error.
    #[error("Address {address} did not decode: {source}.")]
    Decode {
        address: String,
        #[source]
        source: DecodeError,
    },
}

impl<E> Error<E> {
    /// The decode error of the last address tried, if the lookup succeeded.
    pub fn decode_error(&self) -> Option<&DecodeError> {
        match self {
            Self::Decode { source, .. } => Some(source),
            _ => None,
        }
    }

    /// The last address tried, if the lookup succeeded.
    pub fn address(&self) -> Option<&str> {
        match self {
            Self::Decode { address, .. } => Some(address),
            _ => None,
        }
    }
}

/// Look up and decode the announcement published under [`DEFAULT_HOST`].
///
/// Returns the address used alongside the announcement.
pub fn lookup<L: Lookup + ?Sized>(
    resolver: &L,
) -> Result<(String, Announcement), Error<L::Error>> {
    lookup_host(resolver, DEFAULT_HOST)
}

/// Look up and decode the announcement published under a host name.
///
/// Addresses are tried in the order returned, and the first to decode is used
/// along with its announcement. If none decode, the error for the last address
/// is returned.
pub fn lookup_host<L: Lookup + ?Sized>(
    resolver: &L,
    host: &str,
) -> Result<(String, Announcement), Error<L::Error>> {
    let addresses = resolver.lookup_host(host).map_err(|err| {
        debug!("lookup of {host} failed");
        Error::LookupFailed(err)
    })?;

    let mut last = None;

    for address in addresses {
        trace!("trying {address} for {host}");

        match announcement::decode(&address) {
            Ok(announcement) => return Ok((address, announcement)),
            Err(err) => {
                debug!("rejected {address} for {host}: {err}");
                last = Some((address, err));
            }
        }
    }

    match last {
        Some((address, source)) => Err(Error::Decode { address, source }),
        None => {
            debug!("lookup of {host} returned no addresses");
            Err(Error::EmptyResponse)
        }
    }
}

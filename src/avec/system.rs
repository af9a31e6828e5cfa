//! Lookups through the system resolver.
//!
//! _Requires Cargo feature `std`._

use alloc::{string::String, vec::Vec};
use std::{io, net::ToSocketAddrs, string::ToString};

use log::debug;

use super::resolver::{self, Error, Lookup};
use crate::sans::announcement::Announcement;

extern crate std;

/// A [`Lookup`] backed by the platform resolver (`getaddrinfo` and friends).
///
/// Addresses of every family are returned in resolver order. Those that are not
/// IPv4 are rejected when decoded.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLookup;

impl Lookup for SystemLookup {
    type Error = io::Error;

    fn lookup_host(&self, host: &str) -> Result<Vec<String>, io::Error> {
        let addresses: Vec<String> = (host, 0)
            .to_socket_addrs()?
            .map(|a| a.ip().to_string())
            .collect();

        debug!("{host} resolved to {addresses:?}");

        Ok(addresses)
    }
}

/// Look up and decode the announcement published under
/// [`DEFAULT_HOST`](resolver::DEFAULT_HOST) using the system resolver.
///
/// _Requires Cargo feature `std`._
pub fn fetch() -> Result<(String, Announcement), Error<io::Error>> {
    resolver::lookup(&SystemLookup)
}

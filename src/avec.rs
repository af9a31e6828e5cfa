//! Convenience interfaces for looking up the published announcement.
//!
//! Name resolution is supplied by the caller through the [`Lookup`] trait.
//! With the `std` feature, [`system::SystemLookup`] uses the platform
//! resolver, and [`fetch`] queries [`DEFAULT_HOST`] through it.

pub mod resolver;
#[cfg(feature = "std")]
pub mod system;

pub use resolver::{DEFAULT_HOST, Error, Lookup, lookup, lookup_host};
#[cfg(feature = "std")]
pub use system::{SystemLookup, fetch};

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Random Source Handling
//!
//! Helpers for drawing from an injected cryptographically secure source.

pub mod csprng;

pub use csprng::*;

//! Reconstruction half of a Shamir-style secret-sharing scheme: decode
//! base-encoded shares into exact big integers and recover the secret as the
//! constant term of the interpolating polynomial, using exact rational
//! arithmetic throughout.

pub mod container;
pub mod error;
pub mod interpolate;
pub mod provider;
pub mod radix;
pub mod rational;
pub mod reconstruct;
pub mod share;

pub use error::{Error, Result};

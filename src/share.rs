//! Shares, interpolation points, and the reconstruction request.

use num_bigint::{BigInt, BigUint};

use crate::error::{Error, Result};
use crate::radix;

/// A single decoded share: one point on the secret polynomial,
/// together with the textual form it was declared in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Share {
    index: u64,
    radix: u32,
    digits: String,
    value: BigUint,
}

impl Share {
    /// Decode a declared share.
    ///
    /// `base` is still textual here because containers carry it both as a
    /// JSON number and as a numeric string; a non-integral base is an
    /// [`Error::InvalidRadix`] just like an out-of-range one. The value is
    /// decoded exactly once and is immutable afterwards.
    pub fn decode(index: u64, base: &str, digits: &str) -> Result<Self> {
        let radix: u32 = base.trim().parse().map_err(|_| Error::InvalidRadix {
            given: base.to_string(),
        })?;
        let value = radix::decode(radix, digits)?;
        Ok(Share {
            index,
            radix,
            digits: digits.to_string(),
            value,
        })
    }

    /// The participant index (1-based); the x-coordinate of the point.
    pub fn index(&self) -> u64 {
        self.index
    }

    pub fn radix(&self) -> u32 {
        self.radix
    }

    pub fn digits(&self) -> &str {
        &self.digits
    }

    pub fn value(&self) -> &BigUint {
        &self.value
    }

    /// Project onto the (x, y) plane for interpolation.
    pub fn point(&self) -> Point {
        Point {
            x: BigInt::from(self.index),
            y: BigInt::from(self.value.clone()),
        }
    }
}

/// An (x, y) point handed to the interpolator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Point {
    pub x: BigInt,
    pub y: BigInt,
}

impl Point {
    pub fn new(x: BigInt, y: BigInt) -> Self {
        Point { x, y }
    }
}

/// A share exactly as declared in the container, not yet decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawShare {
    pub index: u64,
    pub base: String,
    pub digits: String,
}

/// Everything one reconstruction needs: the declared (n, k) and the share
/// entries in declaration order. Built fresh per invocation and read-only
/// once assembled.
#[derive(Debug, Clone)]
pub struct ReconstructionRequest {
    total: usize,
    threshold: usize,
    entries: Vec<RawShare>,
}

impl ReconstructionRequest {
    /// Assemble a request, enforcing `1 <= k <= n`.
    pub fn new(total: usize, threshold: usize, entries: Vec<RawShare>) -> Result<Self> {
        if threshold == 0 || threshold > total {
            return Err(Error::ThresholdOutOfRange { threshold, total });
        }
        Ok(ReconstructionRequest {
            total,
            threshold,
            entries,
        })
    }

    /// Declared number of distributed shares (n).
    pub fn total(&self) -> usize {
        self.total
    }

    /// Minimum number of shares required to reconstruct (k).
    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// Share entries in the order they were declared.
    pub fn entries(&self) -> &[RawShare] {
        &self.entries
    }
}

use num_bigint::BigInt;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong between a raw share container and a secret.
///
/// Each failure is raised at the point of violation and handed to the caller
/// unchanged; the crate never substitutes a default or partial result. Retry
/// policy (for example trying a different share subset after
/// [`Error::InconsistentShares`]) belongs to the caller.
#[derive(Debug, Error)]
pub enum Error {
    /// The radix is not an integer in `2..=36`.
    #[error("radix {given:?} is not an integer in 2..=36")]
    InvalidRadix { given: String },

    /// A character is outside the digit alphabet for the given radix.
    #[error("character {digit:?} is not a digit in base {radix}")]
    InvalidDigit { digit: char, radix: u32 },

    /// The digit string has no characters at all.
    #[error("digit string is empty")]
    EmptyDigits,

    /// The declared threshold violates 1 <= k <= n.
    #[error("threshold k={threshold} must satisfy 1 <= k <= n={total}")]
    ThresholdOutOfRange { threshold: usize, total: usize },

    /// Fewer usable shares than the threshold requires.
    #[error("need {threshold} usable shares, found {available}")]
    InsufficientShares { threshold: usize, available: usize },

    /// Two points carry the same x-coordinate, so the system is singular.
    #[error("two shares carry the same x-coordinate {x}")]
    DuplicatePoint { x: BigInt },

    /// The interpolated constant term did not reduce to an integer,
    /// which means the supplied shares do not lie on one polynomial.
    #[error("inconsistent shares: constant term is {numerator}/{denominator}, not an integer")]
    InconsistentShares {
        numerator: BigInt,
        denominator: BigInt,
    },

    /// The container parsed as JSON but does not have the expected shape.
    #[error("malformed share container: {0}")]
    MalformedContainer(String),

    /// The container is not syntactically valid JSON.
    #[error("container is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The request provider could not read its source.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

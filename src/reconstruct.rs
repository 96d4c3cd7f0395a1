//! Driver: share selection and end-to-end reconstruction.

use num_bigint::BigInt;

use crate::error::{Error, Result};
use crate::interpolate;
use crate::share::{Point, ReconstructionRequest, Share};

/// Pick the first `threshold` usable shares in declaration order.
///
/// A share is usable when its base and digits decode and its index is a
/// positive integer not already selected; anything else is skipped, never
/// fatal on its own. Which k of n > k shares get used is thereby a fixed,
/// reproducible convention: any k consistent points describe the same
/// polynomial, so the choice cannot change the secret.
pub fn select_points(request: &ReconstructionRequest) -> Result<Vec<Point>> {
    let threshold = request.threshold();
    let mut points: Vec<Point> = Vec::with_capacity(threshold);
    let mut taken: Vec<u64> = Vec::with_capacity(threshold);

    for entry in request.entries() {
        if points.len() == threshold {
            break;
        }
        if entry.index == 0 || taken.contains(&entry.index) {
            continue;
        }
        let share = match Share::decode(entry.index, &entry.base, &entry.digits) {
            Ok(share) => share,
            Err(_) => continue,
        };
        taken.push(share.index());
        points.push(share.point());
    }

    if points.len() < threshold {
        return Err(Error::InsufficientShares {
            threshold,
            available: points.len(),
        });
    }
    Ok(points)
}

/// Reconstruct the secret: the constant term of the polynomial through the
/// selected shares. Sequences selection and interpolation and propagates
/// their errors unchanged; all arithmetic lives in the two callees.
pub fn reconstruct(request: &ReconstructionRequest) -> Result<BigInt> {
    let points = select_points(request)?;
    interpolate::constant_term(&points)
}

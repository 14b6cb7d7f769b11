use crate::geometry::geo_traits::CollidesWith;
use crate::geometry::{BinSize, Rectangle};

/// Finds the bottom-left-most position at which `candidate` fits in `bin` without overlapping any rectangle in `packed`.
///
/// Positions are scanned with `x` as the outer and `y` as the inner loop, both ascending, so the lowest `x` wins and ties go to the lowest `y`.
/// If no position exists in the current orientation, the candidate is rotated and the scan is repeated once.
/// On success the candidate keeps the orientation in which it was found; on failure its original orientation is restored and `None` is returned.
///
/// Only the orientation of `candidate` is modified, its coordinates are left to the caller.
pub fn find_position(
    packed: &[Rectangle],
    candidate: &mut Rectangle,
    bin: &BinSize,
) -> Option<(u32, u32)> {
    if let Some(pos) = scan(packed, candidate, bin) {
        return Some(pos);
    }
    candidate.rotate();
    if let Some(pos) = scan(packed, candidate, bin) {
        return Some(pos);
    }
    candidate.rotate();
    None
}

fn scan(packed: &[Rectangle], candidate: &Rectangle, bin: &BinSize) -> Option<(u32, u32)> {
    if !candidate.fits_in(bin) {
        return None;
    }
    for x in 0..=(bin.width - candidate.width) {
        let mut y = 0;
        while y <= bin.height - candidate.height {
            let probe = candidate.at(x, y);
            match packed.iter().find(|p| probe.collides_with(*p)) {
                None => return Some((x, y)),
                // every y below the top of the blocker collides with it as well
                Some(blocker) => y = blocker.y_max(),
            }
        }
    }
    None
}

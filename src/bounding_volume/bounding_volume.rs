use crate::math::Real;

/// A coarse approximation of a geometry, cheap to test against another one.
pub trait BoundingVolume {
    /// Do the two volumes overlap? Volumes sharing only their boundary overlap.
    fn intersects(&self, other: &Self) -> bool;

    /// A copy of this volume grown by `amount` in every direction.
    fn loosened(&self, amount: Real) -> Self;
}

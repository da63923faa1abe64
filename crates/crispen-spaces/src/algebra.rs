//! Union, intersection and difference of color space sets.
//!
//! All three compare entries by name only and return a new set; neither
//! operand is modified.

use std::ops::{BitAnd, BitOr, Sub};

use crate::color_space::ColorSpace;
use crate::set::ColorSpaceSet;

/// Every name in `a` or `b`.
///
/// Starts from a copy of `a` and adds `b` on top, so names present in both
/// keep `a`'s position but take `b`'s content. Names only in `b` follow in
/// `b`'s order.
pub fn union<C: ColorSpace>(a: &ColorSpaceSet<C>, b: &ColorSpaceSet<C>) -> ColorSpaceSet<C> {
    let mut out = a.create_editable_copy();
    out.add_all(b);
    out
}

/// Names present in both sets, in `b`'s order with `b`'s content.
pub fn intersection<C: ColorSpace>(
    a: &ColorSpaceSet<C>,
    b: &ColorSpaceSet<C>,
) -> ColorSpaceSet<C> {
    let mut out = ColorSpaceSet::new();
    for cs in b.iter().filter(|cs| a.contains(cs.name())) {
        out.insert_unchecked(cs.clone());
    }
    out
}

/// Names in `a` that are absent from `b`, in `a`'s order with `a`'s content.
pub fn difference<C: ColorSpace>(
    a: &ColorSpaceSet<C>,
    b: &ColorSpaceSet<C>,
) -> ColorSpaceSet<C> {
    let mut out = ColorSpaceSet::new();
    for cs in a.iter().filter(|cs| !b.contains(cs.name())) {
        out.insert_unchecked(cs.clone());
    }
    out
}

impl<C: ColorSpace> BitOr for &ColorSpaceSet<C> {
    type Output = ColorSpaceSet<C>;

    fn bitor(self, rhs: Self) -> Self::Output {
        union(self, rhs)
    }
}

impl<C: ColorSpace> BitAnd for &ColorSpaceSet<C> {
    type Output = ColorSpaceSet<C>;

    fn bitand(self, rhs: Self) -> Self::Output {
        intersection(self, rhs)
    }
}

impl<C: ColorSpace> Sub for &ColorSpaceSet<C> {
    type Output = ColorSpaceSet<C>;

    fn sub(self, rhs: Self) -> Self::Output {
        difference(self, rhs)
    }
}

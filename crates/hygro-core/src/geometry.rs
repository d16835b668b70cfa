//! Geometry and range helpers shared by hit testing and chart layout.
//!
//! All checks use inclusive bounds and tolerate either ordering of the
//! two boundary values, so callers never have to pre-sort a range.

/// Returns whether `value` lies in the range spanned by `a` and `b`,
/// inclusive on both ends, for either ordering of the boundaries.
pub fn in_range<T: PartialOrd>(value: T, a: T, b: T) -> bool {
    (a <= value && value <= b) || (b <= value && value <= a)
}

/// Constrains `value` to the range spanned by `a` and `b`, for either
/// ordering of the boundaries.
pub fn constrain<T: PartialOrd>(value: T, a: T, b: T) -> T {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    if value < lo {
        lo
    } else if hi < value {
        hi
    } else {
        value
    }
}

/// Inclusive point-in-rectangle containment check.
///
/// A point exactly on any of the four edges counts as inside. This is
/// the hit test used for touch dispatch.
pub fn point_in_rect(px: i32, py: i32, x: i32, y: i32, width: i32, height: i32) -> bool {
    in_range(px, x, x + width) && in_range(py, y, y + height)
}

/// Clamps a computed draw coordinate to the non-negative range.
///
/// The display controller faults on negative coordinates, so every
/// coordinate produced by chart layout math passes through here before
/// reaching a draw call. This is a hardware-safety invariant, not a
/// cosmetic one.
pub fn clamp_draw_coord(value: i32) -> i32 {
    value.max(0)
}

//! Scalar math primitives
//!
//! Component-level helpers the vector types delegate to. Every function is
//! total: NaN and infinities propagate through the usual IEEE rules instead
//! of panicking.

/// Real scalar type used by [`Vec4`](crate::Vec4) and friends
#[cfg(not(feature = "double-precision"))]
pub type Real = f32;

/// Real scalar type used by [`Vec4`](crate::Vec4) and friends
#[cfg(feature = "double-precision")]
pub type Real = f64;

/// Tolerance for approximate comparisons
#[cfg(not(feature = "double-precision"))]
pub const EPSILON: Real = 1e-6;

/// Tolerance for approximate comparisons
#[cfg(feature = "double-precision")]
pub const EPSILON: Real = 1e-14;

/// Positive infinity in the real scalar width
pub const INF: Real = Real::INFINITY;

/// Clamp `value` into `[min, max]`
///
/// Returns `min` when the bounds are inverted. Unlike `f32::clamp` this never
/// panics.
#[inline]
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if min > max || value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Larger of two values, preferring `b` when they compare equal or unordered
#[inline]
pub fn max<T: PartialOrd>(a: T, b: T) -> T {
    if a > b { a } else { b }
}

/// Smaller of two values, preferring `b` when they compare equal or unordered
#[inline]
pub fn min<T: PartialOrd>(a: T, b: T) -> T {
    if a < b { a } else { b }
}

/// -1, 0 or 1 depending on the sign of `s`
///
/// Both zeros map to 0. NaN stays NaN.
#[inline]
pub fn sign(s: Real) -> Real {
    if s > 0.0 {
        1.0
    } else if s < 0.0 {
        -1.0
    } else if s == 0.0 {
        0.0
    } else {
        s
    }
}

/// Round to the nearest integer, ties to even
#[inline]
pub fn round(s: Real) -> Real {
    s.round_ties_even()
}

/// Round `value` to the nearest multiple of `step`
///
/// A zero step leaves the value untouched.
#[inline]
pub fn snapped(value: Real, step: Real) -> Real {
    if step != 0.0 {
        ((value / step) + 0.5).floor() * step
    } else {
        value
    }
}

/// [`snapped`] in double precision, used for integer snapping
#[inline]
pub fn snapped_wide(value: f64, step: f64) -> f64 {
    if step != 0.0 {
        ((value / step) + 0.5).floor() * step
    } else {
        value
    }
}

/// Linear interpolation, `from + (to - from) * weight`, unclamped
///
/// A weight of exactly 1 returns `to` unchanged.
#[inline]
pub fn lerp(from: Real, to: Real, weight: Real) -> Real {
    if weight == 1.0 {
        to
    } else {
        from + (to - from) * weight
    }
}

/// Catmull-Rom interpolation between `from` and `to`
///
/// `pre` is the control point before `from`, `post` the one after `to`.
#[inline]
pub fn cubic_interpolate(from: Real, to: Real, pre: Real, post: Real, weight: Real) -> Real {
    let w2 = weight * weight;
    let w3 = w2 * weight;
    0.5 * ((from * 2.0)
        + (-pre + to) * weight
        + (2.0 * pre - 5.0 * from + 4.0 * to - post) * w2
        + (-pre + 3.0 * from - 3.0 * to + post) * w3)
}

/// Cubic interpolation that accounts for non-uniform control point spacing
///
/// `to_t`, `pre_t` and `post_t` are the times of `to`, `pre` and `post`
/// relative to `from` (which sits at time 0). Evaluated as a Barry-Goldman
/// pyramid of linear interpolations.
#[allow(clippy::too_many_arguments)]
pub fn cubic_interpolate_in_time(
    from: Real,
    to: Real,
    pre: Real,
    post: Real,
    weight: Real,
    to_t: Real,
    pre_t: Real,
    post_t: Real,
) -> Real {
    let t = lerp(0.0, to_t, weight);
    let a1 = lerp(pre, from, if pre_t == 0.0 { 0.0 } else { (t - pre_t) / -pre_t });
    let a2 = lerp(from, to, if to_t == 0.0 { 0.5 } else { t / to_t });
    let a3 = lerp(
        to,
        post,
        if post_t - to_t == 0.0 { 1.0 } else { (t - to_t) / (post_t - to_t) },
    );
    let b1 = lerp(a1, a2, if to_t - pre_t == 0.0 { 0.0 } else { (t - pre_t) / (to_t - pre_t) });
    let b2 = lerp(a2, a3, if post_t == 0.0 { 1.0 } else { t / post_t });
    lerp(b1, b2, if to_t == 0.0 { 0.5 } else { t / to_t })
}

/// Remainder that takes the sign of the divisor
///
/// For `b > 0` the result lies in `[0, b)`.
#[inline]
pub fn posmod(a: Real, b: Real) -> Real {
    let mut c = a % b;
    if (c < 0.0 && b > 0.0) || (c > 0.0 && b < 0.0) {
        c += b;
        // A tiny negative remainder can round up to exactly `b`
        if c == b {
            c = 0.0;
        }
    }
    c
}

/// True if `s` is neither infinite nor NaN
#[inline]
pub fn is_finite(s: Real) -> bool {
    s.is_finite()
}

/// Approximate equality scaled by the magnitude of `a`
#[inline]
pub fn is_equal_approx(a: Real, b: Real) -> bool {
    // Catches infinities of the same sign
    if a == b {
        return true;
    }
    let tolerance = max(EPSILON * a.abs(), EPSILON);
    (a - b).abs() < tolerance
}

/// True if `s` is within [`EPSILON`] of zero
#[inline]
pub fn is_zero_approx(s: Real) -> bool {
    s.abs() < EPSILON
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(5.0, 0.0, 3.0), 3.0);
        assert_eq!(clamp(-1.0, 0.0, 3.0), 0.0);
        assert_eq!(clamp(2.0, 0.0, 3.0), 2.0);
        assert_eq!(clamp(7, 1, 4), 4);
    }

    #[test]
    fn test_clamp_inverted_bounds() {
        // min > max always yields min
        assert_eq!(clamp(0.0, 5.0, 1.0), 5.0);
        assert_eq!(clamp(10.0, 5.0, 1.0), 5.0);
        assert_eq!(clamp(3, 9, 2), 9);
    }

    #[test]
    fn test_sign() {
        assert_eq!(sign(-3.5), -1.0);
        assert_eq!(sign(0.25), 1.0);
        assert_eq!(sign(0.0), 0.0);
        assert_eq!(sign(-0.0), 0.0);
        assert!(sign(Real::NAN).is_nan());
    }

    #[test]
    fn test_round_ties_to_even() {
        assert_eq!(round(0.5), 0.0);
        assert_eq!(round(1.5), 2.0);
        assert_eq!(round(2.5), 2.0);
        assert_eq!(round(-1.5), -2.0);
        assert_eq!(round(1.4), 1.0);
    }

    #[test]
    fn test_snapped() {
        assert_eq!(snapped(7.0, 5.0), 5.0);
        assert_eq!(snapped(8.0, 5.0), 10.0);
        assert_eq!(snapped(-7.0, 5.0), -5.0);
        assert_eq!(snapped(3.3, 0.0), 3.3);
        assert_eq!(snapped_wide(12.5, 5.0), 15.0);
    }

    #[test]
    fn test_lerp_endpoints_are_exact() {
        let a = 0.1;
        let b = 123.456;
        assert_eq!(lerp(a, b, 0.0), a);
        assert_eq!(lerp(a, b, 1.0), b);
        assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
        // Extrapolates outside [0, 1]
        assert_eq!(lerp(0.0, 10.0, 2.0), 20.0);
        assert_eq!(lerp(0.0, 10.0, -1.0), -10.0);
    }

    #[test]
    fn test_lerp_between_equal_values() {
        // (to - from) is exactly zero, so every weight returns the input
        for a in [0.113, -7.25, 1e-7, 3.0e5] {
            for w in [0.1, 0.3, 0.7, 0.99, 2.5] {
                assert_eq!(lerp(a, a, w), a);
            }
        }
    }

    #[test]
    fn test_cubic_interpolate_hits_endpoints() {
        assert_eq!(cubic_interpolate(1.0, 2.0, 0.0, 3.0, 0.0), 1.0);
        assert_eq!(cubic_interpolate(1.0, 2.0, 0.0, 3.0, 1.0), 2.0);
        // Evenly spaced colinear points interpolate linearly
        assert!((cubic_interpolate(1.0, 2.0, 0.0, 3.0, 0.5) - 1.5).abs() < 1e-6);
    }

    #[test]
    fn test_cubic_interpolate_in_time_uniform_matches_linear_data() {
        let v = cubic_interpolate_in_time(1.0, 2.0, 0.0, 3.0, 0.5, 1.0, -1.0, 2.0);
        assert!((v - 1.5).abs() < 1e-6);
        let start = cubic_interpolate_in_time(1.0, 2.0, 0.0, 3.0, 0.0, 1.0, -1.0, 2.0);
        assert!((start - 1.0).abs() < 1e-6);
        let end = cubic_interpolate_in_time(1.0, 2.0, 0.0, 3.0, 1.0, 1.0, -1.0, 2.0);
        assert!((end - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_cubic_interpolate_in_time_non_uniform() {
        // t = 0.5; a1 = 7/6, a2 = 1.5, a3 = -1; b1 = 35/24, b2 = 2/3
        let v = cubic_interpolate_in_time(1.0, 2.0, 0.0, 5.0, 0.5, 1.0, -3.0, 1.5);
        assert!((v - 51.0 / 48.0).abs() < 1e-5, "got {}", v);
        // Plain Catmull-Rom on the same points ignores the spacing
        assert!((cubic_interpolate(1.0, 2.0, 0.0, 5.0, 0.5) - 1.375).abs() < 1e-6);
    }

    #[test]
    fn test_cubic_interpolate_in_time_zero_times() {
        // Every denominator is zero: the blend collapses to the midpoint of pre and post
        let v = cubic_interpolate_in_time(1.0, 3.0, 0.0, 4.0, 0.5, 0.0, 0.0, 0.0);
        assert_eq!(v, 2.0);
        let v = cubic_interpolate_in_time(1.0, 3.0, -10.0, 6.0, 0.9, 0.0, 0.0, 0.0);
        assert_eq!(v, -2.0);
    }

    #[test]
    fn test_cubic_interpolate_in_time_zero_to_t() {
        // Only the from/to span is degenerate: result is the from/to midpoint
        let v = cubic_interpolate_in_time(1.0, 3.0, -5.0, 9.0, 0.7, 0.0, -1.0, 1.0);
        assert_eq!(v, 2.0);
    }

    #[test]
    fn test_posmod() {
        assert_eq!(posmod(-1.0, 3.0), 2.0);
        assert_eq!(posmod(4.0, 3.0), 1.0);
        assert_eq!(posmod(-6.0, 3.0), 0.0);
        assert_eq!(posmod(5.0, -3.0), -1.0);
        // Tiny negative values must not produce the modulus itself
        let r = posmod(-1e-30, 1.0);
        assert!((0.0..1.0).contains(&r));
    }

    #[test]
    fn test_is_equal_approx() {
        assert!(is_equal_approx(1.0, 1.0 + EPSILON * 0.5));
        assert!(!is_equal_approx(1.0, 1.1));
        assert!(is_equal_approx(INF, INF));
        assert!(!is_equal_approx(INF, -INF));
        assert!(!is_equal_approx(Real::NAN, Real::NAN));
    }

    #[test]
    fn test_is_zero_approx() {
        assert!(is_zero_approx(0.0));
        assert!(is_zero_approx(EPSILON * 0.5));
        assert!(!is_zero_approx(EPSILON * 2.0));
    }
}

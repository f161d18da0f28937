//! 4D integer vector type
//!
//! Addition, subtraction, multiplication, negation and `abs` wrap on overflow.
//! Division and remainder follow the `i32` operators, so a zero divisor panics.

use std::fmt;
use std::ops::{Index, IndexMut};

use bytemuck::{Pod, Zeroable};

use crate::format::format_ints;
use crate::scalar::{self, Real};
use crate::{Axis, IVec2, IVec3, Vec4, VectorError};

/// 4D vector with i32 x, y, z, w components
///
/// Ordering is lexicographic over (x, y, z, w).
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Pod, Zeroable)]
pub struct IVec4 {
    pub x: i32,
    pub y: i32,
    pub z: i32,
    pub w: i32,
}

impl IVec4 {
    pub const ZERO: Self = Self::splat(0);
    pub const ONE: Self = Self::splat(1);
    /// All components set to `i32::MIN`
    pub const MIN: Self = Self::splat(i32::MIN);
    /// All components set to `i32::MAX`
    pub const MAX: Self = Self::splat(i32::MAX);
    pub const X: Self = Self::new(1, 0, 0, 0);
    pub const Y: Self = Self::new(0, 1, 0, 0);
    pub const Z: Self = Self::new(0, 0, 1, 0);
    pub const W: Self = Self::new(0, 0, 0, 1);

    #[inline]
    pub const fn new(x: i32, y: i32, z: i32, w: i32) -> Self {
        Self { x, y, z, w }
    }

    #[inline]
    pub const fn splat(v: i32) -> Self {
        Self::new(v, v, v, v)
    }

    #[inline]
    pub const fn from_xy_zw(xy: IVec2, zw: IVec2) -> Self {
        Self::new(xy.x, xy.y, zw.x, zw.y)
    }

    #[inline]
    pub const fn from_xy_z_w(xy: IVec2, z: i32, w: i32) -> Self {
        Self::new(xy.x, xy.y, z, w)
    }

    #[inline]
    pub const fn from_x_yz_w(x: i32, yz: IVec2, w: i32) -> Self {
        Self::new(x, yz.x, yz.y, w)
    }

    #[inline]
    pub const fn from_x_y_zw(x: i32, y: i32, zw: IVec2) -> Self {
        Self::new(x, y, zw.x, zw.y)
    }

    #[inline]
    pub const fn from_xyz_w(xyz: IVec3, w: i32) -> Self {
        Self::new(xyz.x, xyz.y, xyz.z, w)
    }

    #[inline]
    pub const fn from_x_yzw(x: i32, yzw: IVec3) -> Self {
        Self::new(x, yzw.x, yzw.y, yzw.z)
    }

    #[inline]
    pub const fn to_array(self) -> [i32; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Component by index (0 = x .. 3 = w)
    pub fn get(&self, index: usize) -> Result<i32, VectorError> {
        match index {
            0 => Ok(self.x),
            1 => Ok(self.y),
            2 => Ok(self.z),
            3 => Ok(self.w),
            _ => Err(VectorError::IndexOutOfRange { index }),
        }
    }

    /// Set a component by index (0 = x .. 3 = w)
    pub fn set(&mut self, index: usize, value: i32) -> Result<(), VectorError> {
        match index {
            0 => self.x = value,
            1 => self.y = value,
            2 => self.z = value,
            3 => self.w = value,
            _ => return Err(VectorError::IndexOutOfRange { index }),
        }
        Ok(())
    }

    /// Widen to a real vector
    ///
    /// Exact for `f64`; with `f32` components beyond ±2^24 round to the
    /// nearest representable value.
    #[inline]
    pub fn as_vec4(self) -> Vec4 {
        Vec4::new(self.x as Real, self.y as Real, self.z as Real, self.w as Real)
    }

    /// Component-wise absolute value; `i32::MIN` stays `i32::MIN`
    #[inline]
    pub fn abs(self) -> Self {
        self.map(i32::wrapping_abs)
    }

    /// -1, 0 or 1 per component
    #[inline]
    pub fn sign(self) -> Self {
        self.map(i32::signum)
    }

    #[inline]
    pub fn clamp(self, min: Self, max: Self) -> Self {
        Self::new(
            scalar::clamp(self.x, min.x, max.x),
            scalar::clamp(self.y, min.y, max.y),
            scalar::clamp(self.z, min.z, max.z),
            scalar::clamp(self.w, min.w, max.w),
        )
    }

    #[inline]
    pub fn clamp_scalar(self, min: i32, max: i32) -> Self {
        self.map(|c| scalar::clamp(c, min, max))
    }

    /// Round each component to the nearest multiple of the matching step
    ///
    /// Computed in double precision and truncated back to i32.
    #[inline]
    pub fn snapped(self, step: Self) -> Self {
        self.zip_map(step, snap_component)
    }

    #[inline]
    pub fn snapped_scalar(self, step: i32) -> Self {
        self.map(|c| snap_component(c, step))
    }

    /// Component-wise maximum
    #[inline]
    pub fn max(self, other: Self) -> Self {
        self.zip_map(other, scalar::max)
    }

    #[inline]
    pub fn max_scalar(self, with: i32) -> Self {
        self.map(|c| scalar::max(c, with))
    }

    /// Component-wise minimum
    #[inline]
    pub fn min(self, other: Self) -> Self {
        self.zip_map(other, scalar::min)
    }

    #[inline]
    pub fn min_scalar(self, with: i32) -> Self {
        self.map(|c| scalar::min(c, with))
    }

    /// Axis of the largest component; ties go to the earliest axis
    pub fn max_axis_index(self) -> Axis {
        let values = self.to_array();
        let mut max_index = 0;
        let mut max_value = values[0];
        for (i, &value) in values.iter().enumerate().skip(1) {
            if value > max_value {
                max_index = i;
                max_value = value;
            }
        }
        Axis::ALL[max_index]
    }

    /// Axis of the smallest component; ties go to the latest axis
    pub fn min_axis_index(self) -> Axis {
        let values = self.to_array();
        let mut min_index = 0;
        let mut min_value = values[0];
        for (i, &value) in values.iter().enumerate().skip(1) {
            if value <= min_value {
                min_index = i;
                min_value = value;
            }
        }
        Axis::ALL[min_index]
    }

    /// Sum of squared components, wrapping on overflow
    #[inline]
    pub fn length_squared(self) -> i32 {
        self.x
            .wrapping_mul(self.x)
            .wrapping_add(self.y.wrapping_mul(self.y))
            .wrapping_add(self.z.wrapping_mul(self.z))
            .wrapping_add(self.w.wrapping_mul(self.w))
    }

    /// Square root of [`length_squared`](Self::length_squared)
    ///
    /// Large components can overflow the integer sum, giving a wrong or NaN
    /// length.
    #[inline]
    pub fn length(self) -> Real {
        (self.length_squared() as Real).sqrt()
    }

    #[inline]
    pub fn distance_squared_to(self, to: Self) -> i32 {
        (to - self).length_squared()
    }

    #[inline]
    pub fn distance_to(self, to: Self) -> Real {
        (to - self).length()
    }

    /// `"(x, y, z, w)"` with every component rendered by a format token
    ///
    /// See [`ComponentFormat`](crate::ComponentFormat) for the accepted tokens.
    pub fn to_string_with(&self, format: &str) -> Result<String, VectorError> {
        format_ints(format, &self.to_array())
    }

    #[inline]
    fn map(self, f: impl Fn(i32) -> i32) -> Self {
        Self::new(f(self.x), f(self.y), f(self.z), f(self.w))
    }

    #[inline]
    fn zip_map(self, other: Self, f: impl Fn(i32, i32) -> i32) -> Self {
        Self::new(
            f(self.x, other.x),
            f(self.y, other.y),
            f(self.z, other.z),
            f(self.w, other.w),
        )
    }
}

#[inline]
fn snap_component(value: i32, step: i32) -> i32 {
    scalar::snapped_wide(f64::from(value), f64::from(step)) as i32
}

impl From<[i32; 4]> for IVec4 {
    #[inline]
    fn from([x, y, z, w]: [i32; 4]) -> Self {
        Self::new(x, y, z, w)
    }
}

impl From<IVec4> for [i32; 4] {
    #[inline]
    fn from(v: IVec4) -> Self {
        v.to_array()
    }
}

impl From<IVec4> for (i32, i32, i32, i32) {
    #[inline]
    fn from(v: IVec4) -> Self {
        (v.x, v.y, v.z, v.w)
    }
}

impl Index<usize> for IVec4 {
    type Output = i32;

    fn index(&self, index: usize) -> &i32 {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("{}", VectorError::IndexOutOfRange { index }),
        }
    }
}

impl IndexMut<usize> for IVec4 {
    fn index_mut(&mut self, index: usize) -> &mut i32 {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            3 => &mut self.w,
            _ => panic!("{}", VectorError::IndexOutOfRange { index }),
        }
    }
}

impl Index<Axis> for IVec4 {
    type Output = i32;

    #[inline]
    fn index(&self, axis: Axis) -> &i32 {
        &self[axis.index()]
    }
}

impl IndexMut<Axis> for IVec4 {
    #[inline]
    fn index_mut(&mut self, axis: Axis) -> &mut i32 {
        &mut self[axis.index()]
    }
}

impl fmt::Display for IVec4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        fmt::Display::fmt(&self.x, f)?;
        f.write_str(", ")?;
        fmt::Display::fmt(&self.y, f)?;
        f.write_str(", ")?;
        fmt::Display::fmt(&self.z, f)?;
        f.write_str(", ")?;
        fmt::Display::fmt(&self.w, f)?;
        f.write_str(")")
    }
}

// Operator overloads

impl std::ops::Add for IVec4 {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        self.zip_map(other, i32::wrapping_add)
    }
}

impl std::ops::AddAssign for IVec4 {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl std::ops::Sub for IVec4 {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        self.zip_map(other, i32::wrapping_sub)
    }
}

impl std::ops::SubAssign for IVec4 {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl std::ops::Neg for IVec4 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        self.map(i32::wrapping_neg)
    }
}

impl std::ops::Mul<i32> for IVec4 {
    type Output = Self;
    #[inline]
    fn mul(self, scalar: i32) -> Self {
        self.map(|c| c.wrapping_mul(scalar))
    }
}

impl std::ops::Mul<IVec4> for i32 {
    type Output = IVec4;
    #[inline]
    fn mul(self, vec: IVec4) -> IVec4 {
        vec * self
    }
}

impl std::ops::Mul for IVec4 {
    type Output = Self;
    #[inline]
    fn mul(self, other: Self) -> Self {
        self.zip_map(other, i32::wrapping_mul)
    }
}

impl std::ops::MulAssign<i32> for IVec4 {
    #[inline]
    fn mul_assign(&mut self, scalar: i32) {
        *self = *self * scalar;
    }
}

impl std::ops::MulAssign for IVec4 {
    #[inline]
    fn mul_assign(&mut self, other: Self) {
        *self = *self * other;
    }
}

/// Truncating division; panics if the divisor is zero
impl std::ops::Div<i32> for IVec4 {
    type Output = Self;
    #[inline]
    fn div(self, divisor: i32) -> Self {
        self.map(|c| c / divisor)
    }
}

impl std::ops::Div for IVec4 {
    type Output = Self;
    #[inline]
    fn div(self, divisor: Self) -> Self {
        self.zip_map(divisor, |a, b| a / b)
    }
}

impl std::ops::DivAssign<i32> for IVec4 {
    #[inline]
    fn div_assign(&mut self, divisor: i32) {
        *self = *self / divisor;
    }
}

impl std::ops::DivAssign for IVec4 {
    #[inline]
    fn div_assign(&mut self, divisor: Self) {
        *self = *self / divisor;
    }
}

/// Truncated remainder: each result takes the sign of the dividend
impl std::ops::Rem<i32> for IVec4 {
    type Output = Self;
    #[inline]
    fn rem(self, divisor: i32) -> Self {
        self.map(|c| c % divisor)
    }
}

impl std::ops::Rem for IVec4 {
    type Output = Self;
    #[inline]
    fn rem(self, divisor: Self) -> Self {
        self.zip_map(divisor, |a, b| a % b)
    }
}

impl std::ops::RemAssign<i32> for IVec4 {
    #[inline]
    fn rem_assign(&mut self, divisor: i32) {
        *self = *self % divisor;
    }
}

impl std::ops::RemAssign for IVec4 {
    #[inline]
    fn rem_assign(&mut self, divisor: Self) {
        *self = *self % divisor;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(IVec4::MIN.to_array(), [i32::MIN; 4]);
        assert_eq!(IVec4::MAX.to_array(), [i32::MAX; 4]);
        assert_eq!(IVec4::ONE, IVec4::new(1, 1, 1, 1));
        assert_eq!(IVec4::default(), IVec4::ZERO);
    }

    #[test]
    fn test_composite_constructors() {
        let expected = IVec4::new(1, 2, 3, 4);
        assert_eq!(IVec4::from_xy_zw(IVec2::new(1, 2), IVec2::new(3, 4)), expected);
        assert_eq!(IVec4::from_xy_z_w(IVec2::new(1, 2), 3, 4), expected);
        assert_eq!(IVec4::from_x_yz_w(1, IVec2::new(2, 3), 4), expected);
        assert_eq!(IVec4::from_x_y_zw(1, 2, IVec2::new(3, 4)), expected);
        assert_eq!(IVec4::from_xyz_w(IVec3::new(1, 2, 3), 4), expected);
        assert_eq!(IVec4::from_x_yzw(1, IVec3::new(2, 3, 4)), expected);
    }

    #[test]
    fn test_index_access() {
        let mut v = IVec4::new(5, 6, 7, 8);
        assert_eq!(v.get(0), Ok(5));
        assert_eq!(v.get(4), Err(VectorError::IndexOutOfRange { index: 4 }));
        v.set(3, -1).unwrap();
        v[Axis::Y] = 0;
        v[2] += 1;
        assert_eq!(v, IVec4::new(5, 0, 8, -1));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_index_operator_panics() {
        let mut v = IVec4::ZERO;
        v[9] = 1;
    }

    #[test]
    fn test_abs_and_sign() {
        let v = IVec4::new(-3, 0, 7, i32::MIN);
        assert_eq!(v.abs(), IVec4::new(3, 0, 7, i32::MIN));
        assert_eq!(v.sign(), IVec4::new(-1, 0, 1, -1));
    }

    #[test]
    fn test_clamp() {
        let v = IVec4::new(-5, 2, 9, 4);
        assert_eq!(v.clamp_scalar(0, 5), IVec4::new(0, 2, 5, 4));
        let lo = IVec4::new(0, 3, 0, 0);
        let hi = IVec4::new(1, 4, 10, 2);
        assert_eq!(v.clamp(lo, hi), IVec4::new(0, 3, 9, 2));
    }

    #[test]
    fn test_snapped() {
        let v = IVec4::new(7, 8, -7, 12);
        assert_eq!(v.snapped_scalar(5), IVec4::new(5, 10, -5, 10));
        assert_eq!(v.snapped(IVec4::new(0, 3, 2, 5)), IVec4::new(7, 9, -6, 10));
    }

    #[test]
    fn test_min_max() {
        let a = IVec4::new(1, 5, 2, 8);
        let b = IVec4::new(3, 2, 4, 6);
        assert_eq!(a.min(b), IVec4::new(1, 2, 2, 6));
        assert_eq!(a.max(b), IVec4::new(3, 5, 4, 8));
        assert_eq!(a.max_scalar(3), IVec4::new(3, 5, 3, 8));
        assert_eq!(a.min_scalar(3), IVec4::new(1, 3, 2, 3));
    }

    #[test]
    fn test_axis_index_ties() {
        let flat = IVec4::splat(-4);
        assert_eq!(flat.max_axis_index(), Axis::X);
        assert_eq!(flat.min_axis_index(), Axis::W);
        let v = IVec4::new(0, 9, 9, 0);
        assert_eq!(v.max_axis_index(), Axis::Y);
        assert_eq!(v.min_axis_index(), Axis::W);
    }

    #[test]
    fn test_length() {
        let v = IVec4::new(1, 2, 2, 4);
        assert_eq!(v.length_squared(), 25);
        assert_eq!(v.length(), 5.0);
        let a = IVec4::new(1, 1, 1, 1);
        let b = IVec4::new(1, 4, 5, 1);
        assert_eq!(a.distance_squared_to(b), 25);
        assert_eq!(a.distance_to(b), 5.0);
    }

    #[test]
    fn test_arithmetic() {
        let a = IVec4::new(1, 2, 3, 4);
        let b = IVec4::new(5, 6, 7, 8);
        assert_eq!(a + b, IVec4::new(6, 8, 10, 12));
        assert_eq!(b - a, IVec4::splat(4));
        assert_eq!(-a, IVec4::new(-1, -2, -3, -4));
        assert_eq!(a * 3, IVec4::new(3, 6, 9, 12));
        assert_eq!(3 * a, a * 3);
        assert_eq!(a * b, IVec4::new(5, 12, 21, 32));
        assert_eq!(b / 2, IVec4::new(2, 3, 3, 4));
        assert_eq!(IVec4::new(-7, 7, -7, 7) / IVec4::new(2, 2, -2, -2), IVec4::new(-3, 3, 3, -3));
    }

    #[test]
    fn test_compound_assignment() {
        let mut v = IVec4::new(10, 20, 30, 40);
        v += IVec4::ONE;
        v -= IVec4::new(1, 0, 0, 0);
        v *= 2;
        v /= IVec4::new(4, 2, 3, 1);
        v %= 7;
        assert_eq!(v, IVec4::new(5, 0, 6, 5));
    }

    #[test]
    fn test_truncated_remainder() {
        let v = IVec4::new(10, -20, 30, -40);
        assert_eq!(v % IVec4::new(6, 7, 8, 9), IVec4::new(4, -6, 6, -4));
        assert_eq!(IVec4::new(10, -20, 30, 40) % 7, IVec4::new(3, -6, 2, 5));
    }

    #[test]
    fn test_wrapping_overflow() {
        let v = IVec4::MAX + IVec4::ONE;
        assert_eq!(v, IVec4::MIN);
        assert_eq!(-IVec4::MIN, IVec4::MIN);
    }

    #[test]
    #[should_panic]
    fn test_division_by_zero_panics() {
        let _ = IVec4::ONE / IVec4::new(1, 1, 0, 1);
    }

    #[test]
    fn test_widening() {
        let v = IVec4::new(-3, 0, 7, 100);
        assert_eq!(v.as_vec4(), Vec4::new(-3.0, 0.0, 7.0, 100.0));
        assert_eq!(v.as_vec4().trunc_to_ivec4(), v);
    }

    #[test]
    fn test_ordering() {
        let a = IVec4::new(1, 2, 3, 4);
        assert!(a < IVec4::new(1, 2, 4, 0));
        assert!(a > IVec4::new(0, 100, 100, 100));
        assert!(a <= a);
        let mut sorted = vec![IVec4::new(2, 0, 0, 0), a, IVec4::new(1, 2, 3, 3)];
        sorted.sort();
        assert_eq!(sorted, vec![IVec4::new(1, 2, 3, 3), a, IVec4::new(2, 0, 0, 0)]);
    }

    #[test]
    fn test_display() {
        let v = IVec4::new(1, -2, 30, 4);
        assert_eq!(v.to_string(), "(1, -2, 30, 4)");
        assert_eq!(v.to_string_with("D3").unwrap(), "(001, -002, 030, 004)");
        assert_eq!(v.to_string_with("X2").unwrap(), "(01, FFFFFFFE, 1E, 04)");
        assert!(v.to_string_with("Z").is_err());
        assert!(matches!(
            v.to_string_with("D70000"),
            Err(VectorError::InvalidFormat { .. })
        ));
    }
}

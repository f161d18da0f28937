//! 4D real vector type

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Index, IndexMut};

use bytemuck::{Pod, Zeroable};

use crate::format::format_reals;
use crate::scalar::{self, Real};
use crate::{Axis, IVec4, Vec2, Vec3, VectorError};

/// 4D vector with real x, y, z, w components
///
/// A plain value: equality and hashing compare the four components exactly,
/// and ordering is lexicographic over (x, y, z, w).
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Vec4 {
    pub x: Real,
    pub y: Real,
    pub z: Real,
    pub w: Real,
}

impl Vec4 {
    pub const ZERO: Self = Self::splat(0.0);
    pub const ONE: Self = Self::splat(1.0);
    /// All components set to positive infinity
    pub const INF: Self = Self::splat(scalar::INF);
    pub const X: Self = Self::new(1.0, 0.0, 0.0, 0.0);
    pub const Y: Self = Self::new(0.0, 1.0, 0.0, 0.0);
    pub const Z: Self = Self::new(0.0, 0.0, 1.0, 0.0);
    pub const W: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Create a new Vec4
    #[inline]
    pub const fn new(x: Real, y: Real, z: Real, w: Real) -> Self {
        Self { x, y, z, w }
    }

    /// Vector with all four components set to `v`
    #[inline]
    pub const fn splat(v: Real) -> Self {
        Self::new(v, v, v, v)
    }

    #[inline]
    pub const fn from_xy_zw(xy: Vec2, zw: Vec2) -> Self {
        Self::new(xy.x, xy.y, zw.x, zw.y)
    }

    #[inline]
    pub const fn from_xy_z_w(xy: Vec2, z: Real, w: Real) -> Self {
        Self::new(xy.x, xy.y, z, w)
    }

    #[inline]
    pub const fn from_x_yz_w(x: Real, yz: Vec2, w: Real) -> Self {
        Self::new(x, yz.x, yz.y, w)
    }

    #[inline]
    pub const fn from_x_y_zw(x: Real, y: Real, zw: Vec2) -> Self {
        Self::new(x, y, zw.x, zw.y)
    }

    #[inline]
    pub const fn from_xyz_w(xyz: Vec3, w: Real) -> Self {
        Self::new(xyz.x, xyz.y, xyz.z, w)
    }

    #[inline]
    pub const fn from_x_yzw(x: Real, yzw: Vec3) -> Self {
        Self::new(x, yzw.x, yzw.y, yzw.z)
    }

    #[inline]
    pub const fn to_array(self) -> [Real; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Component by index (0 = x .. 3 = w)
    pub fn get(&self, index: usize) -> Result<Real, VectorError> {
        match index {
            0 => Ok(self.x),
            1 => Ok(self.y),
            2 => Ok(self.z),
            3 => Ok(self.w),
            _ => Err(VectorError::IndexOutOfRange { index }),
        }
    }

    /// Set a component by index (0 = x .. 3 = w)
    pub fn set(&mut self, index: usize, value: Real) -> Result<(), VectorError> {
        match index {
            0 => self.x = value,
            1 => self.y = value,
            2 => self.z = value,
            3 => self.w = value,
            _ => return Err(VectorError::IndexOutOfRange { index }),
        }
        Ok(())
    }

    /// Scale this vector to unit length, in place
    ///
    /// A zero vector stays zero rather than becoming NaN. See
    /// [`normalized`](Self::normalized) for the non-mutating form.
    pub fn normalize(&mut self) {
        let length_squared = self.length_squared();
        if length_squared == 0.0 {
            *self = Self::ZERO;
        } else {
            let length = length_squared.sqrt();
            self.x /= length;
            self.y /= length;
            self.z /= length;
            self.w /= length;
        }
    }

    /// Copy of this vector scaled to unit length (zero stays zero)
    #[inline]
    pub fn normalized(self) -> Self {
        let mut v = self;
        v.normalize();
        v
    }

    /// True if the length is 1 within [`EPSILON`](crate::EPSILON)
    #[inline]
    pub fn is_normalized(self) -> bool {
        (self.length_squared() - 1.0).abs() < scalar::EPSILON
    }

    /// Dot product
    #[inline]
    pub fn dot(self, other: Self) -> Real {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Length squared (faster than length)
    #[inline]
    pub fn length_squared(self) -> Real {
        self.dot(self)
    }

    /// Length (magnitude)
    #[inline]
    pub fn length(self) -> Real {
        self.length_squared().sqrt()
    }

    /// Unit vector pointing from `self` towards `to`
    #[inline]
    pub fn direction_to(self, to: Self) -> Self {
        (to - self).normalized()
    }

    #[inline]
    pub fn distance_to(self, to: Self) -> Real {
        (to - self).length()
    }

    #[inline]
    pub fn distance_squared_to(self, to: Self) -> Real {
        (to - self).length_squared()
    }

    /// Component-wise absolute value
    #[inline]
    pub fn abs(self) -> Self {
        self.map(Real::abs)
    }

    #[inline]
    pub fn ceil(self) -> Self {
        self.map(Real::ceil)
    }

    #[inline]
    pub fn floor(self) -> Self {
        self.map(Real::floor)
    }

    /// Component-wise rounding, halfway cases to even
    #[inline]
    pub fn round(self) -> Self {
        self.map(scalar::round)
    }

    /// -1, 0 or 1 per component
    #[inline]
    pub fn sign(self) -> Self {
        self.map(scalar::sign)
    }

    /// Component-wise reciprocal; zero components become infinite
    #[inline]
    pub fn inverse(self) -> Self {
        self.map(|c| 1.0 / c)
    }

    /// Clamp each component between corresponding min and max values
    #[inline]
    pub fn clamp(self, min: Self, max: Self) -> Self {
        Self::new(
            scalar::clamp(self.x, min.x, max.x),
            scalar::clamp(self.y, min.y, max.y),
            scalar::clamp(self.z, min.z, max.z),
            scalar::clamp(self.w, min.w, max.w),
        )
    }

    /// Clamp every component between `min` and `max`
    #[inline]
    pub fn clamp_scalar(self, min: Real, max: Real) -> Self {
        self.map(|c| scalar::clamp(c, min, max))
    }

    /// Round each component to the nearest multiple of the matching step
    #[inline]
    pub fn snapped(self, step: Self) -> Self {
        self.zip_map(step, scalar::snapped)
    }

    #[inline]
    pub fn snapped_scalar(self, step: Real) -> Self {
        self.map(|c| scalar::snapped(c, step))
    }

    /// Component-wise maximum
    #[inline]
    pub fn max(self, other: Self) -> Self {
        self.zip_map(other, scalar::max)
    }

    #[inline]
    pub fn max_scalar(self, with: Real) -> Self {
        self.map(|c| scalar::max(c, with))
    }

    /// Component-wise minimum
    #[inline]
    pub fn min(self, other: Self) -> Self {
        self.zip_map(other, scalar::min)
    }

    #[inline]
    pub fn min_scalar(self, with: Real) -> Self {
        self.map(|c| scalar::min(c, with))
    }

    /// Positive remainder of each component by the matching component of `modv`
    ///
    /// Unlike `%`, the result has the sign of the modulus.
    #[inline]
    pub fn posmod(self, modv: Self) -> Self {
        self.zip_map(modv, scalar::posmod)
    }

    #[inline]
    pub fn posmod_scalar(self, m: Real) -> Self {
        self.map(|c| scalar::posmod(c, m))
    }

    /// Linear interpolation between two vectors
    ///
    /// `weight` is not clamped, so values outside `[0, 1]` extrapolate.
    #[inline]
    pub fn lerp(self, to: Self, weight: Real) -> Self {
        self.zip_map(to, |a, b| scalar::lerp(a, b, weight))
    }

    /// Cubic interpolation towards `b`, with `pre_a` and `post_b` as handles
    pub fn cubic_interpolate(self, b: Self, pre_a: Self, post_b: Self, weight: Real) -> Self {
        Self::new(
            scalar::cubic_interpolate(self.x, b.x, pre_a.x, post_b.x, weight),
            scalar::cubic_interpolate(self.y, b.y, pre_a.y, post_b.y, weight),
            scalar::cubic_interpolate(self.z, b.z, pre_a.z, post_b.z, weight),
            scalar::cubic_interpolate(self.w, b.w, pre_a.w, post_b.w, weight),
        )
    }

    /// Like [`cubic_interpolate`](Self::cubic_interpolate), but with the time
    /// of each control point taken into account
    ///
    /// `b_t`, `pre_a_t` and `post_b_t` are measured relative to `self`.
    #[allow(clippy::too_many_arguments)]
    pub fn cubic_interpolate_in_time(
        self,
        b: Self,
        pre_a: Self,
        post_b: Self,
        weight: Real,
        b_t: Real,
        pre_a_t: Real,
        post_b_t: Real,
    ) -> Self {
        let component = |from: Real, to: Real, pre: Real, post: Real| {
            scalar::cubic_interpolate_in_time(from, to, pre, post, weight, b_t, pre_a_t, post_b_t)
        };
        Self::new(
            component(self.x, b.x, pre_a.x, post_b.x),
            component(self.y, b.y, pre_a.y, post_b.y),
            component(self.z, b.z, pre_a.z, post_b.z),
            component(self.w, b.w, pre_a.w, post_b.w),
        )
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

    /// True if no component is infinite or NaN
    #[inline]
    pub fn is_finite(self) -> bool {
        self.to_array().into_iter().all(scalar::is_finite)
    }

    /// Component-wise [`scalar::is_equal_approx`]
    #[inline]
    pub fn is_equal_approx(self, other: Self) -> bool {
        self.to_array()
            .into_iter()
            .zip(other.to_array())
            .all(|(a, b)| scalar::is_equal_approx(a, b))
    }

    #[inline]
    pub fn is_zero_approx(self) -> bool {
        self.to_array().into_iter().all(scalar::is_zero_approx)
    }

    /// Narrow to an integer vector, truncating each component toward zero
    ///
    /// NaN becomes 0 and out-of-range components saturate. Apply
    /// [`round`](Self::round), [`floor`](Self::floor) or [`ceil`](Self::ceil)
    /// first for other rounding modes.
    #[inline]
    pub fn trunc_to_ivec4(self) -> IVec4 {
        IVec4::new(self.x as i32, self.y as i32, self.z as i32, self.w as i32)
    }

    /// `"(x, y, z, w)"` with every component rendered by a format token
    ///
    /// See [`ComponentFormat`](crate::ComponentFormat) for the accepted tokens.
    pub fn to_string_with(&self, format: &str) -> Result<String, VectorError> {
        format_reals(format, &self.to_array())
    }

    #[inline]
    fn map(self, f: impl Fn(Real) -> Real) -> Self {
        Self::new(f(self.x), f(self.y), f(self.z), f(self.w))
    }

    #[inline]
    fn zip_map(self, other: Self, f: impl Fn(Real, Real) -> Real) -> Self {
        Self::new(
            f(self.x, other.x),
            f(self.y, other.y),
            f(self.z, other.z),
            f(self.w, other.w),
        )
    }

    /// Lexicographic comparison: the first differing component decides with
    /// `outer`, and `last` decides on w when x, y and z are all equal
    #[inline]
    fn compare_with(
        &self,
        other: &Self,
        outer: fn(&Real, &Real) -> bool,
        last: fn(&Real, &Real) -> bool,
    ) -> bool {
        if self.x != other.x {
            return outer(&self.x, &other.x);
        }
        if self.y != other.y {
            return outer(&self.y, &other.y);
        }
        if self.z != other.z {
            return outer(&self.z, &other.z);
        }
        last(&self.w, &other.w)
    }
}

impl From<[Real; 4]> for Vec4 {
    #[inline]
    fn from([x, y, z, w]: [Real; 4]) -> Self {
        Self::new(x, y, z, w)
    }
}

impl From<Vec4> for [Real; 4] {
    #[inline]
    fn from(v: Vec4) -> Self {
        v.to_array()
    }
}

impl From<Vec4> for (Real, Real, Real, Real) {
    #[inline]
    fn from(v: Vec4) -> Self {
        (v.x, v.y, v.z, v.w)
    }
}

impl Index<usize> for Vec4 {
    type Output = Real;

    fn index(&self, index: usize) -> &Real {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("{}", VectorError::IndexOutOfRange { index }),
        }
    }
}

impl IndexMut<usize> for Vec4 {
    fn index_mut(&mut self, index: usize) -> &mut Real {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            3 => &mut self.w,
            _ => panic!("{}", VectorError::IndexOutOfRange { index }),
        }
    }
}

impl Index<Axis> for Vec4 {
    type Output = Real;

    #[inline]
    fn index(&self, axis: Axis) -> &Real {
        &self[axis.index()]
    }
}

impl IndexMut<Axis> for Vec4 {
    #[inline]
    fn index_mut(&mut self, axis: Axis) -> &mut Real {
        &mut self[axis.index()]
    }
}

impl Hash for Vec4 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for c in self.to_array() {
            // 0.0 == -0.0, so they must hash alike
            let c = if c == 0.0 { 0.0 } else { c };
            c.to_bits().hash(state);
        }
    }
}

impl PartialOrd for Vec4 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        for (a, b) in self.to_array().into_iter().zip(other.to_array()) {
            if a != b {
                return a.partial_cmp(&b);
            }
        }
        Some(Ordering::Equal)
    }

    #[inline]
    fn lt(&self, other: &Self) -> bool {
        self.compare_with(other, Real::lt, Real::lt)
    }

    #[inline]
    fn le(&self, other: &Self) -> bool {
        self.compare_with(other, Real::lt, Real::le)
    }

    #[inline]
    fn gt(&self, other: &Self) -> bool {
        self.compare_with(other, Real::gt, Real::gt)
    }

    #[inline]
    fn ge(&self, other: &Self) -> bool {
        self.compare_with(other, Real::gt, Real::ge)
    }
}

/// Formatter options such as precision are applied to every component
impl fmt::Display for Vec4 {
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

impl std::ops::Add for Vec4 {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(
            self.x + other.x,
            self.y + other.y,
            self.z + other.z,
            self.w + other.w,
        )
    }
}

impl std::ops::AddAssign for Vec4 {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
        self.w += other.w;
    }
}

impl std::ops::Sub for Vec4 {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(
            self.x - other.x,
            self.y - other.y,
            self.z - other.z,
            self.w - other.w,
        )
    }
}

impl std::ops::SubAssign for Vec4 {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.x -= other.x;
        self.y -= other.y;
        self.z -= other.z;
        self.w -= other.w;
    }
}

impl std::ops::Neg for Vec4 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl std::ops::Mul<Real> for Vec4 {
    type Output = Self;
    #[inline]
    fn mul(self, scalar: Real) -> Self {
        self.map(|c| c * scalar)
    }
}

impl std::ops::Mul<Vec4> for Real {
    type Output = Vec4;
    #[inline]
    fn mul(self, vec: Vec4) -> Vec4 {
        vec * self
    }
}

/// Component-wise (Hadamard) product
impl std::ops::Mul for Vec4 {
    type Output = Self;
    #[inline]
    fn mul(self, other: Self) -> Self {
        self.zip_map(other, |a, b| a * b)
    }
}

impl std::ops::MulAssign<Real> for Vec4 {
    #[inline]
    fn mul_assign(&mut self, scalar: Real) {
        *self = *self * scalar;
    }
}

impl std::ops::MulAssign for Vec4 {
    #[inline]
    fn mul_assign(&mut self, other: Self) {
        *self = *self * other;
    }
}

impl std::ops::Div<Real> for Vec4 {
    type Output = Self;
    #[inline]
    fn div(self, scalar: Real) -> Self {
        self.map(|c| c / scalar)
    }
}

impl std::ops::Div for Vec4 {
    type Output = Self;
    #[inline]
    fn div(self, other: Self) -> Self {
        self.zip_map(other, |a, b| a / b)
    }
}

impl std::ops::DivAssign<Real> for Vec4 {
    #[inline]
    fn div_assign(&mut self, scalar: Real) {
        *self = *self / scalar;
    }
}

impl std::ops::DivAssign for Vec4 {
    #[inline]
    fn div_assign(&mut self, other: Self) {
        *self = *self / other;
    }
}

/// Truncated remainder: each result takes the sign of the dividend.
/// Use [`Vec4::posmod_scalar`] for a non-negative result.
impl std::ops::Rem<Real> for Vec4 {
    type Output = Self;
    #[inline]
    fn rem(self, divisor: Real) -> Self {
        self.map(|c| c % divisor)
    }
}

impl std::ops::Rem for Vec4 {
    type Output = Self;
    #[inline]
    fn rem(self, divisor: Self) -> Self {
        self.zip_map(divisor, |a, b| a % b)
    }
}

impl std::ops::RemAssign<Real> for Vec4 {
    #[inline]
    fn rem_assign(&mut self, divisor: Real) {
        *self = *self % divisor;
    }
}

impl std::ops::RemAssign for Vec4 {
    #[inline]
    fn rem_assign(&mut self, divisor: Self) {
        *self = *self % divisor;
    }
}

//! Swizzle accessors
//!
//! Every ordered selection of 2 to 4 components gets a read accessor named
//! after its letters (`v.zwxy()`). Selections without repeated components also
//! get a write accessor (`v.set_zwxy(value)`) that scatters the value back
//! into the named components in the same order. The accessors are generated
//! by the build script from [`rules`].
//!
//! For selections chosen at runtime use [`Vec4::swizzle`] and
//! [`Vec4::set_swizzle`] (and their [`IVec4`] counterparts).

pub mod rules;

pub use rules::{all_patterns, is_writable, patterns, SwizzlePattern};

use crate::{Axis, IVec2, IVec3, IVec4, Real, Vec2, Vec3, Vec4, VectorError};

macro_rules! swizzle_get {
    ($name:ident, $output:ident, $($c:ident),+) => {
        #[doc = concat!("Returns the `(", stringify!($($c),+), ")` components as a [`", stringify!($output), "`].")]
        #[inline]
        pub fn $name(self) -> $output {
            $output::new($(self.$c),+)
        }
    };
}

macro_rules! swizzle_set {
    ($name:ident, $input:ident, $($c:ident => $field:ident),+) => {
        #[doc = concat!("Assigns a [`", stringify!($input), "`] to the `(", stringify!($($c),+), ")` components, in order.")]
        #[inline]
        pub fn $name(&mut self, value: $input) {
            $(self.$c = value.$field;)+
        }
    };
}

include!(concat!(env!("OUT_DIR"), "/swizzles.rs"));

fn pattern_name(axes: &[Axis]) -> String {
    axes.iter().map(|a| a.letter()).collect()
}

fn axis_indices<const N: usize>(axes: &[Axis; N]) -> [usize; N] {
    axes.map(Axis::index)
}

macro_rules! impl_runtime_swizzle {
    ($vec:ident, $scalar:ty) => {
        impl $vec {
            /// Read the components named by `axes`, in order. Repeats are allowed.
            pub fn swizzle<const N: usize>(&self, axes: [Axis; N]) -> [$scalar; N] {
                axes.map(|axis| self[axis])
            }

            /// Scatter `values` into the components named by `axes`
            ///
            /// Fails without modifying `self` if an axis is repeated.
            pub fn set_swizzle<const N: usize>(
                &mut self,
                axes: [Axis; N],
                values: [$scalar; N],
            ) -> Result<(), VectorError> {
                if !is_writable(&axis_indices(&axes)) {
                    return Err(VectorError::SwizzleNotWritable {
                        pattern: pattern_name(&axes),
                    });
                }
                for (axis, value) in axes.into_iter().zip(values) {
                    self[axis] = value;
                }
                Ok(())
            }
        }
    };
}

impl_runtime_swizzle!(Vec4, Real);
impl_runtime_swizzle!(IVec4, i32);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_counts() {
        assert_eq!(patterns(2).count(), 16);
        assert_eq!(patterns(3).count(), 64);
        assert_eq!(patterns(4).count(), 256);
        assert_eq!(all_patterns().count(), 336);
    }

    #[test]
    fn test_writable_counts() {
        let writable = |len| patterns(len).filter(SwizzlePattern::is_writable).count();
        assert_eq!(writable(2), 12);
        assert_eq!(writable(3), 24);
        assert_eq!(writable(4), 24);
    }

    #[test]
    fn test_pattern_order_and_names() {
        let names: Vec<String> = patterns(2).map(|p| p.name()).collect();
        assert_eq!(names[0], "xx");
        assert_eq!(names[1], "xy");
        assert_eq!(names[4], "yx");
        assert_eq!(names[15], "ww");
        let last = patterns(4).last().unwrap();
        assert_eq!(last.name(), "wwww");
        assert_eq!(last.setter_name(), "set_wwww");
    }

    #[test]
    fn test_is_writable() {
        assert!(is_writable(&[2, 0, 1]));
        assert!(is_writable(&[3, 2, 1, 0]));
        assert!(!is_writable(&[0, 0]));
        assert!(!is_writable(&[1, 2, 1, 3]));
    }

    #[test]
    fn test_generated_readers() {
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v.xx(), Vec2::new(1.0, 1.0));
        assert_eq!(v.wy(), Vec2::new(4.0, 2.0));
        assert_eq!(v.zxy(), Vec3::new(3.0, 1.0, 2.0));
        assert_eq!(v.wwwx(), Vec4::new(4.0, 4.0, 4.0, 1.0));
        assert_eq!(v.xyzw(), v);

        let iv = IVec4::new(1, 2, 3, 4);
        assert_eq!(iv.yy(), IVec2::new(2, 2));
        assert_eq!(iv.wzy(), IVec3::new(4, 3, 2));
        assert_eq!(iv.zwxy(), IVec4::new(3, 4, 1, 2));
    }

    #[test]
    fn test_generated_writers_scatter_in_order() {
        let mut v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        v.set_zxy(Vec3::new(10.0, 20.0, 30.0));
        // z <- value.x, x <- value.y, y <- value.z
        assert_eq!(v, Vec4::new(20.0, 30.0, 10.0, 4.0));

        let mut v = Vec4::ZERO;
        v.set_wx(Vec2::new(5.0, 6.0));
        assert_eq!(v, Vec4::new(6.0, 0.0, 0.0, 5.0));

        let mut iv = IVec4::ZERO;
        iv.set_ywzx(IVec4::new(1, 2, 3, 4));
        assert_eq!(iv, IVec4::new(4, 1, 3, 2));
    }

    #[test]
    fn test_write_then_read_round_trip() {
        let mut v = Vec4::new(9.0, 9.0, 9.0, 9.0);
        v.set_zwxy(Vec4::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(v.xyzw(), Vec4::new(3.0, 4.0, 1.0, 2.0));
    }

    #[test]
    fn test_runtime_swizzle() {
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v.swizzle([Axis::W, Axis::X]), [4.0, 1.0]);
        assert_eq!(v.swizzle([Axis::Y, Axis::Y, Axis::Y]), [2.0, 2.0, 2.0]);

        let mut iv = IVec4::ZERO;
        iv.set_swizzle([Axis::Z, Axis::X, Axis::Y], [1, 2, 3]).unwrap();
        assert_eq!(iv, IVec4::new(2, 3, 1, 0));
    }

    #[test]
    fn test_runtime_swizzle_rejects_repeats() {
        let mut v = Vec4::ONE;
        let err = v.set_swizzle([Axis::X, Axis::Z, Axis::X], [5.0, 6.0, 7.0]).unwrap_err();
        assert_eq!(
            err,
            VectorError::SwizzleNotWritable {
                pattern: "xzx".to_string()
            }
        );
        assert_eq!(v, Vec4::ONE);
    }
}

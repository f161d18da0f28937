//! 4D Vector Value Types
//!
//! This crate provides the fixed-size 4-component vectors used throughout
//! QuadVec, one over real scalars and one over integers.
//!
//! ## Core Types
//!
//! - [`Vec4`] - real vector with x, y, z, w components
//! - [`IVec4`] - i32 vector with x, y, z, w components
//! - [`Axis`] - component slot returned by extremal-axis queries
//!
//! ## Swizzles
//!
//! Both vector types expose every 2-, 3- and 4-component swizzle as a method
//! (`v.zxy()`), returning [`Vec2`]/[`Vec3`]/[`Vec4`] or their integer
//! counterparts. Swizzles without repeated components can also be assigned
//! (`v.set_zxy(value)`). See [`swizzle`] for details.
//!
//! ## Conversions
//!
//! Integer to real is [`IVec4::as_vec4`]; real to integer is
//! [`Vec4::trunc_to_ivec4`], which truncates toward zero. Neither happens
//! implicitly.
//!
//! ## Precision
//!
//! [`Real`] is `f32` unless the `double-precision` feature is enabled.

mod axis;
mod error;
mod ivec4;
mod vec2;
mod vec3;
mod vec4;
pub mod format;
pub mod scalar;
pub mod swizzle;

pub use axis::Axis;
pub use error::VectorError;
pub use format::ComponentFormat;
pub use ivec4::IVec4;
pub use scalar::{Real, EPSILON};
pub use vec2::{IVec2, Vec2};
pub use vec3::{IVec3, Vec3};
pub use vec4::Vec4;

//! vtween-api-core: value types shared by the tween engine and its hosts.
//!
//! Everything here is plain data plus the small amount of math the
//! interpolators need (lerp, angle wrapping, Euler to quaternion, slerp).
//! All numeric types use f32.

pub mod rotation;
pub mod value;

pub use rotation::{wrap_angle_180, wrap_angle_360};
pub use value::{Color, Quat, Rect, Vec2, Vec3};

//! Interpolation strategy dispatch.
//!
//! One stateless [`Interpolator`] per [`InterpolatorKind`], cached lazily by
//! [`InterpRegistry`]. A kind declares the (domain, range) pair it drives;
//! requesting it with other types fails instead of guessing.

pub mod functions;
pub mod registry;

use serde::{Deserialize, Serialize};

use crate::settings::ApplierSettings;

pub use functions::*;
pub use registry::InterpRegistry;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InterpolatorKind {
    Float,
    Int,
    Vec2,
    Vec3,
    /// Euler angles in degrees, delivered as a quaternion.
    EulerRotation,
    Rotation,
    Color,
    Rect,
    /// Reveal the target string by truncation.
    Text,
}

impl InterpolatorKind {
    pub const ALL: [InterpolatorKind; 9] = [
        Self::Float,
        Self::Int,
        Self::Vec2,
        Self::Vec3,
        Self::EulerRotation,
        Self::Rotation,
        Self::Color,
        Self::Rect,
        Self::Text,
    ];

    /// Human-readable `domain -> range` signature, used in mismatch errors.
    pub fn declared_types(self) -> &'static str {
        match self {
            Self::Float => "f32 -> f32",
            Self::Int => "i32 -> i32",
            Self::Vec2 => "Vec2 -> Vec2",
            Self::Vec3 => "Vec3 -> Vec3",
            Self::EulerRotation => "Vec3 -> Quat",
            Self::Rotation => "Quat -> Quat",
            Self::Color => "Color -> Color",
            Self::Rect => "Rect -> Rect",
            Self::Text => "String -> String",
        }
    }
}

/// Strategy computing a value of `R` from two endpoints of `D` and an eased progress.
pub trait Interpolator<D, R = D>: Send + Sync {
    fn kind(&self) -> InterpolatorKind;

    /// Interpolated value at `t`. `t` is not clamped.
    fn interpolate(&self, start: &D, target: &D, t: f32, settings: &ApplierSettings) -> R;

    /// Compute the value at `t` and hand it to `setter`.
    #[inline]
    fn apply(
        &self,
        setter: &mut dyn FnMut(R),
        start: &D,
        target: &D,
        t: f32,
        settings: &ApplierSettings,
    ) {
        setter(self.interpolate(start, target, t, settings));
    }
}

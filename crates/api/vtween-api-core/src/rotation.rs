//! Rotation helpers: angle wrapping, Euler degrees to quaternion, unclamped slerp.
//!
//! Euler angles follow the Z, then X, then Y application order
//! (`q = qy * qx * qz`), in degrees.

use crate::value::{lerp_f32, Quat, Vec3};

/// Wrap an angle in degrees into [-180, 180].
#[inline]
pub fn wrap_angle_180(deg: f32) -> f32 {
    let mut a = deg % 360.0;
    if a > 180.0 {
        a -= 360.0;
    } else if a < -180.0 {
        a += 360.0;
    }
    a
}

/// Wrap an angle in degrees into [0, 360).
#[inline]
pub fn wrap_angle_360(deg: f32) -> f32 {
    let a = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if a >= 360.0 {
        0.0
    } else {
        a
    }
}

impl Quat {
    /// Build a rotation from Euler angles in degrees.
    pub fn from_euler_degrees(euler: Vec3) -> Self {
        let (sx, cx) = (euler.x.to_radians() * 0.5).sin_cos();
        let (sy, cy) = (euler.y.to_radians() * 0.5).sin_cos();
        let (sz, cz) = (euler.z.to_radians() * 0.5).sin_cos();
        let qx = Quat::new(sx, 0.0, 0.0, cx);
        let qy = Quat::new(0.0, sy, 0.0, cy);
        let qz = Quat::new(0.0, 0.0, sz, cz);
        qy.mul(qx).mul(qz)
    }

    /// Spherical interpolation along the shortest arc. `t` is not clamped,
    /// so values outside [0, 1] keep rotating past either end.
    pub fn slerp_unclamped(self, other: Self, t: f32) -> Self {
        let mut b = other;
        let mut cos = self.dot(b);
        if cos < 0.0 {
            b = b.neg();
            cos = -cos;
        }

        // nearly parallel: sin(theta) underflows, fall back to nlerp
        if cos > 0.9995 {
            return Quat::new(
                lerp_f32(self.x, b.x, t),
                lerp_f32(self.y, b.y, t),
                lerp_f32(self.z, b.z, t),
                lerp_f32(self.w, b.w, t),
            )
            .normalize();
        }

        let theta = cos.min(1.0).acos();
        let sin = theta.sin();
        let wa = ((1.0 - t) * theta).sin() / sin;
        let wb = (t * theta).sin() / sin;
        Quat::new(
            self.x * wa + b.x * wb,
            self.y * wa + b.y * wb,
            self.z * wa + b.z * wb,
            self.w * wa + b.w * wb,
        )
        .normalize()
    }
}

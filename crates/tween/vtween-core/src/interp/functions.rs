//! Built-in interpolators, one per [`InterpolatorKind`].
//!
//! All of them are unclamped: an eased progress outside [0, 1] (Back,
//! Elastic) extrapolates past the endpoints.

use vtween_api_core::value::lerp_f32;
use vtween_api_core::{wrap_angle_180, wrap_angle_360, Color, Quat, Rect, Vec2, Vec3};

use super::{Interpolator, InterpolatorKind};
use crate::settings::{round_to, snap, ApplierSettings};

#[derive(Debug, Default, Clone, Copy)]
pub struct FloatInterpolator;

impl Interpolator<f32> for FloatInterpolator {
    fn kind(&self) -> InterpolatorKind {
        InterpolatorKind::Float
    }

    fn interpolate(&self, start: &f32, target: &f32, t: f32, settings: &ApplierSettings) -> f32 {
        let s = settings.float();
        let v = snap(lerp_f32(*start, *target, t), s.snap_interval);
        match s.decimals {
            Some(d) => round_to(v, d),
            None => v,
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct IntInterpolator;

impl Interpolator<i32> for IntInterpolator {
    fn kind(&self) -> InterpolatorKind {
        InterpolatorKind::Int
    }

    fn interpolate(&self, start: &i32, target: &i32, t: f32, settings: &ApplierSettings) -> i32 {
        let interval = settings.int().snap_interval as f32;
        snap(lerp_f32(*start as f32, *target as f32, t), interval).round() as i32
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Vec2Interpolator;

impl Interpolator<Vec2> for Vec2Interpolator {
    fn kind(&self) -> InterpolatorKind {
        InterpolatorKind::Vec2
    }

    fn interpolate(&self, start: &Vec2, target: &Vec2, t: f32, settings: &ApplierSettings) -> Vec2 {
        let interval = settings.vector().snap_interval;
        start
            .lerp_unclamped(*target, t)
            .map(|c| snap(c, interval))
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Vec3Interpolator;

impl Interpolator<Vec3> for Vec3Interpolator {
    fn kind(&self) -> InterpolatorKind {
        InterpolatorKind::Vec3
    }

    fn interpolate(&self, start: &Vec3, target: &Vec3, t: f32, settings: &ApplierSettings) -> Vec3 {
        let interval = settings.vector().snap_interval;
        start
            .lerp_unclamped(*target, t)
            .map(|c| snap(c, interval))
    }
}

/// Euler angles (degrees) in, quaternion out.
#[derive(Debug, Default, Clone, Copy)]
pub struct EulerRotationInterpolator;

impl EulerRotationInterpolator {
    /// Intermediate Euler angles before conversion. Exposed for inspection and tests.
    pub fn euler_at(start: Vec3, target: Vec3, t: f32, settings: &ApplierSettings) -> Vec3 {
        let s = settings.euler();
        let euler = match s.mode {
            crate::settings::RotationMode::Fast => {
                let target = if s.wrap_target {
                    target.map(wrap_angle_360)
                } else {
                    target
                };
                Vec3::new(
                    start.x + wrap_angle_180(target.x - start.x) * t,
                    start.y + wrap_angle_180(target.y - start.y) * t,
                    start.z + wrap_angle_180(target.z - start.z) * t,
                )
            }
            crate::settings::RotationMode::Slow => start.lerp_unclamped(target, t),
        };
        euler.map(|c| snap(c, s.snap_interval))
    }
}

impl Interpolator<Vec3, Quat> for EulerRotationInterpolator {
    fn kind(&self) -> InterpolatorKind {
        InterpolatorKind::EulerRotation
    }

    fn interpolate(&self, start: &Vec3, target: &Vec3, t: f32, settings: &ApplierSettings) -> Quat {
        Quat::from_euler_degrees(Self::euler_at(*start, *target, t, settings))
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RotationInterpolator;

impl Interpolator<Quat> for RotationInterpolator {
    fn kind(&self) -> InterpolatorKind {
        InterpolatorKind::Rotation
    }

    fn interpolate(&self, start: &Quat, target: &Quat, t: f32, _settings: &ApplierSettings) -> Quat {
        start.slerp_unclamped(*target, t)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ColorInterpolator;

impl Interpolator<Color> for ColorInterpolator {
    fn kind(&self) -> InterpolatorKind {
        InterpolatorKind::Color
    }

    fn interpolate(&self, start: &Color, target: &Color, t: f32, _settings: &ApplierSettings) -> Color {
        start.lerp_unclamped(*target, t)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RectInterpolator;

impl Interpolator<Rect> for RectInterpolator {
    fn kind(&self) -> InterpolatorKind {
        InterpolatorKind::Rect
    }

    fn interpolate(&self, start: &Rect, target: &Rect, t: f32, _settings: &ApplierSettings) -> Rect {
        start.lerp_unclamped(*target, t)
    }
}

/// Reveals the target string: the output is always a prefix of `target`,
/// whose length runs from `len(start)` to `len(target)`. The start text is
/// only used for its length.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextInterpolator;

impl Interpolator<String> for TextInterpolator {
    fn kind(&self) -> InterpolatorKind {
        InterpolatorKind::Text
    }

    fn interpolate(&self, start: &String, target: &String, t: f32, _settings: &ApplierSettings) -> String {
        let start_len = start.chars().count() as f32;
        let target_len = target.chars().count();
        let len = lerp_f32(start_len, target_len as f32, t).floor();
        let len = if len <= 0.0 {
            0
        } else {
            (len as usize).min(target_len)
        };
        target.chars().take(len).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{EulerSettings, FloatSettings, IntSettings, RotationMode, VectorSettings};
    use approx::assert_relative_eq;

    fn float_settings(snap_interval: f32, decimals: Option<u32>) -> ApplierSettings {
        ApplierSettings::Float(FloatSettings {
            snap_interval,
            decimals,
        })
    }

    #[test]
    fn float_lerps_unclamped() {
        let s = float_settings(0.0, None);
        assert_relative_eq!(FloatInterpolator.interpolate(&0.0, &10.0, 0.25, &s), 2.5);
        assert_relative_eq!(FloatInterpolator.interpolate(&0.0, &10.0, 1.2, &s), 12.0);
    }

    #[test]
    fn float_snaps_then_rounds() {
        let s = float_settings(5.0, Some(2));
        assert_eq!(FloatInterpolator.interpolate(&0.0, &10.0, 0.6, &s), 5.0);
        assert_eq!(FloatInterpolator.interpolate(&0.0, &10.0, 0.75, &s), 10.0);

        let s = float_settings(0.0, Some(2));
        assert_eq!(FloatInterpolator.interpolate(&0.0, &1.0, 1.0 / 3.0, &s), 0.33);
    }

    #[test]
    fn int_rounds_to_nearest() {
        let s = ApplierSettings::Int(IntSettings::default());
        assert_eq!(IntInterpolator.interpolate(&0, &10, 0.26, &s), 3);
        let s = ApplierSettings::Int(IntSettings { snap_interval: 4 });
        assert_eq!(IntInterpolator.interpolate(&0, &10, 0.5, &s), 4);
    }

    #[test]
    fn vectors_snap_per_axis() {
        let s = ApplierSettings::Vector(VectorSettings { snap_interval: 1.0 });
        let v = Vec3Interpolator.interpolate(&Vec3::ZERO, &Vec3::new(2.0, 4.0, -2.0), 0.3, &s);
        assert_eq!(v, Vec3::new(1.0, 1.0, -1.0));
        let v = Vec2Interpolator.interpolate(&Vec2::ZERO, &Vec2::new(10.0, 0.0), 0.5, &s);
        assert_eq!(v, Vec2::new(5.0, 0.0));
    }

    #[test]
    fn euler_fast_takes_short_way() {
        let fast = ApplierSettings::Euler(EulerSettings::default());
        let e = EulerRotationInterpolator::euler_at(
            Vec3::new(0.0, 350.0, 0.0),
            Vec3::new(0.0, 10.0, 0.0),
            0.5,
            &fast,
        );
        assert_relative_eq!(e.y, 360.0);

        let slow = ApplierSettings::Euler(EulerSettings {
            mode: RotationMode::Slow,
            ..EulerSettings::default()
        });
        let e = EulerRotationInterpolator::euler_at(
            Vec3::new(0.0, 350.0, 0.0),
            Vec3::new(0.0, 10.0, 0.0),
            0.5,
            &slow,
        );
        assert_relative_eq!(e.y, 180.0);
    }

    #[test]
    fn euler_fast_wraps_target_first() {
        let s = ApplierSettings::Euler(EulerSettings {
            wrap_target: true,
            ..EulerSettings::default()
        });
        let e = EulerRotationInterpolator::euler_at(Vec3::ZERO, Vec3::new(0.0, 0.0, 450.0), 1.0, &s);
        assert_relative_eq!(e.z, 90.0);
    }

    #[test]
    fn euler_converts_to_quaternion() {
        let s = ApplierSettings::default_for(InterpolatorKind::EulerRotation);
        let q = EulerRotationInterpolator.interpolate(&Vec3::ZERO, &Vec3::new(0.0, 90.0, 0.0), 1.0, &s);
        assert_relative_eq!(Quat::IDENTITY.angle_between_degrees(q), 90.0, epsilon = 1e-3);
    }

    #[test]
    fn text_reveals_target_prefix() {
        let s = ApplierSettings::None;
        let hello = "Hello".to_string();
        assert_eq!(TextInterpolator.interpolate(&String::new(), &hello, 0.4, &s), "He");
        assert_eq!(TextInterpolator.interpolate(&String::new(), &hello, 1.0, &s), "Hello");
        assert_eq!(TextInterpolator.interpolate(&String::new(), &hello, 1.5, &s), "Hello");
        assert_eq!(TextInterpolator.interpolate(&String::new(), &hello, -0.2, &s), "");
        // start only contributes its length
        assert_eq!(
            TextInterpolator.interpolate(&"abc".to_string(), &hello, 0.0, &s),
            "Hel"
        );
    }

    #[test]
    fn apply_hands_value_to_setter() {
        let mut seen = Vec::new();
        let mut setter = |c: Color| seen.push(c);
        ColorInterpolator.apply(
            &mut setter,
            &Color::BLACK,
            &Color::WHITE,
            0.5,
            &ApplierSettings::None,
        );
        assert_eq!(seen, vec![Color::rgba(0.5, 0.5, 0.5, 1.0)]);
    }
}

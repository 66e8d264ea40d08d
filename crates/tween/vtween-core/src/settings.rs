//! Applier settings: per-tween knobs read by the interpolators.
//!
//! Settings are owned by the tween, never by the (shared, stateless)
//! interpolator. Each interpolator reads the variant it understands and falls
//! back to that variant's defaults otherwise.

use serde::{Deserialize, Serialize};

use crate::interp::InterpolatorKind;

/// How Euler rotations travel between start and target.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RotationMode {
    /// Shortest angular path per axis.
    #[default]
    Fast,
    /// Raw angle difference; may turn more than 180 degrees per axis.
    Slow,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FloatSettings {
    /// Snap to multiples of this interval; 0 disables snapping.
    pub snap_interval: f32,
    /// Decimal digits to round to after snapping; `None` leaves the value as is.
    pub decimals: Option<u32>,
}

impl Default for FloatSettings {
    fn default() -> Self {
        Self {
            snap_interval: 0.0,
            decimals: Some(2),
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct IntSettings {
    pub snap_interval: i32,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VectorSettings {
    pub snap_interval: f32,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EulerSettings {
    pub mode: RotationMode,
    /// Fast mode only: wrap the target into [0, 360) before finding the short path.
    pub wrap_target: bool,
    pub snap_interval: f32,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ApplierSettings {
    #[default]
    None,
    Float(FloatSettings),
    Int(IntSettings),
    Vector(VectorSettings),
    Euler(EulerSettings),
}

impl ApplierSettings {
    /// The settings a freshly built tween of `kind` starts with.
    pub fn default_for(kind: InterpolatorKind) -> Self {
        match kind {
            InterpolatorKind::Float => Self::Float(FloatSettings::default()),
            InterpolatorKind::Int => Self::Int(IntSettings::default()),
            InterpolatorKind::Vec2 | InterpolatorKind::Vec3 => {
                Self::Vector(VectorSettings::default())
            }
            InterpolatorKind::EulerRotation => Self::Euler(EulerSettings::default()),
            InterpolatorKind::Rotation
            | InterpolatorKind::Color
            | InterpolatorKind::Rect
            | InterpolatorKind::Text => Self::None,
        }
    }

    pub fn float(&self) -> FloatSettings {
        match self {
            Self::Float(s) => *s,
            _ => FloatSettings::default(),
        }
    }

    pub fn int(&self) -> IntSettings {
        match self {
            Self::Int(s) => *s,
            _ => IntSettings::default(),
        }
    }

    pub fn vector(&self) -> VectorSettings {
        match self {
            Self::Vector(s) => *s,
            _ => VectorSettings::default(),
        }
    }

    pub fn euler(&self) -> EulerSettings {
        match self {
            Self::Euler(s) => *s,
            _ => EulerSettings::default(),
        }
    }

    /// Set the snap interval on whichever variant carries one.
    pub fn set_snap_interval(&mut self, interval: f32) {
        match self {
            Self::Float(s) => s.snap_interval = interval,
            Self::Int(s) => s.snap_interval = interval.round() as i32,
            Self::Vector(s) => s.snap_interval = interval,
            Self::Euler(s) => s.snap_interval = interval,
            Self::None => {}
        }
    }

    pub fn set_decimals(&mut self, decimals: Option<u32>) {
        if let Self::Float(s) = self {
            s.decimals = decimals;
        }
    }

    pub fn set_rotation_mode(&mut self, mode: RotationMode) {
        if let Self::Euler(s) = self {
            s.mode = mode;
        }
    }

    pub fn set_wrap_target(&mut self, wrap: bool) {
        if let Self::Euler(s) = self {
            s.wrap_target = wrap;
        }
    }
}

/// Snap `v` to the nearest multiple of `interval`; a non-positive interval is a no-op.
#[inline]
pub fn snap(v: f32, interval: f32) -> f32 {
    if interval > 0.0 {
        (v / interval).round() * interval
    } else {
        v
    }
}

const MAX_DECIMALS: u32 = 9;

/// Round to `decimals` digits after the point; anything above 9 rounds to 9.
#[inline]
pub fn round_to(v: f32, decimals: u32) -> f32 {
    let scale = 10f32.powi(decimals.min(MAX_DECIMALS) as i32);
    (v * scale).round() / scale
}

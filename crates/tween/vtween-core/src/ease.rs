//! Easing library: 31 curves mapping normalized time to eased progress.
//!
//! Tags: `Linear = 0`, InOut curves `1..=10`, In curves `11..=20`,
//! Out curves `21..=30`, each group in family order
//! (Sine, Quad, Cubic, Quart, Quint, Expo, Circ, Back, Elastic, Bounce).
//! Back, Elastic and Bounce deliberately leave [0, 1] on the way.

use std::f32::consts::PI;

use serde::{Deserialize, Serialize};

use crate::error::TweenError;

const TWO_PI: f32 = 6.2831855;
const PI_OVER_2: f32 = 1.5707964;

/// Default elastic period for the In and Out curves.
const ELASTIC_PERIOD: f32 = 0.3;
/// Default elastic period for the InOut curve (0.3 * 1.5 in f32).
const ELASTIC_PERIOD_IN_OUT: f32 = 0.45000002;
/// Maps the [0, 1] overshoot knob onto the back constant; 0.5 gives 1.70158.
const BACK_OVERSHOOT_SCALE: f32 = 3.40316;
const BACK_IN_OUT_SCALE: f32 = 1.525;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum EaseKind {
    #[default]
    Linear = 0,

    InOutSine = 1,
    InOutQuad = 2,
    InOutCubic = 3,
    InOutQuart = 4,
    InOutQuint = 5,
    InOutExpo = 6,
    InOutCirc = 7,
    InOutBack = 8,
    InOutElastic = 9,
    InOutBounce = 10,

    InSine = 11,
    InQuad = 12,
    InCubic = 13,
    InQuart = 14,
    InQuint = 15,
    InExpo = 16,
    InCirc = 17,
    InBack = 18,
    InElastic = 19,
    InBounce = 20,

    OutSine = 21,
    OutQuad = 22,
    OutCubic = 23,
    OutQuart = 24,
    OutQuint = 25,
    OutExpo = 26,
    OutCirc = 27,
    OutBack = 28,
    OutElastic = 29,
    OutBounce = 30,
}

impl EaseKind {
    /// Every curve, indexed by tag.
    pub const ALL: [EaseKind; 31] = [
        Self::Linear,
        Self::InOutSine,
        Self::InOutQuad,
        Self::InOutCubic,
        Self::InOutQuart,
        Self::InOutQuint,
        Self::InOutExpo,
        Self::InOutCirc,
        Self::InOutBack,
        Self::InOutElastic,
        Self::InOutBounce,
        Self::InSine,
        Self::InQuad,
        Self::InCubic,
        Self::InQuart,
        Self::InQuint,
        Self::InExpo,
        Self::InCirc,
        Self::InBack,
        Self::InElastic,
        Self::InBounce,
        Self::OutSine,
        Self::OutQuad,
        Self::OutCubic,
        Self::OutQuart,
        Self::OutQuint,
        Self::OutExpo,
        Self::OutCirc,
        Self::OutBack,
        Self::OutElastic,
        Self::OutBounce,
    ];

    #[inline]
    pub fn tag(self) -> u8 {
        self as u8
    }

    pub fn from_tag(tag: u8) -> Result<Self, TweenError> {
        Self::ALL
            .get(tag as usize)
            .copied()
            .ok_or(TweenError::UnknownEaseTag { tag })
    }

    #[inline]
    pub fn is_in(self) -> bool {
        (11..=20).contains(&self.tag())
    }

    #[inline]
    pub fn is_out(self) -> bool {
        (21..=30).contains(&self.tag())
    }

    #[inline]
    pub fn is_in_out(self) -> bool {
        (1..=10).contains(&self.tag())
    }

    /// In(n) <-> Out(n). InOut curves and Linear map to themselves.
    pub fn inverse(self) -> Self {
        let tag = self.tag();
        let mirrored = match tag {
            11..=20 => tag + 10,
            21..=30 => tag - 10,
            _ => tag,
        };
        Self::ALL[mirrored as usize]
    }
}

/// Shape knobs consumed by the Back and Elastic curves only.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EaseParams {
    /// User-facing overshoot / amplitude in [0, 1].
    pub overshoot: f32,
    /// Elastic cycle length as a fraction of the tween; 0 picks the curve default.
    pub period: f32,
}

impl Default for EaseParams {
    fn default() -> Self {
        Self {
            overshoot: 0.5,
            period: 0.0,
        }
    }
}

/// Ease `t` with default shape parameters.
#[inline]
pub fn ease(kind: EaseKind, t: f32) -> f32 {
    ease_with(kind, t, EaseParams::default())
}

pub fn ease_with(kind: EaseKind, t: f32, params: EaseParams) -> f32 {
    use EaseKind::*;
    match kind {
        Linear => t,

        InSine => -(t * PI_OVER_2).cos() + 1.0,
        OutSine => (t * PI_OVER_2).sin(),
        InOutSine => -0.5 * ((PI * t).cos() - 1.0),

        InQuad => t * t,
        OutQuad => -t * (t - 2.0),
        InOutQuad => {
            let t = t * 2.0;
            if t < 1.0 {
                0.5 * t * t
            } else {
                let t = t - 1.0;
                -0.5 * (t * (t - 2.0) - 1.0)
            }
        }

        InCubic => t * t * t,
        OutCubic => {
            let t = t - 1.0;
            t * t * t + 1.0
        }
        InOutCubic => {
            let t = t * 2.0;
            if t < 1.0 {
                0.5 * t * t * t
            } else {
                let t = t - 2.0;
                0.5 * (t * t * t + 2.0)
            }
        }

        InQuart => t * t * t * t,
        OutQuart => {
            let t = t - 1.0;
            -(t * t * t * t - 1.0)
        }
        InOutQuart => {
            let t = t * 2.0;
            if t < 1.0 {
                0.5 * t * t * t * t
            } else {
                let t = t - 2.0;
                -0.5 * (t * t * t * t - 2.0)
            }
        }

        InQuint => t * t * t * t * t,
        OutQuint => {
            let t = t - 1.0;
            t * t * t * t * t + 1.0
        }
        InOutQuint => {
            let t = t * 2.0;
            if t < 1.0 {
                0.5 * t * t * t * t * t
            } else {
                let t = t - 2.0;
                0.5 * (t * t * t * t * t + 2.0)
            }
        }

        InExpo => {
            if t == 0.0 {
                0.0
            } else {
                2f32.powf(10.0 * (t - 1.0))
            }
        }
        OutExpo => {
            if t == 1.0 {
                1.0
            } else {
                -(2f32.powf(-10.0 * t)) + 1.0
            }
        }
        InOutExpo => {
            if t == 0.0 {
                return 0.0;
            }
            if t == 1.0 {
                return 1.0;
            }
            let t = t * 2.0;
            if t < 1.0 {
                0.5 * 2f32.powf(10.0 * (t - 1.0))
            } else {
                0.5 * (-(2f32.powf(-10.0 * (t - 1.0))) + 2.0)
            }
        }

        InCirc => -((1.0 - t * t).sqrt() - 1.0),
        OutCirc => {
            let t = t - 1.0;
            (1.0 - t * t).sqrt()
        }
        InOutCirc => {
            let t = t * 2.0;
            if t < 1.0 {
                -0.5 * ((1.0 - t * t).sqrt() - 1.0)
            } else {
                let t = t - 2.0;
                0.5 * ((1.0 - t * t).sqrt() + 1.0)
            }
        }

        InBack => {
            let s = params.overshoot * BACK_OVERSHOOT_SCALE;
            t * t * ((s + 1.0) * t - s)
        }
        OutBack => {
            let s = params.overshoot * BACK_OVERSHOOT_SCALE;
            let t = t - 1.0;
            t * t * ((s + 1.0) * t + s) + 1.0
        }
        InOutBack => {
            let s = params.overshoot * BACK_OVERSHOOT_SCALE * BACK_IN_OUT_SCALE;
            let t = t * 2.0;
            if t < 1.0 {
                0.5 * (t * t * ((s + 1.0) * t - s))
            } else {
                let t = t - 2.0;
                0.5 * (t * t * ((s + 1.0) * t + s) + 2.0)
            }
        }

        InElastic => {
            if t == 0.0 {
                return 0.0;
            }
            if t == 1.0 {
                return 1.0;
            }
            let (a, p, s0) = elastic_shape(params, ELASTIC_PERIOD);
            let t = t - 1.0;
            -(a * 2f32.powf(10.0 * t) * ((t - s0) * TWO_PI / p).sin())
        }
        OutElastic => {
            if t == 0.0 {
                return 0.0;
            }
            if t == 1.0 {
                return 1.0;
            }
            let (a, p, s0) = elastic_shape(params, ELASTIC_PERIOD);
            a * 2f32.powf(-10.0 * t) * ((t - s0) * TWO_PI / p).sin() + 1.0
        }
        InOutElastic => {
            if t == 0.0 {
                return 0.0;
            }
            let t = t * 2.0;
            if t == 2.0 {
                return 1.0;
            }
            let (a, p, s0) = elastic_shape(params, ELASTIC_PERIOD_IN_OUT);
            if t < 1.0 {
                let t = t - 1.0;
                -0.5 * (a * 2f32.powf(10.0 * t) * ((t - s0) * TWO_PI / p).sin())
            } else {
                let t = t - 1.0;
                a * 2f32.powf(-10.0 * t) * ((t - s0) * TWO_PI / p).sin() * 0.5 + 1.0
            }
        }

        InBounce => bounce_in(t),
        OutBounce => bounce_out(t),
        InOutBounce => {
            if t < 0.5 {
                bounce_in(t * 2.0) * 0.5
            } else {
                bounce_out(t * 2.0 - 1.0) * 0.5 + 0.5
            }
        }
    }
}

/// Amplitude, period and phase shift for the elastic curves.
/// Amplitude is `1 + overshoot`; anything below 1 collapses to the plain curve.
fn elastic_shape(params: EaseParams, default_period: f32) -> (f32, f32, f32) {
    let p = if params.period > 0.0 {
        params.period
    } else {
        default_period
    };
    let a = 1.0 + params.overshoot;
    if a < 1.0 {
        (1.0, p, p / 4.0)
    } else {
        (a, p, p / TWO_PI * (1.0 / a).asin())
    }
}

fn bounce_out(t: f32) -> f32 {
    if t < 1.0 / 2.75 {
        7.5625 * t * t
    } else if t < 2.0 / 2.75 {
        let t = t - 1.5 / 2.75;
        7.5625 * t * t + 0.75
    } else if t < 2.5 / 2.75 {
        let t = t - 2.25 / 2.75;
        7.5625 * t * t + 0.9375
    } else {
        let t = t - 2.625 / 2.75;
        7.5625 * t * t + 0.984375
    }
}

#[inline]
fn bounce_in(t: f32) -> f32 {
    1.0 - bounce_out(1.0 - t)
}

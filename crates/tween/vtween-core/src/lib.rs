//! VTween core (engine-agnostic)
//!
//! Easing curves, typed interpolators and a scheduler that advances tweens
//! once per host tick. Hosts own a [`Scheduler`], register tweens through its
//! typed factories and call [`Scheduler::update`] every frame.

pub mod config;
pub mod context;
pub mod delta;
pub mod ease;
pub mod error;
pub mod handle;
pub mod ids;
pub mod interp;
pub mod scheduler;
pub mod settings;
pub mod tween;

// Re-exports for consumers (adapters)
pub use config::{SchedulerConfig, TweenDefaults};
pub use context::{Callback, TweenCommand, TweenContext};
pub use delta::DeltaTracker;
pub use ease::{ease, ease_with, EaseKind, EaseParams};
pub use error::TweenError;
pub use handle::TweenHandle;
pub use ids::TweenId;
pub use interp::{InterpRegistry, Interpolator, InterpolatorKind};
pub use scheduler::Scheduler;
pub use settings::{ApplierSettings, RotationMode};
pub use tween::{PlayDirection, PlayStyle, Tween, TweenEvent};
pub use vtween_api_core::{Color, Quat, Rect, Vec2, Vec3};

pub type Result<T> = core::result::Result<T, TweenError>;

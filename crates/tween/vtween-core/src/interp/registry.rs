use std::any::{type_name, Any};
use std::sync::Arc;

use hashbrown::HashMap;
use vtween_api_core::{Color, Quat, Rect, Vec2, Vec3};

use super::functions::{
    ColorInterpolator, EulerRotationInterpolator, FloatInterpolator, IntInterpolator,
    RectInterpolator, RotationInterpolator, TextInterpolator, Vec2Interpolator,
    Vec3Interpolator,
};
use super::{Interpolator, InterpolatorKind};
use crate::error::TweenError;

/// Lazily built, one shared interpolator per kind.
///
/// Entries are stored type-erased as `Arc<dyn Interpolator<D, R>>`; a request
/// only succeeds when `D`/`R` are exactly the kind's declared types.
#[derive(Default)]
pub struct InterpRegistry {
    cache: HashMap<InterpolatorKind, Box<dyn Any>>,
}

impl std::fmt::Debug for InterpRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InterpRegistry")
            .field("cached", &self.cache.keys().collect::<Vec<_>>())
            .finish()
    }
}

fn erase<D: 'static, R: 'static>(i: impl Interpolator<D, R> + 'static) -> Box<dyn Any> {
    let shared: Arc<dyn Interpolator<D, R>> = Arc::new(i);
    Box::new(shared)
}

fn build(kind: InterpolatorKind) -> Box<dyn Any> {
    match kind {
        InterpolatorKind::Float => erase::<f32, f32>(FloatInterpolator),
        InterpolatorKind::Int => erase::<i32, i32>(IntInterpolator),
        InterpolatorKind::Vec2 => erase::<Vec2, Vec2>(Vec2Interpolator),
        InterpolatorKind::Vec3 => erase::<Vec3, Vec3>(Vec3Interpolator),
        InterpolatorKind::EulerRotation => erase::<Vec3, Quat>(EulerRotationInterpolator),
        InterpolatorKind::Rotation => erase::<Quat, Quat>(RotationInterpolator),
        InterpolatorKind::Color => erase::<Color, Color>(ColorInterpolator),
        InterpolatorKind::Rect => erase::<Rect, Rect>(RectInterpolator),
        InterpolatorKind::Text => erase::<String, String>(TextInterpolator),
    }
}

impl InterpRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the interpolator for `kind`, building and caching it on first use.
    pub fn get<D: 'static, R: 'static>(
        &mut self,
        kind: InterpolatorKind,
    ) -> Result<Arc<dyn Interpolator<D, R>>, TweenError> {
        let entry = self.cache.entry(kind).or_insert_with(|| build(kind));
        entry
            .downcast_ref::<Arc<dyn Interpolator<D, R>>>()
            .cloned()
            .ok_or_else(|| TweenError::InterpolatorMismatch {
                kind,
                declared: kind.declared_types().to_string(),
                requested: format!("{} -> {}", short_name::<D>(), short_name::<R>()),
            })
    }

    /// Whether `kind` has been built already.
    #[inline]
    pub fn contains(&self, kind: InterpolatorKind) -> bool {
        self.cache.contains_key(&kind)
    }

    /// Number of cached interpolators.
    #[inline]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

/// `type_name` without the module path (`vtween_api_core::value::Vec3` -> `Vec3`).
fn short_name<T>() -> &'static str {
    let full = type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}

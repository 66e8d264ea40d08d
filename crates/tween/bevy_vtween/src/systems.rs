use bevy::prelude::*;
use log::trace;

use crate::resources::{PendingWrites, TransformWrite, VTweenScheduler};

/// Advance every live tween by this frame's delta.
pub fn tick_tweens(mut scheduler: NonSendMut<VTweenScheduler>, time: Res<Time>) {
    scheduler.0.update(time.delta_seconds());
}

/// Apply staged writes; entities without a `Transform` are skipped.
pub fn apply_pending_writes(pending: NonSend<PendingWrites>, mut transforms: Query<&mut Transform>) {
    for (entity, write) in pending.drain() {
        let Ok(mut transform) = transforms.get_mut(entity) else {
            trace!("dropping tween write for missing {entity:?}");
            continue;
        };
        match write {
            TransformWrite::Translation(v) => transform.translation = v,
            TransformWrite::Rotation(q) => transform.rotation = q,
            TransformWrite::Scale(v) => transform.scale = v,
        }
    }
}

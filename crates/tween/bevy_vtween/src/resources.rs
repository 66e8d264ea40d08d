use std::cell::RefCell;
use std::rc::Rc;

use bevy::prelude::*;
use vtween_core::Scheduler;

/// The scheduler, owned by the main thread. Setters and callbacks are plain
/// closures, so it lives in a non-send resource.
pub struct VTweenScheduler(pub Scheduler);

/// A value a tween wants written into an entity's `Transform`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TransformWrite {
    Translation(Vec3),
    Rotation(Quat),
    Scale(Vec3),
}

/// Writes staged by tween setters, flushed into the ECS after the tick
/// (keeps ordering explicit: Tick -> Apply).
#[derive(Clone, Default)]
pub struct PendingWrites {
    queue: Rc<RefCell<Vec<(Entity, TransformWrite)>>>,
}

fn to_bevy_vec3(v: vtween_core::Vec3) -> Vec3 {
    Vec3::new(v.x, v.y, v.z)
}

impl PendingWrites {
    pub fn push(&self, entity: Entity, write: TransformWrite) {
        self.queue.borrow_mut().push((entity, write));
    }

    /// Setter for a Vec3 tween driving `entity`'s translation.
    pub fn translation(&self, entity: Entity) -> impl FnMut(vtween_core::Vec3) + 'static {
        let pending = self.clone();
        move |v| pending.push(entity, TransformWrite::Translation(to_bevy_vec3(v)))
    }

    pub fn scale(&self, entity: Entity) -> impl FnMut(vtween_core::Vec3) + 'static {
        let pending = self.clone();
        move |v| pending.push(entity, TransformWrite::Scale(to_bevy_vec3(v)))
    }

    /// Setter for Euler or quaternion tweens driving `entity`'s rotation.
    pub fn rotation(&self, entity: Entity) -> impl FnMut(vtween_core::Quat) + 'static {
        let pending = self.clone();
        move |q| {
            pending.push(
                entity,
                TransformWrite::Rotation(Quat::from_xyzw(q.x, q.y, q.z, q.w)),
            )
        }
    }

    pub fn len(&self) -> usize {
        self.queue.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.borrow().is_empty()
    }

    pub(crate) fn drain(&self) -> Vec<(Entity, TransformWrite)> {
        std::mem::take(&mut *self.queue.borrow_mut())
    }
}

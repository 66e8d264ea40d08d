use bevy::prelude::*;
use log::debug;
use vtween_core::{Scheduler, SchedulerConfig};

mod resources;
mod systems;

pub use resources::{PendingWrites, TransformWrite, VTweenScheduler};
pub use systems::{apply_pending_writes, tick_tweens};

/// Systems that advance tweens and flush their writes, in that order.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct VTweenSet;

#[derive(Default)]
pub struct VTweenPlugin {
    pub config: SchedulerConfig,
}

impl VTweenPlugin {
    pub fn from_config(config: SchedulerConfig) -> Self {
        Self { config }
    }
}

impl Plugin for VTweenPlugin {
    fn build(&self, app: &mut App) {
        debug!("installing tween scheduler ({:?})", self.config.defaults);
        app.insert_non_send_resource(VTweenScheduler(Scheduler::new(self.config.clone())))
            .insert_non_send_resource(PendingWrites::default())
            .add_systems(
                Update,
                (tick_tweens, apply_pending_writes)
                    .chain()
                    .in_set(VTweenSet),
            );
    }
}

//! Callback context and deferred commands.
//!
//! Callbacks run while the scheduler is mid-pass, so they cannot touch it
//! directly. Instead they queue [`TweenCommand`]s on the [`TweenContext`] they
//! receive; the scheduler applies them, in order, as soon as the firing tween
//! has finished its step.

use std::fmt;

use crate::ids::TweenId;
use crate::scheduler::Scheduler;

pub enum TweenCommand {
    Pause(TweenId),
    Resume(TweenId),
    Rewind(TweenId),
    Complete(TweenId),
    Remove(TweenId),
    Reset(TweenId),
    /// Arbitrary scheduler access, e.g. registering a follow-up tween.
    Deferred(Box<dyn FnOnce(&mut Scheduler)>),
}

impl fmt::Debug for TweenCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pause(id) => f.debug_tuple("Pause").field(id).finish(),
            Self::Resume(id) => f.debug_tuple("Resume").field(id).finish(),
            Self::Rewind(id) => f.debug_tuple("Rewind").field(id).finish(),
            Self::Complete(id) => f.debug_tuple("Complete").field(id).finish(),
            Self::Remove(id) => f.debug_tuple("Remove").field(id).finish(),
            Self::Reset(id) => f.debug_tuple("Reset").field(id).finish(),
            Self::Deferred(_) => f.write_str("Deferred(..)"),
        }
    }
}

/// Handed to every callback.
#[derive(Debug)]
pub struct TweenContext {
    id: TweenId,
    progress: f32,
    commands: Vec<TweenCommand>,
}

impl TweenContext {
    pub(crate) fn new(id: TweenId) -> Self {
        Self {
            id,
            progress: 0.0,
            commands: Vec::new(),
        }
    }

    /// The tween whose callback is running.
    #[inline]
    pub fn id(&self) -> TweenId {
        self.id
    }

    /// Normalized progress of the firing tween at the time of the callback.
    #[inline]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    #[inline]
    pub(crate) fn set_progress(&mut self, progress: f32) {
        self.progress = progress;
    }

    pub fn pause(&mut self, id: TweenId) {
        self.commands.push(TweenCommand::Pause(id));
    }

    pub fn resume(&mut self, id: TweenId) {
        self.commands.push(TweenCommand::Resume(id));
    }

    pub fn rewind(&mut self, id: TweenId) {
        self.commands.push(TweenCommand::Rewind(id));
    }

    pub fn complete(&mut self, id: TweenId) {
        self.commands.push(TweenCommand::Complete(id));
    }

    pub fn remove(&mut self, id: TweenId) {
        self.commands.push(TweenCommand::Remove(id));
    }

    pub fn reset(&mut self, id: TweenId) {
        self.commands.push(TweenCommand::Reset(id));
    }

    pub fn defer(&mut self, f: impl FnOnce(&mut Scheduler) + 'static) {
        self.commands.push(TweenCommand::Deferred(Box::new(f)));
    }

    #[inline]
    pub fn pending(&self) -> &[TweenCommand] {
        &self.commands
    }

    pub(crate) fn into_commands(self) -> Vec<TweenCommand> {
        self.commands
    }
}

/// Callback signature shared by every tween event.
pub type Callback = Box<dyn FnMut(&mut TweenContext)>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queues_commands_in_order() {
        let mut ctx = TweenContext::new(TweenId(3));
        ctx.pause(TweenId(1));
        ctx.remove(TweenId(2));
        ctx.defer(|_| {});
        assert_eq!(ctx.id(), TweenId(3));
        let cmds = ctx.into_commands();
        assert!(matches!(cmds[0], TweenCommand::Pause(TweenId(1))));
        assert!(matches!(cmds[1], TweenCommand::Remove(TweenId(2))));
        assert_eq!(format!("{:?}", cmds[2]), "Deferred(..)");
    }
}

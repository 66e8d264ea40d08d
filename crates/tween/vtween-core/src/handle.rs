//! Fluent configuration of a registered tween.
//!
//! A handle borrows the scheduler for as long as it is held. Every mutator is a
//! silent no-op when the tween is no longer live, and lock-guarded mutators are
//! also no-ops once the scheduler has initialized the tween.

use crate::context::TweenContext;
use crate::ease::EaseKind;
use crate::ids::TweenId;
use crate::scheduler::Scheduler;
use crate::settings::{ApplierSettings, RotationMode};
use crate::tween::{PlayStyle, Tween, TweenEvent};

pub struct TweenHandle<'a> {
    scheduler: &'a mut Scheduler,
    id: Option<TweenId>,
}

impl std::fmt::Debug for TweenHandle<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TweenHandle").field("id", &self.id).finish()
    }
}

impl<'a> TweenHandle<'a> {
    pub(crate) fn new(scheduler: &'a mut Scheduler, id: Option<TweenId>) -> Self {
        Self { scheduler, id }
    }

    /// `None` when registration was aborted.
    pub fn id(&self) -> Option<TweenId> {
        self.id
    }

    pub fn is_live(&self) -> bool {
        self.id.map_or(false, |id| self.scheduler.contains(id))
    }

    pub fn get(&self) -> Option<&Tween> {
        self.id.and_then(|id| self.scheduler.get(id))
    }

    pub fn total_duration(&self, include_initial_delay: bool, include_loop_delay: bool) -> Option<f32> {
        self.get()
            .and_then(|t| t.total_duration(include_initial_delay, include_loop_delay))
    }

    fn edit(self, f: impl FnOnce(&mut Tween)) -> Self {
        if let Some(id) = self.id {
            if let Some(tween) = self.scheduler.live_mut(id) {
                f(tween);
            }
        }
        self
    }

    // ---- lock-guarded ----

    pub fn duration(self, secs: f32) -> Self {
        self.edit(|t| t.set_duration(secs))
    }

    pub fn delay(self, secs: f32) -> Self {
        self.edit(|t| t.set_initial_delay(secs))
    }

    pub fn loop_delay(self, secs: f32) -> Self {
        self.edit(|t| t.set_loop_delay(secs))
    }

    /// Pause between the forward and backward halves of a ping-pong loop.
    pub fn ping_pong_delay(self, secs: f32) -> Self {
        self.edit(|t| t.set_ping_pong_delay(secs))
    }

    pub fn loops(self, loops: u32) -> Self {
        self.edit(|t| t.set_loops(loops))
    }

    pub fn infinite(self, infinite: bool) -> Self {
        self.edit(|t| t.set_infinite(infinite))
    }

    pub fn play_style(self, style: PlayStyle) -> Self {
        self.edit(|t| t.set_play_style(style))
    }

    pub fn auto_remove(self, auto_remove: bool) -> Self {
        self.edit(|t| t.set_auto_remove(auto_remove))
    }

    pub fn auto_play(self, auto_play: bool) -> Self {
        self.edit(|t| t.set_auto_play(auto_play))
    }

    pub fn invert_ease_on_ping_pong(self, invert: bool) -> Self {
        self.edit(|t| t.set_invert_ease_on_ping_pong(invert))
    }

    /// Also wait `loop_delay` before the very first loop.
    pub fn loop_delay_on_first_loop(self, enabled: bool) -> Self {
        self.edit(|t| t.set_loop_delay_on_first_loop(enabled))
    }

    pub fn tag(self, tag: impl Into<String>) -> Self {
        let tag = tag.into();
        self.edit(|t| t.set_tag(Some(tag)))
    }

    /// Evicts any other live tween holding the same unique id.
    pub fn unique_id(self, unique_id: impl Into<String>) -> Self {
        if let Some(id) = self.id {
            self.scheduler.assign_unique_id(id, Some(unique_id.into()));
        }
        self
    }

    pub fn settings(self, f: impl FnOnce(&mut ApplierSettings)) -> Self {
        self.edit(|t| {
            if let Some(settings) = t.settings_mut() {
                f(settings);
            }
        })
    }

    pub fn snap_interval(self, interval: f32) -> Self {
        self.settings(|s| s.set_snap_interval(interval))
    }

    pub fn decimals(self, decimals: Option<u32>) -> Self {
        self.settings(|s| s.set_decimals(decimals))
    }

    pub fn rotation_mode(self, mode: RotationMode) -> Self {
        self.settings(|s| s.set_rotation_mode(mode))
    }

    pub fn wrap_target(self, wrap: bool) -> Self {
        self.settings(|s| s.set_wrap_target(wrap))
    }

    // ---- always allowed ----

    pub fn ease(self, ease: EaseKind) -> Self {
        self.edit(|t| t.set_ease(ease))
    }

    /// Back overshoot or elastic amplitude, in [0, 1].
    pub fn overshoot(self, overshoot: f32) -> Self {
        self.edit(|t| t.set_overshoot(overshoot))
    }

    /// Elastic period; 0 keeps the curve's default.
    pub fn cycle_duration(self, period: f32) -> Self {
        self.edit(|t| t.set_cycle_duration(period))
    }

    /// Jump to `progress` and apply the value there.
    pub fn progress(self, progress: f32) -> Self {
        self.edit(|t| t.set_progress(progress))
    }

    pub fn on(self, event: TweenEvent, f: impl FnMut(&mut TweenContext) + 'static) -> Self {
        self.edit(|t| t.set_callback(event, Box::new(f)))
    }

    pub fn on_start(self, f: impl FnMut(&mut TweenContext) + 'static) -> Self {
        self.on(TweenEvent::Start, f)
    }

    pub fn on_complete(self, f: impl FnMut(&mut TweenContext) + 'static) -> Self {
        self.on(TweenEvent::Complete, f)
    }

    pub fn on_loop_complete(self, f: impl FnMut(&mut TweenContext) + 'static) -> Self {
        self.on(TweenEvent::LoopComplete, f)
    }

    pub fn on_ping_pong_half_loop_complete(
        self,
        f: impl FnMut(&mut TweenContext) + 'static,
    ) -> Self {
        self.on(TweenEvent::PingPongHalfLoopComplete, f)
    }

    pub fn on_value_changed(self, f: impl FnMut(&mut TweenContext) + 'static) -> Self {
        self.on(TweenEvent::ValueChanged, f)
    }

    pub fn on_rewind(self, f: impl FnMut(&mut TweenContext) + 'static) -> Self {
        self.on(TweenEvent::Rewind, f)
    }

    // ---- lifecycle ----

    pub fn pause(&mut self) -> bool {
        self.id.map_or(false, |id| self.scheduler.pause(id))
    }

    pub fn resume(&mut self) -> bool {
        self.id.map_or(false, |id| self.scheduler.resume(id))
    }

    pub fn rewind(&mut self) -> bool {
        self.id.map_or(false, |id| self.scheduler.rewind(id))
    }

    pub fn complete(&mut self) -> bool {
        self.id.map_or(false, |id| self.scheduler.complete(id))
    }

    pub fn remove(&mut self) -> bool {
        self.id.map_or(false, |id| self.scheduler.remove(id))
    }

    pub fn reset(&mut self) -> bool {
        self.id.map_or(false, |id| self.scheduler.reset(id))
    }
}

#[cfg(test)]
mod tests {
    use crate::{EaseKind, PlayStyle, Scheduler, TweenId};

    #[test]
    fn chained_configuration_lands_on_the_tween() {
        let mut s = Scheduler::default();
        let id = s
            .tween_float(0.0, 1.0, |_| {})
            .duration(2.0)
            .delay(0.5)
            .loops(3)
            .play_style(PlayStyle::PingPong)
            .ease(EaseKind::OutBack)
            .tag("ui")
            .id()
            .unwrap();
        let t = s.get(id).unwrap();
        assert_eq!(t.duration(), 2.0);
        assert_eq!(t.initial_delay(), 0.5);
        assert_eq!(t.loops(), 3);
        assert_eq!(t.play_style(), PlayStyle::PingPong);
        assert_eq!(t.ease(), EaseKind::OutBack);
        assert_eq!(t.tag(), Some("ui"));
    }

    #[test]
    fn dead_handle_ignores_everything() {
        let mut s = Scheduler::default();
        let mut h = s.handle(TweenId(7)).duration(3.0).tag("x");
        assert!(!h.is_live());
        assert!(!h.pause());
        assert_eq!(h.total_duration(true, true), None);
    }
}

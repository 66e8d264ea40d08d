//! Scheduler: owns the live tweens and drives them once per tick.
//!
//! Tweens step in registration order. Removal during a pass only marks the
//! entry; the list is compacted once the pass is over, so neighbours are never
//! skipped or stepped twice. Commands queued by callbacks run right after the
//! firing tween finishes its step.

use hashbrown::HashMap;
use log::{debug, error, trace, warn};
use vtween_api_core::{Color, Quat, Rect, Vec2, Vec3};

use crate::config::{SchedulerConfig, TweenDefaults};
use crate::context::{TweenCommand, TweenContext};
use crate::handle::TweenHandle;
use crate::ids::{IdAllocator, TweenId};
use crate::interp::{InterpRegistry, InterpolatorKind};
use crate::tween::{Tween, TypedBinding};

#[derive(Debug)]
pub struct Scheduler {
    cfg: SchedulerConfig,
    ids: IdAllocator,
    tweens: Vec<Tween>,
    unique: HashMap<String, TweenId>,
    interp: InterpRegistry,
    /// Seconds since construction, as seen by the tick source.
    clock: f64,
    in_pass: bool,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new(SchedulerConfig::default())
    }
}

impl Scheduler {
    pub fn new(cfg: SchedulerConfig) -> Self {
        let tweens = Vec::with_capacity(cfg.capacity);
        Self {
            cfg,
            ids: IdAllocator::new(),
            tweens,
            unique: HashMap::new(),
            interp: InterpRegistry::new(),
            clock: 0.0,
            in_pass: false,
        }
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.cfg
    }

    /// Defaults applied to tweens registered from now on.
    pub fn defaults_mut(&mut self) -> &mut TweenDefaults {
        &mut self.cfg.defaults
    }

    #[inline]
    pub fn clock(&self) -> f64 {
        self.clock
    }

    pub fn interpolators(&self) -> &InterpRegistry {
        &self.interp
    }

    // ---- queries ----

    /// Number of live tweens.
    pub fn len(&self) -> usize {
        self.tweens.iter().filter(|t| !t.is_removed()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, id: TweenId) -> bool {
        self.index_of(id).is_some()
    }

    pub fn get(&self, id: TweenId) -> Option<&Tween> {
        self.index_of(id).map(|i| &self.tweens[i])
    }

    /// Live tween ids in registration order.
    pub fn ids(&self) -> Vec<TweenId> {
        self.snapshot(None)
    }

    pub fn find_unique(&self, unique_id: &str) -> Option<TweenId> {
        self.unique.get(unique_id).copied()
    }

    /// Handle for an already registered tween; dead when `id` is not live.
    pub fn handle(&mut self, id: TweenId) -> TweenHandle<'_> {
        let live = self.contains(id).then_some(id);
        TweenHandle::new(self, live)
    }

    fn index_of(&self, id: TweenId) -> Option<usize> {
        self.tweens
            .iter()
            .position(|t| t.id() == id && !t.is_removed())
    }

    pub(crate) fn live_mut(&mut self, id: TweenId) -> Option<&mut Tween> {
        let idx = self.index_of(id)?;
        Some(&mut self.tweens[idx])
    }

    fn snapshot(&self, tag: Option<&str>) -> Vec<TweenId> {
        self.tweens
            .iter()
            .filter(|t| !t.is_removed())
            .filter(|t| tag.map_or(true, |tag| t.tag() == Some(tag)))
            .map(Tween::id)
            .collect()
    }

    // ---- registration ----

    /// Register a tween driving `setter` from `start` to `target` with the
    /// interpolator of `kind`.
    ///
    /// `D`/`R` must be the kind's declared types. On mismatch the error is
    /// logged, nothing is registered and the returned handle is dead.
    pub fn tween<D: 'static, R: 'static>(
        &mut self,
        kind: InterpolatorKind,
        start: D,
        target: D,
        setter: impl FnMut(R) + 'static,
    ) -> TweenHandle<'_> {
        let interpolator = match self.interp.get::<D, R>(kind) {
            Ok(i) => i,
            Err(err) => {
                error!("tween registration aborted: {err}");
                return TweenHandle::new(self, None);
            }
        };
        let id = self.ids.alloc();
        let binding = TypedBinding::new(interpolator, start, target, Box::new(setter));
        let tween = Tween::new(id, Box::new(binding), &self.cfg.defaults, self.clock);
        debug!("registered {id} ({kind:?})");
        self.tweens.push(tween);
        TweenHandle::new(self, Some(id))
    }

    pub fn tween_float(
        &mut self,
        start: f32,
        target: f32,
        setter: impl FnMut(f32) + 'static,
    ) -> TweenHandle<'_> {
        self.tween(InterpolatorKind::Float, start, target, setter)
    }

    pub fn tween_int(
        &mut self,
        start: i32,
        target: i32,
        setter: impl FnMut(i32) + 'static,
    ) -> TweenHandle<'_> {
        self.tween(InterpolatorKind::Int, start, target, setter)
    }

    pub fn tween_vec2(
        &mut self,
        start: Vec2,
        target: Vec2,
        setter: impl FnMut(Vec2) + 'static,
    ) -> TweenHandle<'_> {
        self.tween(InterpolatorKind::Vec2, start, target, setter)
    }

    pub fn tween_vec3(
        &mut self,
        start: Vec3,
        target: Vec3,
        setter: impl FnMut(Vec3) + 'static,
    ) -> TweenHandle<'_> {
        self.tween(InterpolatorKind::Vec3, start, target, setter)
    }

    /// Euler angles in degrees; the setter receives a quaternion.
    pub fn tween_euler(
        &mut self,
        start: Vec3,
        target: Vec3,
        setter: impl FnMut(Quat) + 'static,
    ) -> TweenHandle<'_> {
        self.tween(InterpolatorKind::EulerRotation, start, target, setter)
    }

    pub fn tween_rotation(
        &mut self,
        start: Quat,
        target: Quat,
        setter: impl FnMut(Quat) + 'static,
    ) -> TweenHandle<'_> {
        self.tween(InterpolatorKind::Rotation, start, target, setter)
    }

    pub fn tween_color(
        &mut self,
        start: Color,
        target: Color,
        setter: impl FnMut(Color) + 'static,
    ) -> TweenHandle<'_> {
        self.tween(InterpolatorKind::Color, start, target, setter)
    }

    pub fn tween_rect(
        &mut self,
        start: Rect,
        target: Rect,
        setter: impl FnMut(Rect) + 'static,
    ) -> TweenHandle<'_> {
        self.tween(InterpolatorKind::Rect, start, target, setter)
    }

    /// Reveal `target` by truncation, growing from the length of `start`.
    pub fn tween_text(
        &mut self,
        start: impl Into<String>,
        target: impl Into<String>,
        setter: impl FnMut(String) + 'static,
    ) -> TweenHandle<'_> {
        self.tween(InterpolatorKind::Text, start.into(), target.into(), setter)
    }

    // ---- ticking ----

    /// Advance the clock by `dt` seconds and step every live tween.
    pub fn update(&mut self, dt: f32) {
        self.tick(self.clock + f64::from(dt.max(0.0)));
    }

    /// Step every live tween at absolute time `now`. Time never runs backwards.
    pub fn tick(&mut self, now: f64) {
        if self.in_pass {
            warn!("tick requested while a pass is running; ignored");
            return;
        }
        self.clock = self.clock.max(now);
        let now = self.clock;
        self.in_pass = true;

        // tweens registered by callbacks are appended and stepped in this pass
        let mut i = 0;
        while i < self.tweens.len() {
            if !self.tweens[i].is_removed() {
                let tween = &mut self.tweens[i];
                let mut ctx = TweenContext::new(tween.id());
                let was_completed = tween.is_completed();
                if !tween.is_initialized() {
                    tween.initialize();
                }
                tween.step(now, &mut ctx);
                if !was_completed && tween.is_completed() {
                    debug!("{} completed", tween.id());
                }
                if tween.is_removed() {
                    self.retire(i);
                }
                self.run_commands(ctx.into_commands());
            }
            i += 1;
        }

        self.in_pass = false;
        self.sweep();
    }

    fn run_commands(&mut self, commands: Vec<TweenCommand>) {
        for command in commands {
            match command {
                TweenCommand::Pause(id) => {
                    self.pause(id);
                }
                TweenCommand::Resume(id) => {
                    self.resume(id);
                }
                TweenCommand::Rewind(id) => {
                    self.rewind(id);
                }
                TweenCommand::Complete(id) => {
                    self.complete(id);
                }
                TweenCommand::Remove(id) => {
                    self.remove(id);
                }
                TweenCommand::Reset(id) => {
                    self.reset(id);
                }
                TweenCommand::Deferred(f) => f(self),
            }
        }
    }

    /// Bookkeeping for a tween that just became removed.
    fn retire(&mut self, idx: usize) {
        let tween = &self.tweens[idx];
        if let Some(uid) = tween.unique_id() {
            if self.unique.get(uid) == Some(&tween.id()) {
                self.unique.remove(uid);
            }
        }
        debug!("{} removed", tween.id());
    }

    fn sweep(&mut self) {
        self.tweens.retain(|t| !t.is_removed());
    }

    /// Run one lifecycle operation on a live tween, then its queued commands.
    fn drive(
        &mut self,
        id: TweenId,
        op: impl FnOnce(&mut Tween, f64, &mut TweenContext),
    ) -> bool {
        let Some(idx) = self.index_of(id) else {
            return false;
        };
        let mut ctx = TweenContext::new(id);
        let tween = &mut self.tweens[idx];
        let was_completed = tween.is_completed();
        op(tween, self.clock, &mut ctx);
        if !was_completed && tween.is_completed() {
            debug!("{id} completed");
        }
        if tween.is_removed() {
            self.retire(idx);
        }
        self.run_commands(ctx.into_commands());
        if !self.in_pass {
            self.sweep();
        }
        true
    }

    // ---- per-tween lifecycle; each returns whether `id` was live ----

    pub fn pause(&mut self, id: TweenId) -> bool {
        self.drive(id, |t, _, _| t.pause())
    }

    pub fn resume(&mut self, id: TweenId) -> bool {
        self.drive(id, |t, now, _| t.resume(now))
    }

    pub fn rewind(&mut self, id: TweenId) -> bool {
        self.drive(id, |t, now, ctx| t.rewind(now, ctx))
    }

    pub fn complete(&mut self, id: TweenId) -> bool {
        self.drive(id, |t, _, ctx| t.complete(ctx))
    }

    pub fn remove(&mut self, id: TweenId) -> bool {
        self.drive(id, |t, _, _| t.remove())
    }

    /// Back to the start with configuration unlocked. Removed tweens cannot be reset.
    pub fn reset(&mut self, id: TweenId) -> bool {
        self.drive(id, |t, now, ctx| t.reset(now, ctx))
    }

    // ---- bulk ----

    fn each(&mut self, tag: Option<&str>, op: fn(&mut Self, TweenId) -> bool) -> usize {
        let mut hits = 0;
        for id in self.snapshot(tag).into_iter().rev() {
            if op(self, id) {
                hits += 1;
            }
        }
        hits
    }

    pub fn pause_all(&mut self) -> usize {
        self.each(None, Self::pause)
    }

    pub fn resume_all(&mut self) -> usize {
        self.each(None, Self::resume)
    }

    pub fn rewind_all(&mut self) -> usize {
        self.each(None, Self::rewind)
    }

    pub fn reset_all(&mut self) -> usize {
        self.each(None, Self::reset)
    }

    pub fn complete_all(&mut self) -> usize {
        self.each(None, Self::complete)
    }

    pub fn remove_all(&mut self) -> usize {
        self.each(None, Self::remove)
    }

    pub fn pause_tagged(&mut self, tag: &str) -> usize {
        self.each(Some(tag), Self::pause)
    }

    pub fn resume_tagged(&mut self, tag: &str) -> usize {
        self.each(Some(tag), Self::resume)
    }

    pub fn rewind_tagged(&mut self, tag: &str) -> usize {
        self.each(Some(tag), Self::rewind)
    }

    pub fn reset_tagged(&mut self, tag: &str) -> usize {
        self.each(Some(tag), Self::reset)
    }

    pub fn complete_tagged(&mut self, tag: &str) -> usize {
        self.each(Some(tag), Self::complete)
    }

    pub fn remove_tagged(&mut self, tag: &str) -> usize {
        self.each(Some(tag), Self::remove)
    }

    // ---- unique ids ----

    /// Give `id` a unique id, removing any other live holder first. `None` or
    /// an empty string clears it. No-op once the tween is locked.
    pub(crate) fn assign_unique_id(&mut self, id: TweenId, unique_id: Option<String>) {
        let Some(idx) = self.index_of(id) else {
            return;
        };
        if self.tweens[idx].is_locked() {
            return;
        }
        if let Some(old) = self.tweens[idx].unique_id() {
            if self.unique.get(old) == Some(&id) {
                self.unique.remove(old);
            }
        }
        match unique_id.filter(|u| !u.is_empty()) {
            Some(uid) => {
                if let Some(prev) = self.unique.get(&uid).copied() {
                    trace!("unique id {uid:?} moves from {prev} to {id}");
                    self.remove(prev);
                }
                if let Some(tween) = self.live_mut(id) {
                    tween.set_unique_id(Some(uid.clone()));
                    self.unique.insert(uid, id);
                }
            }
            None => self.tweens[idx].set_unique_id(None),
        }
    }
}

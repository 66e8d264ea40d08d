//! Tween instance: timing state, play configuration and the per-tick state machine.
//!
//! States: unregistered -> initialized -> running <-> paused, running ->
//! completed -> removed, and any state -> removed. Rewinding is a flag layered
//! on top of running. The scheduler drives `initialize` and `step`; everything
//! else is reached through the scheduler or a [`crate::TweenHandle`].

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::TweenDefaults;
use crate::context::{Callback, TweenContext};
use crate::delta::DeltaTracker;
use crate::ease::{ease_with, EaseKind, EaseParams};
use crate::ids::TweenId;
use crate::interp::{Interpolator, InterpolatorKind};
use crate::settings::ApplierSettings;

/// Progress or delay within this distance of its end counts as reached.
const END_EPSILON: f64 = 1e-6;

fn drain(delay: f64, elapsed: f64) -> f64 {
    let left = delay - elapsed;
    if left <= END_EPSILON {
        0.0
    } else {
        left
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayStyle {
    /// Restart from the beginning on every loop.
    #[default]
    Normal,
    /// Reverse at each end; one loop is a forward half plus a backward half.
    PingPong,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayDirection {
    #[default]
    Forward,
    Backward,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TweenEvent {
    Start,
    Complete,
    LoopComplete,
    PingPongHalfLoopComplete,
    ValueChanged,
    Rewind,
}

/// Start/target/setter of one concrete value type, erased behind `apply`.
pub(crate) trait Binding {
    fn kind(&self) -> InterpolatorKind;
    fn apply(&mut self, eased: f32);
    fn settings(&self) -> &ApplierSettings;
    fn settings_mut(&mut self) -> &mut ApplierSettings;
}

pub(crate) struct TypedBinding<D, R> {
    interpolator: Arc<dyn Interpolator<D, R>>,
    start: D,
    target: D,
    setter: Box<dyn FnMut(R)>,
    settings: ApplierSettings,
}

impl<D, R> TypedBinding<D, R> {
    pub(crate) fn new(
        interpolator: Arc<dyn Interpolator<D, R>>,
        start: D,
        target: D,
        setter: Box<dyn FnMut(R)>,
    ) -> Self {
        let settings = ApplierSettings::default_for(interpolator.kind());
        Self {
            interpolator,
            start,
            target,
            setter,
            settings,
        }
    }
}

impl<D, R> Binding for TypedBinding<D, R> {
    fn kind(&self) -> InterpolatorKind {
        self.interpolator.kind()
    }

    fn apply(&mut self, eased: f32) {
        self.interpolator.apply(
            &mut *self.setter,
            &self.start,
            &self.target,
            eased,
            &self.settings,
        );
    }

    fn settings(&self) -> &ApplierSettings {
        &self.settings
    }

    fn settings_mut(&mut self) -> &mut ApplierSettings {
        &mut self.settings
    }
}

#[derive(Default)]
struct Callbacks {
    on_start: Option<Callback>,
    on_complete: Option<Callback>,
    on_loop_complete: Option<Callback>,
    on_ping_pong_half: Option<Callback>,
    on_value_changed: Option<Callback>,
    on_rewind: Option<Callback>,
}

impl Callbacks {
    fn slot(&mut self, event: TweenEvent) -> &mut Option<Callback> {
        match event {
            TweenEvent::Start => &mut self.on_start,
            TweenEvent::Complete => &mut self.on_complete,
            TweenEvent::LoopComplete => &mut self.on_loop_complete,
            TweenEvent::PingPongHalfLoopComplete => &mut self.on_ping_pong_half,
            TweenEvent::ValueChanged => &mut self.on_value_changed,
            TweenEvent::Rewind => &mut self.on_rewind,
        }
    }
}

pub struct Tween {
    id: TweenId,
    tag: Option<String>,
    unique_id: Option<String>,
    binding: Box<dyn Binding>,

    // timing
    progress: f64,
    duration: f32,
    initial_delay: f32,
    loop_delay: f32,
    ping_pong_delay: f32,
    current_initial_delay: f64,
    current_loop_delay: f64,
    loops: u32,
    remaining_loops: u32,
    infinite: bool,

    // play configuration
    ease: EaseKind,
    ease_inverted: bool,
    overshoot: f32,
    cycle_duration: f32,
    style: PlayStyle,
    direction: PlayDirection,
    auto_play: bool,
    auto_remove: bool,
    invert_ease_on_ping_pong: bool,
    loop_delay_on_first_loop: bool,
    locked: bool,

    // lifecycle
    initialized: bool,
    started: bool,
    paused: bool,
    completed: bool,
    removed: bool,
    end_reached: bool,
    rewinding: bool,

    /// Baseline used by the next `initialize`.
    anchor: f64,
    delta: DeltaTracker,
    callbacks: Callbacks,
}

impl std::fmt::Debug for Tween {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tween")
            .field("id", &self.id)
            .field("kind", &self.binding.kind())
            .field("progress", &self.progress)
            .field("duration", &self.duration)
            .field("style", &self.style)
            .field("direction", &self.direction)
            .field("paused", &self.paused)
            .field("completed", &self.completed)
            .field("removed", &self.removed)
            .finish_non_exhaustive()
    }
}

impl Tween {
    pub(crate) fn new(
        id: TweenId,
        binding: Box<dyn Binding>,
        defaults: &TweenDefaults,
        anchor: f64,
    ) -> Self {
        Self {
            id,
            tag: None,
            unique_id: None,
            binding,
            progress: 0.0,
            duration: defaults.duration.max(0.0),
            initial_delay: 0.0,
            loop_delay: 0.0,
            ping_pong_delay: 0.0,
            current_initial_delay: 0.0,
            current_loop_delay: 0.0,
            loops: 1,
            remaining_loops: 1,
            infinite: false,
            ease: defaults.ease,
            ease_inverted: false,
            overshoot: EaseParams::default().overshoot,
            cycle_duration: 0.0,
            style: defaults.play_style,
            direction: PlayDirection::Forward,
            auto_play: defaults.auto_play,
            auto_remove: defaults.auto_remove,
            invert_ease_on_ping_pong: false,
            loop_delay_on_first_loop: false,
            locked: false,
            initialized: false,
            started: false,
            paused: !defaults.auto_play,
            completed: false,
            removed: false,
            end_reached: false,
            rewinding: false,
            anchor,
            delta: DeltaTracker::prepared(anchor),
            callbacks: Callbacks::default(),
        }
    }

    // ---- read access ----

    #[inline]
    pub fn id(&self) -> TweenId {
        self.id
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn unique_id(&self) -> Option<&str> {
        self.unique_id.as_deref()
    }

    pub fn kind(&self) -> InterpolatorKind {
        self.binding.kind()
    }

    pub fn settings(&self) -> &ApplierSettings {
        self.binding.settings()
    }

    #[inline]
    pub fn progress(&self) -> f32 {
        self.progress as f32
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn initial_delay(&self) -> f32 {
        self.initial_delay
    }

    pub fn loop_delay(&self) -> f32 {
        self.loop_delay
    }

    pub fn ping_pong_delay(&self) -> f32 {
        self.ping_pong_delay
    }

    /// Delay still to elapse before stepping resumes.
    pub fn current_delay(&self) -> f32 {
        let left = if self.current_initial_delay > 0.0 {
            self.current_initial_delay
        } else {
            self.current_loop_delay
        };
        left as f32
    }

    pub fn loops(&self) -> u32 {
        self.loops
    }

    pub fn remaining_loops(&self) -> u32 {
        self.remaining_loops
    }

    pub fn is_infinite(&self) -> bool {
        self.infinite
    }

    /// The configured curve.
    pub fn ease(&self) -> EaseKind {
        self.ease
    }

    /// The curve in use right now; differs from [`Tween::ease`] during an
    /// inverted ping-pong half.
    pub fn effective_ease(&self) -> EaseKind {
        if self.ease_inverted {
            self.ease.inverse()
        } else {
            self.ease
        }
    }

    pub fn overshoot(&self) -> f32 {
        self.overshoot
    }

    pub fn cycle_duration(&self) -> f32 {
        self.cycle_duration
    }

    pub fn play_style(&self) -> PlayStyle {
        self.style
    }

    pub fn direction(&self) -> PlayDirection {
        self.direction
    }

    pub fn auto_remove(&self) -> bool {
        self.auto_remove
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn is_removed(&self) -> bool {
        self.removed
    }

    pub fn is_rewinding(&self) -> bool {
        self.rewinding
    }

    pub fn is_end_reached(&self) -> bool {
        self.end_reached
    }

    /// Wall-clock span of the whole tween, or `None` when it loops forever.
    ///
    /// A ping-pong loop counts both halves plus the half-loop delay. N loops
    /// have N - 1 loop delays between them, or N when the delay also runs
    /// before the first loop.
    pub fn total_duration(&self, include_initial_delay: bool, include_loop_delay: bool) -> Option<f32> {
        if self.infinite {
            return None;
        }
        let loops = self.loops.max(1) as f32;
        let cycle = match self.style {
            PlayStyle::Normal => self.duration,
            PlayStyle::PingPong => {
                let half_delay = if include_loop_delay {
                    self.ping_pong_delay
                } else {
                    0.0
                };
                self.duration * 2.0 + half_delay
            }
        };
        let mut total = cycle * loops;
        if include_loop_delay {
            let gaps = if self.loop_delay_on_first_loop {
                loops
            } else {
                loops - 1.0
            };
            total += self.loop_delay * gaps;
        }
        if include_initial_delay {
            total += self.initial_delay;
        }
        Some(total)
    }

    // ---- configuration (lock-guarded) ----

    pub(crate) fn set_duration(&mut self, secs: f32) {
        if self.locked {
            return;
        }
        self.duration = secs.max(0.0);
    }

    pub(crate) fn set_initial_delay(&mut self, secs: f32) {
        if self.locked {
            return;
        }
        self.initial_delay = secs.max(0.0);
    }

    pub(crate) fn set_loop_delay(&mut self, secs: f32) {
        if self.locked {
            return;
        }
        self.loop_delay = secs.max(0.0);
    }

    pub(crate) fn set_ping_pong_delay(&mut self, secs: f32) {
        if self.locked {
            return;
        }
        self.ping_pong_delay = secs.max(0.0);
    }

    pub(crate) fn set_loops(&mut self, loops: u32) {
        if self.locked {
            return;
        }
        self.loops = loops.max(1);
        self.remaining_loops = self.loops;
    }

    pub(crate) fn set_infinite(&mut self, infinite: bool) {
        if self.locked {
            return;
        }
        self.infinite = infinite;
    }

    pub(crate) fn set_play_style(&mut self, style: PlayStyle) {
        if self.locked {
            return;
        }
        self.style = style;
    }

    pub(crate) fn set_auto_remove(&mut self, auto_remove: bool) {
        if self.locked {
            return;
        }
        self.auto_remove = auto_remove;
    }

    pub(crate) fn set_auto_play(&mut self, auto_play: bool) {
        if self.locked {
            return;
        }
        self.auto_play = auto_play;
        self.paused = !auto_play;
    }

    pub(crate) fn set_invert_ease_on_ping_pong(&mut self, invert: bool) {
        if self.locked {
            return;
        }
        self.invert_ease_on_ping_pong = invert;
    }

    pub(crate) fn set_loop_delay_on_first_loop(&mut self, enabled: bool) {
        if self.locked {
            return;
        }
        self.loop_delay_on_first_loop = enabled;
    }

    pub(crate) fn set_tag(&mut self, tag: Option<String>) {
        if self.locked {
            return;
        }
        self.tag = tag;
    }

    /// Unique ids are indexed by the scheduler; it calls this after evicting
    /// any previous holder.
    pub(crate) fn set_unique_id(&mut self, unique_id: Option<String>) {
        self.unique_id = unique_id;
    }

    pub(crate) fn settings_mut(&mut self) -> Option<&mut ApplierSettings> {
        if self.locked {
            None
        } else {
            Some(self.binding.settings_mut())
        }
    }

    // ---- configuration (always allowed) ----

    pub(crate) fn set_ease(&mut self, ease: EaseKind) {
        self.ease = ease;
        self.ease_inverted = false;
    }

    pub(crate) fn set_overshoot(&mut self, overshoot: f32) {
        self.overshoot = overshoot.clamp(0.0, 1.0);
    }

    pub(crate) fn set_cycle_duration(&mut self, period: f32) {
        self.cycle_duration = period.max(0.0);
    }

    pub(crate) fn set_callback(&mut self, event: TweenEvent, callback: Callback) {
        *self.callbacks.slot(event) = Some(callback);
    }

    /// Jump to `progress` and apply the value there.
    pub(crate) fn set_progress(&mut self, progress: f32) {
        self.progress = f64::from(progress);
        self.apply_progress();
    }

    // ---- lifecycle ----

    fn fire(&mut self, event: TweenEvent, ctx: &mut TweenContext) {
        ctx.set_progress(self.progress as f32);
        if let Some(cb) = self.callbacks.slot(event).as_mut() {
            cb(ctx);
        }
    }

    fn apply_progress(&mut self) {
        let params = EaseParams {
            overshoot: self.overshoot,
            period: self.cycle_duration,
        };
        let eased = ease_with(self.effective_ease(), self.progress as f32, params);
        self.binding.apply(eased);
    }

    /// Arm delays and loop count, lock configuration, anchor the delta tracker.
    pub(crate) fn initialize(&mut self) {
        self.current_initial_delay = f64::from(self.initial_delay);
        self.current_loop_delay = if self.loop_delay_on_first_loop {
            f64::from(self.loop_delay)
        } else {
            0.0
        };
        self.remaining_loops = self.loops;
        self.locked = true;
        self.delta = DeltaTracker::prepared(self.anchor);
        self.initialized = true;
    }

    pub(crate) fn start(&mut self, now: f64, ctx: &mut TweenContext) {
        self.progress = 0.0;
        self.paused = false;
        self.fire(TweenEvent::Start, ctx);
        self.started = true;
        self.delta = DeltaTracker::prepared(now);
    }

    /// Advance by the time elapsed since the previous step.
    pub(crate) fn step(&mut self, now: f64, ctx: &mut TweenContext) {
        if self.paused || self.completed || self.removed {
            return;
        }
        self.delta = self.delta.advanced(now);
        let elapsed = self.delta.delta();

        if self.current_initial_delay > 0.0 {
            self.current_initial_delay = drain(self.current_initial_delay, elapsed);
            return;
        }
        if self.current_loop_delay > 0.0 {
            self.current_loop_delay = drain(self.current_loop_delay, elapsed);
            return;
        }

        if self.duration == 0.0 {
            self.complete(ctx);
            return;
        }

        if !self.started {
            self.start(now, ctx);
        }

        let signed = match self.direction {
            PlayDirection::Forward => elapsed,
            PlayDirection::Backward => -elapsed,
        };
        self.progress += signed / f64::from(self.duration);
        self.fire(TweenEvent::ValueChanged, ctx);

        match self.direction {
            PlayDirection::Forward if self.progress >= 1.0 - END_EPSILON => {
                self.overshoot_forward(ctx)
            }
            PlayDirection::Backward if self.progress <= END_EPSILON => {
                self.overshoot_backward(ctx)
            }
            _ => self.apply_progress(),
        }

        if self.end_reached {
            self.current_loop_delay = f64::from(self.loop_delay);
            self.fire(TweenEvent::LoopComplete, ctx);
            if self.infinite {
                self.end_reached = false;
            } else if self.remaining_loops > 1 {
                self.remaining_loops -= 1;
                self.end_reached = false;
            } else {
                self.complete(ctx);
            }
        }
    }

    fn overshoot_forward(&mut self, ctx: &mut TweenContext) {
        self.progress = 1.0;
        self.fire(TweenEvent::ValueChanged, ctx);

        if self.rewinding {
            self.paused = true;
            self.rewinding = false;
            self.apply_progress();
        } else if self.style == PlayStyle::PingPong {
            if self.invert_ease_on_ping_pong {
                self.ease_inverted = !self.ease_inverted;
            }
            self.direction = PlayDirection::Backward;
            self.current_loop_delay = f64::from(self.ping_pong_delay);
            self.fire(TweenEvent::PingPongHalfLoopComplete, ctx);
            self.apply_progress();
        } else {
            // the next loop restarts at 0; the final value is applied by
            // `complete` when this was the last loop
            self.progress = 0.0;
            self.end_reached = true;
        }
    }

    fn overshoot_backward(&mut self, ctx: &mut TweenContext) {
        self.progress = 0.0;
        self.fire(TweenEvent::ValueChanged, ctx);

        if self.rewinding {
            self.paused = true;
            self.rewinding = false;
        } else if self.style == PlayStyle::PingPong {
            if self.invert_ease_on_ping_pong {
                self.ease_inverted = !self.ease_inverted;
            }
            self.direction = PlayDirection::Forward;
            self.fire(TweenEvent::PingPongHalfLoopComplete, ctx);
            self.end_reached = true;
        }
        self.apply_progress();
    }

    pub(crate) fn pause(&mut self) {
        self.paused = true;
    }

    pub(crate) fn resume(&mut self, now: f64) {
        if self.removed {
            return;
        }
        self.paused = false;
        self.anchor = now;
        self.delta = DeltaTracker::prepared(now);
    }

    /// Head back toward the nearer end, skipping delays. Pauses on arrival.
    pub(crate) fn rewind(&mut self, now: f64, ctx: &mut TweenContext) {
        if self.removed {
            return;
        }
        let toward_start = if self.progress >= 1.0 {
            true
        } else if self.progress <= 0.0 {
            false
        } else {
            self.direction == PlayDirection::Forward
        };
        let direction = if toward_start {
            PlayDirection::Backward
        } else {
            PlayDirection::Forward
        };
        if direction != self.direction {
            self.direction = direction;
            self.fire(TweenEvent::Rewind, ctx);
        }

        self.current_initial_delay = 0.0;
        self.current_loop_delay = 0.0;
        self.rewinding = true;
        self.completed = false;
        self.paused = false;
        self.end_reached = false;
        self.delta = DeltaTracker::prepared(now);
    }

    /// Jump to the home position (1 for normal, 0 for ping-pong), apply it and finish.
    pub(crate) fn complete(&mut self, ctx: &mut TweenContext) {
        if self.removed {
            return;
        }
        self.progress = match self.style {
            PlayStyle::Normal => 1.0,
            PlayStyle::PingPong => 0.0,
        };
        self.apply_progress();
        self.completed = true;
        self.paused = true;
        self.end_reached = false;
        self.rewinding = false;
        self.fire(TweenEvent::Complete, ctx);
        if self.auto_remove {
            self.remove();
        }
    }

    /// Back to progress 0 with configuration unlocked; re-initialized on the next tick.
    /// Resetting a removed tween is not supported.
    pub(crate) fn reset(&mut self, now: f64, ctx: &mut TweenContext) {
        self.anchor = now;
        self.initialize();
        self.direction = PlayDirection::Forward;
        self.ease_inverted = false;
        self.progress = 0.0;
        self.apply_progress();
        self.completed = false;
        self.end_reached = false;
        self.started = false;
        self.rewinding = false;
        self.paused = !self.auto_play;
        self.locked = false;
        self.initialized = false;
        self.fire(TweenEvent::Start, ctx);
    }

    pub(crate) fn remove(&mut self) {
        self.removed = true;
        self.paused = true;
    }
}

//! Time-driven interpolation between two values.
//!
//! A [`Tween`] is polled by the host once per frame through [`Tween::update`].
//! Playback is controlled with `start`, `start_loop`, `pause`, `resume`,
//! `finish` and `turn_back`.
//!
//! A cycle is one pass from start to end. With yoyo enabled a cycle is the
//! whole round trip: the endpoints swap when the forward leg ends and swap
//! back when the return leg ends. Repeat counts and deferred finish requests
//! are only evaluated at the end of a cycle, never halfway through a round
//! trip.

use crate::clock::{Clock, SystemClock};
use crate::config::TweenConfig;
use crate::ease::{Ease, EaseError};
use crate::point::Tweenable;

use log::{debug, trace};

use std::mem;

/// Playback state, derived from the tween's flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TweenState {
    /// Never started.
    Idle,
    Playing,
    /// Playing, but suspended.
    Paused,
    /// Playing the return leg of a yoyo.
    TurningBack,
    /// Reached the end of its last cycle.
    Stopped,
}

#[derive(Debug, Clone)]
pub struct Tween<V, C = SystemClock> {
    clock: C,
    start_point: V,
    end_point: V,
    original_start: V,
    duration_ms: f64,
    delay: f64,
    yoyo: bool,
    easing: Ease,
    ease_fn: fn(f64) -> f64,
    is_playing: bool,
    is_paused: bool,
    is_turning_back: bool,
    do_finish: bool,
    has_stopped: bool,
    delay_started: bool,
    start_time: f64,
    pause_start_time: Option<f64>,
    do_loop: bool,
    repeat: Option<u32>,
    repeat_cnt: u32,
    progress: f64,
    current_value: V,
}

impl<V: Tweenable> Tween<V, SystemClock> {
    /// Creates a linear tween over `duration` seconds, timed by the wall clock.
    pub fn new(start: V, end: V, duration: f64) -> Self {
        Self::with_clock(start, end, duration, SystemClock)
    }
}

impl<V: Tweenable, C: Clock> Tween<V, C> {
    pub fn with_clock(start: V, end: V, duration: f64, clock: C) -> Self {
        let easing = Ease::default();

        Self {
            clock,
            start_point: start,
            end_point: end,
            original_start: start,
            duration_ms: (duration * 1000.).max(0.),
            delay: 0.,
            yoyo: false,
            easing,
            ease_fn: easing.func(),
            is_playing: false,
            is_paused: false,
            is_turning_back: false,
            do_finish: false,
            has_stopped: false,
            delay_started: false,
            start_time: 0.,
            pause_start_time: None,
            do_loop: false,
            repeat: None,
            repeat_cnt: 0,
            progress: 0.,
            current_value: start,
        }
    }

    /// Builds a tween from its configuration.
    ///
    /// Fails with [`EaseError::InvalidEasingName`] if `config.easing` does not
    /// name one of the curves in [`Ease::ALL`]. There is no fallback curve.
    pub fn with_config(config: &TweenConfig<V>, clock: C) -> Result<Self, EaseError> {
        let easing = config.easing.parse::<Ease>()?;

        Ok(Self::with_clock(config.start, config.end, config.duration, clock)
            .with_easing(easing)
            .with_yoyo(config.yoyo)
            .with_delay(config.delay))
    }

    pub fn with_easing(mut self, easing: Ease) -> Self {
        self.easing = easing;
        self.ease_fn = easing.func();
        self
    }

    pub fn with_yoyo(mut self, yoyo: bool) -> Self {
        self.yoyo = yoyo;
        self
    }

    pub fn with_delay(mut self, delay: f64) -> Self {
        self.delay = delay.max(0.);
        self
    }

    /// Plays a single cycle. Does nothing if already playing.
    pub fn start(&mut self) {
        self.setup(false, None);
    }

    /// Plays cycles back to back, `repeat` times in total, or forever if
    /// `repeat` is `None`. Does nothing if already playing.
    pub fn start_loop(&mut self, repeat: Option<u32>) {
        self.setup(true, repeat);
    }

    fn setup(&mut self, do_loop: bool, repeat: Option<u32>) {
        if self.is_playing {
            return;
        }

        let now = self.clock.now();
        debug!("starting tween (loop: {do_loop}, repeat: {repeat:?}) at {now:.3}");

        self.do_loop = do_loop;
        self.repeat = repeat;
        self.repeat_cnt = 0;
        self.start_time = now;
        self.is_playing = true;
        self.has_stopped = false;

        // time spent paused before playback began is not play time
        if self.is_paused {
            self.pause_start_time = Some(now);
        }
    }

    /// Starts a single cycle once `elapsed` seconds reach the configured
    /// delay. Only the first call past the delay has any effect.
    ///
    /// Returns whether the tween is playing.
    pub fn delay_start(&mut self, elapsed: f64) -> bool {
        self.delayed_setup(elapsed, false, None)
    }

    /// Like [`delay_start`](Self::delay_start), but starts looping.
    pub fn delay_loop(&mut self, elapsed: f64, repeat: Option<u32>) -> bool {
        self.delayed_setup(elapsed, true, repeat)
    }

    fn delayed_setup(&mut self, elapsed: f64, do_loop: bool, repeat: Option<u32>) -> bool {
        if !self.delay_started && elapsed >= self.delay {
            self.delay_started = true;
            self.setup(do_loop, repeat);
        }

        self.is_playing
    }

    pub fn pause(&mut self) {
        if self.is_paused {
            return;
        }

        self.is_paused = true;
        self.pause_start_time = Some(self.clock.now());
        debug!("paused tween at {:.3}", self.progress);
    }

    pub fn resume(&mut self) {
        if !self.is_paused {
            return;
        }

        if let Some(paused_at) = self.pause_start_time.take() {
            self.start_time += self.clock.now() - paused_at;
        }
        self.is_paused = false;
        debug!("resumed tween at {:.3}", self.progress);
    }

    /// Requests that playback stop at the end of the current cycle, ignoring
    /// any remaining repeats. Ignored unless playing and not paused.
    pub fn finish(&mut self) {
        if self.is_playing && !self.is_paused {
            debug!("finish requested");
            self.do_finish = true;
        }
    }

    /// Reverses direction by swapping the endpoints, then starts a single
    /// cycle if not already playing.
    pub fn turn_back(&mut self) {
        debug!("turning back");
        self.turn();
        self.start();
    }

    #[inline]
    fn turn(&mut self) {
        mem::swap(&mut self.start_point, &mut self.end_point);
    }

    /// Samples the clock and returns the interpolated value.
    ///
    /// While idle, paused or stopped nothing is recomputed and the last value
    /// is returned.
    pub fn update(&mut self) -> V {
        if !self.is_playing || self.is_paused {
            return self.current_value;
        }

        let now = self.clock.now();
        let elapsed_ms = (now - self.start_time) * 1000.;
        self.progress = if self.duration_ms > 0. {
            (elapsed_ms / self.duration_ms).clamp(0., 1.)
        } else {
            1.
        };

        let delta = self.end_point - self.start_point;
        self.current_value = delta * (self.ease_fn)(self.progress) + self.start_point;

        if self.progress == 1. {
            self.complete_leg(now);
        }

        self.current_value
    }

    fn complete_leg(&mut self, now: f64) {
        if self.yoyo {
            self.turn();

            if !self.is_turning_back {
                trace!("forward leg complete, turning back");
                self.start_time = now;
                self.is_turning_back = true;
                return;
            }

            trace!("return leg complete");
            self.is_turning_back = false;
        }

        self.complete_cycle(now);
    }

    fn complete_cycle(&mut self, now: f64) {
        if self.do_finish || !self.do_loop {
            self.stop();
            return;
        }

        match self.repeat {
            Some(repeat) if self.repeat_cnt + 1 < repeat => {
                self.repeat_cnt += 1;
                self.start_time = now;
                trace!("cycle {} of {repeat} complete", self.repeat_cnt);
            }
            Some(_) => self.stop(),
            None => {
                self.start_time = now;
                trace!("cycle complete, looping");
            }
        }
    }

    fn stop(&mut self) {
        self.is_playing = false;
        self.has_stopped = true;
        self.do_finish = false;
        debug!("tween stopped");
    }

    pub fn state(&self) -> TweenState {
        match (self.is_playing, self.is_paused, self.is_turning_back) {
            (true, true, _) => TweenState::Paused,
            (true, false, true) => TweenState::TurningBack,
            (true, false, false) => TweenState::Playing,
            (false, ..) if self.has_stopped => TweenState::Stopped,
            (false, ..) => TweenState::Idle,
        }
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.is_paused
    }

    #[inline]
    pub fn is_turning_back(&self) -> bool {
        self.is_turning_back
    }

    #[inline]
    pub fn finish_requested(&self) -> bool {
        self.do_finish
    }

    /// The most recently computed value.
    #[inline]
    pub fn current_value(&self) -> V {
        self.current_value
    }

    /// Normalized progress through the current leg, in `[0, 1]`.
    #[inline]
    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn start_point(&self) -> V {
        self.start_point
    }

    pub fn end_point(&self) -> V {
        self.end_point
    }

    /// The start value the tween was created with.
    pub fn original_start(&self) -> V {
        self.original_start
    }

    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    pub fn delay(&self) -> f64 {
        self.delay
    }

    pub fn is_yoyo(&self) -> bool {
        self.yoyo
    }

    pub fn easing(&self) -> Ease {
        self.easing
    }

    pub fn is_looping(&self) -> bool {
        self.do_loop
    }

    pub fn repeat(&self) -> Option<u32> {
        self.repeat
    }

    /// Completed cycles beyond the first in a bounded loop.
    pub fn repeat_count(&self) -> u32 {
        self.repeat_cnt
    }

    pub fn start_time(&self) -> f64 {
        self.start_time
    }

    pub fn pause_start_time(&self) -> Option<f64> {
        self.pause_start_time
    }
}

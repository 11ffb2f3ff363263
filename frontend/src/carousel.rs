use std::time::Duration;

use log::{debug, warn};
use thiserror::Error;
use yew::Callback;

use crate::timer::Scheduler;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CarouselError {
    #[error("slide {index} is out of range for a carousel of {len} slides")]
    OutOfRange { index: usize, len: usize },
}

/// Who asked for the navigation. Only user navigation suspends autoplay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    User,
    Timer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Index and autoplay flag of a fixed-length carousel.
///
/// `current < len` holds whenever `len > 0`. An empty carousel never autoplays
/// and every navigation on it is a no-op.
#[derive(Debug, Clone, PartialEq)]
pub struct Carousel {
    len: usize,
    current: usize,
    auto_playing: bool,
    direction: Direction,
    generation: u64,
    cycle: u64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselSnapshot {
    pub current: usize,
    pub len: usize,
    pub auto_playing: bool,
    pub direction: Direction,
    /// Bumped on every index change.
    pub generation: u64,
    /// Bumped on every index change and every timer advance; keys the
    /// progress bar so it restarts even when a single slide wraps onto itself.
    pub cycle: u64,
}

impl CarouselSnapshot {
    /// Share of the tick period elapsed, 0.0 while paused.
    pub fn progress(&self, elapsed: Duration, period: Duration) -> f64 {
        if !self.auto_playing || period.is_zero() {
            return 0.0;
        }
        (elapsed.as_secs_f64() / period.as_secs_f64()).clamp(0.0, 1.0)
    }
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            current: 0,
            auto_playing: len > 0,
            direction: Direction::Forward,
            generation: 0,
            cycle: 0,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn is_auto_playing(&self) -> bool {
        self.auto_playing
    }

    fn move_to(&mut self, index: usize, direction: Direction) {
        if index != self.current {
            self.current = index;
            self.generation += 1;
            self.cycle += 1;
        }
        self.direction = direction;
    }

    fn user_driven(&mut self, trigger: Trigger) {
        if trigger == Trigger::User {
            self.pause();
        }
    }

    pub fn advance(&mut self, trigger: Trigger) {
        if self.len == 0 {
            return;
        }
        let before = self.generation;
        self.move_to((self.current + 1) % self.len, Direction::Forward);
        if trigger == Trigger::Timer && self.generation == before {
            self.cycle += 1;
        }
        self.user_driven(trigger);
    }

    pub fn retreat(&mut self, trigger: Trigger) {
        if self.len == 0 {
            return;
        }
        self.move_to((self.current + self.len - 1) % self.len, Direction::Backward);
        self.user_driven(trigger);
    }

    /// Jump straight to `index`. Always user driven, so it pauses autoplay.
    pub fn select(&mut self, index: usize) -> Result<(), CarouselError> {
        if index >= self.len {
            return Err(CarouselError::OutOfRange { index, len: self.len });
        }
        let direction = if index < self.current {
            Direction::Backward
        } else {
            Direction::Forward
        };
        self.move_to(index, direction);
        self.pause();
        Ok(())
    }

    pub fn pause(&mut self) {
        self.auto_playing = false;
    }

    pub fn resume(&mut self) {
        self.auto_playing = self.len > 0;
    }

    pub fn snapshot(&self) -> CarouselSnapshot {
        CarouselSnapshot {
            current: self.current,
            len: self.len,
            auto_playing: self.auto_playing,
            direction: self.direction,
            generation: self.generation,
            cycle: self.cycle,
        }
    }
}

/// A [`Carousel`] plus the autoplay ticker it owns.
///
/// The ticker exists exactly while autoplay is on. The host routes every tick
/// back into [`CarouselController::tick`].
pub struct CarouselController<S: Scheduler> {
    carousel: Carousel,
    scheduler: S,
    period: Duration,
    on_tick: Callback<()>,
    ticker: Option<S::Handle>,
    disposed: bool,
}

impl<S: Scheduler> CarouselController<S> {
    pub fn new(len: usize, scheduler: S, period: Duration, on_tick: Callback<()>) -> Self {
        let mut controller = Self {
            carousel: Carousel::new(len),
            scheduler,
            period,
            on_tick,
            ticker: None,
            disposed: false,
        };
        controller.sync_ticker();
        controller
    }

    fn sync_ticker(&mut self) {
        let wanted = self.carousel.is_auto_playing() && !self.disposed;
        match (wanted, self.ticker.is_some()) {
            (true, false) => {
                debug!("carousel: autoplay armed every {:?}", self.period);
                self.ticker = Some(self.scheduler.every(self.period, self.on_tick.clone()));
            }
            (false, true) => {
                debug!("carousel: autoplay stopped");
                if let Some(handle) = self.ticker.take() {
                    self.scheduler.cancel(handle);
                }
            }
            _ => {}
        }
    }

    /// Timer-driven advance. Leaves the autoplay flag untouched.
    pub fn tick(&mut self) {
        if self.ticker.is_none() {
            warn!("carousel: ignoring tick while autoplay is off");
            return;
        }
        self.carousel.advance(Trigger::Timer);
        debug!("carousel: tick to slide {}", self.carousel.current());
    }

    pub fn next(&mut self) {
        self.carousel.advance(Trigger::User);
        self.sync_ticker();
    }

    pub fn previous(&mut self) {
        self.carousel.retreat(Trigger::User);
        self.sync_ticker();
    }

    pub fn select(&mut self, index: usize) -> Result<(), CarouselError> {
        self.carousel.select(index)?;
        self.sync_ticker();
        Ok(())
    }

    pub fn pause(&mut self) {
        self.carousel.pause();
        self.sync_ticker();
    }

    pub fn resume(&mut self) {
        if self.disposed {
            return;
        }
        self.carousel.resume();
        self.sync_ticker();
    }

    /// Tear down the ticker for good. Later `resume` calls do nothing.
    pub fn dispose(&mut self) {
        self.disposed = true;
        self.carousel.pause();
        self.sync_ticker();
    }

    pub fn snapshot(&self) -> CarouselSnapshot {
        self.carousel.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::manual::{counter, ManualScheduler};

    const PERIOD: Duration = Duration::from_millis(5000);

    fn controller(len: usize) -> (CarouselController<ManualScheduler>, ManualScheduler, std::rc::Rc<std::cell::Cell<u32>>) {
        let scheduler = ManualScheduler::new();
        let (on_tick, ticks) = counter();
        let controller = CarouselController::new(len, scheduler.clone(), PERIOD, on_tick);
        (controller, scheduler, ticks)
    }

    #[test]
    fn starts_at_zero_and_autoplaying() {
        let carousel = Carousel::new(6);
        assert_eq!(carousel.current(), 0);
        assert!(carousel.is_auto_playing());
    }

    #[test]
    fn index_stays_in_range_for_any_walk() {
        for len in 1..=7 {
            let mut carousel = Carousel::new(len);
            let mut expected = 0usize;
            for step in 0..50 {
                if step % 3 == 0 {
                    carousel.retreat(Trigger::User);
                    expected = (expected + len - 1) % len;
                } else {
                    carousel.advance(Trigger::Timer);
                    expected = (expected + 1) % len;
                }
                assert!(carousel.current() < len);
                assert_eq!(carousel.current(), expected);
            }
        }
    }

    #[test]
    fn wraps_at_both_ends() {
        let mut carousel = Carousel::new(4);
        carousel.retreat(Trigger::User);
        assert_eq!(carousel.current(), 3);
        carousel.advance(Trigger::User);
        assert_eq!(carousel.current(), 0);
    }

    #[test]
    fn user_navigation_pauses_but_timer_does_not() {
        let mut carousel = Carousel::new(3);
        carousel.advance(Trigger::Timer);
        assert!(carousel.is_auto_playing());

        carousel.advance(Trigger::User);
        assert!(!carousel.is_auto_playing());

        carousel.resume();
        carousel.retreat(Trigger::User);
        assert!(!carousel.is_auto_playing());

        carousel.pause();
        carousel.advance(Trigger::Timer);
        assert!(!carousel.is_auto_playing());
    }

    #[test]
    fn select_sets_index_and_pauses() {
        for target in 0..5 {
            let mut carousel = Carousel::new(5);
            carousel.select(target).unwrap();
            assert_eq!(carousel.current(), target);
            assert!(!carousel.is_auto_playing());
        }
    }

    #[test]
    fn select_out_of_range_leaves_state_alone() {
        let mut carousel = Carousel::new(3);
        carousel.advance(Trigger::Timer);
        let before = carousel.clone();

        let err = carousel.select(3).unwrap_err();
        assert_eq!(err, CarouselError::OutOfRange { index: 3, len: 3 });
        assert_eq!(carousel, before);
    }

    #[test]
    fn empty_carousel_refuses_autoplay() {
        let mut carousel = Carousel::new(0);
        assert!(!carousel.is_auto_playing());
        carousel.resume();
        assert!(!carousel.is_auto_playing());
        carousel.advance(Trigger::Timer);
        carousel.retreat(Trigger::User);
        assert_eq!(carousel.current(), 0);
        assert!(carousel.select(0).is_err());

        let (_controller, scheduler, _) = controller(0);
        assert_eq!(scheduler.active(), 0);
    }

    #[test]
    fn pause_and_resume_are_idempotent() {
        let (mut controller, scheduler, _) = controller(3);
        controller.pause();
        controller.pause();
        assert_eq!(scheduler.active(), 0);
        controller.resume();
        controller.resume();
        assert_eq!(scheduler.active(), 1);
        assert!(controller.snapshot().auto_playing);
    }

    #[test]
    fn ticks_advance_while_autoplaying() {
        let (mut controller, scheduler, ticks) = controller(3);
        scheduler.advance(PERIOD);
        assert_eq!(ticks.get(), 1);
        controller.tick();
        assert_eq!(controller.snapshot().current, 1);
        assert!(controller.snapshot().auto_playing);
    }

    #[test]
    fn user_navigation_tears_down_ticker() {
        let (mut controller, scheduler, ticks) = controller(3);
        controller.next();
        assert_eq!(scheduler.active(), 0);

        scheduler.advance(PERIOD * 3);
        assert_eq!(ticks.get(), 0);
        assert_eq!(controller.snapshot().current, 1);
    }

    #[test]
    fn hover_cycle_rearms_a_fresh_ticker() {
        let (mut controller, scheduler, ticks) = controller(3);
        scheduler.advance(Duration::from_millis(3000));
        controller.pause();
        scheduler.advance(Duration::from_millis(1000));
        controller.resume();

        scheduler.advance(Duration::from_millis(4999));
        assert_eq!(ticks.get(), 0);
        scheduler.advance(Duration::from_millis(1));
        assert_eq!(ticks.get(), 1);
    }

    #[test]
    fn stale_tick_is_ignored() {
        let (mut controller, _scheduler, _) = controller(3);
        controller.pause();
        controller.tick();
        assert_eq!(controller.snapshot().current, 0);
    }

    #[test]
    fn dispose_cancels_and_blocks_resume() {
        let (mut controller, scheduler, ticks) = controller(3);
        controller.dispose();
        assert_eq!(scheduler.active(), 0);

        controller.resume();
        assert_eq!(scheduler.active(), 0);
        scheduler.advance(PERIOD * 2);
        assert_eq!(ticks.get(), 0);
    }

    #[test]
    fn generation_tracks_index_changes() {
        let mut carousel = Carousel::new(3);
        carousel.advance(Trigger::Timer);
        carousel.retreat(Trigger::User);
        assert_eq!(carousel.snapshot().generation, 2);
        assert_eq!(carousel.snapshot().direction, Direction::Backward);

        carousel.select(0).unwrap();
        assert_eq!(carousel.snapshot().generation, 2);
    }

    #[test]
    fn single_slide_ticks_restart_the_cycle() {
        let (mut controller, scheduler, ticks) = controller(1);
        for expected in 1..=3 {
            scheduler.advance(PERIOD);
            assert_eq!(ticks.get(), expected);
            controller.tick();
            let snapshot = controller.snapshot();
            assert_eq!(snapshot.current, 0);
            assert_eq!(snapshot.generation, 0);
            assert_eq!(snapshot.cycle, u64::from(expected));
        }
    }

    #[test]
    fn cycle_follows_every_slide_change() {
        let mut carousel = Carousel::new(3);
        carousel.advance(Trigger::Timer);
        carousel.select(0).unwrap();
        carousel.select(0).unwrap();
        let snapshot = carousel.snapshot();
        assert_eq!(snapshot.generation, 2);
        assert_eq!(snapshot.cycle, 2);
    }

    #[test]
    fn progress_is_derived_from_elapsed_time() {
        let mut carousel = Carousel::new(3);
        let snapshot = carousel.snapshot();
        assert_eq!(snapshot.progress(Duration::from_millis(2500), PERIOD), 0.5);
        assert_eq!(snapshot.progress(Duration::from_secs(9), PERIOD), 1.0);

        carousel.pause();
        assert_eq!(carousel.snapshot().progress(Duration::from_millis(2500), PERIOD), 0.0);
    }
}

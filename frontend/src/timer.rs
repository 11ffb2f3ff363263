//! Scheduled callbacks owned by the controllers.
//!
//! A controller never spawns a background task that could outlive it. It asks a
//! [`Scheduler`] for a registration and keeps the returned handle; dropping the
//! handle (or passing it to [`Scheduler::cancel`]) deregisters the callback.

use std::time::Duration;

use gloo_timers::callback::{Interval, Timeout};
use yew::Callback;

pub trait Scheduler {
    /// Owning registration. Dropping it must stop any further firing.
    type Handle;

    /// Fire `tick` every `period` until the handle is dropped.
    fn every(&self, period: Duration, tick: Callback<()>) -> Self::Handle;

    /// Fire `fire` once after `delay` unless the handle is dropped first.
    fn after(&self, delay: Duration, fire: Callback<()>) -> Self::Handle;

    fn cancel(&self, handle: Self::Handle) {
        drop(handle);
    }
}

fn as_millis(duration: Duration) -> u32 {
    u32::try_from(duration.as_millis()).unwrap_or(u32::MAX)
}

/// Browser timers (`setInterval` / `setTimeout` through gloo).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GlooScheduler;

pub enum GlooTimer {
    Interval(Interval),
    Timeout(Timeout),
}

impl Scheduler for GlooScheduler {
    type Handle = GlooTimer;

    fn every(&self, period: Duration, tick: Callback<()>) -> GlooTimer {
        GlooTimer::Interval(Interval::new(as_millis(period), move || tick.emit(())))
    }

    fn after(&self, delay: Duration, fire: Callback<()>) -> GlooTimer {
        GlooTimer::Timeout(Timeout::new(as_millis(delay), move || fire.emit(())))
    }
}

#[cfg(test)]
pub mod manual {
    //! Virtual clock for driving timers deterministically in tests.

    use std::cell::RefCell;
    use std::rc::{Rc, Weak};
    use std::time::Duration;

    use yew::Callback;

    use super::Scheduler;

    struct Pending {
        id: u64,
        due: Duration,
        period: Option<Duration>,
        callback: Callback<()>,
    }

    #[derive(Default)]
    struct Inner {
        now: Duration,
        next_id: u64,
        pending: Vec<Pending>,
    }

    #[derive(Clone, Default)]
    pub struct ManualScheduler {
        inner: Rc<RefCell<Inner>>,
    }

    pub struct ManualHandle {
        id: u64,
        inner: Weak<RefCell<Inner>>,
    }

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            if let Some(inner) = self.inner.upgrade() {
                inner.borrow_mut().pending.retain(|p| p.id != self.id);
            }
        }
    }

    impl ManualScheduler {
        pub fn new() -> Self {
            Self::default()
        }

        fn register(&self, delay: Duration, period: Option<Duration>, callback: Callback<()>) -> ManualHandle {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            let due = inner.now + delay;
            inner.pending.push(Pending { id, due, period, callback });
            ManualHandle { id, inner: Rc::downgrade(&self.inner) }
        }

        /// Number of live registrations.
        pub fn active(&self) -> usize {
            self.inner.borrow().pending.len()
        }

        /// Move the clock forward, firing every registration that falls due in order.
        pub fn advance(&self, by: Duration) {
            let target = self.inner.borrow().now + by;
            loop {
                let fired = {
                    let mut inner = self.inner.borrow_mut();
                    let next = inner
                        .pending
                        .iter()
                        .enumerate()
                        .filter(|(_, p)| p.due <= target)
                        .min_by_key(|(_, p)| (p.due, p.id))
                        .map(|(i, _)| i);
                    match next {
                        Some(i) => {
                            inner.now = inner.pending[i].due;
                            let callback = inner.pending[i].callback.clone();
                            match inner.pending[i].period {
                                Some(period) => inner.pending[i].due += period,
                                None => {
                                    inner.pending.remove(i);
                                }
                            }
                            Some(callback)
                        }
                        None => None,
                    }
                };
                match fired {
                    Some(callback) => callback.emit(()),
                    None => break,
                }
            }
            self.inner.borrow_mut().now = target;
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = ManualHandle;

        fn every(&self, period: Duration, tick: Callback<()>) -> ManualHandle {
            self.register(period, Some(period), tick)
        }

        fn after(&self, delay: Duration, fire: Callback<()>) -> ManualHandle {
            self.register(delay, None, fire)
        }
    }

    /// Callback that counts how often it was emitted.
    pub fn counter() -> (Callback<()>, Rc<std::cell::Cell<u32>>) {
        let count = Rc::new(std::cell::Cell::new(0));
        let hits = count.clone();
        (Callback::from(move |_| hits.set(hits.get() + 1)), count)
    }
}

#[cfg(test)]
mod tests {
    use super::manual::{counter, ManualScheduler};
    use super::Scheduler;
    use std::time::Duration;

    #[test]
    fn interval_fires_once_per_period() {
        let scheduler = ManualScheduler::new();
        let (tick, count) = counter();
        let _handle = scheduler.every(Duration::from_millis(5000), tick);

        scheduler.advance(Duration::from_millis(4999));
        assert_eq!(count.get(), 0);
        scheduler.advance(Duration::from_millis(1));
        assert_eq!(count.get(), 1);
        scheduler.advance(Duration::from_millis(10_000));
        assert_eq!(count.get(), 3);
    }

    #[test]
    fn timeout_is_single_shot() {
        let scheduler = ManualScheduler::new();
        let (fire, count) = counter();
        let _handle = scheduler.after(Duration::from_millis(2000), fire);

        scheduler.advance(Duration::from_secs(60));
        assert_eq!(count.get(), 1);
        assert_eq!(scheduler.active(), 0);
    }

    #[test]
    fn cancelled_handle_never_fires() {
        let scheduler = ManualScheduler::new();
        let (fire, count) = counter();
        let handle = scheduler.after(Duration::from_millis(100), fire);
        scheduler.cancel(handle);

        scheduler.advance(Duration::from_secs(1));
        assert_eq!(count.get(), 0);
        assert_eq!(scheduler.active(), 0);
    }
}

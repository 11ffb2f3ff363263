use std::time::Duration;

use futures::future::LocalBoxFuture;
use log::{debug, warn};
use yew::Callback;

use super::courier::{Courier, SendError};
use super::form::{ContactForm, ContactSnapshot, Field, SubmitDecision, ValidationErrors};
use crate::timer::Scheduler;

/// Drives a [`ContactForm`] through a [`Courier`] and owns the timer that
/// returns a settled status to idle.
///
/// The host awaits the future returned by [`submit`](Self::submit) and hands its
/// result to [`finish`](Self::finish); the reset timer fires `on_reset`, which
/// the host routes to [`reset_status`](Self::reset_status).
pub struct ContactFormController<S: Scheduler, C: Courier> {
    form: ContactForm,
    scheduler: S,
    courier: C,
    reset_after: Duration,
    on_reset: Callback<()>,
    reset_timer: Option<S::Handle>,
    disposed: bool,
}

impl<S: Scheduler, C: Courier> ContactFormController<S, C> {
    pub fn new(scheduler: S, courier: C, reset_after: Duration, on_reset: Callback<()>) -> Self {
        Self {
            form: ContactForm::new(),
            scheduler,
            courier,
            reset_after,
            on_reset,
            reset_timer: None,
            disposed: false,
        }
    }

    fn cancel_reset(&mut self) {
        if let Some(handle) = self.reset_timer.take() {
            self.scheduler.cancel(handle);
        }
    }

    pub fn set_field(&mut self, field: Field, value: String) {
        self.form.set_field(field, value);
    }

    pub fn validate(&self) -> ValidationErrors {
        self.form.validate()
    }

    /// Validate and, if clean, start a send of the values as they are now.
    ///
    /// Returns `None` when the form is invalid or a send is already in flight.
    pub fn submit(&mut self) -> Option<LocalBoxFuture<'static, Result<(), SendError>>> {
        if self.disposed {
            return None;
        }
        match self.form.submit() {
            SubmitDecision::Dispatch(message) => {
                self.cancel_reset();
                debug!("contact: dispatching message");
                Some(self.courier.deliver(message))
            }
            SubmitDecision::Invalid => None,
            SubmitDecision::InFlight => {
                debug!("contact: submit ignored, send in flight");
                None
            }
        }
    }

    pub fn finish(&mut self, outcome: Result<(), SendError>) {
        if self.disposed {
            return;
        }
        if let Err(e) = &outcome {
            warn!("contact: send failed: {}", e);
        }
        if !self.form.complete(outcome.is_ok()) {
            warn!("contact: send completed with no submission in flight");
            return;
        }
        debug!("contact: status {:?}", self.form.status());
        self.cancel_reset();
        self.reset_timer = Some(self.scheduler.after(self.reset_after, self.on_reset.clone()));
    }

    pub fn reset_status(&mut self) {
        self.reset_timer = None;
        if self.form.revert_status() {
            debug!("contact: status back to idle");
        }
    }

    pub fn dispose(&mut self) {
        self.disposed = true;
        self.cancel_reset();
    }

    pub fn snapshot(&self) -> ContactSnapshot {
        self.form.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use futures::executor::block_on;
    use futures::future::{self, FutureExt};

    use super::*;
    use crate::contact::form::{ContactMessage, SubmitStatus};
    use crate::timer::manual::{counter, ManualScheduler};

    const RESET: Duration = Duration::from_millis(5000);

    #[derive(Clone, Default)]
    struct FakeCourier {
        sent: Rc<RefCell<Vec<ContactMessage>>>,
        fail: bool,
    }

    impl Courier for FakeCourier {
        fn deliver(&self, message: ContactMessage) -> LocalBoxFuture<'static, Result<(), SendError>> {
            self.sent.borrow_mut().push(message);
            let outcome = if self.fail { Err(SendError::Unavailable) } else { Ok(()) };
            future::ready(outcome).boxed_local()
        }
    }

    struct Harness {
        controller: ContactFormController<ManualScheduler, FakeCourier>,
        scheduler: ManualScheduler,
        sent: Rc<RefCell<Vec<ContactMessage>>>,
        resets: Rc<std::cell::Cell<u32>>,
    }

    fn harness(fail: bool) -> Harness {
        let scheduler = ManualScheduler::new();
        let courier = FakeCourier { fail, ..FakeCourier::default() };
        let sent = courier.sent.clone();
        let (on_reset, resets) = counter();
        let controller = ContactFormController::new(scheduler.clone(), courier, RESET, on_reset);
        Harness { controller, scheduler, sent, resets }
    }

    fn fill_valid(controller: &mut ContactFormController<ManualScheduler, FakeCourier>) {
        controller.set_field(Field::Name, "Bob".into());
        controller.set_field(Field::Email, "bob@x.com".into());
        controller.set_field(Field::Subject, "Hi".into());
        controller.set_field(Field::Message, "This is long enough.".into());
    }

    #[test]
    fn successful_submission_resets_fields() {
        let mut h = harness(false);
        fill_valid(&mut h.controller);

        let send = h.controller.submit().expect("valid form dispatches");
        assert_eq!(h.controller.snapshot().status, SubmitStatus::Submitting);

        h.controller.finish(block_on(send));
        let snapshot = h.controller.snapshot();
        assert_eq!(snapshot.status, SubmitStatus::Success);
        assert_eq!(snapshot.fields, ContactMessage::default());
        assert_eq!(h.sent.borrow().len(), 1);
    }

    #[test]
    fn second_submit_while_sending_is_ignored() {
        let mut h = harness(false);
        fill_valid(&mut h.controller);

        let first = h.controller.submit();
        assert!(first.is_some());
        assert!(h.controller.submit().is_none());
        assert_eq!(h.controller.snapshot().status, SubmitStatus::Submitting);
        assert_eq!(h.sent.borrow().len(), 1);
    }

    #[test]
    fn invalid_form_sends_nothing() {
        let mut h = harness(false);
        h.controller.set_field(Field::Email, "bob@x".into());

        assert!(h.controller.submit().is_none());
        let snapshot = h.controller.snapshot();
        assert_eq!(snapshot.status, SubmitStatus::Idle);
        assert_eq!(snapshot.errors.len(), 4);
        assert_eq!(h.sent.borrow().len(), 0);
    }

    #[test]
    fn values_are_captured_at_submit_time() {
        let mut h = harness(false);
        fill_valid(&mut h.controller);
        let send = h.controller.submit().expect("dispatch");

        h.controller.set_field(Field::Name, "Changed".into());
        h.controller.finish(block_on(send));
        assert_eq!(h.controller.snapshot().status, SubmitStatus::Success);

        let sent = h.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].name, "Bob");
        assert_eq!(sent[0].email, "bob@x.com");
        assert_eq!(sent[0].message, "This is long enough.");
    }

    #[test]
    fn failure_is_form_level() {
        let mut h = harness(true);
        fill_valid(&mut h.controller);
        let send = h.controller.submit().expect("dispatch");
        h.controller.finish(block_on(send));

        let snapshot = h.controller.snapshot();
        assert_eq!(snapshot.status, SubmitStatus::Failure);
        assert!(snapshot.errors.is_empty());
        assert_eq!(snapshot.fields.name, "Bob");
    }

    #[test]
    fn status_reverts_once_after_delay() {
        let mut h = harness(false);
        fill_valid(&mut h.controller);
        let send = h.controller.submit().expect("dispatch");
        h.controller.finish(block_on(send));

        h.scheduler.advance(RESET - Duration::from_millis(1));
        assert_eq!(h.resets.get(), 0);
        h.scheduler.advance(Duration::from_millis(1));
        assert_eq!(h.resets.get(), 1);
        h.controller.reset_status();
        assert_eq!(h.controller.snapshot().status, SubmitStatus::Idle);

        h.scheduler.advance(RESET * 4);
        assert_eq!(h.resets.get(), 1);
        assert_eq!(h.scheduler.active(), 0);
    }

    #[test]
    fn resubmitting_cancels_pending_reset() {
        let mut h = harness(true);
        fill_valid(&mut h.controller);
        let send = h.controller.submit().expect("dispatch");
        h.controller.finish(block_on(send));
        assert_eq!(h.scheduler.active(), 1);

        let _retry = h.controller.submit().expect("retry dispatches");
        assert_eq!(h.scheduler.active(), 0);
        h.scheduler.advance(RESET * 2);
        assert_eq!(h.resets.get(), 0);
        assert_eq!(h.controller.snapshot().status, SubmitStatus::Submitting);
    }

    #[test]
    fn dispose_cancels_timer_and_ignores_late_completion() {
        let mut h = harness(false);
        fill_valid(&mut h.controller);
        let send = h.controller.submit().expect("dispatch");
        h.controller.dispose();

        h.controller.finish(block_on(send));
        assert_eq!(h.controller.snapshot().status, SubmitStatus::Submitting);
        assert_eq!(h.scheduler.active(), 0);
    }

    #[test]
    fn dispose_after_success_stops_reset() {
        let mut h = harness(false);
        fill_valid(&mut h.controller);
        let send = h.controller.submit().expect("dispatch");
        h.controller.finish(block_on(send));
        h.controller.dispose();

        h.scheduler.advance(RESET * 2);
        assert_eq!(h.resets.get(), 0);
    }

    #[test]
    fn stray_completion_is_ignored() {
        let mut h = harness(false);
        h.controller.finish(Ok(()));
        assert_eq!(h.controller.snapshot().status, SubmitStatus::Idle);
        assert_eq!(h.scheduler.active(), 0);
    }
}

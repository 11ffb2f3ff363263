//! Contact form: field rules, the send channel, and the controller tying them
//! to the status-reset timer.

pub mod controller;
pub mod courier;
pub mod form;

pub use controller::ContactFormController;
pub use courier::{SendError, SimulatedCourier};
pub use form::{ContactSnapshot, Field, SubmitStatus};

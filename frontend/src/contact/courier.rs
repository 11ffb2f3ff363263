use std::time::Duration;

use futures::future::LocalBoxFuture;
use gloo_timers::future::TimeoutFuture;
use log::{debug, info};
use thiserror::Error;

use super::form::ContactMessage;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SendError {
    #[error("delivery channel unavailable")]
    Unavailable,
    #[error("delivery channel rejected the message: {0}")]
    Rejected(String),
}

/// Delivery channel for validated contact messages.
pub trait Courier {
    fn deliver(&self, message: ContactMessage) -> LocalBoxFuture<'static, Result<(), SendError>>;
}

/// Stands in for a real channel: waits a fixed latency and always succeeds.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulatedCourier {
    latency: Duration,
}

impl SimulatedCourier {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

/// JSON body a real channel would post.
pub fn encode(message: &ContactMessage) -> Result<String, SendError> {
    serde_json::to_string(message).map_err(|e| SendError::Rejected(e.to_string()))
}

impl Courier for SimulatedCourier {
    fn deliver(&self, message: ContactMessage) -> LocalBoxFuture<'static, Result<(), SendError>> {
        let millis = u32::try_from(self.latency.as_millis()).unwrap_or(u32::MAX);
        Box::pin(async move {
            let payload = encode(&message)?;
            debug!("contact: simulated delivery of {}", payload);
            TimeoutFuture::new(millis).await;
            info!("contact: message from {} delivered", message.email);
            Ok::<(), SendError>(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_carries_every_field() {
        let message = ContactMessage {
            name: "Bob".into(),
            email: "bob@x.com".into(),
            subject: "Hi \"there\"".into(),
            message: "This is long enough.".into(),
        };
        let payload = encode(&message).unwrap();
        let value: serde_json::Value = serde_json::from_str(&payload).unwrap();
        assert_eq!(value["name"], "Bob");
        assert_eq!(value["email"], "bob@x.com");
        assert_eq!(value["subject"], "Hi \"there\"");
        assert_eq!(value["message"], "This is long enough.");
    }

    #[test]
    fn rejection_names_the_reason() {
        let err = SendError::Rejected("mailbox full".into());
        assert_eq!(err.to_string(), "delivery channel rejected the message: mailbox full");
    }
}

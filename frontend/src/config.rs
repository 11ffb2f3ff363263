use std::time::Duration;

use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose controller traces when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timings {
    /// Autoplay tick of the testimonial carousel.
    pub carousel_period: Duration,
    /// How long a success/failure banner stays before the form goes idle.
    pub status_reset: Duration,
    pub send_latency: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            carousel_period: Duration::from_millis(5000),
            status_reset: Duration::from_millis(5000),
            send_latency: Duration::from_millis(2000),
        }
    }
}

pub fn timings() -> Timings {
    Timings::default()
}

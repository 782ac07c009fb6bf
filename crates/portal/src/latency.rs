use std::future::Future;
use std::time::Duration;

/// Source of the artificial delay that stands in for network round trips.
///
/// A started pause always runs to completion; there is no cancellation.
pub trait Latency {
    fn pause(&self, duration: Duration) -> impl Future<Output = ()>;
}

/// Completes immediately. Used by tests and by synchronous refreshes.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLatency;

impl Latency for NoLatency {
    fn pause(&self, _duration: Duration) -> impl Future<Output = ()> {
        std::future::ready(())
    }
}

/// Timer-backed delay on the Tokio runtime.
#[cfg(feature = "native")]
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioLatency;

#[cfg(feature = "native")]
impl Latency for TokioLatency {
    fn pause(&self, duration: Duration) -> impl Future<Output = ()> {
        tokio::time::sleep(duration)
    }
}

impl<T: Latency + ?Sized> Latency for &T {
    fn pause(&self, duration: Duration) -> impl Future<Output = ()> {
        (**self).pause(duration)
    }
}

//! Blocking delay measured against a tick clock.

use embedded_hal::delay::DelayNs;

use crate::time::TimeSource;

/// Spins until a requested number of ticks has elapsed.
///
/// The wait is measured from the instant of the call: the clock is sampled
/// once on entry and then polled until the wrapped difference reaches the
/// requested count. It never returns early and cannot be cancelled; the
/// worst-case overshoot is one tick plus the polling latency.
///
/// Polling is a pure spin (`core::hint::spin_loop`). On hardware the tick
/// interrupt keeps firing underneath; on a hosted target the clock has to be
/// driven by another thread (see `Ticker` with the `std` feature).
pub struct BusyDelay<T: TimeSource> {
    time_source: T,
}

impl<T: TimeSource> BusyDelay<T> {
    /// Creates a delay reading from `time_source`.
    pub fn new(time_source: T) -> Self {
        Self { time_source }
    }

    /// Blocks until at least `ms` ticks have elapsed.
    pub fn wait_ms(&self, ms: u32) {
        let start = self.time_source.now();
        while self.time_source.now().elapsed_since(start) < ms {
            core::hint::spin_loop();
        }
    }

    /// Returns the underlying time source.
    pub fn time_source(&self) -> &T {
        &self.time_source
    }
}

// Sub-millisecond requests round up to whole ticks so the wait is never short.
impl<T: TimeSource> DelayNs for BusyDelay<T> {
    fn delay_ns(&mut self, ns: u32) {
        self.wait_ms(ns.div_ceil(1_000_000));
    }

    fn delay_us(&mut self, us: u32) {
        self.wait_ms(us.div_ceil(1_000));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.wait_ms(ms);
    }
}

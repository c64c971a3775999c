//! Millisecond clock advanced by a periodic tick source.
//!
//! [`TickClock`] holds the only state shared between the tick context (a
//! SysTick handler on hardware, a timer thread on a hosted target) and the
//! foreground loop. The tick context is the single writer; every other
//! context only reads, so a word-sized atomic is enough and no critical
//! section is taken on either side.

use core::sync::atomic::{AtomicU32, Ordering};

use crate::time::{Ticks, TimeSource};

/// Tick counter incremented once per timer period.
///
/// Usually placed in a `static` so the interrupt handler can reach it:
///
/// ```
/// use led_bounce::TickClock;
///
/// static CLOCK: TickClock = TickClock::new();
///
/// // from the 1 ms timer interrupt:
/// CLOCK.advance();
/// assert_eq!(CLOCK.now().as_millis(), 1);
/// ```
#[derive(Debug, Default)]
pub struct TickClock {
    ticks: AtomicU32,
}

impl TickClock {
    /// Creates a clock starting at tick zero.
    pub const fn new() -> Self {
        Self {
            ticks: AtomicU32::new(0),
        }
    }

    /// Creates a clock starting at an arbitrary tick count.
    pub const fn starting_at(ticks: u32) -> Self {
        Self {
            ticks: AtomicU32::new(ticks),
        }
    }

    /// Advances the clock by one tick, wrapping on overflow.
    ///
    /// Must only be called from the single tick context. Load and store are
    /// separate so this also works on cores without atomic read-modify-write
    /// (thumbv6m); that is sound only with one writer.
    #[inline]
    pub fn advance(&self) {
        let current = self.ticks.load(Ordering::Relaxed);
        self.ticks.store(current.wrapping_add(1), Ordering::Relaxed);
    }

    /// Returns the current tick count.
    #[inline]
    pub fn now(&self) -> Ticks {
        Ticks(self.ticks.load(Ordering::Relaxed))
    }
}

impl TimeSource for TickClock {
    fn now(&self) -> Ticks {
        TickClock::now(self)
    }
}

#[cfg(feature = "std")]
pub use hosted::Ticker;

#[cfg(feature = "std")]
mod hosted {
    use super::TickClock;
    use crate::TICK_HZ;

    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::thread::{self, JoinHandle};
    use std::time::{Duration, Instant};

    /// Hosted stand-in for the timer interrupt.
    ///
    /// Runs a background thread that advances a `'static` [`TickClock`] once
    /// per tick period. Deadlines are scheduled against [`Instant`], so a
    /// late wake-up is caught up with extra ticks instead of drifting.
    /// Dropping the ticker stops and joins the thread.
    pub struct Ticker {
        stop: Arc<AtomicBool>,
        handle: Option<JoinHandle<()>>,
    }

    impl Ticker {
        /// Starts ticking `clock` at [`TICK_HZ`].
        pub fn spawn(clock: &'static TickClock) -> std::io::Result<Self> {
            Self::with_period(clock, Duration::from_micros(1_000_000 / TICK_HZ as u64))
        }

        /// Starts ticking `clock` with a custom period.
        pub fn with_period(clock: &'static TickClock, period: Duration) -> std::io::Result<Self> {
            let stop = Arc::new(AtomicBool::new(false));
            let thread_stop = Arc::clone(&stop);

            let handle = thread::Builder::new()
                .name("tick".into())
                .spawn(move || {
                    let mut deadline = Instant::now() + period;
                    while !thread_stop.load(Ordering::Relaxed) {
                        let now = Instant::now();
                        if now < deadline {
                            thread::sleep(deadline - now);
                            continue;
                        }
                        clock.advance();
                        deadline += period;
                    }
                })?;

            Ok(Self {
                stop,
                handle: Some(handle),
            })
        }

        /// Stops the tick thread and waits for it to exit.
        pub fn stop(mut self) {
            self.shutdown();
        }

        fn shutdown(&mut self) {
            self.stop.store(true, Ordering::Relaxed);
            if let Some(handle) = self.handle.take() {
                let _ = handle.join();
            }
        }
    }

    impl Drop for Ticker {
        fn drop(&mut self) {
            self.shutdown();
        }
    }
}

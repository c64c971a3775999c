//! Time abstraction for tick-based timing.

/// A point in time measured in clock ticks (nominally milliseconds).
///
/// The underlying counter is 32 bits wide and wraps after ~49.7 days, so
/// instants must only be compared through [`Ticks::elapsed_since`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Ticks(pub u32);

impl Ticks {
    /// Zero instant (the clock value at startup).
    pub const ZERO: Self = Ticks(0);

    /// Returns the raw tick count.
    #[inline]
    pub const fn as_millis(&self) -> u32 {
        self.0
    }

    /// Ticks elapsed since an earlier instant.
    ///
    /// Uses wrapping subtraction, so the result stays correct across a
    /// counter overflow as long as less than `u32::MAX` ticks have passed.
    #[inline]
    pub const fn elapsed_since(&self, earlier: Ticks) -> u32 {
        self.0.wrapping_sub(earlier.0)
    }
}

/// Trait for abstracting time sources.
pub trait TimeSource {
    /// Returns the current time instant.
    fn now(&self) -> Ticks;
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn now(&self) -> Ticks {
        (**self).now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_since_handles_plain_difference() {
        assert_eq!(Ticks(250).elapsed_since(Ticks(50)), 200);
        assert_eq!(Ticks(7).elapsed_since(Ticks(7)), 0);
    }

    #[test]
    fn elapsed_since_survives_wraparound() {
        let before = Ticks(u32::MAX - 9);
        let after = Ticks(10);
        assert_eq!(after.elapsed_since(before), 20);
    }
}

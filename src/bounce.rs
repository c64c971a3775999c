//! Back-and-forth LED index stepping.
//!
//! [`BounceState`] walks an index across `N` LEDs and reverses at each end.
//! The reversal clamps back onto the boundary LED that was just lit, so each
//! endpoint is shown twice in a row:
//!
//! ```text
//! N = 4:  0 1 2 3 3 2 1 0 0 1 2 3 3 ...
//! ```

/// Sweep direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Towards higher indices.
    Forward,
    /// Towards lower indices.
    Backward,
}

impl Direction {
    /// Signed index increment for this direction.
    #[inline]
    pub const fn step(self) -> i32 {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }
}

/// Index and direction of the bounce sweep over `N` LEDs.
///
/// `N` must be between 1 and 32 (the width of the LED bitmask); other values
/// fail to compile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BounceState<const N: usize> {
    index: i32,
    direction: Direction,
}

impl<const N: usize> BounceState<N> {
    const VALID_COUNT: () = assert!(
        N >= 1 && N <= crate::MAX_LED_COUNT,
        "LED count must be between 1 and 32"
    );

    /// Creates the start state: one step before LED 0, moving forward.
    pub const fn new() -> Self {
        let () = Self::VALID_COUNT;
        Self {
            index: -1,
            direction: Direction::Forward,
        }
    }

    /// Moves one step and returns the LED index to light.
    ///
    /// The returned index is always in `0..N`.
    pub fn advance(&mut self) -> usize {
        let last = N as i32 - 1;
        self.index += self.direction.step();

        if self.index > last {
            self.direction = Direction::Backward;
            self.index = last;
        } else if self.index < 0 {
            self.direction = Direction::Forward;
            self.index = 0;
        }

        self.index as usize
    }

    /// Index of the LED lit by the last [`advance`](Self::advance), if any.
    pub fn current(&self) -> Option<usize> {
        usize::try_from(self.index).ok()
    }

    /// Direction the next step will take.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Mask with one bit set for each of the `N` LEDs.
    pub const fn all_mask() -> u32 {
        let () = Self::VALID_COUNT;
        u32::MAX >> (u32::BITS - N as u32)
    }
}

impl<const N: usize> Default for BounceState<N> {
    fn default() -> Self {
        Self::new()
    }
}

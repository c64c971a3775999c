#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`TickClock`**: Millisecond counter advanced once per timer interrupt
//! - **`BusyDelay`**: Spins until a number of ticks has elapsed on a `TimeSource`
//! - **`BounceState`**: Index and direction of the back-and-forth LED sweep
//! - **`Animator`**: Runs the sweep, or flashes all LEDs while a button is held
//! - **`LedBank`**: Trait to implement for your LED hardware
//! - **`ButtonBank`**: Trait to implement for your button hardware
//! - **`TimeSource`**: Trait to implement for your timing system
//!
//! `PinLeds` and `PinButtons` implement the hardware traits for arrays of
//! `embedded-hal` pins, so most boards only need to hand over their pins and
//! call `TickClock::advance` from a 1 ms timer interrupt.

pub mod animator;
pub mod bounce;
pub mod clock;
pub mod delay;
pub mod gpio;
pub mod time;

pub use animator::{Animator, Mode};
pub use bounce::{BounceState, Direction};
#[cfg(feature = "std")]
pub use clock::Ticker;
pub use clock::TickClock;
pub use delay::BusyDelay;
pub use gpio::{ButtonBank, LedBank, PinButtons, PinLeds};
pub use time::{Ticks, TimeSource};

/// Time each LED, or the whole bank in flash mode, stays lit.
pub const STEP_DELAY_MS: u32 = 200;

/// Tick rate the clock is expected to be advanced at.
pub const TICK_HZ: u32 = 1_000;

/// Largest LED count a bank can have (width of the LED bitmask).
pub const MAX_LED_COUNT: usize = u32::BITS as usize;

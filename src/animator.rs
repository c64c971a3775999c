//! Button-gated LED animation loop.
//!
//! Provides [`Animator`], which owns the LEDs, the buttons and a delay, and
//! runs one of two modes on every iteration depending on the button
//! snapshot taken at the start of that iteration.

use crate::STEP_DELAY_MS;
use crate::bounce::BounceState;
use crate::delay::BusyDelay;
use crate::gpio::{ButtonBank, LedBank};
use crate::time::TimeSource;

/// What an animation iteration does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// No button held. One LED lit, bouncing across the bank.
    Sequencing,
    /// At least one button held. All LEDs flash together.
    AllFlash,
}

impl Mode {
    /// Selects the mode for a button snapshot.
    #[inline]
    pub fn from_buttons(pressed: u32) -> Self {
        if pressed == 0 {
            Mode::Sequencing
        } else {
            Mode::AllFlash
        }
    }
}

/// Drives `N` LEDs through the bounce animation, or flashes them all while
/// any button is held.
///
/// The mode is re-evaluated on every iteration without latching. Switching
/// to [`Mode::AllFlash`] leaves the bounce position untouched, so the sweep
/// resumes where it stopped once the buttons are released.
///
/// # Type Parameters
/// * `L` - LED bank implementation
/// * `B` - Button bank implementation
/// * `T` - Time source backing the delay
/// * `N` - Number of LEDs in the sweep (1 to 32)
pub struct Animator<L: LedBank, B: ButtonBank, T: TimeSource, const N: usize> {
    leds: L,
    buttons: B,
    delay: BusyDelay<T>,
    bounce: BounceState<N>,
    mode: Option<Mode>,
    step_delay_ms: u32,
}

impl<L: LedBank, B: ButtonBank, T: TimeSource, const N: usize> Animator<L, B, T, N> {
    /// Initializes the LEDs and buttons and creates an animator at the
    /// start of the sweep, pacing steps by [`STEP_DELAY_MS`].
    pub fn new(mut leds: L, mut buttons: B, time_source: T) -> Self {
        leds.init();
        buttons.init();

        Self {
            leds,
            buttons,
            delay: BusyDelay::new(time_source),
            bounce: BounceState::new(),
            mode: None,
            step_delay_ms: STEP_DELAY_MS,
        }
    }

    /// Replaces the time each LED (or the flash group) stays lit.
    pub fn with_step_delay(mut self, ms: u32) -> Self {
        self.step_delay_ms = ms;
        self
    }

    /// Runs one iteration and returns the mode it ran in.
    ///
    /// Blocks for the step delay while the LED (or the whole bank) is lit,
    /// then turns it off again and returns without a further off-time.
    pub fn run_once(&mut self) -> Mode {
        let pressed = self.buttons.read();
        let mode = Mode::from_buttons(pressed);

        if self.mode != Some(mode) {
            #[cfg(feature = "defmt")]
            defmt::debug!("mode {} (buttons {=u32:#b})", mode, pressed);
            self.mode = Some(mode);
        }

        match mode {
            Mode::Sequencing => {
                let index = self.bounce.advance();
                self.leds.on(index);
                self.delay.wait_ms(self.step_delay_ms);
                self.leds.off(index);
            }
            Mode::AllFlash => {
                self.leds.set_all(BounceState::<N>::all_mask());
                self.delay.wait_ms(self.step_delay_ms);
                self.leds.set_all(0);
            }
        }

        mode
    }

    /// Runs the animation forever.
    pub fn run(&mut self) -> ! {
        loop {
            self.run_once();
        }
    }

    /// Mode of the most recent iteration, `None` before the first one.
    pub fn mode(&self) -> Option<Mode> {
        self.mode
    }

    /// Current sweep position.
    pub fn bounce(&self) -> &BounceState<N> {
        &self.bounce
    }

    /// Time each step stays lit, in milliseconds.
    pub fn step_delay_ms(&self) -> u32 {
        self.step_delay_ms
    }

    /// Returns a reference to the LED bank.
    pub fn leds(&self) -> &L {
        &self.leds
    }

    /// Returns the LED and button banks.
    pub fn into_parts(self) -> (L, B) {
        (self.leds, self.buttons)
    }
}

//! LED and button hardware abstraction.
//!
//! The animation only needs logical operations: switch LED `i`, drive all
//! LEDs from a bitmask, and read a pressed-buttons bitmask. [`LedBank`] and
//! [`ButtonBank`] describe that contract; [`PinLeds`] and [`PinButtons`]
//! implement it for arrays of `embedded-hal` pins.

use embedded_hal::digital::{InputPin, OutputPin, PinState};

/// Trait for abstracting a bank of on/off LEDs.
///
/// Implement this for your LED hardware (GPIO port writes, shift register,
/// I/O expander, etc.). Handle any hardware errors internally - these
/// methods cannot fail.
pub trait LedBank {
    /// Configures the hardware so every LED can be driven.
    ///
    /// Called once at startup, but must be safe to call again.
    fn init(&mut self);

    /// Turns LED `index` on. Out-of-range indices are ignored.
    fn on(&mut self, index: usize);

    /// Turns LED `index` off. Out-of-range indices are ignored.
    fn off(&mut self, index: usize);

    /// Drives every LED from the matching bit of `mask` (bit 0 = LED 0).
    fn set_all(&mut self, mask: u32);
}

/// Trait for abstracting a set of push-buttons.
pub trait ButtonBank {
    /// Configures the hardware for reading. Must be safe to call again.
    fn init(&mut self);

    /// Returns a snapshot where a set bit means "pressed" (bit 0 = button 0).
    ///
    /// Implementations translate any active-low wiring into this positive
    /// logic; `0` means no button is pressed.
    fn read(&mut self) -> u32;
}

/// [`LedBank`] over an array of output pins.
///
/// Pin `i` of the array is LED `i`. Works with any HAL whose pins implement
/// `embedded_hal::digital::OutputPin`; use the HAL's type-erased pin type to
/// fit differently numbered pins into one array.
pub struct PinLeds<P: OutputPin, const N: usize> {
    pins: [P; N],
    active_high: bool,
}

impl<P: OutputPin, const N: usize> PinLeds<P, N> {
    /// LEDs that light when their pin is driven high.
    pub fn active_high(pins: [P; N]) -> Self {
        Self {
            pins,
            active_high: true,
        }
    }

    /// LEDs that light when their pin is driven low (wired to the supply rail).
    pub fn active_low(pins: [P; N]) -> Self {
        Self {
            pins,
            active_high: false,
        }
    }

    /// Releases the pins.
    pub fn into_pins(self) -> [P; N] {
        self.pins
    }

    fn drive(&mut self, index: usize, lit: bool) {
        let state = PinState::from(lit == self.active_high);
        if let Some(pin) = self.pins.get_mut(index) {
            let _ = pin.set_state(state);
        }
    }
}

impl<P: OutputPin, const N: usize> LedBank for PinLeds<P, N> {
    fn init(&mut self) {
        // Output mode is fixed by the pin type; only the level needs a known start.
        self.set_all(0);
    }

    fn on(&mut self, index: usize) {
        self.drive(index, true);
    }

    fn off(&mut self, index: usize) {
        self.drive(index, false);
    }

    fn set_all(&mut self, mask: u32) {
        for index in 0..N.min(u32::BITS as usize) {
            self.drive(index, (mask >> index) & 1 == 1);
        }
    }
}

/// [`ButtonBank`] over an array of input pins.
///
/// Pin `i` of the array reports in bit `i`. A pin that fails to read counts
/// as released.
pub struct PinButtons<P: InputPin, const M: usize> {
    pins: [P; M],
    active_low: bool,
}

impl<P: InputPin, const M: usize> PinButtons<P, M> {
    /// Buttons that pull their pin low when pressed (internal pull-up).
    pub fn active_low(pins: [P; M]) -> Self {
        Self {
            pins,
            active_low: true,
        }
    }

    /// Buttons that pull their pin high when pressed (pull-down).
    pub fn active_high(pins: [P; M]) -> Self {
        Self {
            pins,
            active_low: false,
        }
    }

    /// Releases the pins.
    pub fn into_pins(self) -> [P; M] {
        self.pins
    }
}

impl<P: InputPin, const M: usize> ButtonBank for PinButtons<P, M> {
    fn init(&mut self) {}

    fn read(&mut self) -> u32 {
        let active_low = self.active_low;
        self.pins
            .iter_mut()
            .take(u32::BITS as usize)
            .enumerate()
            .fold(0, |mask, (index, pin)| {
                let pressed = if active_low {
                    pin.is_low()
                } else {
                    pin.is_high()
                };
                if pressed.unwrap_or(false) {
                    mask | (1 << index)
                } else {
                    mask
                }
            })
    }
}

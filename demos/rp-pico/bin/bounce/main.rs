#![no_std]
#![no_main]

use cortex_m::peripheral::SYST;
use cortex_m::peripheral::syst::SystClkSource;
use panic_halt as _;
use rp_pico::entry;
use rp_pico::hal::gpio::{DynPinId, FunctionSioInput, FunctionSioOutput, Pin, PullDown, PullUp};
use rp_pico::hal::{Clock, Sio, clocks::init_clocks_and_plls, pac, watchdog::Watchdog};
use rtt_target::{rprintln, rtt_init_print};

use led_bounce::{Animator, PinButtons, PinLeds, STEP_DELAY_MS, TICK_HZ, TickClock};

/// Number of LEDs in the sweep (GP2..GP5)
pub const LED_COUNT: usize = 4;

type LedPin = Pin<DynPinId, FunctionSioOutput, PullDown>;
type ButtonPin = Pin<DynPinId, FunctionSioInput, PullUp>;

/// Millisecond clock advanced by SysTick
static CLOCK: TickClock = TickClock::new();

/// SysTick interrupt handler - called every 1ms
#[cortex_m_rt::exception]
fn SysTick() {
    CLOCK.advance();
}

/// Configure SysTick timer for 1ms interrupts
fn configure_systick(syst: &mut SYST, sysclk_hz: u32) {
    syst.set_clock_source(SystClkSource::Core);
    syst.set_reload(sysclk_hz / TICK_HZ - 1);
    syst.clear_current();
    syst.enable_counter();
    syst.enable_interrupt();

    rprintln!("SysTick configured for {} Hz ticks", TICK_HZ);
}

#[entry]
fn main() -> ! {
    rtt_init_print!();
    rprintln!("=== LED Bounce Example ===");

    let mut pac = pac::Peripherals::take().unwrap();
    let mut core = pac::CorePeripherals::take().unwrap();

    let mut watchdog = Watchdog::new(pac.WATCHDOG);

    // Configure clocks (125 MHz)
    let clocks = init_clocks_and_plls(
        rp_pico::XOSC_CRYSTAL_FREQ,
        pac.XOSC,
        pac.CLOCKS,
        pac.PLL_SYS,
        pac.PLL_USB,
        &mut pac.RESETS,
        &mut watchdog,
    )
    .ok()
    .unwrap();

    let sio = Sio::new(pac.SIO);
    let pins = rp_pico::Pins::new(
        pac.IO_BANK0,
        pac.PADS_BANK0,
        sio.gpio_bank0,
        &mut pac.RESETS,
    );

    let led_pins: [LedPin; LED_COUNT] = [
        pins.gpio2.into_push_pull_output().into_dyn_pin(),
        pins.gpio3.into_push_pull_output().into_dyn_pin(),
        pins.gpio4.into_push_pull_output().into_dyn_pin(),
        pins.gpio5.into_push_pull_output().into_dyn_pin(),
    ];

    // Push-buttons to ground, read through the internal pull-ups
    let button_pins: [ButtonPin; 2] = [
        pins.gpio14.into_pull_up_input().into_dyn_pin(),
        pins.gpio15.into_pull_up_input().into_dyn_pin(),
    ];

    configure_systick(&mut core.SYST, clocks.system_clock.freq().to_Hz());

    let mut animator: Animator<_, _, _, LED_COUNT> = Animator::new(
        PinLeds::active_high(led_pins),
        PinButtons::active_low(button_pins),
        &CLOCK,
    );

    rprintln!("=== System Ready ===");
    rprintln!("Bouncing across {} LEDs every {} ms", LED_COUNT, STEP_DELAY_MS);
    rprintln!("Hold GP14 or GP15 to flash all LEDs");

    animator.run()
}

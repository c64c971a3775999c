//! Shared test infrastructure for led-bounce integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::Cell;
use led_bounce::{ButtonBank, LedBank, Ticks, TimeSource};

// ============================================================================
// Mock Time Source
// ============================================================================

/// Simulated tick clock that advances one tick every time it is read.
///
/// Stands in for the timer interrupt: a busy-wait polling it sees the counter
/// move exactly once per poll.
pub struct StepTimeSource {
    current: Cell<u32>,
    last_read: Cell<u32>,
}

impl StepTimeSource {
    pub fn new() -> Self {
        Self::starting_at(0)
    }

    pub fn starting_at(ticks: u32) -> Self {
        Self {
            current: Cell::new(ticks),
            last_read: Cell::new(ticks),
        }
    }

    /// Current counter value, without advancing it
    pub fn peek(&self) -> u32 {
        self.current.get()
    }

    /// Value handed out by the most recent `now()` call
    pub fn last_read(&self) -> u32 {
        self.last_read.get()
    }
}

impl TimeSource for StepTimeSource {
    fn now(&self) -> Ticks {
        let current = self.current.get();
        self.last_read.set(current);
        self.current.set(current.wrapping_add(1));
        Ticks(current)
    }
}

/// Clock that only moves every `period` reads, like a slow tick seen by a
/// fast polling loop.
pub struct SlowTimeSource {
    current: Cell<u32>,
    reads: Cell<u32>,
    period: u32,
}

impl SlowTimeSource {
    pub fn new(period: u32) -> Self {
        Self {
            current: Cell::new(0),
            reads: Cell::new(0),
            period,
        }
    }

    pub fn peek(&self) -> u32 {
        self.current.get()
    }
}

impl TimeSource for SlowTimeSource {
    fn now(&self) -> Ticks {
        let reads = self.reads.get() + 1;
        self.reads.set(reads);
        if reads % self.period == 0 {
            self.current.set(self.current.get().wrapping_add(1));
        }
        Ticks(self.current.get())
    }
}

// ============================================================================
// Mock LEDs
// ============================================================================

/// One call made to the LED bank
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedEvent {
    Init,
    On(usize),
    Off(usize),
    SetAll(u32),
}

/// Mock LED bank that records every call with the tick it happened at
pub struct MockLeds<'a> {
    clock: &'a StepTimeSource,
    lit: u32,
    events: heapless::Vec<(LedEvent, u32), 256>,
}

impl<'a> MockLeds<'a> {
    pub fn new(clock: &'a StepTimeSource) -> Self {
        Self {
            clock,
            lit: 0,
            events: heapless::Vec::new(),
        }
    }

    /// Bitmask of the LEDs currently lit
    pub fn lit(&self) -> u32 {
        self.lit
    }

    pub fn events(&self) -> impl Iterator<Item = LedEvent> + '_ {
        self.events.iter().map(|(event, _)| *event)
    }

    pub fn timed_events(&self) -> &[(LedEvent, u32)] {
        &self.events
    }

    /// Indices passed to `on`, in call order
    pub fn lit_sequence(&self) -> Vec<usize> {
        self.events()
            .filter_map(|event| match event {
                LedEvent::On(index) => Some(index),
                _ => None,
            })
            .collect()
    }

    pub fn clear_events(&mut self) {
        self.events.clear();
    }

    fn record(&mut self, event: LedEvent) {
        let _ = self.events.push((event, self.clock.peek()));
    }
}

impl LedBank for MockLeds<'_> {
    fn init(&mut self) {
        self.lit = 0;
        self.record(LedEvent::Init);
    }

    fn on(&mut self, index: usize) {
        if index < 32 {
            self.lit |= 1 << index;
        }
        self.record(LedEvent::On(index));
    }

    fn off(&mut self, index: usize) {
        if index < 32 {
            self.lit &= !(1 << index);
        }
        self.record(LedEvent::Off(index));
    }

    fn set_all(&mut self, mask: u32) {
        self.lit = mask;
        self.record(LedEvent::SetAll(mask));
    }
}

// ============================================================================
// Mock Buttons
// ============================================================================

/// Buttons that replay a fixed script of snapshots, then report `idle`
pub struct ScriptedButtons {
    script: &'static [u32],
    position: usize,
    idle: u32,
    inits: u32,
}

impl ScriptedButtons {
    pub fn new(script: &'static [u32]) -> Self {
        Self {
            script,
            position: 0,
            idle: 0,
            inits: 0,
        }
    }

    /// Buttons that always report `snapshot`
    pub fn held(snapshot: u32) -> Self {
        Self {
            script: &[],
            position: 0,
            idle: snapshot,
            inits: 0,
        }
    }

    pub fn inits(&self) -> u32 {
        self.inits
    }
}

impl ButtonBank for ScriptedButtons {
    fn init(&mut self) {
        self.inits += 1;
    }

    fn read(&mut self) -> u32 {
        let snapshot = self.script.get(self.position).copied().unwrap_or(self.idle);
        self.position += 1;
        snapshot
    }
}

//! Shared test infrastructure for glowing-ball integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::Cell;
use core::convert::Infallible;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, OutputPin};
use glowing_ball::{PixelWire, Rgbw};

// ============================================================================
// Recording Wire
// ============================================================================

/// Something that happened on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireEvent {
    Configure,
    Byte(u8),
    Latch,
}

/// Mock wire that records every byte and latch
pub struct RecordingWire {
    events: heapless::Vec<WireEvent, 4096>,
}

impl RecordingWire {
    pub fn new() -> Self {
        Self {
            events: heapless::Vec::new(),
        }
    }

    pub fn events(&self) -> &[WireEvent] {
        &self.events
    }

    pub fn bytes(&self) -> Vec<u8> {
        self.events
            .iter()
            .filter_map(|event| match event {
                WireEvent::Byte(byte) => Some(*byte),
                _ => None,
            })
            .collect()
    }

    pub fn latch_count(&self) -> usize {
        self.events
            .iter()
            .filter(|event| **event == WireEvent::Latch)
            .count()
    }

    /// Pixels sent before each latch, decoded from green-red-blue-white bytes
    pub fn frames(&self) -> Vec<Vec<Rgbw>> {
        let mut frames = Vec::new();
        let mut bytes = Vec::new();
        for event in &self.events {
            match event {
                WireEvent::Byte(byte) => bytes.push(*byte),
                WireEvent::Latch => {
                    frames.push(decode_pixels(&bytes));
                    bytes.clear();
                }
                WireEvent::Configure => {}
            }
        }
        frames
    }

    fn record(&mut self, event: WireEvent) {
        self.events.push(event).expect("wire history full");
    }
}

impl PixelWire for RecordingWire {
    fn configure_output(&mut self) {
        self.record(WireEvent::Configure);
    }

    fn send_byte(&mut self, byte: u8) {
        self.record(WireEvent::Byte(byte));
    }

    fn latch(&mut self) {
        self.record(WireEvent::Latch);
    }
}

/// Decodes wire-order bytes into colors
pub fn decode_pixels(bytes: &[u8]) -> Vec<Rgbw> {
    assert_eq!(bytes.len() % 4, 0, "partial pixel on the wire");
    bytes
        .chunks_exact(4)
        .map(|grbw| Rgbw::new(grbw[1], grbw[0], grbw[2], grbw[3]))
        .collect()
}

// ============================================================================
// Virtual Clock, Pin and Delay
// ============================================================================

/// Simulated time in nanoseconds, shared by pin and delay
pub type Clock = Cell<u64>;

/// A level change on the data pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub at_ns: u64,
    pub high: bool,
}

/// Mock output pin that timestamps every write against the virtual clock
pub struct MockPin<'a> {
    clock: &'a Clock,
    edges: heapless::Vec<Edge, 2048>,
}

impl<'a> MockPin<'a> {
    pub fn new(clock: &'a Clock) -> Self {
        Self {
            clock,
            edges: heapless::Vec::new(),
        }
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    fn record(&mut self, high: bool) {
        let edge = Edge {
            at_ns: self.clock.get(),
            high,
        };
        self.edges.push(edge).expect("pin history full");
    }
}

impl ErrorType for MockPin<'_> {
    type Error = Infallible;
}

impl OutputPin for MockPin<'_> {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.record(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.record(true);
        Ok(())
    }
}

/// Mock delay that advances the virtual clock and logs millisecond waits
pub struct MockDelay<'a> {
    clock: &'a Clock,
    millis: heapless::Vec<u32, 64>,
}

impl<'a> MockDelay<'a> {
    pub fn new(clock: &'a Clock) -> Self {
        Self {
            clock,
            millis: heapless::Vec::new(),
        }
    }

    /// Millisecond waits, oldest first (the first 64 only)
    pub fn millis(&self) -> &[u32] {
        &self.millis
    }

    fn advance(&self, ns: u64) {
        self.clock.set(self.clock.get() + ns);
    }
}

impl DelayNs for MockDelay<'_> {
    fn delay_ns(&mut self, ns: u32) {
        self.advance(u64::from(ns));
    }

    fn delay_us(&mut self, us: u32) {
        self.advance(u64::from(us) * 1_000);
    }

    fn delay_ms(&mut self, ms: u32) {
        let _ = self.millis.push(ms);
        self.advance(u64::from(ms) * 1_000_000);
    }
}

/// One decoded bit: its value, high time and (if followed by another bit) period
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedBit {
    pub one: bool,
    pub high_ns: u64,
    pub period_ns: Option<u64>,
}

/// Turns recorded pin edges back into bits.
///
/// A bit is a rising edge followed by a falling edge; repeated lows (idle,
/// latch) are ignored. High times above `threshold_ns` decode as `1`.
pub fn decode_bits(edges: &[Edge], threshold_ns: u64) -> Vec<DecodedBit> {
    let mut rises = Vec::new();
    let mut highs = Vec::new();
    let mut level = false;
    let mut rise_at = 0;

    for edge in edges {
        match (level, edge.high) {
            (false, true) => {
                rise_at = edge.at_ns;
                rises.push(edge.at_ns);
            }
            (true, false) => highs.push(edge.at_ns - rise_at),
            _ => {}
        }
        level = edge.high;
    }

    highs
        .iter()
        .enumerate()
        .map(|(i, high_ns)| DecodedBit {
            one: *high_ns > threshold_ns,
            high_ns: *high_ns,
            period_ns: rises.get(i + 1).map(|next| next - rises[i]),
        })
        .collect()
}

/// Packs decoded bits, most-significant first, into bytes
pub fn bits_to_bytes(bits: &[DecodedBit]) -> Vec<u8> {
    assert_eq!(bits.len() % 8, 0, "partial byte on the wire");
    bits.chunks_exact(8)
        .map(|byte| {
            byte.iter()
                .fold(0u8, |acc, bit| (acc << 1) | u8::from(bit.one))
        })
        .collect()
}

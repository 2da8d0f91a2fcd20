//! The sample-and-report loop body.
//!
//! [`Sampler::poll`] is meant to be called back-to-back forever. Each call
//! either does nothing (the gate isn't due yet) or takes exactly one sample,
//! converts it and writes one report record. Time, the sensor and the output
//! are passed in, so the whole thing runs against fakes in tests.

use ufmt::uWrite;

use super::conversion::{raw_to_voltage, voltage_to_celsius, RawSample};
use super::formatting::write_celsius_report;
use super::gate::IntervalGate;
use crate::config::SAMPLE_INTERVAL_MS;

/// Milliseconds since boot, wrapping at `u32::MAX`
pub trait Clock {
    fn millis(&self) -> u32;
}

/// One analog channel. Whatever the hardware returns is taken as-is.
pub trait AnalogInput {
    type Error;

    fn read_raw(&mut self) -> Result<RawSample, Self::Error>;
}

/// Everything a firing pass produced, handed back for logging
#[derive(Debug, Clone, Copy, PartialEq, defmt::Format)]
pub struct Reading {
    pub timestamp_ms: u32,
    pub raw: RawSample,
    pub voltage: f32,
    pub celsius: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, defmt::Format)]
pub enum Poll {
    /// Gate not due, nothing happened
    Waiting,
    Sampled(Reading),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleError<S, W> {
    Sensor(S),
    Serial(W),
}

// HAL error types rarely implement `Format`, so don't require it
impl<S, W> defmt::Format for SampleError<S, W> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            SampleError::Sensor(_) => defmt::write!(f, "sensor read failed"),
            SampleError::Serial(_) => defmt::write!(f, "serial write failed"),
        }
    }
}

pub struct Sampler {
    gate: IntervalGate,
}

impl Sampler {
    pub const fn new() -> Self {
        Sampler {
            gate: IntervalGate::new(SAMPLE_INTERVAL_MS),
        }
    }

    /// Timestamp of the last sample, 0 before the first one
    pub fn last_sample_ms(&self) -> u32 {
        self.gate.last_ms()
    }

    pub fn poll<C, A, W>(
        &mut self,
        clock: &C,
        sensor: &mut A,
        output: &mut W,
    ) -> Result<Poll, SampleError<A::Error, W::Error>>
    where
        C: Clock + ?Sized,
        A: AnalogInput + ?Sized,
        W: uWrite + ?Sized,
    {
        let now = clock.millis();
        // The marker moves before the read, so a failing read is not retried
        // until the next interval
        if !self.gate.try_fire(now) {
            return Ok(Poll::Waiting);
        }

        let raw = sensor.read_raw().map_err(SampleError::Sensor)?;
        let voltage = raw_to_voltage(raw);
        let celsius = voltage_to_celsius(voltage);
        write_celsius_report(output, celsius).map_err(SampleError::Serial)?;

        Ok(Poll::Sampled(Reading {
            timestamp_ms: now,
            raw,
            voltage,
            celsius,
        }))
    }
}

impl Default for Sampler {
    fn default() -> Self {
        Self::new()
    }
}

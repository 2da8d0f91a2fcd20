//! Compile-time settings. Nothing here can be changed at runtime.

use nrf52840_hal::uarte::Baudrate;

/// Minimum gap between two samples
pub const SAMPLE_INTERVAL_MS: u32 = 10_000;

/// Line rate of the report link
pub const BAUD_RATE: Baudrate = Baudrate::BAUD9600;

/// HFCLK driven core clock, SysTick counts at this rate
pub const CORE_CLOCK_HZ: u32 = 64_000_000;

/// Voltage the conversion assumes for a full-scale reading. The sensor is
/// wired for a 5 V reference, whatever the SAADC actually measures against.
pub const ADC_FULL_SCALE_V: f32 = 5.0;

/// Largest 10-bit conversion result
pub const ADC_MAX: u16 = 1023;

/// How many readings `hello-adc` logs before exiting
pub const DIAGNOSTIC_SAMPLES: u32 = 16;

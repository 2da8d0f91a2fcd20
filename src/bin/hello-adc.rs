#![no_main]
#![no_std]

use embedded_hal::blocking::delay::DelayMs;
use nrf52840_hal::{
    self as hal,
    gpio::p0::Parts as P0Parts,
    saadc::{Gain, Reference, Resolution, Saadc, SaadcConfig},
    Timer,
};

use tmp36_logger::{
    self as _, // global logger + panicking-behavior + memory layout
    config::DIAGNOSTIC_SAMPLES,
    logic::{
        conversion::{raw_to_voltage, voltage_to_celsius},
        formatting::format_celsius_report,
        sampler::AnalogInput,
    },
    peripherals::AnalogSensor,
};

#[cortex_m_rt::entry]
fn main() -> ! {
    defmt::println!("Hello, ADC!");

    let board = hal::pac::Peripherals::take().unwrap();
    let pins_0 = P0Parts::new(board.P0);
    let mut timer = Timer::new(board.TIMER0);

    let saadc_config = SaadcConfig {
        resolution: Resolution::_10BIT,
        reference: Reference::VDD1_4,
        gain: Gain::GAIN1_4,
        ..SaadcConfig::default()
    };
    let saadc = Saadc::new(board.SAADC, saadc_config);
    let mut sensor = AnalogSensor::new(saadc, pins_0.p0_02.into_floating_input());

    for i in 0..DIAGNOSTIC_SAMPLES {
        match sensor.read_raw() {
            Ok(raw) => {
                let voltage = raw_to_voltage(raw);
                let celsius = voltage_to_celsius(voltage);
                let report = format_celsius_report(celsius);
                defmt::info!(
                    "#{=u32} raw: {=u16}, {=f32} V -> {=str}",
                    i,
                    raw,
                    voltage,
                    report.as_str()
                );
            }
            Err(_) => defmt::error!("#{=u32} SAADC read failed", i),
        }
        timer.delay_ms(1000u32);
    }

    tmp36_logger::exit()
}

#![no_main]
#![no_std]

use nrf52840_hal::{
    self as hal,
    gpio::{p0::Parts as P0Parts, Level},
    saadc::{Gain, Reference, Resolution, Saadc, SaadcConfig},
    uarte::{self, Parity, Uarte},
};

use tmp36_logger::{
    self as _, // global logger + panicking-behavior + memory layout
    config::{BAUD_RATE, CORE_CLOCK_HZ, SAMPLE_INTERVAL_MS},
    logic::sampler::{Poll, Sampler},
    peripherals::{AnalogSensor, SerialReport, SysTickClock},
};

#[cortex_m_rt::entry]
fn main() -> ! {
    defmt::println!("tmp36-logger starting");

    let board = hal::pac::Peripherals::take().unwrap();
    let core_peripherals = hal::pac::CorePeripherals::take().unwrap();
    let pins_0 = P0Parts::new(board.P0);

    // VDD/4 reference with 1/4 gain puts full scale at VDD
    let saadc_config = SaadcConfig {
        resolution: Resolution::_10BIT,
        reference: Reference::VDD1_4,
        gain: Gain::GAIN1_4,
        ..SaadcConfig::default()
    };
    let saadc = Saadc::new(board.SAADC, saadc_config);
    // AIN0
    let mut sensor = AnalogSensor::new(saadc, pins_0.p0_02.into_floating_input());
    defmt::debug!("SAADC ready on AIN0");

    // P0.06/P0.08 are routed to the interface MCU's virtual COM port on the DK
    let uarte_pins = uarte::Pins {
        txd: pins_0.p0_06.into_push_pull_output(Level::High).degrade(),
        rxd: pins_0.p0_08.into_floating_input().degrade(),
        cts: None,
        rts: None,
    };
    let mut serial = SerialReport::new(Uarte::new(
        board.UARTE0,
        uarte_pins,
        Parity::EXCLUDED,
        BAUD_RATE,
    ));
    defmt::debug!("UARTE0 ready");

    let clock = SysTickClock::start(core_peripherals.SYST, CORE_CLOCK_HZ);
    let mut sampler = Sampler::new();

    defmt::info!("Sampling every {=u32} ms", SAMPLE_INTERVAL_MS);
    loop {
        match sampler.poll(&clock, &mut sensor, &mut serial) {
            Ok(Poll::Sampled(reading)) => defmt::info!("{}", reading),
            Ok(Poll::Waiting) => {}
            Err(e) => defmt::error!("{} at {=u32} ms", e, sampler.last_sample_ms()),
        }
        // SysTick wakes us up every millisecond
        cortex_m::asm::wfi();
    }
}

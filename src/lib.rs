#![no_main]
#![no_std]

pub mod config;
pub mod logic;
pub mod peripherals;

use defmt_rtt as _; // global logger

use nrf52840_hal as _; // memory layout

use panic_probe as _;

// same panicking *behavior* as `panic-probe` but doesn't print a panic message
// this prevents the panic message being printed *twice* when `defmt::panic` is invoked
#[defmt::panic_handler]
fn panic() -> ! {
    cortex_m::asm::udf()
}

/// Terminates the application and makes `probe-run` exit with exit-code = 0
pub fn exit() -> ! {
    loop {
        cortex_m::asm::bkpt();
    }
}

// defmt-test 0.3.0 has the limitation that this `#[tests]` attribute can only be used
// once within a crate. the module can be in any file but there can only be at most
// one `#[tests]` module in this library crate
#[cfg(test)]
#[defmt_test::tests]
mod unit_tests {
    use super::logic::conversion::tests as conversion_tests;
    use super::logic::formatting::tests as formatting_tests;
    use super::logic::gate::tests as gate_tests;
    use super::logic::sampler::tests as sampler_tests;

    #[test]
    fn gate_not_due_before_first_interval() {
        gate_tests::not_due_before_first_interval();
    }

    #[test]
    fn gate_fires_exactly_at_interval() {
        gate_tests::fires_exactly_at_interval();
    }

    #[test]
    fn gate_marker_follows_late_firing() {
        gate_tests::marker_follows_late_firing();
    }

    #[test]
    fn gate_handles_counter_wraparound() {
        gate_tests::handles_counter_wraparound();
    }

    #[test]
    fn convert_zero() {
        conversion_tests::zero_is_minus_five();
    }

    #[test]
    fn convert_full_scale() {
        conversion_tests::full_scale_is_forty_five();
    }

    #[test]
    fn convert_midscale() {
        conversion_tests::midscale();
    }

    #[test]
    fn convert_offset_voltage() {
        conversion_tests::offset_voltage_is_zero_degrees();
    }

    #[test]
    fn convert_out_of_range_raw() {
        conversion_tests::out_of_range_raw_is_not_clamped();
    }

    #[test]
    fn format_float_zero() {
        formatting_tests::format_float_zero();
    }

    #[test]
    fn format_float_small_fract() {
        formatting_tests::format_float_small_fract();
    }

    #[test]
    fn format_float_smaller_fract() {
        formatting_tests::format_float_smaller_fract();
    }

    #[test]
    fn format_float_more_digits() {
        formatting_tests::format_float_more_digits();
    }

    #[test]
    fn format_float_carry_over() {
        formatting_tests::format_float_carry_over();
    }

    #[test]
    fn format_float_negative() {
        formatting_tests::format_float_negative();
    }

    #[test]
    fn format_float_no_fraction() {
        formatting_tests::format_float_no_fraction();
    }

    #[test]
    fn format_report_suffix() {
        formatting_tests::format_report_suffix();
    }

    #[test]
    fn sampler_report_zero() {
        sampler_tests::report_zero();
    }

    #[test]
    fn sampler_report_midscale() {
        sampler_tests::report_midscale();
    }

    #[test]
    fn sampler_report_full_scale() {
        sampler_tests::report_full_scale();
    }

    #[test]
    fn sampler_waiting_pass_is_a_noop() {
        sampler_tests::waiting_pass_is_a_noop();
    }

    #[test]
    fn sampler_half_interval_samples_once() {
        sampler_tests::half_interval_samples_once();
    }

    #[test]
    fn sampler_full_interval_samples_twice() {
        sampler_tests::full_interval_samples_twice();
    }

    #[test]
    fn sampler_failed_read_still_advances_marker() {
        sampler_tests::failed_read_still_advances_marker();
    }

    #[test]
    fn sampler_overflowing_output() {
        sampler_tests::overflowing_output_reports_serial_error();
    }
}

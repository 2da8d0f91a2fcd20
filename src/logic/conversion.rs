//! TMP36-style transfer function: 0.5 V offset at 0 °C.

use crate::config::{ADC_FULL_SCALE_V, ADC_MAX};

/// Unconverted ADC result, nominally 0..=1023
pub type RawSample = u16;

const OFFSET_V: f32 = 0.5;
const SCALE: f32 = 10.0;

pub fn raw_to_voltage(raw: RawSample) -> f32 {
    raw as f32 * (ADC_FULL_SCALE_V / ADC_MAX as f32)
}

pub fn voltage_to_celsius(voltage: f32) -> f32 {
    (voltage - OFFSET_V) * SCALE
}

pub fn raw_to_celsius(raw: RawSample) -> f32 {
    voltage_to_celsius(raw_to_voltage(raw))
}

#[cfg(test)]
pub mod tests {
    use micromath::F32Ext;

    use super::{raw_to_celsius, raw_to_voltage, voltage_to_celsius};

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    pub fn zero_is_minus_five() {
        assert!(close(raw_to_voltage(0), 0.));
        assert!(close(raw_to_celsius(0), -5.));
    }

    pub fn full_scale_is_forty_five() {
        assert!(close(raw_to_voltage(1023), 5.));
        assert!(close(raw_to_celsius(1023), 45.));
    }

    pub fn midscale() {
        // 511 * 5 / 1023 = 2.497556
        assert!(close(raw_to_voltage(511), 2.497_556));
        assert!(close(raw_to_celsius(511), 19.975_56));
    }

    pub fn offset_voltage_is_zero_degrees() {
        assert!(close(voltage_to_celsius(0.5), 0.));
        assert!(close(voltage_to_celsius(1.5), 10.));
    }

    pub fn out_of_range_raw_is_not_clamped() {
        // 2046 counts would be 10 V
        assert!(close(raw_to_celsius(2046), 95.));
    }
}

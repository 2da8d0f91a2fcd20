use embedded_hal::adc::{Channel, OneShot};

use crate::logic::{conversion::RawSample, sampler::AnalogInput};

/// A single-ended ADC channel wired to the temperature sensor.
///
/// Generic over any `embedded-hal` one-shot ADC; on the nRF52840 that's the
/// SAADC configured for 10-bit conversions.
pub struct AnalogSensor<ADC, A, PIN> {
    adc: ADC,
    pin: PIN,
    _adc: core::marker::PhantomData<A>,
}

impl<ADC, A, PIN> AnalogSensor<ADC, A, PIN>
where
    ADC: OneShot<A, i16, PIN>,
    PIN: Channel<A>,
{
    pub fn new(adc: ADC, pin: PIN) -> Self {
        AnalogSensor {
            adc,
            pin,
            _adc: core::marker::PhantomData,
        }
    }
}

impl<ADC, A, PIN> AnalogInput for AnalogSensor<ADC, A, PIN>
where
    ADC: OneShot<A, i16, PIN>,
    PIN: Channel<A>,
{
    type Error = ADC::Error;

    fn read_raw(&mut self) -> Result<RawSample, Self::Error> {
        let value = nb::block!(self.adc.read(&mut self.pin))?;
        // Single-ended conversions can dip a few counts below zero near
        // ground, the sample type has no room for that
        Ok(value.max(0) as RawSample)
    }
}

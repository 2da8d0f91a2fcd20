use micromath::F32Ext;
use ufmt::{uWrite, uwrite};

/// Suffix that follows every reported temperature. Consumers split the
/// serial stream on it, so it stays exactly as is, trailing space included.
pub const REPORT_SUFFIX: &str = " Celsius, ";

/// Enough for any `u16` raw sample run through the conversion
pub const REPORT_CAPACITY: usize = 24;

fn u32_len(num: u32) -> u8 {
    if num == 0 {
        return 1;
    }
    let mut count = 0;
    let mut num = num;
    while num > 0 {
        num /= 10_u32;
        count += 1;
    }
    count
}

/// Writes `value` with exactly `precision` fractional digits (at most 4).
///
/// Rounds half away from zero on the magnitude, so the carry ripples into the
/// integer part (`19.999` -> `20.00`). Anything below zero gets a leading
/// `-`, even if it rounds to zero.
pub fn write_fixed<W>(w: &mut W, value: f32, precision: u8) -> Result<(), W::Error>
where
    W: uWrite + ?Sized,
{
    let precision = precision.min(4);
    let times = 10_u32.pow(precision as u32);
    let scaled = (value.abs() * times as f32).round() as u32;
    let int_part = scaled / times;
    let frac_part = scaled % times;

    if value < 0. {
        w.write_str("-")?;
    }
    uwrite!(w, "{}", int_part)?;
    if precision > 0 {
        w.write_str(".")?;
        for _ in 0..(precision - u32_len(frac_part)) {
            w.write_str("0")?;
        }
        uwrite!(w, "{}", frac_part)?;
    }
    Ok(())
}

/// Writes one report record, e.g. `-5.00 Celsius, `. No line terminator;
/// records accumulate on a single line.
pub fn write_celsius_report<W>(w: &mut W, celsius: f32) -> Result<(), W::Error>
where
    W: uWrite + ?Sized,
{
    write_fixed(w, celsius, 2)?;
    w.write_str(REPORT_SUFFIX)
}

pub fn format_celsius_report(celsius: f32) -> heapless::String<REPORT_CAPACITY> {
    let mut output: heapless::String<REPORT_CAPACITY> = heapless::String::new();
    // Can't overflow, the largest record is "3198.46 Celsius, "
    let _ = write_celsius_report(&mut output, celsius);
    output
}

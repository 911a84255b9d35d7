use crate::trace::Trace;

/// Place value of the most significant bit, 1000 0000.
pub const MSB: u8 = 0b1000_0000;

/// Render a byte as eight '0'/'1' characters, MSB first.
///
/// Only the top bit is ever inspected: the working copy is shifted left after
/// each test, dropping the bit just read and filling the LSB with 0.
pub fn binary_string(byte: i8, trace: &Trace) -> String {
    trace.log(format_args!("binary_string({})", byte));

    let mut out = String::with_capacity(8);
    let mut c = byte as u8;
    for _ in 0..8 {
        out.push(if c & MSB != 0 { '1' } else { '0' });
        c <<= 1;
    }
    out
}

/// Accept either a signed byte or an unsigned one (128..=255 wraps to the
/// negative byte with the same bits).
pub fn parse_byte(s: &str) -> Result<i8, String> {
    let value: i16 = s
        .trim()
        .parse()
        .map_err(|_| format!("`{}` is not an integer", s))?;

    match value {
        -128..=127 => Ok(value as i8),
        128..=255 => Ok(value as u8 as i8),
        _ => Err(format!("{} does not fit in a byte (-128..=255)", value)),
    }
}

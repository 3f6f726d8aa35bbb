/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// Uses integer math for efficiency on embedded systems.
#[inline]
#[allow(clippy::cast_lossless)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Scale an 8-bit value back up after a [`scale8`] pass
///
/// Inverse of `scale8` up to quantization; the result saturates at 255.
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn unscale8(value: u8, scale: u8) -> u8 {
    let restored = ((value as u32) << 8) / (1 + scale as u32);
    if restored > 255 { 255 } else { restored as u8 }
}

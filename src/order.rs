//! Channel wiring order
//!
//! WS281x chips shift bytes straight onto the LED PWM registers, so the
//! byte order inside a pixel record must match the physical wiring of the
//! device, not the canonical R/G/B/W order of packed colors.

/// Byte position of each logical channel within one pixel record
///
/// For 3-channel devices `w` aliases `r`; the white slot is never written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelOffsets {
    pub r: usize,
    pub g: usize,
    pub b: usize,
    pub w: usize,
}

/// Physical channel order of a strip
///
/// The variant name spells the wiring order first byte to last. Plain
/// three-letter variants are RGB devices (3 bytes per pixel); four-letter
/// variants carry a white channel (4 bytes per pixel). `Grb` matches the
/// most common WS2812/SK6812 wiring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorOrder {
    // RGB permutations
    Rgb,
    Rbg,
    Grb,
    Gbr,
    Brg,
    Bgr,
    // RGBW permutations, white first
    Wrgb,
    Wrbg,
    Wgrb,
    Wgbr,
    Wbrg,
    Wbgr,
    // White second
    Rwgb,
    Rwbg,
    Gwrb,
    Gwbr,
    Bwrg,
    Bwgr,
    // White third
    Rgwb,
    Rbwg,
    Grwb,
    Gbwr,
    Brwg,
    Bgwr,
    // White last
    Rgbw,
    Rbgw,
    Grbw,
    Gbrw,
    Brgw,
    Bgrw,
}

impl ColorOrder {
    /// Bytes per pixel record for this order
    pub const fn channels(self) -> usize {
        if self.has_white() { 4 } else { 3 }
    }

    /// Whether this order carries a dedicated white channel
    pub const fn has_white(self) -> bool {
        !matches!(
            self,
            Self::Rgb | Self::Rbg | Self::Grb | Self::Gbr | Self::Brg | Self::Bgr
        )
    }

    /// Byte offsets of the logical channels in wiring order
    pub const fn offsets(self) -> ChannelOffsets {
        // (r, g, b, w); w repeats r on 3-channel orders.
        let (r, g, b, w) = match self {
            Self::Rgb => (0, 1, 2, 0),
            Self::Rbg => (0, 2, 1, 0),
            Self::Grb => (1, 0, 2, 1),
            Self::Gbr => (2, 0, 1, 2),
            Self::Brg => (1, 2, 0, 1),
            Self::Bgr => (2, 1, 0, 2),

            Self::Wrgb => (1, 2, 3, 0),
            Self::Wrbg => (1, 3, 2, 0),
            Self::Wgrb => (2, 1, 3, 0),
            Self::Wgbr => (3, 1, 2, 0),
            Self::Wbrg => (2, 3, 1, 0),
            Self::Wbgr => (3, 2, 1, 0),

            Self::Rwgb => (0, 2, 3, 1),
            Self::Rwbg => (0, 3, 2, 1),
            Self::Gwrb => (2, 0, 3, 1),
            Self::Gwbr => (3, 0, 2, 1),
            Self::Bwrg => (2, 3, 0, 1),
            Self::Bwgr => (3, 2, 0, 1),

            Self::Rgwb => (0, 1, 3, 2),
            Self::Rbwg => (0, 3, 1, 2),
            Self::Grwb => (1, 0, 3, 2),
            Self::Gbwr => (3, 0, 1, 2),
            Self::Brwg => (1, 3, 0, 2),
            Self::Bgwr => (3, 1, 0, 2),

            Self::Rgbw => (0, 1, 2, 3),
            Self::Rbgw => (0, 2, 1, 3),
            Self::Grbw => (1, 0, 2, 3),
            Self::Gbrw => (2, 0, 1, 3),
            Self::Brgw => (1, 2, 0, 3),
            Self::Bgrw => (2, 1, 0, 3),
        };

        ChannelOffsets { r, g, b, w }
    }
}

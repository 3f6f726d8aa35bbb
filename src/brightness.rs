//! Global brightness state
//!
//! Brightness is applied eagerly: pixel writes are scaled on the way into
//! the buffer and the whole buffer is rescaled in place when the level
//! changes, so storage always holds display-ready bytes and the frame
//! transmitter never touches a multiplier.

use crate::math8::{scale8, unscale8};

/// Current brightness level
///
/// `Unset` is the construction-time state: full brightness with no scaling
/// pass ever applied. It reports as level 255 but is distinct from
/// `Level(255)`, which records that an explicit rescale happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Brightness {
    Unset,
    Level(u8),
}

impl Brightness {
    /// Externally visible level, 0 = off, 255 = full
    pub(crate) const fn level(self) -> u8 {
        match self {
            Self::Unset => 255,
            Self::Level(level) => level,
        }
    }

    /// Scale one incoming channel byte to display-ready form
    pub(crate) const fn apply(self, value: u8) -> u8 {
        match self {
            Self::Unset => value,
            Self::Level(level) => scale8(value, level),
        }
    }

    /// Approximate the originally written byte from its stored form
    ///
    /// Exact inversion is impossible once [`apply`](Self::apply) has
    /// quantized; the restored byte saturates at 255.
    pub(crate) const fn restore(self, value: u8) -> u8 {
        match self {
            Self::Unset => value,
            Self::Level(level) => unscale8(value, level),
        }
    }

    /// Change the level, rescaling stored bytes in place
    ///
    /// Rescaling re-quantizes: raising the level after lowering it cannot
    /// recover precision lost in the earlier pass. That loss is inherent
    /// to keeping display-ready bytes and is left as-is.
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn rescale(&mut self, level: u8, pixels: &mut [u8]) {
        if level == self.level() {
            return;
        }

        let old_level = self.level();
        let scale: u32 = if old_level == 0 {
            0
        } else {
            (((u32::from(level) + 1) << 8) - 1) / u32::from(old_level)
        };

        for byte in pixels.iter_mut() {
            *byte = ((u32::from(*byte) * scale) >> 8) as u8;
        }

        *self = Self::Level(level);
    }
}

//! Protocol timing: per-class pulse widths and the inter-frame latch
//!
//! The WS281x data line is self-clocked. Each bit is one active-high pulse
//! whose width encodes the bit value, followed by an inactive-low tail that
//! pads the slot out to the nominal bit period. After a full frame the line
//! must idle low for the latch interval so the chips commit the shifted
//! data to their PWM registers.

use embassy_time::{Duration, Instant};

/// Pulse widths for one bit slot, in nanoseconds
///
/// `t0h`/`t0l` shape a 0 bit, `t1h`/`t1l` a 1 bit. Each pair sums to the
/// class's nominal bit period. Receivers tolerate roughly ±150 ns of
/// deviation per edge; there is no tolerance for suspension between slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitTiming {
    pub t0h: u32,
    pub t0l: u32,
    pub t1h: u32,
    pub t1l: u32,
}

impl BitTiming {
    /// Active-high and inactive-low widths for one bit value
    pub const fn pulse(&self, bit: bool) -> (u32, u32) {
        if bit { (self.t1h, self.t1l) } else { (self.t0h, self.t0l) }
    }

    /// Nominal bit period in nanoseconds
    pub const fn period(&self) -> u32 {
        self.t0h + self.t0l
    }
}

/// Nominal data rate family of a strip
///
/// `Khz800` covers WS2812/WS2812B/SK6812 and WS2811 in high-speed mode.
/// `Khz400` covers first-generation devices and WS2811 low-speed mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeedClass {
    /// Legacy 400 kHz datastream, 2.5 µs bit period
    Khz400,
    /// Standard 800 kHz datastream, 1.25 µs bit period
    Khz800,
}

impl SpeedClass {
    /// Pulse widths for this class
    pub const fn bit_timing(self) -> BitTiming {
        match self {
            Self::Khz400 => BitTiming {
                t0h: 500,
                t0l: 2000,
                t1h: 1200,
                t1l: 1300,
            },
            Self::Khz800 => BitTiming {
                t0h: 400,
                t0l: 850,
                t1h: 800,
                t1l: 450,
            },
        }
    }

    /// Minimum idle time between the end of one frame and the next
    ///
    /// 300 µs for the 800 kHz family: post-2017 WS2812B revisions raised
    /// the datasheet reset from 50 µs to 280 µs. The 400 kHz family keeps
    /// the original 50 µs.
    pub const fn latch_interval(self) -> Duration {
        match self {
            Self::Khz400 => Duration::from_micros(50),
            Self::Khz800 => Duration::from_micros(300),
        }
    }
}

/// Tracks when the previous frame finished
///
/// Written exactly once per completed transmission; the timestamp only
/// moves forward.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LatchTimer {
    last_frame_end: Option<Instant>,
}

impl LatchTimer {
    pub(crate) const fn new() -> Self {
        Self {
            last_frame_end: None,
        }
    }

    /// Record the end of a completed transmission
    pub(crate) fn record_frame_end(&mut self, now: Instant) {
        self.last_frame_end = Some(now);
    }

    /// Time since the last completed transmission, `None` if never sent
    pub(crate) fn elapsed_since(&self) -> Option<Duration> {
        self.last_frame_end.map(|at| at.elapsed())
    }
}

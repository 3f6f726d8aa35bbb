//! Frame transmission state machine
//!
//! Pushes the whole pixel buffer out as one uninterrupted bit sequence.
//! The protocol is send-only: no acknowledgment, no checksum, no way to
//! observe a failure downstream. A suspension longer than a few pulse
//! widths mid-frame latches the partial data and shifts the remainder
//! into the wrong chips, so the entire frame runs inside one critical
//! section.

use embassy_time::Instant;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::PulseEmitter;
use crate::timing::{LatchTimer, SpeedClass};

/// Drives a pulse emitter across a byte buffer, one frame at a time
///
/// Owns the latch bookkeeping for its line. Strips on separate data lines
/// each have their own transmitter and never coordinate.
#[derive(Debug)]
pub struct FrameTransmitter {
    speed: SpeedClass,
    latch: LatchTimer,
}

impl FrameTransmitter {
    pub const fn new(speed: SpeedClass) -> Self {
        Self {
            speed,
            latch: LatchTimer::new(),
        }
    }

    /// Speed class this transmitter was created with
    pub const fn speed_class(&self) -> SpeedClass {
        self.speed
    }

    /// Whether enough idle time has passed to start the next frame
    ///
    /// Advisory only; [`show`](Self::show) performs the wait itself.
    /// Always true before the first frame.
    pub fn can_show(&self) -> bool {
        match self.latch.elapsed_since() {
            Some(elapsed) => elapsed >= self.speed.latch_interval(),
            None => true,
        }
    }

    /// Transmit `bytes` as one frame
    ///
    /// Blocks until the latch interval from the previous frame has
    /// passed, then emits every byte MSB first with preemption suppressed
    /// for the whole frame. Once started the frame always runs to
    /// completion; the protocol has no mid-frame resynchronization, so
    /// there is nothing a timeout could safely do.
    ///
    /// An empty buffer transmits nothing and leaves the latch state
    /// untouched.
    pub fn show<E: PulseEmitter>(&mut self, bytes: &[u8], emitter: &mut E) {
        if bytes.is_empty() {
            return;
        }

        // Bounded by the latch interval, not by buffer size.
        while !self.can_show() {
            core::hint::spin_loop();
        }

        let timing = self.speed.bit_timing();
        critical_section::with(|_cs| {
            for &byte in bytes {
                let mut mask = 0x80u8;
                while mask != 0 {
                    emitter.emit_pulse(byte & mask != 0, &timing);
                    mask >>= 1;
                }
            }
        });

        self.latch.record_frame_end(Instant::now());

        #[cfg(feature = "esp32-log")]
        println!(
            "[FrameTransmitter.show] sent {} bytes at {:?}",
            bytes.len(),
            self.speed
        );
    }
}

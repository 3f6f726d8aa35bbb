#![no_std]

pub mod color;
pub mod gamma;
pub mod math8;
pub mod order;
pub mod strip;
pub mod timing;
pub mod transmit;

mod brightness;

pub use color::{Rgb, color_hsv, pack_rgb, pack_rgbw, rgb_from_u32};
pub use embassy_time::{Duration, Instant};
pub use gamma::{gamma8, gamma32, sine8};
pub use order::ColorOrder;
pub use strip::Strip;
pub use timing::{BitTiming, SpeedClass};
pub use transmit::FrameTransmitter;

/// Abstract pulse emitter trait
///
/// Implement this trait to support different hardware platforms
/// (cycle-counted GPIO, RMT/PIO peripheral offload, SPI expansion).
/// The frame transmitter is generic over this trait.
///
/// The contract: emit exactly one active-high pulse of the duration
/// selected by `bit`, then drive the line inactive-low for the rest of
/// the nominal bit period, with jitter inside the downstream device's
/// datasheet tolerance. The transmitter guarantees the surrounding
/// execution environment is not preempted between calls of one frame.
pub trait PulseEmitter {
    /// Emit one bit of the data stream
    fn emit_pulse(&mut self, bit: bool, timing: &BitTiming);
}

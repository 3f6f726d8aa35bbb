//! The pixel buffer
//!
//! `Strip` owns the raw per-pixel bytes in device wiring order, plus the
//! brightness state and the frame transmitter for its data line. All edge
//! cases are silent: out-of-range writes are ignored, out-of-range reads
//! return 0, and a buffer that could not be allocated stays usable as an
//! inert zero-pixel strip.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use heapless::Vec;

use crate::PulseEmitter;
use crate::brightness::Brightness;
use crate::color::{Rgb, pack_rgb, pack_rgbw};
use crate::order::ColorOrder;
use crate::timing::SpeedClass;
use crate::transmit::FrameTransmitter;

/// An addressable LED strip buffer
///
/// `CAP` is the storage capacity in bytes: at least `3 * led_count` for
/// RGB orders, `4 * led_count` for RGBW orders. Requesting more pixels
/// than fit in `CAP` is the allocation-failure path and produces an inert
/// zero-pixel strip.
pub struct Strip<const CAP: usize> {
    pixels: Vec<u8, CAP>,
    order: ColorOrder,
    brightness: Brightness,
    transmitter: FrameTransmitter,
}

impl<const CAP: usize> Strip<CAP> {
    /// Create a strip with zeroed (off) pixels
    pub fn new(pixel_count: usize, order: ColorOrder, speed: SpeedClass) -> Self {
        let mut pixels = Vec::new();
        if pixels
            .resize(pixel_count.saturating_mul(order.channels()), 0)
            .is_err()
        {
            pixels.clear();
        }

        Self {
            pixels,
            order,
            brightness: Brightness::Unset,
            transmitter: FrameTransmitter::new(speed),
        }
    }

    /// Number of addressable pixels (0 for an inert strip)
    pub fn num_pixels(&self) -> usize {
        self.pixels.len() / self.order.channels()
    }

    /// Channel wiring order
    pub const fn color_order(&self) -> ColorOrder {
        self.order
    }

    /// Speed class of the data line
    pub const fn speed_class(&self) -> SpeedClass {
        self.transmitter.speed_class()
    }

    /// Raw pixel bytes in wiring order, already brightness-scaled
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// Change the number of pixels
    ///
    /// Existing pixel bytes are preserved up to the shorter of the two
    /// lengths; new pixels start zeroed. If the new size exceeds `CAP`
    /// the strip becomes inert and preserves nothing. Resizing an inert
    /// strip back within capacity revives it.
    pub fn resize(&mut self, pixel_count: usize) {
        if self
            .pixels
            .resize(pixel_count.saturating_mul(self.order.channels()), 0)
            .is_err()
        {
            self.pixels.clear();
        }
    }

    /// Set one pixel from R/G/B components
    ///
    /// Out-of-range `index` is ignored. The current brightness level is
    /// applied before storing.
    pub fn set_pixel(&mut self, index: usize, r: u8, g: u8, b: u8) {
        self.set_pixel_rgbw(index, r, g, b, 0);
    }

    /// Set one pixel from R/G/B/W components
    ///
    /// On a strip without a white channel the `w` component is a no-op;
    /// the RGB components are still written.
    pub fn set_pixel_rgbw(&mut self, index: usize, r: u8, g: u8, b: u8, w: u8) {
        if index >= self.num_pixels() {
            return;
        }

        let scaled = [
            self.brightness.apply(r),
            self.brightness.apply(g),
            self.brightness.apply(b),
            self.brightness.apply(w),
        ];

        let channels = self.order.channels();
        let offsets = self.order.offsets();
        let record = &mut self.pixels[index * channels..(index + 1) * channels];
        record[offsets.r] = scaled[0];
        record[offsets.g] = scaled[1];
        record[offsets.b] = scaled[2];
        if self.order.has_white() {
            record[offsets.w] = scaled[3];
        }
    }

    /// Set one pixel from a packed `0xWWRRGGBB` color
    #[allow(clippy::cast_possible_truncation)]
    pub fn set_pixel_color(&mut self, index: usize, color: u32) {
        self.set_pixel_rgbw(
            index,
            (color >> 16) as u8,
            (color >> 8) as u8,
            color as u8,
            (color >> 24) as u8,
        );
    }

    /// Set one pixel from an [`Rgb`] value
    pub fn set_pixel_rgb(&mut self, index: usize, color: Rgb) {
        self.set_pixel(index, color.r, color.g, color.b);
    }

    /// Read one pixel back as a packed `0xWWRRGGBB` color
    ///
    /// Out-of-range `index` returns 0. The result is canonical regardless
    /// of wiring order. With a brightness level active the stored bytes
    /// are scaled back up, so the value approximates what was originally
    /// written rather than what is on the wire.
    pub fn pixel_color(&self, index: usize) -> u32 {
        if index >= self.num_pixels() {
            return 0;
        }

        let channels = self.order.channels();
        let offsets = self.order.offsets();
        let record = &self.pixels[index * channels..(index + 1) * channels];
        let r = self.brightness.restore(record[offsets.r]);
        let g = self.brightness.restore(record[offsets.g]);
        let b = self.brightness.restore(record[offsets.b]);

        if self.order.has_white() {
            pack_rgbw(r, g, b, self.brightness.restore(record[offsets.w]))
        } else {
            pack_rgb(r, g, b)
        }
    }

    /// Fill a run of pixels with one packed color
    ///
    /// `count == 0` means "through the end of the strip". The run is
    /// clipped to the buffer; a `first` past the end is a no-op.
    pub fn fill(&mut self, color: u32, first: usize, count: usize) {
        let len = self.num_pixels();
        if first >= len {
            return;
        }

        let end = if count == 0 {
            len
        } else {
            (first + count).min(len)
        };

        for index in first..end {
            self.set_pixel_color(index, color);
        }
    }

    /// Turn every pixel off
    pub fn clear(&mut self) {
        self.pixels.as_mut_slice().fill(0);
    }

    /// Current brightness level, 0 = off, 255 = full
    pub fn brightness(&self) -> u8 {
        self.brightness.level()
    }

    /// Set the global brightness level
    ///
    /// Rescales the stored bytes in place; see the note on
    /// [`pixel_color`](Self::pixel_color) about precision. Subsequent
    /// pixel writes are scaled by the new level as they arrive.
    pub fn set_brightness(&mut self, level: u8) {
        #[cfg(feature = "esp32-log")]
        println!(
            "[Strip.set_brightness] {} -> {}",
            self.brightness.level(),
            level
        );

        self.brightness.rescale(level, &mut self.pixels);
    }

    /// Whether the latch interval since the previous frame has passed
    ///
    /// Advisory; [`show`](Self::show) waits on its own.
    pub fn can_show(&self) -> bool {
        self.transmitter.can_show()
    }

    /// Transmit the buffer to the strip
    ///
    /// Blocks until the latch interval has passed, then emits the whole
    /// buffer with preemption suppressed. An inert strip emits nothing.
    pub fn show<E: PulseEmitter>(&mut self, emitter: &mut E) {
        self.transmitter.show(&self.pixels, emitter);
    }
}

//! Terminal preview for ws281x-strip
//!
//! Renders a gamma-corrected rainbow into a strip buffer, transmits it
//! through a pulse emitter that decodes the bit stream back into bytes,
//! and draws the reconstructed frame as truecolor blocks.

#![allow(clippy::print_stdout, clippy::cast_possible_truncation)]

use ws281x_strip::{BitTiming, ColorOrder, PulseEmitter, SpeedClass, Strip, color_hsv, gamma32};

const LED_COUNT: usize = 32;

/// Collects emitted pulses and reassembles the wire bytes
#[derive(Default)]
struct DecodingEmitter {
    bytes: Vec<u8>,
    pending: u8,
    bit_count: u32,
    frame_ns: u64,
}

impl PulseEmitter for DecodingEmitter {
    fn emit_pulse(&mut self, bit: bool, timing: &BitTiming) {
        let (high, low) = timing.pulse(bit);
        self.frame_ns += u64::from(high) + u64::from(low);

        self.pending = (self.pending << 1) | u8::from(bit);
        self.bit_count += 1;
        if self.bit_count % 8 == 0 {
            self.bytes.push(self.pending);
            self.pending = 0;
        }
    }
}

fn main() {
    let mut strip: Strip<{ LED_COUNT * 3 }> =
        Strip::new(LED_COUNT, ColorOrder::Grb, SpeedClass::Khz800);

    for i in 0..LED_COUNT {
        let hue = ((i * 65536) / LED_COUNT) as u16;
        strip.set_pixel_color(i, gamma32(color_hsv(hue, 255, 255)));
    }

    let mut emitter = DecodingEmitter::default();
    strip.show(&mut emitter);

    let offsets = strip.color_order().offsets();
    for record in emitter.bytes.chunks_exact(3) {
        let (r, g, b) = (record[offsets.r], record[offsets.g], record[offsets.b]);
        print!("\x1b[38;2;{r};{g};{b}m\u{2588}\u{2588}\x1b[0m");
    }
    println!();
    println!(
        "{} pixels, {} bits on the wire, {} us per frame",
        strip.num_pixels(),
        emitter.bit_count,
        emitter.frame_ns / 1000
    );
}

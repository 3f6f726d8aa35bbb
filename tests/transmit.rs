mod tests {
    use std::thread;
    use std::time::Duration as StdDuration;

    use ws281x_strip::{BitTiming, ColorOrder, PulseEmitter, SpeedClass, Strip};

    /// Captures every emitted bit and the timing it was emitted with
    #[derive(Default)]
    struct RecordingEmitter {
        bits: Vec<bool>,
        timings: Vec<BitTiming>,
    }

    impl PulseEmitter for RecordingEmitter {
        fn emit_pulse(&mut self, bit: bool, timing: &BitTiming) {
            self.bits.push(bit);
            self.timings.push(*timing);
        }
    }

    fn bits_of(byte: u8) -> Vec<bool> {
        (0..8).map(|shift| byte & (0x80 >> shift) != 0).collect()
    }

    #[test]
    fn test_frame_is_msb_first_in_wiring_order() {
        let mut strip: Strip<6> = Strip::new(2, ColorOrder::Grb, SpeedClass::Khz800);
        strip.set_pixel(0, 0x80, 0xFF, 0x01);
        strip.set_pixel(1, 0x12, 0x34, 0x56);

        let mut emitter = RecordingEmitter::default();
        strip.show(&mut emitter);

        let mut expected = Vec::new();
        for byte in [0xFF, 0x80, 0x01, 0x34, 0x12, 0x56] {
            expected.extend(bits_of(byte));
        }
        assert_eq!(emitter.bits, expected);
    }

    #[test]
    fn test_emitter_receives_class_timing() {
        let mut strip: Strip<3> = Strip::new(1, ColorOrder::Rgb, SpeedClass::Khz400);
        strip.set_pixel(0, 1, 2, 3);

        let mut emitter = RecordingEmitter::default();
        strip.show(&mut emitter);

        assert_eq!(emitter.timings.len(), 24);
        let timing = emitter.timings[0];
        assert_eq!((timing.t0h, timing.t0l), (500, 2000));
        assert_eq!((timing.t1h, timing.t1l), (1200, 1300));
        assert!(emitter.timings.iter().all(|t| *t == timing));
    }

    #[test]
    fn test_bit_timing_shapes() {
        let timing = SpeedClass::Khz800.bit_timing();
        assert_eq!(timing.pulse(false), (400, 850));
        assert_eq!(timing.pulse(true), (800, 450));
        // Both bit values fill the same nominal period.
        assert_eq!(timing.t0h + timing.t0l, timing.t1h + timing.t1l);
        assert_eq!(timing.period(), 1250);

        assert_eq!(SpeedClass::Khz400.bit_timing().period(), 2500);
    }

    #[test]
    fn test_latch_gates_consecutive_frames() {
        let mut strip: Strip<3> = Strip::new(1, ColorOrder::Rgb, SpeedClass::Khz800);
        assert!(strip.can_show());

        let mut emitter = RecordingEmitter::default();
        strip.show(&mut emitter);
        assert!(!strip.can_show());

        thread::sleep(StdDuration::from_micros(500));
        assert!(strip.can_show());
    }

    #[test]
    fn test_show_waits_out_the_latch_interval() {
        let mut strip: Strip<3> = Strip::new(1, ColorOrder::Rgb, SpeedClass::Khz800);
        let mut emitter = RecordingEmitter::default();

        strip.show(&mut emitter);
        // Immediately shows again; the second call must block until the
        // 300 us latch interval has passed instead of failing or skipping.
        strip.show(&mut emitter);
        assert_eq!(emitter.bits.len(), 48);
        assert!(!strip.can_show());
    }

    #[test]
    fn test_independent_strips_do_not_gate_each_other() {
        let mut first: Strip<3> = Strip::new(1, ColorOrder::Rgb, SpeedClass::Khz800);
        let mut second: Strip<3> = Strip::new(1, ColorOrder::Rgb, SpeedClass::Khz800);
        let mut emitter = RecordingEmitter::default();

        first.show(&mut emitter);
        assert!(!first.can_show());
        assert!(second.can_show());

        second.show(&mut emitter);
        assert_eq!(emitter.bits.len(), 48);
    }

    #[test]
    fn test_inert_strip_emits_nothing() {
        let mut strip: Strip<30> = Strip::new(11, ColorOrder::Grb, SpeedClass::Khz800);
        let mut emitter = RecordingEmitter::default();

        strip.show(&mut emitter);
        assert!(emitter.bits.is_empty());
        // The latch timer is untouched, so the strip still reports ready.
        assert!(strip.can_show());
    }
}

mod tests {
    use myrtio_led_encoder::color::{BgrOrder, GrbOrder, RgbOrder, Rgbw, RgbwMode, WhitePlacement};
    use myrtio_led_encoder::controller::UNCORRECTED;
    use myrtio_led_encoder::{
        ColorAdjustment, DitherMode, DitherPhase, PixelController, PixelSource, Rgb,
    };

    #[test]
    fn test_adjustment_uncorrected() {
        assert_eq!(ColorAdjustment::uncorrected(255).premixed, UNCORRECTED);
        assert_eq!(
            ColorAdjustment::uncorrected(128).premixed,
            Rgb::new(128, 128, 128)
        );
        assert_eq!(ColorAdjustment::uncorrected(0).premixed, Rgb::new(0, 0, 0));
    }

    #[test]
    fn test_adjustment_compute() {
        let adjustment = ColorAdjustment::compute(200, Rgb::new(255, 176, 240), UNCORRECTED);
        assert_eq!(adjustment.premixed, Rgb::new(200, 138, 188));
        assert_eq!(adjustment.color, Rgb::new(255, 176, 240));
        assert_eq!(adjustment.brightness, 200);

        let blocked = ColorAdjustment::compute(255, Rgb::new(0, 255, 255), UNCORRECTED);
        assert_eq!(blocked.premixed.r, 0);
    }

    #[test]
    fn test_load_applies_color_order() {
        let pixels = [Rgb::new(10, 20, 30)];
        let mut grb = PixelController::<GrbOrder>::new(&pixels, ColorAdjustment::neutral());
        assert_eq!(grb.load_and_scale_rgb(), [20, 10, 30]);

        let mut bgr = PixelController::<BgrOrder>::new(&pixels, ColorAdjustment::neutral());
        assert_eq!(bgr.load_and_scale_rgb(), [30, 20, 10]);
    }

    #[test]
    fn test_load_applies_brightness() {
        let pixels = [Rgb::new(200, 100, 0)];
        let mut controller =
            PixelController::<RgbOrder>::new(&pixels, ColorAdjustment::uncorrected(128));
        assert_eq!(controller.load_and_scale_rgb(), [100, 50, 0]);
    }

    #[test]
    fn test_cursor_counts() {
        let pixels = [Rgb::new(1, 1, 1); 3];
        let mut controller = PixelController::<RgbOrder>::new(&pixels, ColorAdjustment::neutral());
        assert!(controller.has(3));
        assert!(!controller.has(4));
        for _ in 0..3 {
            assert!(controller.has(1));
            controller.load_and_scale_rgb();
            controller.step_dithering();
            controller.advance_data();
        }
        assert!(!controller.has(1));
        assert_eq!(controller.remaining(), 0);
        assert_eq!(controller.size(), 3);
    }

    #[test]
    fn test_solid_color() {
        let mut controller =
            PixelController::<RgbOrder>::solid(Rgb::new(1, 2, 3), 4, ColorAdjustment::neutral());
        assert_eq!(controller.size(), 4);
        let mut count = 0;
        while controller.has(1) {
            assert_eq!(controller.load_and_scale_rgb(), [1, 2, 3]);
            controller.advance_data();
            count += 1;
        }
        assert_eq!(count, 4);
    }

    #[test]
    fn test_load_rgbw() {
        let pixels = [Rgb::new(100, 150, 200)];
        let mut controller = PixelController::<GrbOrder>::new(&pixels, ColorAdjustment::neutral());
        let rgbw = Rgbw::new(RgbwMode::ExactColors, WhitePlacement::W3);
        assert_eq!(controller.load_and_scale_rgbw(rgbw), [50, 0, 100, 100]);

        let first = Rgbw::new(RgbwMode::ExactColors, WhitePlacement::W0);
        assert_eq!(controller.load_and_scale_rgbw(first), [100, 50, 0, 100]);
    }

    #[cfg(feature = "hd-color-mixing")]
    #[test]
    fn test_load_rgb_scale_and_brightness() {
        use myrtio_led_encoder::pixel_iterator::HdLoad;

        let pixels = [Rgb::new(1, 2, 3)];
        let adjustment = ColorAdjustment::compute(128, Rgb::new(255, 200, 100), UNCORRECTED);
        let mut controller = PixelController::<BgrOrder>::new(&pixels, adjustment);
        assert_eq!(
            controller.load_rgb_scale_and_brightness(),
            HdLoad {
                rgb: [3, 2, 1],
                scale: [100, 200, 255],
                brightness: 128,
            }
        );
    }

    #[test]
    fn test_dither_phase_sequence() {
        let mut phase = DitherPhase::new();
        let signals: Vec<u8> = (0..8).map(|_| phase.next_frame()).collect();
        assert_eq!(signals, [144, 80, 208, 48, 176, 112, 240, 16]);
        assert_eq!(phase.next_frame(), 144);
    }

    #[test]
    fn test_binary_dither_alternates_between_pixels() {
        let pixels = [Rgb::new(100, 100, 100), Rgb::new(100, 100, 100), Rgb::new(0, 0, 0)];
        let mut phase = DitherPhase::new();
        let mut controller = PixelController::<RgbOrder>::new(&pixels, ColorAdjustment::neutral())
            .with_dither(DitherMode::Binary, &mut phase);

        assert_eq!(controller.load_and_scale_rgb(), [100, 100, 100]);
        controller.step_dithering();
        controller.advance_data();
        assert_eq!(controller.load_and_scale_rgb(), [101, 101, 101]);
        controller.step_dithering();
        controller.advance_data();
        // Black is never dithered
        assert_eq!(controller.load_and_scale_rgb(), [0, 0, 0]);
    }

    #[test]
    fn test_disabled_dither_keeps_phase() {
        let pixels = [Rgb::new(100, 100, 100); 2];
        let mut phase = DitherPhase::new();
        let mut controller = PixelController::<RgbOrder>::new(&pixels, ColorAdjustment::neutral())
            .with_dither(DitherMode::Disabled, &mut phase);
        controller.step_dithering();
        controller.advance_data();
        assert_eq!(controller.load_and_scale_rgb(), [100, 100, 100]);
        assert_eq!(phase, DitherPhase::new());
    }
}

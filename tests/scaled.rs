mod tests {
    use myrtio_led_encoder::color::{GrbOrder, RgbOrder, Rgbw, RgbwMode, WhitePlacement};
    use myrtio_led_encoder::scaled::{
        scaled_brightness_range, scaled_pixel_range_rgb, scaled_pixel_range_rgb16,
        scaled_pixel_range_rgbw,
    };
    use myrtio_led_encoder::{
        ColorAdjustment, PixelController, PixelIterator, Rgb, ScaledPixelIterBrightness,
        ScaledPixelIterRgb,
    };

    fn pixels() -> [Rgb; 3] {
        [Rgb::new(1, 2, 3), Rgb::new(4, 5, 6), Rgb::new(7, 8, 9)]
    }

    #[test]
    fn test_rgb_range_yields_every_pixel() {
        let pixels = pixels();
        let mut controller = PixelController::<GrbOrder>::new(&pixels, ColorAdjustment::neutral());
        let mut iter = PixelIterator::new(&mut controller, Rgbw::disabled());
        let values: Vec<_> = scaled_pixel_range_rgb(&mut iter).into_iter().collect();
        assert_eq!(values, vec![[2, 1, 3], [5, 4, 6], [8, 7, 9]]);
        assert!(!iter.has(1));
    }

    #[test]
    fn test_first_pixel_is_preloaded() {
        let pixels = pixels();
        let mut controller = PixelController::<RgbOrder>::new(&pixels, ColorAdjustment::neutral());
        let mut iter = PixelIterator::new(&mut controller, Rgbw::disabled());
        let range = scaled_pixel_range_rgb(&mut iter);
        assert_eq!(range.begin.get(), Some(&[1, 2, 3]));
        assert!(range.end.get().is_none());
    }

    #[test]
    fn test_begin_reaches_end() {
        let pixels = pixels();
        let mut controller = PixelController::<RgbOrder>::new(&pixels, ColorAdjustment::neutral());
        let mut iter = PixelIterator::new(&mut controller, Rgbw::disabled());
        let mut range = scaled_pixel_range_rgb(&mut iter);

        let mut steps = 0;
        while range.begin != range.end {
            range.begin.advance();
            steps += 1;
        }
        assert_eq!(steps, 3);
        assert!(range.begin.is_end());
        assert_eq!(range.begin.next(), None);
    }

    #[test]
    fn test_empty_range() {
        let mut controller = PixelController::<RgbOrder>::new(&[], ColorAdjustment::neutral());
        let mut iter = PixelIterator::new(&mut controller, Rgbw::disabled());
        let range = scaled_pixel_range_rgb(&mut iter);
        assert!(range.begin.is_end());
        assert!(range.begin == range.end);
    }

    #[test]
    fn test_end_sentinels_compare_equal() {
        assert!(ScaledPixelIterRgb::end() == ScaledPixelIterRgb::default());
        assert!(ScaledPixelIterBrightness::end() == ScaledPixelIterBrightness::end());
    }

    #[test]
    fn test_live_adapter_equality() {
        let pixels = pixels();
        let mut controller = PixelController::<RgbOrder>::new(&pixels, ColorAdjustment::neutral());
        let mut iter = PixelIterator::new(&mut controller, Rgbw::disabled());
        let mut begin = ScaledPixelIterRgb::new(&mut iter);
        let end = ScaledPixelIterRgb::end();

        for _ in 0..pixels.len() {
            let same = &begin;
            assert!(PartialEq::eq(&begin, same));
            assert!(begin != end);
            assert!(end != begin);
            begin.advance();
        }
        assert!(begin == end);
    }

    #[test]
    fn test_adapters_over_different_sources_differ() {
        let pixels = pixels();
        let mut first = PixelController::<RgbOrder>::new(&pixels, ColorAdjustment::neutral());
        let mut second = PixelController::<RgbOrder>::new(&pixels, ColorAdjustment::neutral());
        let mut first = PixelIterator::new(&mut first, Rgbw::disabled());
        let mut second = PixelIterator::new(&mut second, Rgbw::disabled());

        let a = ScaledPixelIterRgb::new(&mut first);
        let b = ScaledPixelIterRgb::new(&mut second);
        assert_eq!(a.get(), b.get());
        assert!(a != b);
    }

    #[test]
    fn test_end_stays_end() {
        let pixels = pixels();
        let mut controller = PixelController::<RgbOrder>::new(&pixels, ColorAdjustment::neutral());
        let mut iter = PixelIterator::new(&mut controller, Rgbw::disabled());
        let mut range = scaled_pixel_range_rgb(&mut iter);

        for _ in 0..pixels.len() {
            assert!(range.begin != range.end);
            range.begin.advance();
        }
        for _ in 0..3 {
            assert!(range.begin == range.end);
            range.begin.advance();
        }
        assert!(range.begin == range.end);
        assert_eq!(range.begin.next(), None);
        assert!(range.begin == range.end);
    }

    #[test]
    fn test_brightness_projection() {
        let pixels = [Rgb::new(255, 255, 255), Rgb::new(0, 0, 0), Rgb::new(16, 0, 0)];
        let mut controller = PixelController::<RgbOrder>::new(&pixels, ColorAdjustment::neutral());
        let mut iter = PixelIterator::new(&mut controller, Rgbw::disabled());
        let brightness: Vec<u8> = ScaledPixelIterBrightness::new(&mut iter).brightness().collect();
        assert_eq!(brightness.len(), 3);
        assert_eq!(brightness[..2], [31, 31]);
        assert!(brightness[2] <= 31);
        assert!(!iter.has(1));
    }

    #[test]
    fn test_rgbw_range() {
        let pixels = [Rgb::new(10, 20, 30)];
        let mut controller = PixelController::<RgbOrder>::new(&pixels, ColorAdjustment::neutral());
        let rgbw = Rgbw::new(RgbwMode::ExactColors, WhitePlacement::W3);
        let mut iter = PixelIterator::new(&mut controller, rgbw);
        let values: Vec<_> = scaled_pixel_range_rgbw(&mut iter).into_iter().collect();
        assert_eq!(values, vec![[0, 10, 20, 10]]);
    }

    #[test]
    fn test_rgb16_range() {
        let pixels = [Rgb::new(255, 128, 0)];
        let mut controller = PixelController::<RgbOrder>::new(&pixels, ColorAdjustment::neutral());
        let mut iter = PixelIterator::new(&mut controller, Rgbw::disabled());
        let values: Vec<_> = scaled_pixel_range_rgb16(&mut iter).into_iter().collect();
        assert_eq!(values, vec![[65535, 9514, 0]]);
    }

    #[test]
    fn test_brightness_range() {
        let pixels = [Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)];
        let mut controller = PixelController::<RgbOrder>::new(&pixels, ColorAdjustment::neutral());
        let mut iter = PixelIterator::new(&mut controller, Rgbw::disabled());
        let values: Vec<_> = scaled_brightness_range(&mut iter).into_iter().collect();
        assert_eq!(values, vec![([255, 255, 255], 31), ([0, 0, 0], 31)]);
    }

    #[test]
    fn test_pass_consumes_source() {
        let pixels = pixels();
        let mut controller = PixelController::<RgbOrder>::new(&pixels, ColorAdjustment::neutral());
        let mut iter = PixelIterator::new(&mut controller, Rgbw::disabled());
        let first: Vec<_> = scaled_pixel_range_rgb(&mut iter).into_iter().take(1).collect();
        assert_eq!(first, vec![[1, 2, 3]]);

        // The adapter had already loaded the second pixel
        let rest: Vec<_> = scaled_pixel_range_rgb(&mut iter).into_iter().collect();
        assert_eq!(rest, vec![[7, 8, 9]]);
    }

    #[test]
    fn test_independent_passes_are_identical() {
        let pixels = [Rgb::new(200, 100, 50); 7];
        let adjustment = ColorAdjustment::uncorrected(90);

        let mut first = PixelController::<GrbOrder>::new(&pixels, adjustment);
        let mut iter = PixelIterator::new(&mut first, Rgbw::disabled());
        let first: Vec<_> = scaled_pixel_range_rgb(&mut iter).into_iter().collect();

        let mut second = PixelController::<GrbOrder>::new(&pixels, adjustment);
        let mut iter = PixelIterator::new(&mut second, Rgbw::disabled());
        let second: Vec<_> = scaled_pixel_range_rgb(&mut iter).into_iter().collect();

        assert_eq!(first.len(), 7);
        assert_eq!(first, second);
    }
}

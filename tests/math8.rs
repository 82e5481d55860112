mod tests {
    use myrtio_led_encoder::math8::{
        map8_to_16, map16_to_8, max3, min3, qadd8, scale8, scale16by8,
    };

    #[test]
    fn test_scale8() {
        assert_eq!(scale8(255, 128), 128);
        assert_eq!(scale8(0, 128), 0);
        assert_eq!(scale8(128, 128), 64);
        assert_eq!(scale8(128, 255), 128);
        assert_eq!(scale8(128, 0), 0);
    }

    #[test]
    fn test_scale8_full_scale_is_identity() {
        for value in 0..=255u8 {
            assert_eq!(scale8(value, 255), value);
        }
    }

    #[test]
    fn test_qadd8() {
        assert_eq!(qadd8(100, 50), 150);
        assert_eq!(qadd8(200, 100), 255);
        assert_eq!(qadd8(255, 1), 255);
    }

    #[test]
    fn test_scale16by8() {
        assert_eq!(scale16by8(0xFFFF, 255), 0xFFFF);
        assert_eq!(scale16by8(0xFFFF, 128), 33023);
        assert_eq!(scale16by8(0x8000, 127), 0x4000);
        assert_eq!(scale16by8(1234, 0), 4);
    }

    #[test]
    fn test_map8_to_16() {
        assert_eq!(map8_to_16(0), 0);
        assert_eq!(map8_to_16(0xAB), 0xABAB);
        assert_eq!(map8_to_16(0xFF), 0xFFFF);
    }

    #[test]
    fn test_map16_to_8() {
        assert_eq!(map16_to_8(0), 0);
        assert_eq!(map16_to_8(0x007F), 0);
        assert_eq!(map16_to_8(0x0080), 1);
        assert_eq!(map16_to_8(2048), 8);
        assert_eq!(map16_to_8(0xFF00), 255);
        assert_eq!(map16_to_8(0xFFFF), 255);
    }

    #[test]
    fn test_min_max3() {
        assert_eq!(max3(3u8, 9, 5), 9);
        assert_eq!(min3(3u8, 9, 5), 3);
        assert_eq!(max3(7u16, 7, 7), 7);
    }
}

mod tests {
    use neotext_matrix::color::{Rgb, palette, rgb_from_u32, rgb_to_u32, scale_color};

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
    const ODD: Rgb = Rgb {
        r: 201,
        g: 99,
        b: 3,
    };

    #[test]
    fn test_rgb_from_u32() {
        assert_eq!(rgb_from_u32(0xFF0000), RED);
        assert_eq!(
            rgb_from_u32(palette::ORANGE),
            Rgb {
                r: 0xFF,
                g: 0xA5,
                b: 0x00
            }
        );
        // Only the low 24 bits count
        assert_eq!(rgb_from_u32(0xAB00_0000), BLACK);
    }

    #[test]
    fn test_rgb_to_u32() {
        assert_eq!(rgb_to_u32(RED), palette::RED);
        assert_eq!(rgb_to_u32(rgb_from_u32(0x12_34_56)), 0x12_34_56);
        assert_eq!(rgb_to_u32(palette::WHITE_RGB), palette::WHITE);
    }

    #[test]
    fn test_scale_color_full_and_off() {
        assert_eq!(scale_color(ODD, 100), ODD);
        assert_eq!(scale_color(ODD, 0), BLACK);
        assert_eq!(scale_color(palette::WHITE_RGB, 0), BLACK);
    }

    #[test]
    fn test_scale_color_truncates() {
        assert_eq!(
            scale_color(palette::WHITE_RGB, 50),
            Rgb {
                r: 127,
                g: 127,
                b: 127
            }
        );
        assert_eq!(
            scale_color(ODD, 5),
            Rgb {
                r: 10,
                g: 4,
                b: 0
            }
        );
    }

    #[test]
    #[should_panic(expected = "intensity")]
    fn test_scale_color_rejects_over_100() {
        let _ = scale_color(RED, 101);
    }
}

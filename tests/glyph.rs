mod tests {
    use neotext_matrix::bounds::TILE_SIZE;
    use neotext_matrix::glyph::{GLYPH_HEIGHT, Glyph, glyph_for, text_width};

    #[test]
    fn test_upper_a() {
        let glyph = glyph_for('A');
        assert_eq!(glyph.advance(), 8);
        assert_eq!(glyph.points().len(), 18);
        assert_eq!(glyph.points()[0], (0, 6));
        assert_eq!(glyph.points()[17], (6, 6));
    }

    #[test]
    fn test_charset_is_covered() {
        let charset = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789/?.!:;, ";
        for character in charset.chars() {
            let glyph = glyph_for(character);
            assert!(glyph.advance() > 0, "{character:?} has no advance");
            assert!(glyph.advance() <= 8, "{character:?} is too wide");
            for &(x, y) in glyph.points() {
                assert!(x < 8 && y < 8, "{character:?} has point ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_space_only_advances() {
        let space = glyph_for(' ');
        assert!(space.points().is_empty());
        assert_eq!(space.advance(), 1);
    }

    #[test]
    fn test_unknown_characters_are_empty() {
        for character in ['~', '\\', '#', 'é', '日', '\n'] {
            assert_eq!(glyph_for(character), Glyph::EMPTY);
        }
    }

    #[test]
    fn test_points_are_unique() {
        let comma = glyph_for(',');
        assert_eq!(comma.points(), &[(0, 6), (0, 7), (1, 5)]);
    }

    #[test]
    fn test_text_width() {
        assert_eq!(text_width(""), 0);
        assert_eq!(text_width("AB"), 14);
        assert_eq!(text_width("Hi!"), 6 + 2 + 2);
        assert_eq!(text_width("A~A"), 16);
    }

    #[test]
    fn test_glyphs_fit_one_tile() {
        for code in 0u8..128 {
            for &(x, y) in glyph_for(char::from(code)).points() {
                assert!(u16::from(x) < TILE_SIZE);
                assert!(y < GLYPH_HEIGHT);
            }
        }
    }

    #[test]
    #[should_panic(expected = "glyph column out of range")]
    fn test_glyph_column_past_the_tile() {
        let _ = Glyph::new(&[(8, 0)], 9);
    }
}

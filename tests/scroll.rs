mod tests {
    use embassy_time::{Duration, Instant};
    use neotext_matrix::color::{Rgb, palette};
    use neotext_matrix::scroll::{ScrollState, shift, wrap_width};
    use neotext_matrix::{
        Canvas, ChainBounds, FrameSink, MatrixConfig, Orientation, OutputDriver, PixelRecord,
        ScrollConfig, ScrollDirection, TextMatrix,
    };

    const WHITE: Rgb = palette::WHITE_RGB;

    #[derive(Default)]
    struct Capture {
        writes: usize,
    }

    impl OutputDriver for Capture {
        fn write(&mut self, _colors: &[Rgb]) {
            self.writes += 1;
        }
    }

    fn canvas_with_columns(columns: &[u16]) -> Canvas<16> {
        let mut canvas = Canvas::new();
        for &x in columns {
            assert!(canvas.set(PixelRecord::new(x, 0, WHITE)).is_ok());
        }
        canvas
    }

    fn columns(canvas: &Canvas<16>) -> Vec<u16> {
        canvas.iter().map(|pixel| pixel.x).collect()
    }

    const EVERY_100_MS: ScrollConfig = ScrollConfig {
        direction: ScrollDirection::Left,
        period: Duration::from_millis(100),
    };

    #[test]
    fn test_wrap_width_uses_the_wider_extent() {
        let bounds = ChainBounds::new(1);
        assert_eq!(wrap_width(&canvas_with_columns(&[]), bounds), 8);
        assert_eq!(wrap_width(&canvas_with_columns(&[2, 5]), bounds), 8);
        assert_eq!(wrap_width(&canvas_with_columns(&[2, 10]), bounds), 11);
    }

    #[test]
    fn test_left_step_past_the_display() {
        // Content reaches x = 10 on an 8 column display, so it wraps mod 11
        let mut canvas = canvas_with_columns(&[0, 3, 7, 8, 9, 10]);
        shift(&mut canvas, ChainBounds::new(1), ScrollDirection::Left);

        // 0 -> 10 and 10 -> 9 leave the display, 9 -> 8 lands on its edge
        assert_eq!(columns(&canvas), [2, 6, 7]);
    }

    #[test]
    fn test_visible_width_boundary() {
        let bounds = ChainBounds::new(1);

        // Landing on the last visible column keeps the pixel
        let mut canvas = canvas_with_columns(&[8, 12]);
        shift(&mut canvas, bounds, ScrollDirection::Left);
        assert_eq!(columns(&canvas), [7]);

        // Landing exactly on the visible width drops it
        let mut canvas = canvas_with_columns(&[9, 12]);
        shift(&mut canvas, bounds, ScrollDirection::Left);
        assert_eq!(columns(&canvas), Vec::<u16>::new());
    }

    #[test]
    fn test_right_step_wraps_to_first_column() {
        let mut canvas = canvas_with_columns(&[7, 10]);
        shift(&mut canvas, ChainBounds::new(1), ScrollDirection::Right);
        assert_eq!(columns(&canvas), [0]);
    }

    #[test]
    fn test_visible_content_rotates() {
        let mut canvas = canvas_with_columns(&[0, 4]);
        shift(&mut canvas, ChainBounds::new(1), ScrollDirection::Left);
        assert_eq!(columns(&canvas), [7, 3]);

        let mut canvas = canvas_with_columns(&[15]);
        shift(&mut canvas, ChainBounds::new(2), ScrollDirection::Right);
        assert_eq!(columns(&canvas), [0]);
    }

    #[test]
    fn test_far_columns_do_not_overflow() {
        let bounds = ChainBounds::new(1);

        let mut canvas = canvas_with_columns(&[40_000]);
        assert_eq!(wrap_width(&canvas, bounds), 40_001);
        shift(&mut canvas, bounds, ScrollDirection::Left);
        assert_eq!(columns(&canvas), Vec::<u16>::new());

        // The last column wraps to the first one
        let mut canvas = canvas_with_columns(&[u16::MAX]);
        assert_eq!(wrap_width(&canvas, bounds), 1 << 16);
        shift(&mut canvas, bounds, ScrollDirection::Right);
        assert_eq!(columns(&canvas), [0]);

        // Stepping left from the first column lands on the last one
        let mut canvas = canvas_with_columns(&[0, u16::MAX]);
        shift(&mut canvas, bounds, ScrollDirection::Left);
        assert!(canvas.is_empty());
    }

    #[test]
    fn test_shift_keeps_colors_and_rows() {
        let mut canvas = Canvas::<16>::new();
        let red = Rgb { r: 9, g: 0, b: 0 };
        let _ = canvas.set(PixelRecord::new(3, 5, red));
        shift(&mut canvas, ChainBounds::new(1), ScrollDirection::Right);
        assert_eq!(canvas.get(4, 5).map(|pixel| pixel.color), Some(red));
    }

    #[test]
    fn test_rate_limit() {
        let mut state = ScrollState::new(&EVERY_100_MS, Instant::from_millis(0));
        assert!(!state.poll(Instant::from_millis(50)));
        assert!(!state.poll(Instant::from_millis(99)));
        assert!(state.poll(Instant::from_millis(100)));
        assert_eq!(state.last_tick(), Instant::from_millis(100));
        assert!(!state.poll(Instant::from_millis(150)));
        assert!(state.poll(Instant::from_millis(260)));
        assert_eq!(state.next_deadline(), Instant::from_millis(360));
    }

    #[test]
    fn test_report_sleep_duration() {
        let state = ScrollState::new(&EVERY_100_MS, Instant::from_millis(1000));
        let report = state.report(false, Instant::from_millis(1040));
        assert!(!report.stepped);
        assert_eq!(report.next_deadline, Instant::from_millis(1100));
        assert_eq!(report.sleep_duration, Duration::from_millis(60));

        let late = state.report(false, Instant::from_millis(1500));
        assert_eq!(late.sleep_duration, Duration::from_millis(0));
    }

    #[test]
    fn test_direction_parse_from_str() {
        assert_eq!(
            ScrollDirection::parse_from_str("left"),
            Some(ScrollDirection::Left)
        );
        assert_eq!(
            ScrollDirection::parse_from_str("RIGHT"),
            Some(ScrollDirection::Right)
        );
        assert_eq!(ScrollDirection::parse_from_str("up"), None);
        assert_eq!(ScrollDirection::Right.as_str(), "right");
    }

    #[test]
    fn test_matrix_tick() {
        let config = MatrixConfig {
            tiles: 1,
            orientation: Orientation::Line,
            ..Default::default()
        };
        let mut matrix: TextMatrix<FrameSink<Capture, 64>, 64> =
            TextMatrix::new(FrameSink::new(Capture::default(), 64), &config);
        matrix.write("I", WHITE, 100);
        assert_eq!(matrix.sink().driver().writes, 1);

        // Nothing happens until scrolling starts
        assert!(matrix.tick(Instant::from_millis(500)).is_none());

        matrix.start_scroll(&EVERY_100_MS, Instant::from_millis(1000));
        assert!(matrix.is_scrolling());

        let early = matrix.tick(Instant::from_millis(1050));
        assert!(early.is_some_and(|tick| !tick.stepped));
        assert_eq!(matrix.sink().driver().writes, 1);
        assert!(matrix.canvas().iter().all(|pixel| pixel.x == 0));

        let due = matrix.tick(Instant::from_millis(1100));
        assert!(due.is_some_and(|tick| tick.stepped));
        assert_eq!(matrix.sink().driver().writes, 2);
        assert!(matrix.canvas().iter().all(|pixel| pixel.x == 7));
        assert_eq!(matrix.canvas().len(), 7);
        // Column 7, row 0 on a line tile
        assert_eq!(matrix.sink().frame()[63], WHITE);
        assert_eq!(matrix.sink().frame()[7], palette::BLACK_RGB);

        matrix.stop_scroll();
        assert!(matrix.tick(Instant::from_millis(5000)).is_none());
        assert_eq!(matrix.sink().driver().writes, 2);
    }
}

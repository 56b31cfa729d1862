mod tests {
    use neotext_matrix::math8::{PERCENT_MAX, percent8};

    #[test]
    fn test_percent8() {
        assert_eq!(percent8(255, PERCENT_MAX), 255);
        assert_eq!(percent8(255, 0), 0);
        assert_eq!(percent8(255, 5), 12);
        assert_eq!(percent8(200, 50), 100);
        assert_eq!(percent8(1, 99), 0);
        assert_eq!(percent8(0, 100), 0);
    }

    #[test]
    #[should_panic(expected = "intensity")]
    fn test_percent8_out_of_range() {
        let _ = percent8(10, 200);
    }
}

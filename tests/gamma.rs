mod tests {
    use rgbw_fader::gamma::{DRIVE_MAX, LEVEL_MAX, correct};

    #[test]
    fn test_correct_endpoints() {
        assert_eq!(correct(0), 0);
        assert_eq!(correct(LEVEL_MAX), DRIVE_MAX);
    }

    #[test]
    fn test_correct_known_values() {
        assert_eq!(correct(7), 1);
        assert_eq!(correct(16), 6);
        assert_eq!(correct(50), 147);
        assert_eq!(correct(99), 996);
    }

    #[test]
    fn test_correct_is_monotonic() {
        for level in 0..LEVEL_MAX {
            assert!(
                correct(level) <= correct(level + 1),
                "correction not monotonic at {level}"
            );
        }
    }

    #[test]
    fn test_correct_clamps_out_of_range() {
        assert_eq!(correct(101), DRIVE_MAX);
        assert_eq!(correct(255), DRIVE_MAX);
    }
}

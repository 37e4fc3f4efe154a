mod tests {
    use rgbw_fader::settings::{DEFAULT_FADE_DELAY_MS, Setting, fade_delay};
    use rgbw_fader::RejectReason;

    #[test]
    fn test_fade_delay_default() {
        let delay = fade_delay();
        assert_eq!(delay.get(), DEFAULT_FADE_DELAY_MS);
    }

    #[test]
    fn test_fade_delay_rejects_zero() {
        let delay = fade_delay();
        assert_eq!(delay.set(0), Err(RejectReason::InvalidConfig));
        assert_eq!(delay.get(), DEFAULT_FADE_DELAY_MS);
    }

    #[test]
    fn test_fade_delay_bounds_are_exclusive() {
        let delay = fade_delay();
        assert_eq!(delay.set(199), Ok(()));
        assert_eq!(delay.get(), 199);
        assert_eq!(delay.set(200), Err(RejectReason::InvalidConfig));
        assert_eq!(delay.get(), 199);
        assert_eq!(delay.set(1), Ok(()));
        assert_eq!(delay.get(), 1);
    }

    #[test]
    fn test_rejected_candidate_keeps_prior_value() {
        let delay = fade_delay();
        assert_eq!(delay.set(42), Ok(()));
        assert_eq!(delay.set(1000), Err(RejectReason::InvalidConfig));
        assert_eq!(delay.get(), 42);
    }

    #[test]
    fn test_setting_uses_registered_validator() {
        let even_only: Setting<u64> = Setting::new(2, |candidate| candidate % 2 == 0);
        assert_eq!(even_only.set(3), Err(RejectReason::InvalidConfig));
        assert_eq!(even_only.set(8), Ok(()));
        assert_eq!(even_only.get(), 8);
    }
}

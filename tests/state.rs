mod tests {
    use pixel_strand::{BrightnessRange, LightChange, LightState, StrandError};

    #[test]
    fn test_light_state_defaults() {
        let state = LightState::default();
        assert!(!state.power());
        assert_eq!(state.hue(), 0.0);
        assert_eq!(state.saturation(), 0.0);
        assert_eq!(state.brightness(), 100.0);
        assert_eq!(state.color_temperature(), 140.0);
    }

    #[test]
    fn test_light_state_normalizes() {
        let state = LightState::new()
            .with_hue(-30.0)
            .with_saturation(140.0)
            .with_brightness(-5.0)
            .with_color_temperature(1000.0);
        assert_eq!(state.hue(), 330.0);
        assert_eq!(state.saturation(), 100.0);
        assert_eq!(state.brightness(), 0.0);
        assert_eq!(state.color_temperature(), 500.0);

        let state = LightState::new()
            .with_saturation(f32::NAN)
            .with_color_temperature(f32::NAN);
        assert_eq!(state.saturation(), 0.0);
        assert_eq!(state.color_temperature(), 140.0);
    }

    #[test]
    fn test_light_change_applies_present_fields() {
        let mut state = LightState::new().with_hue(10.0);
        let change = LightChange {
            power: Some(true),
            saturation: Some(50.0),
            ..LightChange::default()
        };
        state.apply(&change);
        assert!(state.power());
        assert_eq!(state.hue(), 10.0);
        assert_eq!(state.saturation(), 50.0);
        assert_eq!(state.brightness(), 100.0);

    }

    #[test]
    fn test_brightness_range_apply() {
        let range = BrightnessRange::default();
        assert_eq!(range, BrightnessRange::DEFAULT);
        assert_eq!(range.apply(0.0), 5.0);
        assert_eq!(range.apply(100.0), 100.0);
        assert_eq!(range.apply(140.0), 100.0);
        assert_eq!(range.apply(63.6), 64.0);
        assert_eq!(range.apply(f32::NAN), 5.0);

        let coarse = BrightnessRange::new(0.0, 100.0, 10.0).unwrap();
        assert_eq!(coarse.apply(44.0), 40.0);
        assert_eq!(coarse.apply(46.0), 50.0);
        assert_eq!(coarse.apply(-3.0), 0.0);

        let uneven = BrightnessRange::new(5.0, 100.0, 10.0).unwrap();
        assert_eq!(uneven.apply(99.0), 95.0);
        assert_eq!(uneven.apply(100.0), 100.0);
    }

    #[test]
    fn test_brightness_range_validation() {
        assert_eq!(
            BrightnessRange::new(50.0, 40.0, 1.0),
            Err(StrandError::InvalidBrightnessRange)
        );
        assert_eq!(
            BrightnessRange::new(0.0, 120.0, 1.0),
            Err(StrandError::InvalidBrightnessRange)
        );
        assert_eq!(
            BrightnessRange::new(0.0, 100.0, 0.0),
            Err(StrandError::InvalidBrightnessRange)
        );
        assert_eq!(
            BrightnessRange::new(f32::NAN, 100.0, 1.0),
            Err(StrandError::InvalidBrightnessRange)
        );
        let range = BrightnessRange::new(10.0, 90.0, 5.0).unwrap();
        assert_eq!((range.min(), range.max(), range.step()), (10.0, 90.0, 5.0));
    }
}

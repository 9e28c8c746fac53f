//! Host-level tests for request normalization and the shared state cell.

use led_kit::{
    AtomicLedState, BrightnessPolicy, Error, LedColor, LedCommand, LedState, MAX_PATTERN_PHASES,
};

#[test]
fn empty_flash_is_a_no_op() {
    let normalized = LedCommand::normalize_flash(&[]).expect("empty is not an error");
    assert_eq!(normalized, None);
}

#[test]
fn single_nonzero_phase_degrades_to_on() {
    // A one-phase pattern is just "on": the LED ends up ON, not FLASHING.
    let normalized = LedCommand::normalize_flash(&[100]).expect("pattern fits");
    assert_eq!(normalized, Some(LedCommand::On));
    assert_eq!(LedCommand::On.target_state(), LedState::On);
}

#[test]
fn single_zero_phase_still_flashes() {
    let normalized = LedCommand::normalize_flash(&[0]).expect("pattern fits");
    let Some(LedCommand::Flash(pattern)) = normalized else {
        panic!("expected a flash command");
    };
    assert_eq!(pattern.phases(), &[0]);
}

#[test]
fn multi_phase_pattern_flashes() {
    let normalized = LedCommand::normalize_flash(&[100, 50, 500, 50]).expect("pattern fits");
    let Some(command) = normalized else {
        panic!("expected a command");
    };
    assert_eq!(command.target_state(), LedState::Flashing);
    let LedCommand::Flash(pattern) = command else {
        panic!("expected a flash command");
    };
    assert_eq!(pattern.phases(), &[100, 50, 500, 50]);
}

#[test]
fn oversized_pattern_is_rejected() {
    let phases = [10_u16; MAX_PATTERN_PHASES + 45];
    let error = LedCommand::normalize_flash(&phases).expect_err("too many phases");
    assert!(matches!(error, Error::PatternOverflow));
}

#[test]
fn target_states_cover_all_commands() {
    assert_eq!(LedCommand::Off.target_state(), LedState::Off);
    assert_eq!(LedCommand::On.target_state(), LedState::On);
}

#[test]
fn state_cell_starts_off() {
    let cell = AtomicLedState::new();
    assert_eq!(cell.load(), LedState::Off);
}

#[test]
fn state_cell_round_trips_every_state() {
    let cell = AtomicLedState::new();
    for state in [LedState::On, LedState::Flashing, LedState::Off] {
        cell.store(state);
        assert_eq!(cell.load(), state);
    }
}

#[test]
fn brightness_policy_defaults_to_immediate() {
    assert_eq!(BrightnessPolicy::default(), BrightnessPolicy::Immediate);
}

#[test]
fn color_encodings_match_rgb_nibbles() {
    assert_eq!(LedColor::Red.rgb12(), 0xf00);
    assert_eq!(LedColor::Green.rgb12(), 0x0f0);
    assert_eq!(LedColor::Blue.rgb12(), 0x00f);
    assert_eq!(LedColor::Yellow.rgb12(), 0xff0);
    assert_eq!(LedColor::Magenta.rgb12(), 0xf0f);
    assert_eq!(LedColor::Cyan.rgb12(), 0x0ff);
}

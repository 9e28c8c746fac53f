//! Host-level tests for pattern phase arithmetic.

use led_kit::{Error, FlashPattern, MAX_DUTY, MAX_PATTERN_PHASES, Polarity};

#[test]
fn from_slice_preserves_phases() {
    let pattern = FlashPattern::from_slice(&[100, 50, 500, 50]).expect("pattern fits");
    assert_eq!(pattern.phases(), &[100, 50, 500, 50]);
    assert_eq!(pattern.len(), 4);
    assert!(!pattern.is_empty());
}

#[test]
fn from_slice_accepts_full_capacity() {
    let phases = [10_u16; MAX_PATTERN_PHASES];
    let pattern = FlashPattern::from_slice(&phases).expect("255 phases fit");
    assert_eq!(pattern.len(), MAX_PATTERN_PHASES);
}

#[test]
fn from_slice_rejects_oversized_pattern() {
    let phases = [10_u16; MAX_PATTERN_PHASES + 1];
    let error = FlashPattern::from_slice(&phases).expect_err("256 phases do not fit");
    assert!(matches!(error, Error::PatternOverflow));
}

#[test]
fn default_pattern_is_empty() {
    assert!(FlashPattern::default().is_empty());
}

#[test]
fn even_phases_are_on() {
    assert!(FlashPattern::phase_is_on(0));
    assert!(!FlashPattern::phase_is_on(1));
    assert!(FlashPattern::phase_is_on(2));
    assert!(!FlashPattern::phase_is_on(3));
}

#[test]
fn phase_brightness_is_zero_on_off_phases() {
    assert_eq!(FlashPattern::phase_brightness(0, 0x80), 0x80);
    assert_eq!(FlashPattern::phase_brightness(1, 0x80), 0);
    assert_eq!(FlashPattern::phase_brightness(2, 0x80), 0x80);
}

#[test]
fn six_phase_duty_sequence_alternates_full_and_zero() {
    // Full-brightness active-high LED flashing [100; 6]: the writes are
    // 255,0,255,0,255,0 and the sequence repeats with no extra OFF write
    // between passes.
    let pattern = FlashPattern::from_slice(&[100; 6]).expect("pattern fits");
    let mut index = 0;
    let mut duties = Vec::new();
    for _ in 0..12 {
        duties.push(FlashPattern::phase_duty(index, MAX_DUTY, Polarity::ActiveHigh));
        index = pattern.next_phase(index);
    }
    assert_eq!(duties, [255, 0, 255, 0, 255, 0, 255, 0, 255, 0, 255, 0]);
}

#[test]
fn playback_order_repeats_indefinitely() {
    let pattern = FlashPattern::from_slice(&[100, 50, 500, 50]).expect("pattern fits");
    let mut index = 0;
    let mut order = Vec::new();
    for _ in 0..10 {
        order.push(index);
        index = pattern.next_phase(index);
    }
    assert_eq!(order, [0, 1, 2, 3, 0, 1, 2, 3, 0, 1]);
}

#[test]
fn single_phase_pattern_wraps_to_itself() {
    let pattern = FlashPattern::from_slice(&[0]).expect("pattern fits");
    assert_eq!(pattern.next_phase(0), 0);
    assert_eq!(pattern.phase_millis(0), Some(0));
    assert_eq!(pattern.phase_millis(1), None);
}

#[test]
fn zero_length_phases_wait_one_tick() {
    // An all-zero pattern must not spin the playback task: every phase
    // wait is at least one millisecond. Nonzero phases are unchanged.
    let pattern = FlashPattern::from_slice(&[0, 0, 100]).expect("pattern fits");
    assert_eq!(pattern.phase_wait_millis(0), 1);
    assert_eq!(pattern.phase_wait_millis(1), 1);
    assert_eq!(pattern.phase_wait_millis(2), 100);
}

#[test]
fn active_low_duty_sequence_is_complemented() {
    let pattern = FlashPattern::from_slice(&[100, 100]).expect("pattern fits");
    assert_eq!(FlashPattern::phase_duty(0, MAX_DUTY, Polarity::ActiveLow), 0);
    assert_eq!(
        FlashPattern::phase_duty(1, MAX_DUTY, Polarity::ActiveLow),
        MAX_DUTY
    );
    assert_eq!(pattern.next_phase(1), 0);
}

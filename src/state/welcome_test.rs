use super::*;

// =============================================================
// Typewriter sequence
// =============================================================

#[test]
fn starts_empty_and_types_forward() {
    let mut tw = Typewriter::new("abc");
    assert_eq!(tw.text(), "");
    tw.step();
    assert_eq!(tw.text(), "a");
    tw.step();
    tw.step();
    assert_eq!(tw.text(), "abc");
    assert!(!tw.is_done());
}

#[test]
fn full_cycle_reaches_target_then_empties_then_finishes() {
    let mut tw = Typewriter::new("hi");
    let mut reached_full = false;
    let mut steps = 0;
    while let Some(_delay) = tw.step() {
        if tw.text() == "hi" {
            reached_full = true;
        }
        steps += 1;
        assert!(steps < 100, "sequence must terminate");
    }
    assert!(reached_full);
    assert_eq!(tw.text(), "");
    assert!(tw.is_done());
    // Once done, further steps are inert.
    assert_eq!(tw.step(), None);
}

#[test]
fn typing_is_slower_than_deleting() {
    let mut tw = Typewriter::new("ab");
    let type_delay = tw.step().unwrap();
    tw.step(); // finish typing
    tw.step(); // pause frame
    tw.step(); // settle into deleting
    let delete_delay = tw.step().unwrap();
    assert!(type_delay > delete_delay);
}

#[test]
fn pause_frame_follows_full_text() {
    let mut tw = Typewriter::new("ab");
    assert_eq!(tw.step(), Some(100));
    assert_eq!(tw.step(), Some(100));
    assert_eq!(tw.text(), "ab");
    // Holding the full text before deletion starts.
    assert_eq!(tw.step(), Some(1_500));
}

#[test]
fn final_frame_signals_exit_delay() {
    let mut tw = Typewriter::new("a");
    assert_eq!(tw.step(), Some(100)); // "a"
    assert_eq!(tw.step(), Some(1_500)); // pause
    assert_eq!(tw.step(), Some(50)); // enter deleting
    assert_eq!(tw.step(), Some(500)); // delete last char, exit delay
    assert_eq!(tw.step(), None);
    assert!(tw.is_done());
}

#[test]
fn default_uses_welcome_headline() {
    let tw = Typewriter::default();
    assert_eq!(tw.text(), "");
    assert!(WELCOME_TEXT.is_ascii());
}

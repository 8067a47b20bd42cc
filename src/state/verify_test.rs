use super::*;

fn fill(state: &mut VerifyState, code: &str) -> Option<CodeCheck> {
    let mut completed = None;
    for (i, c) in code.chars().enumerate() {
        completed = state.input_digit(i, &c.to_string(), DEMO_CODE).completed;
    }
    completed
}

// =============================================================
// Input acceptance
// =============================================================

#[test]
fn rejects_non_digit_input() {
    let mut state = VerifyState::default();
    for value in ["a", "x", " ", "-", "."] {
        let outcome = state.input_digit(0, value, DEMO_CODE);
        assert!(!outcome.accepted, "{value:?} should be rejected");
    }
    assert_eq!(state.slot_text(0), "");
    assert_eq!(state.check(), CodeCheck::Unknown);
}

#[test]
fn rejects_multi_character_input() {
    let mut state = VerifyState::default();
    let outcome = state.input_digit(0, "12", DEMO_CODE);
    assert!(!outcome.accepted);
    assert_eq!(state.slot_text(0), "");
}

#[test]
fn rejects_out_of_range_slot() {
    let mut state = VerifyState::default();
    assert!(!state.input_digit(CODE_LEN, "1", DEMO_CODE).accepted);
}

#[test]
fn accepts_single_digit_and_advances_focus() {
    let mut state = VerifyState::default();
    let outcome = state.input_digit(0, "7", DEMO_CODE);
    assert!(outcome.accepted);
    assert_eq!(outcome.focus, Some(1));
    assert_eq!(outcome.completed, None);
    assert_eq!(state.slot_text(0), "7");
}

#[test]
fn last_slot_does_not_advance_focus() {
    let mut state = VerifyState::default();
    let outcome = state.input_digit(CODE_LEN - 1, "9", DEMO_CODE);
    assert!(outcome.accepted);
    assert_eq!(outcome.focus, None);
}

#[test]
fn empty_input_clears_slot_without_moving_focus() {
    let mut state = VerifyState::default();
    state.input_digit(2, "5", DEMO_CODE);
    let outcome = state.input_digit(2, "", DEMO_CODE);
    assert!(outcome.accepted);
    assert_eq!(outcome.focus, None);
    assert_eq!(state.slot_text(2), "");
}

// =============================================================
// Backspace focus moves
// =============================================================

#[test]
fn backspace_on_empty_slot_moves_focus_back() {
    let mut state = VerifyState::default();
    assert_eq!(state.backspace(3), Some(2));
}

#[test]
fn backspace_on_filled_slot_stays_put() {
    let mut state = VerifyState::default();
    state.input_digit(3, "4", DEMO_CODE);
    assert_eq!(state.backspace(3), None);
}

#[test]
fn backspace_on_first_slot_stays_put() {
    let mut state = VerifyState::default();
    assert_eq!(state.backspace(0), None);
}

// =============================================================
// Completion check
// =============================================================

#[test]
fn correct_code_is_valid() {
    let mut state = VerifyState::default();
    assert_eq!(fill(&mut state, "123456"), Some(CodeCheck::Valid));
    assert_eq!(state.check(), CodeCheck::Valid);
    assert_eq!(state.assembled().as_deref(), Some("123456"));
}

#[test]
fn wrong_code_is_invalid() {
    let mut state = VerifyState::default();
    assert_eq!(fill(&mut state, "123457"), Some(CodeCheck::Invalid));
    assert_eq!(state.check(), CodeCheck::Invalid);
}

#[test]
fn completion_only_fires_when_all_slots_filled() {
    let mut state = VerifyState::default();
    for (i, c) in "12345".chars().enumerate() {
        let outcome = state.input_digit(i, &c.to_string(), DEMO_CODE);
        assert_eq!(outcome.completed, None);
    }
    assert!(state.assembled().is_none());
}

#[test]
fn completion_fires_when_gap_is_filled_last() {
    let mut state = VerifyState::default();
    for (i, c) in "123456".chars().enumerate() {
        if i == 2 {
            continue;
        }
        state.input_digit(i, &c.to_string(), DEMO_CODE);
    }
    let outcome = state.input_digit(2, "3", DEMO_CODE);
    assert_eq!(outcome.completed, Some(CodeCheck::Valid));
    // Focus still advances past the slot that was just filled.
    assert_eq!(outcome.focus, Some(3));
}

#[test]
fn any_edit_resets_check_to_unknown() {
    let mut state = VerifyState::default();
    fill(&mut state, "123457");
    assert_eq!(state.check(), CodeCheck::Invalid);
    state.input_digit(5, "", DEMO_CODE);
    assert_eq!(state.check(), CodeCheck::Unknown);
}

#[test]
fn mismatch_reset_clears_slots_and_result() {
    let mut state = VerifyState::default();
    fill(&mut state, "654321");
    state.reset_after_mismatch();
    for i in 0..CODE_LEN {
        assert_eq!(state.slot_text(i), "");
    }
    assert_eq!(state.check(), CodeCheck::Unknown);
    assert!(state.assembled().is_none());
}

#[test]
fn check_code_is_pure_comparison() {
    assert_eq!(check_code("123456", "123456"), CodeCheck::Valid);
    assert_eq!(check_code("123457", "123456"), CodeCheck::Invalid);
    assert_eq!(check_code("", "123456"), CodeCheck::Invalid);
}

// =============================================================
// Navigation guard
// =============================================================

#[test]
fn navigation_fires_exactly_once() {
    let mut state = VerifyState::default();
    fill(&mut state, "123456");
    assert!(state.begin_navigation());
    assert!(!state.begin_navigation());
    assert!(!state.begin_navigation());
}

// =============================================================
// Resend countdown
// =============================================================

#[test]
fn countdown_starts_at_cooldown() {
    let state = VerifyState::default();
    assert_eq!(state.countdown(), RESEND_COOLDOWN_SECS);
    assert!(!state.can_resend());
}

#[test]
fn countdown_decreases_by_one_per_tick_and_never_goes_negative() {
    let mut state = VerifyState::default();
    for expected in (0..RESEND_COOLDOWN_SECS).rev() {
        state.tick();
        assert_eq!(state.countdown(), expected);
    }
    state.tick();
    state.tick();
    assert_eq!(state.countdown(), 0);
}

#[test]
fn resend_is_rejected_while_countdown_running() {
    let mut state = VerifyState::default();
    state.input_digit(0, "1", DEMO_CODE);
    assert!(!state.resend());
    assert_eq!(state.slot_text(0), "1");
    assert_eq!(state.countdown(), RESEND_COOLDOWN_SECS);
}

#[test]
fn resend_restarts_countdown_and_clears_entry() {
    let mut state = VerifyState::default();
    fill(&mut state, "999999");
    for _ in 0..RESEND_COOLDOWN_SECS {
        state.tick();
    }
    assert!(state.can_resend());
    assert!(state.resend());
    assert_eq!(state.countdown(), RESEND_COOLDOWN_SECS);
    assert!(!state.can_resend());
    assert_eq!(state.check(), CodeCheck::Unknown);
    assert!(state.assembled().is_none());
}

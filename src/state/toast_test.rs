use super::*;

// =============================================================
// Toast queue
// =============================================================

#[test]
fn push_assigns_increasing_ids() {
    let mut state = ToastState::default();
    let a = state.push("A", "first", ToastTone::Info);
    let b = state.push("B", "second", ToastTone::Success);
    assert!(b > a);
    assert_eq!(state.toasts.len(), 2);
}

#[test]
fn dismiss_removes_only_matching_toast() {
    let mut state = ToastState::default();
    let a = state.push("A", "", ToastTone::Info);
    let b = state.push("B", "", ToastTone::Destructive);
    state.dismiss(a);
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].id, b);
}

#[test]
fn dismiss_unknown_id_is_noop() {
    let mut state = ToastState::default();
    state.push("A", "", ToastTone::Info);
    state.dismiss(999);
    assert_eq!(state.toasts.len(), 1);
}

#[test]
fn ids_are_not_reused_after_dismissal() {
    let mut state = ToastState::default();
    let a = state.push("A", "", ToastTone::Info);
    state.dismiss(a);
    let b = state.push("B", "", ToastTone::Info);
    assert_ne!(a, b);
}

#[test]
fn tone_modifiers_are_distinct() {
    assert_ne!(ToastTone::Info.modifier(), ToastTone::Success.modifier());
    assert_ne!(ToastTone::Success.modifier(), ToastTone::Destructive.modifier());
}

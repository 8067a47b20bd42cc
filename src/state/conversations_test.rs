use super::*;

fn state_with(items: Vec<(&str, &str, bool, f64)>) -> ConversationsState {
    ConversationsState {
        items: items
            .into_iter()
            .map(|(id, title, pinned, created_at)| Conversation {
                id: id.to_owned(),
                title: title.to_owned(),
                pinned,
                created_at,
            })
            .collect(),
        active_id: String::new(),
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_seeds_demo_conversations() {
    let state = ConversationsState::default();
    assert_eq!(state.items.len(), 3);
    assert_eq!(state.active_id, "1");
    assert!(state.items[0].pinned);
}

// =============================================================
// Selection
// =============================================================

#[test]
fn select_switches_to_known_id() {
    let mut state = ConversationsState::default();
    state.select("2");
    assert_eq!(state.active_id, "2");
}

#[test]
fn select_ignores_unknown_id() {
    let mut state = ConversationsState::default();
    state.select("nope");
    assert_eq!(state.active_id, "1");
}

// =============================================================
// Pin / rename / remove
// =============================================================

#[test]
fn toggle_pin_flips_flag() {
    let mut state = state_with(vec![("a", "A", false, 1.0)]);
    state.toggle_pin("a");
    assert!(state.items[0].pinned);
    state.toggle_pin("a");
    assert!(!state.items[0].pinned);
}

#[test]
fn rename_trims_and_applies() {
    let mut state = state_with(vec![("a", "A", false, 1.0)]);
    assert!(state.rename("a", "  New title  "));
    assert_eq!(state.title_of("a"), Some("New title"));
}

#[test]
fn rename_rejects_blank_titles() {
    let mut state = state_with(vec![("a", "A", false, 1.0)]);
    assert!(!state.rename("a", "   "));
    assert_eq!(state.title_of("a"), Some("A"));
}

#[test]
fn rename_unknown_id_is_noop() {
    let mut state = state_with(vec![("a", "A", false, 1.0)]);
    assert!(!state.rename("b", "B"));
}

#[test]
fn remove_drops_conversation() {
    let mut state = state_with(vec![("a", "A", false, 1.0), ("b", "B", false, 2.0)]);
    state.remove("a");
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, "b");
}

// =============================================================
// Sort order
// =============================================================

#[test]
fn sorted_puts_pinned_first_then_newest() {
    let state = state_with(vec![
        ("old", "Old", false, 1.0),
        ("new", "New", false, 3.0),
        ("pinned_old", "Pinned", true, 2.0),
    ]);
    let order: Vec<_> = state.sorted().into_iter().map(|c| c.id).collect();
    assert_eq!(order, ["pinned_old", "new", "old"]);
}

#[test]
fn sorted_orders_pinned_among_themselves_by_recency() {
    let state = state_with(vec![
        ("p1", "P1", true, 1.0),
        ("p2", "P2", true, 5.0),
        ("u", "U", false, 9.0),
    ]);
    let order: Vec<_> = state.sorted().into_iter().map(|c| c.id).collect();
    assert_eq!(order, ["p2", "p1", "u"]);
}

use super::*;

// =============================================================
// Defaults and presets
// =============================================================

#[test]
fn chat_state_default_is_empty_square_single() {
    let state = ChatState::default();
    assert!(state.entries.is_empty());
    assert!(!state.generating);
    assert!(state.selected_style.is_none());
    assert!(state.reference_image.is_none());
    assert_eq!(state.selected_size, SIZE_PRESETS[0]);
    assert_eq!(state.image_count, 1);
}

#[test]
fn size_presets_match_offered_dimensions() {
    assert_eq!(SIZE_PRESETS.len(), 4);
    assert_eq!(SIZE_PRESETS[0].width, 1024);
    assert_eq!(SIZE_PRESETS[0].height, 1024);
    assert_eq!(SIZE_PRESETS[1].label, "Portrait (9:16)");
    assert_eq!(SIZE_PRESETS[2].aspect, "16:9");
}

#[test]
fn style_presets_have_unique_names() {
    for (i, a) in STYLE_PRESETS.iter().enumerate() {
        for b in &STYLE_PRESETS[i + 1..] {
            assert_ne!(a.name, b.name);
        }
    }
}

#[test]
fn image_count_is_clamped() {
    let mut state = ChatState::default();
    state.set_image_count(0);
    assert_eq!(state.image_count, MIN_IMAGE_COUNT);
    state.set_image_count(3);
    assert_eq!(state.image_count, 3);
    state.set_image_count(99);
    assert_eq!(state.image_count, MAX_IMAGE_COUNT);
}

// =============================================================
// Prompt assembly
// =============================================================

#[test]
fn final_prompt_without_style_is_unchanged() {
    let state = ChatState::default();
    assert_eq!(state.final_prompt("a red fox"), "a red fox");
}

#[test]
fn final_prompt_appends_style_suffix() {
    let mut state = ChatState::default();
    state.selected_style = Some(STYLE_PRESETS[1]);
    assert_eq!(state.final_prompt("a red fox"), "a red fox in Anime style");
}

// =============================================================
// Generation lifecycle
// =============================================================

#[test]
fn begin_generation_appends_pending_entry() {
    let mut state = ChatState::default();
    state.begin_generation("castle at dusk".to_owned());
    assert!(state.generating);
    assert_eq!(state.entries.len(), 1);
    assert_eq!(state.entries[0].prompt, "castle at dusk");
    assert_eq!(state.entries[0].status, GenerationStatus::Creating);
}

#[test]
fn complete_generation_resolves_last_entry() {
    let mut state = ChatState::default();
    state.selected_style = Some(STYLE_PRESETS[0]);
    state.begin_generation("castle at dusk".to_owned());
    state.complete_generation(
        "castle at dusk in Realistic style",
        vec!["https://img/1.png".to_owned(), "https://img/2.png".to_owned()],
        1_000.0,
    );

    assert!(!state.generating);
    let GenerationStatus::Completed(images) = &state.entries[0].status else {
        panic!("entry should be completed");
    };
    assert_eq!(images.len(), 2);
    assert_eq!(images[0].url, "https://img/1.png");
    assert_eq!(images[0].prompt, "castle at dusk in Realistic style");
    assert_eq!(images[0].style.as_deref(), Some("Realistic"));
    assert_eq!(images[0].size_label, "Square (1:1)");
    assert_ne!(images[0].id, images[1].id);
}

#[test]
fn complete_generation_clears_one_shot_selections() {
    let mut state = ChatState::default();
    state.selected_style = Some(STYLE_PRESETS[2]);
    state.reference_image = Some("blob:ref".to_owned());
    state.begin_generation("logo".to_owned());
    state.complete_generation("logo in Digital Art style", vec!["u".to_owned()], 0.0);
    assert!(state.selected_style.is_none());
    assert!(state.reference_image.is_none());
}

#[test]
fn fail_generation_rolls_back_pending_entry() {
    let mut state = ChatState::default();
    state.begin_generation("first".to_owned());
    state.complete_generation("first", vec!["u".to_owned()], 0.0);
    state.begin_generation("second".to_owned());
    state.fail_generation();

    assert!(!state.generating);
    assert_eq!(state.entries.len(), 1);
    assert_eq!(state.entries[0].prompt, "first");
}

#[test]
fn fail_generation_keeps_completed_entries() {
    let mut state = ChatState::default();
    state.begin_generation("only".to_owned());
    state.complete_generation("only", vec!["u".to_owned()], 0.0);
    // A stray failure with no pending entry must not eat completed work.
    state.fail_generation();
    assert_eq!(state.entries.len(), 1);
}

#[test]
fn clear_empties_transcript_and_selections() {
    let mut state = ChatState::default();
    state.selected_style = Some(STYLE_PRESETS[0]);
    state.reference_image = Some("blob:ref".to_owned());
    state.begin_generation("p".to_owned());
    state.complete_generation("p", vec!["u".to_owned()], 0.0);
    state.clear();
    assert!(state.entries.is_empty());
    assert!(state.selected_style.is_none());
    assert!(state.reference_image.is_none());
}

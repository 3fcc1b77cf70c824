use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn ui_state_default_dark_mode_off() {
    let state = UiState::default();
    assert!(!state.dark_mode);
    assert!(state.flipped.is_empty());
}

// =============================================================
// Card flip
// =============================================================

#[test]
fn toggle_flip_shows_the_back_face() {
    let mut state = UiState::default();
    state.toggle_flip(3);
    assert!(state.is_flipped(3));
}

#[test]
fn toggle_flip_twice_restores_original_membership() {
    let mut state = UiState::default();
    state.toggle_flip(3);
    state.toggle_flip(3);
    assert!(!state.is_flipped(3));
    assert!(state.flipped.is_empty());
}

#[test]
fn toggle_flip_round_trip_restores_whole_state() {
    let mut state = UiState::default();
    state.toggle_flip(5);
    state.toggle_flip(5);
    assert_eq!(state, UiState::default());
}

#[test]
fn flips_have_no_cross_card_coupling() {
    let mut state = UiState::default();
    state.toggle_flip(1);
    state.toggle_flip(2);
    state.toggle_flip(1);
    assert!(!state.is_flipped(1));
    assert!(state.is_flipped(2));
}

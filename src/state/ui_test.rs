use super::*;

#[test]
fn ui_state_defaults_to_light_expanded() {
    let state = UiState::default();
    assert!(!state.dark_mode);
    assert!(!state.sidebar_collapsed);
}

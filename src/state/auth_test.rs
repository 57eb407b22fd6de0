use super::*;
use crate::net::types::Role;

#[test]
fn default_state_is_anonymous_and_loading() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(state.access_token.is_none());
    assert!(state.loading);
    assert_eq!(state.epoch, 0);
}

#[test]
fn authenticated_tracks_user_presence() {
    let mut state = AuthState::default();
    assert!(!state.is_authenticated());
    state.user = Some(User {
        id: "u1".to_owned(),
        code: None,
        full_name: "A".to_owned(),
        email: "a@x.y".to_owned(),
        role: Role::Admin,
        is_active: true,
    });
    assert!(state.is_authenticated());
    assert_eq!(state.role(), Some(Role::Admin));
}

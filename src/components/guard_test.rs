use super::*;

#[test]
fn guard_redirects_replace_history() {
    // Redirects must not leave the guarded URL on the history stack.
    assert!(replace_options().replace);
}

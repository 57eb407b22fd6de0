use super::*;

#[test]
fn admin_sees_admin_module_only() {
    let items = items_for_role(Some(Role::Admin));
    assert!(items.iter().all(|i| i.path.starts_with("/app/admin")));
    assert_eq!(items.len(), 5);
}

#[test]
fn super_admin_sees_the_same_admin_items() {
    assert_eq!(items_for_role(Some(Role::SuperAdmin)).len(), items_for_role(Some(Role::Admin)).len());
}

#[test]
fn parent_and_student_share_the_student_module() {
    let student: Vec<_> = items_for_role(Some(Role::Student)).iter().map(|i| i.path).collect();
    let parent: Vec<_> = items_for_role(Some(Role::Parent)).iter().map(|i| i.path).collect();
    assert_eq!(student, parent);
    assert_eq!(student, vec!["/app/student"]);
}

#[test]
fn no_role_sees_nothing() {
    assert!(items_for_role(None).is_empty());
}

#[test]
fn unknown_role_sees_nothing() {
    assert!(items_for_role(Some(Role::Unknown)).is_empty());
}

#[test]
fn module_home_routes_each_role() {
    assert_eq!(module_home(Some(Role::Admin)), "/app/admin");
    assert_eq!(module_home(Some(Role::SuperAdmin)), "/app/admin");
    assert_eq!(module_home(Some(Role::Teacher)), "/app/teacher");
    assert_eq!(module_home(Some(Role::Parent)), "/app/student");
    assert_eq!(module_home(Some(Role::Compliance)), "/app/compliance");
}

#[test]
fn module_home_terminal_states() {
    assert_eq!(module_home(Some(Role::Unknown)), "/403");
    assert_eq!(module_home(None), "/login");
}

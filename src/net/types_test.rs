use super::*;

#[test]
fn role_parse_is_case_insensitive() {
    assert_eq!(Role::parse("admin"), Role::Admin);
    assert_eq!(Role::parse("ADMIN"), Role::Admin);
    assert_eq!(Role::parse("Admin"), Role::Admin);
    assert_eq!(Role::parse("super_admin"), Role::SuperAdmin);
    assert_eq!(Role::parse("teacher"), Role::Teacher);
    assert_eq!(Role::parse("PARENT"), Role::Parent);
    assert_eq!(Role::parse("compliance"), Role::Compliance);
}

#[test]
fn role_parse_garbage_is_unknown_not_error() {
    assert_eq!(Role::parse(""), Role::Unknown);
    assert_eq!(Role::parse("root"), Role::Unknown);
    assert_eq!(Role::parse("ADMIN "), Role::Unknown);
}

#[test]
fn role_serializes_canonical_uppercase() {
    let json = serde_json::to_string(&Role::SuperAdmin).unwrap();
    assert_eq!(json, "\"SUPER_ADMIN\"");
}

#[test]
fn user_deserializes_lowercase_role_to_canonical() {
    let user: User = serde_json::from_str(
        r#"{"id":"u1","code":"T001","full_name":"Alice","email":"a@example.com","role":"teacher","is_active":true}"#,
    )
    .unwrap();
    assert_eq!(user.role, Role::Teacher);
    // Re-serialization emits the canonical case.
    let out = serde_json::to_string(&user).unwrap();
    assert!(out.contains("\"role\":\"TEACHER\""));
}

#[test]
fn user_with_unrecognized_role_still_deserializes() {
    let user: User = serde_json::from_str(
        r#"{"id":"u2","full_name":"Bob","email":"b@example.com","role":"janitor","is_active":true}"#,
    )
    .unwrap();
    assert_eq!(user.role, Role::Unknown);
    assert!(user.code.is_none());
}

#[test]
fn login_data_round_trips() {
    let raw = r#"{"access_token":"at-1","refresh_token":"rt-1","user":{"id":"u1","full_name":"A","email":"a@x.y","role":"ADMIN","is_active":true}}"#;
    let data: LoginData = serde_json::from_str(raw).unwrap();
    assert_eq!(data.access_token, "at-1");
    assert_eq!(data.refresh_token, "rt-1");
    assert_eq!(data.user.role, Role::Admin);
}

#[test]
fn teacher_list_tolerates_missing_fields() {
    let list: TeacherList = serde_json::from_str(
        r#"{"teachers":[{"id":"t1","full_name":"C"}],"pagination":{"items_per_page":20,"total_items":1,"current_page":1,"total_pages":1}}"#,
    )
    .unwrap();
    assert_eq!(list.teachers.len(), 1);
    assert!(list.teachers[0].email.is_none());
    assert_eq!(list.pagination.total_items, 1);
}

#[test]
fn empty_list_payload_defaults() {
    let list: RoomList = serde_json::from_str("{}").unwrap();
    assert!(list.rooms.is_empty());
    assert_eq!(list.pagination.total_pages, 0);
}

use super::*;

fn record() -> StudentRecord {
    StudentRecord {
        id: "s1".to_owned(),
        code: None,
        full_name: "Tran Thi B".to_owned(),
        email: None,
        phone: None,
        guardian_phone: Some("0901234567".to_owned()),
        grade_level: Some("10".to_owned()),
        status: Some("ACTIVE".to_owned()),
    }
}

#[test]
fn row_shows_guardian_phone_and_placeholder_code() {
    let cells = row(&record()).cells;
    assert_eq!(cells[0], "-");
    assert_eq!(cells[3], "0901234567");
    assert_eq!(cells[4], "10");
}

#[test]
fn payload_carries_guardian_phone() {
    let body = payload(&edit_values(&record()));
    assert_eq!(body["guardian_phone"], "0901234567");
    assert!(body.get("email").is_none());
    assert_eq!(body["full_name"], "Tran Thi B");
}

use super::*;

fn record() -> TeacherRecord {
    TeacherRecord {
        id: "t1".to_owned(),
        code: Some("GV001".to_owned()),
        full_name: "Nguyen Van A".to_owned(),
        email: Some("a@educenter.vn".to_owned()),
        phone: None,
        is_school_teacher: true,
        school_name: Some("THPT Le Loi".to_owned()),
        employment_type: Some("PART_TIME".to_owned()),
        status: Some("ACTIVE".to_owned()),
        notes: None,
    }
}

#[test]
fn row_formats_missing_fields_safely() {
    let cells = row(&record()).cells;
    assert_eq!(cells[0], "GV001");
    assert_eq!(cells[1], "Nguyen Van A");
    assert_eq!(cells[3], ""); // no phone
    assert_eq!(cells[5], "ACTIVE");
}

#[test]
fn edit_values_prefill_every_field() {
    let values = edit_values(&record());
    assert_eq!(values.get("full_name").unwrap(), "Nguyen Van A");
    assert_eq!(values.get("is_school_teacher").unwrap(), "true");
    assert_eq!(values.get("school_name").unwrap(), "THPT Le Loi");
    assert_eq!(values.get("phone").unwrap(), "");
}

#[test]
fn payload_skips_empty_optionals_and_coerces_checkbox() {
    let mut values = edit_values(&record());
    values.insert("phone", "  ".to_owned());
    let body = payload(&values);
    assert_eq!(body["full_name"], "Nguyen Van A");
    assert!(body.get("phone").is_none());
    assert_eq!(body["is_school_teacher"], true);
    assert_eq!(body["employment_type"], "PART_TIME");
}

#[test]
fn payload_round_trips_through_edit_values() {
    let body = payload(&edit_values(&record()));
    assert_eq!(body["code"], "GV001");
    assert_eq!(body["status"], "ACTIVE");
    assert!(body.get("notes").is_none());
}

#[test]
fn form_requires_a_name() {
    let errors = crate::components::form_dialog::validate(&specs(), &HashMap::new());
    assert!(errors.contains_key("full_name"));
    assert_eq!(errors.len(), 1);
}

use super::*;

fn record() -> ClassRecord {
    ClassRecord {
        id: "c1".to_owned(),
        code: Some("ENG-10A".to_owned()),
        name: "English 10A".to_owned(),
        start_date: Some("2026-09-01".to_owned()),
        end_date: None,
        max_students: 25,
        status: Some("OPEN".to_owned()),
        price: 1_500_000.0,
        teacher_id: Some("t1".to_owned()),
    }
}

#[test]
fn row_formats_capacity_as_number() {
    let cells = row(&record()).cells;
    assert_eq!(cells[1], "English 10A");
    assert_eq!(cells[4], "25");
}

#[test]
fn payload_coerces_numeric_fields() {
    let body = payload(&edit_values(&record()));
    assert_eq!(body["max_students"], 25);
    assert_eq!(body["price"], 1_500_000.0);
    assert_eq!(body["start_date"], "2026-09-01");
    assert!(body.get("end_date").is_none());
}

#[test]
fn payload_drops_unparsable_numbers() {
    let mut values = edit_values(&record());
    values.insert("max_students", "lots".to_owned());
    let body = payload(&values);
    assert!(body.get("max_students").is_none());
}

use super::*;

fn record() -> Room {
    Room {
        id: "r1".to_owned(),
        name: "Room 101".to_owned(),
        capacity: 30,
        location: Some("Floor 1".to_owned()),
        status: Some("MAINTENANCE".to_owned()),
    }
}

#[test]
fn row_formats_all_columns() {
    let cells = row(&record()).cells;
    assert_eq!(cells, vec!["Room 101", "30", "Floor 1", "MAINTENANCE"]);
}

#[test]
fn payload_coerces_capacity() {
    let body = payload(&edit_values(&record()));
    assert_eq!(body["capacity"], 30);
    assert_eq!(body["status"], "MAINTENANCE");
}

#[test]
fn capacity_is_required_by_the_form() {
    let values = HashMap::from([("name", "Room 102".to_owned())]);
    let errors = crate::components::form_dialog::validate(&specs(), &values);
    assert!(errors.contains_key("capacity"));
}
